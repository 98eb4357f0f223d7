use crate::parsing::number::coerce_number;

use super::settings::{BorderSettings, ColumnSettings, GroupSettings};
use super::style::{LayoutConfig, ResolvedStyle};

const SCROLL: &str = "scroll";

/// Grow/basis/width for a span multiplier.
///
/// With a zero minimum width only the grow factor applies and columns
/// never wrap on width.
pub fn span_style(config: &LayoutConfig, span: f64) -> ResolvedStyle {
    let mut style = ResolvedStyle {
        flex_grow: Some(span),
        ..ResolvedStyle::default()
    };
    if config.min_column_width != 0.0 {
        let px = format!("{}px", config.min_column_width * span);
        style.flex_basis = Some(px.clone());
        style.width = Some(px);
    }
    style
}

/// Spans must be positive; anything else falls back to the default span.
pub fn parse_span(raw: &str, config: &LayoutConfig) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|span| span.is_finite() && *span > 0.0)
        .unwrap_or(config.default_span)
}

/// Resolves a single column's (`col-md`) settings.
///
/// The column element keeps its natural width; the enclosing row wrapper
/// is the one that adopts basis and width from the grow factor.
pub fn resolve_column(settings: &ColumnSettings, config: &LayoutConfig) -> ResolvedStyle {
    let mut style = ResolvedStyle::default();
    if let Some(raw) = &settings.flex_grow {
        let mut sized = span_style(config, parse_span(raw, config));
        sized.width = None;
        style = sized;
    }
    if let Some(height) = non_empty(&settings.height) {
        style.height = Some(height.to_string());
        style.overflow = Some(SCROLL.to_string());
    }
    if let Some(align) = &settings.text_align {
        style.text_align = Some(align.clone());
    }
    apply_border(&mut style, &settings.border);
    style
}

/// Height directive on a group. `Shortest` cannot resolve until every
/// column in the row has been rendered and measured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupHeight {
    Natural,
    Fixed(String),
    Shortest,
}

/// Resolves group settings into the style shared by every row wrapper,
/// plus the height directive the pipeline still has to act on.
pub fn resolve_group(settings: &GroupSettings) -> (ResolvedStyle, GroupHeight) {
    let mut style = ResolvedStyle::default();
    let height = match non_empty(&settings.height) {
        Some("shortest") => GroupHeight::Shortest,
        Some(height) => {
            style.height = Some(height.to_string());
            style.overflow = Some(SCROLL.to_string());
            GroupHeight::Fixed(height.to_string())
        }
        None => GroupHeight::Natural,
    };
    if let Some(align) = &settings.text_align {
        style.text_align = Some(align.clone());
    }
    apply_border(&mut style, &settings.border);
    (style, height)
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Size normalization for border width/radius/padding: bare non-zero
/// numbers get a `px` suffix, anything else passes through so callers can
/// supply their own units.
fn border_size(input: Option<&str>, default: &str) -> String {
    let Some(raw) = input else {
        return default.to_string();
    };
    match raw.parse::<f64>() {
        Ok(n) if n.is_finite() && n != 0.0 => format!("{raw}px"),
        _ => raw.to_string(),
    }
}

fn apply_border(style: &mut ResolvedStyle, border: &BorderSettings) {
    if !border.is_set() {
        return;
    }
    style.border_color = Some(border.color.clone().unwrap_or_else(|| "white".to_string()));
    style.border_style = Some(border.style.clone().unwrap_or_else(|| "solid".to_string()));
    style.border_width = Some(border_size(border.width.as_deref(), "1px"));
    style.border_radius = Some(border_size(border.radius.as_deref(), "0"));
    style.padding = Some(border_size(border.padding.as_deref(), "0"));
}

/// Box metrics reported by a rendering host, as CSS-style strings.
#[derive(Debug, Clone, PartialEq)]
pub struct Measured {
    pub height: String,
    pub line_height: String,
}

/// Shortest-column height over a row's measured children, in pixels.
///
/// Children whose measurements do not coerce to numbers are skipped; with
/// no usable measurement at all there is no height to apply.
pub fn shortest_height<'a, I>(measures: I) -> Option<f64>
where
    I: IntoIterator<Item = &'a Measured>,
{
    measures
        .into_iter()
        .filter_map(|m| Some(coerce_number(&m.height)? + coerce_number(&m.line_height)?))
        .fold(None, |acc, v| {
            Some(match acc {
                Some(shortest) => v.min(shortest),
                None => v,
            })
        })
}
