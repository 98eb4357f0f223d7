pub mod html;

use crate::layout::{
    ColumnSettings, GroupHeight, GroupSettings, LayoutConfig, Measured, ResolvedStyle,
    resolve_column, resolve_group, shortest_height, span_style,
};
use crate::parsing::rows::split_rows;
use crate::parsing::settings::{parse_settings, split_settings};

/// One top-level element produced by the markdown renderer for a row.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderedBlock {
    /// Rendered content, opaque to layout.
    pub html: String,
    /// Set when the block is itself a nested `col-md` column; a row
    /// wrapper around a sized column adopts its sizing.
    pub column: Option<ResolvedStyle>,
    /// Box metrics, when the host can measure rendered output.
    pub measured: Option<Measured>,
}

/// The external markdown-to-content collaborator.
///
/// One call per row; the result is the row's ordered top-level blocks,
/// each of which becomes one column.
pub trait Renderer {
    fn render(&mut self, source: &str) -> Vec<RenderedBlock>;
}

/// A rendered `col-md` block: resolved style plus rendered body.
#[derive(Debug, Clone, PartialEq)]
pub struct SingleColumn {
    pub style: ResolvedStyle,
    pub html: String,
}

/// One column wrapper inside a row.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnLayout {
    /// Sizing of the wrapper itself.
    pub style: ResolvedStyle,
    /// Styling for the rendered content element, used by the shortest
    /// height mode which clamps content rather than the wrapper.
    pub content_style: ResolvedStyle,
    pub block: RenderedBlock,
}

/// One row of columns; carries the group-level style.
#[derive(Debug, Clone, PartialEq)]
pub struct RowLayout {
    pub style: ResolvedStyle,
    pub columns: Vec<ColumnLayout>,
    /// True while a `height=shortest` directive is still waiting on
    /// measurements.
    pub shortest: bool,
}

impl RowLayout {
    /// Completes the `height=shortest` barrier.
    ///
    /// Returns false until every column has been rendered and measured;
    /// the height applies to all children at once or not at all.
    pub fn resolve_shortest_height(&mut self) -> bool {
        if !self.shortest {
            return false;
        }
        let measures: Option<Vec<&Measured>> = self
            .columns
            .iter()
            .map(|c| c.block.measured.as_ref())
            .collect();
        let Some(measures) = measures else {
            return false;
        };
        let Some(px) = shortest_height(measures.into_iter()) else {
            return false;
        };
        for column in &mut self.columns {
            column.content_style.height = Some(format!("{px}px"));
            column.content_style.overflow = Some("scroll".to_string());
        }
        self.shortest = false;
        true
    }
}

/// A fully laid out column group: ordered rows of (content, style) pairs.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupLayout {
    pub rows: Vec<RowLayout>,
}

/// Renders a `col-md` block: settings split off, body through the
/// collaborator, settings resolved into one style.
pub fn render_single_column(
    source: &str,
    config: &LayoutConfig,
    renderer: &mut dyn Renderer,
) -> SingleColumn {
    let (settings_text, body) = split_settings(source);
    let settings = ColumnSettings::from_map(&parse_settings(&settings_text));
    let style = resolve_column(&settings, config);
    let html = renderer
        .render(&body)
        .into_iter()
        .map(|block| block.html)
        .collect();
    SingleColumn { style, html }
}

/// Renders a `col` group: settings split off, the body split into rows,
/// one column wrapper per rendered top-level block, group styling applied
/// to every row wrapper.
pub fn render_group(
    source: &str,
    config: &LayoutConfig,
    renderer: &mut dyn Renderer,
) -> GroupLayout {
    let (settings_text, body) = split_settings(source);
    let settings = GroupSettings::from_map(&parse_settings(&settings_text));
    let (row_style, height) = resolve_group(&settings);
    let shortest = height == GroupHeight::Shortest;

    let mut rows = vec![];
    for row_source in split_rows(&body) {
        let columns = renderer
            .render(&row_source)
            .into_iter()
            .map(|block| ColumnLayout {
                style: wrapper_style(&block, config),
                content_style: ResolvedStyle::default(),
                block,
            })
            .collect();
        let mut row = RowLayout {
            style: row_style.clone(),
            columns,
            shortest,
        };
        if shortest {
            // All of the row's children have rendered by this point; the
            // height still stays pending when the host cannot measure.
            row.resolve_shortest_height();
        }
        rows.push(row);
    }
    GroupLayout { rows }
}

/// A wrapper around a nested column that already declares a grow factor
/// adopts that sizing; every other wrapper gets the default span.
fn wrapper_style(block: &RenderedBlock, config: &LayoutConfig) -> ResolvedStyle {
    match &block.column {
        Some(nested) if nested.flex_grow.is_some() => ResolvedStyle {
            flex_grow: nested.flex_grow,
            flex_basis: nested.flex_basis.clone(),
            width: nested.flex_basis.clone(),
            ..ResolvedStyle::default()
        },
        _ => span_style(config, config.default_span),
    }
}
