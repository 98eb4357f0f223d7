//! End-to-end coverage of the block pipeline: raw directive source in,
//! resolved (content, style) tree out.

use markdown_columns_engine::{
    HtmlRenderer, LayoutConfig, Measured, RenderedBlock, Renderer, render_group,
    render_single_column, split_settings,
};
use pretty_assertions::assert_eq;

fn config() -> LayoutConfig {
    LayoutConfig {
        min_column_width: 100.0,
        default_span: 1.0,
    }
}

/// Measuring host double: renders one block per row and reports canned
/// box metrics for each, the way a mounted host would after layout.
struct MeasuringRenderer {
    measurements: Vec<Measured>,
}

impl Renderer for MeasuringRenderer {
    fn render(&mut self, source: &str) -> Vec<RenderedBlock> {
        source
            .lines()
            .filter(|line| !line.is_empty())
            .enumerate()
            .map(|(i, line)| RenderedBlock {
                html: format!("<p>{line}</p>"),
                column: None,
                measured: self.measurements.get(i).cloned(),
            })
            .collect()
    }
}

#[test]
fn col_md_block_resolves_grow_and_body() {
    let mut renderer = HtmlRenderer::new(config());
    let column = render_single_column("flexGrow=2\n===\n# Hi", &config(), &mut renderer);
    assert_eq!(column.style.flex_grow, Some(2.0));
    assert_eq!(column.style.flex_basis.as_deref(), Some("200px"));
    assert_eq!(column.html, "<h1>Hi</h1>\n");
}

#[test]
fn settings_and_body_partition_the_block() {
    let source = "flexGrow=2\n===\n# Hi";
    let (settings, body) = split_settings(source);
    assert_eq!(format!("{settings}===\n{body}"), source);
    assert_eq!(body, "# Hi");
}

#[test]
fn group_with_fenced_row_content_keeps_the_fence_whole() {
    // The backtick on the first line opts out of settings extraction, and
    // the delimiter inside the 4-backtick fence is not a row boundary.
    let source = "````\n===\n````";
    let mut renderer = HtmlRenderer::new(config());
    let group = render_group(source, &config(), &mut renderer);
    assert_eq!(group.rows.len(), 1);
    assert!(group.rows[0].columns[0].block.html.contains("==="));
}

#[test]
fn shortest_height_applies_after_all_rows_measure() {
    let mut renderer = MeasuringRenderer {
        measurements: vec![
            Measured {
                height: "120px".to_string(),
                line_height: "24px".to_string(),
            },
            Measured {
                height: "36px".to_string(),
                line_height: "24px".to_string(),
            },
        ],
    };
    let group = render_group("height=shortest\n===\ntall\nshort", &config(), &mut renderer);
    let row = &group.rows[0];
    assert!(!row.shortest);
    for column in &row.columns {
        assert_eq!(column.content_style.height.as_deref(), Some("60px"));
        assert_eq!(column.content_style.overflow.as_deref(), Some("scroll"));
    }
}

#[test]
fn unmeasured_host_leaves_shortest_pending() {
    let mut renderer = HtmlRenderer::new(config());
    let group = render_group("height=shortest\n===\nbody", &config(), &mut renderer);
    assert!(group.rows[0].shortest);
    assert!(group.rows[0].columns[0].content_style.is_empty());
}

#[test]
fn borders_resolve_with_defaults_at_group_level() {
    let mut renderer = HtmlRenderer::new(config());
    let group = render_group("borderStyle=dashed\n===\nbody", &config(), &mut renderer);
    let style = &group.rows[0].style;
    assert_eq!(style.border_style.as_deref(), Some("dashed"));
    assert_eq!(style.border_color.as_deref(), Some("white"));
    assert_eq!(style.border_width.as_deref(), Some("1px"));
}

#[test]
fn malformed_settings_never_fail_the_block() {
    let mut renderer = HtmlRenderer::new(config());
    let source = "garbage;;=\nflexGrow=oops\n===\nstill renders";
    let column = render_single_column(source, &config(), &mut renderer);
    // Unparsable flexGrow falls back to the default span.
    assert_eq!(column.style.flex_grow, Some(1.0));
    assert_eq!(column.html, "<p>still renders</p>\n");
}

#[test]
fn rerendering_recomputes_identically_from_scratch() {
    let source = "textAlign=center\n===\nA\n===\nB";
    let mut renderer = HtmlRenderer::new(config());
    let first = render_group(source, &config(), &mut renderer);
    let second = render_group(source, &config(), &mut renderer);
    assert_eq!(first, second);
}
