use pulldown_cmark::{CodeBlockKind, Event, Options, Parser, Tag, TagEnd, html};

use crate::directive;
use crate::layout::{LayoutConfig, ResolvedStyle};
use crate::transform::{ListColumn, Node, transform_columns, tree_from_events};

use super::{
    GroupLayout, RenderedBlock, Renderer, RowLayout, SingleColumn, render_group,
    render_single_column,
};

/// Markdown renderer built on pulldown-cmark.
///
/// Top-level fenced blocks whose info string is `col` or `col-md` recurse
/// into the column pipeline, lists go through the `!!!col` transformer,
/// and everything else renders to plain HTML. This host cannot measure
/// rendered output, so `height=shortest` stays unresolved here.
pub struct HtmlRenderer {
    config: LayoutConfig,
}

impl HtmlRenderer {
    pub fn new(config: LayoutConfig) -> Self {
        Self { config }
    }

    fn options() -> Options {
        Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TABLES | Options::ENABLE_TASKLISTS
    }

    /// Renders a whole document to HTML.
    pub fn render_document(&mut self, source: &str) -> String {
        self.render(source)
            .into_iter()
            .map(|block| block.html)
            .collect()
    }
}

impl Renderer for HtmlRenderer {
    fn render(&mut self, source: &str) -> Vec<RenderedBlock> {
        let events: Vec<Event> = Parser::new_ext(source, Self::options()).collect();
        let config = self.config;
        let mut out = vec![];
        let mut i = 0;
        while i < events.len() {
            match &events[i] {
                Event::Start(Tag::CodeBlock(CodeBlockKind::Fenced(info)))
                    if fence_name(info) == Some(directive::COLUMN_GROUP) =>
                {
                    let inner = fence_source(&events, &mut i);
                    let group = render_group(&inner, &config, self);
                    out.push(RenderedBlock {
                        html: group_html(&group),
                        column: None,
                        measured: None,
                    });
                }
                Event::Start(Tag::CodeBlock(CodeBlockKind::Fenced(info)))
                    if fence_name(info) == Some(directive::COLUMN) =>
                {
                    let inner = fence_source(&events, &mut i);
                    let column = render_single_column(&inner, &config, self);
                    out.push(RenderedBlock {
                        html: single_column_html(&column),
                        column: Some(column.style),
                        measured: None,
                    });
                }
                Event::Start(Tag::List(_)) => {
                    let nodes = tree_from_events(capture_range(&events, &mut i));
                    let nodes = transform_columns(nodes, &config);
                    out.push(RenderedBlock {
                        html: nodes_html(&nodes),
                        column: None,
                        measured: None,
                    });
                }
                _ => {
                    let range = capture_range(&events, &mut i);
                    let mut rendered = String::new();
                    html::push_html(&mut rendered, range.iter().cloned());
                    out.push(RenderedBlock {
                        html: rendered,
                        column: None,
                        measured: None,
                    });
                }
            }
        }
        out
    }
}

/// First word of a fence info string.
fn fence_name(info: &str) -> Option<&str> {
    info.split_whitespace().next()
}

/// Consumes a fenced code block and returns its inner text, with the
/// trailing newline the parser appends stripped.
fn fence_source(events: &[Event], i: &mut usize) -> String {
    *i += 1;
    let mut inner = String::new();
    while *i < events.len() {
        match &events[*i] {
            Event::End(TagEnd::CodeBlock) => {
                *i += 1;
                break;
            }
            Event::Text(text) => {
                inner.push_str(text);
                *i += 1;
            }
            _ => *i += 1,
        }
    }
    if inner.ends_with('\n') {
        inner.pop();
    }
    inner
}

/// Consumes one event, or a balanced Start..End range, and returns the
/// slice it covered.
fn capture_range<'a, 'b>(events: &'b [Event<'a>], i: &mut usize) -> &'b [Event<'a>] {
    let start = *i;
    let mut depth = 0i32;
    while *i < events.len() {
        match &events[*i] {
            Event::Start(_) => depth += 1,
            Event::End(_) => depth -= 1,
            _ => {}
        }
        *i += 1;
        if depth <= 0 {
            break;
        }
    }
    &events[start..*i]
}

fn style_attr(style: &ResolvedStyle) -> String {
    if style.is_empty() {
        return String::new();
    }
    format!(
        " style=\"{}\"",
        html_escape::encode_double_quoted_attribute(&style.css())
    )
}

/// A rendered `col-md` block as HTML.
pub fn single_column_html(column: &SingleColumn) -> String {
    format!("<div{}>{}</div>", style_attr(&column.style), column.html)
}

/// A rendered `col` group as HTML: one flex parent per row, one child
/// wrapper per column.
pub fn group_html(group: &GroupLayout) -> String {
    group.rows.iter().map(row_html).collect()
}

fn row_html(row: &RowLayout) -> String {
    let mut out = format!("<div class=\"columnParent\"{}>", style_attr(&row.style));
    for column in &row.columns {
        out.push_str(&format!(
            "<div class=\"columnChild\"{}>",
            style_attr(&column.style)
        ));
        if column.content_style.is_empty() {
            out.push_str(&column.block.html);
        } else {
            out.push_str(&format!(
                "<div{}>{}</div>",
                style_attr(&column.content_style),
                column.block.html
            ));
        }
        out.push_str("</div>");
    }
    out.push_str("</div>");
    out
}

/// A transformed element tree as HTML.
pub fn nodes_html(nodes: &[Node]) -> String {
    nodes.iter().map(node_html).collect()
}

fn node_html(node: &Node) -> String {
    match node {
        Node::Text(text) => html_escape::encode_text(text).into_owned(),
        Node::Block(rendered) => rendered.clone(),
        Node::List { ordered, items } => {
            let tag = if *ordered { "ol" } else { "ul" };
            format!("<{tag}>{}</{tag}>", nodes_html(items))
        }
        Node::Item(children) => format!("<li>{}</li>", nodes_html(children)),
        Node::Columns(columns) => {
            let mut out = String::from("<div class=\"columnParent\">");
            for ListColumn { style, body } in columns {
                out.push_str(&format!(
                    "<div class=\"columnChild\"{}>{}</div>",
                    style_attr(style),
                    nodes_html(body)
                ));
            }
            out.push_str("</div>");
            out
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn renderer() -> HtmlRenderer {
        HtmlRenderer::new(LayoutConfig {
            min_column_width: 100.0,
            default_span: 1.0,
        })
    }

    #[test]
    fn plain_markdown_renders_as_plain_html() {
        let html = renderer().render_document("# Hi\n\nsome text\n");
        assert_eq!(html, "<h1>Hi</h1>\n<p>some text</p>\n");
    }

    #[test]
    fn col_md_fence_becomes_a_styled_div() {
        let source = "```col-md\nflexGrow=2\n===\n# Hi\n```\n";
        let html = renderer().render_document(source);
        assert_eq!(
            html,
            "<div style=\"flex-grow:2;flex-basis:200px\"><h1>Hi</h1>\n</div>"
        );
    }

    #[test]
    fn col_fence_splits_rows_into_column_parents() {
        let source = "````col\nleft\n===\nright\n````\n";
        let html = renderer().render_document(source);
        assert_eq!(
            html,
            "<div class=\"columnParent\">\
             <div class=\"columnChild\" style=\"flex-grow:1;flex-basis:100px;width:100px\"><p>left</p>\n</div>\
             </div>\
             <div class=\"columnParent\">\
             <div class=\"columnChild\" style=\"flex-grow:1;flex-basis:100px;width:100px\"><p>right</p>\n</div>\
             </div>"
        );
    }

    #[test]
    fn row_wrapper_adopts_nested_column_sizing() {
        let source = "````col\n```col-md\nflexGrow=2\n===\nwide\n```\n````\n";
        let html = renderer().render_document(source);
        assert_eq!(
            html,
            "<div class=\"columnParent\">\
             <div class=\"columnChild\" style=\"flex-grow:2;flex-basis:200px;width:200px\">\
             <div style=\"flex-grow:2;flex-basis:200px\"><p>wide</p>\n</div>\
             </div></div>"
        );
    }

    #[test]
    fn group_settings_style_the_row_wrapper() {
        let source = "````col\nheight=10em;textAlign=center\n===\nbody\n````\n";
        let html = renderer().render_document(source);
        assert!(html.contains(
            "<div class=\"columnParent\" style=\"height:10em;overflow:scroll;text-align:center\">"
        ));
    }

    #[test]
    fn list_trigger_renders_a_column_group() {
        let source = "- !!!col\n    - 2 Label\n        - kept\n";
        let html = renderer().render_document(source);
        assert!(html.contains("<div class=\"columnParent\">"));
        assert!(html.contains(
            "<div class=\"columnChild\" style=\"flex-grow:2;flex-basis:200px;width:200px\">"
        ));
        assert!(!html.contains("Label"));
        assert!(html.contains("kept"));
    }

    #[test]
    fn ordinary_lists_pass_through() {
        let html = renderer().render_document("- one\n- two\n");
        assert_eq!(html, "<ul><li>one</li><li>two</li></ul>");
    }

    #[test]
    fn other_fences_are_untouched() {
        let html = renderer().render_document("```rust\nfn main() {}\n```\n");
        assert_eq!(
            html,
            "<pre><code class=\"language-rust\">fn main() {}\n</code></pre>\n"
        );
    }

    #[test]
    fn style_attributes_are_escaped() {
        let style = ResolvedStyle {
            height: Some("10px\" onload=\"x".to_string()),
            ..ResolvedStyle::default()
        };
        let attr = style_attr(&style);
        assert!(!attr.contains("onload=\"x"));
    }
}
