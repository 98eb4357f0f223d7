use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd, html};

use crate::layout::ResolvedStyle;

/// Element tree the list transformer operates on: rendered markdown
/// reduced to the structure column matching needs. Anything that is not a
/// list, item or text run is an opaque rendered block.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    List { ordered: bool, items: Vec<Node> },
    Item(Vec<Node>),
    Text(String),
    /// Opaque rendered content, passed through untouched.
    Block(String),
    /// A transformed column group, emitted in place of a `!!!col` item.
    Columns(Vec<ListColumn>),
}

/// One column produced from a nested-list item.
#[derive(Debug, Clone, PartialEq)]
pub struct ListColumn {
    pub style: ResolvedStyle,
    pub body: Vec<Node>,
}

impl Node {
    /// Concatenated descendant text, the tree equivalent of DOM
    /// `textContent`. Opaque blocks contribute nothing.
    pub fn text_content(&self) -> String {
        match self {
            Node::Text(text) => text.clone(),
            Node::Item(children) => children.iter().map(Node::text_content).collect(),
            Node::List { items, .. } => items.iter().map(Node::text_content).collect(),
            Node::Block(_) | Node::Columns(_) => String::new(),
        }
    }
}

fn options() -> Options {
    Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TABLES | Options::ENABLE_TASKLISTS
}

/// Parses markdown into the transformer's element tree.
pub fn tree_from_markdown(source: &str) -> Vec<Node> {
    let events: Vec<Event> = Parser::new_ext(source, options()).collect();
    tree_from_events(&events)
}

/// Builds the element tree from an already-parsed event stream.
pub fn tree_from_events(events: &[Event]) -> Vec<Node> {
    let mut i = 0;
    let mut out = vec![];
    while i < events.len() {
        match &events[i] {
            Event::Start(Tag::List(start)) => {
                let ordered = start.is_some();
                i += 1;
                out.push(Node::List {
                    ordered,
                    items: parse_items(events, &mut i),
                });
            }
            _ => out.push(Node::Block(capture_block(events, &mut i))),
        }
    }
    out
}

fn parse_items(events: &[Event], i: &mut usize) -> Vec<Node> {
    let mut items = vec![];
    while *i < events.len() {
        match &events[*i] {
            Event::Start(Tag::Item) => {
                *i += 1;
                items.push(parse_item(events, i));
            }
            Event::End(TagEnd::List(_)) => {
                *i += 1;
                break;
            }
            _ => *i += 1,
        }
    }
    items
}

/// Parses one list item. Inline content accumulates into text runs (the
/// leading paragraph of a loose item reads the same as a tight item's bare
/// text); nested lists become child lists; any other block content is
/// captured as an opaque block.
fn parse_item(events: &[Event], i: &mut usize) -> Node {
    let mut children = vec![];
    let mut run = String::new();
    let mut leading = true;

    fn flush(run: &mut String, children: &mut Vec<Node>) {
        if !run.is_empty() {
            children.push(Node::Text(std::mem::take(run)));
        }
    }

    while *i < events.len() {
        match &events[*i] {
            Event::End(TagEnd::Item) => {
                *i += 1;
                break;
            }
            Event::Text(text) => {
                run.push_str(text);
                *i += 1;
            }
            Event::Code(code) => {
                run.push_str(code);
                *i += 1;
            }
            Event::SoftBreak | Event::HardBreak => {
                run.push('\n');
                *i += 1;
            }
            Event::Start(Tag::List(start)) => {
                flush(&mut run, &mut children);
                let ordered = start.is_some();
                *i += 1;
                children.push(Node::List {
                    ordered,
                    items: parse_items(events, i),
                });
            }
            Event::Start(Tag::Paragraph) if leading => {
                *i += 1;
            }
            Event::End(TagEnd::Paragraph) if leading => {
                leading = false;
                flush(&mut run, &mut children);
                *i += 1;
            }
            // Inline formatting flattens into the text run, as DOM
            // textContent would read it.
            Event::Start(
                Tag::Emphasis | Tag::Strong | Tag::Strikethrough | Tag::Link { .. },
            ) => {
                *i += 1;
            }
            Event::End(
                TagEnd::Emphasis | TagEnd::Strong | TagEnd::Strikethrough | TagEnd::Link,
            ) => {
                *i += 1;
            }
            Event::TaskListMarker(_) | Event::InlineHtml(_) | Event::FootnoteReference(_) => {
                *i += 1;
            }
            _ => {
                flush(&mut run, &mut children);
                leading = false;
                children.push(Node::Block(capture_block(events, i)));
            }
        }
    }
    flush(&mut run, &mut children);
    Node::Item(children)
}

/// Consumes one event, or a balanced Start..End range, and renders it to
/// HTML.
fn capture_block(events: &[Event], i: &mut usize) -> String {
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
    let mut out = String::new();
    html::push_html(&mut out, events[start..*i].iter().cloned());
    out
}
