pub mod node;

pub use node::{ListColumn, Node, tree_from_events, tree_from_markdown};

use crate::directive;
use crate::layout::{LayoutConfig, span_style};

/// Transforms `!!!col` list declarations into column groups.
///
/// A pure tree-to-tree pass: list items whose text starts with the trigger
/// token are replaced by a [`Node::Columns`] group emitted as a sibling
/// right after the host list, which keeps its remaining items (and stays
/// present even when emptied). Everything else is passed through, with
/// non-matching items recursed into.
pub fn transform_columns(nodes: Vec<Node>, config: &LayoutConfig) -> Vec<Node> {
    let trigger = format!("{}{}", directive::TOKEN, directive::COLUMN_GROUP);
    transform_nodes(nodes, config, &trigger)
}

fn transform_nodes(nodes: Vec<Node>, config: &LayoutConfig, trigger: &str) -> Vec<Node> {
    let mut out = Vec::with_capacity(nodes.len());
    for node in nodes {
        match node {
            Node::List { ordered, items } => {
                let mut kept = vec![];
                let mut groups = vec![];
                for item in items {
                    if item.text_content().trim().starts_with(trigger) {
                        if let Node::Item(children) = item {
                            groups.push(build_columns(children, config, trigger));
                        }
                    } else if let Node::Item(children) = item {
                        kept.push(Node::Item(transform_nodes(children, config, trigger)));
                    } else {
                        kept.push(item);
                    }
                }
                out.push(Node::List {
                    ordered,
                    items: kept,
                });
                out.extend(groups);
            }
            Node::Item(children) => {
                out.push(Node::Item(transform_nodes(children, config, trigger)));
            }
            other => out.push(other),
        }
    }
    out
}

/// Builds a column group from a trigger item's children. The first nested
/// list supplies the columns; a trigger item without one produces an empty
/// group.
fn build_columns(children: Vec<Node>, config: &LayoutConfig, trigger: &str) -> Node {
    let nested = children.into_iter().find_map(|child| match child {
        Node::List { items, .. } => Some(items),
        _ => None,
    });
    let mut columns = vec![];
    if let Some(items) = nested {
        for item in items {
            let span = item_span(&item, config);
            let Node::Item(item_children) = item else {
                continue;
            };
            // Inner column groups transform before this one is finalized.
            let transformed = transform_nodes(item_children, config, trigger);
            columns.push(ListColumn {
                style: span_style(config, span),
                body: body_after_label(transformed),
            });
        }
    }
    Node::Columns(columns)
}

/// The leading whitespace-delimited token of the item's first text line is
/// its span; it is a directive, not content.
fn item_span(item: &Node, config: &LayoutConfig) -> f64 {
    item.text_content()
        .lines()
        .next()
        .unwrap_or("")
        .split_whitespace()
        .next()
        .and_then(|token| token.parse::<f64>().ok())
        .filter(|span| span.is_finite() && *span > 0.0)
        .unwrap_or(config.default_span)
}

/// Drops everything up to and including the first text node; the rest is
/// the column's rendered body.
fn body_after_label(children: Vec<Node>) -> Vec<Node> {
    let mut body = vec![];
    let mut after_text = false;
    for child in children {
        if after_text {
            body.push(child);
        } else if matches!(child, Node::Text(_)) {
            after_text = true;
        }
    }
    body
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn config() -> LayoutConfig {
        LayoutConfig {
            min_column_width: 100.0,
            default_span: 1.0,
        }
    }

    fn columns_of(nodes: &[Node]) -> &[ListColumn] {
        nodes
            .iter()
            .find_map(|n| match n {
                Node::Columns(columns) => Some(columns.as_slice()),
                _ => None,
            })
            .expect("no column group in transformed tree")
    }

    #[test]
    fn trigger_item_becomes_a_column_group() {
        let tree = tree_from_markdown("- !!!col\n    - 2 First\n    - 1 Second\n");
        let out = transform_columns(tree, &config());
        let columns = columns_of(&out);
        assert_eq!(columns.len(), 2);
        assert_eq!(columns[0].style.flex_grow, Some(2.0));
        assert_eq!(columns[0].style.width.as_deref(), Some("200px"));
        assert_eq!(columns[1].style.flex_grow, Some(1.0));
    }

    #[test]
    fn group_is_a_sibling_after_the_host_list() {
        let tree = tree_from_markdown("- plain\n- !!!col\n    - 1 A\n");
        let out = transform_columns(tree, &config());
        let Node::List { items, .. } = &out[0] else {
            panic!("expected the host list first");
        };
        assert_eq!(items.len(), 1, "trigger item leaves the list");
        assert!(matches!(out[1], Node::Columns(_)));
    }

    #[test]
    fn emptied_host_list_is_kept() {
        let tree = tree_from_markdown("- !!!col\n    - 1 A\n");
        let out = transform_columns(tree, &config());
        assert!(matches!(&out[0], Node::List { items, .. } if items.is_empty()));
    }

    #[test]
    fn label_text_is_discarded_and_body_kept() {
        let source = "- !!!col\n    - 2 Label\n      Body text\n        - kept\n";
        let out = transform_columns(tree_from_markdown(source), &config());
        let columns = columns_of(&out);
        assert_eq!(columns.len(), 1);
        assert_eq!(columns[0].style.flex_grow, Some(2.0));
        // The label run (span token included) is gone; the nested content
        // after it survives.
        assert!(!columns[0]
            .body
            .iter()
            .any(|n| matches!(n, Node::Text(t) if t.contains("Label"))));
        assert!(matches!(columns[0].body[0], Node::List { .. }));
    }

    #[test]
    fn non_numeric_span_falls_back_to_default() {
        let tree = tree_from_markdown("- !!!col\n    - plain words\n");
        let out = transform_columns(tree, &config());
        let columns = columns_of(&out);
        assert_eq!(columns[0].style.flex_grow, Some(1.0));
    }

    #[test]
    fn trigger_without_nested_list_yields_an_empty_group() {
        let tree = tree_from_markdown("- !!!col alone\n");
        let out = transform_columns(tree, &config());
        let columns = columns_of(&out);
        assert!(columns.is_empty());
    }

    #[test]
    fn non_matching_lists_are_recursed_but_unchanged() {
        let source = "- outer\n    - inner\n";
        let tree = tree_from_markdown(source);
        let out = transform_columns(tree.clone(), &config());
        assert_eq!(out, tree);
    }

    #[test]
    fn inner_groups_transform_before_the_outer_one() {
        let source = "\
- !!!col
    - 1 Outer
        - !!!col
            - 1 Inner
";
        let out = transform_columns(tree_from_markdown(source), &config());
        let outer = columns_of(&out);
        assert_eq!(outer.len(), 1);
        // The inner trigger list transformed inside the outer column body.
        assert!(outer[0]
            .body
            .iter()
            .any(|n| matches!(n, Node::Columns(_))));
    }
}
