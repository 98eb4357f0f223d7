pub mod directive;
pub mod layout;
pub mod parsing;
pub mod render;
pub mod snippet;
pub mod transform;

// Re-export key types for easier usage
pub use layout::{
    BorderSettings, ColumnSettings, GroupHeight, GroupSettings, LayoutConfig, Measured,
    ResolvedStyle,
};
pub use parsing::{coerce_number, parse_settings, split_rows, split_settings};
pub use render::{
    GroupLayout, RenderedBlock, Renderer, RowLayout, SingleColumn, html::HtmlRenderer,
    render_group, render_single_column,
};
pub use transform::{Node, transform_columns, tree_from_markdown};
