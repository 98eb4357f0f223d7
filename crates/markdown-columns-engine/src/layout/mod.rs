pub mod resolve;
pub mod settings;
pub mod style;

pub use resolve::{
    GroupHeight, Measured, parse_span, resolve_column, resolve_group, shortest_height, span_style,
};
pub use settings::{BorderSettings, ColumnSettings, GroupSettings};
pub use style::{LayoutConfig, ResolvedStyle};
