//! Literal tokens of the column mini-language.

/// Fence info string declaring a column group.
pub const COLUMN_GROUP: &str = "col";
/// Fence info string declaring a single column.
pub const COLUMN: &str = "col-md";
/// Prefix marking a list item as a column-group declaration.
pub const TOKEN: &str = "!!!";
/// Separates a leading settings section from body content. Bare delimiter
/// lines inside a group body are also the row boundaries.
pub const SETTINGS_DELIM: &str = "===";
/// The character a code fence is made of.
pub const FENCE_CHAR: char = '`';
