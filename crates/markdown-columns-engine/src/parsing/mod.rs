pub mod number;
pub mod rows;
pub mod settings;

pub use number::coerce_number;
pub use rows::{RowSplitter, split_rows};
pub use settings::{SettingsMap, parse_settings, setting, split_settings, split_settings_with};
