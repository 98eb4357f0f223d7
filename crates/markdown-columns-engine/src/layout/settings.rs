use crate::parsing::settings::{SettingsMap, setting};

/// Border directives shared by group and single-column settings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BorderSettings {
    pub color: Option<String>,
    pub style: Option<String>,
    pub width: Option<String>,
    pub radius: Option<String>,
    pub padding: Option<String>,
}

impl BorderSettings {
    pub fn from_map(map: &SettingsMap) -> Self {
        Self {
            color: setting(map, "borderColor").map(str::to_string),
            style: setting(map, "borderStyle").map(str::to_string),
            width: setting(map, "borderWidth").map(str::to_string),
            radius: setting(map, "borderRadius").map(str::to_string),
            padding: setting(map, "borderPadding").map(str::to_string),
        }
    }

    /// A border is drawn only when at least one directive is present.
    pub fn is_set(&self) -> bool {
        self.color.is_some()
            || self.style.is_some()
            || self.width.is_some()
            || self.radius.is_some()
            || self.padding.is_some()
    }
}

/// Settings recognized on a single `col-md` block.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColumnSettings {
    /// Raw span value; parsed at resolution time so a bad number can fall
    /// back to the configured default span.
    pub flex_grow: Option<String>,
    pub height: Option<String>,
    pub text_align: Option<String>,
    pub border: BorderSettings,
}

impl ColumnSettings {
    pub fn from_map(map: &SettingsMap) -> Self {
        Self {
            flex_grow: setting(map, "flexGrow").map(str::to_string),
            height: setting(map, "height").map(str::to_string),
            text_align: setting(map, "textAlign").map(str::to_string),
            border: BorderSettings::from_map(map),
        }
    }
}

/// Settings recognized on a `col` group block.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroupSettings {
    pub height: Option<String>,
    pub text_align: Option<String>,
    /// Accepted and retained, but nothing consumes it.
    pub col_max: Option<String>,
    pub border: BorderSettings,
}

impl GroupSettings {
    pub fn from_map(map: &SettingsMap) -> Self {
        Self {
            height: setting(map, "height").map(str::to_string),
            text_align: setting(map, "textAlign").map(str::to_string),
            col_max: setting(map, "colMax").map(str::to_string),
            border: BorderSettings::from_map(map),
        }
    }
}
