/// Externally supplied layout parameters, passed explicitly into every
/// resolution call. There is no ambient default scope.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutConfig {
    /// Minimum column width in pixels before a row wraps. Zero disables
    /// width-based wrapping entirely.
    pub min_column_width: f64,
    /// Span multiplier used when a column does not declare one.
    pub default_span: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            min_column_width: 100.0,
            default_span: 1.0,
        }
    }
}

/// Final style attributes for one column or group wrapper.
///
/// Computed once per render pass and never patched afterwards; a re-render
/// recomputes from scratch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolvedStyle {
    pub flex_grow: Option<f64>,
    pub flex_basis: Option<String>,
    pub width: Option<String>,
    pub height: Option<String>,
    pub overflow: Option<String>,
    pub text_align: Option<String>,
    pub border_color: Option<String>,
    pub border_style: Option<String>,
    pub border_width: Option<String>,
    pub border_radius: Option<String>,
    pub padding: Option<String>,
}

impl ResolvedStyle {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Inline CSS declaration list with a fixed property order.
    pub fn css(&self) -> String {
        let mut out: Vec<String> = vec![];
        if let Some(grow) = self.flex_grow {
            out.push(format!("flex-grow:{grow}"));
        }
        if let Some(basis) = &self.flex_basis {
            out.push(format!("flex-basis:{basis}"));
        }
        if let Some(width) = &self.width {
            out.push(format!("width:{width}"));
        }
        if let Some(height) = &self.height {
            out.push(format!("height:{height}"));
        }
        if let Some(overflow) = &self.overflow {
            out.push(format!("overflow:{overflow}"));
        }
        if let Some(align) = &self.text_align {
            out.push(format!("text-align:{align}"));
        }
        if let Some(color) = &self.border_color {
            out.push(format!("border-color:{color}"));
        }
        if let Some(style) = &self.border_style {
            out.push(format!("border-style:{style}"));
        }
        if let Some(width) = &self.border_width {
            out.push(format!("border-width:{width}"));
        }
        if let Some(radius) = &self.border_radius {
            out.push(format!("border-radius:{radius}"));
        }
        if let Some(padding) = &self.padding {
            out.push(format!("padding:{padding}"));
        }
        out.join(";")
    }
}
