//! Canned column-wrapper snippets for editors to insert.

use crate::directive::{COLUMN, COLUMN_GROUP, SETTINGS_DELIM};

/// A `col` wrapper containing `columns` equally sized placeholder columns.
pub fn column_wrapper(columns: usize) -> String {
    let mut out = format!("````{COLUMN_GROUP}\n");
    for i in 0..columns {
        out.push_str(&format!(
            "```{COLUMN}\nflexGrow=1\n{SETTINGS_DELIM}\n# Column {i}\n```\n"
        ));
    }
    out.push_str("````\n");
    out
}

/// Wraps a selection (possibly empty) in a one-column group.
pub fn quick_wrapper(selection: &str) -> String {
    format!(
        "````{COLUMN_GROUP}\n```{COLUMN}\nflexGrow=1\n{SETTINGS_DELIM}\n{selection}\n```\n````\n"
    )
}

/// A bare `col-md` block around the selection, with a placeholder heading
/// when the selection is empty.
pub fn single_column(selection: &str) -> String {
    if selection.is_empty() {
        format!("```{COLUMN}\nflexGrow=1\n{SETTINGS_DELIM}\n# New Column\n\n```")
    } else {
        format!("```{COLUMN}\nflexGrow=1\n{SETTINGS_DELIM}\n{selection}\n```")
    }
}
