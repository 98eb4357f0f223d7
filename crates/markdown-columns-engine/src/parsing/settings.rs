use std::collections::HashMap;

use crate::directive::{FENCE_CHAR, SETTINGS_DELIM};

/// Raw settings entries: key to optional value, keys in no particular
/// order. Unknown keys are retained; consumers read only the keys they
/// understand, so stray entries are harmless.
pub type SettingsMap = HashMap<String, Option<String>>;

/// Splits a captured block into its leading settings section and body.
///
/// The settings section ends at the first line that is exactly the `===`
/// delimiter. A backtick anywhere before that line opts the block out:
/// it then has no settings section and the body is the input verbatim.
pub fn split_settings(source: &str) -> (String, String) {
    split_settings_with(source, &[FENCE_CHAR], SETTINGS_DELIM)
}

/// [`split_settings`] with explicit opt-out characters and delimiter.
///
/// Scans lines in order. The opt-out check runs before the delimiter check
/// on each line, so a line that is both aborts via the opt-out (same
/// result either way). A delimiter line with nothing after it cannot be
/// split on `delimiter + "\n"` and also falls back to "no settings".
pub fn split_settings_with(
    source: &str,
    unallowed: &[char],
    delimiter: &str,
) -> (String, String) {
    'lines: for line in source.lines() {
        for &c in unallowed {
            if line.contains(c) {
                break 'lines;
            }
        }
        if line == delimiter {
            let marker = format!("{delimiter}\n");
            if let Some((settings, body)) = source.split_once(&marker) {
                return (settings.to_string(), body.to_string());
            }
            break 'lines;
        }
    }
    (String::new(), source.to_string())
}

/// Parses a settings section into a [`SettingsMap`].
///
/// Entries are separated by newlines or `;`, each split on the first `=`
/// with both sides trimmed. Later entries overwrite earlier ones. Entries
/// without a `=`, or with an empty key, are kept with an absent value so
/// consumers treat them as no-ops rather than failing the block.
pub fn parse_settings(settings: &str) -> SettingsMap {
    let mut map = SettingsMap::new();
    for entry in settings.lines().flat_map(|line| line.split(';')) {
        match entry.split_once('=') {
            Some((key, value)) if !key.trim().is_empty() => {
                map.insert(key.trim().to_string(), Some(value.trim().to_string()));
            }
            _ => {
                map.insert(entry.trim().to_string(), None);
            }
        }
    }
    map
}

/// Looks up a setting that actually carries a value.
pub fn setting<'a>(map: &'a SettingsMap, key: &str) -> Option<&'a str> {
    map.get(key).and_then(|v| v.as_deref())
}
