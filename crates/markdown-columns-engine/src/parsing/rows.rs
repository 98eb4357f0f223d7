use crate::directive::{FENCE_CHAR, SETTINGS_DELIM};

/// Number of fence characters at the very start of a line.
fn leading_fence_len(line: &str) -> usize {
    line.chars().take_while(|&c| c == FENCE_CHAR).count()
}

/// Splits a group body into rows at bare `===` lines while tracking code
/// fences, so a delimiter inside a fenced block never splits a row.
///
/// Lines are fed one at a time; [`finish`](RowSplitter::finish) flushes the
/// final row. Only runs of three or more backticks count as fences, and a
/// fence closes only on a run of the same length, which keeps fences of
/// different lengths nested inside each other intact.
#[derive(Debug, Default)]
pub struct RowSplitter {
    open_fence_len: usize,
    current: Vec<String>,
    rows: Vec<String>,
}

impl RowSplitter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_line(&mut self, line: &str) {
        let count = leading_fence_len(line);
        let candidate = if count < 3 { 0 } else { count };

        // Note the asymmetry with settings extraction: a row boundary only
        // needs to start with the delimiter, not equal it.
        if self.open_fence_len == 0 && candidate == 0 && line.starts_with(SETTINGS_DELIM) {
            self.rows.push(self.current.join("\n"));
            self.current.clear();
            return;
        } else if self.open_fence_len == 0 {
            self.open_fence_len = candidate;
        } else if self.open_fence_len == candidate {
            self.open_fence_len = 0;
        }
        self.current.push(line.to_string());
    }

    /// Flushes the final row, which may be empty. A fence left open at end
    /// of input keeps its trailing lines attached to this row; that quirk
    /// is deliberate and not diagnosed.
    pub fn finish(mut self) -> Vec<String> {
        self.rows.push(self.current.join("\n"));
        self.rows
    }
}

/// Convenience wrapper over [`RowSplitter`]. Always returns at least one
/// row; a body without delimiter lines is a single row.
pub fn split_rows(body: &str) -> Vec<String> {
    let mut splitter = RowSplitter::new();
    for line in body.split('\n') {
        splitter.push_line(line);
    }
    splitter.finish()
}
