/// Pulls a float out of a value that may carry units, e.g. `"23.5px"`.
///
/// Everything outside `0123456789.` is stripped before parsing. `None` is
/// the not-a-number sentinel; callers fall back to a default or pass the
/// raw string through, they never fail the block.
pub fn coerce_number(raw: &str) -> Option<f64> {
    let filtered: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    filtered.parse().ok()
}
