// Small text helpers.

/// Human wording for a millisecond delay, e.g. "2 seconds" or "1.5 seconds".
pub fn format_delay(ms: u32) -> String {
    let secs = ms as f64 / 1000.0;
    let num = if ms % 1000 == 0 {
        format!("{}", ms / 1000)
    } else {
        format!("{}", (secs * 10.0).round() / 10.0)
    };
    if ms == 1000 {
        format!("{} second", num)
    } else {
        format!("{} seconds", num)
    }
}
