//! Small shared helpers for input clamping and display formatting.
//!
//! The engines assume their callers have already clamped raw slider input to
//! the legal range; these are the clamps the calling layer is expected to use.

/// Clamp a raw probability into [0, 1]. NaN maps to 0.
pub fn clamp_probability(p: f64) -> f64 {
    if p.is_nan() {
        return 0.0;
    }
    p.clamp(0.0, 1.0)
}

/// Clamp a raw percentage into [0, 100].
pub fn clamp_percent(v: i64) -> u8 {
    v.clamp(0, 100) as u8
}

/// Format a probability as a whole-number percent string, e.g. `0.725` -> `"72%"`.
pub fn format_percent(p: f64) -> String {
    format!("{:.0}%", p * 100.0)
}
