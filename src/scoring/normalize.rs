//! Range normalization and decimal rounding

/// Score returned when a value cannot be placed on its range
pub const NEUTRAL_SCORE: f64 = 50.0;

/// Rescale `value` from `[min, max]` onto 0-100, clamped.
///
/// Degenerate ranges (`max <= min`, or any NaN bound) and NaN results fall
/// back to [`NEUTRAL_SCORE`]. Infinite values clamp like any other
/// out-of-range value.
#[must_use]
pub fn normalize(value: f64, min: f64, max: f64) -> f64 {
    if !(max > min) {
        return NEUTRAL_SCORE;
    }
    let normalized = 100.0 * (value - min) / (max - min);
    if normalized.is_nan() {
        return NEUTRAL_SCORE;
    }
    normalized.clamp(0.0, 100.0)
}

/// Round half away from zero to `decimals` places
#[must_use]
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10_f64.powi(i32::try_from(decimals).unwrap_or(0));
    (value * factor).round() / factor
}
