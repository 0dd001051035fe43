//! Fixed-point formatting for stepper labels.

/// Above this many places the scaled value no longer fits an f64 mantissa, so
/// rounding is left to the formatter.
const MAX_ROUNDED_PLACES: usize = 15;

/// Format `value` with exactly `decimal_places` fractional digits.
///
/// Ties round half away from zero (`2.5` -> `"3"`, `-2.5` -> `"-3"`). A
/// negative place count is treated as zero, and a result that rounds to zero
/// never carries a minus sign.
pub fn format_fixed(value: f64, decimal_places: i32) -> String {
    let places = usize::try_from(decimal_places).unwrap_or(0);
    format!("{:.*}", places, round_half_away(value, places))
}

fn round_half_away(value: f64, places: usize) -> f64 {
    if !value.is_finite() || places > MAX_ROUNDED_PLACES {
        return value;
    }
    let scale = 10f64.powi(places as i32);
    let scaled = value * scale;
    if !scaled.is_finite() {
        return value;
    }
    // f64::round already rounds half away from zero; adding 0.0 folds -0.0.
    scaled.round() / scale + 0.0
}
