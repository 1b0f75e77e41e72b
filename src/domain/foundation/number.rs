//! Display formatting for backend-supplied JSON numbers.

use serde_json::Number;

/// Largest magnitude at which every integral f64 is exactly representable.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Magnitudes at or above this switch to exponent notation.
const EXPONENT_UPPER: f64 = 1e21;

/// Nonzero magnitudes below this switch to exponent notation.
const EXPONENT_LOWER: f64 = 1e-6;

/// Formats a JSON number the way a browser shows it in text.
///
/// Integers print as written. Floats with no fractional part print without
/// the trailing `.0` (`82.0` shows as `82`), everything else uses the
/// shortest round-trip representation. Floats at or above `1e21` or below
/// `1e-6` in magnitude use exponent notation with a signed exponent
/// (`1e+21`, `1.5e-7`).
pub fn display_number(number: &Number) -> String {
    if number.is_i64() || number.is_u64() {
        return number.to_string();
    }

    match number.as_f64() {
        Some(value) if value.fract() == 0.0 && value.abs() <= MAX_SAFE_INTEGER => {
            format!("{}", value as i64)
        }
        Some(value) if needs_exponent(value) => exponent_notation(value),
        Some(value) => format!("{}", value),
        None => number.to_string(),
    }
}

fn needs_exponent(value: f64) -> bool {
    let magnitude = value.abs();
    let tiny = magnitude != 0.0 && magnitude < EXPONENT_LOWER;
    value.is_finite() && (magnitude >= EXPONENT_UPPER || tiny)
}

fn exponent_notation(value: f64) -> String {
    let formatted = format!("{:e}", value);
    match formatted.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{}e+{}", mantissa, exponent)
        }
        _ => formatted,
    }
}
