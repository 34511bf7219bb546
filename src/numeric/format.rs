// ============================================================================
// Number Formatting
// Plain-float renderings shared by both engines (ECMAScript number formats)
// ============================================================================
//
// Save files and UI code written against the original game expect the exact
// string shapes of `Number.prototype.toString/toFixed/toExponential/toPrecision`:
// exponents carry an explicit `+`, plain notation is used for 1e-6 <= |x| < 1e21,
// and the non-finite values print as `NaN`, `Infinity` and `-Infinity`.

/// Most fraction or significant digits any rendering produces, as with
/// `toFixed(100)`.
pub const MAX_FORMAT_DIGITS: usize = 100;

/// Textual sentinel for non-finite values, `None` for finite ones.
#[inline]
pub(crate) fn non_finite(value: f64) -> Option<&'static str> {
    if value.is_nan() {
        Some("NaN")
    } else if value == f64::INFINITY {
        Some("Infinity")
    } else if value == f64::NEG_INFINITY {
        Some("-Infinity")
    } else {
        None
    }
}

/// Splits Rust's `{:e}` output into mantissa and exponent text and rejoins it
/// with an explicit exponent sign.
fn with_signed_exponent(rendered: &str) -> String {
    match rendered.split_once('e') {
        Some((mantissa, exponent)) if exponent.starts_with('-') => format!("{mantissa}e{exponent}"),
        Some((mantissa, exponent)) => format!("{mantissa}e+{exponent}"),
        None => rendered.to_string(),
    }
}

/// Decimal exponent of the shortest round-trip rendering.
fn shortest_exponent(value: f64) -> i32 {
    format!("{value:e}")
        .split_once('e')
        .and_then(|(_, exponent)| exponent.parse().ok())
        .unwrap_or(0)
}

/// Shortest round-trip string, switching to exponential notation below 1e-6
/// and from 1e21 up.
pub fn number_to_string(value: f64) -> String {
    if let Some(text) = non_finite(value) {
        return text.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }
    let exponent = shortest_exponent(value);
    if (-6..21).contains(&exponent) {
        format!("{value}")
    } else {
        with_signed_exponent(&format!("{value:e}"))
    }
}

/// Fixed notation with `places` fractional digits; exponential beyond 1e21.
pub fn number_to_fixed(value: f64, places: usize) -> String {
    if let Some(text) = non_finite(value) {
        return text.to_string();
    }
    if value.abs() >= 1e21 {
        return number_to_string(value);
    }
    // negative zero renders unsigned
    let value = if value == 0.0 { 0.0 } else { value };
    let places = places.min(MAX_FORMAT_DIGITS);
    format!("{value:.places$}")
}

/// Exponential notation with `places` fractional mantissa digits.
pub fn number_to_exponential(value: f64, places: usize) -> String {
    if let Some(text) = non_finite(value) {
        return text.to_string();
    }
    let value = if value == 0.0 { 0.0 } else { value };
    let places = places.min(MAX_FORMAT_DIGITS);
    with_signed_exponent(&format!("{value:.places$e}"))
}

/// `precision` significant digits, fixed or exponential depending on magnitude.
pub fn number_to_precision(value: f64, precision: usize) -> String {
    if let Some(text) = non_finite(value) {
        return text.to_string();
    }
    let precision = precision.clamp(1, MAX_FORMAT_DIGITS);
    let value = if value == 0.0 { 0.0 } else { value };
    let rendered = format!("{value:.prec$e}", prec = precision - 1);
    let exponent: i32 = rendered
        .split_once('e')
        .and_then(|(_, exponent)| exponent.parse().ok())
        .unwrap_or(0);
    if exponent < -6 || exponent >= precision as i32 {
        with_signed_exponent(&rendered)
    } else {
        let places = (precision as i32 - 1 - exponent).max(0) as usize;
        format!("{value:.places$}")
    }
}
