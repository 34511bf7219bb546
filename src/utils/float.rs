// ============================================================================
// Float Helpers
// Power-of-ten table and f64 primitives shared by both engines
// ============================================================================

use std::sync::LazyLock;

/// Smallest decimal exponent with an exact `f64` power of ten in the table.
pub const NUMBER_EXP_MIN: i32 = -324;

/// Largest decimal exponent an `f64` can hold.
pub const NUMBER_EXP_MAX: i32 = 308;

/// 2^53 - 1, the largest integer every `f64` below it represents exactly.
pub const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

const TABLE_OFFSET: i32 = 323;

/// 10^-323 ..= 10^308, parsed from their decimal literals so every entry is the
/// correctly rounded double (`powi` accumulates error).
static POWERS_OF_TEN: LazyLock<Vec<f64>> = LazyLock::new(|| {
    (-TABLE_OFFSET..=NUMBER_EXP_MAX)
        .map(|i| format!("1e{i}").parse::<f64>().unwrap_or(0.0))
        .collect()
});

/// Exact `10^power` for `power` in `[-323, 308]`, falling back to `powi` outside it.
#[inline]
pub fn power_of_10(power: i32) -> f64 {
    if (-TABLE_OFFSET..=NUMBER_EXP_MAX).contains(&power) {
        POWERS_OF_TEN[(power + TABLE_OFFSET) as usize]
    } else {
        10f64.powi(power)
    }
}

/// `value × 10^power` without losing subnormal precision for very negative powers.
#[inline]
pub fn mul_pow10(value: f64, power: i32) -> f64 {
    if power < -300 {
        value * power_of_10(power + 300) * 1e-300
    } else {
        value * power_of_10(power)
    }
}

/// `value / 10^power`, stable for powers down to the subnormal range.
#[inline]
pub fn div_pow10(value: f64, power: i32) -> f64 {
    if power < -300 {
        value * 1e300 / power_of_10(power + 300)
    } else {
        value / power_of_10(power)
    }
}

/// Three-way sign where zero maps to zero and NaN stays NaN.
///
/// `f64::signum` returns `1.0` for `+0.0`, which breaks every "is this zero" check
/// in the layered engine.
#[inline]
pub fn sign_of(value: f64) -> f64 {
    if value > 0.0 {
        1.0
    } else if value < 0.0 {
        -1.0
    } else if value == 0.0 {
        0.0
    } else {
        f64::NAN
    }
}

/// Signed `log10` of the magnitude: `sign(n) × log10(|n|)`.
#[inline]
pub fn signed_log10(value: f64) -> f64 {
    sign_of(value) * value.abs().log10()
}

/// True when `value` is a finite integer.
#[inline]
pub fn is_integer(value: f64) -> bool {
    value.is_finite() && value.fract() == 0.0
}

/// True when `value` is an integer every neighbouring integer can be told apart from.
#[inline]
pub fn is_safe_integer(value: f64) -> bool {
    is_integer(value) && value.abs() <= MAX_SAFE_INTEGER
}

/// Rounds to the nearest integer with halves going towards +∞.
#[inline]
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Rounds `value` to `places + 1` significant digits.
///
/// Used for mantissa and magnitude display; `NaN` and zero pass through.
pub fn decimal_places(value: f64, places: usize) -> f64 {
    if value == 0.0 || !value.is_finite() {
        return value;
    }
    // an f64 carries no more than 17 significant digits
    let len = places.min(16) as i32 + 1;
    let num_digits = value.abs().log10().ceil() as i32;
    let rounded = round_half_up(value * 10f64.powi(len - num_digits)) * 10f64.powi(num_digits - len);
    let fixed = format!("{:.*}", (len - num_digits).max(0) as usize, rounded);
    fixed.parse().unwrap_or(rounded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_power_table_is_exact() {
        assert_eq!(power_of_10(0), 1.0);
        assert_eq!(power_of_10(3), 1000.0);
        assert_eq!(power_of_10(-3), 0.001);
        assert_eq!(power_of_10(308), 1e308);
        assert_eq!(power_of_10(-323), 1e-323);
        assert_eq!(power_of_10(22), 1e22);
    }

    #[test]
    fn test_subnormal_scaling() {
        assert_eq!(mul_pow10(5.0, -324), 5e-324);
        // the smallest subnormal is 4.94e-324, so the mantissa comes back as ~4.94
        assert!((div_pow10(5e-324, -324) - 4.94).abs() < 0.01);
        assert!((div_pow10(1.5e-310, -310) - 1.5).abs() < 1e-10);
    }

    #[test]
    fn test_sign_of() {
        assert_eq!(sign_of(3.0), 1.0);
        assert_eq!(sign_of(-0.5), -1.0);
        assert_eq!(sign_of(0.0), 0.0);
        assert_eq!(sign_of(-0.0), 0.0);
        assert!(sign_of(f64::NAN).is_nan());
    }

    #[test]
    fn test_integer_checks() {
        assert!(is_integer(4.0));
        assert!(!is_integer(4.5));
        assert!(!is_integer(f64::INFINITY));
        assert!(is_safe_integer(9_007_199_254_740_991.0));
        assert!(!is_safe_integer(1e17));
    }

    #[test]
    fn test_decimal_places() {
        assert_eq!(decimal_places(1.23456, 2), 1.23);
        assert_eq!(decimal_places(9.996, 2), 10.0);
        assert_eq!(decimal_places(-4.5678, 1), -4.6);
        assert_eq!(decimal_places(0.0, 3), 0.0);
        assert_eq!(decimal_places(1.5, 100_000), 1.5);
    }
}
