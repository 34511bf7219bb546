// ============================================================================
// Bounded-Exponent Decimal
// mantissa × 10^exponent with a configurable exponent ceiling (default 9e15)
// ============================================================================

use super::config::{DecimalConfig, MAX_SIGNIFICANT_DIGITS};
use super::errors::{NumericError, NumericResult};
use super::format;
use super::parsing::{self, Scientific};
use crate::series;
use crate::utils::float::{self, NUMBER_EXP_MAX, NUMBER_EXP_MIN};
use std::cmp::Ordering;
use std::f64::consts::{E, LN_10, LOG2_10, PI};
use std::fmt;
use std::iter::{Product, Sum};
use std::str::FromStr;

/// Results within this distance of an integer snap to it in [`Decimal::to_f64`].
const ROUND_TOLERANCE: f64 = 1e-10;

/// rust_decimal holds at most 28 fractional digits and about 7.9e28.
const RUST_DECIMAL_MAX_SCALE: i64 = 28;

const SQRT_10: f64 = 3.162_277_660_168_38;
const CBRT_10: f64 = 2.154_434_690_031_884;
const CBRT_100: f64 = 4.641_588_833_612_779;

/// Extended-range decimal: `mantissa × 10^exponent`.
///
/// Finite non-zero values keep `1 ≤ |mantissa| < 10`. NaN and ±Infinity live in
/// the mantissa with a zero exponent. Exponents at or above the limit saturate to
/// ±Infinity and exponents at or below its negation collapse to zero.
///
/// Every operation is total: invalid input yields NaN instead of an error.
///
/// # Example
/// ```
/// use idle_decimal::Decimal;
///
/// let gold = Decimal::from_mantissa_exponent(1.5, 400.0);
/// let doubled = gold * 2;
/// assert_eq!(doubled.to_string(), "3e+400");
///
/// // an addend 17+ orders of magnitude smaller is dropped
/// assert_eq!(Decimal::from(1e50) + 1, Decimal::from(1e50));
/// ```
#[derive(Clone, Copy)]
pub struct Decimal {
    mantissa: f64,
    exponent: i64,
}

impl Decimal {
    /// Zero
    pub const ZERO: Self = Self::from_mantissa_exponent_no_normalize(0.0, 0);

    /// One (1.0)
    pub const ONE: Self = Self::from_mantissa_exponent_no_normalize(1.0, 0);

    /// Minus one
    pub const NEG_ONE: Self = Self::from_mantissa_exponent_no_normalize(-1.0, 0);

    /// Two
    pub const TWO: Self = Self::from_mantissa_exponent_no_normalize(2.0, 0);

    /// Ten
    pub const TEN: Self = Self::from_mantissa_exponent_no_normalize(1.0, 1);

    /// Not-a-number sentinel
    pub const NAN: Self = Self::from_mantissa_exponent_no_normalize(f64::NAN, 0);

    /// Positive infinity
    pub const INFINITY: Self = Self::from_mantissa_exponent_no_normalize(f64::INFINITY, 0);

    /// Negative infinity
    pub const NEG_INFINITY: Self = Self::from_mantissa_exponent_no_normalize(f64::NEG_INFINITY, 0);

    // ========================================================================
    // Construction
    // ========================================================================

    /// Create from raw parts without normalizing.
    ///
    /// The caller guarantees `1 ≤ |mantissa| < 10` (or a zero/non-finite mantissa
    /// with exponent 0) and an exponent inside the configured limit.
    #[inline]
    pub const fn from_mantissa_exponent_no_normalize(mantissa: f64, exponent: i64) -> Self {
        Self { mantissa, exponent }
    }

    /// Create from `mantissa × 10^exponent`, normalizing with the default limits.
    ///
    /// A fractional exponent is folded into the mantissa.
    #[inline]
    pub fn from_mantissa_exponent(mantissa: f64, exponent: f64) -> Self {
        Self::from_mantissa_exponent_in(mantissa, exponent, &DecimalConfig::DEFAULT)
    }

    /// Create from `mantissa × 10^exponent` under a custom configuration.
    pub fn from_mantissa_exponent_in(mantissa: f64, exponent: f64, config: &DecimalConfig) -> Self {
        if mantissa.is_nan() || exponent.is_nan() {
            return Self::NAN;
        }
        if mantissa == 0.0 {
            return Self::ZERO;
        }
        if mantissa.is_infinite() {
            return Self::signed_infinity(mantissa);
        }
        if exponent.is_infinite() {
            return if exponent > 0.0 {
                Self::signed_infinity(mantissa)
            } else {
                Self::ZERO
            };
        }

        let whole = exponent.trunc();
        let (mantissa, shift) = Self::split_mantissa(mantissa);
        let mantissa = match exponent - whole {
            residue if residue != 0.0 => mantissa * 10f64.powf(residue),
            _ => mantissa,
        };
        let (mantissa, step) = Self::settle_mantissa(mantissa);
        Self::bounded(mantissa, whole + shift + step, config)
    }

    /// Create from a native float.
    pub fn from_f64(value: f64) -> Self {
        if !value.is_finite() {
            return if value.is_nan() {
                Self::NAN
            } else {
                Self::signed_infinity(value)
            };
        }
        if value == 0.0 {
            return Self::ZERO;
        }
        let (mantissa, shift) = Self::split_mantissa(value);
        let (mantissa, step) = Self::settle_mantissa(mantissa);
        Self::bounded(mantissa, shift + step, &DecimalConfig::DEFAULT)
    }

    /// Re-applies the exponent bounds of `config`, e.g.
    /// [`DecimalConfig::number_range`] to clamp to what an `f64` can hold.
    pub fn saturate(self, config: &DecimalConfig) -> Self {
        if !self.is_finite() || self.mantissa == 0.0 {
            return self;
        }
        Self::bounded(self.mantissa, self.exponent as f64, config)
    }

    #[inline]
    fn signed_infinity(sign_source: f64) -> Self {
        if sign_source > 0.0 {
            Self::INFINITY
        } else {
            Self::NEG_INFINITY
        }
    }

    /// Scales a finite non-zero float into `[1, 10)`, returning the shift applied.
    fn split_mantissa(value: f64) -> (f64, f64) {
        let magnitude = value.abs();
        if (1.0..10.0).contains(&magnitude) {
            return (value, 0.0);
        }
        let shift = magnitude.log10().floor() as i32;
        (float::div_pow10(value, shift), shift as f64)
    }

    /// One-step correction for mantissas a rounding error left just outside `[1, 10)`.
    #[inline]
    fn settle_mantissa(mantissa: f64) -> (f64, f64) {
        let magnitude = mantissa.abs();
        if magnitude >= 10.0 {
            (mantissa / 10.0, 1.0)
        } else if magnitude < 1.0 {
            (mantissa * 10.0, -1.0)
        } else {
            (mantissa, 0.0)
        }
    }

    #[inline]
    fn bounded(mantissa: f64, exponent: f64, config: &DecimalConfig) -> Self {
        if exponent >= config.exp_limit {
            Self::signed_infinity(mantissa)
        } else if exponent <= -config.exp_limit {
            Self::ZERO
        } else {
            Self {
                mantissa,
                exponent: exponent as i64,
            }
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Significant digits, in `[1, 10)` for finite non-zero values.
    #[inline]
    pub const fn mantissa(&self) -> f64 {
        self.mantissa
    }

    /// Power of ten.
    #[inline]
    pub const fn exponent(&self) -> i64 {
        self.exponent
    }

    /// -1, 0 or 1 (0 for NaN).
    #[inline]
    pub fn sign(&self) -> i8 {
        if self.mantissa > 0.0 {
            1
        } else if self.mantissa < 0.0 {
            -1
        } else {
            0
        }
    }

    #[inline]
    pub fn is_nan(&self) -> bool {
        self.mantissa.is_nan()
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.mantissa.is_finite()
    }

    #[inline]
    pub fn is_infinite(&self) -> bool {
        self.mantissa.is_infinite()
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.mantissa == 0.0
    }

    /// Nearest `f64`, saturating outside its range.
    ///
    /// Non-negative exponents snap results within 1e-10 of an integer onto it,
    /// so `Decimal::from(3).pow(2).to_f64()` is exactly `9.0`.
    pub fn to_f64(self) -> f64 {
        if !self.mantissa.is_finite() {
            return self.mantissa;
        }
        if self.exponent > NUMBER_EXP_MAX as i64 {
            return if self.mantissa > 0.0 {
                f64::INFINITY
            } else {
                f64::NEG_INFINITY
            };
        }
        if self.exponent < NUMBER_EXP_MIN as i64 {
            return 0.0;
        }
        if self.exponent == NUMBER_EXP_MIN as i64 {
            return if self.mantissa > 0.0 { 5e-324 } else { -5e-324 };
        }

        let result = float::mul_pow10(self.mantissa, self.exponent as i32);
        if !result.is_finite() || self.exponent < 0 {
            return result;
        }
        let rounded = float::round_half_up(result);
        if (rounded - result).abs() < ROUND_TOLERANCE {
            rounded
        } else {
            result
        }
    }

    /// Mantissa rounded to `places` decimal places.
    pub fn mantissa_with_decimal_places(self, places: usize) -> f64 {
        if self.mantissa == 0.0 || self.is_nan() {
            return self.mantissa;
        }
        float::decimal_places(self.mantissa, places)
    }
}

// ============================================================================
// Arithmetic
// ============================================================================

#[allow(clippy::should_implement_trait)]
impl Decimal {
    /// Sum, dropping an addend more than 17 orders of magnitude below the other.
    #[inline]
    pub fn add(self, other: impl Into<Self>) -> Self {
        self.add_in(other, &DecimalConfig::DEFAULT)
    }

    /// Sum under a custom configuration: the smaller addend is dropped once the
    /// exponent gap exceeds `config.max_significant_digits`, and the result is
    /// bounded by `config.exp_limit`.
    pub fn add_in(self, other: impl Into<Self>, config: &DecimalConfig) -> Self {
        let other = other.into();
        if !self.is_finite() || !other.is_finite() {
            // finite operands cannot change an infinite sum
            let pick = |value: Self| if value.is_finite() { 0.0 } else { value.mantissa };
            return Self::from_f64(pick(self) + pick(other));
        }
        if self.mantissa == 0.0 {
            return other;
        }
        if other.mantissa == 0.0 {
            return self;
        }

        let (bigger, smaller) = if self.exponent >= other.exponent {
            (self, other)
        } else {
            (other, self)
        };
        if bigger.exponent - smaller.exponent > config.max_significant_digits {
            return bigger;
        }

        // 14 digits of headroom keep the rounding error below the dropped window
        let scale = float::power_of_10((smaller.exponent - bigger.exponent) as i32);
        let mantissa = float::round_half_up(1e14 * bigger.mantissa + 1e14 * smaller.mantissa * scale);
        Self::from_mantissa_exponent_in(mantissa, (bigger.exponent - 14) as f64, config)
    }

    #[inline]
    pub fn sub(self, other: impl Into<Self>) -> Self {
        self.add(other.into().neg())
    }

    #[inline]
    pub fn mul(self, other: impl Into<Self>) -> Self {
        let other = other.into();
        Self::from_mantissa_exponent(
            self.mantissa * other.mantissa,
            (self.exponent + other.exponent) as f64,
        )
    }

    #[inline]
    pub fn div(self, other: impl Into<Self>) -> Self {
        self.mul(other.into().recip())
    }

    /// `1 / self`; the reciprocal of zero is NaN.
    pub fn recip(self) -> Self {
        if self.mantissa == 0.0 {
            return Self::NAN;
        }
        if !self.is_finite() {
            return Self::from_f64(1.0 / self.mantissa);
        }
        Self::from_mantissa_exponent(1.0 / self.mantissa, -self.exponent as f64)
    }

    #[inline]
    pub fn neg(self) -> Self {
        if self.mantissa == 0.0 {
            return Self::ZERO;
        }
        Self::from_mantissa_exponent_no_normalize(-self.mantissa, self.exponent)
    }

    #[inline]
    pub fn abs(self) -> Self {
        Self::from_mantissa_exponent_no_normalize(self.mantissa.abs(), self.exponent)
    }

    /// Remainder with the sign of `self`; the divisor's sign is ignored and a
    /// zero divisor gives zero. Once the quotient has more than 17 digits
    /// nothing representable is left over.
    pub fn modulo(self, divisor: impl Into<Self>) -> Self {
        let divisor = divisor.into().abs();
        if self.is_nan() || divisor.is_nan() || self.is_infinite() {
            return Self::NAN;
        }
        if divisor.mantissa == 0.0 {
            return Self::ZERO;
        }
        if divisor.is_infinite() || self.abs().lt(divisor) {
            return self;
        }
        if self.exponent - divisor.exponent > MAX_SIGNIFICANT_DIGITS {
            return Self::ZERO;
        }
        self.sub(self.div(divisor).trunc().mul(divisor))
    }
}

// ============================================================================
// Comparison
// ============================================================================

impl Decimal {
    /// Total order: by sign, then exponent, then mantissa. NaN sorts above +∞.
    pub fn cmp(self, other: impl Into<Self>) -> Ordering {
        let other = other.into();
        match (self.is_nan(), other.is_nan()) {
            (true, true) => return Ordering::Equal,
            (true, false) => return Ordering::Greater,
            (false, true) => return Ordering::Less,
            (false, false) => {},
        }
        if !self.is_finite() || !other.is_finite() {
            let pick = |value: Self| if value.is_finite() { 0.0 } else { value.mantissa };
            return pick(self).total_cmp(&pick(other));
        }

        let (a, b) = (self.mantissa, other.mantissa);
        if a == 0.0 || b == 0.0 || (a > 0.0) != (b > 0.0) {
            // zero and opposite signs only need the signs themselves
            return float::sign_of(a).total_cmp(&float::sign_of(b));
        }
        let by_magnitude = self
            .exponent
            .cmp(&other.exponent)
            .then_with(|| a.abs().total_cmp(&b.abs()));
        if a > 0.0 {
            by_magnitude
        } else {
            by_magnitude.reverse()
        }
    }

    /// `None` when either side is NaN.
    #[inline]
    fn partial_order(self, other: Self) -> Option<Ordering> {
        if self.is_nan() || other.is_nan() {
            None
        } else {
            Some(self.cmp(other))
        }
    }

    /// Exact equality of mantissa and exponent.
    #[inline]
    pub fn eq(self, other: impl Into<Self>) -> bool {
        let other = other.into();
        self.mantissa == other.mantissa && self.exponent == other.exponent
    }

    #[inline]
    pub fn neq(self, other: impl Into<Self>) -> bool {
        !self.eq(other)
    }

    #[inline]
    pub fn lt(self, other: impl Into<Self>) -> bool {
        self.partial_order(other.into()) == Some(Ordering::Less)
    }

    #[inline]
    pub fn lte(self, other: impl Into<Self>) -> bool {
        matches!(
            self.partial_order(other.into()),
            Some(Ordering::Less | Ordering::Equal)
        )
    }

    #[inline]
    pub fn gt(self, other: impl Into<Self>) -> bool {
        self.partial_order(other.into()) == Some(Ordering::Greater)
    }

    #[inline]
    pub fn gte(self, other: impl Into<Self>) -> bool {
        matches!(
            self.partial_order(other.into()),
            Some(Ordering::Greater | Ordering::Equal)
        )
    }

    #[inline]
    pub fn max(self, other: impl Into<Self>) -> Self {
        let other = other.into();
        if self.cmp(other) == Ordering::Less {
            other
        } else {
            self
        }
    }

    #[inline]
    pub fn min(self, other: impl Into<Self>) -> Self {
        let other = other.into();
        if self.cmp(other) == Ordering::Greater {
            other
        } else {
            self
        }
    }

    /// Restricts `self` to `[min, max]`.
    #[inline]
    pub fn clamp(self, min: impl Into<Self>, max: impl Into<Self>) -> Self {
        self.max(min).min(max)
    }

    #[inline]
    pub fn clamp_min(self, min: impl Into<Self>) -> Self {
        self.max(min)
    }

    #[inline]
    pub fn clamp_max(self, max: impl Into<Self>) -> Self {
        self.min(max)
    }

    /// True when `|self - other| ≤ tolerance × max(|self|, |other|)`.
    pub fn eq_tolerance(self, other: impl Into<Self>, tolerance: f64) -> bool {
        let other = other.into();
        if self.is_nan() || other.is_nan() {
            return false;
        }
        if !self.is_finite() || !other.is_finite() {
            return self.eq(other);
        }
        let bound = self.abs().max(other.abs()).mul(tolerance);
        self.sub(other).abs().lte(bound)
    }

    /// [`Decimal::cmp`] that reports `Equal` for values within tolerance.
    #[inline]
    pub fn cmp_tolerance(self, other: impl Into<Self>, tolerance: f64) -> Ordering {
        let other = other.into();
        if self.eq_tolerance(other, tolerance) {
            Ordering::Equal
        } else {
            self.cmp(other)
        }
    }

    #[inline]
    pub fn neq_tolerance(self, other: impl Into<Self>, tolerance: f64) -> bool {
        !self.eq_tolerance(other, tolerance)
    }

    #[inline]
    pub fn lt_tolerance(self, other: impl Into<Self>, tolerance: f64) -> bool {
        let other = other.into();
        !self.eq_tolerance(other, tolerance) && self.lt(other)
    }

    #[inline]
    pub fn lte_tolerance(self, other: impl Into<Self>, tolerance: f64) -> bool {
        let other = other.into();
        self.eq_tolerance(other, tolerance) || self.lt(other)
    }

    #[inline]
    pub fn gt_tolerance(self, other: impl Into<Self>, tolerance: f64) -> bool {
        let other = other.into();
        !self.eq_tolerance(other, tolerance) && self.gt(other)
    }

    #[inline]
    pub fn gte_tolerance(self, other: impl Into<Self>, tolerance: f64) -> bool {
        let other = other.into();
        self.eq_tolerance(other, tolerance) || self.gt(other)
    }
}

// ============================================================================
// Logarithms and Powers
// ============================================================================

impl Decimal {
    /// `log10(|self|)`; -∞ for zero.
    #[inline]
    pub fn abs_log10(self) -> f64 {
        self.exponent as f64 + self.mantissa.abs().log10()
    }

    /// NaN for negative values, -∞ for zero.
    #[inline]
    pub fn log10(self) -> f64 {
        self.exponent as f64 + self.mantissa.log10()
    }

    /// `log10`, but 0 for anything below 1.
    #[inline]
    pub fn p_log10(self) -> f64 {
        if self.mantissa <= 0.0 || self.exponent < 0 {
            0.0
        } else {
            self.log10()
        }
    }

    #[inline]
    pub fn ln(self) -> f64 {
        LN_10 * self.log10()
    }

    #[inline]
    pub fn log2(self) -> f64 {
        LOG2_10 * self.log10()
    }

    /// Logarithm in an arbitrary `f64` base.
    #[inline]
    pub fn log(self, base: f64) -> f64 {
        (LN_10 / base.ln()) * self.log10()
    }

    /// `10^value`
    pub fn pow10(value: f64) -> Self {
        if value.is_nan() {
            return Self::NAN;
        }
        if value.is_infinite() {
            return if value > 0.0 { Self::INFINITY } else { Self::ZERO };
        }
        if float::is_integer(value) {
            return Self::from_mantissa_exponent(1.0, value);
        }
        Self::from_mantissa_exponent(10f64.powf(value % 1.0), value.trunc())
    }

    /// `self^power`.
    ///
    /// Integer-friendly inputs take an exact mantissa power; everything else goes
    /// through `10^(power × log10(self))`. Negative bases only allow integer powers,
    /// and `0^negative` is +∞.
    pub fn pow(self, power: impl Into<f64>) -> Self {
        let power: f64 = power.into();
        if power == 0.0 {
            return Self::ONE;
        }
        if self.is_nan() || power.is_nan() {
            return Self::NAN;
        }
        if self.mantissa == 0.0 {
            return if power > 0.0 { Self::ZERO } else { Self::INFINITY };
        }
        if !self.is_finite() || power.is_infinite() {
            return Self::from_f64(self.to_f64().powf(power));
        }

        let exponent = self.exponent as f64 * power;
        if float::is_safe_integer(exponent) {
            let mantissa = self.mantissa.powf(power);
            if mantissa.is_finite() && mantissa != 0.0 {
                return Self::from_mantissa_exponent(mantissa, exponent);
            }
        }

        let whole = exponent.trunc();
        let residue = exponent - whole;
        let mantissa = 10f64.powf(power * self.mantissa.log10() + residue);
        if mantissa.is_finite() && mantissa != 0.0 {
            return Self::from_mantissa_exponent(mantissa, whole);
        }

        let result = Self::pow10(power * self.abs_log10());
        if self.mantissa < 0.0 {
            match (power % 2.0).abs() {
                parity if parity == 1.0 => result.neg(),
                parity if parity == 0.0 => result,
                _ => Self::NAN,
            }
        } else {
            result
        }
    }

    /// `base^self`
    #[inline]
    pub fn pow_base(self, base: impl Into<Self>) -> Self {
        base.into().pow(self)
    }

    /// n-th root.
    #[inline]
    pub fn root(self, degree: f64) -> Self {
        self.pow(1.0 / degree)
    }

    /// `e^self`
    pub fn exp(self) -> Self {
        let x = self.to_f64();
        if -706.0 < x && x < 709.0 {
            return Self::from_f64(x.exp());
        }
        Self::from_f64(E).pow(x)
    }

    #[inline]
    pub fn sqr(self) -> Self {
        Self::from_mantissa_exponent(self.mantissa * self.mantissa, (self.exponent * 2) as f64)
    }

    /// NaN for negative values.
    pub fn sqrt(self) -> Self {
        if self.mantissa < 0.0 {
            return Self::NAN;
        }
        if !self.is_finite() || self.mantissa == 0.0 {
            return self;
        }
        let mantissa = match self.exponent.rem_euclid(2) {
            0 => self.mantissa.sqrt(),
            _ => self.mantissa.sqrt() * SQRT_10,
        };
        Self::from_mantissa_exponent(mantissa, self.exponent.div_euclid(2) as f64)
    }

    #[inline]
    pub fn cube(self) -> Self {
        Self::from_mantissa_exponent(self.mantissa.powi(3), (self.exponent * 3) as f64)
    }

    /// Real cube root, negative for negative values.
    pub fn cbrt(self) -> Self {
        if !self.is_finite() || self.mantissa == 0.0 {
            return self;
        }
        let mantissa = match self.exponent.rem_euclid(3) {
            0 => self.mantissa.cbrt(),
            1 => self.mantissa.cbrt() * CBRT_10,
            _ => self.mantissa.cbrt() * CBRT_100,
        };
        Self::from_mantissa_exponent(mantissa, self.exponent.div_euclid(3) as f64)
    }
}

// ============================================================================
// Rounding
// ============================================================================

impl Decimal {
    /// Values with 17+ integer digits are already integral and pass through.
    pub fn floor(self) -> Self {
        if !self.is_finite() {
            return self;
        }
        if self.exponent < -1 {
            return if self.mantissa >= 0.0 {
                Self::ZERO
            } else {
                Self::NEG_ONE
            };
        }
        if self.exponent < MAX_SIGNIFICANT_DIGITS {
            return Self::from_f64(self.to_f64().floor());
        }
        self
    }

    pub fn ceil(self) -> Self {
        if !self.is_finite() {
            return self;
        }
        if self.exponent < -1 {
            return if self.mantissa > 0.0 {
                Self::ONE
            } else {
                Self::ZERO
            };
        }
        if self.exponent < MAX_SIGNIFICANT_DIGITS {
            return Self::from_f64(self.to_f64().ceil());
        }
        self
    }

    /// Half-way cases round towards +∞.
    pub fn round(self) -> Self {
        if !self.is_finite() {
            return self;
        }
        if self.exponent < -1 {
            return Self::ZERO;
        }
        if self.exponent < MAX_SIGNIFICANT_DIGITS {
            return Self::from_f64(float::round_half_up(self.to_f64()));
        }
        self
    }

    pub fn trunc(self) -> Self {
        if !self.is_finite() {
            return self;
        }
        if self.exponent < 0 {
            return Self::ZERO;
        }
        if self.exponent < MAX_SIGNIFICANT_DIGITS {
            return Self::from_f64(self.to_f64().trunc());
        }
        self
    }
}

// ============================================================================
// Special Functions
// ============================================================================

impl Decimal {
    /// `self!` by Windschitl's Stirling-type approximation.
    pub fn factorial(self) -> Self {
        let n = self.to_f64() + 1.0;
        let base = (n / E) * (n * (1.0 / n).sinh() + 1.0 / (810.0 * n.powi(6))).sqrt();
        Self::from_f64(base).pow(n).mul((2.0 * PI / n).sqrt())
    }

    pub fn sinh(self) -> Self {
        self.exp().sub(self.neg().exp()).div(2)
    }

    pub fn cosh(self) -> Self {
        self.exp().add(self.neg().exp()).div(2)
    }

    pub fn tanh(self) -> Self {
        self.sinh().div(self.cosh())
    }

    pub fn asinh(self) -> f64 {
        self.add(self.sqr().add(1).sqrt()).ln()
    }

    pub fn acosh(self) -> f64 {
        self.add(self.sqr().sub(1).sqrt()).ln()
    }

    /// NaN outside `(-1, 1)`.
    pub fn atanh(self) -> f64 {
        if self.abs().gte(1) {
            return f64::NAN;
        }
        self.add(1).div(Self::ONE.sub(self)).ln() / 2.0
    }
}

// ============================================================================
// Series
// ============================================================================

impl Decimal {
    /// How many items fit in `resources_available` when each costs `price_ratio`
    /// times the previous and `current_owned` were already bought.
    pub fn afford_geometric_series(
        resources_available: impl Into<Self>,
        price_start: impl Into<Self>,
        price_ratio: impl Into<Self>,
        current_owned: impl Into<Self>,
    ) -> Self {
        series::afford_geometric(
            resources_available.into(),
            price_start.into(),
            price_ratio.into(),
            current_owned.into(),
        )
    }

    /// Total price of the next `num_items` items of a geometric series.
    pub fn sum_geometric_series(
        num_items: impl Into<Self>,
        price_start: impl Into<Self>,
        price_ratio: impl Into<Self>,
        current_owned: impl Into<Self>,
    ) -> Self {
        series::sum_geometric(
            num_items.into(),
            price_start.into(),
            price_ratio.into(),
            current_owned.into(),
        )
    }

    /// How many items fit when each costs `price_add` more than the previous.
    pub fn afford_arithmetic_series(
        resources_available: impl Into<Self>,
        price_start: impl Into<Self>,
        price_add: impl Into<Self>,
        current_owned: impl Into<Self>,
    ) -> Self {
        series::afford_arithmetic(
            resources_available.into(),
            price_start.into(),
            price_add.into(),
            current_owned.into(),
        )
    }

    /// Total price of the next `num_items` items of an arithmetic series.
    pub fn sum_arithmetic_series(
        num_items: impl Into<Self>,
        price_start: impl Into<Self>,
        price_add: impl Into<Self>,
        current_owned: impl Into<Self>,
    ) -> Self {
        series::sum_arithmetic(
            num_items.into(),
            price_start.into(),
            price_add.into(),
            current_owned.into(),
        )
    }

    /// Seconds to afford `cost` plus seconds for the purchase to pay for itself.
    pub fn efficiency_of_purchase(
        cost: impl Into<Self>,
        current_rp_s: impl Into<Self>,
        delta_rp_s: impl Into<Self>,
    ) -> Self {
        series::efficiency_of_purchase(cost.into(), current_rp_s.into(), delta_rp_s.into())
    }
}

// ============================================================================
// Formatting
// ============================================================================

impl Decimal {
    /// Formats `mantissa` with `places` fraction digits, carrying a rounded-up
    /// `10.xx` into the exponent.
    fn fixed_mantissa(self, places: usize) -> (String, i64) {
        let text = format::number_to_fixed(self.mantissa, places);
        if text.trim_start_matches('-').starts_with("10") {
            (format::number_to_fixed(self.mantissa / 10.0, places), self.exponent + 1)
        } else {
            (text, self.exponent)
        }
    }

    fn zero_with_places(places: usize) -> String {
        if places > 0 {
            format!("0.{}", "0".repeat(places))
        } else {
            "0".to_string()
        }
    }

    #[inline]
    fn exponent_suffix(exponent: i64) -> String {
        if exponent >= 0 {
            format!("e+{exponent}")
        } else {
            format!("e{exponent}")
        }
    }

    /// `d.ddd…e±x` with `places` fraction digits.
    pub fn to_exponential(self, places: usize) -> String {
        if let Some(text) = format::non_finite(self.mantissa) {
            return text.to_string();
        }
        if self.mantissa == 0.0 {
            return format!("{}e+0", Self::zero_with_places(places));
        }
        if self.exponent > NUMBER_EXP_MIN as i64 && self.exponent < NUMBER_EXP_MAX as i64 {
            return format::number_to_exponential(self.to_f64(), places);
        }
        let (mantissa, exponent) = self.fixed_mantissa(places);
        format!("{mantissa}{}", Self::exponent_suffix(exponent))
    }

    /// Positional notation with `places` fraction digits.
    ///
    /// Values of 1e21 and above fall back to the exponential [`Display`](fmt::Display) form.
    pub fn to_fixed(self, places: usize) -> String {
        if let Some(text) = format::non_finite(self.mantissa) {
            return text.to_string();
        }
        if self.mantissa == 0.0 {
            return Self::zero_with_places(places);
        }
        if self.exponent >= 21 {
            return self.to_string();
        }
        if self.exponent >= MAX_SIGNIFICANT_DIGITS {
            let digits: String = format::number_to_string(self.mantissa.abs())
                .chars()
                .filter(char::is_ascii_digit)
                .collect();
            let width = self.exponent as usize + 1;
            let sign = if self.mantissa < 0.0 { "-" } else { "" };
            let fraction = if places > 0 {
                format!(".{}", "0".repeat(places))
            } else {
                String::new()
            };
            return format!("{sign}{digits:0<width$}{fraction}");
        }
        format::number_to_fixed(self.to_f64(), places)
    }

    /// `places` significant digits (at most 100).
    ///
    /// Exponents of -7 and below, or at least `places`, use exponential notation.
    pub fn to_precision(self, places: usize) -> String {
        let places = places.clamp(1, format::MAX_FORMAT_DIGITS);
        if self.exponent <= -7 || self.exponent >= places as i64 {
            return self.to_exponential(places - 1);
        }
        format::number_to_precision(self.to_f64(), places)
    }

    /// Like [`Display`](fmt::Display) but with a fixed number of fraction digits.
    pub fn to_string_with_decimal_places(self, places: usize) -> String {
        if let Some(text) = format::non_finite(self.mantissa) {
            return text.to_string();
        }
        if self.mantissa == 0.0 {
            return "0".to_string();
        }
        if self.exponent < 21 && self.exponent > -7 {
            return format::number_to_fixed(self.to_f64(), places);
        }
        let (mantissa, exponent) = self.fixed_mantissa(places);
        format!("{mantissa}{}", Self::exponent_suffix(exponent))
    }

    /// Canonical string, identical to `to_string()`.
    #[inline]
    pub fn to_json(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(text) = format::non_finite(self.mantissa) {
            return f.write_str(text);
        }
        if self.mantissa == 0.0 {
            return f.write_str("0");
        }
        if self.exponent < 21 && self.exponent > -7 {
            return f.write_str(&format::number_to_string(self.to_f64()));
        }
        write!(
            f,
            "{}{}",
            format::number_to_string(self.mantissa),
            Self::exponent_suffix(self.exponent)
        )
    }
}

impl fmt::Debug for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Decimal({}, m={}, e={})", self, self.mantissa, self.exponent)
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl Default for Decimal {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

impl PartialEq for Decimal {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        Decimal::eq(*self, *other)
    }
}

impl PartialOrd for Decimal {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.partial_order(*other)
    }
}

impl std::ops::Neg for Decimal {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Decimal::neg(self)
    }
}

impl_binary_operators! {
    Decimal, (f64, i32);
    Add: add, AddAssign: add_assign;
    Sub: sub, SubAssign: sub_assign;
    Mul: mul, MulAssign: mul_assign;
    Div: div, DivAssign: div_assign;
}

impl std::ops::Rem for Decimal {
    type Output = Self;

    #[inline]
    fn rem(self, rhs: Self) -> Self {
        self.modulo(rhs)
    }
}

impl std::ops::Rem<f64> for Decimal {
    type Output = Self;

    #[inline]
    fn rem(self, rhs: f64) -> Self {
        self.modulo(rhs)
    }
}

impl std::ops::RemAssign for Decimal {
    #[inline]
    fn rem_assign(&mut self, rhs: Self) {
        *self = self.modulo(rhs);
    }
}

impl From<f64> for Decimal {
    #[inline]
    fn from(value: f64) -> Self {
        Self::from_f64(value)
    }
}

impl_from_primitives!(Decimal; f32, i8, i16, i32, i64, u8, u16, u32, u64, usize);

impl From<Decimal> for f64 {
    #[inline]
    fn from(value: Decimal) -> f64 {
        value.to_f64()
    }
}

impl From<&Decimal> for Decimal {
    #[inline]
    fn from(value: &Decimal) -> Self {
        *value
    }
}

impl Sum for Decimal {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, value| acc.add(value))
    }
}

impl<'a> Sum<&'a Decimal> for Decimal {
    fn sum<I: Iterator<Item = &'a Decimal>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl Product for Decimal {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ONE, |acc, value| acc.mul(value))
    }
}

impl<'a> Product<&'a Decimal> for Decimal {
    fn product<I: Iterator<Item = &'a Decimal>>(iter: I) -> Self {
        iter.copied().product()
    }
}

// ============================================================================
// String Parsing
// ============================================================================

impl FromStr for Decimal {
    type Err = NumericError;

    /// Parse `[-]M[.F][e[+|-]X]`, plain floats and `NaN`/`Infinity`.
    ///
    /// # Examples
    /// - "123.5" -> 123.5
    /// - "1.5e+400" -> 1.5 × 10^400
    /// - "1,000" -> 1000
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match parsing::parse_scientific(s)? {
            Scientific::Plain(value) => Self::from_f64(value),
            Scientific::Split { mantissa, exponent } => Self::from_mantissa_exponent(mantissa, exponent),
        })
    }
}

impl From<&str> for Decimal {
    /// Lenient parse: unparseable input becomes NaN.
    fn from(value: &str) -> Self {
        value.parse().unwrap_or_else(|_| {
            tracing::debug!(input = value, "unparseable decimal literal, using NaN");
            Self::NAN
        })
    }
}

impl From<String> for Decimal {
    #[inline]
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

// ============================================================================
// Conversion from rust_decimal (for API boundaries)
// ============================================================================

impl Decimal {
    /// Convert from `rust_decimal::Decimal`. Digits beyond 17 are rounded away.
    pub fn from_rust_decimal(value: rust_decimal::Decimal) -> Self {
        Self::from_mantissa_exponent(value.mantissa() as f64, -(value.scale() as f64))
    }

    /// Convert to `rust_decimal::Decimal`.
    ///
    /// # Errors
    /// - `DomainError` for NaN
    /// - `Overflow` for infinities and values of 1e29 and above
    /// - `Underflow` for non-zero values below 1e-28
    /// - `PrecisionLoss` if significant digits fall beyond 28 decimal places
    pub fn to_rust_decimal(self) -> NumericResult<rust_decimal::Decimal> {
        if self.is_nan() {
            return Err(NumericError::DomainError);
        }
        if self.is_infinite() {
            return Err(NumericError::Overflow);
        }
        if self.mantissa == 0.0 {
            return Ok(rust_decimal::Decimal::ZERO);
        }
        if self.exponent > RUST_DECIMAL_MAX_SCALE {
            return Err(NumericError::Overflow);
        }
        if self.exponent < -RUST_DECIMAL_MAX_SCALE {
            return Err(NumericError::Underflow);
        }

        // 17 significant digits as an integer
        let mut digits = (self.mantissa * 1e16).round() as i128;
        let mut scale = 16 - self.exponent;
        if scale > RUST_DECIMAL_MAX_SCALE {
            let dropped = 10i128.pow((scale - RUST_DECIMAL_MAX_SCALE) as u32);
            if digits % dropped != 0 {
                return Err(NumericError::PrecisionLoss);
            }
            digits /= dropped;
            scale = RUST_DECIMAL_MAX_SCALE;
        }
        if scale < 0 {
            digits = digits
                .checked_mul(10i128.pow((-scale) as u32))
                .ok_or(NumericError::Overflow)?;
            scale = 0;
        }
        rust_decimal::Decimal::try_from_i128_with_scale(digits, scale as u32)
            .map(|value| value.normalize())
            .map_err(|_| NumericError::Overflow)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64, tolerance: f64) -> bool {
        (a - b).abs() <= tolerance * a.abs().max(b.abs()).max(1e-300)
    }

    #[test]
    fn test_constants() {
        assert_eq!(Decimal::ZERO.to_f64(), 0.0);
        assert_eq!(Decimal::ONE.to_f64(), 1.0);
        assert_eq!(Decimal::TEN.to_f64(), 10.0);
        assert_eq!(Decimal::NEG_ONE.sign(), -1);
        assert!(Decimal::NAN.is_nan());
        assert!(Decimal::INFINITY.is_infinite());
    }

    #[test]
    fn test_normalization() {
        let x = Decimal::from_mantissa_exponent(1234.0, 5.0);
        assert_eq!(x.mantissa(), 1.234);
        assert_eq!(x.exponent(), 8);

        let y = Decimal::from_mantissa_exponent(-0.05, 0.0);
        assert_eq!(y.mantissa(), -5.0);
        assert_eq!(y.exponent(), -2);

        // fractional exponents fold into the mantissa
        let z = Decimal::from_mantissa_exponent(1.0, 2.5);
        assert_eq!(z.exponent(), 2);
        assert!(close(z.mantissa(), 10f64.sqrt(), 1e-15));
    }

    #[test]
    fn test_from_f64() {
        let x = Decimal::from_f64(1e50);
        assert_eq!(x.mantissa(), 1.0);
        assert_eq!(x.exponent(), 50);

        let tiny = Decimal::from_f64(5e-324);
        assert_eq!(tiny.exponent(), -324);
        assert!(tiny.mantissa() >= 1.0 && tiny.mantissa() < 10.0);

        assert!(Decimal::from_f64(f64::NAN).is_nan());
        assert_eq!(Decimal::from_f64(f64::NEG_INFINITY), Decimal::NEG_INFINITY);
        assert_eq!(Decimal::from_f64(-0.0), Decimal::ZERO);
    }

    #[test]
    fn test_exponent_saturation() {
        assert_eq!(Decimal::from_mantissa_exponent(5.0, 9e15), Decimal::INFINITY);
        assert_eq!(
            Decimal::from_mantissa_exponent(-5.0, 1e300),
            Decimal::NEG_INFINITY
        );
        assert_eq!(Decimal::from_mantissa_exponent(5.0, -9e15), Decimal::ZERO);

        let config = DecimalConfig::number_range();
        assert_eq!(
            Decimal::from_mantissa_exponent_in(1.0, 400.0, &config),
            Decimal::INFINITY
        );
        assert_eq!(
            Decimal::from_mantissa_exponent(1.0, 400.0).saturate(&config),
            Decimal::INFINITY
        );
        assert_eq!(
            Decimal::from_mantissa_exponent(1.0, 200.0).saturate(&config),
            Decimal::from_mantissa_exponent(1.0, 200.0)
        );
    }

    #[test]
    fn test_add_drops_negligible_operand() {
        let big = Decimal::from(1e50);
        assert_eq!(big.add(1), big);
        assert_eq!(Decimal::ONE.add(big), big);
    }

    #[test]
    fn test_add_follows_config() {
        let narrow = DecimalConfig::default().with_max_significant_digits(3);
        let thousand = Decimal::from(1000);
        assert_eq!(thousand.add_in(0.1, &narrow), thousand);
        assert!(thousand.add_in(5, &narrow).eq_tolerance(1005, 1e-12));
        assert!(thousand.add(0.1).eq_tolerance(1000.1, 1e-12));

        let capped = DecimalConfig::new(100.0);
        let big = Decimal::from_mantissa_exponent(9.0, 99.0);
        assert_eq!(big.add_in(big, &capped), Decimal::INFINITY);
        assert_eq!(big.add(big), Decimal::from_mantissa_exponent(1.8, 100.0));
    }

    #[test]
    fn test_add_and_sub() {
        assert_eq!(Decimal::from(2).add(3).to_f64(), 5.0);
        assert_eq!(Decimal::from(2).sub(3).to_f64(), -1.0);

        let x = Decimal::from_mantissa_exponent(1.5, 400.0);
        assert_eq!(x.sub(x), Decimal::ZERO);
        assert_eq!(x.add(x), Decimal::from_mantissa_exponent(3.0, 400.0));

        assert_eq!(Decimal::INFINITY.add(1e300), Decimal::INFINITY);
        assert!(Decimal::INFINITY.add(Decimal::NEG_INFINITY).is_nan());
        assert!(Decimal::NAN.add(1).is_nan());
    }

    #[test]
    fn test_mul_div_recip() {
        let a = Decimal::from_mantissa_exponent(2.0, 300.0);
        let b = Decimal::from_mantissa_exponent(4.0, 300.0);
        assert_eq!(a.mul(b), Decimal::from_mantissa_exponent(8.0, 600.0));
        assert_eq!(b.div(a), Decimal::from(2));
        assert_eq!(a.mul(0), Decimal::ZERO);
        assert_eq!(a.mul(1), a);

        assert!(Decimal::ZERO.recip().is_nan());
        assert_eq!(Decimal::INFINITY.recip(), Decimal::ZERO);
        assert_eq!(Decimal::from(4).recip().to_f64(), 0.25);
        assert!(Decimal::INFINITY.mul(0).is_nan());
    }

    #[test]
    fn test_ordering() {
        let ordered = [
            Decimal::NEG_INFINITY,
            Decimal::from_mantissa_exponent(-1.0, 400.0),
            Decimal::from(-1),
            Decimal::from_mantissa_exponent(-1.0, -400.0),
            Decimal::ZERO,
            Decimal::from_mantissa_exponent(1.0, -400.0),
            Decimal::from(1),
            Decimal::from(2),
            Decimal::from_mantissa_exponent(1.0, 400.0),
            Decimal::INFINITY,
            Decimal::NAN,
        ];
        for (i, a) in ordered.iter().enumerate() {
            for (j, b) in ordered.iter().enumerate() {
                assert_eq!(a.cmp(*b), i.cmp(&j), "{a:?} vs {b:?}");
            }
        }
    }

    #[test]
    fn test_comparison_predicates() {
        let a = Decimal::from(100);
        let b = Decimal::from(50);
        assert!(a.gt(b));
        assert!(b.lt(a));
        assert!(a.gte(100));
        assert!(a.lte(100));
        assert!(a.neq(b));
        assert!(a > b);
        assert_eq!(a.max(b), a);
        assert_eq!(a.min(b), b);
        assert_eq!(Decimal::from(500).clamp(0, 100), a);
        assert_eq!(Decimal::from(-5).clamp_min(0), Decimal::ZERO);
        assert_eq!(Decimal::from(5).clamp_max(1), Decimal::ONE);

        // NaN compares false but still sorts last
        assert!(!Decimal::NAN.lt(1));
        assert!(!Decimal::NAN.gte(1));
        assert_eq!(Decimal::NAN.partial_cmp(&Decimal::ONE), None);
    }

    #[test]
    fn test_eq_tolerance() {
        let a = Decimal::from(1e100);
        assert!(a.eq_tolerance(1.0000001e100, 1e-6));
        assert!(!a.eq_tolerance(1.01e100, 1e-6));
        assert_eq!(a.cmp_tolerance(1.0000001e100, 1e-6), Ordering::Equal);
        assert!(a.lt_tolerance(1.01e100, 1e-6));
        assert!(a.lte_tolerance(1.0000001e100, 1e-6));
        assert!(!a.gt_tolerance(1.0000001e100, 1e-6));
        assert!(a.gte_tolerance(1.0000001e100, 1e-6));
        assert!(a.neq_tolerance(1.01e100, 1e-6));
        assert!(!Decimal::NAN.eq_tolerance(Decimal::NAN, 1.0));
    }

    #[test]
    fn test_logarithms() {
        let x = Decimal::from_mantissa_exponent(1.0, 1000.0);
        assert_eq!(x.log10(), 1000.0);
        assert!(close(x.ln(), 1000.0 * LN_10, 1e-15));
        assert!(close(x.log2(), 1000.0 * LOG2_10, 1e-15));
        assert!(close(Decimal::from(8).log(2.0), 3.0, 1e-15));
        assert!(Decimal::from(-5).log10().is_nan());
        assert_eq!(Decimal::from(-5).abs_log10(), 5f64.log10());
        assert_eq!(Decimal::from(0.5).p_log10(), 0.0);
        assert_eq!(Decimal::ZERO.log10(), f64::NEG_INFINITY);
    }

    #[test]
    fn test_pow() {
        assert_eq!(Decimal::from(3).pow(2).to_f64(), 9.0);
        assert_eq!(Decimal::from(-2).pow(3), Decimal::from(-8));
        assert!(Decimal::from(-2).pow(0.5).is_nan());
        assert_eq!(Decimal::from(7).pow(0), Decimal::ONE);
        assert_eq!(Decimal::ZERO.pow(2), Decimal::ZERO);
        assert_eq!(Decimal::ZERO.pow(-1), Decimal::INFINITY);

        let huge = Decimal::from_mantissa_exponent(2.0, 1e12).pow(2);
        assert_eq!(huge.exponent(), 2_000_000_000_000);
        assert!(close(huge.mantissa(), 4.0, 1e-12));

        let root = Decimal::from(10).pow(0.5);
        assert!(close(root.to_f64(), 10f64.sqrt(), 1e-15));
    }

    #[test]
    fn test_pow_saturation() {
        assert_eq!(Decimal::from(1e300).pow(1e14), Decimal::INFINITY);
        assert_eq!(Decimal::from(1e-300).pow(1e14), Decimal::ZERO);

        // the same formula under f64 bounds saturates much earlier
        let config = DecimalConfig::number_range();
        assert_eq!(
            Decimal::from(1e300).pow(1e10).saturate(&config),
            Decimal::INFINITY
        );
        assert_eq!(
            Decimal::from(1e-300).pow(1e10).saturate(&config),
            Decimal::ZERO
        );
    }

    #[test]
    fn test_pow10_and_exp() {
        assert_eq!(Decimal::pow10(400.0), Decimal::from_mantissa_exponent(1.0, 400.0));
        assert!(close(Decimal::pow10(2.5).to_f64(), 10f64.powf(2.5), 1e-14));
        assert!(close(Decimal::pow10(-0.5).to_f64(), 10f64.powf(-0.5), 1e-14));
        assert_eq!(Decimal::pow10(f64::INFINITY), Decimal::INFINITY);

        assert!(close(Decimal::from(1).exp().to_f64(), E, 1e-15));
        let big = Decimal::from(1000).exp();
        assert!(close(big.log10(), 1000.0 / LN_10, 1e-12));
        assert_eq!(Decimal::from(f64::INFINITY).exp(), Decimal::INFINITY);
    }

    #[test]
    fn test_roots() {
        assert_eq!(Decimal::from(16).sqrt().to_f64(), 4.0);
        assert!(close(Decimal::from(0.001).sqrt().to_f64(), 0.001f64.sqrt(), 1e-14));
        assert!(Decimal::from(-4).sqrt().is_nan());

        assert!(close(Decimal::from(0.1).cbrt().to_f64(), 0.1f64.cbrt(), 1e-14));
        assert!(close(Decimal::from(-27).cbrt().to_f64(), -3.0, 1e-15));

        let x = Decimal::from_mantissa_exponent(4.0, 1000.0);
        assert_eq!(x.sqrt(), Decimal::from_mantissa_exponent(2.0, 500.0));
        assert_eq!(x.sqr(), Decimal::from_mantissa_exponent(1.6, 2001.0));
        assert_eq!(Decimal::from(3).cube().to_f64(), 27.0);
    }

    #[test]
    fn test_rounding() {
        assert_eq!(Decimal::from(-0.5).floor(), Decimal::from(-1));
        assert_eq!(Decimal::from(-0.05).floor(), Decimal::NEG_ONE);
        assert_eq!(Decimal::from(0.05).floor(), Decimal::ZERO);
        assert_eq!(Decimal::from(0.05).ceil(), Decimal::ONE);
        assert_eq!(Decimal::from(2.5).round(), Decimal::from(3));
        assert_eq!(Decimal::from(-2.5).round(), Decimal::from(-2));
        assert_eq!(Decimal::from(-2.7).trunc(), Decimal::from(-2));
        assert_eq!(Decimal::from(2.7).ceil(), Decimal::from(3));

        let integral = Decimal::from_mantissa_exponent(1.23456789, 40.0);
        assert_eq!(integral.floor(), integral);
        assert_eq!(integral.round(), integral);
    }

    #[test]
    fn test_to_f64_snaps_integers() {
        assert_eq!(Decimal::from(1234).to_f64(), 1234.0);
        assert_eq!(Decimal::from(3).pow(10).to_f64(), 59049.0);
        assert_eq!(Decimal::from_mantissa_exponent(1.0, 400.0).to_f64(), f64::INFINITY);
        assert_eq!(Decimal::from_mantissa_exponent(1.0, -400.0).to_f64(), 0.0);
    }

    #[test]
    fn test_special_functions() {
        assert!(close(Decimal::from(5).factorial().to_f64(), 120.0, 1e-6));
        assert!(close(Decimal::from(170).factorial().to_f64(), 7.257_415_615_307_994e306, 1e-7));
        assert!(close(Decimal::from(1).sinh().to_f64(), 1f64.sinh(), 1e-12));
        assert!(close(Decimal::from(1).cosh().to_f64(), 1f64.cosh(), 1e-12));
        assert!(close(Decimal::from(0.5).tanh().to_f64(), 0.5f64.tanh(), 1e-12));
        assert!(close(Decimal::from(2).asinh(), 2f64.asinh(), 1e-12));
        assert!(close(Decimal::from(2).acosh(), 2f64.acosh(), 1e-12));
        assert!(close(Decimal::from(0.5).atanh(), 0.5f64.atanh(), 1e-12));
        assert!(Decimal::from(2).atanh().is_nan());
    }

    #[test]
    fn test_series() {
        assert_eq!(
            Decimal::afford_geometric_series(100, 10, 2, 0),
            Decimal::from(3)
        );
        assert_eq!(Decimal::sum_geometric_series(3, 10, 2, 0).to_f64(), 70.0);
        assert_eq!(
            Decimal::afford_arithmetic_series(100, 10, 5, 0),
            Decimal::from(5)
        );
        assert_eq!(Decimal::sum_arithmetic_series(5, 10, 5, 0).to_f64(), 100.0);
        assert_eq!(Decimal::efficiency_of_purchase(100, 10, 5).to_f64(), 30.0);
    }

    #[test]
    fn test_display() {
        assert_eq!(Decimal::ZERO.to_string(), "0");
        assert_eq!(Decimal::from(1234).to_string(), "1234");
        assert_eq!(Decimal::from(0.5).to_string(), "0.5");
        assert_eq!(
            Decimal::from_mantissa_exponent(1.5, 400.0).to_string(),
            "1.5e+400"
        );
        assert_eq!(
            Decimal::from_mantissa_exponent(-2.5, -50.0).to_string(),
            "-2.5e-50"
        );
        assert_eq!(Decimal::NAN.to_string(), "NaN");
        assert_eq!(Decimal::NEG_INFINITY.to_string(), "-Infinity");
        assert_eq!(Decimal::from(1234).to_json(), "1234");
    }

    #[test]
    fn test_to_exponential() {
        assert_eq!(Decimal::from(12345).to_exponential(2), "1.23e+4");
        assert_eq!(
            Decimal::from_mantissa_exponent(1.23456, 500.0).to_exponential(2),
            "1.23e+500"
        );
        assert_eq!(
            Decimal::from_mantissa_exponent(9.996, 500.0).to_exponential(2),
            "1.00e+501"
        );
        assert_eq!(Decimal::ZERO.to_exponential(2), "0.00e+0");
    }

    #[test]
    fn test_to_fixed_and_precision() {
        assert_eq!(Decimal::from(3.14159).to_fixed(2), "3.14");
        assert_eq!(Decimal::ZERO.to_fixed(2), "0.00");
        assert_eq!(
            Decimal::from_mantissa_exponent(1.5, 18.0).to_fixed(2),
            "1500000000000000000.00"
        );
        assert_eq!(
            Decimal::from_mantissa_exponent(1.5, 400.0).to_fixed(2),
            "1.5e+400"
        );
        assert_eq!(Decimal::from(123.456).to_precision(4), "123.5");
        assert_eq!(Decimal::from(0.00012345).to_precision(3), "0.000123");
        assert_eq!(
            Decimal::from_mantissa_exponent(1.2345, 500.0).to_precision(3),
            "1.23e+500"
        );
        assert_eq!(
            Decimal::from_mantissa_exponent(1.23456, 100.0).to_string_with_decimal_places(3),
            "1.235e+100"
        );
        assert_eq!(Decimal::from_mantissa_exponent(1.23456, 100.0).mantissa_with_decimal_places(2), 1.23);
    }

    #[test]
    fn test_to_precision_of_tiny_values() {
        assert_eq!(Decimal::from(1e-10).to_precision(2), "1.0e-10");
        assert_eq!(
            Decimal::from_mantissa_exponent(1.5, -400.0).to_precision(3),
            "1.50e-400"
        );
        assert_eq!(
            Decimal::from_mantissa_exponent(1.5, -1e12).to_precision(3),
            "1.50e-1000000000000"
        );
        let text = Decimal::from(0.5).to_precision(100_000);
        assert!(text.starts_with("0.5000"), "{text}");
        assert_eq!(text.len(), 102);
    }

    #[test]
    fn test_from_str() {
        let x: Decimal = "1.5e+400".parse().unwrap();
        assert_eq!(x, Decimal::from_mantissa_exponent(1.5, 400.0));

        let y: Decimal = "1,000".parse().unwrap();
        assert_eq!(y.to_f64(), 1000.0);

        let z: Decimal = "-2E-5000".parse().unwrap();
        assert_eq!(z, Decimal::from_mantissa_exponent(-2.0, -5000.0));

        assert!("NaN".parse::<Decimal>().unwrap().is_nan());
        assert_eq!("Infinity".parse::<Decimal>(), Ok(Decimal::INFINITY));
    }

    #[test]
    fn test_from_str_invalid() {
        assert_eq!("twelve".parse::<Decimal>(), Err(NumericError::InvalidInput));
        assert_eq!("".parse::<Decimal>(), Err(NumericError::InvalidInput));
        assert!(Decimal::from("twelve").is_nan());
    }

    #[test]
    fn test_string_roundtrip() {
        for value in [
            Decimal::from_mantissa_exponent(1.2345678901234567, 12345.0),
            Decimal::from_mantissa_exponent(-9.87654321, -999.0),
            Decimal::from(1234),
            Decimal::from(0.5),
            Decimal::INFINITY,
        ] {
            let back: Decimal = value.to_string().parse().unwrap();
            assert_eq!(back, value);
        }
    }

    #[test]
    fn test_from_rust_decimal() {
        let x = Decimal::from_rust_decimal(rust_decimal::Decimal::new(12345, 2));
        assert!(close(x.to_f64(), 123.45, 1e-15));
        assert_eq!(
            Decimal::from_rust_decimal(rust_decimal::Decimal::ZERO),
            Decimal::ZERO
        );
    }

    #[test]
    fn test_to_rust_decimal() {
        let x = Decimal::from_mantissa_exponent(1.25, 2.0);
        assert_eq!(x.to_rust_decimal(), Ok(rust_decimal::Decimal::new(125, 0)));

        let y = Decimal::from_mantissa_exponent(1.5, -3.0);
        assert_eq!(y.to_rust_decimal(), Ok(rust_decimal::Decimal::new(15, 4)));

        assert_eq!(Decimal::NAN.to_rust_decimal(), Err(NumericError::DomainError));
        assert_eq!(Decimal::INFINITY.to_rust_decimal(), Err(NumericError::Overflow));
        assert_eq!(
            Decimal::from_mantissa_exponent(1.0, 40.0).to_rust_decimal(),
            Err(NumericError::Overflow)
        );
        assert_eq!(
            Decimal::from_mantissa_exponent(1.0, -40.0).to_rust_decimal(),
            Err(NumericError::Underflow)
        );
        assert_eq!(
            Decimal::from_mantissa_exponent(1.5, -28.0).to_rust_decimal(),
            Err(NumericError::PrecisionLoss)
        );
    }

    #[test]
    fn test_operators() {
        let a = Decimal::from(6);
        assert_eq!((a + 4).to_f64(), 10.0);
        assert_eq!((a - 4).to_f64(), 2.0);
        assert_eq!((a * 4).to_f64(), 24.0);
        assert_eq!((a / 4).to_f64(), 1.5);
        assert_eq!((2.0 * a).to_f64(), 12.0);
        assert_eq!((-a).to_f64(), -6.0);

        let mut b = Decimal::ONE;
        b += 1;
        b *= a;
        assert_eq!(b.to_f64(), 12.0);

        assert_eq!((a % Decimal::from(4)).to_f64(), 2.0);
        assert_eq!((a / 4 + 1).to_f64(), 2.5);
        assert_eq!((a * 0.5).to_f64(), 3.0);
    }

    #[test]
    fn test_modulo() {
        assert_eq!(Decimal::from(7.5).modulo(2).to_f64(), 1.5);
        assert_eq!(Decimal::from(-7).modulo(3).to_f64(), -1.0);
        assert_eq!(Decimal::from(7).modulo(-3).to_f64(), 1.0);
        assert_eq!(Decimal::from(2).modulo(5).to_f64(), 2.0);
        assert_eq!(Decimal::from(5).modulo(0), Decimal::ZERO);
        assert_eq!(Decimal::from(1e30).modulo(7), Decimal::ZERO);
        assert_eq!(Decimal::from(5).modulo(Decimal::INFINITY).to_f64(), 5.0);
        assert!(Decimal::INFINITY.modulo(3).is_nan());
        assert!(Decimal::NAN.modulo(3).is_nan());
    }

    #[test]
    fn test_sum_and_product() {
        let values = [Decimal::from(1), Decimal::from(2), Decimal::from(3)];
        let total: Decimal = values.iter().sum();
        let product: Decimal = values.into_iter().product();
        assert_eq!(total.to_f64(), 6.0);
        assert_eq!(product.to_f64(), 6.0);
    }
}
