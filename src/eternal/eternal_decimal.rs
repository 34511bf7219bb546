// ============================================================================
// Layered Decimal
// sign × 10^10^…^mag with `layer` exponentiations; reaches exponent towers
// ============================================================================

use crate::numeric::format;
use crate::numeric::parsing::{self, canonical_input, parse_finite, parse_height_payload};
use crate::numeric::{Decimal, NumericError, NumericResult};
use crate::series;
use crate::utils::float::{self, sign_of, signed_log10};
use std::cmp::Ordering;
use std::fmt;
use std::iter::{Product, Sum};
use std::str::FromStr;

/// Magnitudes at or above this move up one layer.
pub(super) const EXP_LIMIT: f64 = 9e15;

/// `log10(9e15)`: layer ≥ 1 magnitudes below this move down one layer.
pub(super) const LAYER_DOWN: f64 = 15.954_242_509_439_325;

/// Layer-0 magnitudes below this become negative-magnitude layer-1 values.
pub(super) const FIRST_NEG_LAYER: f64 = 1.0 / 9e15;

/// Mantissa/magnitude gap beyond which the smaller addend is dropped.
pub(super) const MAX_SIGNIFICANT_DIGITS: f64 = 17.0;

/// Deepest tower printed as repeated `e`s before switching to `(e^N)`.
const MAX_ES_IN_A_ROW: f64 = 5.0;

/// Extended-range decimal stored as `(sign, layer, mag)`.
///
/// - `layer = 0`: the value is `sign × mag`
/// - `layer ≥ 1`: the value is `sign × 10^(10^(…^mag))` with `layer` exponentiations;
///   a negative `mag` stands for the reciprocal tower
///
/// Canonical values keep layer-0 magnitudes in `[1/9e15, 9e15)` and higher-layer
/// magnitudes in `[log10(9e15), 9e15)` (by absolute value). NaN is `(NaN, NaN, NaN)`
/// and ±Infinity is `(±1, ∞, ∞)`.
///
/// # Example
/// ```
/// use idle_decimal::EternalDecimal;
///
/// let googolplex: EternalDecimal = "ee100".parse().unwrap();
/// assert_eq!(googolplex.layer(), 2.0);
///
/// let tower = EternalDecimal::from(10).tetrate(3.0, 1, false);
/// assert_eq!(tower.to_string(), "1e10000000000");
/// ```
#[derive(Clone, Copy)]
pub struct EternalDecimal {
    pub(super) sign: f64,
    pub(super) layer: f64,
    pub(super) mag: f64,
}

impl EternalDecimal {
    pub const ZERO: Self = Self::from_components_no_normalize(0.0, 0.0, 0.0);
    pub const ONE: Self = Self::from_components_no_normalize(1.0, 0.0, 1.0);
    pub const NEG_ONE: Self = Self::from_components_no_normalize(-1.0, 0.0, 1.0);
    pub const TWO: Self = Self::from_components_no_normalize(1.0, 0.0, 2.0);
    pub const TEN: Self = Self::from_components_no_normalize(1.0, 0.0, 10.0);
    pub const NAN: Self = Self::from_components_no_normalize(f64::NAN, f64::NAN, f64::NAN);
    pub const INFINITY: Self =
        Self::from_components_no_normalize(1.0, f64::INFINITY, f64::INFINITY);
    pub const NEG_INFINITY: Self =
        Self::from_components_no_normalize(-1.0, f64::INFINITY, f64::INFINITY);

    // ========================================================================
    // Construction
    // ========================================================================

    /// Create from raw components; the caller guarantees a canonical triple.
    #[inline]
    pub const fn from_components_no_normalize(sign: f64, layer: f64, mag: f64) -> Self {
        Self { sign, layer, mag }
    }

    /// Create from components, normalizing into canonical form.
    #[inline]
    pub fn from_components(sign: f64, layer: f64, mag: f64) -> Self {
        Self::from_components_no_normalize(sign_of(sign), layer, mag).normalize()
    }

    /// Create from a native float.
    #[inline]
    pub fn from_f64(value: f64) -> Self {
        Self::from_components_no_normalize(sign_of(value), 0.0, value.abs()).normalize()
    }

    /// Create from `mantissa × 10^exponent`; the exponent may exceed the `f64` range.
    #[inline]
    pub fn from_mantissa_exponent(mantissa: f64, exponent: f64) -> Self {
        Self::from_components_no_normalize(
            sign_of(mantissa),
            1.0,
            exponent + mantissa.abs().log10(),
        )
        .normalize()
    }

    /// Lossless promotion of a bounded-exponent value.
    pub fn from_decimal(value: Decimal) -> Self {
        if !value.is_finite() {
            return Self::from_f64(value.mantissa());
        }
        if value.is_zero() {
            return Self::ZERO;
        }
        if (-300..=300).contains(&value.exponent()) {
            Self::from_f64(value.to_f64())
        } else {
            Self::from_mantissa_exponent(value.mantissa(), value.exponent() as f64)
        }
    }

    /// Brings the triple into canonical form, moving between layers as needed.
    pub(super) fn normalize(self) -> Self {
        let Self {
            mut sign,
            mut layer,
            mut mag,
        } = self;
        if sign.is_nan() || layer.is_nan() || mag.is_nan() {
            return Self::NAN;
        }
        if sign == 0.0
            || (mag == 0.0 && layer == 0.0)
            || (mag == f64::NEG_INFINITY && layer > 0.0 && layer.is_finite())
        {
            return Self::ZERO;
        }
        if layer == 0.0 && mag < 0.0 {
            mag = -mag;
            sign = -sign;
        }
        if mag.is_infinite() || layer.is_infinite() {
            return if sign > 0.0 {
                Self::INFINITY
            } else {
                Self::NEG_INFINITY
            };
        }

        if layer == 0.0 && mag < FIRST_NEG_LAYER {
            return Self::from_components_no_normalize(sign, 1.0, mag.log10());
        }

        let mut absmag = mag.abs();
        let mut signmag = sign_of(mag);
        if absmag >= EXP_LIMIT {
            return Self::from_components_no_normalize(sign, layer + 1.0, signmag * absmag.log10());
        }
        while absmag < LAYER_DOWN && layer > 0.0 {
            layer -= 1.0;
            if layer == 0.0 {
                mag = 10f64.powf(mag);
            } else {
                mag = signmag * 10f64.powf(absmag);
                absmag = mag.abs();
                signmag = sign_of(mag);
            }
        }
        if layer == 0.0 {
            if mag < 0.0 {
                mag = -mag;
                sign = -sign;
            } else if mag == 0.0 {
                return Self::ZERO;
            }
        }
        Self::from_components_no_normalize(sign, layer, mag)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// -1, 0 or 1 (0 for NaN).
    #[inline]
    pub fn sign(&self) -> i8 {
        if self.sign > 0.0 {
            1
        } else if self.sign < 0.0 {
            -1
        } else {
            0
        }
    }

    /// Number of stacked exponentiations.
    #[inline]
    pub const fn layer(&self) -> f64 {
        self.layer
    }

    /// Innermost magnitude.
    #[inline]
    pub const fn mag(&self) -> f64 {
        self.mag
    }

    #[inline]
    pub fn is_nan(&self) -> bool {
        self.sign.is_nan() || self.layer.is_nan() || self.mag.is_nan()
    }

    #[inline]
    pub fn is_infinite(&self) -> bool {
        !self.is_nan() && (self.mag.is_infinite() || self.layer.is_infinite())
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.sign.is_finite() && self.layer.is_finite() && self.mag.is_finite()
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.sign == 0.0
    }

    /// Mantissa in `[1, 10)` with the sign applied, for layers 0 and 1.
    /// Higher layers have no meaningful mantissa and report the sign.
    pub fn mantissa(&self) -> f64 {
        if self.sign == 0.0 || self.is_nan() {
            return self.sign;
        }
        if self.layer == 0.0 {
            let exponent = self.mag.log10().floor() as i32;
            let mantissa = float::div_pow10(self.mag, exponent);
            let mantissa = if mantissa >= 10.0 { mantissa / 10.0 } else { mantissa };
            self.sign * mantissa
        } else if self.layer == 1.0 {
            let residue = self.mag - self.mag.floor();
            self.sign * 10f64.powf(residue)
        } else {
            self.sign
        }
    }

    /// Power of ten; layer 2 values report an (imprecise) float exponent and
    /// deeper towers report ±∞.
    pub fn exponent(&self) -> f64 {
        if self.sign == 0.0 {
            return 0.0;
        }
        if self.layer == 0.0 {
            self.mag.log10().floor()
        } else if self.layer == 1.0 {
            self.mag.floor()
        } else if self.layer == 2.0 {
            (sign_of(self.mag) * 10f64.powf(self.mag.abs())).floor()
        } else {
            self.mag * f64::INFINITY
        }
    }

    /// Nearest `f64`: exact at layer 0, saturating beyond.
    pub fn to_f64(self) -> f64 {
        if self.is_nan() {
            return f64::NAN;
        }
        if self.is_infinite() {
            return if self.sign > 0.0 {
                f64::INFINITY
            } else {
                f64::NEG_INFINITY
            };
        }
        if self.layer == 0.0 {
            self.sign * self.mag
        } else if self.layer == 1.0 {
            self.sign * 10f64.powf(self.mag)
        } else if self.mag > 0.0 {
            self.sign * f64::INFINITY
        } else {
            0.0
        }
    }

    /// Saturating conversion to the bounded-exponent engine.
    ///
    /// Towers of layer 2 and above do not fit and become ±Infinity (or zero for
    /// reciprocal towers).
    pub fn collapse(self) -> Decimal {
        match self.collapse_checked() {
            Ok(value) => value,
            Err(NumericError::Underflow) => {
                tracing::debug!(value = %self, "layered value below bounded range, collapsing to 0");
                Decimal::ZERO
            },
            Err(_) => {
                tracing::debug!(value = %self, "layered value above bounded range, collapsing to infinity");
                if self.sign > 0.0 {
                    Decimal::INFINITY
                } else {
                    Decimal::NEG_INFINITY
                }
            },
        }
    }

    fn collapse_checked(self) -> NumericResult<Decimal> {
        if self.is_nan() {
            return Ok(Decimal::NAN);
        }
        if self.is_infinite() {
            return Ok(Decimal::from_f64(self.to_f64()));
        }
        if self.sign == 0.0 {
            return Ok(Decimal::ZERO);
        }
        let collapsed = if self.layer == 0.0 {
            Decimal::from_f64(self.sign * self.mag)
        } else if self.layer == 1.0 {
            let exponent = self.mag.floor();
            Decimal::from_mantissa_exponent(self.sign * 10f64.powf(self.mag - exponent), exponent)
        } else if self.mag > 0.0 {
            return Err(NumericError::Overflow);
        } else {
            return Err(NumericError::Underflow);
        };
        if collapsed.is_zero() {
            Err(NumericError::Underflow)
        } else if collapsed.is_infinite() {
            Err(NumericError::Overflow)
        } else {
            Ok(collapsed)
        }
    }
}

impl Decimal {
    /// Lossless promotion to the layered engine.
    #[inline]
    pub fn promote(self) -> EternalDecimal {
        EternalDecimal::from_decimal(self)
    }
}

// ============================================================================
// Arithmetic
// ============================================================================

#[allow(clippy::should_implement_trait)]
impl EternalDecimal {
    /// Sum. Operands two layers apart, or 17+ orders apart within a layer, drop
    /// the smaller one; at layer 2 and above the larger magnitude wins outright.
    pub fn add(self, other: impl Into<Self>) -> Self {
        let other = other.into();
        if self.is_nan() || other.is_nan() {
            return Self::NAN;
        }
        if self.is_infinite() || other.is_infinite() {
            if self.is_infinite() && other.is_infinite() && self.sign != other.sign {
                return Self::NAN;
            }
            return if self.is_infinite() { self } else { other };
        }
        if self.sign == 0.0 {
            return other;
        }
        if other.sign == 0.0 {
            return self;
        }
        if self.sign == -other.sign && self.layer == other.layer && self.mag == other.mag {
            return Self::ZERO;
        }
        if self.layer >= 2.0 || other.layer >= 2.0 {
            return self.maxabs(other);
        }

        let (a, b) = if self.cmpabs(other) == Ordering::Greater {
            (self, other)
        } else {
            (other, self)
        };
        if a.layer == 0.0 && b.layer == 0.0 {
            return Self::from_f64(a.sign * a.mag + b.sign * b.mag);
        }

        let layer_a = a.layer * sign_of(a.mag);
        let layer_b = b.layer * sign_of(b.mag);
        if layer_a - layer_b >= 2.0 {
            return a;
        }
        // mantissa of a relative to b, both expressed at layer 1
        let (mag_a, mag_b) = match (layer_a, layer_b) {
            (l_a, l_b) if l_a == 0.0 && l_b == -1.0 => (a.mag.log10(), b.mag),
            (l_a, l_b) if l_a == 1.0 && l_b == 0.0 => (a.mag, b.mag.log10()),
            _ => (a.mag, b.mag),
        };
        if (mag_a - mag_b).abs() > MAX_SIGNIFICANT_DIGITS {
            return a;
        }
        let magdiff = 10f64.powf(mag_a - mag_b);
        let mantissa = b.sign + a.sign * magdiff;
        Self::from_components(sign_of(mantissa), 1.0, mag_b + mantissa.abs().log10())
    }

    #[inline]
    pub fn sub(self, other: impl Into<Self>) -> Self {
        self.add(other.into().neg())
    }

    /// Product. A value times its reciprocal is exactly ±1.
    pub fn mul(self, other: impl Into<Self>) -> Self {
        let other = other.into();
        if self.is_nan() || other.is_nan() {
            return Self::NAN;
        }
        if self.is_infinite() || other.is_infinite() {
            if self.sign == 0.0 || other.sign == 0.0 {
                return Self::NAN;
            }
            return if self.sign * other.sign > 0.0 {
                Self::INFINITY
            } else {
                Self::NEG_INFINITY
            };
        }
        if self.sign == 0.0 || other.sign == 0.0 {
            return Self::ZERO;
        }
        if self.layer == other.layer && self.mag == -other.mag {
            return Self::from_components_no_normalize(self.sign * other.sign, 0.0, 1.0);
        }

        // a is further from 1 multiplicatively
        let (a, b) = if self.layer > other.layer
            || (self.layer == other.layer && self.mag.abs() > other.mag.abs())
        {
            (self, other)
        } else {
            (other, self)
        };
        let sign = a.sign * b.sign;
        if a.layer == 0.0 && b.layer == 0.0 {
            return Self::from_f64(sign * a.mag * b.mag);
        }
        if a.layer >= 3.0 || a.layer - b.layer >= 2.0 {
            return Self::from_components(sign, a.layer, a.mag);
        }
        if a.layer == 1.0 && b.layer == 0.0 {
            return Self::from_components(sign, 1.0, a.mag + b.mag.log10());
        }
        if a.layer == 1.0 && b.layer == 1.0 {
            return Self::from_components(sign, 1.0, a.mag + b.mag);
        }
        if a.layer == 2.0 && (b.layer == 1.0 || b.layer == 2.0) {
            // add the exponents one layer down
            let inner = Self::from_components(sign_of(a.mag), a.layer - 1.0, a.mag.abs())
                .add(Self::from_components(sign_of(b.mag), b.layer - 1.0, b.mag.abs()));
            return Self::from_components(sign, inner.layer + 1.0, inner.sign * inner.mag);
        }
        Self::NAN
    }

    #[inline]
    pub fn div(self, other: impl Into<Self>) -> Self {
        self.mul(other.into().recip())
    }

    /// `1 / self`; the reciprocal of zero is NaN.
    pub fn recip(self) -> Self {
        if self.is_nan() || self.mag == 0.0 {
            return Self::NAN;
        }
        if self.is_infinite() {
            return Self::ZERO;
        }
        if self.layer == 0.0 {
            Self::from_components(self.sign, 0.0, 1.0 / self.mag)
        } else {
            Self::from_components(self.sign, self.layer, -self.mag)
        }
    }

    #[inline]
    pub fn neg(self) -> Self {
        if self.sign == 0.0 {
            return self;
        }
        Self::from_components_no_normalize(-self.sign, self.layer, self.mag)
    }

    #[inline]
    pub fn abs(self) -> Self {
        Self::from_components_no_normalize(self.sign.abs(), self.layer, self.mag)
    }

    /// Remainder with the sign of `self`; the divisor's sign is ignored and a
    /// zero divisor gives zero.
    pub fn modulo(self, divisor: impl Into<Self>) -> Self {
        let divisor = divisor.into().abs();
        if divisor.is_zero() {
            return Self::ZERO;
        }
        let (this, that) = (self.to_f64(), divisor.to_f64());
        if this.is_finite() && that.is_finite() && this != 0.0 && that != 0.0 {
            return Self::from_f64(this % that);
        }
        if self.sub(divisor).eq(self) {
            // divisor too small to register against self
            return Self::ZERO;
        }
        if divisor.sub(self).eq(divisor) {
            return self;
        }
        if self.sign < 0.0 {
            return self.abs().modulo(divisor).neg();
        }
        self.sub(self.div(divisor).floor().mul(divisor))
    }
}

// ============================================================================
// Comparison
// ============================================================================

impl EternalDecimal {
    /// Orders magnitudes, ignoring sign.
    pub fn cmpabs(self, other: impl Into<Self>) -> Ordering {
        let other = other.into();
        match (self.sign == 0.0, other.sign == 0.0) {
            (true, true) => return Ordering::Equal,
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            (false, false) => {},
        }
        let layer_a = if self.mag > 0.0 { self.layer } else { -self.layer };
        let layer_b = if other.mag > 0.0 { other.layer } else { -other.layer };
        layer_a
            .total_cmp(&layer_b)
            .then_with(|| self.mag.total_cmp(&other.mag))
    }

    /// Total order by sign, then magnitude. NaN sorts above +∞.
    pub fn cmp(self, other: impl Into<Self>) -> Ordering {
        let other = other.into();
        match (self.is_nan(), other.is_nan()) {
            (true, true) => return Ordering::Equal,
            (true, false) => return Ordering::Greater,
            (false, true) => return Ordering::Less,
            (false, false) => {},
        }
        match self.sign.total_cmp(&other.sign) {
            Ordering::Equal if self.sign < 0.0 => self.cmpabs(other).reverse(),
            Ordering::Equal => self.cmpabs(other),
            unequal => unequal,
        }
    }

    #[inline]
    fn partial_order(self, other: Self) -> Option<Ordering> {
        if self.is_nan() || other.is_nan() {
            None
        } else {
            Some(self.cmp(other))
        }
    }

    #[inline]
    pub fn eq(self, other: impl Into<Self>) -> bool {
        let other = other.into();
        self.sign == other.sign && self.layer == other.layer && self.mag == other.mag
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

    /// Larger magnitude of the two.
    #[inline]
    pub fn maxabs(self, other: impl Into<Self>) -> Self {
        let other = other.into();
        if self.cmpabs(other) == Ordering::Less {
            other
        } else {
            self
        }
    }

    /// Smaller magnitude of the two.
    #[inline]
    pub fn minabs(self, other: impl Into<Self>) -> Self {
        let other = other.into();
        if self.cmpabs(other) == Ordering::Greater {
            other
        } else {
            self
        }
    }

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

    /// Relative-tolerance equality on the magnitudes.
    ///
    /// Values of different sign or more than one layer apart are never close. At
    /// layer 0 this is `|a - b| ≤ tolerance × max(|a|, |b|)`; at higher layers the
    /// same test runs on the innermost magnitudes, which makes it far looser than
    /// [`Decimal::eq_tolerance`](crate::Decimal::eq_tolerance): at layer 1 the
    /// tolerance applies to the exponents, so `1e100` and `2e100` are equal
    /// within `0.01`. Compare [`log10`](Self::log10) of both sides or collapse to
    /// `Decimal` when the leading digits matter.
    pub fn eq_tolerance(self, other: impl Into<Self>, tolerance: f64) -> bool {
        let other = other.into();
        if self.is_nan() || other.is_nan() {
            return false;
        }
        if self.eq(other) {
            return true;
        }
        if self.sign != other.sign || (self.layer - other.layer).abs() > 1.0 {
            return false;
        }
        let mut mag_a = self.mag;
        let mut mag_b = other.mag;
        if self.layer > other.layer {
            mag_b = signed_log10(mag_b);
        }
        if self.layer < other.layer {
            mag_a = signed_log10(mag_a);
        }
        (mag_a - mag_b).abs() <= tolerance * mag_a.abs().max(mag_b.abs())
    }

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
// Rounding
// ============================================================================

impl EternalDecimal {
    /// Anything beyond layer 0 is already integral (or a reciprocal tower).
    pub fn floor(self) -> Self {
        if self.mag < 0.0 {
            return if self.sign < 0.0 { Self::NEG_ONE } else { Self::ZERO };
        }
        if self.sign < 0.0 {
            return self.neg().ceil().neg();
        }
        if self.layer == 0.0 {
            return Self::from_f64((self.sign * self.mag).floor());
        }
        self
    }

    pub fn ceil(self) -> Self {
        if self.mag < 0.0 {
            return if self.sign > 0.0 { Self::ONE } else { Self::ZERO };
        }
        if self.sign < 0.0 {
            return self.neg().floor().neg();
        }
        if self.layer == 0.0 {
            return Self::from_f64((self.sign * self.mag).ceil());
        }
        self
    }

    /// Half-way cases round towards +∞.
    pub fn round(self) -> Self {
        if self.mag < 0.0 {
            return Self::ZERO;
        }
        if self.layer == 0.0 {
            return Self::from_f64(float::round_half_up(self.sign * self.mag));
        }
        self
    }

    pub fn trunc(self) -> Self {
        if self.mag < 0.0 {
            return Self::ZERO;
        }
        if self.layer == 0.0 {
            return Self::from_f64((self.sign * self.mag).trunc());
        }
        self
    }
}

// ============================================================================
// Series
// ============================================================================

impl EternalDecimal {
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

impl EternalDecimal {
    fn special_text(&self) -> Option<&'static str> {
        if self.is_nan() {
            Some("NaN")
        } else if self.is_infinite() {
            Some(if self.sign > 0.0 { "Infinity" } else { "-Infinity" })
        } else {
            None
        }
    }

    /// Layer-0 magnitudes rendered as a plain float.
    #[inline]
    fn is_plain(&self) -> bool {
        (self.mag < 1e21 && self.mag > 1e-7) || self.mag == 0.0
    }

    fn tower_prefix(&self) -> String {
        let sign = if self.sign < 0.0 { "-" } else { "" };
        if self.layer <= MAX_ES_IN_A_ROW {
            format!("{sign}{}", "e".repeat(self.layer as usize))
        } else {
            format!("{sign}(e^{})", format::number_to_string(self.layer))
        }
    }

    /// Like [`Display`](fmt::Display), with mantissa, exponent and magnitude
    /// rounded to `places` digits.
    pub fn to_string_with_decimal_places(self, places: usize) -> String {
        if let Some(text) = self.special_text() {
            return text.to_string();
        }
        if self.layer == 0.0 && self.is_plain() {
            return format::number_to_fixed(self.sign * self.mag, places);
        }
        if self.layer <= 1.0 {
            return format!(
                "{}e{}",
                format::number_to_string(float::decimal_places(self.mantissa(), places)),
                format::number_to_string(float::decimal_places(self.exponent(), places))
            );
        }
        format!(
            "{}{}",
            self.tower_prefix(),
            format::number_to_string(float::decimal_places(self.mag, places))
        )
    }

    pub fn to_exponential(self, places: usize) -> String {
        if self.layer == 0.0 {
            return format::number_to_exponential(self.sign * self.mag, places);
        }
        self.to_string_with_decimal_places(places)
    }

    pub fn to_fixed(self, places: usize) -> String {
        if self.layer == 0.0 {
            return format::number_to_fixed(self.sign * self.mag, places);
        }
        self.to_string_with_decimal_places(places)
    }

    /// `places` significant digits.
    pub fn to_precision(self, places: usize) -> String {
        let places = places.max(1);
        let exponent = self.exponent();
        if exponent <= -7.0 {
            return self.to_exponential(places - 1);
        }
        if (places as f64) > exponent {
            let fraction = places as f64 - exponent - 1.0;
            return self.to_fixed(fraction.max(0.0) as usize);
        }
        self.to_exponential(places - 1)
    }

    /// Canonical string, identical to `to_string()`.
    #[inline]
    pub fn to_json(self) -> String {
        self.to_string()
    }

    pub fn mantissa_with_decimal_places(self, places: usize) -> f64 {
        float::decimal_places(self.mantissa(), places)
    }

    pub fn magnitude_with_decimal_places(self, places: usize) -> f64 {
        float::decimal_places(self.mag, places)
    }
}

impl fmt::Display for EternalDecimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(text) = self.special_text() {
            return f.write_str(text);
        }
        if self.layer == 0.0 && self.is_plain() {
            return f.write_str(&format::number_to_string(self.sign * self.mag));
        }
        if self.layer <= 1.0 {
            return write!(
                f,
                "{}e{}",
                format::number_to_string(self.mantissa()),
                format::number_to_string(self.exponent())
            );
        }
        write!(f, "{}{}", self.tower_prefix(), format::number_to_string(self.mag))
    }
}

impl fmt::Debug for EternalDecimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "EternalDecimal({}, sign={}, layer={}, mag={})",
            self, self.sign, self.layer, self.mag
        )
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl Default for EternalDecimal {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

impl PartialEq for EternalDecimal {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        EternalDecimal::eq(*self, *other)
    }
}

impl PartialOrd for EternalDecimal {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.partial_order(*other)
    }
}

impl std::ops::Neg for EternalDecimal {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        EternalDecimal::neg(self)
    }
}

impl_binary_operators! {
    EternalDecimal, (f64, i32);
    Add: add, AddAssign: add_assign;
    Sub: sub, SubAssign: sub_assign;
    Mul: mul, MulAssign: mul_assign;
    Div: div, DivAssign: div_assign;
}

impl std::ops::Rem for EternalDecimal {
    type Output = Self;

    #[inline]
    fn rem(self, rhs: Self) -> Self {
        self.modulo(rhs)
    }
}

impl std::ops::Rem<f64> for EternalDecimal {
    type Output = Self;

    #[inline]
    fn rem(self, rhs: f64) -> Self {
        self.modulo(rhs)
    }
}

impl std::ops::RemAssign for EternalDecimal {
    #[inline]
    fn rem_assign(&mut self, rhs: Self) {
        *self = self.modulo(rhs);
    }
}

impl From<f64> for EternalDecimal {
    #[inline]
    fn from(value: f64) -> Self {
        Self::from_f64(value)
    }
}

impl_from_primitives!(EternalDecimal; f32, i8, i16, i32, i64, u8, u16, u32, u64, usize);

impl From<&EternalDecimal> for EternalDecimal {
    #[inline]
    fn from(value: &EternalDecimal) -> Self {
        *value
    }
}

impl From<Decimal> for EternalDecimal {
    #[inline]
    fn from(value: Decimal) -> Self {
        Self::from_decimal(value)
    }
}

impl From<EternalDecimal> for f64 {
    #[inline]
    fn from(value: EternalDecimal) -> f64 {
        value.to_f64()
    }
}

impl TryFrom<EternalDecimal> for Decimal {
    type Error = NumericError;

    /// Fails with `Overflow`/`Underflow` when the value lies outside the
    /// bounded engine's exponent range.
    fn try_from(value: EternalDecimal) -> Result<Self, Self::Error> {
        value.collapse_checked()
    }
}

impl Sum for EternalDecimal {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, value| acc.add(value))
    }
}

impl<'a> Sum<&'a EternalDecimal> for EternalDecimal {
    fn sum<I: Iterator<Item = &'a EternalDecimal>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl Product for EternalDecimal {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ONE, |acc, value| acc.mul(value))
    }
}

impl<'a> Product<&'a EternalDecimal> for EternalDecimal {
    fn product<I: Iterator<Item = &'a EternalDecimal>>(iter: I) -> Self {
        iter.copied().product()
    }
}

#[cfg(feature = "serde")]
impl_serde_via_string!(EternalDecimal);

// ============================================================================
// String Parsing
// ============================================================================

impl EternalDecimal {
    /// `[-](e^N)X`: a tower of `N` layers over magnitude `X`.
    fn parse_layer_notation(canonical: &str) -> Option<NumericResult<Self>> {
        let (sign, rest) = match canonical.strip_prefix('-') {
            Some(rest) => (-1.0, rest),
            None => (1.0, canonical),
        };
        let rest = rest.strip_prefix("(e^")?;
        let parsed = rest.split_once(')').and_then(|(layer, mag)| {
            let layer = parse_finite(layer)?;
            let mag = parse_finite(mag)?;
            Some(Self::from_components(sign, layer, mag))
        });
        Some(parsed.ok_or(NumericError::InvalidInput))
    }

    /// `XptY`/`XpY`: 10 tetrated `X` times over payload `Y` (default 1).
    fn parse_tetration_shorthand(canonical: &str) -> Option<NumericResult<Self>> {
        let (height, payload) = canonical
            .split_once("pt")
            .or_else(|| canonical.split_once('p'))?;
        let payload = payload.replace(['(', ')'], "");
        let parsed = parse_finite(height).and_then(|height| {
            let payload = if payload.is_empty() {
                1.0
            } else {
                parse_finite(&payload)?
            };
            Some(Self::TEN.tetrate(height, payload, false))
        });
        Some(parsed.ok_or(NumericError::InvalidInput))
    }

    /// `AeB`, `AeBeC`, `eeX` and friends.
    fn parse_e_chain(canonical: &str) -> NumericResult<Self> {
        let parts = parsing::split_e_chain(canonical);
        let ecount = parts.len() - 1;
        if ecount == 0 {
            return parse_finite(canonical)
                .map(Self::from_f64)
                .ok_or(NumericError::InvalidInput);
        }
        if ecount == 1 {
            // "2e-3000" is a valid float that rounds to zero
            if let Some(value) = parse_finite(canonical).filter(|value| *value != 0.0) {
                return Ok(Self::from_f64(value));
            }
        }

        let head = parts[0];
        let mantissa = match head {
            "" | "-" | "+" => None,
            text => Some(parse_finite(text).ok_or(NumericError::InvalidInput)?),
        };
        if mantissa == Some(0.0) {
            return Ok(Self::ZERO);
        }
        let mut exponent = parse_finite(parts[ecount]).ok_or(NumericError::InvalidInput)?;
        for middle in &parts[1..ecount] {
            if !middle.is_empty() && parse_finite(middle).is_none() {
                return Err(NumericError::InvalidInput);
            }
        }
        if ecount >= 2 {
            if let Some(inner) = parse_finite(parts[ecount - 1]) {
                exponent = exponent * sign_of(inner) + signed_log10(inner);
            }
        }

        let layer = ecount as f64;
        Ok(match mantissa {
            None => {
                let sign = if head == "-" { -1.0 } else { 1.0 };
                Self::from_components(sign, layer, exponent)
            },
            Some(mantissa) if ecount == 1 => Self::from_components(
                sign_of(mantissa),
                1.0,
                exponent + mantissa.abs().log10(),
            ),
            Some(mantissa) if ecount == 2 => {
                Self::from_components(1.0, 2.0, exponent).mul(Self::from_f64(mantissa))
            },
            // the mantissa is negligible at three layers and up
            Some(mantissa) => Self::from_components(sign_of(mantissa), layer, exponent),
        })
    }
}

impl FromStr for EternalDecimal {
    type Err = NumericError;

    /// Parse any of the layered notations.
    ///
    /// # Examples
    /// - "123.5", "1.5e400", "2e-3000"
    /// - "ee100" -> 10^10^100, "-eee5" -> -10^10^10^5
    /// - "(e^7)1234" -> seven layers over 1234
    /// - "2^1024", "3^^4", "2^^^3;1.5", "2pt3" (10^^2 over 3)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let canonical = canonical_input(s);
        if canonical.is_empty() {
            return Err(NumericError::InvalidInput);
        }
        if let Some(value) = parsing::special_value(&canonical) {
            return Ok(Self::from_f64(value));
        }
        if let Some(parsed) = Self::parse_layer_notation(&canonical) {
            return parsed;
        }
        if let Some((base, rest)) = canonical.split_once("^^^") {
            let base = parse_finite(base).ok_or(NumericError::InvalidInput)?;
            let (height, payload) = parse_height_payload(rest).ok_or(NumericError::InvalidInput)?;
            return Ok(Self::from_f64(base).pentate(height, payload.unwrap_or(1.0), false));
        }
        if let Some((base, rest)) = canonical.split_once("^^") {
            let base = parse_finite(base).ok_or(NumericError::InvalidInput)?;
            let (height, payload) = parse_height_payload(rest).ok_or(NumericError::InvalidInput)?;
            return Ok(Self::from_f64(base).tetrate(height, payload.unwrap_or(1.0), false));
        }
        if let Some((base, power)) = canonical.split_once('^') {
            let base = parse_finite(base).ok_or(NumericError::InvalidInput)?;
            let power = parse_finite(power).ok_or(NumericError::InvalidInput)?;
            return Ok(Self::from_f64(base).pow(power));
        }
        if let Some(parsed) = Self::parse_tetration_shorthand(&canonical) {
            return parsed;
        }
        Self::parse_e_chain(&canonical)
    }
}

impl From<&str> for EternalDecimal {
    /// Lenient parse: unparseable input becomes NaN.
    fn from(value: &str) -> Self {
        value.parse().unwrap_or_else(|_| {
            tracing::debug!(input = value, "unparseable layered literal, using NaN");
            Self::NAN
        })
    }
}

impl From<String> for EternalDecimal {
    #[inline]
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> EternalDecimal {
        text.parse().unwrap()
    }

    fn close(a: f64, b: f64, tolerance: f64) -> bool {
        (a - b).abs() <= tolerance * a.abs().max(b.abs()).max(1e-300)
    }

    #[test]
    fn test_layer_promotion() {
        let big = EternalDecimal::from_f64(1e20);
        assert_eq!(big.layer(), 1.0);
        assert_eq!(big.mag(), 20.0);

        let tiny = EternalDecimal::from_f64(1e-20);
        assert_eq!(tiny.layer(), 1.0);
        assert_eq!(tiny.mag(), -20.0);

        let small = EternalDecimal::from_f64(12345.0);
        assert_eq!(small.layer(), 0.0);
        assert_eq!(small.mag(), 12345.0);
        assert_eq!(small.sign(), 1);
    }

    #[test]
    fn test_layer_demotion() {
        let x = EternalDecimal::from_components(1.0, 1.0, 10.0);
        assert_eq!(x.layer(), 0.0);
        assert!(close(x.mag(), 1e10, 1e-15));

        let y = EternalDecimal::from_components(-1.0, 2.0, 1.0);
        assert_eq!(y.layer(), 0.0);
        assert_eq!(y.sign(), -1);
        assert!(close(y.mag(), 1e10, 1e-15));

        let z = EternalDecimal::from_components(1.0, 0.0, -5.0);
        assert_eq!(z.sign(), -1);
        assert_eq!(z.mag(), 5.0);
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for value in [
            EternalDecimal::from_f64(1e20),
            EternalDecimal::from_f64(-3.5),
            EternalDecimal::from_f64(1e-20),
            parse("ee100"),
            parse("(e^9)12.5"),
            EternalDecimal::ZERO,
            EternalDecimal::NEG_INFINITY,
        ] {
            assert_eq!(value.normalize(), value);
        }
        assert!(EternalDecimal::NAN.normalize().is_nan());
    }

    #[test]
    fn test_agrees_with_bounded_engine() {
        let bounded = Decimal::from_mantissa_exponent(1.5, 400.0);
        let layered = EternalDecimal::from(bounded);
        assert_eq!(layered.layer(), 1.0);
        assert!(close(layered.mantissa(), 1.5, 1e-12));
        assert_eq!(layered.exponent(), 400.0);
        assert!(layered.collapse().eq_tolerance(bounded, 1e-12));

        let plain = Decimal::from(12345).promote();
        assert_eq!(plain.layer(), 0.0);
        assert!(plain.eq_tolerance(12345, 1e-15));
        assert!(plain.collapse().eq_tolerance(12345, 1e-15));
    }

    #[test]
    fn test_collapse_saturates() {
        assert_eq!(parse("ee20").collapse(), Decimal::INFINITY);
        assert_eq!(parse("-ee20").collapse(), Decimal::NEG_INFINITY);
        assert_eq!(parse("1e-400").collapse().exponent(), -400);
        assert_eq!(Decimal::try_from(parse("ee20")), Err(NumericError::Overflow));
        assert_eq!(
            Decimal::try_from(parse("ee20").recip()),
            Err(NumericError::Underflow)
        );
        assert_eq!(
            Decimal::try_from(parse("1e400")),
            Ok(Decimal::from_mantissa_exponent(1.0, 400.0))
        );
    }

    #[test]
    fn test_add() {
        assert_eq!(EternalDecimal::from(2).add(3), EternalDecimal::from(5));

        let big = parse("1e400");
        assert_eq!(big.add(1), big);
        assert!(big.add(big).eq_tolerance(parse("2e400"), 1e-12));
        assert_eq!(big.sub(big), EternalDecimal::ZERO);

        let tower = parse("ee20");
        assert_eq!(tower.add(parse("ee19")), tower);
        assert_eq!(tower.add(tower.neg()), EternalDecimal::ZERO);

        assert!(EternalDecimal::INFINITY
            .add(EternalDecimal::NEG_INFINITY)
            .is_nan());
        assert_eq!(
            EternalDecimal::INFINITY.add(big),
            EternalDecimal::INFINITY
        );
    }

    #[test]
    fn test_add_across_layers() {
        // 1e20 + 1e5: layer 1 + layer 0
        let sum = EternalDecimal::from(1e20).add(1e5);
        assert!(close(sum.to_f64(), 1e20 + 1e5, 1e-14));

        // 5 + 1e-20: the tiny addend vanishes
        assert_eq!(EternalDecimal::from(5).add(1e-20), EternalDecimal::from(5));
    }

    #[test]
    fn test_mul_and_div() {
        assert_eq!(EternalDecimal::from(2).mul(3), EternalDecimal::from(6));
        assert_eq!(parse("1e400").mul(parse("1e400")), parse("1e800"));
        assert_eq!(parse("1e400").mul(parse("1e-400")), EternalDecimal::ONE);
        assert_eq!(parse("-ee20").mul(parse("ee20").recip()), EternalDecimal::NEG_ONE);

        let squared = parse("ee20").mul(parse("ee20"));
        assert_eq!(squared.layer(), 2.0);
        assert!(close(squared.mag(), 20.0 + 2f64.log10(), 1e-12));

        assert_eq!(parse("ee20").mul(parse("1e400")), parse("ee20"));
        assert!(EternalDecimal::INFINITY.mul(0).is_nan());
        assert!(EternalDecimal::ZERO.recip().is_nan());
        assert_eq!(EternalDecimal::INFINITY.recip(), EternalDecimal::ZERO);
        assert_eq!(parse("1e800").div(parse("1e400")), parse("1e400"));
    }

    #[test]
    fn test_modulo() {
        assert_eq!(EternalDecimal::from(10).modulo(3), EternalDecimal::from(1));
        assert_eq!(EternalDecimal::from(-10).modulo(3), EternalDecimal::from(-1));
        assert_eq!(EternalDecimal::from(10).modulo(-3), EternalDecimal::from(1));
        assert_eq!(EternalDecimal::from(10).modulo(0), EternalDecimal::ZERO);
        assert_eq!(parse("1e400").modulo(7), EternalDecimal::ZERO);
        assert_eq!(parse("1e-400").modulo(7), parse("1e-400"));
        assert_eq!(EternalDecimal::from(7.5) % 2.0, EternalDecimal::from(1.5));
    }

    #[test]
    fn test_ordering() {
        let ordered = [
            EternalDecimal::NEG_INFINITY,
            parse("-ee20"),
            parse("-1e400"),
            EternalDecimal::from(-1),
            parse("-1e-400"),
            EternalDecimal::ZERO,
            parse("1e-400"),
            EternalDecimal::from(1),
            parse("1e400"),
            parse("ee20"),
            parse("(e^10)5"),
            EternalDecimal::INFINITY,
            EternalDecimal::NAN,
        ];
        for (i, a) in ordered.iter().enumerate() {
            for (j, b) in ordered.iter().enumerate() {
                assert_eq!(a.cmp(*b), i.cmp(&j), "{a:?} vs {b:?}");
            }
        }
        assert!(!EternalDecimal::NAN.gt(1));
        assert_eq!(EternalDecimal::NAN.partial_cmp(&EternalDecimal::ONE), None);
    }

    #[test]
    fn test_cmpabs_family() {
        let a = EternalDecimal::from(-100);
        let b = EternalDecimal::from(5);
        assert_eq!(a.cmpabs(b), Ordering::Greater);
        assert_eq!(a.maxabs(b), a);
        assert_eq!(a.minabs(b), b);
        assert_eq!(EternalDecimal::ZERO.cmpabs(parse("1e-400")), Ordering::Less);
        assert_eq!(EternalDecimal::from(50).clamp(0, 10), EternalDecimal::from(10));
    }

    #[test]
    fn test_eq_tolerance() {
        let a = EternalDecimal::from(1e100);
        assert!(a.eq_tolerance(1.0000001e100, 1e-6));
        assert!(!a.eq_tolerance(1.01e100, 1e-6));
        assert!(!a.eq_tolerance(-1e100, 1e-6));
        assert!(!a.eq_tolerance(parse("ee100"), 1e-6));
        assert!(EternalDecimal::from(100).eq_tolerance(100.00001, 1e-6));
        // layer 1 compares exponents
        assert!(a.eq_tolerance(2e100, 0.01));
        assert!(!crate::Decimal::from(1e100).eq_tolerance(2e100, 0.01));
        assert!(a.lt_tolerance(1.01e100, 1e-6));
        assert!(a.gte_tolerance(1.0000001e100, 1e-6));
        assert_eq!(a.cmp_tolerance(1.0000001e100, 1e-6), Ordering::Equal);
    }

    #[test]
    fn test_rounding() {
        assert_eq!(EternalDecimal::from(2.5).round(), EternalDecimal::from(3));
        assert_eq!(EternalDecimal::from(-2.5).floor(), EternalDecimal::from(-3));
        assert_eq!(EternalDecimal::from(-2.5).ceil(), EternalDecimal::from(-2));
        assert_eq!(EternalDecimal::from(-2.7).trunc(), EternalDecimal::from(-2));
        assert_eq!(parse("1e-400").floor(), EternalDecimal::ZERO);
        assert_eq!(parse("-1e-400").floor(), EternalDecimal::NEG_ONE);
        assert_eq!(parse("1e-400").ceil(), EternalDecimal::ONE);
        assert_eq!(parse("ee20").floor(), parse("ee20"));
    }

    #[test]
    fn test_accessors() {
        let x = EternalDecimal::from(1234.5);
        assert!(close(x.mantissa(), 1.2345, 1e-15));
        assert_eq!(x.exponent(), 3.0);
        assert_eq!(parse("ee5").exponent(), 100000.0);
        assert_eq!(parse("eee5").exponent(), f64::INFINITY);
        assert_eq!(EternalDecimal::from_components(1.0, 1.0, 20.0).to_f64(), 1e20);
        assert_eq!(parse("ee20").to_f64(), f64::INFINITY);
        assert_eq!(parse("ee20").recip().to_f64(), 0.0);
    }

    #[test]
    fn test_display() {
        assert_eq!(EternalDecimal::from(123.5).to_string(), "123.5");
        assert_eq!(EternalDecimal::from(1e-10).to_string(), "1e-10");
        assert_eq!(parse("1e400").to_string(), "1e400");
        assert_eq!(parse("ee20.5").to_string(), "ee20.5");
        assert_eq!(parse("-ee20").to_string(), "-ee20");
        assert_eq!(parse("eeeee20").to_string(), "eeeee20");
        assert_eq!(parse("(e^7)1234").to_string(), "(e^7)1234");
        assert_eq!(EternalDecimal::NAN.to_string(), "NaN");
        assert_eq!(EternalDecimal::NEG_INFINITY.to_string(), "-Infinity");
    }

    #[test]
    fn test_fixed_width_formats() {
        assert_eq!(EternalDecimal::from(3.14159).to_fixed(2), "3.14");
        assert_eq!(EternalDecimal::from(12345).to_exponential(2), "1.23e+4");
        // places counts digits after the leading one
        assert_eq!(parse("ee20.123456").to_fixed(2), "ee20.1");
        assert_eq!(parse("ee20.123456").magnitude_with_decimal_places(3), 20.12);
        assert_eq!(EternalDecimal::from(123.456).to_precision(4), "123.5");
        assert_eq!(parse("1.5e400").mantissa_with_decimal_places(2), 1.5);
        assert_eq!(parse("1.5e400").to_string_with_decimal_places(2), "1.5e400");
    }

    #[test]
    fn test_parse_e_chains() {
        assert_eq!(parse("1e400").layer(), 1.0);
        assert_eq!(parse("1e400").mag(), 400.0);
        assert_eq!(parse("ee5"), parse("1e100000"));
        assert_eq!(parse("-ee5").sign(), -1);

        let small = parse("2e-3000");
        assert_eq!(small.layer(), 1.0);
        assert!(close(small.mag(), -3000.0 + 2f64.log10(), 1e-15));

        let chained = parse("1e2e3");
        assert_eq!(chained.layer(), 1.0);
        assert!(close(chained.mag(), 2000.0, 1e-12));

        assert_eq!(parse("1,000"), EternalDecimal::from(1000));
        assert_eq!(parse("1E400"), parse("1e400"));
    }

    #[test]
    fn test_parse_operator_forms() {
        assert_eq!(parse("2^10"), EternalDecimal::from(1024));
        assert_eq!(parse("10^^2"), EternalDecimal::from(1e10));
        assert_eq!(parse("2^^^2"), EternalDecimal::from(4));
        assert_eq!(parse("1pt2"), EternalDecimal::from(100));
        assert_eq!(parse("1p(2)"), EternalDecimal::from(100));
        assert_eq!(parse("(e^7)1234").layer(), 7.0);
        assert_eq!(parse("-(e^7)1234").sign(), -1);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for text in ["", "abc", "1e5x", "ee", "2^^x", "(e^x)5", "1e2ex3"] {
            assert_eq!(
                text.parse::<EternalDecimal>(),
                Err(NumericError::InvalidInput),
                "{text}"
            );
        }
        assert!(EternalDecimal::from("abc").is_nan());
    }

    #[test]
    fn test_string_roundtrip() {
        for value in [
            EternalDecimal::from(123.5),
            EternalDecimal::from(-1e-10),
            parse("1.5e400"),
            parse("-3e-999"),
            parse("ee20.5"),
            parse("(e^12)3.25"),
        ] {
            let back = parse(&value.to_string());
            assert!(back.eq_tolerance(value, 1e-12), "{value:?} -> {back:?}");
        }
    }

    #[test]
    fn test_operators_and_folds() {
        let a = EternalDecimal::from(6);
        assert_eq!(a + 4, EternalDecimal::from(10));
        assert_eq!(a * 2.0, EternalDecimal::from(12));
        assert_eq!(3 * a, EternalDecimal::from(18));
        assert_eq!(-a, EternalDecimal::from(-6));

        let values = [a, EternalDecimal::from(2), EternalDecimal::from(3)];
        let total: EternalDecimal = values.iter().sum();
        let product: EternalDecimal = values.into_iter().product();
        assert_eq!(total, EternalDecimal::from(11));
        assert_eq!(product, EternalDecimal::from(36));
    }

    #[test]
    fn test_series() {
        assert_eq!(
            EternalDecimal::afford_geometric_series(100, 10, 2, 0),
            EternalDecimal::from(3)
        );
        assert_eq!(
            EternalDecimal::sum_arithmetic_series(5, 10, 5, 0),
            EternalDecimal::from(100)
        );
        assert_eq!(
            EternalDecimal::efficiency_of_purchase(100, 10, 5),
            EternalDecimal::from(30)
        );
    }
}
