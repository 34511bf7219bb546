// ============================================================================
// Layered Transcendental Functions
// Logarithms, powers, gamma and trigonometry over (sign, layer, mag)
// ============================================================================

use super::EternalDecimal;
use crate::utils::float::sign_of;
use std::f64::consts::{LN_10, LOG10_E, LOG2_10};

/// `log10(ln 10)`: the layer-2 offset of `ln`.
const LOG10_LN_10: f64 = 0.362_215_688_699_463_25;

/// `log10(log2 10)`: the layer-2 offset of `log2`.
const LOG10_LOG2_10: f64 = 0.521_390_227_654_324_7;

/// `0.5 × ln(2π)`
const HALF_LN_TAU: f64 = 0.918_938_533_204_672_7;

/// Largest `x` with a finite `e^x`.
const EXP_F64_LIMIT: f64 = 709.7;

/// Below this, gamma runs on plain floats.
const GAMMA_F64_LIMIT: f64 = 24.0;

/// `ln Γ(n + 1)` via Stirling's series; accurate to f64 precision for `n ≥ 9`.
fn stirling_ln_factorial(n: f64) -> f64 {
    let n2 = n * n;
    let mut np = n;
    let mut l = HALF_LN_TAU + (n + 0.5) * n.ln() - n;
    for (i, (numerator, denominator)) in [
        (1.0, 12.0),
        (1.0, 360.0),
        (1.0, 1260.0),
        (1.0, 1680.0),
        (1.0, 1188.0),
        (691.0, 360_360.0),
        (1.0, 156.0),
        (3617.0, 122_400.0),
    ]
    .into_iter()
    .enumerate()
    {
        let term = numerator / (denominator * np);
        if i % 2 == 0 {
            l += term;
        } else {
            l -= term;
        }
        np *= n2;
    }
    l
}

/// Γ(n) on plain floats, shifting small arguments up to 10 first.
pub(super) fn f_gamma(mut n: f64) -> f64 {
    if !n.is_finite() {
        return n;
    }
    if n < -50.0 {
        return if n == n.trunc() { f64::NEG_INFINITY } else { 0.0 };
    }
    let mut scale = 1.0;
    while n < 10.0 {
        scale *= n;
        n += 1.0;
    }
    stirling_ln_factorial(n - 1.0).exp() / scale
}

impl EternalDecimal {
    // ========================================================================
    // Logarithms
    // ========================================================================

    /// `log10(|self|)`; -∞ for zero.
    pub fn abs_log10(self) -> Self {
        if self.is_nan() {
            return Self::NAN;
        }
        if self.sign == 0.0 {
            return Self::NEG_INFINITY;
        }
        if self.layer > 0.0 {
            Self::from_components(sign_of(self.mag), self.layer - 1.0, self.mag.abs())
        } else {
            Self::from_components(1.0, 0.0, self.mag.log10())
        }
    }

    /// NaN for negative values, -∞ for zero.
    pub fn log10(self) -> Self {
        if self.sign < 0.0 {
            return Self::NAN;
        }
        self.abs_log10()
    }

    /// `log10`, but 0 for anything below 1.
    pub fn p_log10(self) -> Self {
        if self.lt(Self::ONE) {
            Self::ZERO
        } else {
            self.log10()
        }
    }

    pub fn ln(self) -> Self {
        self.log_with(f64::ln, LN_10, LOG10_LN_10)
    }

    pub fn log2(self) -> Self {
        self.log_with(f64::log2, LOG2_10, LOG10_LOG2_10)
    }

    /// Logarithm whose layer-1 scale is `factor` and layer-2 offset `log10(factor)`.
    fn log_with(self, layer0: fn(f64) -> f64, factor: f64, log10_factor: f64) -> Self {
        if self.is_nan() || self.sign < 0.0 {
            return Self::NAN;
        }
        if self.sign == 0.0 {
            return Self::NEG_INFINITY;
        }
        if self.is_infinite() {
            return Self::INFINITY;
        }
        let inner_sign = sign_of(self.mag);
        match self.layer {
            layer if layer == 0.0 => Self::from_f64(layer0(self.mag)),
            layer if layer == 1.0 => Self::from_components(inner_sign, 0.0, self.mag.abs() * factor),
            layer if layer == 2.0 => {
                Self::from_components(inner_sign, 1.0, self.mag.abs() + log10_factor)
            },
            layer => Self::from_components(inner_sign, layer - 1.0, self.mag.abs()),
        }
    }

    /// Logarithm in an arbitrary base; NaN for bases `≤ 0` or equal to 1.
    pub fn log(self, base: impl Into<Self>) -> Self {
        let base = base.into();
        if self.is_nan() || base.is_nan() || self.sign < 0.0 || base.sign <= 0.0 {
            return Self::NAN;
        }
        if base.eq(Self::ONE) {
            return Self::NAN;
        }
        if self.layer == 0.0 && base.layer == 0.0 {
            return Self::from_f64(self.mag.ln() / base.mag.ln());
        }
        self.log10().div(base.log10())
    }

    // ========================================================================
    // Powers
    // ========================================================================

    /// `10^self`
    pub fn pow10(self) -> Self {
        if self.is_nan() {
            return Self::NAN;
        }
        if self.is_infinite() {
            return if self.sign > 0.0 {
                Self::INFINITY
            } else {
                Self::ZERO
            };
        }
        let mut a = self;
        if a.layer == 0.0 {
            let direct = 10f64.powf(a.sign * a.mag);
            if direct.is_finite() && direct.abs() >= 0.1 {
                return Self::from_components(1.0, 0.0, direct);
            }
            if a.sign == 0.0 {
                return Self::ONE;
            }
            a = Self::from_components_no_normalize(a.sign, 1.0, a.mag.log10());
        }
        if a.sign > 0.0 && a.mag >= 0.0 {
            return Self::from_components(1.0, a.layer + 1.0, a.mag);
        }
        if a.sign < 0.0 && a.mag >= 0.0 {
            return Self::from_components(1.0, a.layer + 1.0, -a.mag);
        }
        // 10^(±tiny) rounds to 1
        Self::ONE
    }

    /// `self^power`.
    ///
    /// Layer-0 operands with a representable result use `f64::powf`; everything
    /// else goes through `10^(power × log10|self|)`. Negative bases only allow
    /// integer powers, and `0^negative` is +∞.
    pub fn pow(self, power: impl Into<Self>) -> Self {
        let power = power.into();
        if self.is_nan() || power.is_nan() {
            return Self::NAN;
        }
        if self.sign == 0.0 {
            return match sign_of(power.sign) {
                s if s == 0.0 => Self::ONE,
                s if s < 0.0 => Self::INFINITY,
                _ => Self::ZERO,
            };
        }
        if self.eq(Self::ONE) {
            return self;
        }
        if power.sign == 0.0 {
            return Self::ONE;
        }
        if power.eq(Self::ONE) {
            return self;
        }
        if self.layer == 0.0 && power.layer == 0.0 {
            let direct = (self.sign * self.mag).powf(power.sign * power.mag);
            if direct.is_finite() && direct != 0.0 {
                return Self::from_f64(direct);
            }
        }

        let result = self.abs_log10().mul(power).pow10();
        if self.sign < 0.0 {
            match (power.to_f64() % 2.0).abs() {
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
    pub fn root(self, degree: impl Into<Self>) -> Self {
        self.pow(degree.into().recip())
    }

    /// `e^self`
    pub fn exp(self) -> Self {
        if self.is_nan() {
            return Self::NAN;
        }
        if self.is_infinite() {
            return if self.sign > 0.0 {
                Self::INFINITY
            } else {
                Self::ZERO
            };
        }
        if self.mag < 0.0 {
            return Self::ONE;
        }
        match self.layer {
            layer if layer == 0.0 && self.mag <= EXP_F64_LIMIT => {
                Self::from_f64((self.sign * self.mag).exp())
            },
            layer if layer == 0.0 => Self::from_components(1.0, 1.0, self.sign * LOG10_E * self.mag),
            layer if layer == 1.0 => {
                Self::from_components(1.0, 2.0, self.sign * (LOG10_E.log10() + self.mag))
            },
            layer => Self::from_components(1.0, layer + 1.0, self.sign * self.mag),
        }
    }

    #[inline]
    pub fn sqr(self) -> Self {
        self.pow(2)
    }

    /// NaN for negative values.
    pub fn sqrt(self) -> Self {
        if self.sign < 0.0 {
            return Self::NAN;
        }
        if self.layer == 0.0 {
            return Self::from_f64(self.mag.sqrt());
        }
        self.pow(0.5)
    }

    #[inline]
    pub fn cube(self) -> Self {
        self.pow(3)
    }

    /// Real cube root, negative for negative values.
    pub fn cbrt(self) -> Self {
        if self.sign < 0.0 {
            return self.abs().cbrt().neg();
        }
        if self.layer == 0.0 {
            return Self::from_f64(self.mag.cbrt());
        }
        self.pow(1.0 / 3.0)
    }

    // ========================================================================
    // Gamma
    // ========================================================================

    /// Γ(self). Layer 0 is exact to float precision; beyond that Stirling's
    /// leading term is applied in log space.
    pub fn gamma(self) -> Self {
        if self.is_nan() || self.eq(Self::NEG_INFINITY) {
            return Self::NAN;
        }
        if self.is_infinite() {
            return Self::INFINITY;
        }
        if self.mag < 0.0 {
            return self.recip();
        }
        if self.layer == 0.0 {
            if self.lt(GAMMA_F64_LIMIT) {
                return Self::from_f64(f_gamma(self.sign * self.mag));
            }
            return Self::from_f64(stirling_ln_factorial(self.mag - 1.0)).exp();
        }
        if self.layer == 1.0 {
            return self.mul(self.ln().sub(1)).exp();
        }
        self.exp()
    }

    /// `ln Γ(self)`
    #[inline]
    pub fn lngamma(self) -> Self {
        self.gamma().ln()
    }

    /// `self!`, continuous through `Γ(self + 1)`.
    pub fn factorial(self) -> Self {
        if self.mag < 0.0 || self.layer == 0.0 {
            return self.add(1).gamma();
        }
        if self.layer == 1.0 {
            return self.mul(self.ln().sub(1)).exp();
        }
        self.exp()
    }

    // ========================================================================
    // Trigonometry
    // ========================================================================
    //
    // Periodic functions only make sense on the float approximation; tiny
    // reciprocal towers use the small-angle identities.

    pub fn sin(self) -> Self {
        if self.mag < 0.0 {
            return self;
        }
        Self::from_f64(self.to_f64().sin())
    }

    pub fn cos(self) -> Self {
        if self.mag < 0.0 {
            return Self::ONE;
        }
        Self::from_f64(self.to_f64().cos())
    }

    pub fn tan(self) -> Self {
        if self.mag < 0.0 {
            return self;
        }
        Self::from_f64(self.to_f64().tan())
    }

    pub fn asin(self) -> Self {
        if self.mag < 0.0 {
            return self;
        }
        Self::from_f64(self.to_f64().asin())
    }

    pub fn acos(self) -> Self {
        Self::from_f64(self.to_f64().acos())
    }

    pub fn atan(self) -> Self {
        if self.mag < 0.0 {
            return self;
        }
        Self::from_f64(self.to_f64().atan())
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

    pub fn asinh(self) -> Self {
        if self.layer == 0.0 {
            return Self::from_f64(self.to_f64().asinh());
        }
        self.add(self.sqr().add(1).sqrt()).ln()
    }

    pub fn acosh(self) -> Self {
        if self.layer == 0.0 {
            return Self::from_f64(self.to_f64().acosh());
        }
        self.add(self.sqr().sub(1).sqrt()).ln()
    }

    /// NaN outside `(-1, 1)`.
    pub fn atanh(self) -> Self {
        if self.is_nan() || self.abs().gte(1) {
            return Self::NAN;
        }
        Self::from_f64(self.to_f64().atanh())
    }
}
