// ============================================================================
// Hyper-Operators
// Tetration, super-logarithm, layer arithmetic, pentation and super-roots
// ============================================================================
//
// Fractional heights are defined through the critical section: `b^^h` for
// `h ∈ [0, 1]` comes from the lookup grids (or `b^h` in linear mode), and every
// other height is reached by exponentiating or taking logarithms from there.
// Loops are capped so that pathological inputs terminate with a best effort.

use super::critical_section::{slog_critical, tetrate_critical};
use super::EternalDecimal;

/// `e^(1/e)`: the largest base whose infinite tower converges.
const CONVERGENCE_LIMIT: f64 = 1.444_667_861_009_766_133_66;

/// `e^-e`: below this the infinite tower oscillates instead of converging.
const OSCILLATION_LIMIT: f64 = 0.065_988_035_845_312_537_08;

const TETRATE_ITERATIONS: u64 = 10_000;
const SLOG_ITERATIONS: usize = 100;
const LAYERADD_ITERATIONS: usize = 100;
const PENTATE_ITERATIONS: u64 = 10;
const SROOT_ITERATIONS: usize = 1_000;

/// Splits a height into its whole and fractional parts; infinite heights have
/// no fraction.
fn split_height(height: f64) -> (f64, f64) {
    let whole = height.trunc();
    if height.is_finite() {
        (whole, height - whole)
    } else {
        (whole, 0.0)
    }
}

impl EternalDecimal {
    /// `self^^height` on top of `payload`: `self^(self^(…^payload))` with `height`
    /// exponentiations.
    ///
    /// Negative heights take iterated logarithms of the payload instead. With
    /// `linear` the fractional part of the height uses `self^frac` in place of the
    /// critical-section grids.
    pub fn tetrate(self, height: f64, payload: impl Into<Self>, linear: bool) -> Self {
        let mut payload = payload.into();
        if self.is_nan() || height.is_nan() || payload.is_nan() {
            return Self::NAN;
        }
        if height == 1.0 {
            return self.pow(payload);
        }
        if height == 0.0 {
            return payload;
        }
        if self.eq(Self::ONE) {
            return Self::ONE;
        }
        if self.eq(Self::NEG_ONE) {
            return self.pow(payload);
        }

        if height == f64::INFINITY {
            let base = self.to_f64();
            if (OSCILLATION_LIMIT..=CONVERGENCE_LIMIT).contains(&base) {
                if base > 1.444_667_861_009_099 {
                    return Self::from_f64(std::f64::consts::E);
                }
                let neg_ln = self.ln().neg();
                return neg_ln.lambertw().div(neg_ln);
            }
            if base > CONVERGENCE_LIMIT {
                return Self::INFINITY;
            }
            return Self::NAN;
        }

        if self.is_zero() {
            // 0^^n alternates between 1 and 0; fractional heights interpolate
            let mut result = ((height + 1.0) % 2.0).abs();
            if result > 1.0 {
                result = 2.0 - result;
            }
            return Self::from_f64(result);
        }

        if height < 0.0 {
            return payload.iteratedlog(self, -height, linear);
        }

        let (whole, frac) = split_height(height);

        if self.gt(Self::ZERO)
            && (self.lt(Self::ONE)
                || (self.lte(CONVERGENCE_LIMIT) && payload.lte(self.infinite_tower())))
            && (height > TETRATE_ITERATIONS as f64 || !linear)
        {
            // converges towards the infinite tower
            payload = if payload.eq(Self::ONE) {
                self.pow(frac)
            } else if self.lt(Self::ONE) {
                payload.pow(1.0 - frac).mul(self.pow(payload).pow(frac))
            } else {
                payload.layeradd(frac, self, linear)
            };
            for _ in 0..(whole as u64).min(TETRATE_ITERATIONS) {
                let previous = payload;
                payload = self.pow(payload);
                if previous.eq(payload) {
                    return payload;
                }
            }
            return payload;
        }

        if frac != 0.0 {
            payload = if payload.eq(Self::ONE) {
                if self.gt(Self::TEN) || linear {
                    self.pow(frac)
                } else {
                    let critical = Self::from_f64(tetrate_critical(self.to_f64(), frac));
                    if self.lt(Self::TWO) {
                        // the grids start at base 2; rescale onto [1, self]
                        critical.sub(1).mul(self.sub(1)).add(1)
                    } else {
                        critical
                    }
                }
            } else if self.eq(Self::TEN) {
                payload.layeradd10(frac, linear)
            } else {
                payload.layeradd(frac, self, linear)
            };
        }

        for i in 0..whole as u64 {
            payload = self.pow(payload);
            if !payload.is_finite() {
                return payload;
            }
            // every further step only adds a layer
            if payload.layer - self.layer > 3.0 {
                let remaining = whole - i as f64 - 1.0;
                return Self::from_components_no_normalize(
                    payload.sign,
                    payload.layer + remaining,
                    payload.mag,
                );
            }
            if i >= TETRATE_ITERATIONS {
                tracing::debug!(base = %self, height, "tetrate iteration cap reached");
                return payload;
            }
        }
        payload
    }

    /// Alias of [`tetrate`](Self::tetrate).
    #[inline]
    pub fn iteratedexp(self, height: f64, payload: impl Into<Self>, linear: bool) -> Self {
        self.tetrate(height, payload, linear)
    }

    /// `log_base` applied `times` times; fractional counts use layer addition.
    pub fn iteratedlog(self, base: impl Into<Self>, times: f64, linear: bool) -> Self {
        let base = base.into();
        if times.is_nan() {
            return Self::NAN;
        }
        if times < 0.0 {
            return base.tetrate(-times, self, linear);
        }
        let (mut whole, fraction) = split_height(times);
        let mut result = self;
        if result.layer - base.layer > 3.0 {
            // each logarithm only removes a layer up here
            let layer_loss = whole.min(result.layer - base.layer - 3.0);
            whole -= layer_loss;
            result.layer -= layer_loss;
        }
        for i in 0..whole as u64 {
            result = result.log(base);
            if !result.is_finite() {
                return result;
            }
            if i >= TETRATE_ITERATIONS {
                tracing::debug!(value = %self, times, "iteratedlog iteration cap reached");
                return result;
            }
        }
        if fraction > 0.0 && fraction < 1.0 {
            result = if base.eq(Self::TEN) {
                result.layeradd10(-fraction, linear)
            } else {
                result.layeradd(-fraction, base, linear)
            };
        }
        result
    }

    /// Super-logarithm: the height `h` with `base^^h = self`.
    ///
    /// Starts from the critical-section estimate and refines it against
    /// [`tetrate`](Self::tetrate) with a step-halving search.
    pub fn slog(self, base: impl Into<Self>, linear: bool) -> Self {
        let base = base.into();
        let estimate = self.slog_internal(base, linear);
        if !estimate.is_finite() {
            return estimate;
        }
        let mut result = estimate.to_f64();
        let mut step: f64 = 0.001;
        let mut changed_direction = false;
        let mut previously_rose = false;
        for i in 1..SLOG_ITERATIONS {
            let rose = base.tetrate(result, Self::ONE, linear).gt(self);
            if i > 1 && previously_rose != rose {
                changed_direction = true;
            }
            previously_rose = rose;
            if changed_direction {
                step /= 2.0;
            } else {
                step *= 2.0;
            }
            step = if rose { -step.abs() } else { step.abs() };
            result += step;
            if step == 0.0 {
                break;
            }
        }
        Self::from_f64(result)
    }

    /// Unrefined super-logarithm: logarithms down to `[0, 1]`, then the grid.
    pub(super) fn slog_internal(self, base: Self, linear: bool) -> Self {
        if self.is_nan() || base.is_nan() || base.lte(Self::ZERO) || base.eq(Self::ONE) {
            return Self::NAN;
        }
        if base.lt(Self::ONE) {
            // only the fixed points are unambiguous below base 1
            if self.eq(Self::ONE) {
                return Self::ZERO;
            }
            if self.is_zero() {
                return Self::NEG_ONE;
            }
            return Self::NAN;
        }
        if base.lte(CONVERGENCE_LIMIT) {
            // these towers never climb past their infinite limit
            let limit = base.infinite_tower();
            if self.gt(limit) {
                return Self::NAN;
            }
            if self.eq(limit) {
                return Self::INFINITY;
            }
        }
        if self.is_infinite() {
            return if self.sign > 0.0 {
                Self::INFINITY
            } else {
                Self::NAN
            };
        }
        if self.mag < 0.0 || self.is_zero() {
            return Self::NEG_ONE;
        }

        let mut result = 0.0;
        let mut copy = self;
        if copy.layer - base.layer > 3.0 {
            let layer_loss = copy.layer - base.layer - 3.0;
            result += layer_loss;
            copy.layer -= layer_loss;
        }
        for _ in 0..SLOG_ITERATIONS {
            if copy.lt(Self::ZERO) {
                copy = base.pow(copy);
                result -= 1.0;
            } else if copy.lte(Self::ONE) {
                let x = copy.to_f64();
                let fraction = if linear {
                    x - 1.0
                } else {
                    slog_critical(base.to_f64(), x)
                };
                return Self::from_f64(result + fraction);
            } else {
                result += 1.0;
                copy = copy.log(base);
            }
        }
        tracing::debug!(value = %self, "slog iteration cap reached");
        Self::from_f64(result)
    }

    /// Adds `diff` to the base-10 super-logarithm; whole steps move layers
    /// directly.
    pub fn layeradd10(self, diff: f64, linear: bool) -> Self {
        if self.is_nan() || diff.is_nan() {
            return Self::NAN;
        }
        let mut diff = diff;
        let Self {
            mut sign,
            mut layer,
            mut mag,
        } = self;

        if diff >= 1.0 {
            if mag < 0.0 && layer > 0.0 {
                // tiny values behave like 0 once exponentiated
                sign = 0.0;
                mag = 0.0;
                layer = 0.0;
            } else if sign < 0.0 && layer == 0.0 {
                sign = 1.0;
                mag = -mag;
            }
            let whole = diff.trunc();
            diff -= whole;
            layer += whole;
        }
        if diff <= -1.0 {
            let whole = diff.trunc();
            diff -= whole;
            layer += whole;
            let mut steps = 0;
            while layer < 0.0 && steps < LAYERADD_ITERATIONS {
                layer += 1.0;
                mag = mag.log10();
                steps += 1;
                if !mag.is_finite() {
                    if sign == 0.0 {
                        sign = 1.0;
                    }
                    return Self::from_components_no_normalize(sign, layer.max(0.0), mag)
                        .normalize();
                }
            }
            layer = layer.max(0.0);
        }

        if sign == 0.0 {
            // zero raised by whole layers: 10^0 = 1 one layer down
            sign = 1.0;
            if mag == 0.0 && layer >= 1.0 {
                layer -= 1.0;
                mag = 1.0;
            }
        }
        let result = Self::from_components_no_normalize(sign, layer, mag).normalize();
        if diff != 0.0 {
            result.layeradd(diff, Self::TEN, linear)
        } else {
            result
        }
    }

    /// Adds `diff` to the super-logarithm in `base`.
    pub fn layeradd(self, diff: f64, base: impl Into<Self>, linear: bool) -> Self {
        let base = base.into();
        let slog_dest = self.slog(base, linear).to_f64() + diff;
        if slog_dest.is_nan() {
            return Self::NAN;
        }
        if slog_dest >= 0.0 {
            return base.tetrate(slog_dest, Self::ONE, linear);
        }
        if !slog_dest.is_finite() {
            return Self::NAN;
        }
        if slog_dest >= -1.0 {
            return base.tetrate(slog_dest + 1.0, Self::ONE, linear).log(base);
        }
        base.tetrate(slog_dest + 2.0, Self::ONE, linear)
            .log(base)
            .log(base)
    }

    /// `self^^^height` on top of `payload`: repeated tetration.
    pub fn pentate(self, height: f64, payload: impl Into<Self>, linear: bool) -> Self {
        let mut payload = payload.into();
        if self.is_nan() || height.is_nan() || payload.is_nan() {
            return Self::NAN;
        }
        let (mut whole, frac) = split_height(height);
        if frac != 0.0 {
            if payload.eq(Self::ONE) {
                whole += 1.0;
                payload = Self::from_f64(frac);
            } else if self.eq(Self::TEN) {
                payload = payload.layeradd10(frac, linear);
            } else {
                payload = payload.layeradd(frac, self, linear);
            }
        }
        for i in 0..whole as u64 {
            payload = self.tetrate(payload.to_f64(), Self::ONE, linear);
            if !payload.is_finite() {
                return payload;
            }
            if i >= PENTATE_ITERATIONS {
                tracing::debug!(base = %self, height, "pentate iteration cap reached");
                return payload;
            }
        }
        payload
    }

    /// Super-root under linear tetration: the `x` with `x^^degree = self`.
    ///
    /// Results below 1 are not unique and give NaN.
    pub fn linear_sroot(self, degree: f64) -> Self {
        if degree == 1.0 {
            return self;
        }
        if self.is_nan() || degree.is_nan() {
            return Self::NAN;
        }
        if self.eq(Self::INFINITY) {
            return Self::INFINITY;
        }
        if !self.is_finite() {
            return Self::NAN;
        }
        if degree > 0.0 && degree < 1.0 {
            return self.root(degree);
        }
        if degree > -2.0 && degree < -1.0 {
            return Self::from_f64(degree).add(2).pow(self.recip());
        }
        if degree <= 0.0 {
            return Self::NAN;
        }
        if degree == f64::INFINITY {
            // x^^∞ = y solves x^y = y
            let limit = Self::from_f64(std::f64::consts::E);
            if self.gt(Self::ZERO) && self.lte(limit) {
                return self.pow(self.recip());
            }
            return Self::NAN;
        }
        if self.eq(Self::ONE) {
            return Self::ONE;
        }
        if self.lt(Self::ONE) {
            return Self::NAN;
        }

        // bisect on t with candidate 10^^t, which is monotone in t
        let mut lower = 0.0;
        let mut upper = self.slog_internal(Self::TEN, true).to_f64().max(1.0);
        for _ in 0..SROOT_ITERATIONS {
            let mid = (lower + upper) / 2.0;
            if mid <= lower || mid >= upper {
                break;
            }
            let candidate = Self::TEN.tetrate(mid, Self::ONE, true);
            let tower = candidate.tetrate(degree, Self::ONE, true);
            if tower.lt(self) {
                lower = mid;
            } else if tower.eq(self) {
                return candidate;
            } else {
                upper = mid;
            }
        }
        Self::TEN.tetrate((lower + upper) / 2.0, Self::ONE, true)
    }

    /// Limit of `self^self^self^…` for bases in `(0, e^(1/e)]`.
    fn infinite_tower(self) -> Self {
        let neg_ln = self.ln().neg();
        neg_ln.lambertw().div(neg_ln)
    }
}
