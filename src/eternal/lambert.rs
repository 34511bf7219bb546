// ============================================================================
// Lambert W
// Principal branch of the inverse of w·e^w, and the super square root built on it
// ============================================================================

use super::EternalDecimal;

/// W(1), the omega constant.
const OMEGA: f64 = 0.567_143_290_409_783_873;

/// Smallest argument with a real principal-branch value (-1/e, rounded up).
const BRANCH_POINT: f64 = -0.367_879_441_171_049_9;

const TOLERANCE: f64 = 1e-10;
const MAX_ITERATIONS: usize = 100;

/// Newton iteration on plain floats.
fn f_lambertw(z: f64) -> f64 {
    if !z.is_finite() || z == 0.0 {
        return z;
    }
    if z == 1.0 {
        return OMEGA;
    }
    let mut w = if z < 10.0 { 0.0 } else { z.ln() - z.ln().ln() };
    for _ in 0..MAX_ITERATIONS {
        let next = (z * (-w).exp() + w * w) / (w + 1.0);
        if (next - w).abs() < TOLERANCE * next.abs() {
            return next;
        }
        w = next;
    }
    tracing::debug!(z, w, "lambertw did not converge, returning last estimate");
    w
}

/// Halley iteration for arguments beyond the float range.
fn d_lambertw(z: EternalDecimal) -> EternalDecimal {
    if !z.mag.is_finite() || z.is_zero() {
        return z;
    }
    if z.eq(EternalDecimal::ONE) {
        return EternalDecimal::from_f64(OMEGA);
    }
    let mut w = z.ln();
    for _ in 0..MAX_ITERATIONS {
        let residual = w.sub(z.mul(w.neg().exp()));
        let denominator = w
            .add(1)
            .sub(w.add(2).mul(residual).div(w.mul(2).add(2)));
        let next = w.sub(residual.div(denominator));
        if next.sub(w).abs().lt(next.abs().mul(TOLERANCE)) {
            return next;
        }
        w = next;
    }
    tracing::debug!(z = %z, w = %w, "lambertw did not converge, returning last estimate");
    w
}

impl EternalDecimal {
    /// Principal branch of the Lambert W function; NaN below `-1/e`.
    pub fn lambertw(self) -> Self {
        if self.is_nan() || self.lt(BRANCH_POINT) {
            return Self::NAN;
        }
        if self.is_infinite() {
            return self;
        }
        if self.mag < 0.0 || self.layer == 0.0 {
            return Self::from_f64(f_lambertw(self.to_f64()));
        }
        if self.layer <= 2.0 {
            return d_lambertw(self);
        }
        // W(x) ≈ ln(x) once ln ln x is negligible
        Self::from_components_no_normalize(self.sign, self.layer - 1.0, self.mag)
    }

    /// Super square root: the `y` with `y^y = self`.
    pub fn ssqrt(self) -> Self {
        if self.is_nan() {
            return Self::NAN;
        }
        if self.is_infinite() && self.sign > 0.0 {
            return self;
        }
        if self.sign > 0.0 && self.layer >= 3.0 {
            return Self::from_components_no_normalize(self.sign, self.layer - 1.0, self.mag);
        }
        if self.eq(Self::ONE) {
            return Self::ONE;
        }
        let ln_x = self.ln();
        ln_x.div(ln_x.lambertw())
    }
}
