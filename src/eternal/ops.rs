// ============================================================================
// EternalDecimal Free Functions
// Two-argument mirror of the EternalDecimal method API
// ============================================================================

use super::EternalDecimal;
use std::cmp::Ordering;

mirror_unary!(EternalDecimal => EternalDecimal;
    abs, neg, recip, sqr, sqrt, cube, cbrt,
    floor, ceil, round, trunc,
    log10, abs_log10, p_log10, ln, log2, pow10, exp,
    gamma, lngamma, factorial, lambertw, ssqrt,
    sin, cos, tan, asin, acos, atan,
    sinh, cosh, tanh, asinh, acosh, atanh,
);

mirror_unary!(EternalDecimal => f64; to_f64);

mirror_unary!(EternalDecimal => i8; sign);

mirror_binary!(EternalDecimal => EternalDecimal;
    add, sub, mul, div, modulo,
    pow, pow_base, root, log,
    max, min, maxabs, minabs, clamp_min, clamp_max,
);

mirror_binary!(EternalDecimal => bool; eq, neq, lt, lte, gt, gte);

mirror_binary!(EternalDecimal => Ordering; cmp, cmpabs);

mirror_tolerance!(EternalDecimal => bool;
    eq_tolerance, neq_tolerance,
    lt_tolerance, lte_tolerance,
    gt_tolerance, gte_tolerance,
);

mirror_tolerance!(EternalDecimal => Ordering; cmp_tolerance);

#[inline]
pub fn clamp(
    value: impl Into<EternalDecimal>,
    min: impl Into<EternalDecimal>,
    max: impl Into<EternalDecimal>,
) -> EternalDecimal {
    value.into().clamp(min, max)
}

#[inline]
pub fn from_components(sign: f64, layer: f64, mag: f64) -> EternalDecimal {
    EternalDecimal::from_components(sign, layer, mag)
}

#[inline]
pub fn from_mantissa_exponent(mantissa: f64, exponent: f64) -> EternalDecimal {
    EternalDecimal::from_mantissa_exponent(mantissa, exponent)
}

// ============================================================================
// Hyper-Operators
// ============================================================================

pub fn tetrate(
    value: impl Into<EternalDecimal>,
    height: f64,
    payload: impl Into<EternalDecimal>,
    linear: bool,
) -> EternalDecimal {
    value.into().tetrate(height, payload, linear)
}

pub fn iteratedexp(
    value: impl Into<EternalDecimal>,
    height: f64,
    payload: impl Into<EternalDecimal>,
    linear: bool,
) -> EternalDecimal {
    value.into().iteratedexp(height, payload, linear)
}

pub fn iteratedlog(
    value: impl Into<EternalDecimal>,
    base: impl Into<EternalDecimal>,
    times: f64,
    linear: bool,
) -> EternalDecimal {
    value.into().iteratedlog(base, times, linear)
}

pub fn slog(
    value: impl Into<EternalDecimal>,
    base: impl Into<EternalDecimal>,
    linear: bool,
) -> EternalDecimal {
    value.into().slog(base, linear)
}

pub fn layeradd10(value: impl Into<EternalDecimal>, diff: f64, linear: bool) -> EternalDecimal {
    value.into().layeradd10(diff, linear)
}

pub fn layeradd(
    value: impl Into<EternalDecimal>,
    diff: f64,
    base: impl Into<EternalDecimal>,
    linear: bool,
) -> EternalDecimal {
    value.into().layeradd(diff, base, linear)
}

pub fn pentate(
    value: impl Into<EternalDecimal>,
    height: f64,
    payload: impl Into<EternalDecimal>,
    linear: bool,
) -> EternalDecimal {
    value.into().pentate(height, payload, linear)
}

pub fn linear_sroot(value: impl Into<EternalDecimal>, degree: f64) -> EternalDecimal {
    value.into().linear_sroot(degree)
}

// ============================================================================
// Series
// ============================================================================

pub fn afford_geometric_series(
    resources_available: impl Into<EternalDecimal>,
    price_start: impl Into<EternalDecimal>,
    price_ratio: impl Into<EternalDecimal>,
    current_owned: impl Into<EternalDecimal>,
) -> EternalDecimal {
    EternalDecimal::afford_geometric_series(resources_available, price_start, price_ratio, current_owned)
}

pub fn sum_geometric_series(
    num_items: impl Into<EternalDecimal>,
    price_start: impl Into<EternalDecimal>,
    price_ratio: impl Into<EternalDecimal>,
    current_owned: impl Into<EternalDecimal>,
) -> EternalDecimal {
    EternalDecimal::sum_geometric_series(num_items, price_start, price_ratio, current_owned)
}

pub fn afford_arithmetic_series(
    resources_available: impl Into<EternalDecimal>,
    price_start: impl Into<EternalDecimal>,
    price_add: impl Into<EternalDecimal>,
    current_owned: impl Into<EternalDecimal>,
) -> EternalDecimal {
    EternalDecimal::afford_arithmetic_series(resources_available, price_start, price_add, current_owned)
}

pub fn sum_arithmetic_series(
    num_items: impl Into<EternalDecimal>,
    price_start: impl Into<EternalDecimal>,
    price_add: impl Into<EternalDecimal>,
    current_owned: impl Into<EternalDecimal>,
) -> EternalDecimal {
    EternalDecimal::sum_arithmetic_series(num_items, price_start, price_add, current_owned)
}

pub fn efficiency_of_purchase(
    cost: impl Into<EternalDecimal>,
    current_rp_s: impl Into<EternalDecimal>,
    delta_rp_s: impl Into<EternalDecimal>,
) -> EternalDecimal {
    EternalDecimal::efficiency_of_purchase(cost, current_rp_s, delta_rp_s)
}
