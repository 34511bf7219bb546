// ============================================================================
// Decimal Free Functions
// Two-argument mirror of the Decimal method API
// ============================================================================

use super::Decimal;
use std::cmp::Ordering;

mirror_unary!(Decimal => Decimal;
    abs, neg, recip, sqr, sqrt, cube, cbrt,
    floor, ceil, round, trunc,
    exp, factorial, sinh, cosh, tanh,
);

mirror_unary!(Decimal => f64;
    to_f64, log10, abs_log10, p_log10, ln, log2,
    asinh, acosh, atanh,
);

mirror_unary!(Decimal => i8; sign);

mirror_binary!(Decimal => Decimal;
    add, sub, mul, div, modulo,
    max, min, clamp_min, clamp_max,
);

mirror_binary!(Decimal => bool; eq, neq, lt, lte, gt, gte);

mirror_binary!(Decimal => Ordering; cmp);

mirror_tolerance!(Decimal => bool;
    eq_tolerance, neq_tolerance,
    lt_tolerance, lte_tolerance,
    gt_tolerance, gte_tolerance,
);

mirror_tolerance!(Decimal => Ordering; cmp_tolerance);

#[inline]
pub fn pow(value: impl Into<Decimal>, power: impl Into<f64>) -> Decimal {
    value.into().pow(power)
}

#[inline]
pub fn pow10(value: f64) -> Decimal {
    Decimal::pow10(value)
}

#[inline]
pub fn log(value: impl Into<Decimal>, base: f64) -> f64 {
    value.into().log(base)
}

#[inline]
pub fn root(value: impl Into<Decimal>, degree: f64) -> Decimal {
    value.into().root(degree)
}

#[inline]
pub fn clamp(value: impl Into<Decimal>, min: impl Into<Decimal>, max: impl Into<Decimal>) -> Decimal {
    value.into().clamp(min, max)
}

#[inline]
pub fn from_mantissa_exponent(mantissa: f64, exponent: f64) -> Decimal {
    Decimal::from_mantissa_exponent(mantissa, exponent)
}

// ============================================================================
// Series
// ============================================================================

pub fn afford_geometric_series(
    resources_available: impl Into<Decimal>,
    price_start: impl Into<Decimal>,
    price_ratio: impl Into<Decimal>,
    current_owned: impl Into<Decimal>,
) -> Decimal {
    Decimal::afford_geometric_series(resources_available, price_start, price_ratio, current_owned)
}

pub fn sum_geometric_series(
    num_items: impl Into<Decimal>,
    price_start: impl Into<Decimal>,
    price_ratio: impl Into<Decimal>,
    current_owned: impl Into<Decimal>,
) -> Decimal {
    Decimal::sum_geometric_series(num_items, price_start, price_ratio, current_owned)
}

pub fn afford_arithmetic_series(
    resources_available: impl Into<Decimal>,
    price_start: impl Into<Decimal>,
    price_add: impl Into<Decimal>,
    current_owned: impl Into<Decimal>,
) -> Decimal {
    Decimal::afford_arithmetic_series(resources_available, price_start, price_add, current_owned)
}

pub fn sum_arithmetic_series(
    num_items: impl Into<Decimal>,
    price_start: impl Into<Decimal>,
    price_add: impl Into<Decimal>,
    current_owned: impl Into<Decimal>,
) -> Decimal {
    Decimal::sum_arithmetic_series(num_items, price_start, price_add, current_owned)
}

pub fn efficiency_of_purchase(
    cost: impl Into<Decimal>,
    current_rp_s: impl Into<Decimal>,
    delta_rp_s: impl Into<Decimal>,
) -> Decimal {
    Decimal::efficiency_of_purchase(cost, current_rp_s, delta_rp_s)
}
