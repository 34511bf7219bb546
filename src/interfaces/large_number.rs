// ============================================================================
// Large Number Interface
// The arithmetic contract shared by both engines
// ============================================================================

use crate::eternal::EternalDecimal;
use crate::numeric::{Decimal, NumericError};
use num_traits::{ConstOne, ConstZero, FromPrimitive, Signed, ToPrimitive};
use std::cmp::Ordering;
use std::fmt::{Debug, Display};
use std::str::FromStr;

/// Operations generic helpers (purchase series, property tests) need from an
/// extended-precision number.
///
/// The arithmetic surface comes from `num_traits`: `Signed` brings `Num`, the
/// operators, `abs` and the sign tests; `ConstZero`/`ConstOne` the identities;
/// `ToPrimitive`/`FromPrimitive` the float conversions, which never fail here.
/// This trait adds what `num_traits` has no word for. Implementations forward
/// to the inherent methods, which remain the primary API. Every operation is
/// total: invalid inputs give NaN instead of failing.
pub trait LargeNumber:
    Copy
    + PartialOrd
    + Debug
    + Display
    + FromStr<Err = NumericError>
    + From<f64>
    + Signed
    + ConstZero
    + ConstOne
    + ToPrimitive
    + FromPrimitive
    + Send
    + Sync
    + 'static
{
    const NAN: Self;
    const INFINITY: Self;

    fn is_nan(&self) -> bool;

    fn is_finite(&self) -> bool;

    fn pow(self, power: Self) -> Self;

    /// `log10(self)` in the same representation.
    fn log10(self) -> Self;

    fn sqrt(self) -> Self;

    fn floor(self) -> Self;

    /// Total order with NaN above +∞.
    fn total_cmp(self, other: Self) -> Ordering;

    /// Equality within a relative `tolerance`.
    fn eq_tolerance(self, other: Self, tolerance: f64) -> bool;
}

impl_num_traits!(Decimal);
impl_num_traits!(EternalDecimal);

impl LargeNumber for Decimal {
    const NAN: Self = Decimal::NAN;
    const INFINITY: Self = Decimal::INFINITY;

    #[inline]
    fn is_nan(&self) -> bool {
        Decimal::is_nan(self)
    }

    #[inline]
    fn is_finite(&self) -> bool {
        Decimal::is_finite(self)
    }

    /// Exponents are plain floats here, so the power is collapsed first.
    #[inline]
    fn pow(self, power: Self) -> Self {
        Decimal::pow(self, Decimal::to_f64(power))
    }

    #[inline]
    fn log10(self) -> Self {
        Decimal::from_f64(Decimal::log10(self))
    }

    #[inline]
    fn sqrt(self) -> Self {
        Decimal::sqrt(self)
    }

    #[inline]
    fn floor(self) -> Self {
        Decimal::floor(self)
    }

    #[inline]
    fn total_cmp(self, other: Self) -> Ordering {
        Decimal::cmp(self, other)
    }

    #[inline]
    fn eq_tolerance(self, other: Self, tolerance: f64) -> bool {
        Decimal::eq_tolerance(self, other, tolerance)
    }
}

impl LargeNumber for EternalDecimal {
    const NAN: Self = EternalDecimal::NAN;
    const INFINITY: Self = EternalDecimal::INFINITY;

    #[inline]
    fn is_nan(&self) -> bool {
        EternalDecimal::is_nan(self)
    }

    #[inline]
    fn is_finite(&self) -> bool {
        EternalDecimal::is_finite(self)
    }

    #[inline]
    fn pow(self, power: Self) -> Self {
        EternalDecimal::pow(self, power)
    }

    #[inline]
    fn log10(self) -> Self {
        EternalDecimal::log10(self)
    }

    #[inline]
    fn sqrt(self) -> Self {
        EternalDecimal::sqrt(self)
    }

    #[inline]
    fn floor(self) -> Self {
        EternalDecimal::floor(self)
    }

    #[inline]
    fn total_cmp(self, other: Self) -> Ordering {
        EternalDecimal::cmp(self, other)
    }

    #[inline]
    fn eq_tolerance(self, other: Self, tolerance: f64) -> bool {
        EternalDecimal::eq_tolerance(self, other, tolerance)
    }
}
