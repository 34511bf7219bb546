// ============================================================================
// Internal Macros
// Conversion, operator and free-function boilerplate shared by both engines
// ============================================================================

/// `From<primitive>` for an engine type, routed through `From<f64>`.
macro_rules! impl_from_primitives {
    ($Type:ident; $($ty:ty),+ $(,)?) => {$(
        impl From<$ty> for $Type {
            #[inline]
            fn from(value: $ty) -> Self {
                Self::from_f64(value as f64)
            }
        }
    )+};
}

/// std operator traits that forward to the inherent method of the same name,
/// for `Self` and for plain numbers on either side.
macro_rules! impl_binary_operators {
    (
        $Type:ident, $scalars:tt;
        $($Trait:ident: $method:ident, $AssignTrait:ident: $assign:ident;)+
    ) => {$(
        impl std::ops::$Trait for $Type {
            type Output = $Type;

            #[inline]
            fn $method(self, rhs: Self) -> Self {
                $Type::$method(self, rhs)
            }
        }

        impl std::ops::$AssignTrait for $Type {
            #[inline]
            fn $assign(&mut self, rhs: Self) {
                *self = $Type::$method(*self, rhs);
            }
        }

        impl_binary_operators! { @primitive $Type; $Trait: $method, $AssignTrait: $assign; $scalars }
    )+};

    (@primitive $Type:ident; $Trait:ident: $method:ident, $AssignTrait:ident: $assign:ident; ($($ty:ty),+ $(,)?)) => {$(
        impl std::ops::$Trait<$ty> for $Type {
            type Output = $Type;

            #[inline]
            fn $method(self, rhs: $ty) -> $Type {
                $Type::$method(self, $Type::from(rhs))
            }
        }

        impl std::ops::$Trait<$Type> for $ty {
            type Output = $Type;

            #[inline]
            fn $method(self, rhs: $Type) -> $Type {
                $Type::$method($Type::from(self), rhs)
            }
        }

        impl std::ops::$AssignTrait<$ty> for $Type {
            #[inline]
            fn $assign(&mut self, rhs: $ty) {
                *self = $Type::$method(*self, $Type::from(rhs));
            }
        }
    )+};
}

/// Free functions taking one engine-convertible argument.
macro_rules! mirror_unary {
    ($Type:ident => $Out:ty; $($(#[$attr:meta])* $name:ident),+ $(,)?) => {$(
        $(#[$attr])*
        #[inline]
        pub fn $name(value: impl Into<$Type>) -> $Out {
            let value: $Type = value.into();
            value.$name()
        }
    )+};
}

/// Free functions taking two engine-convertible arguments.
macro_rules! mirror_binary {
    ($Type:ident => $Out:ty; $($(#[$attr:meta])* $name:ident),+ $(,)?) => {$(
        $(#[$attr])*
        #[inline]
        pub fn $name(left: impl Into<$Type>, right: impl Into<$Type>) -> $Out {
            let left: $Type = left.into();
            left.$name(right)
        }
    )+};
}

/// Free functions for the relative-tolerance comparisons.
macro_rules! mirror_tolerance {
    ($Type:ident => $Out:ty; $($name:ident),+ $(,)?) => {$(
        #[inline]
        pub fn $name(left: impl Into<$Type>, right: impl Into<$Type>, tolerance: f64) -> $Out {
            let left: $Type = left.into();
            left.$name(right, tolerance)
        }
    )+};
}

/// `num_traits` implementations forwarding to the inherent API.
///
/// Only base-10 strings parse; every value converts to `f64` (saturating), so
/// `to_f64` never returns `None`.
macro_rules! impl_num_traits {
    ($Type:ident) => {
        impl num_traits::Zero for $Type {
            #[inline]
            fn zero() -> Self {
                $Type::ZERO
            }

            #[inline]
            fn is_zero(&self) -> bool {
                $Type::is_zero(self)
            }
        }

        impl num_traits::ConstZero for $Type {
            const ZERO: Self = $Type::ZERO;
        }

        impl num_traits::One for $Type {
            #[inline]
            fn one() -> Self {
                $Type::ONE
            }
        }

        impl num_traits::ConstOne for $Type {
            const ONE: Self = $Type::ONE;
        }

        impl num_traits::Num for $Type {
            type FromStrRadixErr = $crate::numeric::NumericError;

            fn from_str_radix(text: &str, radix: u32) -> Result<Self, Self::FromStrRadixErr> {
                if radix != 10 {
                    return Err($crate::numeric::NumericError::InvalidInput);
                }
                text.parse()
            }
        }

        impl num_traits::Signed for $Type {
            #[inline]
            fn abs(&self) -> Self {
                $Type::abs(*self)
            }

            fn abs_sub(&self, other: &Self) -> Self {
                if $Type::lte(*self, *other) {
                    $Type::ZERO
                } else {
                    $Type::sub(*self, *other)
                }
            }

            fn signum(&self) -> Self {
                if $Type::is_nan(self) {
                    $Type::NAN
                } else {
                    $Type::from($Type::sign(self))
                }
            }

            #[inline]
            fn is_positive(&self) -> bool {
                $Type::gt(*self, $Type::ZERO)
            }

            #[inline]
            fn is_negative(&self) -> bool {
                $Type::lt(*self, $Type::ZERO)
            }
        }

        impl num_traits::ToPrimitive for $Type {
            #[inline]
            fn to_f64(&self) -> Option<f64> {
                Some($Type::to_f64(*self))
            }

            fn to_i64(&self) -> Option<i64> {
                num_traits::ToPrimitive::to_i64(&$Type::to_f64(*self))
            }

            fn to_u64(&self) -> Option<u64> {
                num_traits::ToPrimitive::to_u64(&$Type::to_f64(*self))
            }
        }

        impl num_traits::FromPrimitive for $Type {
            #[inline]
            fn from_i64(value: i64) -> Option<Self> {
                Some($Type::from(value))
            }

            #[inline]
            fn from_u64(value: u64) -> Option<Self> {
                Some($Type::from(value))
            }

            #[inline]
            fn from_f64(value: f64) -> Option<Self> {
                Some($Type::from_f64(value))
            }
        }
    };
}

/// Serializes through `to_json` and accepts either a string or a JSON number.
#[cfg(feature = "serde")]
macro_rules! impl_serde_via_string {
    ($Type:ident) => {
        impl serde::Serialize for $Type {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(&self.to_json())
            }
        }

        impl<'de> serde::Deserialize<'de> for $Type {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                match $crate::numeric::serialization::Repr::deserialize(deserializer)? {
                    $crate::numeric::serialization::Repr::Text(text) => {
                        text.parse::<$Type>().map_err(serde::de::Error::custom)
                    },
                    $crate::numeric::serialization::Repr::Number(value) => Ok($Type::from_f64(value)),
                }
            }
        }
    };
}
