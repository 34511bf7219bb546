// ============================================================================
// Numeric Errors
// Error types for the strict (Result-returning) conversion boundaries
// ============================================================================

use std::fmt;

/// Errors surfaced by the strict conversion APIs.
///
/// Arithmetic itself never fails: invalid operations produce the NaN sentinel,
/// overflow saturates to ±Infinity and underflow to zero. These variants are only
/// returned where a caller explicitly asks for a checked conversion
/// (`FromStr`, `TryFrom`, `to_rust_decimal`, config validation).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Input string could not be parsed as a number
    InvalidInput,
    /// Value is NaN or otherwise outside the target's domain
    DomainError,
    /// Value is too large for the target representation
    Overflow,
    /// Value is too small (but non-zero) for the target representation
    Underflow,
    /// Conversion would lose significant digits
    PrecisionLoss,
    /// Configuration parameters are inconsistent
    InvalidConfig,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::InvalidInput => write!(f, "invalid input: could not parse value"),
            NumericError::DomainError => {
                write!(f, "domain error: value is NaN or outside the target domain")
            },
            NumericError::Overflow => {
                write!(f, "overflow: value exceeds the target's representable range")
            },
            NumericError::Underflow => {
                write!(f, "underflow: value is below the target's smallest magnitude")
            },
            NumericError::PrecisionLoss => write!(
                f,
                "precision loss: conversion would lose significant digits"
            ),
            NumericError::InvalidConfig => write!(f, "invalid numeric configuration"),
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for the strict numeric conversions
pub type NumericResult<T> = Result<T, NumericError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            NumericError::InvalidInput.to_string(),
            "invalid input: could not parse value"
        );
        assert_eq!(
            NumericError::Overflow.to_string(),
            "overflow: value exceeds the target's representable range"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(NumericError::Overflow, NumericError::Overflow);
        assert_ne!(NumericError::Overflow, NumericError::Underflow);
    }
}
