// ============================================================================
// Decimal Configuration
// Exponent bound and precision settings for the bounded-exponent engine
// ============================================================================

use super::errors::{NumericError, NumericResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default exponent bound: values reach roughly 10^(9e15).
pub const DEFAULT_EXP_LIMIT: f64 = 9e15;

/// Number of decimal digits an `f64` mantissa can carry.
pub const MAX_SIGNIFICANT_DIGITS: i64 = 17;

/// Settings for [`Decimal`](super::Decimal) normalization.
///
/// Every arithmetic operation normalizes with [`DecimalConfig::DEFAULT`]. A custom
/// configuration is applied explicitly with
/// [`Decimal::from_mantissa_exponent_in`](super::Decimal::from_mantissa_exponent_in) or
/// [`Decimal::saturate`](super::Decimal::saturate), e.g. to clamp results to the
/// range of a plain `f64`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DecimalConfig {
    /// Exponents at or above this saturate to ±Infinity, at or below its
    /// negation to zero.
    pub exp_limit: f64,

    /// Exponent gap beyond which the smaller addend is dropped.
    pub max_significant_digits: i64,
}

impl DecimalConfig {
    /// The configuration all arithmetic normalizes with.
    pub const DEFAULT: Self = Self {
        exp_limit: DEFAULT_EXP_LIMIT,
        max_significant_digits: MAX_SIGNIFICANT_DIGITS,
    };

    /// Create a configuration with the given exponent limit
    pub fn new(exp_limit: f64) -> Self {
        Self {
            exp_limit,
            ..Self::DEFAULT
        }
    }

    /// Builder method: Set the exponent limit
    pub fn with_exp_limit(mut self, exp_limit: f64) -> Self {
        self.exp_limit = exp_limit;
        self
    }

    /// Builder method: Set the significant-digit window used for addition
    pub fn with_max_significant_digits(mut self, digits: i64) -> Self {
        self.max_significant_digits = digits;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> NumericResult<()> {
        // exp_limit must stay an exactly representable integer
        if !(self.exp_limit.is_finite() && self.exp_limit >= 1.0) {
            return Err(NumericError::InvalidConfig);
        }
        if self.exp_limit > crate::utils::MAX_SAFE_INTEGER {
            return Err(NumericError::InvalidConfig);
        }
        if !(1..=17).contains(&self.max_significant_digits) {
            return Err(NumericError::InvalidConfig);
        }
        Ok(())
    }
}

impl Default for DecimalConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

// ============================================================================
// Preset Configurations
// ============================================================================

impl DecimalConfig {
    /// Standard break_infinity bounds
    /// - Exponent limit: 9e15
    /// - 17 significant digits
    pub fn break_infinity() -> Self {
        Self::DEFAULT
    }

    /// Native `f64` bounds
    /// - Exponent limit: 308 (anything at 1e308 or above is Infinity)
    /// - Useful for checking a formula stays within plain-number range
    pub fn number_range() -> Self {
        Self::new(crate::utils::NUMBER_EXP_MAX as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_creation() {
        let config = DecimalConfig::new(1000.0);
        assert_eq!(config.exp_limit, 1000.0);
        assert_eq!(config.max_significant_digits, MAX_SIGNIFICANT_DIGITS);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = DecimalConfig::break_infinity()
            .with_exp_limit(500.0)
            .with_max_significant_digits(15);

        assert_eq!(config.exp_limit, 500.0);
        assert_eq!(config.max_significant_digits, 15);
    }

    #[test]
    fn test_validation() {
        assert_eq!(
            DecimalConfig::new(0.5).validate(),
            Err(NumericError::InvalidConfig)
        );
        assert_eq!(
            DecimalConfig::new(f64::INFINITY).validate(),
            Err(NumericError::InvalidConfig)
        );
        assert_eq!(
            DecimalConfig::new(1e17).validate(),
            Err(NumericError::InvalidConfig)
        );
        assert!(DecimalConfig::default()
            .with_max_significant_digits(0)
            .validate()
            .is_err());
    }

    #[test]
    fn test_preset_configs() {
        assert_eq!(DecimalConfig::break_infinity(), DecimalConfig::DEFAULT);
        assert_eq!(DecimalConfig::number_range().exp_limit, 308.0);
    }
}
