// ============================================================================
// Numeric Module
// Bounded-exponent decimal and the string/format plumbing both engines share
// ============================================================================
//
// This module provides:
// - Decimal: mantissa × 10^exponent with a configurable exponent ceiling
// - DecimalConfig: exponent limit presets and validation
// - NumericError: errors of the strict (Result-returning) boundary APIs
// - ops: free-function mirror of the Decimal API
//
// Design principles:
// - Arithmetic is total: NaN propagates, overflow saturates, underflow gives 0
// - Values are small Copy types with no shared state
// - String formats follow JavaScript number rendering for save compatibility

mod config;
mod decimal;
mod errors;
pub mod format;
pub mod ops;
pub(crate) mod parsing;

#[cfg(feature = "serde")]
pub(crate) mod serialization;

pub use config::{DecimalConfig, DEFAULT_EXP_LIMIT, MAX_SIGNIFICANT_DIGITS};
pub use decimal::Decimal;
pub use errors::{NumericError, NumericResult};
