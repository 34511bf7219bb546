// ============================================================================
// Eternal Module
// Layered decimal reaching exponent towers, with the hyper-operator family
// ============================================================================
//
// This module provides:
// - EternalDecimal: sign × 10^10^…^mag with an unbounded layer count
// - Logarithms, powers, gamma, Lambert W and trigonometry over layers
// - Tetration, super-logarithm, layer addition, pentation and super-roots
// - ops: free-function mirror of the EternalDecimal API
//
// Design principles:
// - Values stay canonical after every operation (normalize on construction)
// - Fractional heights come from one shared critical-section approximation
// - Iterative algorithms are capped and log at debug level when they give up

mod critical_section;
mod eternal_decimal;
mod lambert;
pub mod ops;
mod tetration;
mod transcendental;

pub use eternal_decimal::EternalDecimal;
