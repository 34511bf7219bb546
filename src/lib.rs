// ============================================================================
// Idle Decimal Library
// Extended-precision numbers for incremental games
// ============================================================================

//! # Idle Decimal
//!
//! Two number types for values far beyond the `f64` range.
//!
//! ## Features
//!
//! - **`Decimal`**: `mantissa × 10^exponent` with an integer exponent, fast and
//!   bounded at `1e9e15` by default (configurable through [`DecimalConfig`])
//! - **`EternalDecimal`**: `sign × 10^10^…^mag` with an unbounded layer count,
//!   reaching towers like `(e^1000)10` and the hyper-operators (tetration,
//!   super-logarithm, pentation)
//! - **Total arithmetic**: NaN propagates, overflow saturates, nothing panics
//! - **String round-trips** in the formats save files already use
//! - **Closed-form purchase series** for affordable counts and costs
//!
//! ## Example
//!
//! ```rust
//! use idle_decimal::prelude::*;
//!
//! let gold: Decimal = "1.5e400".parse().unwrap();
//! let income: Decimal = "2.5e396".parse().unwrap();
//! let total = gold + income * 3600;
//! assert!(total > gold);
//!
//! // how many upgrades fit when each costs 1.15× the previous
//! let count = Decimal::afford_geometric_series(total, 10, 1.15, 0);
//! assert!(count.to_f64() > 6000.0);
//!
//! // towers past any exponent
//! let tower = EternalDecimal::TEN.tetrate(5.0, 1, false);
//! assert_eq!(tower.to_string(), "eee10000000000");
//! assert!((tower.slog(10, false).to_f64() - 5.0).abs() < 1e-6);
//! ```

#[macro_use]
mod macros;

pub mod eternal;
pub mod interfaces;
pub mod numeric;
pub mod series;
pub mod utils;

/// Re-export of [`num_traits`], whose traits both engines implement.
pub use num_traits;

pub use eternal::EternalDecimal;
pub use interfaces::LargeNumber;
pub use numeric::{Decimal, DecimalConfig, NumericError, NumericResult};

// Re-exports for convenience
pub mod prelude {
    pub use crate::eternal::EternalDecimal;
    pub use crate::interfaces::LargeNumber;
    pub use crate::numeric::{Decimal, DecimalConfig, NumericError, NumericResult};
}
