// ============================================================================
// Utilities Module
// Float primitives and optional logging setup
// ============================================================================

pub(crate) mod float;

#[cfg(feature = "logging")]
mod logging;

pub use float::{MAX_SAFE_INTEGER, NUMBER_EXP_MAX, NUMBER_EXP_MIN};

#[cfg(feature = "logging")]
pub use logging::init_logging;
