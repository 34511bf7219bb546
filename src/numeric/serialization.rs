// ============================================================================
// Serde Support
// Both engines travel as their canonical string; numbers are accepted on input
// ============================================================================

use super::Decimal;
use serde::Deserialize;

/// Accepted wire shapes: `"1.5e+400"` or a plain JSON number.
#[derive(Deserialize)]
#[serde(untagged)]
pub(crate) enum Repr {
    Text(String),
    Number(f64),
}

impl_serde_via_string!(Decimal);
