// ============================================================================
// Interfaces Module
// Contains the trait both number engines implement
// ============================================================================

mod large_number;

pub use large_number::LargeNumber;
