// ============================================================================
// Logging Setup
// Optional tracing subscriber for demos and host binaries
// ============================================================================

/// Installs a `fmt` subscriber at `DEBUG` level.
///
/// The library itself only emits events; hosts that already configure `tracing`
/// should not call this. Returns `false` when a global subscriber was already set.
pub fn init_logging() -> bool {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_target(true)
        .try_init()
        .is_ok()
}
