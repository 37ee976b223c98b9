// ============================================================================
// Logging Setup
// Installs a tracing-subscriber fmt subscriber for binaries and demos
// ============================================================================
//
// The library itself only emits through the `tracing` facade:
// - trace: tokenization of each Chinese numeral
// - debug: rejected input, out-of-range conversions
//
// Applications that already configure tracing should not call this.

use tracing::Level;

/// Install a global fmt subscriber at `level`.
///
/// Returns `false` when a global subscriber was already set, leaving it in
/// place.
pub fn init_logging(level: Level) -> bool {
    let installed = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .try_init()
        .is_ok();
    if installed {
        tracing::debug!(%level, "logging initialized");
    }
    installed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_is_noop() {
        init_logging(Level::TRACE);
        assert!(!init_logging(Level::DEBUG));
    }
}
