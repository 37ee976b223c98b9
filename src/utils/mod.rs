// ============================================================================
// Utilities Module
// Optional helpers for applications embedding the parser
// ============================================================================

#[cfg(feature = "logging")]
mod logging;

#[cfg(feature = "logging")]
pub use logging::init_logging;
