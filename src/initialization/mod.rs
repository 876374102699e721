//! Application initialization.
//!
//! Sets up process-wide state before a lookup runs. Currently this is only
//! the logger; the DNS client and file readers are created per lookup.

mod logger;

// Re-export public API
pub use logger::init_logger_with;
