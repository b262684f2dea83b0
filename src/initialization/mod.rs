//! Application initialization.
//!
//! This module provides the logger setup used by the binary. The engine
//! needs no other shared resources.

mod logger;

// Re-export public API
pub use logger::init_logger_with;
