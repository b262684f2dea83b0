//! Application configuration and constants.
//!
//! This module provides:
//! - Reference data and walk constants (seeded records, latency ranges)
//! - CLI option types and parsing

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Config, LogFormat, LogLevel, OutputFormat, QueryMode};
