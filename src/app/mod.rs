//! Main application modules.
//!
//! This module drives a simulator session and collects its statistics.

pub mod session;
pub mod statistics;

// Re-export public API
pub use session::{run_session, run_session_with_input};
pub use statistics::SessionReport;
