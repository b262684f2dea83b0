//! dns_query_simulator library: a narrated, simulated DNS lookup
//!
//! The core is a resolution walk engine that takes a domain through the
//! conceptual stages of a lookup (local cache, recursive resolver, root, TLD
//! and authoritative servers) with synthetic latencies, answers from a small
//! static record table, and remembers answers in a session cache. There is
//! no network I/O.
//!
//! # Example
//!
//! ```
//! use dns_query_simulator::{QueryMode, WalkEngine};
//!
//! let mut engine = WalkEngine::new();
//! let first = engine.resolve("github.com", QueryMode::Normal);
//! assert_eq!(first.ip, "140.82.121.4");
//! assert_eq!(first.stage_events.len(), 6);
//!
//! let second = engine.resolve("github.com", QueryMode::Normal);
//! assert!(second.cache_hit);
//! assert_eq!(second.stage_events.len(), 1);
//! ```
//!
//! The binary adds a presentation layer on top (narration, packet log
//! table, latency chart, JSONL and CSV output); see [`run_session`].

mod app;
pub mod config;
mod dns;
mod error_handling;
pub mod export;
pub mod initialization;

// Re-export public API
pub use app::{run_session, run_session_with_input, SessionReport};
pub use config::{Config, LogFormat, LogLevel, OutputFormat, QueryMode};
pub use dns::{
    payload_digest, DomainRecords, LatencySource, RandomLatency, ResolutionResult, SessionCache,
    Stage, StageEvent, WalkEngine,
};
pub use error_handling::{validate_domain_input, InitializationError, SimulationError};
