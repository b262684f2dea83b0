//! Simulated DNS resolution walk.
//!
//! This module provides the resolution walk engine and its parts:
//! - Static reference records (domain → IP)
//! - A session-scoped cache
//! - Injectable synthetic latency
//! - The illustrative DoH payload digest
//!
//! Nothing here performs network I/O.

mod cache;
mod digest;
mod latency;
mod records;
mod stage;
mod walk;

// Re-export public API
pub use cache::SessionCache;
pub use digest::payload_digest;
pub use latency::{LatencySource, RandomLatency};
pub use records::DomainRecords;
pub use stage::{Stage, StageEvent};
pub use walk::{ResolutionResult, WalkEngine};
