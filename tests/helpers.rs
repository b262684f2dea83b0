// Shared test helpers for engine setup and session output.
//
// This module provides common utilities used across multiple test files to reduce duplication.

use std::path::PathBuf;
use std::sync::Arc;

use dns_query_simulator::{Config, DomainRecords, OutputFormat, SessionCache, Stage, WalkEngine};

/// Lower bound of each stage's latency range (0 for the response hop).
#[allow(dead_code)] // Used by other test files
pub fn lower_bound(stage: Stage) -> u32 {
    stage.latency_range().map(|r| *r.start()).unwrap_or(0)
}

/// Engine with seeded records, an empty cache and deterministic latencies.
#[allow(dead_code)] // Used by other test files
pub fn create_fixed_engine() -> WalkEngine<fn(Stage) -> u32> {
    WalkEngine::with_parts(
        DomainRecords::default(),
        Arc::new(SessionCache::new()),
        lower_bound as fn(Stage) -> u32,
    )
}

/// Session config that writes `format` output to `output`.
#[allow(dead_code)] // Used by other test files
pub fn session_config(domains: &[&str], format: OutputFormat, output: PathBuf) -> Config {
    Config {
        domains: domains.iter().map(|d| d.to_string()).collect(),
        format,
        output: Some(output),
        seed: Some(1),
        ..Default::default()
    }
}
