//! Session statistics.

use log::{debug, info};
use std::collections::HashMap;
use strum::IntoEnumIterator;

use crate::dns::{ResolutionResult, Stage};

/// Summary of one simulator session.
#[derive(Debug, Clone, Default)]
pub struct SessionReport {
    /// Resolutions performed
    pub queries: usize,
    /// Resolutions answered by the local cache
    pub cache_hits: usize,
    /// Resolutions that walked the full hierarchy
    pub cache_misses: usize,
    /// Resolutions that ended with the "Unknown" sentinel
    pub unknown: usize,
    /// Sum of all simulated stage latencies
    pub total_latency_ms: u64,
    /// Entries left in the session cache when the session ended
    pub cached_domains: usize,
    /// Cached `(domain, ip)` pairs at session end, sorted by domain
    pub cached_entries: Vec<(String, String)>,
    /// Wall-clock duration of the session, including pacing
    pub elapsed_seconds: f64,
    stage_latency: HashMap<Stage, (u64, u64)>,
}

impl SessionReport {
    pub fn record(&mut self, result: &ResolutionResult) {
        self.queries += 1;
        if result.cache_hit {
            self.cache_hits += 1;
        } else {
            self.cache_misses += 1;
        }
        if result.is_unknown() {
            self.unknown += 1;
        }
        for event in &result.stage_events {
            if let Some(ms) = event.latency_ms {
                self.total_latency_ms += u64::from(ms);
                let entry = self.stage_latency.entry(event.stage).or_insert((0, 0));
                entry.0 += 1;
                entry.1 += u64::from(ms);
            }
        }
    }

    /// Mean simulated latency for `stage` across the session.
    pub fn average_latency_ms(&self, stage: Stage) -> Option<f64> {
        self.stage_latency
            .get(&stage)
            .filter(|(count, _)| *count > 0)
            .map(|(count, total)| *total as f64 / *count as f64)
    }
}

/// Logs the mean latency of every stage that was visited.
pub fn print_stage_statistics(report: &SessionReport) {
    if report.queries == 0 {
        return;
    }
    info!(
        "Stage latency averages over {} quer{}:",
        report.queries,
        if report.queries == 1 { "y" } else { "ies" }
    );
    for stage in Stage::iter() {
        if let Some(avg) = report.average_latency_ms(stage) {
            info!("   {}: {:.1} ms", stage, avg);
        }
    }
    for (domain, ip) in &report.cached_entries {
        debug!("   cached {} -> {}", domain, ip);
    }
}
