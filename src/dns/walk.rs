//! The resolution walk engine.
//!
//! A walk is a straight line: check the session cache, and on a miss visit
//! the recursive resolver, root, TLD and authoritative servers before
//! answering the client. The engine never sleeps and never touches the
//! network; pacing is left to whoever renders the result.

use std::sync::Arc;

use chrono::Local;
use log::{debug, trace};
use serde::Serialize;

use super::cache::SessionCache;
use super::digest::payload_digest;
use super::latency::{LatencySource, RandomLatency};
use super::records::DomainRecords;
use super::stage::{Stage, StageEvent};
use crate::config::{QueryMode, UNKNOWN_IP};

/// Terminal output of one resolution walk.
#[derive(Debug, Clone, Serialize)]
pub struct ResolutionResult {
    pub domain: String,
    pub ip: String,
    pub protocol: String,
    pub mode: QueryMode,
    pub cache_hit: bool,
    pub stage_events: Vec<StageEvent>,
    /// SHA-256 hex of the domain, only in DoH mode.
    pub encrypted_payload: Option<String>,
}

impl ResolutionResult {
    /// Sum of all timed stage latencies.
    pub fn total_latency_ms(&self) -> u32 {
        self.stage_events.iter().filter_map(|e| e.latency_ms).sum()
    }

    /// True when the domain was not in the reference records.
    pub fn is_unknown(&self) -> bool {
        self.ip == UNKNOWN_IP
    }

    pub fn stages(&self) -> Vec<Stage> {
        self.stage_events.iter().map(|e| e.stage).collect()
    }
}

/// Walks domains through the simulated hierarchy, sharing one session cache.
pub struct WalkEngine<L: LatencySource = RandomLatency> {
    records: DomainRecords,
    cache: Arc<SessionCache>,
    latency: L,
    cache_unknown: bool,
}

impl WalkEngine<RandomLatency> {
    /// Seeded records, a fresh cache and random latencies.
    pub fn new() -> Self {
        Self::with_parts(
            DomainRecords::default(),
            Arc::new(SessionCache::new()),
            RandomLatency::new(),
        )
    }
}

impl Default for WalkEngine<RandomLatency> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: LatencySource> WalkEngine<L> {
    pub fn with_parts(records: DomainRecords, cache: Arc<SessionCache>, latency: L) -> Self {
        Self {
            records,
            cache,
            latency,
            cache_unknown: false,
        }
    }

    /// Whether domains that resolve to `"Unknown"` are written to the cache.
    ///
    /// Off by default, so a domain added to the records later is found
    /// without clearing the cache.
    pub fn cache_unknown(mut self, enabled: bool) -> Self {
        self.cache_unknown = enabled;
        self
    }

    pub fn cache(&self) -> &Arc<SessionCache> {
        &self.cache
    }

    pub fn records(&self) -> &DomainRecords {
        &self.records
    }

    /// Runs one resolution walk for `domain`.
    ///
    /// `domain` must be non-empty (see `validate_domain_input`); it is used
    /// exactly as given. The cache lock is held for the whole walk, so
    /// concurrent callers sharing the cache cannot both miss and then both
    /// write the same domain.
    pub fn resolve(&mut self, domain: &str, mode: QueryMode) -> ResolutionResult {
        let protocol = mode.protocol();
        let encrypted_payload = mode.is_encrypted().then(|| payload_digest(domain));
        let query_data = encrypted_payload.as_deref().unwrap_or(domain);

        let mut entries = self.cache.lock();
        let mut walk = Walk {
            protocol,
            latency: &mut self.latency,
            events: Vec::with_capacity(6),
        };

        let (ip, cache_hit) = match entries.get(domain) {
            Some(cached) => {
                let ip = cached.clone();
                debug!("Cache hit for {domain}: {ip}");
                walk.record(
                    Stage::LocalCache,
                    "Client",
                    "Local Cache",
                    format!("Query: {query_data} (cache hit, Response: {ip})"),
                );
                (ip, true)
            }
            None => {
                debug!("Cache miss for {domain}, walking the hierarchy");
                walk.record(
                    Stage::LocalCache,
                    "Client",
                    "Local Cache",
                    format!("Query: {query_data}"),
                );
                walk.record(
                    Stage::RecursiveResolver,
                    "Cache",
                    "Recursive Resolver",
                    "Forward Query".to_string(),
                );
                walk.record(
                    Stage::RootServer,
                    "Resolver",
                    "Root Server",
                    "Request TLD Info".to_string(),
                );
                walk.record(
                    Stage::TldServer,
                    "Root",
                    "TLD Server",
                    "Request Authoritative Server".to_string(),
                );

                let ip = self.records.lookup(domain).to_string();
                walk.record(
                    Stage::AuthoritativeServer,
                    "Authoritative Server",
                    "Resolver",
                    format!("IP Address: {ip}"),
                );
                walk.record(
                    Stage::Response,
                    "Resolver",
                    "Client",
                    format!("Resolved IP: {ip}"),
                );

                if ip != UNKNOWN_IP || self.cache_unknown {
                    entries.insert(domain.to_string(), ip.clone());
                    debug!("Cached {domain} -> {ip}");
                }
                (ip, false)
            }
        };
        drop(entries);

        ResolutionResult {
            domain: domain.to_string(),
            ip,
            protocol: protocol.to_string(),
            mode,
            cache_hit,
            stage_events: walk.events,
            encrypted_payload,
        }
    }
}

/// Event accumulator for a single walk.
struct Walk<'a, L: LatencySource> {
    protocol: &'a str,
    latency: &'a mut L,
    events: Vec<StageEvent>,
}

impl<L: LatencySource> Walk<'_, L> {
    fn record(&mut self, stage: Stage, source: &str, destination: &str, info: String) {
        let latency_ms = stage
            .latency_range()
            .map(|_| self.latency.sample(stage));
        trace!("{stage}: {source} -> {destination} [{info}] {latency_ms:?}");
        self.events.push(StageEvent {
            timestamp: Local::now(),
            source: source.to_string(),
            destination: destination.to_string(),
            protocol: self.protocol.to_string(),
            info,
            stage,
            latency_ms,
        });
    }
}
