//! Configuration constants.
//!
//! This module defines the static reference data and the fixed parameters of
//! the resolution walk: the seeded domain table, per-stage latency ranges,
//! and the progress reached at each stage.

use std::ops::RangeInclusive;

/// IP reported for domains missing from the reference table.
pub const UNKNOWN_IP: &str = "Unknown";

/// Seeded domain → IP reference records.
///
/// Lookups are case-sensitive: `Google.com` is not `google.com`.
pub const SEEDED_RECORDS: [(&str, &str); 5] = [
    ("google.com", "142.250.190.14"),
    ("facebook.com", "157.240.241.35"),
    ("youtube.com", "142.251.32.46"),
    ("github.com", "140.82.121.4"),
    ("openai.com", "104.18.12.123"),
];

// Synthetic latency ranges in milliseconds (inclusive).
// Deeper stages get wider ranges to suggest a longer round trip.
pub const LOCAL_CACHE_LATENCY_MS: RangeInclusive<u32> = 5..=15;
pub const RECURSIVE_RESOLVER_LATENCY_MS: RangeInclusive<u32> = 15..=30;
pub const ROOT_SERVER_LATENCY_MS: RangeInclusive<u32> = 25..=45;
pub const TLD_SERVER_LATENCY_MS: RangeInclusive<u32> = 25..=45;
pub const AUTHORITATIVE_SERVER_LATENCY_MS: RangeInclusive<u32> = 35..=70;

/// Protocol label for plain DNS queries.
pub const PROTOCOL_DNS: &str = "DNS";
/// Protocol label for DNS over HTTPS queries.
pub const PROTOCOL_DOH: &str = "HTTPS (DoH)";

/// Timestamp format used in packet logs (wall clock, seconds precision).
pub const LOG_TIME_FORMAT: &str = "%H:%M:%S";

/// Width in characters of the longest bar in the latency chart.
pub const LATENCY_CHART_WIDTH: usize = 40;
