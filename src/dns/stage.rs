//! Walk stages and the events recorded for them.

use std::fmt;
use std::ops::RangeInclusive;

use chrono::{DateTime, Local};
use serde::Serialize;
use strum_macros::EnumIter;

use crate::config::{
    AUTHORITATIVE_SERVER_LATENCY_MS, LOCAL_CACHE_LATENCY_MS, LOG_TIME_FORMAT,
    RECURSIVE_RESOLVER_LATENCY_MS, ROOT_SERVER_LATENCY_MS, TLD_SERVER_LATENCY_MS,
};

/// One named step of the resolution walk, in walk order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Serialize)]
pub enum Stage {
    #[serde(rename = "Local Cache")]
    LocalCache,
    #[serde(rename = "Recursive Resolver")]
    RecursiveResolver,
    #[serde(rename = "Root Server")]
    RootServer,
    #[serde(rename = "TLD Server")]
    TldServer,
    #[serde(rename = "Authoritative Server")]
    AuthoritativeServer,
    #[serde(rename = "Response")]
    Response,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::LocalCache => "Local Cache",
            Stage::RecursiveResolver => "Recursive Resolver",
            Stage::RootServer => "Root Server",
            Stage::TldServer => "TLD Server",
            Stage::AuthoritativeServer => "Authoritative Server",
            Stage::Response => "Response",
        }
    }

    /// Inclusive synthetic latency range, or `None` for the untimed response hop.
    pub fn latency_range(&self) -> Option<RangeInclusive<u32>> {
        match self {
            Stage::LocalCache => Some(LOCAL_CACHE_LATENCY_MS),
            Stage::RecursiveResolver => Some(RECURSIVE_RESOLVER_LATENCY_MS),
            Stage::RootServer => Some(ROOT_SERVER_LATENCY_MS),
            Stage::TldServer => Some(TLD_SERVER_LATENCY_MS),
            Stage::AuthoritativeServer => Some(AUTHORITATIVE_SERVER_LATENCY_MS),
            Stage::Response => None,
        }
    }

    /// Progress (percent) reached once this stage has been shown.
    pub fn progress_percent(&self) -> u8 {
        match self {
            Stage::LocalCache => 15,
            Stage::RecursiveResolver => 35,
            Stage::RootServer => 55,
            Stage::TldServer => 75,
            Stage::AuthoritativeServer => 90,
            Stage::Response => 100,
        }
    }

    /// Packet-flow caption for this stage.
    ///
    /// The TLD hop names the top-level domain of the query, e.g.
    /// `Root → TLD Server (.com)`.
    pub fn narration(&self, domain: &str) -> String {
        match self {
            Stage::LocalCache => "🖥️ Client → Local DNS Cache".to_string(),
            Stage::RecursiveResolver => "📡 Cache → Recursive Resolver".to_string(),
            Stage::RootServer => "🌍 Resolver → Root Server".to_string(),
            Stage::TldServer => match top_level_label(domain) {
                Some(tld) => format!("📂 Root → TLD Server (.{tld})"),
                None => "📂 Root → TLD Server".to_string(),
            },
            Stage::AuthoritativeServer => "🏢 TLD → Authoritative Server".to_string(),
            Stage::Response => "✅ Resolver → Client (Response Received)".to_string(),
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Last non-empty dot-separated label of `domain`, if it has more than one label.
fn top_level_label(domain: &str) -> Option<&str> {
    let trimmed = domain.trim().trim_end_matches('.');
    let (_, tld) = trimmed.rsplit_once('.')?;
    if tld.is_empty() {
        None
    } else {
        Some(tld)
    }
}

/// One entry of the packet log produced by a walk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StageEvent {
    pub timestamp: DateTime<Local>,
    pub source: String,
    pub destination: String,
    pub protocol: String,
    pub info: String,
    pub stage: Stage,
    pub latency_ms: Option<u32>,
}

impl StageEvent {
    /// Wall-clock time of the event as shown in packet logs (`HH:MM:SS`).
    pub fn time(&self) -> String {
        self.timestamp.format(LOG_TIME_FORMAT).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_stage_order_and_names() {
        let names: Vec<&str> = Stage::iter().map(|s| s.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Local Cache",
                "Recursive Resolver",
                "Root Server",
                "TLD Server",
                "Authoritative Server",
                "Response"
            ]
        );
    }

    #[test]
    fn test_progress_is_increasing_and_ends_at_100() {
        let progress: Vec<u8> = Stage::iter().map(|s| s.progress_percent()).collect();
        assert_eq!(progress, vec![15, 35, 55, 75, 90, 100]);
    }

    #[test]
    fn test_latency_ranges() {
        assert_eq!(Stage::LocalCache.latency_range(), Some(5..=15));
        assert_eq!(Stage::RecursiveResolver.latency_range(), Some(15..=30));
        assert_eq!(Stage::RootServer.latency_range(), Some(25..=45));
        assert_eq!(Stage::TldServer.latency_range(), Some(25..=45));
        assert_eq!(Stage::AuthoritativeServer.latency_range(), Some(35..=70));
        assert_eq!(Stage::Response.latency_range(), None);
    }

    #[test]
    fn test_tld_narration() {
        assert_eq!(
            Stage::TldServer.narration("google.com"),
            "📂 Root → TLD Server (.com)"
        );
        assert_eq!(
            Stage::TldServer.narration("bbc.co.uk."),
            "📂 Root → TLD Server (.uk)"
        );
        assert_eq!(Stage::TldServer.narration("localhost"), "📂 Root → TLD Server");
    }

    #[test]
    fn test_stage_serializes_as_display_name() {
        let json = serde_json::to_string(&Stage::TldServer).unwrap();
        assert_eq!(json, "\"TLD Server\"");
    }
}
