//! Static domain → IP reference table.

use std::collections::HashMap;

use crate::config::{SEEDED_RECORDS, UNKNOWN_IP};

/// Immutable reference records consulted by the authoritative stage.
#[derive(Debug, Clone)]
pub struct DomainRecords {
    records: HashMap<String, String>,
}

impl DomainRecords {
    /// Builds a table from arbitrary `(domain, ip)` pairs.
    pub fn from_pairs<I, D, A>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (D, A)>,
        D: Into<String>,
        A: Into<String>,
    {
        Self {
            records: pairs
                .into_iter()
                .map(|(domain, ip)| (domain.into(), ip.into()))
                .collect(),
        }
    }

    /// Looks up `domain` exactly as entered, falling back to `"Unknown"`.
    pub fn lookup(&self, domain: &str) -> &str {
        self.records
            .get(domain)
            .map(String::as_str)
            .unwrap_or(UNKNOWN_IP)
    }

    pub fn contains(&self, domain: &str) -> bool {
        self.records.contains_key(domain)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for DomainRecords {
    /// The five seeded records.
    fn default() -> Self {
        Self::from_pairs(SEEDED_RECORDS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_records() {
        let records = DomainRecords::default();
        assert_eq!(records.len(), 5);
        assert_eq!(records.lookup("google.com"), "142.250.190.14");
        assert_eq!(records.lookup("facebook.com"), "157.240.241.35");
        assert_eq!(records.lookup("youtube.com"), "142.251.32.46");
        assert_eq!(records.lookup("github.com"), "140.82.121.4");
        assert_eq!(records.lookup("openai.com"), "104.18.12.123");
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let records = DomainRecords::default();
        assert_eq!(records.lookup("Google.com"), "Unknown");
        assert!(!records.contains("GITHUB.COM"));
    }

    #[test]
    fn test_unknown_fallback() {
        let records = DomainRecords::default();
        assert_eq!(records.lookup("example.org"), "Unknown");
        assert_eq!(records.lookup(" google.com"), "Unknown");
    }

    #[test]
    fn test_custom_records() {
        let records = DomainRecords::from_pairs([("example.org", "93.184.216.34")]);
        assert_eq!(records.lookup("example.org"), "93.184.216.34");
        assert_eq!(records.lookup("google.com"), "Unknown");
    }
}
