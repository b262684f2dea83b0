//! Session-scoped resolution cache.
//!
//! Entries never expire. The cache lives exactly as long as the session that
//! owns it; share it between engines with `Arc` if needed.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

/// Domain → IP map filled by completed resolution walks.
#[derive(Debug, Default)]
pub struct SessionCache {
    entries: Mutex<HashMap<String, String>>,
}

impl SessionCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Locks the map for a whole check-then-write walk.
    ///
    /// A poisoned lock is recovered: the map only ever holds complete
    /// `String` pairs, so a panicking holder cannot leave it half-written.
    pub(crate) fn lock(&self) -> MutexGuard<'_, HashMap<String, String>> {
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn get(&self, domain: &str) -> Option<String> {
        self.lock().get(domain).cloned()
    }

    pub fn contains(&self, domain: &str) -> bool {
        self.lock().contains_key(domain)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Drops every entry (ends the session's cache).
    pub fn clear(&self) {
        self.lock().clear();
    }

    /// Cached entries sorted by domain.
    pub fn snapshot(&self) -> Vec<(String, String)> {
        let mut entries: Vec<(String, String)> = self
            .lock()
            .iter()
            .map(|(domain, ip)| (domain.clone(), ip.clone()))
            .collect();
        entries.sort();
        entries
    }
}
