use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{DateTime, Duration, Utc};

use crate::config::StoreConfig;
use crate::entry::Entry;

pub(crate) type EntryMap<V> = HashMap<String, Entry<V>>;

/// A thread-safe key-value store with per-entry expiration
///
/// Reads take a shared lock and never remove anything: an expired entry is
/// reported as absent but stays in the map until [`Store::cleanup`] sweeps it.
/// Writes take the exclusive lock. The store spawns nothing on its own; see
/// [`crate::schedule`] for opt-in periodic cleanup.
pub struct Store<V> {
    entries: RwLock<EntryMap<V>>,
    config: StoreConfig,
}

impl<V> Store<V> {
    /// Creates an empty store whose `set` uses `default_ttl`
    pub fn new(default_ttl: Duration) -> Self {
        Self::with_config(StoreConfig::default().with_default_ttl(default_ttl))
    }

    /// Creates an empty store with the given configuration
    pub fn with_config(config: StoreConfig) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            config,
        }
    }

    /// Gets the store configuration
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Returns the value for `key` if present and not expired
    pub fn get(&self, key: &str) -> Option<V>
    where
        V: Clone,
    {
        self.get_with_expiration(key).map(|(value, _)| value)
    }

    /// Like [`Store::get`], additionally returning the entry's expiration
    pub fn get_with_expiration(&self, key: &str) -> Option<(V, DateTime<Utc>)>
    where
        V: Clone,
    {
        let now = Utc::now();
        let entries = self.read_entries();
        entries
            .get(key)
            .filter(|entry| !entry.is_expired(now))
            .map(|entry| (entry.value.clone(), entry.expiration))
    }

    /// Inserts or overwrites `key`, expiring after the default TTL
    pub fn set(&self, key: impl Into<String>, value: V) {
        self.set_with_expiration(key, value, self.config.default_ttl);
    }

    /// Inserts or overwrites `key`, expiring after `ttl`
    ///
    /// A zero or negative `ttl` is accepted and stores an entry that reads
    /// as absent from the next call on.
    pub fn set_with_expiration(&self, key: impl Into<String>, value: V, ttl: Duration) {
        let key = key.into();
        let entry = Entry::with_ttl(value, ttl);
        self.write_entries().insert(key, entry);
    }

    /// Removes `key`; does nothing if it is absent
    pub fn delete(&self, key: &str) {
        self.write_entries().remove(key);
    }

    /// Removes every entry
    pub fn delete_all(&self) {
        self.write_entries().clear();
    }

    /// Removes all expired entries and returns how many were dropped
    pub fn cleanup(&self) -> usize {
        let now = Utc::now();
        let mut entries = self.write_entries();
        let before = entries.len();
        entries.retain(|_, entry| !entry.is_expired(now));
        let removed = before - entries.len();

        tracing::debug!(removed, remaining = entries.len(), "cleanup sweep finished");
        removed
    }

    /// Number of entries held, including expired ones not yet swept
    pub fn size(&self) -> usize {
        self.read_entries().len()
    }

    // Mutations are single map calls that cannot leave the map torn, so a
    // poisoned lock is recovered rather than reported.
    pub(crate) fn read_entries(&self) -> RwLockReadGuard<'_, EntryMap<V>> {
        self.entries.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub(crate) fn write_entries(&self) -> RwLockWriteGuard<'_, EntryMap<V>> {
        self.entries.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<V> Default for Store<V> {
    fn default() -> Self {
        Self::with_config(StoreConfig::default())
    }
}
