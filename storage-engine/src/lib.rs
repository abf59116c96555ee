use dashmap::DashMap;
use loadstone::{Outcome, OutcomeStore};
use shared::config::CacheConfig;
use std::fmt::Debug;
use std::hash::Hash;
use std::time::{Duration, Instant};
use tracing::debug;

/// A stored outcome stamped with its absolute expiry instant.
/// The stamp is fixed at insertion; reads never refresh it.
struct StoredEntry<V> {
    outcome: Outcome<V>,
    expires_at: Instant,
}

/// Outcome store that forgets entries a fixed duration after insertion.
///
/// Expiry is lazy: an expired entry is removed when its key is next
/// queried, never by a background task. Expired-but-unaccessed entries
/// occupy memory until their key is queried or deleted; an acceptable
/// trade-off for a lightweight in-process cache.
pub struct TtlStore<K, V>
where
    K: Debug + Hash + Eq + Send + Sync + 'static,
    V: Debug + Send + Sync + Clone + 'static,
{
    ttl: Duration,
    map: DashMap<K, StoredEntry<V>>,
}

impl<K, V> TtlStore<K, V>
where
    K: Debug + Hash + Eq + Send + Sync + 'static,
    V: Debug + Send + Sync + Clone + 'static,
{
    /// Create a store whose entries expire `ttl` after each `set`.
    ///
    /// A zero duration makes every entry immediately expired, which turns
    /// the store into an always-miss pass-through.
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            map: DashMap::new(),
        }
    }

    /// Create a store with the TTL taken from configuration.
    pub fn from_config(config: &CacheConfig) -> Self {
        Self::new(config.ttl_duration())
    }

    /// Number of entries in the underlying map, expired ones included.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl<K, V> OutcomeStore<K, V> for TtlStore<K, V>
where
    K: Debug + Hash + Eq + Send + Sync + 'static,
    V: Debug + Send + Sync + Clone + 'static,
{
    fn get(&self, key: &K) -> Option<Outcome<V>> {
        let now = Instant::now();
        match self.map.get(key) {
            Some(entry) if now < entry.expires_at => Some(entry.outcome.clone()),
            Some(entry) => {
                drop(entry);
                // Re-check under the shard lock: a racing set may have
                // refreshed the entry after the read guard was dropped.
                self.map.remove_if(key, |_, entry| now >= entry.expires_at);
                debug!(?key, "entry expired, removed lazily");
                None
            }
            None => None,
        }
    }

    /// Insert or overwrite the entry for `key`. Overwriting an unexpired
    /// entry resets its expiry window; re-storing an unmodified outcome is
    /// therefore a deliberate TTL refresh, not a no-op.
    fn set(&self, key: K, outcome: Outcome<V>) {
        let expires_at = Instant::now() + self.ttl;
        self.map.insert(key, StoredEntry { outcome, expires_at });
    }

    fn delete(&self, key: &K) {
        self.map.remove(key);
    }
}

impl<K, V> Debug for TtlStore<K, V>
where
    K: Debug + Hash + Eq + Send + Sync + 'static,
    V: Debug + Send + Sync + Clone + 'static,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TtlStore")
            .field("ttl", &self.ttl)
            .field("entry_count", &self.map.len())
            .finish()
    }
}
