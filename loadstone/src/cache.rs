use crate::domain::Outcome;
use crate::ports::{OutcomeStore, Producer};
use shared::{ProducerError, Result};
use std::fmt::Debug;
use std::sync::Arc;
use tracing::debug;

/// Read-through cache over a producer and a pluggable outcome store.
///
/// `load` consults the store first and only invokes the producer on a miss.
/// The producer's outcome, success or failure, is captured as data and
/// stored unconditionally, so a failure is cached exactly like a success
/// and replays until the store forgets it (expiry, `delete`, or `update`).
///
/// Concurrent `load`s for the same absent key are not deduplicated: both
/// may invoke the producer and both will store, last write wins. Each
/// caller receives the result of its own producer invocation. Known race,
/// kept as-is; deduplication would change the failure and ordering
/// contract.
pub struct ReadThroughCache<K, V> {
    producer: Arc<dyn Producer<K, V>>,
    store: Arc<dyn OutcomeStore<K, V>>,
}

impl<K, V> ReadThroughCache<K, V>
where
    K: Debug + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    pub fn new(producer: Arc<dyn Producer<K, V>>, store: Arc<dyn OutcomeStore<K, V>>) -> Self {
        Self { producer, store }
    }

    /// Return the cached value for `key`, producing it on a miss.
    ///
    /// Suspends only while awaiting the producer. On a hit the stored
    /// outcome is resolved as-is; a cached failure re-raises the original
    /// producer error without another producer invocation.
    pub async fn load(&self, key: K) -> Result<V> {
        if let Some(outcome) = self.store.get(&key) {
            debug!(?key, success = outcome.is_success(), "cache hit");
            return outcome.into_result();
        }

        debug!(?key, "cache miss, invoking producer");
        let outcome = match self.producer.produce(&key).await {
            Ok(value) => Outcome::Success(value),
            Err(err) => Outcome::Failure(ProducerError::from_boxed(err)),
        };

        self.store.set(key, outcome.clone());
        outcome.into_result()
    }

    /// Seed or correct the cache with a known-good value, bypassing the
    /// producer entirely.
    pub fn update(&self, key: K, value: V) {
        self.store.set(key, Outcome::Success(value));
    }

    /// Drop any entry for `key`. Deleting an absent key is a no-op.
    pub fn delete(&self, key: &K) {
        self.store.delete(key);
    }
}

impl<K, V> Debug for ReadThroughCache<K, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReadThroughCache")
            .field("producer", &"<dyn Producer>")
            .field("store", &"<dyn OutcomeStore>")
            .finish()
    }
}
