// loadstone/src/ports.rs

use crate::domain::Outcome;
use async_trait::async_trait;
use std::future::Future;

// Ports are the pluggable extension points for storage backends and producers

pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Port for outcome storage (e.g. the TTL store).
///
/// Synchronous by contract: implementations are backed by in-process data
/// structures and never suspend. `get` must treat expired entries as absent;
/// any expiry policy lives entirely behind this interface.
pub trait OutcomeStore<K, V>: Send + Sync + 'static {
    fn get(&self, key: &K) -> Option<Outcome<V>>;
    fn set(&self, key: K, outcome: Outcome<V>);
    fn delete(&self, key: &K);
}

/// Port for computing a fresh value on a cache miss.
///
/// May fail with any error value; the cache captures it as data rather than
/// letting it escape at the point of production.
#[async_trait]
pub trait Producer<K, V>: Send + Sync + 'static {
    async fn produce(&self, key: &K) -> Result<V, BoxError>;
}

/// Async closures act as producers directly: `|key| async move { .. }`.
#[async_trait]
impl<K, V, F, Fut> Producer<K, V> for F
where
    K: Clone + Send + Sync + 'static,
    V: Send + 'static,
    F: Fn(K) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<V, BoxError>> + Send + 'static,
{
    async fn produce(&self, key: &K) -> Result<V, BoxError> {
        self(key.clone()).await
    }
}
