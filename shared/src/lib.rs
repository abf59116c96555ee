// shared/src/lib.rs

use std::sync::Arc;
use std::time::Duration;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("producer failed: {0}")]
    Producer(#[from] ProducerError),
}

pub type Result<T> = std::result::Result<T, Error>;

/// A producer failure captured as data so it can be replayed later.
///
/// Clonable on purpose: a cached failure is surfaced to every `load` that
/// hits it, so the message and the original error value are shared behind
/// an `Arc` rather than consumed by the first caller.
#[derive(Clone, Debug, thiserror::Error)]
#[error("{message}")]
pub struct ProducerError {
    message: String,
    #[source]
    source: Option<Arc<dyn std::error::Error + Send + Sync + 'static>>,
}

impl ProducerError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    /// Capture an arbitrary boxed error raised by a producer.
    pub fn from_boxed(err: Box<dyn std::error::Error + Send + Sync + 'static>) -> Self {
        let source: Arc<dyn std::error::Error + Send + Sync + 'static> = Arc::from(err);
        Self {
            message: source.to_string(),
            source: Some(source),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// The original error value raised by the producer, when one was
    /// captured. Replayed failures hand out the same `Arc`.
    pub fn original(&self) -> Option<&Arc<dyn std::error::Error + Send + Sync + 'static>> {
        self.source.as_ref()
    }
}

#[derive(Clone, Copy, Debug)]
pub struct TtlMs(pub u64);

impl From<TtlMs> for Duration {
    fn from(ttl: TtlMs) -> Duration {
        Duration::from_millis(ttl.0)
    }
}

pub mod config;
