use shared::{Error, ProducerError, Result};

/// Outcome of a producer invocation, as stored in the cache.
///
/// Failures are first-class: a miss that raised is recorded next to a miss
/// that succeeded, so repeated loads inside the validity window replay the
/// error instead of hammering a failing producer.
///
/// An outcome is immutable once constructed; tag and payload are set
/// together and never change independently.
#[derive(Clone, Debug)]
pub enum Outcome<V> {
    Success(V),
    Failure(ProducerError),
}

impl<V> Outcome<V> {
    /// Resolve the outcome: the value on success, the captured producer
    /// failure re-raised otherwise. Exhaustive by construction, so a
    /// malformed state cannot slip through resolution.
    pub fn into_result(self) -> Result<V> {
        match self {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(err) => Err(Error::Producer(err)),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }
}
