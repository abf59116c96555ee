use crate::TtlMs;
use std::time::Duration;
use tracing::warn;

pub struct CacheConfig {
    pub ttl: TtlMs,
}

impl CacheConfig {
    const DEFAULT_TTL_MS: u64 = 60_000;

    pub fn from_env() -> Self {
        Self::from_raw(std::env::var("LOADSTONE_TTL_MS").ok())
    }

    fn from_raw(raw: Option<String>) -> Self {
        let ttl_ms = raw
            .unwrap_or_else(|| Self::DEFAULT_TTL_MS.to_string())
            .parse::<u64>()
            .unwrap_or_else(|_| {
                warn!(
                    "LOADSTONE_TTL_MS is not a valid integer, using default {}ms",
                    Self::DEFAULT_TTL_MS
                );
                Self::DEFAULT_TTL_MS
            });
        Self { ttl: TtlMs(ttl_ms) }
    }

    pub fn ttl_duration(&self) -> Duration {
        self.ttl.into()
    }
}
