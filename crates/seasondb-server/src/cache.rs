use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::RwLock;

use seasondb_store::SeasonRow;

struct CacheEntry {
    fetched_at: Instant,
    rows: Vec<SeasonRow>,
}

/// Short-lived cache of the season rows, shared across renders.
///
/// Expiry is the only invalidation: a fresh entry is served as-is until its
/// TTL passes, then the next reader refetches. There is no write path to
/// invalidate against — the dashboard never mutates the table.
#[derive(Clone)]
pub struct SeasonCache {
    ttl: Duration,
    inner: Arc<RwLock<Option<CacheEntry>>>,
}

impl SeasonCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            inner: Arc::new(RwLock::new(None)),
        }
    }

    /// Returns the cached rows if an unexpired entry exists.
    pub async fn get(&self) -> Option<Vec<SeasonRow>> {
        let guard = self.inner.read().await;
        guard
            .as_ref()
            .filter(|entry| entry.fetched_at.elapsed() < self.ttl)
            .map(|entry| entry.rows.clone())
    }

    /// Replaces the cache with a freshly fetched row set.
    pub async fn put(&self, rows: Vec<SeasonRow>) {
        let mut guard = self.inner.write().await;
        *guard = Some(CacheEntry {
            fetched_at: Instant::now(),
            rows,
        });
    }
}
