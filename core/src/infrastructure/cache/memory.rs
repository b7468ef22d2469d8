use std::{
    fmt,
    time::{Duration, Instant},
};

use moka::{Expiry, future::Cache};

use crate::domain::{
    cache::ports::CacheRepository,
    common::{DEFAULT_CACHE_MAX_CAPACITY, DEFAULT_CACHE_TTL, entities::app_errors::CoreError},
};

#[derive(Clone)]
struct Entry {
    value: String,
    ttl: Duration,
}

/// Expires each entry after the ttl it was written with.
struct PerEntryTtl;

impl Expiry<String, Entry> for PerEntryTtl {
    fn expire_after_create(
        &self,
        _key: &String,
        entry: &Entry,
        _created_at: Instant,
    ) -> Option<Duration> {
        Some(entry.ttl)
    }

    fn expire_after_update(
        &self,
        _key: &String,
        entry: &Entry,
        _updated_at: Instant,
        _duration_until_expiry: Option<Duration>,
    ) -> Option<Duration> {
        Some(entry.ttl)
    }
}

/// Process-local bounded TTL cache shared between request tasks.
///
/// `max_ttl` caps every entry regardless of the ttl passed to `set`.
#[derive(Clone)]
pub struct InMemoryCacheRepository {
    entries: Cache<String, Entry>,
}

impl InMemoryCacheRepository {
    pub fn new() -> Self {
        Self::with_limits(DEFAULT_CACHE_MAX_CAPACITY, DEFAULT_CACHE_TTL)
    }

    pub fn with_limits(max_capacity: u64, max_ttl: Duration) -> Self {
        let entries = Cache::builder()
            .max_capacity(max_capacity)
            .time_to_live(max_ttl)
            .expire_after(PerEntryTtl)
            .build();

        Self { entries }
    }

    /// Live entries, after pending evictions have been applied.
    pub async fn len(&self) -> u64 {
        self.entries.run_pending_tasks().await;
        self.entries.entry_count()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl Default for InMemoryCacheRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for InMemoryCacheRepository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InMemoryCacheRepository")
            .field("entry_count", &self.entries.entry_count())
            .finish()
    }
}

impl CacheRepository for InMemoryCacheRepository {
    async fn get(&self, key: &str) -> Result<Option<String>, CoreError> {
        Ok(self.entries.get(key).await.map(|entry| entry.value))
    }

    async fn set(&self, key: &str, value: String, ttl: Duration) -> Result<(), CoreError> {
        self.entries
            .insert(key.to_string(), Entry { value, ttl })
            .await;
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), CoreError> {
        self.entries.invalidate(key).await;
        Ok(())
    }

    async fn clear(&self) -> Result<(), CoreError> {
        self.entries.invalidate_all();
        Ok(())
    }
}
