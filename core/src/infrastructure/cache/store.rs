use std::time::Duration;

use tracing::info;

use crate::{
    domain::{
        cache::ports::CacheRepository,
        common::{CacheBackend, CacheConfig, entities::app_errors::CoreError},
    },
    infrastructure::cache::{memory::InMemoryCacheRepository, noop::NoOpCacheRepository},
};

/// Cache backend chosen at startup.
#[derive(Debug, Clone)]
pub enum CacheStore {
    NoOp(NoOpCacheRepository),
    Memory(InMemoryCacheRepository),
}

impl CacheStore {
    pub fn from_config(config: &CacheConfig) -> Self {
        let store = match config.effective_backend() {
            CacheBackend::NoOp => CacheStore::NoOp(NoOpCacheRepository),
            CacheBackend::Memory => CacheStore::Memory(InMemoryCacheRepository::with_limits(
                config.max_capacity,
                config.ttl,
            )),
        };

        info!(
            backend = store.name(),
            ttl = ?config.ttl,
            max_capacity = config.max_capacity,
            "Cache configured"
        );

        store
    }

    pub fn name(&self) -> &'static str {
        match self {
            CacheStore::NoOp(_) => "noop",
            CacheStore::Memory(_) => "memory",
        }
    }
}

impl Default for CacheStore {
    fn default() -> Self {
        CacheStore::NoOp(NoOpCacheRepository)
    }
}

impl CacheRepository for CacheStore {
    async fn get(&self, key: &str) -> Result<Option<String>, CoreError> {
        match self {
            CacheStore::NoOp(cache) => cache.get(key).await,
            CacheStore::Memory(cache) => cache.get(key).await,
        }
    }

    async fn set(&self, key: &str, value: String, ttl: Duration) -> Result<(), CoreError> {
        match self {
            CacheStore::NoOp(cache) => cache.set(key, value, ttl).await,
            CacheStore::Memory(cache) => cache.set(key, value, ttl).await,
        }
    }

    async fn delete(&self, key: &str) -> Result<(), CoreError> {
        match self {
            CacheStore::NoOp(cache) => cache.delete(key).await,
            CacheStore::Memory(cache) => cache.delete(key).await,
        }
    }

    async fn clear(&self) -> Result<(), CoreError> {
        match self {
            CacheStore::NoOp(cache) => cache.clear().await,
            CacheStore::Memory(cache) => cache.clear().await,
        }
    }
}
