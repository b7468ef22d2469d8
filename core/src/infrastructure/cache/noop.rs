use std::time::Duration;

use crate::domain::{cache::ports::CacheRepository, common::entities::app_errors::CoreError};

/// Cache that never stores anything. Every lookup is a miss.
#[derive(Debug, Clone, Default)]
pub struct NoOpCacheRepository;

impl CacheRepository for NoOpCacheRepository {
    async fn get(&self, _key: &str) -> Result<Option<String>, CoreError> {
        Ok(None)
    }

    async fn set(&self, _key: &str, _value: String, _ttl: Duration) -> Result<(), CoreError> {
        Ok(())
    }

    async fn delete(&self, _key: &str) -> Result<(), CoreError> {
        Ok(())
    }

    async fn clear(&self) -> Result<(), CoreError> {
        Ok(())
    }
}
