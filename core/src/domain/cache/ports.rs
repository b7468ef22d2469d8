use std::future::Future;
use std::time::Duration;

use crate::domain::common::entities::app_errors::CoreError;

/// Key-value store used to memoize serialized responses.
#[cfg_attr(test, mockall::automock)]
pub trait CacheRepository: Send + Sync {
    /// `Ok(None)` is a miss.
    fn get(&self, key: &str) -> impl Future<Output = Result<Option<String>, CoreError>> + Send;

    fn set(
        &self,
        key: &str,
        value: String,
        ttl: Duration,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn delete(&self, key: &str) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn clear(&self) -> impl Future<Output = Result<(), CoreError>> + Send;
}
