use std::time::Duration;

use crate::domain::{cache::ports::CacheRepository, server::ports::ServerRepository};

/// Holds every adapter the domain services need. Service traits are implemented on this
/// struct so the HTTP layer only ever talks to one value.
#[derive(Clone)]
pub struct Service<SR, CR>
where
    SR: ServerRepository,
    CR: CacheRepository,
{
    pub server_repository: SR,
    pub cache_repository: CR,
    pub cache_ttl: Duration,
}

impl<SR, CR> Service<SR, CR>
where
    SR: ServerRepository,
    CR: CacheRepository,
{
    pub fn new(server_repository: SR, cache_repository: CR, cache_ttl: Duration) -> Self {
        Self {
            server_repository,
            cache_repository,
            cache_ttl,
        }
    }
}
