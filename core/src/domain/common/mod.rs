use std::time::Duration;

pub mod entities;
pub mod services;

pub const DEFAULT_CACHE_MAX_CAPACITY: u64 = 10_000;
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(300);

#[derive(Clone, Debug)]
pub struct ServerListConfig {
    pub database: DatabaseConfig,
    pub cache: CacheConfig,
}

#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub max_lifetime: Duration,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite://data/servers.db?mode=ro".to_string(),
            max_connections: 25,
            max_lifetime: Duration::from_secs(5 * 60),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CacheBackend {
    NoOp,
    Memory,
}

#[derive(Clone, Debug)]
pub struct CacheConfig {
    pub enabled: bool,
    pub backend: CacheBackend,
    pub ttl: Duration,
    /// Upper bound on stored entries for the in-memory backend.
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            backend: CacheBackend::Memory,
            ttl: DEFAULT_CACHE_TTL,
            max_capacity: DEFAULT_CACHE_MAX_CAPACITY,
        }
    }
}

impl CacheConfig {
    /// Backend actually used at runtime. A disabled cache always resolves to the no-op store.
    pub fn effective_backend(&self) -> CacheBackend {
        if self.enabled {
            self.backend.clone()
        } else {
            CacheBackend::NoOp
        }
    }
}
