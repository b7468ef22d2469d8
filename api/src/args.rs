use std::time::Duration;

use clap::{Args as ClapArgs, Parser, ValueEnum};
use serverlist_core::domain::common::{
    CacheBackend, CacheConfig, DatabaseConfig, ServerListConfig,
};

#[derive(Debug, Clone, Parser)]
#[command(name = "serverlist-api", version, about = "Read-only server listing API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub db: DatabaseArgs,

    #[command(flatten)]
    pub cache: CacheArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct ServerArgs {
    #[arg(long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "server-port", env = "SERVER_PORT", default_value_t = 8080)]
    pub port: u16,

    /// Prefix of the versioned routes. Legacy clients use the unprefixed ones.
    #[arg(long = "server-root-path", env = "SERVER_ROOT_PATH", default_value = "/api/v1")]
    pub root_path: String,

    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:3000"
    )]
    pub allowed_origins: Vec<String>,

    /// Seconds before an in-flight request is aborted.
    #[arg(long = "request-timeout", env = "REQUEST_TIMEOUT", default_value_t = 30)]
    pub request_timeout: u64,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct DatabaseArgs {
    #[arg(
        long = "database-url",
        env = "DATABASE_URL",
        default_value = "sqlite://data/servers.db?mode=ro"
    )]
    pub url: String,

    #[arg(
        long = "database-max-connections",
        env = "DATABASE_MAX_CONNECTIONS",
        default_value_t = 25
    )]
    pub max_connections: u32,

    /// Seconds a pooled connection may live.
    #[arg(
        long = "database-max-lifetime",
        env = "DATABASE_MAX_LIFETIME",
        default_value_t = 300
    )]
    pub max_lifetime: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CacheBackendArg {
    Noop,
    Memory,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct CacheArgs {
    #[arg(long = "cache-enabled", env = "CACHE_ENABLED", default_value_t = false)]
    pub enabled: bool,

    #[arg(
        long = "cache-backend",
        env = "CACHE_BACKEND",
        value_enum,
        default_value_t = CacheBackendArg::Memory
    )]
    pub backend: CacheBackendArg,

    /// Entry lifetime in seconds.
    #[arg(long = "cache-ttl", env = "CACHE_TTL", default_value_t = 300)]
    pub ttl: u64,

    /// Maximum number of cached responses kept by the memory backend.
    #[arg(
        long = "cache-max-capacity",
        env = "CACHE_MAX_CAPACITY",
        default_value_t = 10_000
    )]
    pub max_capacity: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LogArgs {
    /// Default filter directive, `RUST_LOG` takes precedence when set.
    #[arg(long = "log-level", env = "LOG_LEVEL", default_value = "info")]
    pub level: String,

    #[arg(long = "log-format", env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Text)]
    pub format: LogFormat,
}

impl From<CacheBackendArg> for CacheBackend {
    fn from(value: CacheBackendArg) -> Self {
        match value {
            CacheBackendArg::Noop => CacheBackend::NoOp,
            CacheBackendArg::Memory => CacheBackend::Memory,
        }
    }
}

impl From<Args> for ServerListConfig {
    fn from(args: Args) -> Self {
        Self {
            database: DatabaseConfig {
                url: args.db.url,
                max_connections: args.db.max_connections,
                max_lifetime: Duration::from_secs(args.db.max_lifetime),
            },
            cache: CacheConfig {
                enabled: args.cache.enabled,
                backend: args.cache.backend.into(),
                ttl: Duration::from_secs(args.cache.ttl),
                max_capacity: args.cache.max_capacity,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["serverlist-api"]);
        assert_eq!(args.server.port, 8080);
        assert_eq!(args.server.root_path, "/api/v1");
        assert_eq!(args.log.format, LogFormat::Text);

        let config = ServerListConfig::from(args);
        assert_eq!(config.database.max_connections, 25);
        assert_eq!(config.database.max_lifetime, Duration::from_secs(300));
        assert!(!config.cache.enabled);
        assert_eq!(config.cache.effective_backend(), CacheBackend::NoOp);
        assert_eq!(config.cache.max_capacity, 10_000);
    }

    #[test]
    fn test_flags_override_defaults() {
        let args = Args::parse_from([
            "serverlist-api",
            "--cache-enabled",
            "--cache-backend",
            "memory",
            "--cache-ttl",
            "60",
            "--cache-max-capacity",
            "500",
            "--allowed-origins",
            "http://a.test,http://b.test",
            "--log-format",
            "json",
        ]);
        assert_eq!(
            args.server.allowed_origins,
            vec!["http://a.test", "http://b.test"]
        );
        assert_eq!(args.log.format, LogFormat::Json);

        let config = ServerListConfig::from(args);
        assert_eq!(config.cache.effective_backend(), CacheBackend::Memory);
        assert_eq!(config.cache.ttl, Duration::from_secs(60));
        assert_eq!(config.cache.max_capacity, 500);
    }
}
