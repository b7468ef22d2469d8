use crate::{
    domain::common::{ServerListConfig, entities::app_errors::CoreError, services::Service},
    infrastructure::{
        cache::CacheStore,
        db::sqlite::{Sqlite, SqliteConfig},
        server::repositories::SqliteServerRepository,
    },
};

pub type ServerListService = Service<SqliteServerRepository, CacheStore>;

pub async fn create_service(config: ServerListConfig) -> Result<ServerListService, CoreError> {
    let sqlite = Sqlite::new(SqliteConfig::from(config.database)).await?;

    let server_repository = SqliteServerRepository::new(sqlite.get_db());
    let cache_store = CacheStore::from_config(&config.cache);

    Ok(Service::new(
        server_repository,
        cache_store,
        config.cache.ttl,
    ))
}
