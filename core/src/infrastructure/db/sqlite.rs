use std::time::Duration;

use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::{error, info};

use crate::domain::common::{DatabaseConfig, entities::app_errors::CoreError};

#[derive(Debug, Clone)]
pub struct SqliteConfig {
    pub database_url: String,
    pub max_connections: u32,
    pub max_lifetime: Duration,
}

impl From<DatabaseConfig> for SqliteConfig {
    fn from(config: DatabaseConfig) -> Self {
        Self {
            database_url: config.url,
            max_connections: config.max_connections,
            max_lifetime: config.max_lifetime,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Sqlite {
    db: DatabaseConnection,
}

impl Sqlite {
    pub async fn new(config: SqliteConfig) -> Result<Self, CoreError> {
        let mut options = ConnectOptions::new(config.database_url.clone());
        options
            .max_connections(config.max_connections.max(1))
            .max_lifetime(config.max_lifetime)
            .sqlx_logging(false);

        let db = Database::connect(options).await.map_err(|e| {
            error!("Failed to connect to database: {}", e);
            CoreError::DatabaseConnection(e.to_string())
        })?;

        db.ping().await.map_err(|e| {
            error!("Failed to ping database: {}", e);
            CoreError::DatabaseConnection(e.to_string())
        })?;

        info!(url = %config.database_url, "Database connection established");

        Ok(Self { db })
    }

    pub fn get_db(&self) -> DatabaseConnection {
        self.db.clone()
    }
}
