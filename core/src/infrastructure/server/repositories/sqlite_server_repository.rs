use chrono::Utc;
use sea_orm::{ConnectionTrait, DatabaseConnection, EntityTrait, Statement};
use tracing::{debug, error};

use crate::domain::{
    common::entities::app_errors::CoreError,
    server::{
        entities::Server, ports::ServerRepository, value_objects::ServerFilter,
        value_objects::ServerMetrics,
    },
};
use crate::entity::servers::Entity as ServerEntity;
use crate::infrastructure::server::query_builder::ServerQuery;

const LOCATIONS_SQL: &str = r#"
    SELECT DISTINCT location_city AS location
    FROM servers
    WHERE location_city IS NOT NULL AND location_city != ''
    ORDER BY location_city
"#;

// total_servers counts every row. The other aggregates only see rows with a price and a
// non-empty location.
const METRICS_SQL: &str = r#"
    SELECT
        COUNT(*) AS total_servers,
        MIN(CASE WHEN price_eur IS NOT NULL AND location_city IS NOT NULL AND location_city != ''
            THEN price_eur END) AS min_price,
        MAX(CASE WHEN price_eur IS NOT NULL AND location_city IS NOT NULL AND location_city != ''
            THEN price_eur END) AS max_price,
        COUNT(DISTINCT CASE WHEN price_eur IS NOT NULL AND location_city IS NOT NULL AND location_city != ''
            THEN location_city END) AS locations_count
    FROM servers
"#;

#[derive(Debug, Clone)]
pub struct SqliteServerRepository {
    pub db: DatabaseConnection,
}

impl SqliteServerRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn count(&self, query: &ServerQuery) -> Result<u64, CoreError> {
        let backend = self.db.get_database_backend();
        let row = self
            .db
            .query_one(query.count_statement(backend))
            .await
            .map_err(|e| {
                error!("Failed to get server count: {}", e);
                CoreError::InternalServerError
            })?;

        let count = row
            .map(|row| row.try_get::<i64>("", "count"))
            .transpose()
            .map_err(|e| {
                error!("Failed to decode server count: {}", e);
                CoreError::InternalServerError
            })?
            .unwrap_or(0);

        Ok(u64::try_from(count).unwrap_or(0))
    }
}

impl ServerRepository for SqliteServerRepository {
    async fn get_servers(&self, filter: ServerFilter) -> Result<(Vec<Server>, u64), CoreError> {
        let query = ServerQuery::from_filter(&filter);
        let backend = self.db.get_database_backend();

        debug!(
            sql = %query.page_sql(),
            values = ?query.values,
            "Executing server page query"
        );

        let servers = ServerEntity::find()
            .from_raw_sql(query.page_statement(backend))
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get servers: {}", e);
                CoreError::InternalServerError
            })?
            .into_iter()
            .map(Server::from)
            .collect::<Vec<Server>>();

        let total = self.count(&query).await?;

        Ok((servers, total))
    }

    async fn get_server_by_id(&self, id: i32) -> Result<Option<Server>, CoreError> {
        let server = ServerEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get server by id: {}", e);
                CoreError::InternalServerError
            })?
            .map(Server::from);

        Ok(server)
    }

    async fn get_locations(&self) -> Result<Vec<String>, CoreError> {
        let backend = self.db.get_database_backend();
        let rows = self
            .db
            .query_all(Statement::from_string(backend, LOCATIONS_SQL))
            .await
            .map_err(|e| {
                error!("Failed to get locations: {}", e);
                CoreError::InternalServerError
            })?;

        let locations = rows
            .into_iter()
            .filter_map(|row| row.try_get::<String>("", "location").ok())
            .collect::<Vec<String>>();

        Ok(locations)
    }

    async fn get_metrics(&self) -> Result<ServerMetrics, CoreError> {
        let backend = self.db.get_database_backend();
        let row = self
            .db
            .query_one(Statement::from_string(backend, METRICS_SQL))
            .await
            .map_err(|e| {
                error!("Failed to get metrics: {}", e);
                CoreError::InternalServerError
            })?
            .ok_or_else(|| {
                error!("Metrics query returned no row");
                CoreError::InternalServerError
            })?;

        let decode = |e: sea_orm::DbErr| {
            error!("Failed to decode metrics: {}", e);
            CoreError::InternalServerError
        };

        let total_servers = row.try_get::<i64>("", "total_servers").map_err(decode)?;
        let min_price = row.try_get::<Option<f64>>("", "min_price").map_err(decode)?;
        let max_price = row.try_get::<Option<f64>>("", "max_price").map_err(decode)?;
        let locations_count = row.try_get::<i64>("", "locations_count").map_err(decode)?;

        Ok(ServerMetrics {
            total_servers: u64::try_from(total_servers).unwrap_or(0),
            min_price,
            max_price,
            locations_count: u64::try_from(locations_count).unwrap_or(0),
            last_updated: Utc::now(),
        })
    }
}
