use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, instrument, warn};

use crate::domain::{
    cache::ports::CacheRepository,
    common::{entities::app_errors::CoreError, services::Service},
    server::{
        cache_key::{LOCATIONS_KEY, METRICS_KEY, server_key, servers_key},
        entities::ServerView,
        ports::{ServerRepository, ServerService},
        value_objects::{
            LocationList, PaginationMeta, ServerDetail, ServerFilter, ServerList,
            ServerListRequest, ServerMetrics,
        },
    },
};

impl<SR, CR> Service<SR, CR>
where
    SR: ServerRepository,
    CR: CacheRepository,
{
    /// Cache failures and undecodable entries are both reported as a miss.
    async fn cached<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        match self.cache_repository.get(key).await {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(value) => Some(value),
                Err(e) => {
                    warn!(key, "Discarding undecodable cache entry: {}", e);
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                warn!(key, "Cache lookup failed, continuing without cache: {}", e);
                None
            }
        }
    }

    async fn store<T: Serialize>(&self, key: &str, value: &T) {
        let payload = match serde_json::to_string(value) {
            Ok(payload) => payload,
            Err(e) => {
                warn!(key, "Failed to serialize response for cache: {}", e);
                return;
            }
        };

        if let Err(e) = self
            .cache_repository
            .set(key, payload, self.cache_ttl)
            .await
        {
            warn!(key, "Cache write failed: {}", e);
        }
    }
}

impl<SR, CR> ServerService for Service<SR, CR>
where
    SR: ServerRepository,
    CR: CacheRepository,
{
    #[instrument(skip(self))]
    async fn get_servers(&self, input: ServerListRequest) -> Result<ServerList, CoreError> {
        let filter = ServerFilter::from(input);
        let key = servers_key(&filter);

        if let Some(cached) = self.cached::<ServerList>(&key).await {
            debug!(key, "Serving server list from cache");
            return Ok(cached);
        }

        let page = filter.page;
        let (servers, total) = self.server_repository.get_servers(filter).await?;

        debug!(
            page = page.page,
            per_page = page.per_page,
            returned = servers.len(),
            total,
            "Listed servers"
        );

        let response = ServerList {
            data: servers.into_iter().map(ServerView::from).collect(),
            pagination: PaginationMeta::new(page, total),
        };

        self.store(&key, &response).await;

        Ok(response)
    }

    #[instrument(skip(self))]
    async fn get_server(&self, id: i32) -> Result<ServerDetail, CoreError> {
        let key = server_key(id);

        if let Some(cached) = self.cached::<ServerDetail>(&key).await {
            return Ok(cached);
        }

        let server = self
            .server_repository
            .get_server_by_id(id)
            .await?
            .ok_or(CoreError::NotFound)?;

        let response = ServerDetail {
            data: ServerView::from(server),
        };

        self.store(&key, &response).await;

        Ok(response)
    }

    #[instrument(skip(self))]
    async fn get_locations(&self) -> Result<LocationList, CoreError> {
        if let Some(cached) = self.cached::<LocationList>(LOCATIONS_KEY).await {
            return Ok(cached);
        }

        let response = LocationList {
            data: self.server_repository.get_locations().await?,
        };

        self.store(LOCATIONS_KEY, &response).await;

        Ok(response)
    }

    #[instrument(skip(self))]
    async fn get_metrics(&self) -> Result<ServerMetrics, CoreError> {
        if let Some(cached) = self.cached::<ServerMetrics>(METRICS_KEY).await {
            return Ok(cached);
        }

        let metrics = self.server_repository.get_metrics().await?;

        self.store(METRICS_KEY, &metrics).await;

        Ok(metrics)
    }
}
