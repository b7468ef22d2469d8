use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    server::{
        entities::Server,
        value_objects::{
            LocationList, ServerDetail, ServerFilter, ServerList, ServerListRequest,
            ServerMetrics,
        },
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait ServerService: Send + Sync {
    fn get_servers(
        &self,
        input: ServerListRequest,
    ) -> impl Future<Output = Result<ServerList, CoreError>> + Send;

    fn get_server(&self, id: i32) -> impl Future<Output = Result<ServerDetail, CoreError>> + Send;

    fn get_locations(&self) -> impl Future<Output = Result<LocationList, CoreError>> + Send;

    fn get_metrics(&self) -> impl Future<Output = Result<ServerMetrics, CoreError>> + Send;
}

/// Read access to the server catalog.
#[cfg_attr(test, mockall::automock)]
pub trait ServerRepository: Send + Sync {
    /// Returns one page of matching servers and the total number of matches.
    fn get_servers(
        &self,
        filter: ServerFilter,
    ) -> impl Future<Output = Result<(Vec<Server>, u64), CoreError>> + Send;

    fn get_server_by_id(
        &self,
        id: i32,
    ) -> impl Future<Output = Result<Option<Server>, CoreError>> + Send;

    /// Distinct non-empty location names in ascending order.
    fn get_locations(&self) -> impl Future<Output = Result<Vec<String>, CoreError>> + Send;

    fn get_metrics(&self) -> impl Future<Output = Result<ServerMetrics, CoreError>> + Send;
}
