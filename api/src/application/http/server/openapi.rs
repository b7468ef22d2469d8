use serverlist_core::domain::server::{
    ServerView,
    value_objects::{LocationList, PaginationMeta, ServerDetail, ServerList, ServerMetrics},
};
use utoipa::OpenApi;

use crate::application::http::{
    health::{__path_health, HealthResponse},
    server::api_entities::api_error::ApiErrorResponse,
    servers::handlers::{
        get_locations::__path_get_locations, get_metrics::__path_get_metrics,
        get_server::__path_get_server, get_servers::__path_get_servers,
    },
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Server Listing API",
        description = "Read-only catalog of dedicated server offers"
    ),
    paths(get_servers, get_server, get_locations, get_metrics, health),
    components(schemas(
        ServerView,
        ServerList,
        ServerDetail,
        PaginationMeta,
        LocationList,
        ServerMetrics,
        HealthResponse,
        ApiErrorResponse
    )),
    tags(
        (name = "servers", description = "Server catalog"),
        (name = "health", description = "Liveness")
    )
)]
pub struct ApiDoc;
