use axum::extract::State;
use serde::Deserialize;
use serverlist_core::domain::server::{ports::ServerService, value_objects::ServerList};
use utoipa::IntoParams;

use crate::application::http::{
    query_extractor::ServerQueryExtractor,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

/// Documented shape of the listing query. Values are parsed leniently by
/// [`ServerQueryExtractor`], so this type is only used for the OpenAPI schema.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct GetServersQuery {
    /// Case-insensitive substring of the model or CPU.
    pub q: Option<String>,
    /// Location names or codes, comma separated or repeated.
    pub location: Option<String>,
    pub ram_min: Option<i32>,
    pub ram_max: Option<i32>,
    /// Exact RAM sizes in GB, comma separated. Overrides `ram_min` and `ram_max`.
    pub ram_values: Option<String>,
    /// Lower storage bound in TB.
    pub storage_min: Option<f64>,
    /// Upper storage bound in TB.
    pub storage_max: Option<f64>,
    /// Storage type, matched as a substring of the disk description.
    pub hdd: Option<String>,
    pub price_min: Option<f64>,
    pub price_max: Option<f64>,
    /// `field` or `field.asc` / `field.desc`.
    pub sort: Option<String>,
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}

#[utoipa::path(
    get,
    path = "/servers",
    tag = "servers",
    summary = "List servers",
    description = "Filters, sorts and paginates the server catalog.",
    params(GetServersQuery),
    responses(
        (status = 200, body = ServerList)
    ),
)]
pub async fn get_servers(
    State(state): State<AppState>,
    ServerQueryExtractor(params): ServerQueryExtractor,
) -> Result<Response<ServerList>, ApiError> {
    let servers = state
        .service
        .get_servers(params.into_inner())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(servers))
}
