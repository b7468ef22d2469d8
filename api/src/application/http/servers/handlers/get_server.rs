use axum::extract::{Path, State};
use serverlist_core::domain::{
    common::entities::app_errors::CoreError,
    server::{ports::ServerService, value_objects::ServerDetail},
};

use crate::application::http::server::{
    api_entities::{
        api_error::{ApiError, ApiErrorResponse},
        response::Response,
    },
    app_state::AppState,
};

pub fn parse_server_id(raw: &str) -> Result<i32, CoreError> {
    raw.trim()
        .parse::<i32>()
        .map_err(|_| CoreError::InvalidIdentifier(raw.to_string()))
}

#[utoipa::path(
    get,
    path = "/servers/{id}",
    tag = "servers",
    summary = "Get server",
    params(
        ("id" = i32, Path, description = "Server ID"),
    ),
    responses(
        (status = 200, body = ServerDetail),
        (status = 400, body = ApiErrorResponse, description = "Identifier is not numeric"),
        (status = 404, body = ApiErrorResponse, description = "No server with this identifier")
    ),
)]
pub async fn get_server(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<ServerDetail>, ApiError> {
    let id = parse_server_id(&id).map_err(ApiError::from)?;

    let server = state
        .service
        .get_server(id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(server))
}
