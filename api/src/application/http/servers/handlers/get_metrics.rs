use axum::extract::State;
use serverlist_core::domain::server::{ports::ServerService, value_objects::ServerMetrics};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "/metrics",
    tag = "servers",
    summary = "Catalog metrics",
    description = "Server count with price range and location count over priced, located offers.",
    responses(
        (status = 200, body = ServerMetrics)
    ),
)]
pub async fn get_metrics(
    State(state): State<AppState>,
) -> Result<Response<ServerMetrics>, ApiError> {
    let metrics = state
        .service
        .get_metrics()
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(metrics))
}
