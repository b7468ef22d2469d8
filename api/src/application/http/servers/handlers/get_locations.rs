use axum::extract::State;
use serverlist_core::domain::server::{ports::ServerService, value_objects::LocationList};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "/locations",
    tag = "servers",
    summary = "List locations",
    description = "Distinct, sorted location names that appear in the catalog.",
    responses(
        (status = 200, body = LocationList)
    ),
)]
pub async fn get_locations(
    State(state): State<AppState>,
) -> Result<Response<LocationList>, ApiError> {
    let locations = state
        .service
        .get_locations()
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(locations))
}
