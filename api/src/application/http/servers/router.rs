use axum::{Router, routing::get};

use super::handlers::{
    get_locations::get_locations, get_metrics::get_metrics, get_server::get_server,
    get_servers::get_servers,
};
use crate::application::http::server::app_state::AppState;

pub fn server_routes(root_path: &str) -> Router<AppState> {
    Router::new()
        .route(&format!("{}/servers", root_path), get(get_servers))
        .route(&format!("{}/servers/{{id}}", root_path), get(get_server))
        .route(&format!("{}/locations", root_path), get(get_locations))
        .route(&format!("{}/metrics", root_path), get(get_metrics))
}
