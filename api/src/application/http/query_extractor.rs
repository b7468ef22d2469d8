use axum::{extract::FromRequestParts, http::request::Parts, response::Response};

use super::query_params::ServerQueryParams;

/// Extracts [`ServerQueryParams`] from the raw query string.
///
/// Unlike `Query<T>` this never rejects, a malformed query string yields the defaults.
#[derive(Debug, Clone)]
pub struct ServerQueryExtractor(pub ServerQueryParams);

impl<S> FromRequestParts<S> for ServerQueryExtractor
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let query_string = parts.uri.query().unwrap_or("");

        Ok(ServerQueryExtractor(ServerQueryParams::from_query_string(
            query_string,
        )))
    }
}
