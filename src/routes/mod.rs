use axum::{Router, http::HeaderMap};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;
use uuid::Uuid;

use crate::{services::documentation::ApiDoc, state::SharedState};

pub mod admin;
pub mod game;
pub mod health;
pub mod scores;

/// Header carrying the caller's session identifier.
pub const SESSION_ID_HEADER: &str = "x-session-id";

/// Compose all route trees, wiring in shared state and the Swagger UI.
pub fn router(state: SharedState) -> Router<()> {
    let swagger = SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi());

    health::router()
        .merge(game::router())
        .merge(scores::router())
        .merge(admin::router(state.clone()))
        .merge(swagger)
        .with_state(state)
}

/// Resolve the caller's session id from the headers, minting a fresh one
/// when the header is missing or unparsable. Responses echo the id so
/// clients can stick to it.
pub(crate) fn session_from_headers(headers: &HeaderMap) -> Uuid {
    headers
        .get(SESSION_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| Uuid::parse_str(value).ok())
        .unwrap_or_else(Uuid::new_v4)
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;

    #[test]
    fn valid_session_header_is_reused() {
        let id = Uuid::new_v4();
        let mut headers = HeaderMap::new();
        headers.insert(
            SESSION_ID_HEADER,
            HeaderValue::from_str(&id.to_string()).unwrap(),
        );
        assert_eq!(session_from_headers(&headers), id);
    }

    #[test]
    fn missing_or_garbled_header_mints_a_fresh_session() {
        let headers = HeaderMap::new();
        let first = session_from_headers(&headers);
        let second = session_from_headers(&headers);
        assert_ne!(first, second);

        let mut headers = HeaderMap::new();
        headers.insert(SESSION_ID_HEADER, HeaderValue::from_static("not-a-uuid"));
        let minted = session_from_headers(&headers);
        assert_ne!(minted.to_string(), "not-a-uuid");
    }
}
