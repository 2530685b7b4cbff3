//! Top-level application router.
//!
//! Mounts every HTTP module and wraps them in the shared tower-http stack:
//! request ids, request tracing, CORS.

use axum::http::{HeaderName, HeaderValue, Method};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

use super::health::health_routes;
use super::threads::{threads_router, ThreadsAppState};

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Build the full application router.
///
/// # Routes
/// - `GET /health`
/// - `POST /api/assistants/threads`
pub fn app_router(state: ThreadsAppState, server: &ServerConfig) -> Router {
    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);

    Router::new()
        .nest("/api", threads_router())
        .merge(health_routes::<ThreadsAppState>())
        .with_state(state)
        .layer(cors_layer(&server.cors_origins_list()))
        .layer(PropagateRequestIdLayer::new(request_id.clone()))
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::new(request_id, MakeRequestUuid))
}

/// CORS for the configured origins. Unparseable origins are skipped.
fn cors_layer(origins: &[String]) -> CorsLayer {
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(allowed)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any)
}
