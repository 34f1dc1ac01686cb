/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configurations into a single Axum router.
 *
 * # Route Order
 *
 * 1. Greeting (`GET /`) and the chat socket (`GET /socket`)
 * 2. API routes (auth, conversations, messages, users)
 * 3. Fallback handler (404)
 *
 * Every route runs behind request tracing and CORS.
 */
use axum::{
    http::{header, HeaderValue, Method, Uri},
    routing::get,
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::backend::error::BackendError;
use crate::backend::realtime::handle_socket_upgrade;
use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::server::state::AppState;

/// Plain-text body of `GET /`
pub const GREETING: &str = "Welcome to the chat API!";

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Store, realtime state and configuration
pub fn create_router(app_state: AppState) -> Router<()> {
    let cors = cors_layer(&app_state.config.cors_origin);

    let router = Router::new()
        .route("/", get(|| async { GREETING }))
        .route("/socket", get(handle_socket_upgrade));

    // Add API routes
    let router = configure_api_routes(router);

    // Fallback handler for 404
    let router = router.fallback(not_found);

    router
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(app_state)
}

async fn not_found(uri: Uri) -> BackendError {
    BackendError::not_found("route", uri.path())
}

fn cors_layer(origin: &str) -> CorsLayer {
    let allow_origin = match origin.parse::<HeaderValue>() {
        Ok(value) => AllowOrigin::exact(value),
        Err(_) => {
            tracing::warn!("Invalid CORS_ORIGIN {:?}, allowing any origin", origin);
            AllowOrigin::any()
        }
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}
