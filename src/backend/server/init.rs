/**
 * Server Initialization
 *
 * This module builds the Axum application from a `ServerConfig`.
 *
 * # Initialization Process
 *
 * 1. Connect the SQLite store and run migrations
 * 2. Create realtime state (empty presence, no connections)
 * 3. Create and configure the router
 *
 * A store that cannot be opened or migrated is fatal; the error is
 * returned to the caller.
 */
use std::sync::Arc;

use axum::Router;

use crate::backend::error::BackendResult;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::ServerConfig;
use crate::backend::server::state::AppState;
use crate::backend::store::{SqliteStore, Store};

/// Create and configure the Axum application
///
/// # Errors
///
/// Returns `Store` or `Migrate` errors from opening the database.
pub async fn create_app(config: ServerConfig) -> BackendResult<Router<()>> {
    tracing::info!("Initializing chat backend server");

    let store = SqliteStore::connect(&config.database_url).await?;
    tracing::info!("Store ready at {}", config.database_url);

    Ok(create_app_with_store(config, Arc::new(store)))
}

/// Create the application over an already opened store
pub fn create_app_with_store(config: ServerConfig, store: Arc<dyn Store>) -> Router<()> {
    let app_state = AppState::new(store, config);
    let app = create_router(app_state);
    tracing::info!("Router configured");
    app
}
