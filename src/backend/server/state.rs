/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the necessary `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * `AppState` holds:
 * - the store every HTTP handler and the delivery router reads from
 * - realtime state (presence registry and connection hub)
 * - the loaded server configuration
 *
 * Everything is behind `Arc`, so cloning the state per request is cheap.
 *
 * # State Extraction
 *
 * Handlers extract only the part they need, e.g.
 * `State(store): State<Arc<dyn Store>>`.
 */
use std::sync::Arc;

use axum::extract::FromRef;

use crate::backend::realtime::{DeliveryRouter, RealtimeState};
use crate::backend::server::config::ServerConfig;
use crate::backend::store::Store;

#[derive(Clone)]
pub struct AppState {
    /// User, conversation and message persistence
    pub store: Arc<dyn Store>,

    /// Who is online and how to reach their connection
    pub realtime: RealtimeState,

    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(store: Arc<dyn Store>, config: ServerConfig) -> Self {
        Self {
            store,
            realtime: RealtimeState::new(),
            config: Arc::new(config),
        }
    }

    /// Router for live message events over this state
    pub fn delivery(&self) -> DeliveryRouter {
        DeliveryRouter::new(self.realtime.clone(), self.store.clone())
    }
}

impl FromRef<AppState> for Arc<dyn Store> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.store.clone()
    }
}

impl FromRef<AppState> for RealtimeState {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.realtime.clone()
    }
}

impl FromRef<AppState> for Arc<ServerConfig> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.config.clone()
    }
}
