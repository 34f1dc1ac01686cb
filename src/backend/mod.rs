//! Backend Module
//!
//! This module contains all server-side code: the Axum HTTP server, the
//! realtime presence and delivery layer, authentication and persistence.
//!
//! # Architecture
//!
//! - **`server`** - Server initialization, application state, configuration
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`realtime`** - Presence registry, connection hub, delivery router, socket
//! - **`auth`** - Registration, login, JWT tokens
//! - **`messaging`** - Conversation, message and contact list handlers
//! - **`store`** - The `Store` trait and its SQLite implementation
//! - **`error`** - Backend-specific error types
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Server binary
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── realtime/       - Presence and live delivery
//! ├── auth/           - Authentication
//! ├── messaging/      - Messaging handlers
//! ├── store/          - Persistence
//! └── error/          - Error types
//! ```
//!
//! # State Management
//!
//! `AppState` carries the store (`Arc<dyn Store>`), the realtime state and
//! the configuration. Presence and outboxes are guarded by
//! `parking_lot::Mutex`; locks are never held across an `.await`.
//!
//! # Error Handling
//!
//! Handlers return `BackendResult<T>`; `BackendError` renders itself as a
//! JSON `{error, status}` response.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Presence tracking and live delivery
pub mod realtime;

/// Backend error types
pub mod error;

/// Authentication and user management
pub mod auth;

/// Conversations and messages
pub mod messaging;

/// Persistence
pub mod store;

pub use error::BackendError;
pub use realtime::{DeliveryRouter, PresenceRegistry, RealtimeState};
pub use server::{create_app, AppState, ServerConfig};
pub use store::{SqliteStore, Store};
