//! Chatline - Main Library
//!
//! Chatline is a small real-time chat backend: user registration and login,
//! conversation and message persistence, and live message delivery over a
//! presence-tracked WebSocket layer.
//!
//! # Module Structure
//!
//! - **`shared`** - Wire types exchanged with clients
//!   - Socket events (`ClientEvent`, `ServerEvent`)
//!   - Presence entries and delivery payloads
//!   - HTTP request/response bodies for auth and messaging
//!
//! - **`backend`** - The Axum server
//!   - Presence registry, connection hub and delivery router
//!   - WebSocket endpoint and event dispatch
//!   - Auth (bcrypt + JWT) and messaging handlers
//!   - SQLite-backed store
//!
//! # Usage
//!
//! ```rust,no_run
//! use chatline::backend::server::{config::ServerConfig, init::create_app};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env();
//! let app = create_app(config).await?;
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:8000").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Thread Safety
//!
//! Presence and connection state live behind `parking_lot::Mutex` and are
//! only locked for short synchronous sections, never across an `.await`.
//! The store is shared as `Arc<dyn Store>`.

/// Shared wire types
pub mod shared;

/// Backend server-side code
pub mod backend;
