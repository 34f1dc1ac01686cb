//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Main router creation, layers and fallback
//! └── api_routes.rs   - JSON API under /api
//! ```
//!
//! # Route Types
//!
//! - `GET /` - Greeting
//! - `GET /socket` - Chat WebSocket
//! - `/api/...` - See [`api_routes`]
//!
//! Unknown paths get a JSON 404.

/// Main router creation
pub mod router;

/// API endpoint handlers
pub mod api_routes;

pub use router::create_router;
