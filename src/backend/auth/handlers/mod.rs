//! Authentication Handlers Module
//!
//! # Handlers
//!
//! - **`register`** - POST /api/register - User registration
//! - **`login`** - POST /api/login - User authentication
//!
//! # Example
//!
//! ```rust,no_run
//! use chatline::backend::auth::handlers::{register, login};
//! use chatline::backend::server::state::AppState;
//! use axum::{routing::post, Router};
//!
//! let router: Router<AppState> = Router::new()
//!     .route("/api/register", post(register))
//!     .route("/api/login", post(login));
//! ```

use crate::backend::error::{BackendError, BackendResult};

/// Signup handler
pub mod register;

/// Login handler
pub mod login;

pub use login::login;
pub use register::register;

/// Message used for every missing-field rejection
pub const MISSING_FIELDS: &str = "Please fill all required fields";

/// Reject empty (or whitespace-only) required fields
pub fn require_fields(fields: &[(&str, &str)]) -> BackendResult<()> {
    match fields.iter().find(|(_, value)| value.trim().is_empty()) {
        Some((name, _)) => Err(BackendError::validation(*name, MISSING_FIELDS)),
        None => Ok(()),
    }
}
