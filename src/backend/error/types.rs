/**
 * Backend Error Types
 *
 * This module defines the error type shared by handlers, the store and the
 * delivery router.
 *
 * # Error Categories
 *
 * ## Client Errors
 *
 * - Missing required fields
 * - Duplicate registration
 * - Wrong email or password
 * - Referenced user does not exist
 *
 * ## Collaborator Errors
 *
 * - Store (sqlx) failures, including schema migration
 * - Password hashing failures
 * - Token signing or verification failures
 *
 * Collaborator errors map to 500 and are never retried.
 */

use axum::http::StatusCode;
use thiserror::Error;

/// Backend-specific error types
///
/// # Usage
///
/// ```rust
/// use chatline::backend::error::BackendError;
///
/// let err = BackendError::validation("email", "Please fill all required fields");
/// assert_eq!(err.status_code().as_u16(), 400);
///
/// let err = BackendError::not_found("user", "u42");
/// assert_eq!(err.status_code().as_u16(), 404);
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// A required field is missing or empty
    #[error("Validation error in field '{field}': {message}")]
    Validation {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },

    /// The resource already exists (e.g. email taken)
    #[error("{message}")]
    Conflict {
        /// Human-readable error message
        message: String,
    },

    /// Login with an unknown email or a wrong password
    #[error("User email or password is incorrect")]
    InvalidCredentials,

    /// A referenced user is absent
    #[error("{entity} not found: {id}")]
    NotFound {
        /// Kind of record that was looked up
        entity: &'static str,
        /// Identifier that was looked up
        id: String,
    },

    /// Store failure
    #[error("Store error: {0}")]
    Store(#[from] sqlx::Error),

    /// Schema migration failure
    #[error("Migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),

    /// Password hashing or verification failure
    #[error("Password hashing error: {0}")]
    PasswordHash(#[from] bcrypt::BcryptError),

    /// Token signing or verification failure
    #[error("Token error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),
}

impl BackendError {
    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a new conflict error
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    /// Create a new not-found error
    pub fn not_found(entity: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity,
            id: id.into(),
        }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `Validation`, `Conflict`, `InvalidCredentials` - 400 Bad Request
    /// - `NotFound` - 404 Not Found
    /// - collaborator failures - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation { .. } | Self::Conflict { .. } | Self::InvalidCredentials => {
                StatusCode::BAD_REQUEST
            }
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Store(_) | Self::Migrate(_) | Self::PasswordHash(_) | Self::Token(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Whether the error reflects a server-side failure
    pub fn is_server_error(&self) -> bool {
        self.status_code().is_server_error()
    }

    /// Get the message shown to clients
    ///
    /// Server-side failures get a generic message; their detail only goes
    /// to the log.
    pub fn message(&self) -> String {
        match self {
            Self::Validation { message, .. } => message.clone(),
            Self::Conflict { message } => message.clone(),
            Self::InvalidCredentials | Self::NotFound { .. } => self.to_string(),
            _ => "Internal Server Error".to_string(),
        }
    }
}
