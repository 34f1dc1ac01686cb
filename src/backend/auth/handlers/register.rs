/**
 * Register Handler
 *
 * This module implements the user registration handler for POST /api/register.
 *
 * # Registration Process
 *
 * 1. Require full name, email and password
 * 2. Reject an email that is already registered
 * 3. Hash password using bcrypt with the configured cost
 * 4. Create user in the store
 */

use axum::{extract::State, response::Json};
use bcrypt::hash;
use std::sync::Arc;

use super::require_fields;
use crate::backend::error::{BackendError, BackendResult};
use crate::backend::server::config::ServerConfig;
use crate::backend::store::Store;
use crate::shared::messaging::{RegisterRequest, StatusMessage};

/// Register handler
///
/// # Errors
///
/// * `400 Bad Request` - If a field is missing or the email is taken
/// * `500 Internal Server Error` - If hashing or the store fails
///
/// # Example Request
///
/// ```http
/// POST /api/register HTTP/1.1
/// Content-Type: application/json
///
/// {"fullName": "Ada Lovelace", "email": "ada@example.com", "password": "secret"}
/// ```
pub async fn register(
    State(store): State<Arc<dyn Store>>,
    State(config): State<Arc<ServerConfig>>,
    Json(request): Json<RegisterRequest>,
) -> BackendResult<Json<StatusMessage>> {
    require_fields(&[
        ("fullName", request.full_name.as_str()),
        ("email", request.email.as_str()),
        ("password", request.password.as_str()),
    ])?;

    tracing::info!("Register request for email: {}", request.email);

    if store.find_user_by_email(&request.email).await?.is_some() {
        return Err(BackendError::conflict("User already exists"));
    }

    let password_hash = hash(&request.password, config.bcrypt_cost)?;

    let user = store
        .insert_user(&request.full_name, &request.email, &password_hash)
        .await?;

    tracing::info!("User registered successfully: {} ({})", user.full_name, user.id);

    Ok(Json(StatusMessage::new("User registered successfully")))
}
