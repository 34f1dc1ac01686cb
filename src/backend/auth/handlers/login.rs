/**
 * Login Handler
 *
 * This module implements the user authentication handler for POST /api/login.
 *
 * # Authentication Process
 *
 * 1. Look up user by email
 * 2. Verify password using bcrypt
 * 3. Generate JWT token and record it on the user
 * 4. Return token and user profile
 *
 * Unknown email and wrong password return the same 400 response.
 */
use axum::{extract::State, response::Json};
use bcrypt::verify;
use std::sync::Arc;

use super::require_fields;
use crate::backend::auth::sessions::create_token;
use crate::backend::error::{BackendError, BackendResult};
use crate::backend::server::config::ServerConfig;
use crate::backend::store::Store;
use crate::shared::messaging::{LoginRequest, LoginResponse};

/// Login handler
///
/// # Errors
///
/// * `400 Bad Request` - If a field is missing, the user is unknown or the password is wrong
/// * `500 Internal Server Error` - If the store, bcrypt or token signing fails
pub async fn login(
    State(store): State<Arc<dyn Store>>,
    State(config): State<Arc<ServerConfig>>,
    Json(request): Json<LoginRequest>,
) -> BackendResult<Json<LoginResponse>> {
    require_fields(&[
        ("email", request.email.as_str()),
        ("password", request.password.as_str()),
    ])?;

    tracing::info!("Login request for: {}", request.email);

    let user = store
        .find_user_by_email(&request.email)
        .await?
        .ok_or(BackendError::InvalidCredentials)?;

    if !verify(&request.password, &user.password_hash)? {
        return Err(BackendError::InvalidCredentials);
    }

    let token = create_token(&config.jwt_secret, &user.id, &user.email)?;
    store.update_user_token(&user.id, &token).await?;

    tracing::info!("User logged in successfully: {} ({})", user.full_name, user.id);

    Ok(Json(LoginResponse {
        user: user.profile(),
        token,
    }))
}
