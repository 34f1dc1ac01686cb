/**
 * API Route Handlers
 *
 * This module wires the JSON API under `/api`.
 *
 * # Routes
 *
 * ## Authentication
 * - `POST /api/register` - User registration
 * - `POST /api/login` - User login
 *
 * ## Messaging
 * - `POST /api/conversation` - Create a conversation
 * - `GET /api/conversations/{userId}` - A user's conversations
 * - `POST /api/message` - Store a message (optionally opening a conversation)
 * - `GET /api/message/{conversationId}` - A conversation's messages
 * - `GET /api/users/{userId}` - Everyone except the given user
 */
use axum::{
    routing::{get, post},
    Router,
};

use crate::backend::auth::{login, register};
use crate::backend::messaging::handlers::{
    create_conversation, list_conversations, list_messages, list_users, send_message,
};
use crate::backend::server::state::AppState;

/// Configure API routes
///
/// None of these routes require authentication.
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        // Authentication endpoints
        .route("/api/register", post(register))
        .route("/api/login", post(login))
        // Messaging endpoints
        .route("/api/conversation", post(create_conversation))
        .route("/api/conversations/{user_id}", get(list_conversations))
        .route("/api/message", post(send_message))
        .route("/api/message/{conversation_id}", get(list_messages))
        .route("/api/users/{user_id}", get(list_users))
}
