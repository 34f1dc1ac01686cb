//! Messaging HTTP Handlers
//!
//! Conversations, stored messages and the contact list. Every listing is
//! enriched with user profiles from the store; a referenced user that no
//! longer exists turns the whole request into a 404.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use futures_util::future::try_join_all;

use crate::backend::auth::handlers::{require_fields, MISSING_FIELDS};
use crate::backend::error::{BackendError, BackendResult};
use crate::backend::store::{ConversationRecord, Store, UserRecord};
use crate::shared::messaging::{
    ContactEntry, ConversationCreated, ConversationSummary, CreateConversationRequest,
    MessageSent, MessageView, MessagesQuery, SendMessageRequest, NEW_CONVERSATION,
};

async fn require_user(store: &dyn Store, user_id: &str) -> BackendResult<UserRecord> {
    store
        .find_user_by_id(user_id)
        .await?
        .ok_or_else(|| BackendError::not_found("user", user_id))
}

/// Create a conversation between two users
///
/// `POST /api/conversation`
pub async fn create_conversation(
    State(store): State<Arc<dyn Store>>,
    Json(request): Json<CreateConversationRequest>,
) -> BackendResult<Json<ConversationCreated>> {
    require_fields(&[
        ("senderId", request.sender_id.as_str()),
        ("receiverId", request.receiver_id.as_str()),
    ])?;

    let conversation = store
        .insert_conversation(&request.sender_id, &request.receiver_id)
        .await?;

    tracing::info!(
        "[Messaging] Conversation {} created between {} and {}",
        conversation.id,
        request.sender_id,
        request.receiver_id
    );

    Ok(Json(ConversationCreated {
        message: "Conversation created successfully".to_string(),
        conversation_id: conversation.id,
    }))
}

/// List a user's conversations with the other member's profile
///
/// `GET /api/conversations/{userId}`
pub async fn list_conversations(
    State(store): State<Arc<dyn Store>>,
    Path(user_id): Path<String>,
) -> BackendResult<Json<Vec<ConversationSummary>>> {
    let conversations = store.find_conversations_for_user(&user_id).await?;

    let summaries = try_join_all(conversations.iter().map(|conversation| {
        summarize(store.as_ref(), conversation, &user_id)
    }))
    .await?;

    tracing::debug!("[Messaging] {} conversations for {}", summaries.len(), user_id);
    Ok(Json(summaries))
}

async fn summarize(
    store: &dyn Store,
    conversation: &ConversationRecord,
    user_id: &str,
) -> BackendResult<ConversationSummary> {
    let other_id = conversation.other_member(user_id).unwrap_or(user_id);
    let other = require_user(store, other_id).await?;
    Ok(ConversationSummary {
        user: other.profile().into(),
        conversation_id: conversation.id.clone(),
    })
}

/// Store a message, opening a conversation first when asked to
///
/// `POST /api/message`
///
/// With `conversationId: "new"` and a `receiverId`, exactly one
/// conversation between sender and receiver is created and the message is
/// stored in it. Any other non-empty `conversationId` is stored as given,
/// `"new"` included when no receiver accompanies it.
pub async fn send_message(
    State(store): State<Arc<dyn Store>>,
    Json(request): Json<SendMessageRequest>,
) -> BackendResult<Json<MessageSent>> {
    require_fields(&[
        ("senderId", request.sender_id.as_str()),
        ("message", request.message.as_str()),
    ])?;

    let conversation_id = if request.starts_conversation() {
        let conversation = store
            .insert_conversation(&request.sender_id, &request.receiver_id)
            .await?;
        tracing::info!(
            "[Messaging] Conversation {} opened by first message from {}",
            conversation.id,
            request.sender_id
        );
        conversation.id
    } else if request.conversation_id.is_empty() && request.receiver_id.is_empty() {
        return Err(BackendError::validation("conversationId", MISSING_FIELDS));
    } else {
        request.conversation_id.clone()
    };

    let message = store
        .insert_message(&conversation_id, &request.sender_id, &request.message)
        .await?;

    tracing::debug!(
        "[Messaging] Message {} stored in {} from {}",
        message.id,
        conversation_id,
        request.sender_id
    );

    Ok(Json(MessageSent {
        message: "Message sent successfully".to_string(),
        conversation_id,
        message_id: message.id,
    }))
}

/// List a conversation's messages with each sender's profile
///
/// `GET /api/message/{conversationId}`
///
/// For `conversationId` `"new"`, the `senderId` and `receiverId` query
/// parameters pick the existing conversation between the two. Unknown
/// conversations list as empty.
pub async fn list_messages(
    State(store): State<Arc<dyn Store>>,
    Path(conversation_id): Path<String>,
    Query(query): Query<MessagesQuery>,
) -> BackendResult<Json<Vec<MessageView>>> {
    let conversation_id = if conversation_id == NEW_CONVERSATION {
        let (Some(sender_id), Some(receiver_id)) = (query.sender_id, query.receiver_id) else {
            return Ok(Json(Vec::new()));
        };
        match store.find_conversation_between(&sender_id, &receiver_id).await? {
            Some(conversation) => conversation.id,
            None => return Ok(Json(Vec::new())),
        }
    } else {
        conversation_id
    };

    let messages = store.find_messages_for_conversation(&conversation_id).await?;

    let views = try_join_all(messages.into_iter().map(|message| {
        let store = store.clone();
        async move {
            let sender = require_user(store.as_ref(), &message.sender_id).await?;
            Ok::<_, BackendError>(MessageView {
                user: sender.profile(),
                message: message.message,
            })
        }
    }))
    .await?;

    Ok(Json(views))
}

/// Everyone except the requesting user
///
/// `GET /api/users/{userId}`
pub async fn list_users(
    State(store): State<Arc<dyn Store>>,
    Path(user_id): Path<String>,
) -> BackendResult<Json<Vec<ContactEntry>>> {
    let users = store.list_users_except(&user_id).await?;
    Ok(Json(
        users
            .into_iter()
            .map(|user| ContactEntry {
                user: user.profile().into(),
            })
            .collect(),
    ))
}
