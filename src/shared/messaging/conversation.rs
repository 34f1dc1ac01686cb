//! Conversation Data Structures
//!
//! A conversation is always between exactly two members.

use serde::{Deserialize, Serialize};

use super::user::ContactProfile;

/// Request to create a conversation
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateConversationRequest {
    pub sender_id: String,
    pub receiver_id: String,
}

/// Response after creating a conversation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationCreated {
    pub message: String,
    pub conversation_id: String,
}

/// One row of `GET /api/conversations/{userId}`
///
/// `user` is the member on the other side of the conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationSummary {
    pub user: ContactProfile,
    pub conversation_id: String,
}
