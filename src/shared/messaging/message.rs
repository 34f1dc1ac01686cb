//! Chat Message Data Structures
//!
//! Bodies for sending and listing stored messages.

use serde::{Deserialize, Serialize};

use super::user::UserProfile;

/// Conversation id placeholder meaning "start a new conversation"
pub const NEW_CONVERSATION: &str = "new";

/// Request to store a message
///
/// `conversation_id` may be [`NEW_CONVERSATION`], in which case
/// `receiver_id` names the other member.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SendMessageRequest {
    pub conversation_id: String,
    pub sender_id: String,
    pub message: String,
    pub receiver_id: String,
}

impl SendMessageRequest {
    /// Whether this request opens a new conversation
    pub fn starts_conversation(&self) -> bool {
        self.conversation_id == NEW_CONVERSATION && !self.receiver_id.is_empty()
    }
}

/// Response after storing a message
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageSent {
    pub message: String,
    pub conversation_id: String,
    pub message_id: String,
}

/// Query for `GET /api/message/new`
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MessagesQuery {
    pub sender_id: Option<String>,
    pub receiver_id: Option<String>,
}

/// One stored message with its sender's profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageView {
    pub user: UserProfile,
    pub message: String,
}
