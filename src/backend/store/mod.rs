//! Store Module
//!
//! Persistence for users, conversations and messages. Handlers and the
//! delivery router only see the [`Store`] trait; [`SqliteStore`] is the
//! implementation the server ships with.
//!
//! # Module Structure
//!
//! ```text
//! store/
//! ├── mod.rs      - Records and the Store trait
//! └── sqlite.rs   - sqlx/SQLite implementation
//! ```

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::backend::error::BackendResult;
use crate::shared::messaging::UserProfile;

/// SQLite implementation
pub mod sqlite;

pub use sqlite::SqliteStore;

/// A registered user as stored
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct UserRecord {
    /// UUID v4 rendered as text
    pub id: String,
    pub full_name: String,
    pub email: String,
    /// bcrypt hash
    pub password_hash: String,
    /// Most recently issued session token
    pub token: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl UserRecord {
    /// Public projection without credentials
    pub fn profile(&self) -> UserProfile {
        UserProfile {
            id: self.id.clone(),
            full_name: self.full_name.clone(),
            email: self.email.clone(),
        }
    }
}

/// A two-member conversation
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct ConversationRecord {
    pub id: String,
    pub member_a: String,
    pub member_b: String,
    pub created_at: DateTime<Utc>,
}

impl ConversationRecord {
    pub fn members(&self) -> [&str; 2] {
        [self.member_a.as_str(), self.member_b.as_str()]
    }

    pub fn has_member(&self, user_id: &str) -> bool {
        self.member_a == user_id || self.member_b == user_id
    }

    /// The member that is not `user_id`
    ///
    /// A conversation with oneself yields `user_id` back.
    pub fn other_member(&self, user_id: &str) -> Option<&str> {
        if self.member_a == user_id {
            Some(self.member_b.as_str())
        } else if self.member_b == user_id {
            Some(self.member_a.as_str())
        } else {
            None
        }
    }
}

/// A stored message
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct MessageRecord {
    pub id: String,
    pub conversation_id: String,
    pub sender_id: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

/// Persistence collaborator
///
/// Lookups return `Ok(None)` for absent records; `Err` is reserved for
/// store failures.
#[async_trait]
pub trait Store: Send + Sync + 'static {
    async fn insert_user(
        &self,
        full_name: &str,
        email: &str,
        password_hash: &str,
    ) -> BackendResult<UserRecord>;

    async fn find_user_by_id(&self, id: &str) -> BackendResult<Option<UserRecord>>;

    async fn find_user_by_email(&self, email: &str) -> BackendResult<Option<UserRecord>>;

    /// Every user except `id`, in registration order
    async fn list_users_except(&self, id: &str) -> BackendResult<Vec<UserRecord>>;

    async fn update_user_token(&self, id: &str, token: &str) -> BackendResult<()>;

    async fn insert_conversation(
        &self,
        member_a: &str,
        member_b: &str,
    ) -> BackendResult<ConversationRecord>;

    /// Conversations `user_id` is a member of, oldest first
    async fn find_conversations_for_user(
        &self,
        user_id: &str,
    ) -> BackendResult<Vec<ConversationRecord>>;

    /// The oldest conversation containing both members, in either order
    async fn find_conversation_between(
        &self,
        user_a: &str,
        user_b: &str,
    ) -> BackendResult<Option<ConversationRecord>>;

    async fn insert_message(
        &self,
        conversation_id: &str,
        sender_id: &str,
        message: &str,
    ) -> BackendResult<MessageRecord>;

    /// Messages of a conversation in the order they were stored
    async fn find_messages_for_conversation(
        &self,
        conversation_id: &str,
    ) -> BackendResult<Vec<MessageRecord>>;
}
