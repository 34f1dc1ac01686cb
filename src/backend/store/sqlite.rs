/**
 * SQLite Store
 *
 * `Store` implementation over a `sqlx::SqlitePool`. The schema lives in
 * `migrations/` and is applied on connect.
 *
 * In-memory databases (`sqlite::memory:`) exist per connection, so the pool
 * is pinned to a single connection that is never recycled.
 */

use async_trait::async_trait;
use chrono::Utc;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use uuid::Uuid;

use super::{ConversationRecord, MessageRecord, Store, UserRecord};
use crate::backend::error::{BackendError, BackendResult};

const USER_COLUMNS: &str = "id, full_name, email, password_hash, token, created_at";

/// SQLite-backed store
#[derive(Debug, Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Connect to `database_url` and apply migrations
    ///
    /// File databases are created if missing.
    pub async fn connect(database_url: &str) -> BackendResult<Self> {
        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

        let pool_options = if database_url.contains(":memory:") {
            SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new().max_connections(5)
        };

        tracing::info!("[Store] Connecting to {}", database_url);
        let pool = pool_options.connect_with(options).await?;

        let store = Self { pool };
        store.migrate().await?;
        Ok(store)
    }

    /// Fresh private in-memory database
    pub async fn in_memory() -> BackendResult<Self> {
        Self::connect("sqlite::memory:").await
    }

    pub async fn migrate(&self) -> BackendResult<()> {
        tracing::info!("[Store] Running database migrations...");
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        tracing::info!("[Store] Database migrations completed successfully");
        Ok(())
    }
}

#[async_trait]
impl Store for SqliteStore {
    async fn insert_user(
        &self,
        full_name: &str,
        email: &str,
        password_hash: &str,
    ) -> BackendResult<UserRecord> {
        let user = UserRecord {
            id: Uuid::new_v4().to_string(),
            full_name: full_name.to_string(),
            email: email.to_string(),
            password_hash: password_hash.to_string(),
            token: None,
            created_at: Utc::now(),
        };

        sqlx::query(
            r#"
            INSERT INTO users (id, full_name, email, password_hash, token, created_at)
            VALUES (?, ?, ?, ?, NULL, ?)
            "#,
        )
        .bind(&user.id)
        .bind(&user.full_name)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(user.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db) if db.is_unique_violation() => {
                BackendError::conflict("User already exists")
            }
            other => BackendError::Store(other),
        })?;

        Ok(user)
    }

    async fn find_user_by_id(&self, id: &str) -> BackendResult<Option<UserRecord>> {
        let user = sqlx::query_as::<_, UserRecord>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = ?"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn find_user_by_email(&self, email: &str) -> BackendResult<Option<UserRecord>> {
        let user = sqlx::query_as::<_, UserRecord>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE email = ?"
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn list_users_except(&self, id: &str) -> BackendResult<Vec<UserRecord>> {
        let users = sqlx::query_as::<_, UserRecord>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id != ? ORDER BY created_at, rowid"
        ))
        .bind(id)
        .fetch_all(&self.pool)
        .await?;

        Ok(users)
    }

    async fn update_user_token(&self, id: &str, token: &str) -> BackendResult<()> {
        sqlx::query("UPDATE users SET token = ? WHERE id = ?")
            .bind(token)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn insert_conversation(
        &self,
        member_a: &str,
        member_b: &str,
    ) -> BackendResult<ConversationRecord> {
        let conversation = ConversationRecord {
            id: Uuid::new_v4().to_string(),
            member_a: member_a.to_string(),
            member_b: member_b.to_string(),
            created_at: Utc::now(),
        };

        sqlx::query(
            r#"
            INSERT INTO conversations (id, member_a, member_b, created_at)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(&conversation.id)
        .bind(&conversation.member_a)
        .bind(&conversation.member_b)
        .bind(conversation.created_at)
        .execute(&self.pool)
        .await?;

        Ok(conversation)
    }

    async fn find_conversations_for_user(
        &self,
        user_id: &str,
    ) -> BackendResult<Vec<ConversationRecord>> {
        let conversations = sqlx::query_as::<_, ConversationRecord>(
            r#"
            SELECT id, member_a, member_b, created_at
            FROM conversations
            WHERE member_a = ? OR member_b = ?
            ORDER BY created_at, rowid
            "#,
        )
        .bind(user_id)
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(conversations)
    }

    async fn find_conversation_between(
        &self,
        user_a: &str,
        user_b: &str,
    ) -> BackendResult<Option<ConversationRecord>> {
        let conversation = sqlx::query_as::<_, ConversationRecord>(
            r#"
            SELECT id, member_a, member_b, created_at
            FROM conversations
            WHERE (member_a = ? AND member_b = ?) OR (member_a = ? AND member_b = ?)
            ORDER BY created_at, rowid
            LIMIT 1
            "#,
        )
        .bind(user_a)
        .bind(user_b)
        .bind(user_b)
        .bind(user_a)
        .fetch_optional(&self.pool)
        .await?;

        Ok(conversation)
    }

    async fn insert_message(
        &self,
        conversation_id: &str,
        sender_id: &str,
        message: &str,
    ) -> BackendResult<MessageRecord> {
        let record = MessageRecord {
            id: Uuid::new_v4().to_string(),
            conversation_id: conversation_id.to_string(),
            sender_id: sender_id.to_string(),
            message: message.to_string(),
            created_at: Utc::now(),
        };

        sqlx::query(
            r#"
            INSERT INTO messages (id, conversation_id, sender_id, message, created_at)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&record.id)
        .bind(&record.conversation_id)
        .bind(&record.sender_id)
        .bind(&record.message)
        .bind(record.created_at)
        .execute(&self.pool)
        .await?;

        Ok(record)
    }

    async fn find_messages_for_conversation(
        &self,
        conversation_id: &str,
    ) -> BackendResult<Vec<MessageRecord>> {
        let messages = sqlx::query_as::<_, MessageRecord>(
            r#"
            SELECT id, conversation_id, sender_id, message, created_at
            FROM messages
            WHERE conversation_id = ?
            ORDER BY created_at, rowid
            "#,
        )
        .bind(conversation_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(messages)
    }
}
