//! Messaging Module
//!
//! Request and response bodies for the HTTP API:
//!
//! - `user` - Registration, login and user listings
//! - `conversation` - Creating and listing conversations
//! - `message` - Sending and listing messages
//!
//! Request fields default to empty strings so that missing fields reach
//! handler validation (and its 400 response) instead of failing JSON
//! extraction.
//!
//! # Usage
//!
//! ```rust
//! use chatline::shared::messaging::{UserProfile, SendMessageRequest, ConversationSummary};
//! ```

pub mod user;
pub mod conversation;
pub mod message;

// Re-export all types
pub use user::{
    ContactEntry, ContactProfile, LoginRequest, LoginResponse, RegisterRequest, StatusMessage,
    UserProfile,
};
pub use conversation::{ConversationCreated, ConversationSummary, CreateConversationRequest};
pub use message::{MessageSent, MessageView, MessagesQuery, SendMessageRequest, NEW_CONVERSATION};
