//! Shared Module
//!
//! Types that cross the wire between the server and its clients. Everything
//! here is plain serde data with camelCase field names, the shape the chat
//! clients already speak.

/// Socket events, presence entries and delivery payloads
pub mod event;

/// HTTP bodies for auth, conversations and messages
pub mod messaging;

/// Re-export commonly used types for convenience
pub use event::{ClientEvent, ConnectionId, DeliveryPayload, MessageEvent, PresenceEntry, ServerEvent};
pub use messaging::UserProfile;
