/**
 * Socket Event Types
 *
 * This module defines everything that travels over the chat socket. Frames
 * are JSON text with an `{"event": ..., "data": ...}` envelope:
 *
 * - inbound `register` carries the user id a connection speaks for
 * - inbound `sendMessage` carries a `MessageEvent`
 * - outbound `connected` tells a fresh socket its own connection id
 * - outbound `presenceSnapshot` is the full presence list, sent to everyone
 * - outbound `messageDelivered` is a `DeliveryPayload`
 */
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::messaging::UserProfile;

/// Opaque identity of one live socket session
pub type ConnectionId = Uuid;

/// One user bound to one live connection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresenceEntry {
    pub user_id: String,
    pub connection_id: ConnectionId,
}

impl PresenceEntry {
    pub fn new(user_id: impl Into<String>, connection_id: ConnectionId) -> Self {
        Self {
            user_id: user_id.into(),
            connection_id,
        }
    }
}

/// A message a client asks the server to deliver live
///
/// Never stored as-is; persistence goes through `POST /api/message`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageEvent {
    pub sender_id: String,
    #[serde(default)]
    pub receiver_id: String,
    pub message: String,
    #[serde(default)]
    pub conversation_id: String,
}

/// What connections receive for a delivered message
///
/// The sender profile is serialized under `user`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryPayload {
    pub sender_id: String,
    pub message: String,
    pub conversation_id: String,
    pub receiver_id: String,
    #[serde(rename = "user")]
    pub sender_profile: UserProfile,
}

impl DeliveryPayload {
    /// Enrich a message event with its sender's profile
    pub fn new(event: MessageEvent, sender_profile: UserProfile) -> Self {
        Self {
            sender_id: event.sender_id,
            message: event.message,
            conversation_id: event.conversation_id,
            receiver_id: event.receiver_id,
            sender_profile,
        }
    }
}

/// Events a client sends over the socket
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "camelCase")]
pub enum ClientEvent {
    /// Bind this connection to a user id
    Register(String),
    /// Deliver a message to whoever is online
    SendMessage(MessageEvent),
}

impl ClientEvent {
    /// Wire name of the event, for logging
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Register(_) => "register",
            Self::SendMessage(_) => "sendMessage",
        }
    }
}

/// Events the server pushes to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "camelCase")]
pub enum ServerEvent {
    /// First frame on every socket
    Connected {
        #[serde(rename = "connectionId")]
        connection_id: ConnectionId,
    },
    /// Full presence list in registration order
    PresenceSnapshot(Vec<PresenceEntry>),
    /// A live message
    MessageDelivered(DeliveryPayload),
}

impl ServerEvent {
    /// Wire name of the event, for logging
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Connected { .. } => "connected",
            Self::PresenceSnapshot(_) => "presenceSnapshot",
            Self::MessageDelivered(_) => "messageDelivered",
        }
    }
}
