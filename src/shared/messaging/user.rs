//! User Data Structures
//!
//! Public user projections and the auth request/response bodies.

use serde::{Deserialize, Serialize};

/// Public profile of a user, safe to hand to any client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub full_name: String,
    pub email: String,
}

/// A user seen from someone else's contact list
///
/// Clients address messages to `receiverId`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactProfile {
    pub receiver_id: String,
    pub email: String,
    pub full_name: String,
}

impl From<UserProfile> for ContactProfile {
    fn from(profile: UserProfile) -> Self {
        Self {
            receiver_id: profile.id,
            email: profile.email,
            full_name: profile.full_name,
        }
    }
}

/// One row of `GET /api/users/{userId}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactEntry {
    pub user: ContactProfile,
}

/// Registration request
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RegisterRequest {
    pub full_name: String,
    pub email: String,
    /// Plain text; hashed before it reaches the store
    pub password: String,
}

/// Login request
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Login response: the profile and a fresh session token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub user: UserProfile,
    pub token: String,
}

/// Plain acknowledgement body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusMessage {
    pub message: String,
}

impl StatusMessage {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
