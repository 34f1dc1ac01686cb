//! Messaging Module
//!
//! This module handles conversations, stored messages and the contact list.

pub mod handlers;

pub use handlers::*;
