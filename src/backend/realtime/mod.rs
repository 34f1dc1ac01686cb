//! Real-time Module
//!
//! Presence tracking and live message delivery over WebSockets.
//!
//! # Architecture
//!
//! - **`presence`** - Which user is online on which connection
//! - **`hub`** - Outboxes of live connections, emit-to-one and broadcast
//! - **`state`** - Connection lifecycle tying registry and hub together
//! - **`delivery`** - Decides who receives a message event
//! - **`socket`** - The `/socket` endpoint and inbound event dispatch
//!
//! # Module Structure
//!
//! ```text
//! realtime/
//! ├── mod.rs          - Module exports and documentation
//! ├── presence.rs     - PresenceRegistry
//! ├── hub.rs          - ConnectionHub
//! ├── state.rs        - RealtimeState
//! ├── delivery.rs     - DeliveryRouter
//! └── socket.rs       - WebSocket handler
//! ```
//!
//! # Delivery Semantics
//!
//! Best effort only. A message for a user who is offline is not queued;
//! clients persist messages separately through `POST /api/message`.
//! Presence lives in memory and is lost on restart.

pub mod presence;

pub mod hub;

pub mod state;

pub mod delivery;

pub mod socket;

pub use delivery::{DeliveryReport, DeliveryRouter};
pub use hub::ConnectionHub;
pub use presence::PresenceRegistry;
pub use socket::handle_socket_upgrade;
pub use state::RealtimeState;
