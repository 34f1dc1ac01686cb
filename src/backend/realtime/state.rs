/**
 * Realtime State
 *
 * Presence registry and connection hub, shared through `AppState`. The
 * methods here are the connection lifecycle: connect, register and
 * disconnect. Every register attempt and every disconnect broadcasts the
 * full presence snapshot to all connections.
 *
 * A presence change and the broadcast of the snapshot taken after it run
 * under one lifecycle lock. Snapshots reach every outbox in change order.
 * The lock is synchronous and never held across an `.await`.
 */
use std::sync::Arc;

use parking_lot::Mutex;
use uuid::Uuid;

use super::hub::{ConnectionHub, Outbox};
use super::presence::PresenceRegistry;
use crate::shared::{ConnectionId, ServerEvent};

#[derive(Debug, Clone, Default)]
pub struct RealtimeState {
    pub registry: Arc<PresenceRegistry>,
    pub hub: Arc<ConnectionHub>,
    lifecycle: Arc<Mutex<()>>,
}

impl RealtimeState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a connection id and its outbox
    ///
    /// The outbox already holds the `connected` greeting.
    pub fn connect(&self) -> (ConnectionId, Outbox) {
        let connection_id = Uuid::new_v4();
        let outbox = self.hub.attach(connection_id);
        self.hub
            .emit_to(connection_id, ServerEvent::Connected { connection_id });
        tracing::info!(
            "[Realtime] Connection {} opened ({} connected)",
            connection_id,
            self.hub.connection_count()
        );
        (connection_id, outbox)
    }

    /// Register `user_id` on `connection_id` and broadcast presence
    pub fn register_user(&self, user_id: &str, connection_id: ConnectionId) -> bool {
        let _lifecycle = self.lifecycle.lock();
        let added = self.registry.register(user_id, connection_id);
        if added {
            tracing::info!("[Realtime] User {} registered on {}", user_id, connection_id);
        }
        self.broadcast_presence();
        added
    }

    /// Drop every trace of `connection_id` and broadcast presence
    pub fn disconnect(&self, connection_id: ConnectionId) {
        let _lifecycle = self.lifecycle.lock();
        self.hub.detach(connection_id);
        self.registry.unregister(connection_id);
        tracing::info!(
            "[Realtime] Connection {} closed ({} connected)",
            connection_id,
            self.hub.connection_count()
        );
        self.broadcast_presence();
    }

    /// Caller holds the lifecycle lock
    fn broadcast_presence(&self) {
        let snapshot = self.registry.snapshot();
        let online = snapshot.len();
        let reached = self.hub.broadcast(&ServerEvent::PresenceSnapshot(snapshot));
        tracing::debug!("[Realtime] Presence snapshot ({} online) sent to {} connections", online, reached);
    }
}
