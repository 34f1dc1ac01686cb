/**
 * Delivery Router
 *
 * Decides which live connections see a message event and emits to exactly
 * those.
 *
 * # Routing
 *
 * 1. Resolve the sender and receiver connections from the registry
 * 2. Fetch the sender profile from the store
 * 3. Emit `messageDelivered` to the receiver (if live), then the sender (if live)
 *
 * Targets are resolved before the store call and are not checked again
 * afterwards. A target whose outbox has closed in the meantime is simply
 * not counted as delivered. Nobody online means no emission and no error.
 */
use std::sync::Arc;

use super::state::RealtimeState;
use crate::backend::error::{BackendError, BackendResult};
use crate::backend::store::Store;
use crate::shared::{ConnectionId, DeliveryPayload, MessageEvent, ServerEvent};

/// Outcome of routing one event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryReport {
    /// Connections the event was addressed to, receiver first
    pub targets: Vec<ConnectionId>,
    /// How many of them accepted it
    pub delivered: usize,
}

/// Connections to notify, receiver first, without duplicates
pub fn delivery_targets(
    sender: Option<ConnectionId>,
    receiver: Option<ConnectionId>,
) -> Vec<ConnectionId> {
    let mut targets = Vec::with_capacity(2);
    for connection in [receiver, sender].into_iter().flatten() {
        if !targets.contains(&connection) {
            targets.push(connection);
        }
    }
    targets
}

#[derive(Clone)]
pub struct DeliveryRouter {
    realtime: RealtimeState,
    store: Arc<dyn Store>,
}

impl DeliveryRouter {
    pub fn new(realtime: RealtimeState, store: Arc<dyn Store>) -> Self {
        Self { realtime, store }
    }

    /// Route a message event to whoever of sender and receiver is online
    ///
    /// # Errors
    ///
    /// * `NotFound` - the sender has no user record; nothing is emitted
    /// * `Store` - the profile lookup failed; nothing is emitted
    pub async fn route(&self, event: MessageEvent) -> BackendResult<DeliveryReport> {
        let sender = self.realtime.registry.lookup(&event.sender_id);
        let receiver = self.realtime.registry.lookup(&event.receiver_id);
        let targets = delivery_targets(sender, receiver);

        let profile = self
            .store
            .find_user_by_id(&event.sender_id)
            .await?
            .ok_or_else(|| BackendError::not_found("user", event.sender_id.clone()))?
            .profile();

        if targets.is_empty() {
            tracing::debug!(
                "[Delivery] Neither {} nor {} is online, nothing to emit",
                event.sender_id,
                event.receiver_id
            );
            return Ok(DeliveryReport { targets, delivered: 0 });
        }

        let payload = DeliveryPayload::new(event, profile);
        let delivered = targets
            .iter()
            .filter(|connection| {
                self.realtime
                    .hub
                    .emit_to(**connection, ServerEvent::MessageDelivered(payload.clone()))
            })
            .count();

        tracing::debug!(
            "[Delivery] Message from {} delivered to {}/{} connections",
            payload.sender_id,
            delivered,
            targets.len()
        );

        Ok(DeliveryReport { targets, delivered })
    }
}
