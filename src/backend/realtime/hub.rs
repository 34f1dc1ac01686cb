/**
 * Connection Hub
 *
 * Table of live connection outboxes. Each socket task owns the receiving
 * half of an unbounded channel; everything else emits through the hub by
 * connection id.
 *
 * Emission never suspends. Sending to a connection whose socket task has
 * gone away returns `false` and is otherwise ignored.
 */
use std::collections::HashMap;

use parking_lot::Mutex;
use tokio::sync::mpsc;

use crate::shared::{ConnectionId, ServerEvent};

/// Receiving half handed to a socket task
pub type Outbox = mpsc::UnboundedReceiver<ServerEvent>;

#[derive(Debug, Default)]
pub struct ConnectionHub {
    outboxes: Mutex<HashMap<ConnectionId, mpsc::UnboundedSender<ServerEvent>>>,
}

impl ConnectionHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open an outbox for `connection_id`
    ///
    /// Attaching an id twice replaces the previous outbox.
    pub fn attach(&self, connection_id: ConnectionId) -> Outbox {
        let (tx, rx) = mpsc::unbounded_channel();
        self.outboxes.lock().insert(connection_id, tx);
        rx
    }

    pub fn detach(&self, connection_id: ConnectionId) -> bool {
        self.outboxes.lock().remove(&connection_id).is_some()
    }

    /// Queue `event` for one connection
    pub fn emit_to(&self, connection_id: ConnectionId, event: ServerEvent) -> bool {
        let outboxes = self.outboxes.lock();
        match outboxes.get(&connection_id) {
            Some(tx) => tx.send(event).is_ok(),
            None => false,
        }
    }

    /// Queue `event` for every connection, returning how many accepted it
    pub fn broadcast(&self, event: &ServerEvent) -> usize {
        let outboxes = self.outboxes.lock();
        outboxes
            .values()
            .filter(|tx| tx.send(event.clone()).is_ok())
            .count()
    }

    pub fn connection_count(&self) -> usize {
        self.outboxes.lock().len()
    }
}
