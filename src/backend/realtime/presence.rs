/**
 * Presence Registry
 *
 * Process-wide mapping from user ids to the live connection speaking for
 * them. Entries live only as long as their connection; nothing is
 * persisted.
 *
 * # Invariants
 *
 * - At most one entry per user id. The first registration wins and later
 *   attempts for the same user are ignored, whatever connection they come
 *   from.
 * - At most one entry per connection id. A connection keeps the first
 *   identity it registered.
 * - Snapshots list entries in registration order.
 *
 * All operations take the lock for a short synchronous section only.
 */
use parking_lot::Mutex;

use crate::shared::{ConnectionId, PresenceEntry};

/// Registry of online users
#[derive(Debug, Default)]
pub struct PresenceRegistry {
    entries: Mutex<Vec<PresenceEntry>>,
}

impl PresenceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `user_id` to `connection_id`
    ///
    /// Returns `true` if an entry was added, `false` if the user or the
    /// connection is already registered.
    pub fn register(&self, user_id: &str, connection_id: ConnectionId) -> bool {
        let mut entries = self.entries.lock();
        let taken = entries
            .iter()
            .any(|entry| entry.user_id == user_id || entry.connection_id == connection_id);
        if taken {
            tracing::debug!(
                "[Presence] Ignoring register of {} on {}: already present",
                user_id,
                connection_id
            );
            return false;
        }
        entries.push(PresenceEntry::new(user_id, connection_id));
        tracing::debug!("[Presence] {} online on {} ({} online)", user_id, connection_id, entries.len());
        true
    }

    /// Remove the entry bound to `connection_id`, if any
    pub fn unregister(&self, connection_id: ConnectionId) -> bool {
        let mut entries = self.entries.lock();
        let before = entries.len();
        entries.retain(|entry| entry.connection_id != connection_id);
        let removed = entries.len() != before;
        if removed {
            tracing::debug!("[Presence] {} offline ({} online)", connection_id, entries.len());
        }
        removed
    }

    /// Connection currently speaking for `user_id`
    pub fn lookup(&self, user_id: &str) -> Option<ConnectionId> {
        self.entries
            .lock()
            .iter()
            .find(|entry| entry.user_id == user_id)
            .map(|entry| entry.connection_id)
    }

    /// Copy of every entry in registration order
    pub fn snapshot(&self) -> Vec<PresenceEntry> {
        self.entries.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}
