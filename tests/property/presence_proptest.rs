//! Property-based tests for the presence registry
//!
//! Random register/unregister sequences are replayed against the registry
//! and checked against its invariants after every step.

use std::collections::HashSet;

use chatline::backend::realtime::PresenceRegistry;
use proptest::prelude::*;
use uuid::Uuid;

#[derive(Debug, Clone)]
enum Op {
    Register { user: usize, connection: usize },
    Unregister { connection: usize },
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0..4usize, 0..6usize).prop_map(|(user, connection)| Op::Register { user, connection }),
        (0..6usize).prop_map(|connection| Op::Unregister { connection }),
    ]
}

proptest! {
    #[test]
    fn test_at_most_one_entry_per_user_and_connection(ops in prop::collection::vec(op(), 0..40)) {
        let registry = PresenceRegistry::new();
        let connections: Vec<Uuid> = (0..6).map(|_| Uuid::new_v4()).collect();

        for op in ops {
            match op {
                Op::Register { user, connection } => {
                    registry.register(&format!("u{}", user), connections[connection]);
                }
                Op::Unregister { connection } => {
                    registry.unregister(connections[connection]);
                }
            }

            let snapshot = registry.snapshot();
            let users: HashSet<_> = snapshot.iter().map(|e| e.user_id.clone()).collect();
            let conns: HashSet<_> = snapshot.iter().map(|e| e.connection_id).collect();
            prop_assert_eq!(users.len(), snapshot.len());
            prop_assert_eq!(conns.len(), snapshot.len());
        }
    }

    #[test]
    fn test_lookup_stable_until_unregister(
        first in 0..6usize,
        others in prop::collection::vec(0..6usize, 0..10),
    ) {
        let registry = PresenceRegistry::new();
        let connections: Vec<Uuid> = (0..6).map(|_| Uuid::new_v4()).collect();

        prop_assert!(registry.register("u1", connections[first]));
        for other in others {
            registry.register("u1", connections[other]);
            prop_assert_eq!(registry.lookup("u1"), Some(connections[first]));
        }

        prop_assert!(registry.unregister(connections[first]));
        prop_assert_eq!(registry.lookup("u1"), None);
    }

    #[test]
    fn test_unregister_removes_exactly_one_entry(count in 1..8usize, victim in 0..8usize) {
        let victim = victim % count;
        let registry = PresenceRegistry::new();
        let connections: Vec<Uuid> = (0..count).map(|_| Uuid::new_v4()).collect();
        for (i, connection) in connections.iter().enumerate() {
            registry.register(&format!("u{}", i), *connection);
        }

        registry.unregister(connections[victim]);

        let remaining: Vec<_> = registry.snapshot().into_iter().map(|e| e.connection_id).collect();
        let expected: Vec<_> = connections
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != victim)
            .map(|(_, c)| *c)
            .collect();
        prop_assert_eq!(remaining, expected);
    }
}
