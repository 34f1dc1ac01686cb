//! Presence and live delivery against the full application state
//!
//! Connections are opened through `RealtimeState` directly; their outboxes
//! stand in for sockets.

use chatline::backend::realtime::hub::Outbox;
use chatline::backend::store::Store;
use chatline::shared::{ConnectionId, MessageEvent, PresenceEntry, ServerEvent};
use pretty_assertions::assert_eq;

use crate::common::{create_test_profile, spawn_app, TestApp};

fn open(app: &TestApp, user_id: &str) -> (ConnectionId, Outbox) {
    let (id, outbox) = app.state.realtime.connect();
    app.state.realtime.register_user(user_id, id);
    (id, outbox)
}

fn drain(outbox: &mut Outbox) -> Vec<ServerEvent> {
    let mut events = Vec::new();
    while let Ok(event) = outbox.try_recv() {
        events.push(event);
    }
    events
}

fn deliveries(outbox: &mut Outbox) -> usize {
    drain(outbox)
        .into_iter()
        .filter(|event| matches!(event, ServerEvent::MessageDelivered(_)))
        .count()
}

fn message(sender_id: &str, receiver_id: &str) -> MessageEvent {
    MessageEvent {
        sender_id: sender_id.to_string(),
        receiver_id: receiver_id.to_string(),
        message: "hello".to_string(),
        conversation_id: "new".to_string(),
    }
}

#[tokio::test]
async fn test_presence_snapshots_follow_register_and_disconnect() {
    let app = spawn_app().await;

    let (c1, mut o1) = open(&app, "u1");
    let (c2, mut o2) = open(&app, "u2");

    let events = drain(&mut o1);
    assert_eq!(events[0], ServerEvent::Connected { connection_id: c1 });
    assert_eq!(
        events.last(),
        Some(&ServerEvent::PresenceSnapshot(vec![
            PresenceEntry::new("u1", c1),
            PresenceEntry::new("u2", c2),
        ]))
    );
    drain(&mut o2);

    app.state.realtime.disconnect(c1);

    assert_eq!(
        drain(&mut o2),
        vec![ServerEvent::PresenceSnapshot(vec![PresenceEntry::new("u2", c2)])]
    );
    assert_eq!(app.state.realtime.registry.lookup("u1"), None);
}

#[tokio::test]
async fn test_second_connection_for_same_user_is_ignored() {
    let app = spawn_app().await;

    let (c1, _o1) = open(&app, "u1");
    let (_c2, mut o2) = open(&app, "u1");

    assert_eq!(app.state.realtime.registry.lookup("u1"), Some(c1));
    assert_eq!(
        drain(&mut o2).last(),
        Some(&ServerEvent::PresenceSnapshot(vec![PresenceEntry::new("u1", c1)]))
    );
}

#[tokio::test]
async fn test_both_online_receive_enriched_payload() {
    let app = spawn_app().await;
    let ada = create_test_profile(&app.server, "Ada", "ada@example.com").await;
    let bob = create_test_profile(&app.server, "Bob", "bob@example.com").await;
    let (_c1, mut o1) = open(&app, &ada.id);
    let (_c2, mut o2) = open(&app, &bob.id);
    drain(&mut o1);
    drain(&mut o2);

    let report = app.state.delivery().route(message(&ada.id, &bob.id)).await.unwrap();
    assert_eq!(report.delivered, 2);

    match drain(&mut o2).as_slice() {
        [ServerEvent::MessageDelivered(payload)] => {
            assert_eq!(payload.sender_profile, ada);
            assert_eq!(payload.receiver_id, bob.id);
        }
        other => panic!("Expected one delivery, got {:?}", other),
    }
    assert_eq!(deliveries(&mut o1), 1);
}

#[tokio::test]
async fn test_offline_receiver_only_echoes_to_sender() {
    let app = spawn_app().await;
    let ada = create_test_profile(&app.server, "Ada", "ada@example.com").await;
    let (_c1, mut o1) = open(&app, &ada.id);
    let (_c3, mut bystander) = open(&app, "u3");
    drain(&mut o1);
    drain(&mut bystander);

    let report = app.state.delivery().route(message(&ada.id, "u9")).await.unwrap();

    assert_eq!(report.targets.len(), 1);
    assert_eq!(deliveries(&mut o1), 1);
    assert_eq!(deliveries(&mut bystander), 0);
}

#[tokio::test]
async fn test_nobody_online_still_persists_over_http() {
    let app = spawn_app().await;
    let ada = create_test_profile(&app.server, "Ada", "ada@example.com").await;
    let bob = create_test_profile(&app.server, "Bob", "bob@example.com").await;

    let report = app.state.delivery().route(message(&ada.id, &bob.id)).await.unwrap();
    assert!(report.targets.is_empty());
    assert_eq!(report.delivered, 0);

    app.server
        .post("/api/message")
        .json(&serde_json::json!({
            "conversationId": "new",
            "senderId": ada.id,
            "receiverId": bob.id,
            "message": "hello"
        }))
        .await
        .assert_status_ok();

    let conversation = app
        .state
        .store
        .find_conversation_between(&ada.id, &bob.id)
        .await
        .unwrap()
        .unwrap();
    let stored = app
        .state
        .store
        .find_messages_for_conversation(&conversation.id)
        .await
        .unwrap();
    assert_eq!(stored.len(), 1);
}

#[tokio::test]
async fn test_unknown_sender_emits_nothing() {
    let app = spawn_app().await;
    let (_c1, mut o1) = open(&app, "ghost");
    let (_c2, mut o2) = open(&app, "u2");
    drain(&mut o1);
    drain(&mut o2);

    let result = app.state.delivery().route(message("ghost", "u2")).await;

    assert!(result.is_err());
    assert_eq!(deliveries(&mut o1), 0);
    assert_eq!(deliveries(&mut o2), 0);
}
