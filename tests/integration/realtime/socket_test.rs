//! Chat sockets over a real WebSocket connection

use axum_test::TestWebSocket;
use chatline::shared::{ClientEvent, ConnectionId, PresenceEntry, ServerEvent};
use pretty_assertions::assert_eq;

use crate::common::{spawn_socket_app, TestApp};

async fn open_socket(app: &TestApp) -> (ConnectionId, TestWebSocket) {
    let mut socket = app.server.get_websocket("/socket").await.into_websocket().await;
    match socket.receive_json::<ServerEvent>().await {
        ServerEvent::Connected { connection_id } => (connection_id, socket),
        other => panic!("Expected connected greeting, got {:?}", other),
    }
}

async fn register(socket: &mut TestWebSocket, user_id: &str) {
    socket
        .send_json(&ClientEvent::Register(user_id.to_string()))
        .await;
}

#[tokio::test]
async fn test_greeting_carries_distinct_connection_ids() {
    let app = spawn_socket_app().await;

    let (c1, _s1) = open_socket(&app).await;
    let (c2, _s2) = open_socket(&app).await;

    assert_ne!(c1, c2);
    assert_eq!(app.state.realtime.hub.connection_count(), 2);
}

#[tokio::test]
async fn test_register_and_close_over_socket() {
    let app = spawn_socket_app().await;
    let (c1, mut s1) = open_socket(&app).await;
    let (c2, mut s2) = open_socket(&app).await;

    register(&mut s1, "u1").await;
    let first = ServerEvent::PresenceSnapshot(vec![PresenceEntry::new("u1", c1)]);
    assert_eq!(s1.receive_json::<ServerEvent>().await, first);
    assert_eq!(s2.receive_json::<ServerEvent>().await, first);

    register(&mut s2, "u2").await;
    let both = ServerEvent::PresenceSnapshot(vec![
        PresenceEntry::new("u1", c1),
        PresenceEntry::new("u2", c2),
    ]);
    assert_eq!(s1.receive_json::<ServerEvent>().await, both);
    assert_eq!(s2.receive_json::<ServerEvent>().await, both);

    s1.close().await;

    assert_eq!(
        s2.receive_json::<ServerEvent>().await,
        ServerEvent::PresenceSnapshot(vec![PresenceEntry::new("u2", c2)])
    );
    assert_eq!(app.state.realtime.registry.lookup("u1"), None);
    assert_eq!(app.state.realtime.registry.lookup("u2"), Some(c2));
}

#[tokio::test]
async fn test_unparseable_frame_leaves_socket_usable() {
    let app = spawn_socket_app().await;
    let (c1, mut s1) = open_socket(&app).await;

    s1.send_text("not json").await;
    s1.send_text(r#"{"event":"unknown","data":1}"#).await;
    register(&mut s1, "u1").await;

    assert_eq!(
        s1.receive_json::<ServerEvent>().await,
        ServerEvent::PresenceSnapshot(vec![PresenceEntry::new("u1", c1)])
    );
}
