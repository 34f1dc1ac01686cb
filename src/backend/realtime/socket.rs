/**
 * Chat Socket Handler
 *
 * WebSocket endpoint at `GET /socket`. Each connection runs two tasks:
 *
 * - a writer that drains the connection's outbox into the socket
 * - the read loop, which parses JSON frames into `ClientEvent`s and
 *   dispatches each one to completion before reading the next
 *
 * When the read loop ends (close frame, transport error or EOF) the
 * connection leaves the hub and the presence registry, and everyone gets
 * the reduced snapshot.
 */
use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::Response,
};
use futures_util::{SinkExt, StreamExt};

use super::delivery::DeliveryRouter;
use super::state::RealtimeState;
use crate::backend::server::state::AppState;
use crate::shared::{ClientEvent, ConnectionId, MessageEvent};

/// Everything an event handler needs to know about its connection
#[derive(Clone)]
pub struct ConnectionContext {
    pub connection_id: ConnectionId,
    pub realtime: RealtimeState,
    pub delivery: DeliveryRouter,
}

/// Upgrade `GET /socket` to a chat socket
pub async fn handle_socket_upgrade(
    ws: WebSocketUpgrade,
    State(state): State<AppState>,
) -> Response {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

async fn handle_socket(socket: WebSocket, state: AppState) {
    let (connection_id, mut outbox) = state.realtime.connect();
    let ctx = ConnectionContext {
        connection_id,
        realtime: state.realtime.clone(),
        delivery: state.delivery(),
    };

    let (mut sink, mut stream) = socket.split();

    let writer = tokio::spawn(async move {
        while let Some(event) = outbox.recv().await {
            let json = match serde_json::to_string(&event) {
                Ok(json) => json,
                Err(e) => {
                    tracing::error!("[Socket] Failed to serialize {}: {}", event.kind(), e);
                    continue;
                }
            };
            if sink.send(Message::Text(json.into())).await.is_err() {
                break;
            }
        }
    });

    while let Some(frame) = stream.next().await {
        match frame {
            Ok(Message::Text(text)) => handle_frame(&ctx, text.as_str()).await,
            Ok(Message::Close(_)) => break,
            Ok(_) => {}
            Err(e) => {
                tracing::warn!("[Socket] Connection {} transport error: {}", connection_id, e);
                break;
            }
        }
    }

    ctx.realtime.disconnect(connection_id);
    writer.abort();
}

/// Parse one text frame and dispatch it
///
/// Frames that are not a known event are logged and dropped.
pub async fn handle_frame(ctx: &ConnectionContext, text: &str) {
    match serde_json::from_str::<ClientEvent>(text) {
        Ok(event) => dispatch(ctx, event).await,
        Err(e) => {
            tracing::warn!(
                "[Socket] Ignoring unparseable frame on {}: {}",
                ctx.connection_id,
                e
            );
        }
    }
}

pub async fn dispatch(ctx: &ConnectionContext, event: ClientEvent) {
    tracing::debug!("[Socket] {} on {}", event.kind(), ctx.connection_id);
    match event {
        ClientEvent::Register(user_id) => on_register(ctx, &user_id),
        ClientEvent::SendMessage(message) => on_send_message(ctx, message).await,
    }
}

fn on_register(ctx: &ConnectionContext, user_id: &str) {
    ctx.realtime.register_user(user_id, ctx.connection_id);
}

async fn on_send_message(ctx: &ConnectionContext, message: MessageEvent) {
    if let Err(e) = ctx.delivery.route(message).await {
        if e.is_server_error() {
            tracing::error!("[Socket] Delivery failed on {}: {}", ctx.connection_id, e);
        } else {
            tracing::warn!("[Socket] Delivery rejected on {}: {}", ctx.connection_id, e);
        }
    }
}
