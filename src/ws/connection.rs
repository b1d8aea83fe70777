//! WebSocket connection loop.
//!
//! Handles the read/write loop for a single observer connection:
//! hub frames flow out to the client (domain events encoded to their
//! wire strings, relays forwarded verbatim), and every text frame the
//! client sends is relayed to all other observers.

use axum::extract::ws::{Message, WebSocket};
use futures_util::{SinkExt, StreamExt};
use tokio::sync::broadcast;

use super::wire;
use crate::domain::{HubFrame, NotificationHub};

/// Runs the read/write loop for a single observer connection.
///
/// Registers with the hub on entry; dropping the receiver when the loop
/// exits unregisters the observer. Send failures terminate only this
/// connection and never affect the broadcast to others.
pub async fn run_connection(socket: WebSocket, hub: NotificationHub) {
    let observer = hub.register();
    let observer_id = observer.id;
    let mut frames = observer.frames;

    let (mut ws_tx, mut ws_rx) = socket.split();
    tracing::debug!(id = %observer_id, "observer connected");

    loop {
        tokio::select! {
            // Incoming message from this client
            msg = ws_rx.next() => {
                match msg {
                    Some(Ok(Message::Text(text))) => {
                        // Peer relay: the text is opaque to us.
                        let _ = hub.relay(observer_id, text.to_string());
                    }
                    Some(Ok(Message::Close(_))) | Some(Err(_)) | None => break,
                    // Binary and ping/pong frames are ignored.
                    _ => {}
                }
            }
            // Frame from the hub
            frame = frames.recv() => {
                match frame {
                    Ok(HubFrame::Event(event)) => {
                        if ws_tx.send(Message::text(wire::encode(&event))).await.is_err() {
                            break;
                        }
                    }
                    Ok(HubFrame::Relay { origin, text }) => {
                        // Never echo a relayed message back to its sender.
                        if origin != observer_id
                            && ws_tx.send(Message::text(text)).await.is_err()
                        {
                            break;
                        }
                    }
                    Err(broadcast::error::RecvError::Lagged(n)) => {
                        tracing::warn!(id = %observer_id, lagged = n, "observer lagged behind hub");
                    }
                    Err(broadcast::error::RecvError::Closed) => break,
                }
            }
        }
    }

    tracing::debug!(id = %observer_id, "observer disconnected");
}
