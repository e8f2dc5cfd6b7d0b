use axum::extract::ws::Message;

use super::ConnectionRegistry;
use crate::protocol::Update;

/// Broadcast an update to all connected clients.
///
/// Fan-out is best-effort over a point-in-time snapshot: each send is a
/// non-blocking push into that connection's own outbound queue, so a dead or
/// slow client can neither fail nor delay delivery to its siblings. A failed
/// send means the writer task has already exited; the connection's actor
/// removes it from the registry on its own.
pub fn broadcast_to_all(registry: &ConnectionRegistry, update: &Update) {
    let text = match serde_json::to_string(update) {
        Ok(text) => text,
        Err(_) => return,
    };
    let msg = Message::Text(text.into());

    for sender in registry.snapshot() {
        let _ = sender.send(msg.clone());
    }
}
