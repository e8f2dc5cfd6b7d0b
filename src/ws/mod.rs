pub mod actor;
pub mod broadcast;
pub mod handler;

use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::mpsc;

/// Type alias for the sender half of a WebSocket connection's channel.
/// The broadcast path clones these to push messages to a specific client.
pub type ConnectionSender = mpsc::UnboundedSender<axum::extract::ws::Message>;

/// Process-unique identifier assigned to a connection for its lifetime.
pub type ConnectionId = u64;

/// Connection registry: tracks all active WebSocket connections.
///
/// Inserted by each connection's actor on registration, removed by the same
/// actor on close, and snapshotted by the broadcast loop for fan-out. Ids
/// come from an atomic counter, so the same connection can never be added
/// twice.
#[derive(Clone, Default)]
pub struct ConnectionRegistry {
    inner: Arc<DashMap<ConnectionId, ConnectionSender>>,
    next_id: Arc<AtomicU64>,
}

impl ConnectionRegistry {
    /// Create a new empty connection registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a connection. It becomes eligible for broadcasts immediately.
    pub fn add(&self, tx: ConnectionSender) -> ConnectionId {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.inner.insert(id, tx);
        id
    }

    /// Remove a connection. No-op if it was already removed. Safe to call
    /// while a broadcast is iterating a snapshot.
    pub fn remove(&self, id: ConnectionId) {
        self.inner.remove(&id);
    }

    /// Point-in-time copy of the current membership.
    pub fn snapshot(&self) -> Vec<ConnectionSender> {
        self.inner.iter().map(|entry| entry.value().clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}
