use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::{ChatMessage, Session};

/// Volatile store for chat sessions. Owned by the service layer and passed
/// explicitly through application state, never referenced as a global.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn get(&self, id: &str) -> Option<Session>;

    /// Replace the message list for `id`, creating the session when absent.
    /// An existing session keeps its original `created_at`.
    async fn upsert(&self, id: &str, messages: Vec<ChatMessage>) -> Session;

    /// Evict sessions past the retention window. Returns the eviction count.
    async fn sweep_expired(&self, now: DateTime<Utc>) -> usize;
}
