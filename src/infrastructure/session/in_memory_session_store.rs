use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use crate::application::ports::SessionStore;
use crate::domain::{ChatMessage, Session};

pub const DEFAULT_MAX_AGE_DAYS: i64 = 90;
const SWEEP_INTERVAL: Duration = Duration::from_secs(3600);

/// Process-memory session store. Sessions expire a fixed number of days
/// after creation and are evicted by the periodic sweep; everything is lost
/// on restart.
pub struct InMemorySessionStore {
    sessions: RwLock<HashMap<String, Session>>,
    max_age: chrono::Duration,
}

impl InMemorySessionStore {
    pub fn new(max_age_days: i64) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            max_age: chrono::Duration::days(max_age_days),
        }
    }
}

impl Default for InMemorySessionStore {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_AGE_DAYS)
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn get(&self, id: &str) -> Option<Session> {
        self.sessions.read().await.get(id).cloned()
    }

    async fn upsert(&self, id: &str, messages: Vec<ChatMessage>) -> Session {
        let mut sessions = self.sessions.write().await;
        let session = sessions
            .entry(id.to_string())
            .or_insert_with(|| Session::new(id.to_string()));
        session.messages = messages;
        session.clone()
    }

    async fn sweep_expired(&self, now: DateTime<Utc>) -> usize {
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, s| now - s.created_at <= self.max_age);
        before - sessions.len()
    }
}

/// Spawn the hourly eviction sweep for `store`.
pub fn spawn_session_sweeper(store: Arc<InMemorySessionStore>) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(SWEEP_INTERVAL);
        interval.tick().await;
        loop {
            interval.tick().await;
            let evicted = store.sweep_expired(Utc::now()).await;
            if evicted > 0 {
                tracing::info!(evicted, "Expired chat sessions evicted");
            }
        }
    })
}
