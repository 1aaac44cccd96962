use chrono::{DateTime, Utc};

use super::ChatMessage;

/// A chat session: an opaque id plus the full message history, kept in
/// process memory only and lost on restart.
#[derive(Debug, Clone)]
pub struct Session {
    pub id: String,
    pub messages: Vec<ChatMessage>,
    pub created_at: DateTime<Utc>,
}

impl Session {
    pub fn new(id: String) -> Self {
        Self {
            id,
            messages: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// The trailing window of messages sent to the model as history.
    pub fn recent_messages(&self, window: usize) -> &[ChatMessage] {
        let start = self.messages.len().saturating_sub(window);
        &self.messages[start..]
    }
}
