use std::sync::Arc;

use uuid::Uuid;

use crate::application::ports::{ChatClient, ChatClientError, SessionStore};
use crate::domain::ChatMessage;

use super::PromptTemplate;

/// Number of trailing session messages sent to the model as history.
pub const HISTORY_WINDOW: usize = 20;

pub struct ChatReply {
    pub result: String,
    pub session_id: String,
}

/// Multi-turn legal Q&A over an in-memory session store.
///
/// Concurrent calls on the same session id can interleave; acceptable for
/// the single-user-at-a-time usage this service targets.
pub struct ChatService {
    chat_client: Arc<dyn ChatClient>,
    session_store: Arc<dyn SessionStore>,
}

impl ChatService {
    pub fn new(chat_client: Arc<dyn ChatClient>, session_store: Arc<dyn SessionStore>) -> Self {
        Self {
            chat_client,
            session_store,
        }
    }

    #[tracing::instrument(skip(self, message), fields(session_id = tracing::field::Empty))]
    pub async fn converse(
        &self,
        session_id: Option<String>,
        message: String,
    ) -> Result<ChatReply, ChatClientError> {
        let sid = session_id.unwrap_or_else(|| Uuid::new_v4().to_string());
        tracing::Span::current().record("session_id", sid.as_str());

        let mut messages = self
            .session_store
            .get(&sid)
            .await
            .map(|s| s.messages)
            .unwrap_or_default();
        messages.push(ChatMessage::user(message));
        let session = self.session_store.upsert(&sid, messages).await;

        let recent = session.recent_messages(HISTORY_WINDOW).to_vec();
        let result = self
            .chat_client
            .chat(
                PromptTemplate::Chat.system_prompt(),
                None,
                Some(recent.as_slice()),
            )
            .await?;

        let mut messages = session.messages;
        messages.push(ChatMessage::assistant(result.clone()));
        self.session_store.upsert(&sid, messages).await;

        Ok(ChatReply {
            result,
            session_id: sid,
        })
    }
}
