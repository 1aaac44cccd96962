use async_trait::async_trait;

use crate::domain::ChatMessage;

/// A hosted chat-completion endpoint.
///
/// Exactly one of `user_message` / `history` supplies the conversation
/// after the system message; `history` wins when both are given, and the
/// caller is responsible for trimming it to a bounded window.
#[async_trait]
pub trait ChatClient: Send + Sync {
    async fn chat(
        &self,
        system_prompt: &str,
        user_message: Option<&str>,
        history: Option<&[ChatMessage]>,
    ) -> Result<String, ChatClientError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ChatClientError {
    #[error("missing chat endpoint configuration: {0}")]
    Configuration(String),
    #[error("chat endpoint returned {status}: {body}")]
    Upstream { status: u16, body: String },
    #[error("chat endpoint returned no completion choices")]
    EmptyResponse,
    #[error("chat request failed: {0}")]
    Transport(String),
}
