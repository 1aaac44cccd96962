use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::application::ports::{ChatClient, ChatClientError};
use crate::domain::ChatMessage;
use crate::presentation::config::AzureOpenAiSettings;

use super::SamplingPolicy;

pub const API_VERSION: &str = "2025-01-01-preview";
pub const MAX_COMPLETION_TOKENS: u32 = 4096;

const REJECTION_MARKERS: [&str; 3] = ["unsupported parameter", "not supported", "does not support"];

/// Build the outgoing conversation: the system message first, then the full
/// history verbatim when present and non-empty, otherwise a single user
/// message. History wins when both are supplied.
pub fn assemble_conversation(
    system_prompt: &str,
    user_message: Option<&str>,
    history: Option<&[ChatMessage]>,
) -> Vec<ChatMessage> {
    let mut messages = vec![ChatMessage::system(system_prompt)];

    match history {
        Some(history) if !history.is_empty() => messages.extend_from_slice(history),
        _ => {
            if let Some(user_message) = user_message {
                messages.push(ChatMessage::user(user_message));
            }
        }
    }

    messages
}

/// Does the error body say this named parameter is not supported?
/// Case-insensitive; the exact phrasing varies across model families.
pub fn parameter_rejected(error_body: &str, parameter: &str) -> bool {
    let body = error_body.to_lowercase();
    body.contains(parameter) && REJECTION_MARKERS.iter().any(|m| body.contains(m))
}

#[derive(Serialize)]
struct ChatRequestBody {
    messages: Vec<ChatMessage>,
    max_completion_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    top_p: Option<f32>,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<CompletionChoice>,
}

#[derive(Deserialize)]
struct CompletionChoice {
    message: CompletionMessage,
}

#[derive(Deserialize)]
struct CompletionMessage {
    #[serde(default)]
    content: String,
}

struct Connection {
    url: String,
    api_key: String,
    deployment: String,
}

/// Azure OpenAI chat-completions client.
///
/// Rather than maintaining an exhaustive compatibility table, the first
/// request acts as a probe: when the endpoint rejects it because a sampling
/// parameter is unsupported, the flagged parameter is stripped and the
/// request resent exactly once. The second outcome is final.
pub struct AzureChatClient {
    client: reqwest::Client,
    settings: AzureOpenAiSettings,
    sampling: SamplingPolicy,
}

impl AzureChatClient {
    pub fn new(settings: AzureOpenAiSettings) -> Result<Self, ChatClientError> {
        let sampling = SamplingPolicy::new(
            settings.disable_sampling,
            &settings.sampling_deny_patterns,
        )?;
        Ok(Self {
            client: reqwest::Client::new(),
            settings,
            sampling,
        })
    }

    /// Resolve connection settings, failing before any network call when a
    /// required value is missing.
    fn connection(&self) -> Result<Connection, ChatClientError> {
        let endpoint = self
            .settings
            .endpoint
            .as_deref()
            .filter(|s| !s.is_empty())
            .ok_or_else(|| ChatClientError::Configuration("endpoint URL is not set".to_string()))?;
        let deployment = self
            .settings
            .deployment
            .as_deref()
            .filter(|s| !s.is_empty())
            .ok_or_else(|| {
                ChatClientError::Configuration("deployment name is not set".to_string())
            })?;
        let api_key = self
            .settings
            .api_key
            .as_deref()
            .filter(|s| !s.is_empty())
            .ok_or_else(|| ChatClientError::Configuration("API key is not set".to_string()))?;

        let url = format!(
            "{}/openai/deployments/{}/chat/completions?api-version={}",
            endpoint.trim_end_matches('/'),
            deployment,
            API_VERSION,
        );

        Ok(Connection {
            url,
            api_key: api_key.to_string(),
            deployment: deployment.to_string(),
        })
    }

    async fn send(
        &self,
        connection: &Connection,
        body: &ChatRequestBody,
    ) -> Result<reqwest::Response, ChatClientError> {
        self.client
            .post(&connection.url)
            .header("api-key", &connection.api_key)
            .json(body)
            .send()
            .await
            .map_err(|e| ChatClientError::Transport(e.to_string()))
    }

    async fn parse_reply(response: reqwest::Response) -> Result<String, ChatClientError> {
        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| ChatClientError::Transport(format!("parse response: {e}")))?;

        completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or(ChatClientError::EmptyResponse)
    }
}

#[async_trait]
impl ChatClient for AzureChatClient {
    #[tracing::instrument(skip(self, system_prompt, user_message, history))]
    async fn chat(
        &self,
        system_prompt: &str,
        user_message: Option<&str>,
        history: Option<&[ChatMessage]>,
    ) -> Result<String, ChatClientError> {
        let connection = self.connection()?;

        let mut body = ChatRequestBody {
            messages: assemble_conversation(system_prompt, user_message, history),
            max_completion_tokens: MAX_COMPLETION_TOKENS,
            temperature: None,
            top_p: None,
        };

        if self.sampling.allows(&connection.deployment) {
            body.temperature = Some(self.settings.temperature);
            body.top_p = Some(self.settings.top_p);
        }

        let response = self.send(&connection, &body).await?;
        if response.status().is_success() {
            return Self::parse_reply(response).await;
        }

        let status = response.status().as_u16();
        let error_body = response
            .text()
            .await
            .unwrap_or_else(|_| "unknown error".to_string());

        let mut retry = false;
        if body.temperature.is_some() && parameter_rejected(&error_body, "temperature") {
            body.temperature = None;
            retry = true;
        }
        if body.top_p.is_some() && parameter_rejected(&error_body, "top_p") {
            body.top_p = None;
            retry = true;
        }

        if !retry {
            return Err(ChatClientError::Upstream {
                status,
                body: error_body,
            });
        }

        tracing::warn!(
            status,
            deployment = %connection.deployment,
            "Sampling parameters rejected by deployment, retrying without them"
        );

        let response = self.send(&connection, &body).await?;
        if response.status().is_success() {
            Self::parse_reply(response).await
        } else {
            let status = response.status().as_u16();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            Err(ChatClientError::Upstream { status, body })
        }
    }
}
