use std::sync::Arc;

use crate::application::ports::{
    ChatClient, ChatClientError, ExtractionError, TextExtractor,
};
use crate::domain::Document;

use super::{AnalysisInput, PromptTemplate};

/// Runs one document-analysis capability end to end: extract text from the
/// upload, render the template's user message, call the chat endpoint.
pub struct AnalysisService {
    extractor: Arc<dyn TextExtractor>,
    chat_client: Arc<dyn ChatClient>,
}

impl AnalysisService {
    pub fn new(extractor: Arc<dyn TextExtractor>, chat_client: Arc<dyn ChatClient>) -> Self {
        Self {
            extractor,
            chat_client,
        }
    }

    pub async fn extract(
        &self,
        data: &[u8],
        filename: &str,
        media_type: &str,
    ) -> Result<String, ExtractionError> {
        let document = Document::new(
            filename.to_string(),
            media_type.to_string(),
            data.len() as u64,
        );
        self.extractor.extract_text(data, &document).await
    }

    #[tracing::instrument(skip(self, input), fields(template = template.key()))]
    pub async fn analyze(
        &self,
        template: PromptTemplate,
        input: AnalysisInput,
    ) -> Result<String, AnalysisError> {
        let user_message = template
            .build_user_message(&input)
            .ok_or_else(|| AnalysisError::InvalidInput(template.key().to_string()))?;

        if user_message.trim().is_empty() {
            return Err(AnalysisError::NoDocumentText);
        }

        let result = self
            .chat_client
            .chat(template.system_prompt(), Some(&user_message), None)
            .await?;

        tracing::info!(chars = result.len(), "Analysis completed");
        Ok(result)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("input does not match the shape expected by template '{0}'")]
    InvalidInput(String),
    #[error("no document text provided")]
    NoDocumentText,
    #[error(transparent)]
    Chat(#[from] ChatClientError),
}
