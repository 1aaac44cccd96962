use std::collections::HashMap;

use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::application::ports::ChatClientError;
use crate::application::services::{AnalysisError, AnalysisInput, InputShape, PromptTemplate};
use crate::infrastructure::observability::sanitize_for_log;
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct AnalyzeResponse {
    pub result: String,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
        .into_response()
}

struct UploadedFile {
    filename: String,
    media_type: String,
    data: Vec<u8>,
}

#[derive(Default)]
struct CollectedFields {
    files: HashMap<String, UploadedFile>,
    texts: HashMap<String, String>,
}

impl CollectedFields {
    async fn read(multipart: &mut Multipart) -> Result<Self, String> {
        let mut collected = Self::default();

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| format!("Failed to read multipart: {}", e))?
        {
            let name = field.name().unwrap_or_default().to_string();

            if let Some(filename) = field.file_name() {
                let filename = filename.to_string();
                let media_type = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| format!("Failed to read file: {}", e))?;
                collected.files.insert(
                    name,
                    UploadedFile {
                        filename,
                        media_type,
                        data: data.to_vec(),
                    },
                );
            } else {
                let value = field
                    .text()
                    .await
                    .map_err(|e| format!("Failed to read field: {}", e))?;
                collected.texts.insert(name, value);
            }
        }

        Ok(collected)
    }

    fn text(&self, key: &str) -> Option<String> {
        self.texts
            .get(key)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }
}

/// Resolve a document slot: an uploaded file wins over a pasted text field.
async fn resolve_document(
    state: &AppState,
    fields: &CollectedFields,
    file_key: &str,
    text_key: &str,
) -> Result<Option<String>, Response> {
    if let Some(file) = fields.files.get(file_key) {
        let text = state
            .analysis_service
            .extract(&file.data, &file.filename, &file.media_type)
            .await
            .map_err(|e| error_response(StatusCode::BAD_REQUEST, e.to_string()))?;
        return Ok(Some(text));
    }
    Ok(fields.text(text_key))
}

#[tracing::instrument(skip(state, multipart), fields(template = %template_key))]
pub async fn analyze_handler(
    State(state): State<AppState>,
    Path(template_key): Path<String>,
    mut multipart: Multipart,
) -> Response {
    let template = match PromptTemplate::from_key(&template_key) {
        Some(t) => t,
        None => {
            tracing::warn!("Unknown prompt template requested");
            return error_response(
                StatusCode::NOT_FOUND,
                format!("Unknown analysis template: {}", template_key),
            );
        }
    };

    if template.input_shape() == InputShape::Conversational {
        return error_response(
            StatusCode::BAD_REQUEST,
            "Use /api/chat for conversational sessions",
        );
    }

    let fields = match CollectedFields::read(&mut multipart).await {
        Ok(f) => f,
        Err(e) => {
            tracing::error!(error = %e, "Failed to read request body");
            return error_response(StatusCode::BAD_REQUEST, e);
        }
    };

    let input = match build_input(&state, template, &fields).await {
        Ok(input) => input,
        Err(response) => return response,
    };

    match state.analysis_service.analyze(template, input).await {
        Ok(result) => {
            tracing::debug!(preview = %sanitize_for_log(&result), "Analysis result returned");
            (StatusCode::OK, Json(AnalyzeResponse { result })).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Analysis failed");
            analysis_error_response(e)
        }
    }
}

async fn build_input(
    state: &AppState,
    template: PromptTemplate,
    fields: &CollectedFields,
) -> Result<AnalysisInput, Response> {
    match template.input_shape() {
        InputShape::SingleDocument | InputShape::DocumentWithCompanion => {
            let text = resolve_document(state, fields, "file", "text")
                .await?
                .ok_or_else(|| {
                    error_response(StatusCode::BAD_REQUEST, "No document text provided")
                })?;
            let companion = if template.input_shape() == InputShape::DocumentWithCompanion {
                resolve_document(state, fields, "companion", "companion_text").await?
            } else {
                None
            };
            Ok(AnalysisInput::Document { text, companion })
        }
        InputShape::DocumentPair => {
            let document_a = resolve_document(state, fields, "file_a", "document_a").await?;
            let document_b = resolve_document(state, fields, "file_b", "document_b").await?;
            match (document_a, document_b) {
                (Some(document_a), Some(document_b)) => Ok(AnalysisInput::DocumentPair {
                    document_a,
                    document_b,
                }),
                _ => Err(error_response(
                    StatusCode::BAD_REQUEST,
                    "Two documents are required",
                )),
            }
        }
        InputShape::Drafting => {
            let document_type = fields.text("document_type");
            let details = fields.text("details");
            match (document_type, details) {
                (Some(document_type), Some(details)) => Ok(AnalysisInput::Drafting {
                    document_type,
                    jurisdiction: fields.text("jurisdiction"),
                    parties: fields.text("parties"),
                    details,
                }),
                _ => Err(error_response(
                    StatusCode::BAD_REQUEST,
                    "Document type and details are required",
                )),
            }
        }
        InputShape::Compliance => {
            let text = resolve_document(state, fields, "file", "text")
                .await?
                .ok_or_else(|| {
                    error_response(StatusCode::BAD_REQUEST, "No document text provided")
                })?;
            Ok(AnalysisInput::Compliance {
                text,
                jurisdiction: fields.text("jurisdiction"),
                regulations: fields.text("regulations"),
            })
        }
        InputShape::Conversational => Err(error_response(
            StatusCode::BAD_REQUEST,
            "Use /api/chat for conversational sessions",
        )),
    }
}

pub(super) fn chat_client_error_response(e: &ChatClientError) -> Response {
    match e {
        ChatClientError::Configuration(msg) => error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Service is not configured: {}", msg),
        ),
        ChatClientError::Upstream { status, body } => error_response(
            StatusCode::BAD_GATEWAY,
            format!("Chat endpoint error ({}): {}", status, body),
        ),
        ChatClientError::EmptyResponse => {
            error_response(StatusCode::BAD_GATEWAY, "Chat endpoint returned no content")
        }
        ChatClientError::Transport(msg) => error_response(
            StatusCode::BAD_GATEWAY,
            format!("Chat endpoint unreachable: {}", msg),
        ),
    }
}

fn analysis_error_response(e: AnalysisError) -> Response {
    match e {
        AnalysisError::InvalidInput(_) | AnalysisError::NoDocumentText => {
            error_response(StatusCode::BAD_REQUEST, e.to_string())
        }
        AnalysisError::Chat(chat_error) => chat_client_error_response(&chat_error),
    }
}
