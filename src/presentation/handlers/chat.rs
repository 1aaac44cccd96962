use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::infrastructure::observability::sanitize_for_log;
use crate::presentation::state::AppState;

use super::analyze::chat_client_error_response;

#[derive(Deserialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(default)]
    pub session_id: Option<String>,
}

#[derive(Serialize)]
pub struct ChatResponse {
    pub result: String,
    pub session_id: String,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[tracing::instrument(skip(state, request), fields(session_id = ?request.session_id))]
pub async fn chat_handler(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Response {
    if request.message.trim().is_empty() {
        tracing::warn!("Chat request with empty message");
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "Message is required".to_string(),
            }),
        )
            .into_response();
    }

    tracing::debug!(message = %sanitize_for_log(&request.message), "Processing chat turn");

    match state
        .chat_service
        .converse(request.session_id, request.message)
        .await
    {
        Ok(reply) => (
            StatusCode::OK,
            Json(ChatResponse {
                result: reply.result,
                session_id: reply.session_id,
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Chat turn failed");
            chat_client_error_response(&e)
        }
    }
}
