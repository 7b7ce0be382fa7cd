//! Chat submission endpoint.
//!
//! POST /api/v1/chat
//!
//! Runs one submission through the full pipeline: record user turn, load
//! history, assemble prompt, call the completion endpoint, record the
//! assistant turn. The session lock is held across the pipeline so only
//! one submission is in flight per interaction context.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use serde::{Deserialize, Serialize};

use datasage_core::service::Submission;
use datasage_types::chat::{ChatTurn, SessionId};

use crate::http::error::AppError;
use crate::state::AppState;

/// Request body for the chat endpoint.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    /// The user utterance. Empty or whitespace-only input is a no-op.
    pub message: String,
}

/// Response body for the chat endpoint.
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ChatResponse {
    /// Nothing was stored and nothing was sent upstream.
    Ignored,
    /// The persisted exchange.
    Answered {
        session_id: SessionId,
        user: ChatTurn,
        assistant: ChatTurn,
    },
}

/// POST /api/v1/chat -- submit one user utterance.
pub async fn submit_chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    let Json(body) = payload.map_err(|e| AppError::Validation(e.body_text()))?;

    // Guard held until the reply is persisted: single in-flight submission
    // per interaction context.
    let session = state.session.lock().await;
    let session_id = session.current().clone();

    let outcome = state.chat_service.submit(&session_id, &body.message).await?;

    let response = match outcome {
        Submission::Ignored => ChatResponse::Ignored,
        Submission::Answered { user, assistant } => ChatResponse::Answered {
            session_id,
            user,
            assistant,
        },
    };

    Ok(Json(response))
}
