//! Session endpoints: current id, reset, history replay.
//!
//! Endpoints:
//! - GET  /api/v1/session          - Current session identifier
//! - POST /api/v1/session/reset    - Replace the identifier ("new chat")
//! - GET  /api/v1/session/history  - Ordered turns for on-screen replay

use axum::Json;
use axum::extract::State;
use serde::Serialize;

use datasage_types::chat::{ChatTurn, SessionId};

use crate::http::error::AppError;
use crate::state::AppState;

/// Response carrying a session identifier.
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub session_id: SessionId,
}

/// GET /api/v1/session -- the active session identifier.
pub async fn current_session(State(state): State<AppState>) -> Json<SessionResponse> {
    let session = state.session.lock().await;
    Json(SessionResponse {
        session_id: session.current().clone(),
    })
}

/// POST /api/v1/session/reset -- start a new chat.
///
/// Prior turns stay in the store under the old identifier; they are simply
/// no longer reachable through the page.
pub async fn reset_session(State(state): State<AppState>) -> Json<SessionResponse> {
    let mut session = state.session.lock().await;
    let session_id = session.reset();
    tracing::info!(session_id = %session_id, "session reset");
    Json(SessionResponse { session_id })
}

/// GET /api/v1/session/history -- ordered turns for replay.
pub async fn session_history(
    State(state): State<AppState>,
) -> Result<Json<Vec<ChatTurn>>, AppError> {
    let session_id = state.session.lock().await.current().clone();
    let turns = state.chat_service.history(&session_id).await?;
    Ok(Json(turns))
}
