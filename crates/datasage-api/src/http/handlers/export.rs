//! Transcript export endpoint.
//!
//! GET /api/v1/session/export
//!
//! Returns the current session's transcript as a plain-text attachment,
//! one `ROLE[timestamp]: content` paragraph per turn.

use axum::extract::State;
use axum::http::header;
use axum::response::{IntoResponse, Response};

use datasage_types::chat::SessionId;

use crate::http::error::AppError;
use crate::state::AppState;

/// Download filename for a session transcript.
fn export_filename(session_id: &SessionId) -> String {
    format!("chat_{session_id}.txt")
}

/// GET /api/v1/session/export -- download the transcript.
pub async fn export_transcript(State(state): State<AppState>) -> Result<Response, AppError> {
    let session_id = state.session.lock().await.current().clone();
    let transcript = state.chat_service.export(&session_id).await?;

    let disposition = format!("attachment; filename=\"{}\"", export_filename(&session_id));

    Ok((
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        transcript,
    )
        .into_response())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_filename() {
        let sid = SessionId::from("abc-123");
        assert_eq!(export_filename(&sid), "chat_abc-123.txt");
    }
}
