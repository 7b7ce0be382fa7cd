//! `dsage export` -- write a session transcript to stdout or a file.

use std::path::Path;

use datasage_types::chat::SessionId;

use crate::state::AppState;

/// Export the transcript for `session_id`.
///
/// An unknown session yields an empty transcript, mirroring the store's
/// empty-not-error contract; we surface that as a styled notice instead of
/// writing an empty file.
pub async fn export_session(
    state: &AppState,
    session_id: &str,
    output: Option<&Path>,
) -> anyhow::Result<()> {
    let sid = SessionId::from(session_id);
    let transcript = state.chat_service.export(&sid).await?;

    if transcript.is_empty() {
        eprintln!(
            "  {} no turns recorded for session '{}'",
            console::style("!").yellow().bold(),
            session_id
        );
        return Ok(());
    }

    match output {
        Some(path) => {
            tokio::fs::write(path, &transcript).await?;
            println!(
                "  {} transcript written to {}",
                console::style("✓").green(),
                console::style(path.display()).cyan()
            );
        }
        None => {
            println!("{transcript}");
        }
    }

    Ok(())
}
