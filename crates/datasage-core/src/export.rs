//! Plain-text transcript rendering.
//!
//! One paragraph per turn, `ROLE[timestamp]: content`, separated by blank
//! lines, in chronological order.

use datasage_types::chat::ChatTurn;

/// Timestamp layout used in exported transcripts.
const EXPORT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Render a session's turns as a downloadable plain-text document.
pub fn render_transcript(turns: &[ChatTurn]) -> String {
    turns
        .iter()
        .map(|turn| {
            format!(
                "{}[{}]: {}",
                turn.role.to_string().to_uppercase(),
                turn.timestamp.format(EXPORT_TIMESTAMP_FORMAT),
                turn.content
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use datasage_types::chat::{SessionId, TurnRole};

    fn turn(id: i64, role: TurnRole, content: &str, secs: u32) -> ChatTurn {
        ChatTurn {
            id,
            session_id: SessionId::from("export-test"),
            role,
            content: content.to_string(),
            timestamp: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, secs).unwrap(),
        }
    }

    #[test]
    fn test_export_format_exact() {
        let turns = vec![
            turn(1, TurnRole::User, "Hi", 0),
            turn(2, TurnRole::Assistant, "Hello", 1),
        ];

        assert_eq!(
            render_transcript(&turns),
            "USER[2024-01-01 00:00:00]: Hi\n\nASSISTANT[2024-01-01 00:00:01]: Hello"
        );
    }

    #[test]
    fn test_export_empty_session() {
        assert_eq!(render_transcript(&[]), "");
    }

    #[test]
    fn test_export_preserves_code_fences() {
        let turns = vec![turn(
            1,
            TurnRole::Assistant,
            "Use:\n```python\nimport pandas as pd\n```",
            0,
        )];
        let out = render_transcript(&turns);
        assert!(out.contains("```python"));
        assert!(out.starts_with("ASSISTANT[2024-01-01 00:00:00]: Use:"));
    }
}
