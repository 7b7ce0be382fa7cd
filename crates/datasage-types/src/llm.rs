//! Prompt shapes for the hosted completion endpoint.
//!
//! A [`ChatPrompt`] is the fully assembled input for one completion call:
//! the fixed system instruction (carried out-of-band, the way the upstream
//! API expects it), followed by the conversation messages in order, with
//! the new user utterance last.

use serde::{Deserialize, Serialize};

use crate::chat::TurnRole;

/// A single message in a completion conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: TurnRole,
    pub content: String,
}

impl Message {
    pub fn new(role: TurnRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }
}

/// Fully assembled prompt for one completion request.
///
/// `messages` holds the history in chronological order with the new user
/// message as the final element. The assembler guarantees this shape; the
/// provider transports it verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatPrompt {
    pub system: String,
    pub messages: Vec<Message>,
}

impl ChatPrompt {
    /// The final message of the prompt -- the new user utterance.
    pub fn last_user_message(&self) -> Option<&Message> {
        self.messages.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_serde() {
        let msg = Message::new(TurnRole::User, "Explain gradient descent");
        let json = serde_json::to_string(&msg).unwrap();
        assert!(json.contains("\"role\":\"user\""));
        let parsed: Message = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, msg);
    }

    #[test]
    fn test_last_user_message() {
        let prompt = ChatPrompt {
            system: "tutor".to_string(),
            messages: vec![
                Message::new(TurnRole::User, "hi"),
                Message::new(TurnRole::Assistant, "hello"),
                Message::new(TurnRole::User, "what is SQL?"),
            ],
        };
        assert_eq!(prompt.last_user_message().unwrap().content, "what is SQL?");
    }

    #[test]
    fn test_last_user_message_empty() {
        let prompt = ChatPrompt {
            system: "tutor".to_string(),
            messages: vec![],
        };
        assert!(prompt.last_user_message().is_none());
    }
}
