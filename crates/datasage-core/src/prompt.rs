//! Prompt assembly for the tutor persona.
//!
//! Deterministically produces a three-part prompt: the fixed system
//! instruction, the history in chronological order, and the new user
//! message as the final turn. History entries are never mutated.

use datasage_types::chat::TurnRole;
use datasage_types::llm::{ChatPrompt, Message};

/// The fixed tutor persona. Topic restriction is enforced only via this
/// instruction text, not by any component in the pipeline.
pub const SYSTEM_INSTRUCTION: &str = "You are an AI assistant specialized in Data Science tutoring. \
You will only answer questions related to Data Science. \
Provide code examples with proper syntax highlighting when relevant. \
If asked anything outside this topic, politely decline and request a Data Science-related question.";

/// Composes the system instruction, history, and new user utterance into
/// one [`ChatPrompt`].
pub struct PromptAssembler;

impl PromptAssembler {
    /// Build the prompt: system instruction carried out-of-band, history in
    /// order, new user message appended last.
    pub fn build(
        system_instruction: &str,
        history: Vec<Message>,
        user_message: &str,
    ) -> ChatPrompt {
        let mut messages = history;
        messages.push(Message::new(TurnRole::User, user_message));

        ChatPrompt {
            system: system_instruction.to_string(),
            messages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_first_user_last() {
        let history = vec![
            Message::new(TurnRole::User, "What is pandas?"),
            Message::new(TurnRole::Assistant, "A dataframe library."),
        ];
        let prompt = PromptAssembler::build(SYSTEM_INSTRUCTION, history, "Show an example");

        assert_eq!(prompt.system, SYSTEM_INSTRUCTION);
        assert_eq!(prompt.messages.len(), 3);
        let last = prompt.last_user_message().unwrap();
        assert_eq!(last.role, TurnRole::User);
        assert_eq!(last.content, "Show an example");
    }

    #[test]
    fn test_zero_length_history() {
        let prompt = PromptAssembler::build(SYSTEM_INSTRUCTION, vec![], "What is NumPy?");

        assert_eq!(prompt.system, SYSTEM_INSTRUCTION);
        assert_eq!(prompt.messages.len(), 1);
        assert_eq!(prompt.messages[0].content, "What is NumPy?");
    }

    #[test]
    fn test_history_not_mutated() {
        let history = vec![Message::new(TurnRole::User, "original")];
        let prompt = PromptAssembler::build("sys", history, "next");

        assert_eq!(prompt.messages[0].content, "original");
        assert_eq!(prompt.messages[0].role, TurnRole::User);
    }
}
