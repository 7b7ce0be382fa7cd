//! Chat service orchestrating one submission end-to-end.
//!
//! The pipeline is a straight line invoked once per user submission:
//! record the user turn, load prior turns, assemble the prompt, call the
//! completion endpoint, record the assistant turn. No component holds
//! state across calls beyond the persisted store.

use tracing::{info, warn};

use datasage_types::chat::{ChatTurn, SessionId, TurnRole};
use datasage_types::error::ChatError;

use crate::export;
use crate::history::HistoryAdapter;
use crate::prompt::{PromptAssembler, SYSTEM_INSTRUCTION};
use crate::provider::CompletionProvider;
use crate::store::MessageStore;

/// Outcome of one submission.
#[derive(Debug)]
pub enum Submission {
    /// Empty or whitespace-only input: nothing stored, nothing sent.
    Ignored,
    /// Both turns of the exchange, as persisted.
    Answered { user: ChatTurn, assistant: ChatTurn },
}

/// Orchestrates the submission pipeline.
///
/// Generic over [`MessageStore`] and [`CompletionProvider`] so core never
/// depends on infra; the application layer pins the concrete types.
pub struct ChatService<S: MessageStore, P: CompletionProvider> {
    store: S,
    provider: P,
    system_instruction: String,
}

impl<S: MessageStore, P: CompletionProvider> ChatService<S, P> {
    /// Create a service with the fixed tutor persona.
    pub fn new(store: S, provider: P) -> Self {
        Self {
            store,
            provider,
            system_instruction: SYSTEM_INSTRUCTION.to_string(),
        }
    }

    /// Override the system instruction (tests, alternate personas).
    pub fn with_system_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.system_instruction = instruction.into();
        self
    }

    /// Access the message store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Run one submission through the full pipeline.
    ///
    /// A failed completion leaves the user turn persisted and propagates
    /// the error; the caller must surface it visibly rather than silently
    /// drop the turn pair.
    pub async fn submit(
        &self,
        session_id: &SessionId,
        input: &str,
    ) -> Result<Submission, ChatError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Ok(Submission::Ignored);
        }

        let user = self.store.append(session_id, TurnRole::User, trimmed).await?;

        let mut history = HistoryAdapter::new(&self.store)
            .to_prompt_messages(session_id)
            .await?;
        // One submission in flight per context, so the turn recorded above
        // is the final element; the assembler re-appends the utterance as
        // the closing user message.
        history.pop();

        let prompt = PromptAssembler::build(&self.system_instruction, history, trimmed);

        let reply = match self.provider.complete(&prompt).await {
            Ok(reply) => reply,
            Err(err) => {
                warn!(
                    session_id = %session_id,
                    provider = self.provider.name(),
                    error = %err,
                    "completion failed; user turn remains without a reply"
                );
                return Err(err.into());
            }
        };

        let assistant = self
            .store
            .append(session_id, TurnRole::Assistant, &reply)
            .await?;

        info!(
            session_id = %session_id,
            user_turn = user.id,
            assistant_turn = assistant.id,
            "exchange recorded"
        );

        Ok(Submission::Answered { user, assistant })
    }

    /// Ordered turns for on-screen replay.
    pub async fn history(&self, session_id: &SessionId) -> Result<Vec<ChatTurn>, ChatError> {
        Ok(self.store.load(session_id).await?)
    }

    /// Plain-text transcript of a session.
    pub async fn export(&self, session_id: &SessionId) -> Result<String, ChatError> {
        let turns = self.store.load(session_id).await?;
        Ok(export::render_transcript(&turns))
    }
}
