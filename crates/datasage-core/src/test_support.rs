//! In-memory test doubles for the store and provider traits.

use std::collections::VecDeque;
use std::sync::Mutex;

use chrono::Utc;
use datasage_types::chat::{ChatTurn, SessionId, TurnRole};
use datasage_types::error::{StorageError, UpstreamError};
use datasage_types::llm::ChatPrompt;

use crate::provider::CompletionProvider;
use crate::store::MessageStore;

/// MessageStore backed by a Vec, honoring the (timestamp, id) load order.
pub struct InMemoryStore {
    turns: Mutex<Vec<ChatTurn>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            turns: Mutex::new(Vec::new()),
        }
    }

    pub fn row_count(&self) -> usize {
        self.turns.lock().unwrap().len()
    }
}

impl MessageStore for InMemoryStore {
    async fn append(
        &self,
        session_id: &SessionId,
        role: TurnRole,
        content: &str,
    ) -> Result<ChatTurn, StorageError> {
        let mut turns = self.turns.lock().unwrap();
        let turn = ChatTurn {
            id: turns.len() as i64 + 1,
            session_id: session_id.clone(),
            role,
            content: content.to_string(),
            timestamp: Utc::now(),
        };
        turns.push(turn.clone());
        Ok(turn)
    }

    async fn load(&self, session_id: &SessionId) -> Result<Vec<ChatTurn>, StorageError> {
        let turns = self.turns.lock().unwrap();
        let mut out: Vec<ChatTurn> = turns
            .iter()
            .filter(|t| &t.session_id == session_id)
            .cloned()
            .collect();
        out.sort_by(|a, b| (a.timestamp, a.id).cmp(&(b.timestamp, b.id)));
        Ok(out)
    }
}

/// CompletionProvider that replays scripted results and records every
/// prompt it receives.
pub struct ScriptedProvider {
    replies: Mutex<VecDeque<Result<String, UpstreamError>>>,
    prompts: Mutex<Vec<ChatPrompt>>,
}

impl ScriptedProvider {
    pub fn new() -> Self {
        Self {
            replies: Mutex::new(VecDeque::new()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn push_reply(&self, reply: &str) {
        self.replies
            .lock()
            .unwrap()
            .push_back(Ok(reply.to_string()));
    }

    pub fn push_failure(&self, err: UpstreamError) {
        self.replies.lock().unwrap().push_back(Err(err));
    }

    pub fn call_count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }

    pub fn recorded_prompts(&self) -> Vec<ChatPrompt> {
        self.prompts.lock().unwrap().clone()
    }
}

impl CompletionProvider for ScriptedProvider {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn complete(&self, prompt: &ChatPrompt) -> Result<String, UpstreamError> {
        self.prompts.lock().unwrap().push(prompt.clone());
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok("scripted default reply".to_string()))
    }
}
