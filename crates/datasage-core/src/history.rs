//! Read-through projection of stored turns into prompt messages.
//!
//! No filtering, truncation, or summarization: the full history is
//! projected every time. Context length therefore grows without bound over
//! a long conversation -- a known open question, deliberately retained
//! (see DESIGN.md).

use datasage_types::chat::SessionId;
use datasage_types::error::StorageError;
use datasage_types::llm::Message;

use crate::store::MessageStore;

/// Projects a session's stored turns into the shape the prompt assembler
/// expects. Borrows the store; constructed on the fly per submission.
pub struct HistoryAdapter<'a, S: MessageStore> {
    store: &'a S,
}

impl<'a, S: MessageStore> HistoryAdapter<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// The full ordered history as role/content pairs.
    pub async fn to_prompt_messages(
        &self,
        session_id: &SessionId,
    ) -> Result<Vec<Message>, StorageError> {
        let turns = self.store.load(session_id).await?;
        Ok(turns
            .into_iter()
            .map(|turn| Message {
                role: turn.role,
                content: turn.content,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::InMemoryStore;
    use datasage_types::chat::TurnRole;

    #[tokio::test]
    async fn test_projection_preserves_order_and_content() {
        let store = InMemoryStore::new();
        let sid = SessionId::generate();
        store.append(&sid, TurnRole::User, "What is overfitting?").await.unwrap();
        store.append(&sid, TurnRole::Assistant, "Overfitting is...").await.unwrap();

        let messages = HistoryAdapter::new(&store)
            .to_prompt_messages(&sid)
            .await
            .unwrap();

        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, TurnRole::User);
        assert_eq!(messages[0].content, "What is overfitting?");
        assert_eq!(messages[1].role, TurnRole::Assistant);
    }

    #[tokio::test]
    async fn test_unknown_session_projects_empty() {
        let store = InMemoryStore::new();
        let messages = HistoryAdapter::new(&store)
            .to_prompt_messages(&SessionId::generate())
            .await
            .unwrap();
        assert!(messages.is_empty());
    }
}
