//! MessageStore trait definition.
//!
//! The append-only log of chat turns. Implementations live in
//! `datasage-infra` (e.g. `SqliteMessageStore`). Uses native async fn in
//! traits (RPITIT, Rust 2024 edition).

use datasage_types::chat::{ChatTurn, SessionId, TurnRole};
use datasage_types::error::StorageError;

/// Append-only persistence for chat turns.
///
/// No update or delete operations are exposed: a session's history is
/// immutable once written. Every `append` durably persists exactly one row
/// before returning (single statement, atomic per row).
pub trait MessageStore: Send + Sync {
    /// Insert one turn with a store-assigned id and timestamp, returning
    /// the stored turn.
    fn append(
        &self,
        session_id: &SessionId,
        role: TurnRole,
        content: &str,
    ) -> impl std::future::Future<Output = Result<ChatTurn, StorageError>> + Send;

    /// All turns for a session, ordered by timestamp ascending (ties broken
    /// by id). An unknown session yields an empty Vec, not an error.
    fn load(
        &self,
        session_id: &SessionId,
    ) -> impl std::future::Future<Output = Result<Vec<ChatTurn>, StorageError>> + Send;
}
