//! SQLite message store implementation.
//!
//! Implements `MessageStore` from `datasage-core` using sqlx with the split
//! read/write pool: raw queries, a private Row struct for SQLite-to-domain
//! mapping, RFC 3339 timestamps.

use chrono::{DateTime, Utc};
use sqlx::Row;

use datasage_core::store::MessageStore;
use datasage_types::chat::{ChatTurn, SessionId, TurnRole};
use datasage_types::error::StorageError;

use super::pool::DatabasePool;

/// SQLite-backed implementation of `MessageStore`.
pub struct SqliteMessageStore {
    pool: DatabasePool,
}

impl SqliteMessageStore {
    /// Create a new store backed by the given database pool.
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

/// Internal row type for mapping SQLite rows to domain ChatTurn.
struct ChatTurnRow {
    id: i64,
    session_id: String,
    role: String,
    content: String,
    timestamp: String,
}

impl ChatTurnRow {
    fn from_row(row: &sqlx::sqlite::SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            session_id: row.try_get("session_id")?,
            role: row.try_get("role")?,
            content: row.try_get("content")?,
            timestamp: row.try_get("timestamp")?,
        })
    }

    fn into_turn(self) -> Result<ChatTurn, StorageError> {
        let role: TurnRole = self
            .role
            .parse()
            .map_err(|e: String| StorageError::Query(e))?;
        let timestamp = parse_datetime(&self.timestamp)?;

        Ok(ChatTurn {
            id: self.id,
            session_id: SessionId::from(self.session_id),
            role,
            content: self.content,
            timestamp,
        })
    }
}

fn parse_datetime(s: &str) -> Result<DateTime<Utc>, StorageError> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| StorageError::Query(format!("invalid datetime: {e}")))
}

fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339()
}

fn map_sqlx_err(e: sqlx::Error) -> StorageError {
    match e {
        sqlx::Error::PoolClosed | sqlx::Error::PoolTimedOut | sqlx::Error::Io(_) => {
            StorageError::Connection
        }
        other => StorageError::Query(other.to_string()),
    }
}

impl MessageStore for SqliteMessageStore {
    async fn append(
        &self,
        session_id: &SessionId,
        role: TurnRole,
        content: &str,
    ) -> Result<ChatTurn, StorageError> {
        // The store assigns the timestamp; the single-writer pool keeps it
        // monotonic within a session.
        let timestamp = Utc::now();

        let result = sqlx::query(
            "INSERT INTO chat_turns (session_id, role, content, timestamp) VALUES (?, ?, ?, ?)",
        )
        .bind(session_id.as_str())
        .bind(role.to_string())
        .bind(content)
        .bind(format_datetime(&timestamp))
        .execute(&self.pool.writer)
        .await
        .map_err(map_sqlx_err)?;

        Ok(ChatTurn {
            id: result.last_insert_rowid(),
            session_id: session_id.clone(),
            role,
            content: content.to_string(),
            timestamp,
        })
    }

    async fn load(&self, session_id: &SessionId) -> Result<Vec<ChatTurn>, StorageError> {
        let rows = sqlx::query(
            "SELECT * FROM chat_turns WHERE session_id = ? ORDER BY timestamp ASC, id ASC",
        )
        .bind(session_id.as_str())
        .fetch_all(&self.pool.reader)
        .await
        .map_err(map_sqlx_err)?;

        let mut turns = Vec::with_capacity(rows.len());
        for row in &rows {
            let turn_row =
                ChatTurnRow::from_row(row).map_err(|e| StorageError::Query(e.to_string()))?;
            turns.push(turn_row.into_turn()?);
        }

        Ok(turns)
    }
}
