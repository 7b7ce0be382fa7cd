use thiserror::Error;

/// Errors from the message store (connection or write failure).
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("database connection error")]
    Connection,

    #[error("query error: {0}")]
    Query(String),
}

/// Errors from the hosted completion endpoint.
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("network error: {0}")]
    Network(String),

    #[error("authentication failed")]
    AuthenticationFailed,

    #[error("request timed out")]
    Timeout,

    #[error("provider error (HTTP {status}): {message}")]
    Provider { status: u16, message: String },

    #[error("deserialization error: {0}")]
    Deserialization(String),
}

/// Errors surfaced by the chat pipeline.
///
/// A failed completion leaves the already-persisted user turn in place;
/// callers must surface the failure rather than fabricate an assistant turn.
#[derive(Debug, Error)]
pub enum ChatError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Upstream(#[from] UpstreamError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_error_display() {
        let err = StorageError::Query("syntax error".to_string());
        assert_eq!(err.to_string(), "query error: syntax error");
    }

    #[test]
    fn test_upstream_error_display() {
        let err = UpstreamError::Provider {
            status: 503,
            message: "overloaded".to_string(),
        };
        assert!(err.to_string().contains("503"));
        assert!(err.to_string().contains("overloaded"));
    }

    #[test]
    fn test_chat_error_from_upstream() {
        let err: ChatError = UpstreamError::Timeout.into();
        assert!(matches!(err, ChatError::Upstream(UpstreamError::Timeout)));
        assert_eq!(err.to_string(), "request timed out");
    }
}
