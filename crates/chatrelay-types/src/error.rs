use thiserror::Error;

/// Errors from repository operations (used by trait definitions in chatrelay-core).
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("database connection error")]
    Connection,

    #[error("query error: {0}")]
    Query(String),
}

/// Errors from the completion provider.
#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("authentication failed")]
    AuthenticationFailed,

    #[error("rate limited by provider")]
    RateLimited,

    #[error("provider error: {0}")]
    Provider(String),

    #[error("failed to parse provider response: {0}")]
    Deserialization(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repository_error_display() {
        let err = RepositoryError::Query("syntax error".to_string());
        assert_eq!(err.to_string(), "query error: syntax error");
    }

    #[test]
    fn test_completion_error_display() {
        let err = CompletionError::Provider("503 upstream".to_string());
        assert_eq!(err.to_string(), "provider error: 503 upstream");
    }
}
