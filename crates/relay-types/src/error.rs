use thiserror::Error;

/// Errors from repository operations (used by trait definitions in relay-core).
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("database connection error")]
    Connection,

    #[error("query error: {0}")]
    Query(String),

    #[error("entity not found")]
    NotFound,

    #[error("conflict: {0}")]
    Conflict(String),
}

/// Errors surfaced by chat operations.
#[derive(Debug, Error)]
pub enum ChatError {
    #[error("user {0} not found")]
    UserNotFound(i64),

    #[error("bot user '{0}' not found")]
    BotNotFound(String),

    #[error("no users have been seeded")]
    NoUsers,

    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("storage error: {0}")]
    Storage(#[from] RepositoryError),
}

impl ChatError {
    /// Whether the failure names something that does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ChatError::UserNotFound(_)
                | ChatError::BotNotFound(_)
                | ChatError::NoUsers
                | ChatError::Storage(RepositoryError::NotFound)
        )
    }
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
    fn test_chat_error_display() {
        assert_eq!(ChatError::UserNotFound(42).to_string(), "user 42 not found");
        assert_eq!(
            ChatError::BadRequest("missing field `content`".to_string()).to_string(),
            "bad request: missing field `content`"
        );
    }

    #[test]
    fn test_not_found_classification() {
        assert!(ChatError::UserNotFound(1).is_not_found());
        assert!(ChatError::BotNotFound("Bot".to_string()).is_not_found());
        assert!(ChatError::Storage(RepositoryError::NotFound).is_not_found());
        assert!(!ChatError::BadRequest(String::new()).is_not_found());
        assert!(!ChatError::Storage(RepositoryError::Connection).is_not_found());
    }
}
