//! Error types for repository operations.
//!
//! Every backend maps its native failures onto this taxonomy so the
//! services and the Python boundary never see backend-specific error
//! types.

/// Result type for repository operations
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Error type for repository operations
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// The backing delivery store is unreachable or refused the connection.
    #[error("Delivery store connection error: {0}")]
    ConnectionError(String),

    /// A fetch or store operation failed inside the backend.
    #[error("Delivery store query error: {0}")]
    QueryError(String),

    /// The requested courier, office or zone does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Seed data violated a domain constraint (empty ids and the like).
    #[error("Delivery data validation error: {0}")]
    ValidationError(String),

    /// The repository configuration could not be loaded or understood.
    #[error("Repository configuration error: {0}")]
    ConfigurationError(String),

    #[error("Internal repository error: {0}")]
    InternalError(String),
}

impl From<String> for RepositoryError {
    fn from(s: String) -> Self {
        RepositoryError::InternalError(s)
    }
}

impl From<&str> for RepositoryError {
    fn from(s: &str) -> Self {
        RepositoryError::InternalError(s.to_string())
    }
}
