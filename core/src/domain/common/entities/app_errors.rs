use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("Server not found")]
    NotFound,

    #[error("Internal server error")]
    InternalServerError,

    #[error("Invalid server identifier: {0}")]
    InvalidIdentifier(String),

    #[error("Database connection failed: {0}")]
    DatabaseConnection(String),

    #[error("Cache error: {0}")]
    Cache(String),
}
