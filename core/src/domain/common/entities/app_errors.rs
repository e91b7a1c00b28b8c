use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("Resource not found")]
    NotFound,

    #[error("{0}")]
    Forbidden(String),

    #[error("Not authorized to access this route")]
    Unauthorized,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Duplicate field value entered")]
    DuplicateField,

    #[error("{0}")]
    Invalid(String),

    #[error("Internal server error")]
    InternalServerError,
}
