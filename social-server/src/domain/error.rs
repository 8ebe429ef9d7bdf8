use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum DomainError {
    #[error("{message}")]
    Validation {
        field: &'static str,
        message: &'static str,
    },

    #[error("{0} not found")]
    NotFound(String),

    #[error("{0}")]
    AlreadyExists(String),

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("unexpected domain error: {0}")]
    Unexpected(String),
}

impl DomainError {
    pub(crate) fn validation(field: &'static str, message: &'static str) -> Self {
        Self::Validation { field, message }
    }

    pub(crate) fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound(resource.into())
    }
}
