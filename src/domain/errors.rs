use thiserror::Error;

/// Failures surfaced by the campus use cases.
///
/// `Validation` and `NotFound` carry text meant to be shown to the end user
/// as-is, so their `Display` output is the bare message. Anything raised by
/// a repository or email adapter travels through `Other` untouched.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    AlreadyExists(String),
    #[error("{0}")]
    Validation(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DomainError {
    pub fn validation(message: impl Into<String>) -> Self {
        DomainError::Validation(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        DomainError::NotFound(message.into())
    }

    pub fn already_exists(message: impl Into<String>) -> Self {
        DomainError::AlreadyExists(message.into())
    }

    /// Resolves the kind behind an adapter error. Adapters may raise a typed
    /// `DomainError` inside their `anyhow::Error`; that one is returned,
    /// otherwise `self`.
    pub fn kind(&self) -> &DomainError {
        match self {
            DomainError::Other(source) => source.downcast_ref::<DomainError>().unwrap_or(self),
            _ => self,
        }
    }
}
