use poem::http::StatusCode;

use crate::domain::errors::DomainError;

/// Turns a use-case failure into a plain-text HTTP error whose body is the
/// domain message verbatim. Typed conflicts and missing references raised by
/// adapters get their client status instead of 500.
pub fn map_domain_error(err: DomainError) -> poem::Error {
    let status = match err.kind() {
        DomainError::Validation(_) => StatusCode::BAD_REQUEST,
        DomainError::NotFound(_) => StatusCode::NOT_FOUND,
        DomainError::AlreadyExists(_) => StatusCode::CONFLICT,
        DomainError::Other(source) => {
            tracing::error!(error = %source, "campus operation failed");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    poem::Error::from_string(err.to_string(), status)
}
