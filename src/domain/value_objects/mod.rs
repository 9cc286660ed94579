use crate::domain::errors::DomainError;

pub const SUBJECT_MANDATORY: &str = "The email subject is mandatory";
pub const BODY_SHOULD_BE_NULL_KEEP_CONFIRM: &str =
    "El cuerpo debería ser nulo. Cámbielo y mantenga marcada la casilla 'Confirmar'";
pub const BODY_MISSING: &str =
    "No se ha indicado el cuerpo del mensaje. Infórmelo o marque la casilla 'Confirmar'";
pub const BODY_SHOULD_BE_NULL_CONFIRM: &str =
    "El cuerpo debería ser nulo. Cámbielo y marque la casilla 'Confirmar'";

/// Empty or whitespace-only. Absence is handled by callers through `Option`.
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Subject of a teacher-directed email. Never blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailSubject(String);

impl EmailSubject {
    pub fn parse(value: Option<&str>) -> Result<Self, DomainError> {
        match value {
            Some(subject) if !is_blank(subject) => Ok(Self(subject.to_string())),
            _ => Err(DomainError::validation(SUBJECT_MANDATORY)),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Reconciles an optional message body with the "Confirmar" checkbox.
///
/// With `confirm` set, an absent body becomes `""` and the empty string is
/// accepted unchanged; whitespace-only bodies are rejected. Without
/// `confirm`, the body must be present and not blank.
pub fn reconcile_body(body: Option<&str>, confirm: bool) -> Result<String, DomainError> {
    match (body, confirm) {
        (None, true) => Ok(String::new()),
        (Some(""), true) => Ok(String::new()),
        (Some(text), true) if is_blank(text) => {
            Err(DomainError::validation(BODY_SHOULD_BE_NULL_KEEP_CONFIRM))
        }
        (None, false) => Err(DomainError::validation(BODY_MISSING)),
        (Some(text), false) if is_blank(text) => {
            Err(DomainError::validation(BODY_SHOULD_BE_NULL_CONFIRM))
        }
        (Some(text), _) => Ok(text.to_string()),
    }
}
