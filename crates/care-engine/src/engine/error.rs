/// Failures surfaced by the decision engine. None of them are transient.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("invalid input for {field}: {reason}")]
    InvalidInput { field: String, reason: String },
    #[error("inconsistent rule tables: {0}")]
    InvalidState(String),
}

impl EngineError {
    pub fn invalid_input(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub fn field(&self) -> Option<&str> {
        match self {
            Self::InvalidInput { field, .. } => Some(field),
            Self::InvalidState(_) => None,
        }
    }
}
