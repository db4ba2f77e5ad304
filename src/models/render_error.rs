use thiserror::Error;

/// Category of a rejected render request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderErrorKind {
    /// A required field was absent or blank after trimming
    MissingField,
    /// A field was present but badly formatted
    InvalidField,
}

/// Validation failure returned instead of a document
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct RenderError {
    pub kind: RenderErrorKind,
    pub message: String,
}

impl RenderError {
    pub fn missing(field: &str) -> Self {
        Self {
            kind: RenderErrorKind::MissingField,
            message: format!("missing {}", field),
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            kind: RenderErrorKind::InvalidField,
            message: message.into(),
        }
    }

    /// Body written back to the client for this error
    pub fn to_response_body(&self) -> String {
        format!("bad request: {}\n", self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_message() {
        let err = RenderError::missing("cipher");
        assert_eq!(err.kind, RenderErrorKind::MissingField);
        assert_eq!(err.to_string(), "missing cipher");
        assert_eq!(err.to_response_body(), "bad request: missing cipher\n");
    }

    #[test]
    fn test_invalid_field_message() {
        let err = RenderError::invalid("port must be integer");
        assert_eq!(err.kind, RenderErrorKind::InvalidField);
        assert_eq!(err.to_response_body(), "bad request: port must be integer\n");
    }
}
