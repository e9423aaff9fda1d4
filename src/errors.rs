use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum StudyError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl StudyError {
    /// Stable code for surrounding services that map errors to API responses.
    pub fn error_code(&self) -> &'static str {
        match self {
            StudyError::NotFound(_) => "NOT_FOUND",
            StudyError::ValidationError(_) => "VALIDATION_ERROR",
            StudyError::SerializationError(_) => "SERIALIZATION_ERROR",
        }
    }
}

impl From<validator::ValidationErrors> for StudyError {
    fn from(err: validator::ValidationErrors) -> Self {
        StudyError::ValidationError(err.to_string())
    }
}

impl From<serde_json::Error> for StudyError {
    fn from(err: serde_json::Error) -> Self {
        StudyError::SerializationError(format!("JSON serialization error: {}", err))
    }
}

pub type StudyResult<T> = Result<T, StudyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = StudyError::NotFound("question".into());
        assert_eq!(err.to_string(), "Not found: question");
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            StudyError::ValidationError("test".into()).error_code(),
            "VALIDATION_ERROR"
        );
        assert_eq!(StudyError::NotFound("test".into()).error_code(), "NOT_FOUND");
    }

    #[test]
    fn test_serde_json_error_converts() {
        let parse_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err: StudyError = parse_err.into();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
    }
}
