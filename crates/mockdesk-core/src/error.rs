use thiserror::Error;

/// Top-level error type for mockdesk.
#[derive(Debug, Error)]
pub enum MockError {
    /// Id-based lookup miss. Carries the entity name ("Task", "User", ...).
    #[error("{0} not found")]
    NotFound(&'static str),

    /// Authenticated read without a session.
    #[error("Not authenticated")]
    Unauthorized,

    /// Request payload or query failed shape validation.
    #[error("invalid {field}: {message}")]
    Validation { field: String, message: String },

    /// The task id space is full.
    #[error("no free {0} ids left")]
    Exhausted(&'static str),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),

    /// Key/value backend error.
    #[error("storage error: {0}")]
    Storage(String),

    /// I/O error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl MockError {
    /// Shorthand for a [`MockError::Validation`].
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Wire-level error code carried in the response envelope.
    pub fn code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "NOT_FOUND",
            Self::Unauthorized => "UNAUTHORIZED",
            Self::Validation { .. } => "VALIDATION_ERROR",
            Self::Exhausted(_)
            | Self::Config(_)
            | Self::Storage(_)
            | Self::Io(_)
            | Self::Serialization(_) => "UNKNOWN_ERROR",
        }
    }

    /// HTTP status code for this error.
    pub fn status(&self) -> u16 {
        match self {
            Self::NotFound(_) => 404,
            Self::Unauthorized => 401,
            Self::Validation { .. } => 400,
            _ => 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_names_entity() {
        let err = MockError::NotFound("Task");
        assert_eq!(err.to_string(), "Task not found");
        assert_eq!(err.code(), "NOT_FOUND");
        assert_eq!(err.status(), 404);
    }

    #[test]
    fn test_internal_errors_collapse_to_unknown() {
        let err = MockError::Storage("disk gone".to_string());
        assert_eq!(err.code(), "UNKNOWN_ERROR");
        assert_eq!(err.status(), 500);

        let err = MockError::Exhausted("task");
        assert_eq!(err.code(), "UNKNOWN_ERROR");
    }

    #[test]
    fn test_validation_status() {
        let err = MockError::validation("pageSize", "must be a number");
        assert_eq!(err.code(), "VALIDATION_ERROR");
        assert_eq!(err.status(), 400);
        assert_eq!(err.to_string(), "invalid pageSize: must be a number");
    }
}
