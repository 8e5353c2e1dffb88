use thiserror::Error;

#[derive(Error, Debug)]
pub enum IdentError {
    #[error("Malformed {kind}: '{value}' ({reason})")]
    MalformedInput {
        kind: String,
        value: String,
        reason: String,
    },

    #[error("Invalid URL '{value}': {reason}")]
    InvalidUrl { value: String, reason: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl IdentError {
    pub fn malformed(kind: &str, value: &str, reason: impl Into<String>) -> Self {
        IdentError::MalformedInput {
            kind: kind.to_string(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    /// 錯誤嚴重程度，決定 CLI 的退出碼
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            IdentError::MalformedInput { .. } | IdentError::InvalidUrl { .. } => ErrorSeverity::Low,
            IdentError::SerializationError(_) => ErrorSeverity::Medium,
            IdentError::ConfigError { .. }
            | IdentError::ConfigValidationError { .. }
            | IdentError::InvalidConfigValueError { .. } => ErrorSeverity::High,
            IdentError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            IdentError::MalformedInput { kind, value, .. } => {
                format!("The {} '{}' does not have the expected shape", kind, value)
            }
            IdentError::InvalidUrl { value, .. } => format!("'{}' is not a valid URL", value),
            IdentError::IoError(e) => format!("Could not read or write data: {}", e),
            IdentError::SerializationError(e) => format!("Could not encode output: {}", e),
            IdentError::ConfigError { message } => format!("Configuration problem: {}", message),
            IdentError::ConfigValidationError { field, message } => {
                format!("Configuration field '{}' is invalid: {}", field, message)
            }
            IdentError::InvalidConfigValueError { field, value, .. } => {
                format!("Configuration field '{}' has an invalid value '{}'", field, value)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            IdentError::MalformedInput { .. } => {
                "Compact timestamps must be exactly 14 digits (YYYYMMDDHHMMSS); use the lenient policy to accept partial input"
            }
            IdentError::InvalidUrl { .. } => "Pass an absolute URL including its scheme, e.g. https://host/files/<hash>",
            IdentError::IoError(_) => "Check that the input file exists and the output location is writable",
            IdentError::SerializationError(_) => "Retry without --json or report the input that triggered this",
            IdentError::ConfigError { .. }
            | IdentError::ConfigValidationError { .. }
            | IdentError::InvalidConfigValueError { .. } => {
                "Fix the configuration file; see [timestamp], [extraction], [address] and [logging] sections"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, IdentError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_mapping() {
        assert_eq!(
            IdentError::malformed("timestamp", "2024", "too short").severity(),
            ErrorSeverity::Low
        );
        assert_eq!(
            IdentError::ConfigError { message: "bad policy".into() }.severity(),
            ErrorSeverity::High
        );
        let io = IdentError::from(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        assert_eq!(io.severity(), ErrorSeverity::Critical);
    }

    #[test]
    fn test_display_includes_value() {
        let err = IdentError::InvalidUrl {
            value: "not a url".into(),
            reason: "relative URL without a base".into(),
        };
        assert!(err.to_string().contains("not a url"));
        assert!(err.user_friendly_message().contains("not a url"));
    }
}
