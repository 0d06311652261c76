use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlannerError {
    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Render error: {message}")]
    RenderError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Output,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    High,
    Critical,
}

impl PlannerError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            PlannerError::ConfigValidationError { .. }
            | PlannerError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            PlannerError::CsvError(_)
            | PlannerError::SerializationError(_)
            | PlannerError::RenderError { .. } => ErrorCategory::Output,
            PlannerError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Output => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            PlannerError::ConfigValidationError { field, message } => {
                format!("The configuration could not be read ({}): {}", field, message)
            }
            PlannerError::InvalidConfigValueError {
                field,
                value,
                reason,
            } => format!("Setting '{}' has an invalid value '{}': {}", field, value, reason),
            PlannerError::IoError(e) => format!("Could not read or write a file: {}", e),
            PlannerError::CsvError(_)
            | PlannerError::SerializationError(_)
            | PlannerError::RenderError { .. } => format!("Could not render the report: {}", self),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            PlannerError::ConfigValidationError { .. } => {
                "Check the TOML syntax of the configuration file"
            }
            PlannerError::InvalidConfigValueError { .. } => {
                "Fix the highlighted setting in the configuration file or on the command line"
            }
            PlannerError::IoError(_) => {
                "Make sure the path exists and that you have permission to access it"
            }
            PlannerError::CsvError(_)
            | PlannerError::SerializationError(_)
            | PlannerError::RenderError { .. } => "Try a different output format",
        }
    }
}

pub type Result<T> = std::result::Result<T, PlannerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_errors_are_high_severity() {
        let err = PlannerError::InvalidConfigValueError {
            field: "tiers.one_time".to_string(),
            value: "0".to_string(),
            reason: "Value must be at least 1".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert!(err.user_friendly_message().contains("tiers.one_time"));
    }

    #[test]
    fn test_io_errors_are_critical() {
        let err: PlannerError =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied").into();
        assert_eq!(err.category(), ErrorCategory::System);
        assert_eq!(err.severity(), ErrorSeverity::Critical);
    }

    #[test]
    fn test_output_and_parse_errors_are_high_severity() {
        let render = PlannerError::RenderError {
            message: "invalid utf-8".to_string(),
        };
        assert_eq!(render.category(), ErrorCategory::Output);
        assert_eq!(render.severity(), ErrorSeverity::High);

        let parse = PlannerError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: "expected `]`".to_string(),
        };
        assert_eq!(parse.category(), ErrorCategory::Configuration);
        assert_eq!(parse.severity(), ErrorSeverity::High);
    }
}
