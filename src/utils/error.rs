use thiserror::Error;

#[derive(Error, Debug)]
pub enum SchedError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Missing required field: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Input error: {message}")]
    InputError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Config,
    Input,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl SchedError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SchedError::IoError(_) => ErrorCategory::Io,
            SchedError::MissingConfigError { .. } | SchedError::InvalidConfigValueError { .. } => {
                ErrorCategory::Config
            }
            SchedError::CsvError(_)
            | SchedError::SerializationError(_)
            | SchedError::InputError { .. } => ErrorCategory::Input,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Io => ErrorSeverity::Critical,
            ErrorCategory::Config => ErrorSeverity::Medium,
            ErrorCategory::Input => ErrorSeverity::High,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            SchedError::IoError(_) => {
                "Check that the input file exists and is readable".to_string()
            }
            SchedError::CsvError(_) => {
                "Check the CSV structure: a header row with year_number, installment_number, due_date is expected".to_string()
            }
            SchedError::SerializationError(_) => {
                "Check that the input is a JSON array of payment row objects".to_string()
            }
            SchedError::MissingConfigError { field } => {
                format!("Provide a value for '{}'", field)
            }
            SchedError::InvalidConfigValueError { field, .. } => {
                format!("Correct the value supplied for '{}'", field)
            }
            SchedError::InputError { .. } => {
                "Check the input file contents against the expected row shape".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Io => format!("Could not read the input: {}", self),
            ErrorCategory::Config => format!("Configuration problem: {}", self),
            ErrorCategory::Input => format!("Could not understand the input: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, SchedError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_errors_are_medium_severity() {
        let err = SchedError::MissingConfigError {
            field: "input".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Config);
        assert_eq!(err.severity(), ErrorSeverity::Medium);
        assert!(err.recovery_suggestion().contains("input"));
    }

    #[test]
    fn test_io_errors_are_critical() {
        let err = SchedError::from(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "no such file",
        ));
        assert_eq!(err.severity(), ErrorSeverity::Critical);
    }
}
