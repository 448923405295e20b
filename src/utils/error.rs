use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlannerError {
    #[error("Error: Could not open file \"{path}\".")]
    FileOpen {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Error: Malformed line {line}.")]
    MalformedLine { line: usize },

    #[error("Error: No courses found in file.")]
    EmptyCatalog,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// 使用者可以重試的錯誤
    Low,
    High,
    Critical,
}

impl PlannerError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            PlannerError::FileOpen { .. }
            | PlannerError::MalformedLine { .. }
            | PlannerError::EmptyCatalog => ErrorSeverity::Low,
            PlannerError::ConfigValidationError { .. }
            | PlannerError::InvalidConfigValueError { .. } => ErrorSeverity::High,
            PlannerError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            PlannerError::ConfigValidationError { field, message } => {
                format!("Configuration problem ({}): {}", field, message)
            }
            PlannerError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration value for {} is not usable: {}", field, reason)
            }
            PlannerError::IoError(e) => format!("Console I/O failed: {}", e),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            PlannerError::FileOpen { .. } => "Check the file name and that the file is readable",
            PlannerError::MalformedLine { .. } => {
                "Every non-blank line needs at least a course code and a title separated by a comma or tab"
            }
            PlannerError::EmptyCatalog => "Add at least one course line to the file",
            PlannerError::ConfigValidationError { .. }
            | PlannerError::InvalidConfigValueError { .. } => {
                "Fix the configuration file or command line flags and try again"
            }
            PlannerError::IoError(_) => "Make sure the terminal is still attached",
        }
    }
}

pub type Result<T> = std::result::Result<T, PlannerError>;
