use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScriptError {
    #[error("Cannot read source '{}': {}", path.display(), source)]
    SourceUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Source '{}' is not valid UTF-8 text", path.display())]
    InvalidEncoding { path: PathBuf },

    #[error("Cannot write destination '{}': {}", path.display(), source)]
    DestinationWriteFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid value for {field} ('{value}'): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Source,
    Destination,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ScriptError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ScriptError::SourceUnreadable { .. } | ScriptError::InvalidEncoding { .. } => {
                ErrorCategory::Source
            }
            ScriptError::DestinationWriteFailure { .. } => ErrorCategory::Destination,
            ScriptError::InvalidConfigValueError { .. } | ScriptError::MissingConfigError { .. } => {
                ErrorCategory::Configuration
            }
            ScriptError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Configuration => ErrorSeverity::Medium,
            ErrorCategory::Source | ErrorCategory::Destination => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// Process exit status for this failure. Never zero.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            ScriptError::SourceUnreadable { path, .. } => format!(
                "Check that '{}' exists, is a regular file and is readable",
                path.display()
            ),
            ScriptError::InvalidEncoding { .. } => {
                "Convert the input to UTF-8 before transforming it".to_string()
            }
            ScriptError::DestinationWriteFailure { path, .. } => format!(
                "Check that the directory of '{}' exists, is writable and has free space",
                path.display()
            ),
            ScriptError::InvalidConfigValueError { field, .. } => {
                format!("Provide a valid value for {}", field)
            }
            ScriptError::MissingConfigError { field } => format!("Provide {}", field),
            ScriptError::IoError(_) => "Retry the run; check system resources".to_string(),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ScriptError::SourceUnreadable { path, .. } => {
                format!("Input file '{}' could not be read", path.display())
            }
            ScriptError::InvalidEncoding { path } => {
                format!("Input file '{}' is not UTF-8 text", path.display())
            }
            ScriptError::DestinationWriteFailure { path, .. } => {
                format!("Output file '{}' could not be written", path.display())
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ScriptError>;
