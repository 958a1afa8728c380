use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Input is empty")]
    EmptyInput,

    #[error("{message}")]
    MalformedArray { message: String },

    #[error("Failed to parse line {line}: {message}")]
    MalformedLine { line: usize, message: String },

    #[error("Input directory not found: {path}")]
    InputDirMissing { path: String },

    #[error("Cannot create output directory {path}: {source}")]
    OutputDirError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Missing required output files: {}", .missing.join(", "))]
    MissingRequiredOutputs { missing: Vec<String> },

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
pub enum ErrorCategory {
    Input,
    Parse,
    Filesystem,
    Completeness,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ConvertError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ConvertError::EmptyInput | ConvertError::InputDirMissing { .. } => ErrorCategory::Input,
            ConvertError::MalformedArray { .. }
            | ConvertError::MalformedLine { .. }
            | ConvertError::SerializationError(_) => ErrorCategory::Parse,
            ConvertError::IoError(_) | ConvertError::OutputDirError { .. } => {
                ErrorCategory::Filesystem
            }
            ConvertError::MissingRequiredOutputs { .. } => ErrorCategory::Completeness,
            ConvertError::ConfigError { .. }
            | ConvertError::ConfigValidationError { .. }
            | ConvertError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    /// Pair-level problems are `Medium`; anything that stops the whole run is `High` or worse.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ConvertError::EmptyInput
            | ConvertError::MalformedArray { .. }
            | ConvertError::MalformedLine { .. }
            | ConvertError::SerializationError(_) => ErrorSeverity::Medium,
            ConvertError::InputDirMissing { .. }
            | ConvertError::MissingRequiredOutputs { .. }
            | ConvertError::ConfigError { .. }
            | ConvertError::ConfigValidationError { .. }
            | ConvertError::InvalidConfigValueError { .. } => ErrorSeverity::High,
            ConvertError::IoError(_) | ConvertError::OutputDirError { .. } => {
                ErrorSeverity::Critical
            }
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            ConvertError::EmptyInput => {
                "Re-run the BigQuery export; a zero-byte file means the export did not complete".to_string()
            }
            ConvertError::MalformedArray { .. } | ConvertError::MalformedLine { .. } => {
                "Download the export again as JSON or newline-delimited JSON".to_string()
            }
            ConvertError::InputDirMissing { path } => {
                format!("Create {} and place the BigQuery export files in it", path)
            }
            ConvertError::OutputDirError { path, .. } => {
                format!("Check that {} is writable", path)
            }
            ConvertError::MissingRequiredOutputs { missing } => format!(
                "Check the dataset mapping and make sure the inputs for {} are present",
                missing.join(", ")
            ),
            ConvertError::ConfigError { .. }
            | ConvertError::ConfigValidationError { .. }
            | ConvertError::InvalidConfigValueError { .. } => {
                "Fix the configuration file and try again".to_string()
            }
            ConvertError::IoError(_) => "Check file permissions and available disk space".to_string(),
            ConvertError::SerializationError(_) => {
                "Inspect the input for values that cannot be re-serialized".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ConvertError::InputDirMissing { path } => {
                format!("Error: input directory not found at {}", path)
            }
            ConvertError::MissingRequiredOutputs { missing } => {
                let list: Vec<String> = missing.iter().map(|name| format!("{}.json", name)).collect();
                format!("Missing required output files: {}", list.join(", "))
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ConvertError>;
