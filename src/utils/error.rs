use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShowcaseError {
    #[error("Invalid argument `{field}`: {reason}")]
    InvalidArgument { field: String, reason: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Unknown {role} component: {name}")]
    UnknownComponent { role: String, name: String },

    #[error("Circular dependency while resolving {role} component: {name}")]
    CircularDependency { role: String, name: String },

    #[error("Brewing failed: {message}")]
    Brew { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    Wiring,
    System,
}

impl ShowcaseError {
    pub fn invalid(field: &str, reason: impl Into<String>) -> Self {
        ShowcaseError::InvalidArgument {
            field: field.to_string(),
            reason: reason.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            ShowcaseError::InvalidArgument { .. } => ErrorCategory::Input,
            ShowcaseError::ConfigError { .. } | ShowcaseError::ConfigParse(_) => {
                ErrorCategory::Configuration
            }
            ShowcaseError::UnknownComponent { .. }
            | ShowcaseError::CircularDependency { .. }
            | ShowcaseError::Brew { .. } => ErrorCategory::Wiring,
            ShowcaseError::IoError(_) | ShowcaseError::SerializationError(_) => {
                ErrorCategory::System
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ShowcaseError::InvalidArgument { field, reason } => {
                format!("The value given for '{}' is not allowed: {}", field, reason)
            }
            ShowcaseError::ConfigError { message } => format!("Bad configuration: {}", message),
            ShowcaseError::ConfigParse(e) => format!("Could not read the wiring file: {}", e),
            ShowcaseError::UnknownComponent { role, name } => {
                format!("No {} named '{}' is registered", role, name)
            }
            ShowcaseError::CircularDependency { role, name } => {
                format!("The {} '{}' depends on itself", role, name)
            }
            ShowcaseError::Brew { message } => format!("The coffee maker failed: {}", message),
            ShowcaseError::IoError(e) => format!("Could not write output: {}", e),
            ShowcaseError::SerializationError(e) => format!("Could not render JSON: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Input => "Check the constructor arguments against the documented constraints",
            ErrorCategory::Configuration => "Fix the wiring file and run again",
            ErrorCategory::Wiring => "Check the heater/pump kinds and how their factories depend on each other",
            ErrorCategory::System => "Check that stdout is writable",
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Input => 1,
            ErrorCategory::Configuration => 2,
            ErrorCategory::Wiring => 3,
            ErrorCategory::System => 4,
        }
    }
}

pub type Result<T> = std::result::Result<T, ShowcaseError>;
