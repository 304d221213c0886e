use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("Unknown platform: {identifier}")]
    UnknownPlatform { identifier: String },

    #[error("Dependency not found: {name} (platform: {platform})")]
    DependencyNotFound { name: String, platform: String },

    #[error("Unusable path for dependency {name}: {path} ({reason})")]
    InvalidDependencyPath {
        name: String,
        path: String,
        reason: String,
    },

    #[error("Invalid profile '{identifier}': {reason}")]
    InvalidProfile { identifier: String, reason: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Platform,
    Dependency,
    Configuration,
    System,
}

impl ResolveError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ResolveError::UnknownPlatform { .. } => ErrorCategory::Platform,
            ResolveError::DependencyNotFound { .. } | ResolveError::InvalidDependencyPath { .. } => {
                ErrorCategory::Dependency
            }
            ResolveError::InvalidProfile { .. }
            | ResolveError::ConfigError { .. }
            | ResolveError::TomlError(_) => ErrorCategory::Configuration,
            ResolveError::IoError(_) | ResolveError::SerializationError(_) => ErrorCategory::System,
        }
    }

    /// Process exit code reported by the `resolve-env` binary.
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Dependency => 1,
            ErrorCategory::Platform => 2,
            ErrorCategory::Configuration | ErrorCategory::System => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ResolveError::UnknownPlatform { identifier } => {
                format!("No profile is registered for platform '{}'", identifier)
            }
            ResolveError::DependencyNotFound { name, platform } => format!(
                "Could not resolve dependency '{}' for platform '{}'",
                name, platform
            ),
            ResolveError::InvalidDependencyPath { name, path, reason } => format!(
                "Dependency '{}' resolved to '{}', which cannot be used: {}",
                name, path, reason
            ),
            ResolveError::InvalidProfile { identifier, reason } => {
                format!("Profile '{}' is invalid: {}", identifier, reason)
            }
            ResolveError::ConfigError { message } => format!("Configuration problem: {}", message),
            ResolveError::IoError(e) => format!("File system error: {}", e),
            ResolveError::TomlError(e) => format!("Profile file is not valid TOML: {}", e),
            ResolveError::SerializationError(e) => format!("Could not render output: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ResolveError::UnknownPlatform { .. } => {
                "Run with --list to see the known platforms, or define the profile in a config file"
            }
            ResolveError::DependencyNotFound { .. } => {
                "Add a store root with --store (or RESOLVE_ENV_STORE) or map the name under [lookup.paths]"
            }
            ResolveError::InvalidDependencyPath { .. } => {
                "Move the dependency to a directory without path separators or line breaks"
            }
            ResolveError::InvalidProfile { .. } => {
                "Make dependency names unique and non-empty and give the profile a path variable"
            }
            ResolveError::ConfigError { .. } | ResolveError::TomlError(_) => {
                "Check the profile file syntax against the documented layout"
            }
            ResolveError::IoError(_) => "Check that the file exists and is readable",
            ResolveError::SerializationError(_) => "Try a different --format",
        }
    }
}

pub type Result<T> = std::result::Result<T, ResolveError>;
