//! Error types for devconsole
//!
//! Centralized error handling using thiserror.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the shared core
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML parse error in {path}: {source}")]
    TomlParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("Config file already exists: {0}")]
    ConfigExists(PathBuf),

    #[error("Runtime error: {0}")]
    Runtime(String),
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, CoreError>;

impl CoreError {
    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            CoreError::Io(e) => format!("File operation failed: {}", e),
            CoreError::TomlParse { path, source } => {
                format!("Could not read {}: {}", path.display(), source.message())
            }
            CoreError::ConfigExists(path) => {
                format!("{} already exists (use --force to overwrite)", path.display())
            }
            _ => self.to_string(),
        }
    }
}
