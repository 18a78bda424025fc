//! Build Engine
//!
//! The project's three build steps, each a sequence of external tool
//! invocations:
//! - core crate cross-compiled per ABI with cargo-ndk
//! - Kotlin wrapper assembled with the Gradle wrapper
//! - React Native app installed and launched with npm

pub mod app;
pub mod cargo_build;
pub mod config;
pub mod gradle_build;
pub mod runner;

#[cfg(test)]
mod testing;

pub use app::AppLauncher;
pub use cargo_build::CoreBuild;
pub use config::BuildVariant;
pub use gradle_build::WrapperBuild;
pub use runner::{BuildRunner, BuildTarget};

use std::path::PathBuf;

/// Build errors
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("{what} directory not found at {}", path.display())]
    MissingDirectory { what: String, path: PathBuf },

    #[error("Failed to build for target {abi}: {reason}")]
    AbiFailed { abi: String, reason: String },

    #[error("{step} failed: {reason}")]
    StepFailed { step: String, reason: String },
}

pub type Result<T> = std::result::Result<T, BuildError>;

/// Fail with [`BuildError::MissingDirectory`] unless `path` is a directory
pub(crate) fn require_dir(what: &str, path: &std::path::Path) -> Result<()> {
    if path.is_dir() {
        Ok(())
    } else {
        Err(BuildError::MissingDirectory {
            what: what.to_string(),
            path: path.to_path_buf(),
        })
    }
}
