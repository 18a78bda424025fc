//! devconsole - developer console for a Rust + Kotlin + React Native
//! Android project
//!
//! ## Architecture
//!
//! devconsole is organized into specialized crates:
//!
//! - `devconsole-core`: configuration, tool invocation, status text
//! - `devconsole-menu`: menu registries, pickers and the menu loop
//! - `devconsole-android-toolchain`: environment components and orchestration
//! - `devconsole-build-engine`: core, wrapper and app build steps
//!
//! This crate ties them together into the interactive console and the
//! non-interactive commands.

pub mod commands;
pub mod console;

// Re-export main components for library usage
pub use devconsole_android_toolchain as toolchain;
pub use devconsole_build_engine as build;
pub use devconsole_core as core;
pub use devconsole_menu as menu;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use devconsole_android_toolchain::{build_components, EnvProbe, EnvironmentOrchestrator};
use devconsole_build_engine::BuildRunner;
use devconsole_core::{AppConfig, LoadedConfig, ToolInvoker};

/// Everything one console run works against
pub struct Session {
    root: PathBuf,
    config: AppConfig,
    config_source: Option<PathBuf>,
    invoker: Arc<dyn ToolInvoker>,
    probe: Arc<dyn EnvProbe>,
}

impl Session {
    pub fn new(
        root: impl Into<PathBuf>,
        loaded: LoadedConfig,
        invoker: Arc<dyn ToolInvoker>,
        probe: Arc<dyn EnvProbe>,
    ) -> Self {
        Self {
            root: root.into(),
            config: loaded.config,
            config_source: loaded.source,
            invoker,
            probe,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// File the configuration was read from, `None` for built-in defaults
    pub fn config_source(&self) -> Option<&Path> {
        self.config_source.as_deref()
    }

    /// Fresh components for one orchestration run
    pub fn orchestrator(&self) -> EnvironmentOrchestrator {
        EnvironmentOrchestrator::new(build_components(
            &self.config.toolchain,
            self.invoker.clone(),
            self.probe.clone(),
        ))
    }

    pub fn build_runner(&self) -> BuildRunner {
        BuildRunner::new(self.invoker.clone(), &self.root, self.config.clone())
    }
}
