//! CLI commands for devconsole
//!
//! Non-interactive counterparts of the console's menu actions, for scripts and
//! CI. Every command returns whether it succeeded; the binary maps that to the
//! exit code.

use std::path::PathBuf;

use anyhow::{Context, Result};
use devconsole_android_toolchain::EnvironmentRunReport;
use devconsole_build_engine::{BuildTarget, BuildVariant};
use devconsole_core::AppConfig;
use tracing::info;

use crate::Session;

/// Environment command options
pub struct EnvCommand {
    pub set_up: bool,
    pub json: bool,
}

impl EnvCommand {
    /// Validate or set up the environment
    pub fn execute(&self, session: &Session) -> Result<bool> {
        let orchestrator = session.orchestrator();
        let report = if self.set_up {
            orchestrator.set_up()
        } else {
            orchestrator.validate()
        };

        if self.json {
            println!("{}", render_report(&report)?);
        }
        Ok(report.success)
    }
}

/// Report as one line of JSON, printed after the status text so that the last
/// stdout line is always the report
pub fn render_report(report: &EnvironmentRunReport) -> Result<String> {
    serde_json::to_string(report).context("Failed to serialize report")
}

/// Which part of the project to build
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildSelection {
    Core,
    Wrapper,
    All,
}

/// Build command options
pub struct BuildCommand {
    pub selection: BuildSelection,
    pub release: bool,
}

impl BuildCommand {
    pub fn targets(&self) -> Vec<BuildTarget> {
        let variant = if self.release {
            BuildVariant::Release
        } else {
            BuildVariant::Debug
        };

        match self.selection {
            BuildSelection::Core => vec![BuildTarget::Core(variant)],
            BuildSelection::Wrapper => vec![BuildTarget::Wrapper(variant)],
            BuildSelection::All => vec![BuildTarget::Core(variant), BuildTarget::Wrapper(variant)],
        }
    }

    /// Execute the build command
    pub fn execute(&self, session: &Session) -> Result<bool> {
        let targets = self.targets();
        info!("Building {:?} in {:?}", targets, session.root());
        Ok(session.build_runner().run_all(&targets))
    }
}

/// Run command: install and start the app
pub struct RunCommand;

impl RunCommand {
    pub fn execute(&self, session: &Session) -> Result<bool> {
        Ok(session.build_runner().run_app())
    }
}

/// Write the default configuration into the project root
pub struct ConfigInitCommand {
    pub root: PathBuf,
    pub force: bool,
}

impl ConfigInitCommand {
    pub fn execute(&self) -> Result<bool> {
        let path = AppConfig::init(&self.root, self.force)
            .map_err(|e| anyhow::anyhow!(e.user_message()))?;
        println!("✅ Wrote default configuration to {}", path.display());
        Ok(true)
    }
}

/// Print the effective configuration
pub struct ConfigShowCommand;

impl ConfigShowCommand {
    pub fn execute(&self, session: &Session) -> Result<bool> {
        match session.config_source() {
            Some(path) => println!("# loaded from {}", path.display()),
            None => println!("# built-in defaults"),
        }
        print!("{}", session.config().to_toml()?);
        Ok(true)
    }
}
