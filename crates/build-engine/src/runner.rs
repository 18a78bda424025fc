//! Build Runner
//!
//! Turns configured build steps into console tasks: every step runs, its
//! error is printed, and the caller only sees whether it succeeded.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use devconsole_core::config::AppConfig;
use devconsole_core::status::report;
use devconsole_core::ToolInvoker;
use tracing::{error, info};

use crate::{AppLauncher, BuildVariant, CoreBuild, Result, WrapperBuild};

/// One selectable build
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildTarget {
    Core(BuildVariant),
    Wrapper(BuildVariant),
}

impl BuildTarget {
    /// Every target, core before wrapper, debug before release
    pub fn all() -> Vec<BuildTarget> {
        let core = BuildVariant::all().iter().map(|v| BuildTarget::Core(*v));
        let wrapper = BuildVariant::all().iter().map(|v| BuildTarget::Wrapper(*v));
        core.chain(wrapper).collect()
    }

    pub fn variant(&self) -> BuildVariant {
        match self {
            BuildTarget::Core(variant) | BuildTarget::Wrapper(variant) => *variant,
        }
    }
}

impl fmt::Display for BuildTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildTarget::Core(variant) => write!(f, "core ({})", variant),
            BuildTarget::Wrapper(variant) => write!(f, "wrapper ({})", variant),
        }
    }
}

/// Build runner that executes targets against one project root
pub struct BuildRunner {
    invoker: Arc<dyn ToolInvoker>,
    root: PathBuf,
    config: AppConfig,
}

impl BuildRunner {
    /// Create a new build runner
    pub fn new(invoker: Arc<dyn ToolInvoker>, root: impl Into<PathBuf>, config: AppConfig) -> Self {
        Self {
            invoker,
            root: root.into(),
            config,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Menu label of a target, e.g. "core -- debug"
    pub fn label(&self, target: BuildTarget) -> String {
        let dir = match target {
            BuildTarget::Core(_) => &self.config.project.core_dir,
            BuildTarget::Wrapper(_) => &self.config.project.wrapper_dir,
        };
        format!("{} -- {}", dir.display(), target.variant())
    }

    fn core_build(&self) -> CoreBuild {
        let project = &self.config.project;
        CoreBuild::new(
            self.invoker.clone(),
            project.core_path(&self.root),
            project.jni_libs_path(&self.root),
            self.config.build.abis.clone(),
        )
    }

    fn wrapper_build(&self) -> WrapperBuild {
        WrapperBuild::new(
            self.invoker.clone(),
            self.config.project.wrapper_path(&self.root),
        )
    }

    fn execute(&self, target: BuildTarget) -> Result<()> {
        match target {
            BuildTarget::Core(variant) => self.core_build().build(variant),
            BuildTarget::Wrapper(variant) => self.wrapper_build().build(variant),
        }
    }

    /// Print the outcome of a step and reduce it to a boolean
    fn conclude(task: &str, result: Result<()>) -> bool {
        if let Err(e) = &result {
            error!("{}: {}", task, e);
            println!("\n❌ {}", e);
        }
        report(task, result.is_ok());
        result.is_ok()
    }

    /// Run one build target
    pub fn run(&self, target: BuildTarget) -> bool {
        let task = format!("Build of {}", self.label(target));
        println!("Building {}...", self.label(target));
        info!("Starting {}", task);
        Self::conclude(&task, self.execute(target))
    }

    /// Run targets in order, continuing past failures
    pub fn run_all(&self, targets: &[BuildTarget]) -> bool {
        targets
            .iter()
            .map(|target| self.run(*target))
            .fold(true, |all, ok| all && ok)
    }

    /// Install and start the app
    pub fn run_app(&self) -> bool {
        let app_dir = self.config.project.app_path(&self.root);
        println!("Running {}...", app_dir.display());
        let launcher = AppLauncher::new(self.invoker.clone(), app_dir);
        Self::conclude("App launch", launcher.launch())
    }
}
