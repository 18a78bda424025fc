//! React Native app launch

use std::path::PathBuf;
use std::sync::Arc;

use devconsole_core::{ToolCommand, ToolInvoker};
use tracing::info;

use crate::{require_dir, BuildError, Result};

fn npm() -> &'static str {
    if cfg!(windows) {
        "npm.cmd"
    } else {
        "npm"
    }
}

/// Installs the app's node dependencies and starts it on a device
pub struct AppLauncher {
    invoker: Arc<dyn ToolInvoker>,
    app_dir: PathBuf,
}

impl AppLauncher {
    pub fn new(invoker: Arc<dyn ToolInvoker>, app_dir: PathBuf) -> Self {
        Self { invoker, app_dir }
    }

    /// `npm install`, then `npm run android`
    pub fn launch(&self) -> Result<()> {
        require_dir("App", &self.app_dir)?;

        let steps = [
            ("npm install", ToolCommand::new(npm()).arg("install")),
            ("npm run android", ToolCommand::new(npm()).args(["run", "android"])),
        ];
        for (step, command) in steps {
            info!("{} in {:?}", step, self.app_dir);
            let invocation = self.invoker.invoke(&command.current_dir(&self.app_dir));
            if !invocation.success() {
                return Err(BuildError::StepFailed {
                    step: step.to_string(),
                    reason: invocation.failure_reason(),
                });
            }
        }
        Ok(())
    }
}
