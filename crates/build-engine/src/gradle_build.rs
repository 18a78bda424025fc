//! Kotlin wrapper build through the Gradle wrapper

use std::path::PathBuf;
use std::sync::Arc;

use devconsole_core::{ToolCommand, ToolInvoker};
use tracing::info;

use crate::{require_dir, BuildError, BuildVariant, Result};

/// Gradle build of the wrapper library
pub struct WrapperBuild {
    invoker: Arc<dyn ToolInvoker>,
    wrapper_dir: PathBuf,
}

impl WrapperBuild {
    pub fn new(invoker: Arc<dyn ToolInvoker>, wrapper_dir: PathBuf) -> Self {
        Self {
            invoker,
            wrapper_dir,
        }
    }

    /// Get gradlew path
    pub fn gradlew_path(&self) -> PathBuf {
        let wrapper_name = if cfg!(windows) {
            "gradlew.bat"
        } else {
            "gradlew"
        };
        self.wrapper_dir.join(wrapper_name)
    }

    pub fn command(&self, variant: BuildVariant) -> ToolCommand {
        ToolCommand::new(self.gradlew_path().to_string_lossy())
            .arg(variant.gradle_task())
            .current_dir(&self.wrapper_dir)
    }

    pub fn build(&self, variant: BuildVariant) -> Result<()> {
        require_dir("Kotlin wrapper", &self.wrapper_dir)?;

        info!("Assembling {:?} ({})", self.wrapper_dir, variant);
        let invocation = self.invoker.invoke(&self.command(variant));
        if invocation.success() {
            Ok(())
        } else {
            Err(BuildError::StepFailed {
                step: "Gradle build".to_string(),
                reason: invocation.failure_reason(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingInvoker;

    #[test]
    fn test_assemble_task_per_variant() {
        let build = WrapperBuild::new(Arc::new(RecordingInvoker::default()), PathBuf::from("wrapper"));

        let debug = build.command(BuildVariant::Debug);
        assert_eq!(debug.get_args(), [":assembleDebug".to_string()]);
        assert!(debug.program().contains("gradlew"));

        let release = build.command(BuildVariant::Release);
        assert_eq!(release.get_args(), [":assembleRelease".to_string()]);
    }

    #[test]
    fn test_failed_gradle_run_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let invoker = Arc::new(RecordingInvoker::failing_on(":assembleDebug"));
        let build = WrapperBuild::new(invoker, dir.path().to_path_buf());

        assert!(matches!(
            build.build(BuildVariant::Debug),
            Err(BuildError::StepFailed { .. })
        ));
    }
}
