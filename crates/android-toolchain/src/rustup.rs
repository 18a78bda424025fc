//! Rust cross-compilation targets installed through rustup

use std::sync::Arc;

use devconsole_core::{ToolCommand, ToolInvoker};
use tracing::debug;

use crate::component::{listed_names, EnvComponent};

/// Ensures every configured target triple is installed
pub struct RustupTargets {
    invoker: Arc<dyn ToolInvoker>,
    targets: Vec<String>,
}

impl RustupTargets {
    pub fn new(invoker: Arc<dyn ToolInvoker>, targets: Vec<String>) -> Self {
        Self { invoker, targets }
    }

    pub fn targets(&self) -> &[String] {
        &self.targets
    }

    /// Targets not present in `rustup target list --installed`, `None` if
    /// the listing itself failed
    fn missing_targets(&self) -> Option<Vec<&str>> {
        let listing = self.invoker.invoke(
            &ToolCommand::new("rustup")
                .args(["target", "list", "--installed"])
                .quiet(),
        );
        if !listing.success() {
            println!(
                "❌ Failed to list rustup targets: {}",
                listing.failure_reason()
            );
            return None;
        }

        let installed = listed_names(&listing.stdout);
        debug!("Installed rustup targets: {:?}", installed);
        Some(
            self.targets
                .iter()
                .map(String::as_str)
                .filter(|target| !installed.contains(target))
                .collect(),
        )
    }
}

impl EnvComponent for RustupTargets {
    fn name(&self) -> &str {
        "Rustup Android targets"
    }

    fn validate_pre_set_up(&self) -> bool {
        let version = self
            .invoker
            .invoke(&ToolCommand::new("rustup").arg("--version").quiet());
        if !version.success() {
            println!("❌ Rustup is not installed or not found in PATH.");
        }
        version.success()
    }

    fn set_up(&self) -> bool {
        if self.targets.is_empty() {
            return true;
        }
        self.invoker
            .invoke(
                &ToolCommand::new("rustup")
                    .args(["target", "add"])
                    .args(self.targets.iter().cloned()),
            )
            .success()
    }

    fn validate_set_up(&self) -> bool {
        match self.missing_targets() {
            Some(missing) => {
                for target in &missing {
                    println!("❌ Target {} is not installed.", target);
                }
                missing.is_empty()
            }
            None => false,
        }
    }
}
