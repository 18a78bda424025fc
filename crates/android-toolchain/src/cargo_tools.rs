//! Binaries installed with `cargo install` (cargo-ndk, typeshare-cli, ...)

use std::sync::Arc;

use devconsole_core::{ToolCommand, ToolInvoker};
use tracing::{debug, info};

use crate::component::{listed_names, EnvComponent};

/// Ensures every configured package is installed through cargo
pub struct CargoTools {
    invoker: Arc<dyn ToolInvoker>,
    tools: Vec<String>,
}

impl CargoTools {
    pub fn new(invoker: Arc<dyn ToolInvoker>, tools: Vec<String>) -> Self {
        Self { invoker, tools }
    }

    pub fn tools(&self) -> &[String] {
        &self.tools
    }

    fn missing_tools(&self) -> Option<Vec<&str>> {
        let listing = self
            .invoker
            .invoke(&ToolCommand::new("cargo").args(["install", "--list"]).quiet());
        if !listing.success() {
            println!(
                "❌ Failed to list cargo-installed packages: {}",
                listing.failure_reason()
            );
            return None;
        }

        let installed = listed_names(&listing.stdout);
        debug!("cargo install --list: {:?}", installed);
        Some(
            self.tools
                .iter()
                .map(String::as_str)
                .filter(|tool| !installed.contains(tool))
                .collect(),
        )
    }
}

impl EnvComponent for CargoTools {
    fn name(&self) -> &str {
        "Cargo tools"
    }

    fn validate_pre_set_up(&self) -> bool {
        let version = self.invoker.invoke(&ToolCommand::new("cargo").arg("-V").quiet());
        if !version.success() {
            println!("❌ Cargo is not installed or not found in PATH.");
        }
        version.success()
    }

    fn set_up(&self) -> bool {
        // when the listing fails, installing everything is still correct
        let to_install: Vec<&str> = self
            .missing_tools()
            .unwrap_or_else(|| self.tools.iter().map(String::as_str).collect());

        for tool in to_install {
            info!("Installing {} with cargo", tool);
            let install = self
                .invoker
                .invoke(&ToolCommand::new("cargo").args(["install", tool]));
            if !install.success() {
                println!("❌ Failed to install {}: {}", tool, install.failure_reason());
                return false;
            }
        }
        true
    }

    fn validate_set_up(&self) -> bool {
        match self.missing_tools() {
            Some(missing) => {
                for tool in &missing {
                    println!("❌ {} is not installed (cargo install {}).", tool, tool);
                }
                missing.is_empty()
            }
            None => false,
        }
    }
}
