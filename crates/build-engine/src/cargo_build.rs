//! Core crate build
//!
//! Cross-compiles the Rust core for every Android ABI with cargo-ndk and
//! drops the shared libraries into the wrapper's jniLibs directory.

use std::path::PathBuf;
use std::sync::Arc;

use devconsole_core::{ToolCommand, ToolInvoker};
use tracing::{debug, info};

use crate::{require_dir, BuildError, BuildVariant, Result};

/// cargo-ndk build of the core crate
pub struct CoreBuild {
    invoker: Arc<dyn ToolInvoker>,
    core_dir: PathBuf,
    jni_libs_dir: PathBuf,
    abis: Vec<String>,
}

impl CoreBuild {
    pub fn new(
        invoker: Arc<dyn ToolInvoker>,
        core_dir: PathBuf,
        jni_libs_dir: PathBuf,
        abis: Vec<String>,
    ) -> Self {
        Self {
            invoker,
            core_dir,
            jni_libs_dir,
            abis,
        }
    }

    /// `cargo ndk -t <abi> -o <jniLibs> build [--release]`
    pub fn command(&self, abi: &str, variant: BuildVariant) -> ToolCommand {
        let mut command = ToolCommand::new("cargo")
            .args(["ndk", "-t", abi, "-o"])
            .arg(self.jni_libs_dir.to_string_lossy())
            .arg("build");
        if let Some(flag) = variant.cargo_flag() {
            command = command.arg(flag);
        }
        command.current_dir(&self.core_dir)
    }

    /// Build every ABI in order, stopping at the first failure
    pub fn build(&self, variant: BuildVariant) -> Result<()> {
        require_dir("Core crate", &self.core_dir)?;

        info!(
            "Building {:?} for {} ABIs (profile: {})",
            self.core_dir,
            self.abis.len(),
            variant
        );
        for abi in &self.abis {
            debug!("Building ABI {}", abi);
            let invocation = self.invoker.invoke(&self.command(abi, variant));
            if !invocation.success() {
                return Err(BuildError::AbiFailed {
                    abi: abi.clone(),
                    reason: invocation.failure_reason(),
                });
            }
        }
        Ok(())
    }
}
