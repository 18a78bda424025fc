//! Builds the component list from configuration

use std::sync::Arc;

use devconsole_core::config::ToolchainConfig;
use devconsole_core::{ComponentKind, ToolInvoker};
use tracing::debug;

use crate::cargo_tools::CargoTools;
use crate::component::EnvComponent;
use crate::instrument::instrument;
use crate::jdk::JavaEnvironment;
use crate::probe::EnvProbe;
use crate::rustup::RustupTargets;
use crate::sdk::AndroidSdk;

/// Instantiate one instrumented component per configured kind, in
/// configuration order
pub fn build_components(
    config: &ToolchainConfig,
    invoker: Arc<dyn ToolInvoker>,
    probe: Arc<dyn EnvProbe>,
) -> Vec<Box<dyn EnvComponent>> {
    config
        .components
        .iter()
        .map(|kind| {
            debug!("Creating component {}", kind.as_str());
            match kind {
                ComponentKind::RustupTargets => instrument(RustupTargets::new(
                    invoker.clone(),
                    config.rust_targets.clone(),
                )),
                ComponentKind::CargoTools => {
                    instrument(CargoTools::new(invoker.clone(), config.cargo_tools.clone()))
                }
                ComponentKind::AndroidSdk => {
                    instrument(AndroidSdk::new(probe.clone(), config.android_platform))
                }
                ComponentKind::Jdk => instrument(JavaEnvironment::new(probe.clone(), config.jdk_major)),
            }
        })
        .collect()
}
