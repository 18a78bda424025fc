//! Android development environment
//!
//! Components for every external dependency an Android build of the project
//! needs:
//! - Rust cross-compilation targets (rustup)
//! - Cargo-installed tools (cargo-ndk, typeshare-cli)
//! - Android SDK platform
//! - JDK
//!
//! and the orchestrator that validates and sets them up.

pub mod cargo_tools;
pub mod component;
pub mod factory;
pub mod instrument;
pub mod jdk;
pub mod orchestrator;
pub mod probe;
pub mod rustup;
pub mod sdk;

#[cfg(test)]
mod testing;

pub use cargo_tools::CargoTools;
pub use component::{EnvComponent, Phase};
pub use factory::build_components;
pub use instrument::{instrument, Instrumented};
pub use jdk::JavaEnvironment;
pub use orchestrator::{ComponentOutcome, EnvironmentOrchestrator, EnvironmentRunReport, RunOutcome};
pub use probe::{EnvProbe, SystemProbe};
pub use rustup::RustupTargets;
pub use sdk::AndroidSdk;
