//! devconsole core - shared configuration, errors and tool invocation
//!
//! Everything the menu, toolchain and build crates have in common: the
//! console configuration, the [`ToolInvoker`] collaborator used for every
//! external command, and the status text printed after each task.

pub mod config;
pub mod error;
pub mod invoker;
pub mod status;

pub use config::{AppConfig, ComponentKind, LoadedConfig};
pub use error::{CoreError, Result};
pub use invoker::{Invocation, ProcessInvoker, ToolCommand, ToolInvoker};

/// devconsole version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = "devconsole";
