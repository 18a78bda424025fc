//! Environment component contract
//!
//! A component owns the knowledge about one external dependency of the
//! project (a toolchain target set, an SDK, a JDK) and exposes the same three
//! idempotent operations for each of them.

use std::fmt;

use serde::Serialize;

/// One external environment dependency
pub trait EnvComponent {
    /// Display name used in status output
    fn name(&self) -> &str;

    /// Whether setup can run at all. Never mutates anything.
    fn validate_pre_set_up(&self) -> bool;

    /// Install or configure the component. Safe to run again.
    fn set_up(&self) -> bool;

    /// Whether the component's end state already holds. Never mutates anything.
    fn validate_set_up(&self) -> bool;
}

impl<C: EnvComponent + ?Sized> EnvComponent for Box<C> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn validate_pre_set_up(&self) -> bool {
        (**self).validate_pre_set_up()
    }

    fn set_up(&self) -> bool {
        (**self).set_up()
    }

    fn validate_set_up(&self) -> bool {
        (**self).validate_set_up()
    }
}

/// Lifecycle phase of a component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Phase {
    PreSetUpValidation,
    SetUp,
    SetUpValidation,
}

impl Phase {
    pub fn label(&self) -> &'static str {
        match self {
            Phase::PreSetUpValidation => "pre-setup validation",
            Phase::SetUp => "setup",
            Phase::SetUpValidation => "setup validation",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// First token of every unindented, non-empty line.
///
/// Matches `rustup target list --installed` and the package lines of
/// `cargo install --list`; the indented binary lines are skipped.
pub(crate) fn listed_names(output: &str) -> Vec<&str> {
    output
        .lines()
        .filter(|line| !line.starts_with(char::is_whitespace))
        .filter_map(|line| line.split_whitespace().next())
        .collect()
}
