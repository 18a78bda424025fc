//! Build Variants
//!
//! Debug/release selection shared by the core and wrapper builds.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Build variant (debug/release)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildVariant {
    #[default]
    Debug,
    Release,
}

impl BuildVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            BuildVariant::Debug => "debug",
            BuildVariant::Release => "release",
        }
    }

    pub fn cargo_flag(&self) -> Option<&'static str> {
        match self {
            BuildVariant::Debug => None,
            BuildVariant::Release => Some("--release"),
        }
    }

    /// Root project assemble task, e.g. `:assembleDebug`
    pub fn gradle_task(&self) -> &'static str {
        match self {
            BuildVariant::Debug => ":assembleDebug",
            BuildVariant::Release => ":assembleRelease",
        }
    }

    pub fn all() -> &'static [BuildVariant] {
        &[BuildVariant::Debug, BuildVariant::Release]
    }
}

impl fmt::Display for BuildVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
