//! Read-only access to the ambient environment

use std::fs;
use std::path::Path;

/// Environment variables and filesystem checks used by SDK/JDK components
pub trait EnvProbe: Send + Sync {
    /// Value of a named environment variable, `None` if unset or not unicode
    fn var(&self, name: &str) -> Option<String>;

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn read_to_string(&self, path: &Path) -> Option<String> {
        fs::read_to_string(path).ok()
    }
}

/// [`EnvProbe`] over the real process environment and filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemProbe;

impl EnvProbe for SystemProbe {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok().filter(|v| !v.is_empty())
    }
}
