//! JDK located through JAVA_HOME

use std::path::PathBuf;
use std::sync::{Arc, LazyLock};

use regex::Regex;
use tracing::debug;

use crate::component::EnvComponent;
use crate::probe::EnvProbe;

static JAVA_VERSION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?m)^JAVA_VERSION="?([0-9][^"\s]*)"#).expect("valid JAVA_VERSION regex")
});

/// Ensures JAVA_HOME points at a JDK of the required major version.
///
/// Like the SDK, a JDK is installed outside the console; only validation does
/// real work.
pub struct JavaEnvironment {
    probe: Arc<dyn EnvProbe>,
    major: u32,
}

impl JavaEnvironment {
    pub fn new(probe: Arc<dyn EnvProbe>, major: u32) -> Self {
        Self { probe, major }
    }

    pub fn required_major(&self) -> u32 {
        self.major
    }
}

/// `JAVA_VERSION` from the contents of a JDK `release` file
pub fn release_version(release: &str) -> Option<&str> {
    JAVA_VERSION
        .captures(release)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Major version of a Java version string.
///
/// Handles "17.0.2", "21" and the legacy "1.8.0_392" form.
pub fn major_version(version: &str) -> Option<u32> {
    if let Some(legacy) = version.strip_prefix("1.") {
        legacy.split(['.', '_']).next()?.parse().ok()
    } else {
        version.split(['.', '+', '-']).next()?.parse().ok()
    }
}

impl EnvComponent for JavaEnvironment {
    fn name(&self) -> &str {
        "Java environment"
    }

    fn validate_pre_set_up(&self) -> bool {
        true
    }

    fn set_up(&self) -> bool {
        true
    }

    fn validate_set_up(&self) -> bool {
        let Some(java_home) = self.probe.var("JAVA_HOME") else {
            println!("JAVA_HOME is not set.");
            return false;
        };

        let jdk = PathBuf::from(&java_home);
        if !self.probe.is_dir(&jdk) {
            println!(
                "JAVA_HOME path '{}' does not exist or is not a directory.",
                java_home
            );
            return false;
        }

        let release_file = jdk.join("release");
        let Some(release) = self.probe.read_to_string(&release_file) else {
            println!("JDK version file '{}' does not exist.", release_file.display());
            return false;
        };

        let Some(version) = release_version(&release) else {
            println!(
                "JDK version file '{}' has no JAVA_VERSION entry.",
                release_file.display()
            );
            return false;
        };
        debug!("JAVA_HOME points to Java {}", version);

        if major_version(version) != Some(self.major) {
            println!(
                "JAVA_HOME points to Java {}, but JDK {} is required.",
                version, self.major
            );
            return false;
        }

        true
    }
}
