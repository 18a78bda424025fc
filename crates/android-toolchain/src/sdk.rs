//! Android SDK located through ANDROID_HOME

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::debug;

use crate::component::EnvComponent;
use crate::probe::EnvProbe;

/// Ensures ANDROID_HOME points at an SDK with the required platform.
///
/// The SDK cannot be installed from the console, so pre-setup and setup are
/// no-ops and only validation does real work.
pub struct AndroidSdk {
    probe: Arc<dyn EnvProbe>,
    platform: u32,
}

impl AndroidSdk {
    pub fn new(probe: Arc<dyn EnvProbe>, platform: u32) -> Self {
        Self { probe, platform }
    }

    pub fn platform_dir(sdk: &Path, platform: u32) -> PathBuf {
        sdk.join("platforms").join(format!("android-{}", platform))
    }

    /// Conventional SDK locations, for hints when ANDROID_HOME is unset
    fn sdk_candidates(&self) -> Vec<PathBuf> {
        let mut candidates = Vec::new();

        if let Some(sdk_root) = self.probe.var("ANDROID_SDK_ROOT") {
            candidates.push(PathBuf::from(sdk_root));
        }

        if let Some(home) = dirs::home_dir() {
            if cfg!(target_os = "macos") {
                candidates.push(home.join("Library").join("Android").join("sdk"));
            }
            candidates.push(home.join("Android").join("Sdk"));
            candidates.push(home.join("android-sdk"));
        }

        if cfg!(windows) {
            if let Some(local) = dirs::data_local_dir() {
                candidates.push(local.join("Android").join("Sdk"));
            }
        }

        candidates
    }

    fn suggest_location(&self) {
        if let Some(found) = self
            .sdk_candidates()
            .into_iter()
            .find(|candidate| self.probe.is_dir(candidate))
        {
            println!(
                "An Android SDK was found at '{}'. Point ANDROID_HOME at it.",
                found.display()
            );
        }
    }
}

impl EnvComponent for AndroidSdk {
    fn name(&self) -> &str {
        "Android SDK"
    }

    fn validate_pre_set_up(&self) -> bool {
        true
    }

    fn set_up(&self) -> bool {
        true
    }

    fn validate_set_up(&self) -> bool {
        let Some(android_home) = self.probe.var("ANDROID_HOME") else {
            println!("ANDROID_HOME is not set.");
            self.suggest_location();
            return false;
        };

        let sdk = PathBuf::from(&android_home);
        if !self.probe.is_dir(&sdk) {
            println!(
                "ANDROID_HOME path '{}' does not exist or is not a directory.",
                android_home
            );
            return false;
        }

        let platform = Self::platform_dir(&sdk, self.platform);
        debug!("Checking for Android platform at {:?}", platform);
        if !self.probe.is_dir(&platform) {
            println!(
                "Android SDK platform path '{}' does not exist or is not a directory. \
                 Install 'platforms;android-{}' with sdkmanager.",
                platform.display(),
                self.platform
            );
            return false;
        }

        true
    }
}
