//! Console Configuration
//!
//! Manages all console settings including:
//! - Project layout (core crate, Kotlin wrapper, React Native app)
//! - Environment components and their expectations
//! - Build targets
//! - Interaction preferences

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{CoreError, Result};

/// File name looked up in the project root
pub const CONFIG_FILE_NAME: &str = "devconsole.toml";

/// Environment component selector used by the component factory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ComponentKind {
    /// Rust cross-compilation targets installed through rustup
    RustupTargets,
    /// Binaries installed through `cargo install`
    CargoTools,
    /// Android SDK pointed to by ANDROID_HOME
    AndroidSdk,
    /// JDK pointed to by JAVA_HOME
    Jdk,
}

impl ComponentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentKind::RustupTargets => "rustup-targets",
            ComponentKind::CargoTools => "cargo-tools",
            ComponentKind::AndroidSdk => "android-sdk",
            ComponentKind::Jdk => "jdk",
        }
    }
}

/// Project layout, relative to the project root
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ProjectConfig {
    /// Rust crate cross-compiled with cargo-ndk
    pub core_dir: PathBuf,
    /// Kotlin wrapper library built with the Gradle wrapper
    pub wrapper_dir: PathBuf,
    /// React Native application
    pub app_dir: PathBuf,
    /// Output directory for the native libraries
    pub jni_libs_dir: PathBuf,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            core_dir: PathBuf::from("core"),
            wrapper_dir: PathBuf::from("kotlin-wrapper"),
            app_dir: PathBuf::from("app"),
            jni_libs_dir: PathBuf::from("kotlin-wrapper/src/main/jniLibs"),
        }
    }
}

/// Environment expectations
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ToolchainConfig {
    /// Components checked and set up, in order
    pub components: Vec<ComponentKind>,
    /// Rust target triples that must be installed
    pub rust_targets: Vec<String>,
    /// Packages that must be installed with `cargo install`
    pub cargo_tools: Vec<String>,
    /// Android platform API level that must be present in the SDK
    pub android_platform: u32,
    /// Required JDK major version
    pub jdk_major: u32,
}

impl Default for ToolchainConfig {
    fn default() -> Self {
        Self {
            components: vec![
                ComponentKind::RustupTargets,
                ComponentKind::CargoTools,
                ComponentKind::AndroidSdk,
                ComponentKind::Jdk,
            ],
            rust_targets: vec![
                "aarch64-linux-android".to_string(),
                "armv7-linux-androideabi".to_string(),
                "x86_64-linux-android".to_string(),
            ],
            cargo_tools: vec!["cargo-ndk".to_string(), "typeshare-cli".to_string()],
            android_platform: 24,
            jdk_major: 17,
        }
    }
}

/// Build settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct BuildConfig {
    /// Android ABIs the core crate is built for
    pub abis: Vec<String>,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            abis: vec![
                "arm64-v8a".to_string(),
                "armeabi-v7a".to_string(),
                "x86_64".to_string(),
            ],
        }
    }
}

/// Interaction preferences
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct UiConfig {
    /// Wait for Enter after each menu action before redrawing the menu
    pub pause_after_action: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            pause_after_action: true,
        }
    }
}

/// Main console configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    pub project: ProjectConfig,
    pub toolchain: ToolchainConfig,
    pub build: BuildConfig,
    pub ui: UiConfig,
}

/// Configuration together with where it came from
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: AppConfig,
    /// `None` when built-in defaults are in use
    pub source: Option<PathBuf>,
}

impl AppConfig {
    /// Get the global configuration directory path
    pub fn global_config_dir() -> Option<PathBuf> {
        ProjectDirs::from("dev", "devconsole", "devconsole")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Get the global configuration file path
    pub fn global_config_file() -> Option<PathBuf> {
        Self::global_config_dir().map(|dir| dir.join("config.toml"))
    }

    /// Project-local configuration file path
    pub fn project_config_file(root: &Path) -> PathBuf {
        root.join(CONFIG_FILE_NAME)
    }

    /// Load configuration.
    ///
    /// An explicit path must exist. Otherwise the project file wins over the
    /// global file, and defaults are used when neither exists.
    pub fn load(root: &Path, explicit: Option<&Path>) -> Result<LoadedConfig> {
        if let Some(path) = explicit {
            if !path.is_file() {
                return Err(CoreError::Config(format!(
                    "config file {} does not exist",
                    path.display()
                )));
            }
            return Self::load_file(path);
        }

        let candidates = std::iter::once(Self::project_config_file(root))
            .chain(Self::global_config_file());

        for candidate in candidates {
            if candidate.is_file() {
                return Self::load_file(&candidate);
            }
        }

        info!("No configuration file found, using defaults");
        Ok(LoadedConfig {
            config: AppConfig::default(),
            source: None,
        })
    }

    fn load_file(path: &Path) -> Result<LoadedConfig> {
        debug!("Loading config from {:?}", path);
        let contents = fs::read_to_string(path)?;
        let config = Self::from_toml(&contents).map_err(|source| CoreError::TomlParse {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(LoadedConfig {
            config,
            source: Some(path.to_path_buf()),
        })
    }

    /// Parse configuration from TOML text; missing keys take their defaults
    pub fn from_toml(contents: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    /// Render configuration as TOML
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Save configuration to file
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.to_toml()?)?;
        debug!("Config saved to {:?}", path);
        Ok(())
    }

    /// Write the default configuration into the project root
    pub fn init(root: &Path, force: bool) -> Result<PathBuf> {
        let path = Self::project_config_file(root);
        if path.exists() && !force {
            return Err(CoreError::ConfigExists(path));
        }
        AppConfig::default().save(&path)?;
        info!("Wrote default configuration to {:?}", path);
        Ok(path)
    }
}

impl ProjectConfig {
    pub fn core_path(&self, root: &Path) -> PathBuf {
        root.join(&self.core_dir)
    }

    pub fn wrapper_path(&self, root: &Path) -> PathBuf {
        root.join(&self.wrapper_dir)
    }

    pub fn app_path(&self, root: &Path) -> PathBuf {
        root.join(&self.app_dir)
    }

    pub fn jni_libs_path(&self, root: &Path) -> PathBuf {
        root.join(&self.jni_libs_dir)
    }
}
