//! # Settings
//!
//! Process-wide settings holder resolving the data and backup directory paths
//! consumed by persistence collaborators. The domain and catalog crates never
//! read these values.
//!
//! Loading is layered: an optional file base (e.g. `settings.toml`) overlaid
//! with `CCRM__`-prefixed environment variables (`CCRM__DATA_DIR`,
//! `CCRM__BACKUP_DIR`), with built-in defaults for anything left unset. A
//! lazily-initialized global serves call sites without an explicit handle.
//!
//! ## Example
//!
//! ```rust
//! use ccrm_settings::Settings;
//!
//! let settings = Settings::default();
//! assert_eq!(settings.data_dir, std::path::PathBuf::from("data"));
//! ```

mod error;

pub use error::SettingsError;

use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use tracing::info;

static GLOBAL: OnceLock<Settings> = OnceLock::new();

/// Directory paths for application data and backups.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub data_dir: PathBuf,
    pub backup_dir: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self { data_dir: PathBuf::from("data"), backup_dir: PathBuf::from("backup") }
    }
}

impl Settings {
    /// Loads settings from an optional file plus environment overrides.
    ///
    /// Layering order: the file base when `path` is given, then environment
    /// variables prefixed `CCRM__`, then defaults for unset fields.
    ///
    /// # Errors
    /// Returns [`SettingsError::Config`] if the file is missing or malformed,
    /// or if an override cannot be deserialized.
    pub fn load(path: Option<impl AsRef<Path>>) -> Result<Self, SettingsError> {
        let mut builder = Config::builder();

        if let Some(path) = &path {
            info!("Loading settings from {}", path.as_ref().display());
            builder = builder.add_source(File::from(path.as_ref()).required(true));
        }

        let settings = builder
            .add_source(Environment::with_prefix("CCRM").separator("__"))
            .build()?
            .try_deserialize::<Self>()?;

        Ok(settings)
    }

    /// Installs `settings` as the process-wide value.
    ///
    /// Must run before the first [`Settings::global`] call, otherwise the
    /// lazily-installed defaults win.
    ///
    /// # Errors
    /// Returns [`SettingsError::AlreadyInitialized`] if a value is already
    /// installed, explicitly or by a prior [`Settings::global`] call.
    pub fn init(settings: Self) -> Result<(), SettingsError> {
        GLOBAL.set(settings).map_err(|_| SettingsError::AlreadyInitialized)
    }

    /// The process-wide settings, lazily initialized with defaults on first
    /// access. Concurrent first calls observe a single value.
    #[must_use]
    pub fn global() -> &'static Self {
        GLOBAL.get_or_init(|| {
            info!("Settings initialized with defaults");
            Self::default()
        })
    }
}
