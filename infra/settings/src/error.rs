use thiserror::Error;

/// A specialized [`SettingsError`] enum of this crate.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// Failure while reading or deserializing layered configuration.
    #[error("Settings load error: {source}")]
    Config {
        #[from]
        source: config::ConfigError,
    },

    /// The process-wide settings value was installed twice.
    #[error("Settings already initialized for this process")]
    AlreadyInitialized,
}
