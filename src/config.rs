use config::{Config, ConfigError, File, FileFormat};
use serde::Deserialize;
use thiserror::Error;

const DEFAULT_CONFIG_PATH: &str = "config.toml";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Configuration loading failed: {0}")]
    Load(#[from] ConfigError)
}

/// Runtime settings for the order filter server. Every field has a default,
/// so a settings file only needs the keys it wants to override.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    /// CSV file of sales line items, read on every request.
    pub dataset_path: String,
    /// One of error, warn, info, debug, trace.
    pub log_level: String
}

impl Settings {
    /// Loads settings from `config_path`, which must exist when given.
    ///
    /// Without a path `config.toml` is read if present; if it cannot be read the
    /// defaults are used instead.
    pub fn load(config_path: Option<&str>) -> Result<Self, SettingsError> {
        match Self::load_from_file(config_path) {
            Ok(settings) => Ok(settings),
            Err(error) if config_path.is_none() => {
                //NOTE: Logging is configured from these settings, so it is not available yet
                eprintln!("Could not read {DEFAULT_CONFIG_PATH}: {error}. Using default configuration.");
                Ok(Self::default())
            }
            Err(error) => Err(error)
        }
    }

    fn load_from_file(config_path: Option<&str>) -> Result<Self, SettingsError> {
        let path = config_path.unwrap_or(DEFAULT_CONFIG_PATH);

        let settings = Config::builder()
            .add_source(File::new(path, FileFormat::Toml).required(config_path.is_some()))
            .build()?
            .try_deserialize::<Settings>()?;

        Ok(settings)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 9000,
            dataset_path: "dataset/SalesTransactions.csv".to_string(),
            log_level: "info".to_string()
        }
    }
}
