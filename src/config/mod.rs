//! Configuration schema definitions and validation.
//!
//! Defines the configuration structure for smedia. All configurations are
//! serializable to/from TOML format and every field has a default, so a
//! missing file or a partial file is valid.

mod bus;
mod general;
mod media;
mod paths;

#[cfg(test)]
mod tests;

pub use bus::{BusConfig, BusKind};
pub use general::{GeneralConfig, LogLevel};
pub use media::MediaConfig;
pub use paths::ConfigPaths;

use std::{fs, path::Path};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use zbus::{names::WellKnownName, zvariant::ObjectPath};

use crate::{Result, SmediaError};

/// Main configuration structure.
///
/// Represents the complete configuration schema that can be loaded
/// from TOML files.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Bus connection and registration.
    #[serde(default)]
    pub bus: BusConfig,

    /// Media collection behaviour.
    #[serde(default)]
    pub media: MediaConfig,
}

impl Config {
    /// Loads the configuration from the default location.
    ///
    /// A missing file yields the default configuration.
    ///
    /// # Errors
    /// Returns error if the config directory cannot be determined or the file
    /// exists but is unreadable or invalid.
    pub fn load() -> Result<Self> {
        let path = ConfigPaths::main_config().map_err(SmediaError::ConfigLocation)?;
        Self::load_from(&path)
    }

    /// Loads the configuration from `path`, falling back to defaults if it
    /// doesn't exist.
    ///
    /// # Errors
    /// Returns error if the file is unreadable, not valid TOML, or fails
    /// validation.
    #[instrument]
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("No config file found, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| SmediaError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;

        let config: Self =
            toml::from_str(&content).map_err(|e| SmediaError::syntax(&e, Some(path)))?;
        config.validate()?;

        Ok(config)
    }

    /// Parses and validates configuration from a TOML string.
    ///
    /// # Errors
    /// Returns error if the TOML is invalid or fails validation.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| SmediaError::syntax(&e, None))?;
        config.validate()?;

        Ok(config)
    }

    /// Checks values the type system can't.
    ///
    /// # Errors
    /// Returns `SmediaError::InvalidField` for the first invalid field.
    pub fn validate(&self) -> Result<()> {
        if self.media.event_capacity == 0 {
            return Err(SmediaError::invalid_field(
                "media",
                "event_capacity",
                "must be greater than zero",
            ));
        }

        ObjectPath::try_from(self.bus.object_path.as_str())
            .map_err(|e| SmediaError::invalid_field("bus", "object_path", e))?;
        WellKnownName::try_from(self.bus.service_name.as_str())
            .map_err(|e| SmediaError::invalid_field("bus", "service_name", e))?;

        Ok(())
    }

    /// JSON schema describing the configuration file.
    ///
    /// # Errors
    /// Returns error if the schema cannot be serialized.
    pub fn json_schema() -> Result<String> {
        let schema = schemars::schema_for!(Config);
        Ok(serde_json::to_string_pretty(&schema)?)
    }
}
