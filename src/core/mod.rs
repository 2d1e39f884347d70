use std::{io, path::Path, path::PathBuf};

use thiserror::Error;

/// Configuration failures for smedia.
///
/// Bus and collection errors live in
/// [`MediaError`](crate::services::media::MediaError).
#[derive(Error, Debug)]
pub enum SmediaError {
    /// Neither `XDG_CONFIG_HOME` nor `HOME` gives a config directory
    #[error("cannot locate the smedia config directory")]
    ConfigLocation(#[source] io::Error),

    /// Config file exists but could not be read
    #[error("cannot read config file '{}'", path.display())]
    ConfigRead {
        /// File that failed to read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Config text is not valid TOML for the schema
    #[error("invalid config in {location}: {details}")]
    ConfigSyntax {
        /// File path, or `<inline>` for text not read from a file
        location: String,
        /// Parser message
        details: String,
    },

    /// A field parsed but holds an unusable value
    #[error("[{section}] {field}: {reason}")]
    InvalidField {
        /// Config section, e.g. `bus`
        section: &'static str,
        /// Field within the section
        field: &'static str,
        /// Why the value was rejected
        reason: String,
    },

    /// The JSON schema could not be rendered
    #[error("cannot render config schema")]
    Schema(#[from] serde_json::Error),
}

/// A specialized `Result` type for smedia operations.
pub type Result<T> = std::result::Result<T, SmediaError>;

impl SmediaError {
    /// Wraps a TOML error, naming the file it came from if any.
    pub fn syntax(error: &toml::de::Error, path: Option<&Path>) -> Self {
        let location = path.map_or_else(
            || "<inline>".to_string(),
            |p| p.display().to_string(),
        );

        SmediaError::ConfigSyntax {
            location,
            details: error.to_string(),
        }
    }

    pub(crate) fn invalid_field(
        section: &'static str,
        field: &'static str,
        reason: impl ToString,
    ) -> Self {
        SmediaError::InvalidField {
            section,
            field,
            reason: reason.to_string(),
        }
    }
}
