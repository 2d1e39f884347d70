use async_trait::async_trait;
use thiserror::Error;

use crate::services::media::MediaError;

/// Errors that can occur during CLI command execution.
#[derive(Error, Debug)]
pub enum CliError {
    /// Invalid arguments were provided to a command.
    ///
    /// Returned when an argument is rejected locally, before anything is
    /// sent over the bus.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// An error occurred in the configuration system.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// The media service could not be reached or rejected the call.
    #[error("Service error: {0}")]
    ServiceError(String),

    /// A result could not be rendered for display.
    #[error("Output error: {0}")]
    OutputError(#[from] serde_json::Error),

    /// An I/O operation failed.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl From<MediaError> for CliError {
    fn from(error: MediaError) -> Self {
        match error {
            MediaError::InvalidItem(details) => CliError::InvalidArguments(details),
            other => CliError::ServiceError(other.to_string()),
        }
    }
}

impl From<zbus::Error> for CliError {
    fn from(error: zbus::Error) -> Self {
        CliError::ServiceError(error.to_string())
    }
}

/// Type alias for command execution results.
///
/// All CLI commands return either the text to print on success or a
/// CliError describing what went wrong.
pub type CommandResult = Result<String, CliError>;

/// Trait implemented by every CLI command.
///
/// Commands receive their arguments and dependencies through their
/// constructors.
#[async_trait]
pub trait Command: Send + Sync {
    /// Executes the command.
    ///
    /// # Errors
    ///
    /// Returns `CliError` for invalid arguments, an unreachable service, or
    /// a call rejected by the service.
    async fn execute(&self) -> CommandResult;
}
