use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    cli::{CliError, Command, CommandResult},
    config::Config,
};

/// Command to print the effective configuration as TOML
pub struct ShowCommand {
    config: Arc<Config>,
}

impl ShowCommand {
    /// Creates a new ShowCommand
    pub fn new(config: Arc<Config>) -> Self {
        Self { config }
    }
}

#[async_trait]
impl Command for ShowCommand {
    async fn execute(&self) -> CommandResult {
        toml::to_string_pretty(self.config.as_ref())
            .map_err(|e| CliError::ConfigError(e.to_string()))
    }
}
