use async_trait::async_trait;

use crate::{
    cli::{CliError, Command, CommandResult},
    config::Config,
};

/// Command to print the configuration file JSON schema
pub struct SchemaCommand;

#[async_trait]
impl Command for SchemaCommand {
    async fn execute(&self) -> CommandResult {
        Config::json_schema().map_err(|e| CliError::ConfigError(e.to_string()))
    }
}
