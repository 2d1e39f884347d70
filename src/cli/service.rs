use std::sync::Arc;

use crate::config::Config;

use super::{
    CliError, Command, CommandResult,
    args::{Commands, ConfigCommands},
    commands::{config, media},
};

/// Runs client-side commands against a media service.
pub struct CliService {
    config: Arc<Config>,
}

impl CliService {
    /// Creates a new CLI service for the given configuration.
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Builds the command handler for a parsed subcommand.
    ///
    /// Returns `None` for [`Commands::Serve`], which is not a client command.
    pub fn command_for(&self, command: Commands) -> Option<Box<dyn Command>> {
        let bus = Arc::new(self.config.bus.clone());

        let command: Box<dyn Command> = match command {
            Commands::Serve => return None,
            Commands::Items => Box::new(media::ItemsCommand::new(bus)),
            Commands::SetItems { json } => Box::new(media::SetItemsCommand::new(bus, json)),
            Commands::Append { json } => Box::new(media::AppendCommand::new(bus, json)),
            Commands::Count => Box::new(media::CountCommand::new(bus)),
            Commands::Playing { name } => Box::new(media::PlayingCommand::new(bus, name)),
            Commands::Stopped => Box::new(media::StoppedCommand::new(bus)),
            Commands::Watch => Box::new(media::WatchCommand::new(bus)),
            Commands::Config { command } => match command {
                ConfigCommands::Show => Box::new(config::ShowCommand::new(self.config.clone())),
                ConfigCommands::Schema => Box::new(config::SchemaCommand),
            },
        };

        Some(command)
    }

    /// Executes a client-side subcommand.
    ///
    /// # Errors
    /// Returns `CliError::InvalidArguments` for [`Commands::Serve`] and
    /// whatever the command itself returns otherwise.
    pub async fn execute(&self, command: Commands) -> CommandResult {
        let handler = self.command_for(command).ok_or_else(|| {
            CliError::InvalidArguments("'serve' is not a client command".to_string())
        })?;

        handler.execute().await
    }
}
