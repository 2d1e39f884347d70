use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    cli::{Command, CommandResult, formatting::format_bool},
    config::BusConfig,
    services::media::client,
};

/// Command to announce the song that started playing
pub struct PlayingCommand {
    bus: Arc<BusConfig>,
    name: String,
}

impl PlayingCommand {
    /// Creates a new PlayingCommand
    pub fn new(bus: Arc<BusConfig>, name: String) -> Self {
        Self { bus, name }
    }
}

#[async_trait]
impl Command for PlayingCommand {
    async fn execute(&self) -> CommandResult {
        let proxy = client(&self.bus).await?;
        let result = proxy.current_playing_song(&self.name).await?;

        Ok(format_bool(result))
    }
}
