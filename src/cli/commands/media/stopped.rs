use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    cli::{Command, CommandResult, formatting::format_bool},
    config::BusConfig,
    services::media::client,
};

/// Command to announce that playback stopped
///
/// The service answers `false` on success.
pub struct StoppedCommand {
    bus: Arc<BusConfig>,
}

impl StoppedCommand {
    /// Creates a new StoppedCommand
    pub fn new(bus: Arc<BusConfig>) -> Self {
        Self { bus }
    }
}

#[async_trait]
impl Command for StoppedCommand {
    async fn execute(&self) -> CommandResult {
        let proxy = client(&self.bus).await?;
        let result = proxy.song_has_stopped().await?;

        Ok(format_bool(result))
    }
}
