use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    cli::{Command, CommandResult, formatting::format_bool},
    config::BusConfig,
    services::media::client,
};

/// Command to append one JSON object to the remote collection
///
/// The text is forwarded as is; the service decides how to treat malformed
/// input according to its parse policy.
pub struct AppendCommand {
    bus: Arc<BusConfig>,
    json: String,
}

impl AppendCommand {
    /// Creates a new AppendCommand
    pub fn new(bus: Arc<BusConfig>, json: String) -> Self {
        Self { bus, json }
    }
}

#[async_trait]
impl Command for AppendCommand {
    async fn execute(&self) -> CommandResult {
        let proxy = client(&self.bus).await?;
        let appended = proxy.append_movie(&self.json).await?;

        Ok(format_bool(appended))
    }
}
