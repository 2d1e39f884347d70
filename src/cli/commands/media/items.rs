use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    cli::{Command, CommandResult, formatting::format_items},
    config::BusConfig,
    services::media::{client, codec::decode_items},
};

/// Command to print the remote collection
pub struct ItemsCommand {
    bus: Arc<BusConfig>,
}

impl ItemsCommand {
    /// Creates a new ItemsCommand
    pub fn new(bus: Arc<BusConfig>) -> Self {
        Self { bus }
    }
}

#[async_trait]
impl Command for ItemsCommand {
    async fn execute(&self) -> CommandResult {
        let proxy = client(&self.bus).await?;
        let items = decode_items(&proxy.items().await?)?;

        Ok(format_items(&items)?)
    }
}
