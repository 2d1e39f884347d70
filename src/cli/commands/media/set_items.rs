use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    cli::{CliError, Command, CommandResult},
    config::BusConfig,
    services::media::{
        client,
        codec::{decode_items, encode_items},
    },
};

/// Command to replace the remote collection
///
/// The argument must be a JSON array of objects. It is checked locally so
/// that malformed input never reaches the service.
pub struct SetItemsCommand {
    bus: Arc<BusConfig>,
    json: String,
}

impl SetItemsCommand {
    /// Creates a new SetItemsCommand
    pub fn new(bus: Arc<BusConfig>, json: String) -> Self {
        Self { bus, json }
    }
}

#[async_trait]
impl Command for SetItemsCommand {
    async fn execute(&self) -> CommandResult {
        let items = decode_items(&self.json)
            .map_err(|e| CliError::InvalidArguments(format!("<json-array>: {e}")))?;

        let proxy = client(&self.bus).await?;
        proxy.set_items(&encode_items(&items)?).await?;

        Ok(format!("Replaced collection with {} item(s)", items.len()))
    }
}
