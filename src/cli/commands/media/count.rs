use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    cli::{Command, CommandResult},
    config::BusConfig,
    services::media::client,
};

/// Command to print the number of entries in the remote collection
pub struct CountCommand {
    bus: Arc<BusConfig>,
}

impl CountCommand {
    /// Creates a new CountCommand
    pub fn new(bus: Arc<BusConfig>) -> Self {
        Self { bus }
    }
}

#[async_trait]
impl Command for CountCommand {
    async fn execute(&self) -> CommandResult {
        let proxy = client(&self.bus).await?;
        Ok(proxy.numbers_of_movies().await?.to_string())
    }
}
