use std::sync::Arc;

use async_trait::async_trait;
use futures::StreamExt;

use crate::{
    cli::{CliError, Command, CommandResult, formatting::format_event},
    config::BusConfig,
    services::media::{MediaEvent, client},
};

/// Command to print every signal emitted by the service until Ctrl+C
pub struct WatchCommand {
    bus: Arc<BusConfig>,
}

impl WatchCommand {
    /// Creates a new WatchCommand
    pub fn new(bus: Arc<BusConfig>) -> Self {
        Self { bus }
    }
}

#[async_trait]
impl Command for WatchCommand {
    async fn execute(&self) -> CommandResult {
        let proxy = client(&self.bus).await?;

        let mut pre = proxy.receive_pre_item_appended().await?;
        let mut post = proxy.receive_post_item_appended().await?;
        let mut notify = proxy.receive_notify().await?;

        println!(
            "Watching {} on {}...",
            self.bus.service_name, self.bus.object_path
        );
        println!("Press Ctrl+C to stop");

        loop {
            let event = tokio::select! {
                Some(_) = pre.next() => MediaEvent::PreItemAppended,
                Some(_) = post.next() => MediaEvent::PostItemAppended,
                Some(signal) = notify.next() => {
                    let args = signal.args().map_err(CliError::from)?;
                    MediaEvent::Notify { code: *args.code(), text: args.text().clone() }
                }
                result = tokio::signal::ctrl_c() => {
                    result?;
                    break;
                }
                else => break,
            };

            println!("{}", format_event(&event));
        }

        Ok("Watch ended".to_string())
    }
}
