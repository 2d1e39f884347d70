use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Command-line arguments for `smedia`.
#[derive(Parser, Debug)]
#[command(name = "smedia")]
#[command(about = "Serve or query the smart media collection over D-Bus", version)]
pub struct Cli {
    /// Configuration file to use instead of the default location
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// What to do
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Register the media manager on the bus and serve until interrupted
    Serve,
    /// Print the collection
    Items,
    /// Replace the collection with a JSON array of objects
    SetItems {
        /// JSON array, e.g. '[{"title":"A"}]'
        json: String,
    },
    /// Append one JSON object to the collection
    Append {
        /// JSON object, e.g. '{"title":"A"}'
        json: String,
    },
    /// Print the number of entries
    Count,
    /// Announce the song that started playing
    Playing {
        /// Song name
        name: String,
    },
    /// Announce that playback stopped
    Stopped,
    /// Print signals from the service until interrupted
    Watch,
    /// Inspect configuration
    Config {
        /// Configuration subcommand
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

/// `smedia config` subcommands.
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum ConfigCommands {
    /// Print the effective configuration
    Show,
    /// Print the configuration JSON schema
    Schema,
}
