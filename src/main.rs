//! smedia - serve the media collection on D-Bus or talk to a running instance.

use std::{error::Error, process};

use clap::Parser;
use smart_media::{
    cli::{Cli, CliService, Commands, formatting::format_error},
    config::Config,
    services::media::{self, MediaService},
    tracing_config,
};
use tracing::{Level, error, info, instrument, span};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    let config = match config {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", format_error(&e.to_string()));
            process::exit(1);
        }
    };

    match cli.command {
        Commands::Serve => {
            let _guard = tracing_config::init_with_file(config.general.log_level)?;
            let _span = span!(Level::INFO, "smedia_serve").entered();

            if let Err(e) = serve(config).await {
                error!(error = %e, "Media service failed");
                eprintln!("{}", format_error(&e.to_string()));
                process::exit(1);
            }
        }
        command => {
            tracing_config::init_cli_mode()?;
            run_cli_command(config, command).await;
        }
    }

    Ok(())
}

/// Registers the media manager and serves until Ctrl+C.
///
/// # Errors
/// Returns error if the bus is unreachable, the name is taken, or releasing
/// the registration fails.
#[instrument(skip(config))]
async fn serve(config: Config) -> Result<(), Box<dyn Error>> {
    let service = MediaService::start(media::Config {
        bus: config.bus,
        media: config.media,
    })
    .await?;

    let registration = service.registration();
    info!(
        name = ?registration.service_name(),
        path = %registration.object_path(),
        "Serving media collection, press Ctrl+C to stop"
    );

    tokio::signal::ctrl_c().await?;
    info!("Shutting down");

    service.stop().await?;
    Ok(())
}

/// Executes a client command and exits non-zero on failure.
async fn run_cli_command(config: Config, command: Commands) {
    let cli_service = CliService::new(config);

    match cli_service.execute(command).await {
        Ok(output) => {
            if !output.trim().is_empty() {
                println!("{output}");
            }
        }
        Err(e) => {
            eprintln!("{}", format_error(&e.to_string()));
            process::exit(1);
        }
    }
}
