//! Unit tests for CLI module
//!
//! Tests argument parsing, formatting and the commands that don't need a
//! running bus.

use clap::Parser;
use serde_json::json;

use crate::{
    cli::{
        Cli, CliError, CliService, Commands, ConfigCommands,
        formatting::{format_bool, format_event, format_items},
    },
    config::Config,
    services::media::{MediaEvent, codec::decode_items},
};

#[test]
fn parses_serve() {
    let cli = Cli::try_parse_from(["smedia", "serve"]).unwrap();
    assert_eq!(cli.command, Commands::Serve);
    assert!(cli.config.is_none());
}

#[test]
fn parses_append_with_global_config() {
    let cli =
        Cli::try_parse_from(["smedia", "append", r#"{"title":"A"}"#, "--config", "/tmp/c.toml"])
            .unwrap();

    assert_eq!(
        cli.command,
        Commands::Append {
            json: r#"{"title":"A"}"#.to_string()
        }
    );
    assert_eq!(cli.config.unwrap().to_str(), Some("/tmp/c.toml"));
}

#[test]
fn parses_kebab_case_subcommands() {
    let cli = Cli::try_parse_from(["smedia", "set-items", "[]"]).unwrap();
    assert_eq!(
        cli.command,
        Commands::SetItems {
            json: "[]".to_string()
        }
    );

    let cli = Cli::try_parse_from(["smedia", "config", "schema"]).unwrap();
    assert_eq!(
        cli.command,
        Commands::Config {
            command: ConfigCommands::Schema
        }
    );
}

#[test]
fn playing_requires_a_name() {
    assert!(Cli::try_parse_from(["smedia", "playing"]).is_err());
}

#[test]
fn rejects_unknown_subcommand() {
    assert!(Cli::try_parse_from(["smedia", "remove"]).is_err());
}

#[test]
fn format_bool_marks_value() {
    assert!(format_bool(true).contains("true"));
    assert!(format_bool(false).contains("false"));
}

#[test]
fn format_items_includes_count_and_body() {
    let items = decode_items(r#"[{"title":"A"},{"title":"B"}]"#).unwrap();
    let output = format_items(&items).unwrap();

    assert!(output.contains("2 media item(s)"));
    assert!(output.contains("\"title\": \"A\""));
}

#[test]
fn format_items_of_empty_collection() {
    let output = format_items(&Vec::new()).unwrap();

    assert!(output.contains("0 media item(s)"));
    assert!(output.ends_with("[]"));
}

#[test]
fn serialization_failures_surface_as_output_errors() {
    let error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let cli_error = CliError::from(error);

    assert!(matches!(cli_error, CliError::OutputError(_)));
    assert!(cli_error.to_string().starts_with("Output error"));
}

#[test]
fn format_event_names_signals() {
    assert!(format_event(&MediaEvent::PreItemAppended).contains("preItemAppended"));
    assert!(format_event(&MediaEvent::PostItemAppended).contains("postItemAppended"));

    let playing = format_event(&MediaEvent::Notify {
        code: 1,
        text: "Song X".to_string(),
    });
    assert!(playing.contains("code=1"));
    assert!(playing.contains("\"Song X\""));

    let stopped = format_event(&MediaEvent::Notify {
        code: 1,
        text: String::new(),
    });
    assert!(stopped.contains("(stopped)"));
}

#[test]
fn serve_is_not_a_client_command() {
    let service = CliService::new(Config::default());
    assert!(service.command_for(Commands::Serve).is_none());
    assert!(service.command_for(Commands::Count).is_some());
}

#[tokio::test]
async fn execute_serve_is_rejected() {
    let service = CliService::new(Config::default());
    let err = service.execute(Commands::Serve).await.unwrap_err();
    assert!(matches!(err, CliError::InvalidArguments(_)));
}

#[tokio::test]
async fn set_items_validates_before_connecting() {
    let service = CliService::new(Config::default());

    let err = service
        .execute(Commands::SetItems {
            json: json!({"title": "not an array"}).to_string(),
        })
        .await
        .unwrap_err();

    assert!(matches!(err, CliError::InvalidArguments(_)));
}

#[tokio::test]
async fn config_show_prints_effective_config() {
    let mut config = Config::default();
    config.bus.service_name = "org.example.Media".to_string();
    let service = CliService::new(config);

    let output = service
        .execute(Commands::Config {
            command: ConfigCommands::Show,
        })
        .await
        .unwrap();

    assert!(output.contains("service_name = \"org.example.Media\""));
}

#[tokio::test]
async fn config_schema_is_json() {
    let service = CliService::new(Config::default());

    let output = service
        .execute(Commands::Config {
            command: ConfigCommands::Schema,
        })
        .await
        .unwrap();

    let schema: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert!(schema.is_object());
}
