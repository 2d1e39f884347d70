//! Formatting utilities for CLI output.

use crate::services::media::{MediaCollection, MediaEvent};

/// ANSI color codes for terminal output
pub struct Colors;

impl Colors {
    /// Reset all formatting
    pub const RESET: &'static str = "\x1b[0m";
    /// Bold text
    pub const BOLD: &'static str = "\x1b[1m";
    /// Dim text
    pub const DIM: &'static str = "\x1b[2m";

    /// Red color
    pub const RED: &'static str = "\x1b[31m";
    /// Green color
    pub const GREEN: &'static str = "\x1b[32m";
    /// Yellow color
    pub const YELLOW: &'static str = "\x1b[33m";
    /// Cyan color
    pub const CYAN: &'static str = "\x1b[36m";
}

/// Formats section headers with styling
pub fn format_header(text: &str) -> String {
    format!("{}{}{}{}", Colors::BOLD, Colors::CYAN, text, Colors::RESET)
}

/// Formats error messages with red styling
pub fn format_error(text: &str) -> String {
    format!("{}{}{}{}", Colors::BOLD, Colors::RED, text, Colors::RESET)
}

/// Formats a boolean call result.
pub fn format_bool(value: bool) -> String {
    if value {
        format!("{}true{}", Colors::GREEN, Colors::RESET)
    } else {
        format!("{}false{}", Colors::YELLOW, Colors::RESET)
    }
}

/// Formats a collection as indented JSON, one summary line on top.
///
/// # Errors
/// Returns error if an item cannot be serialized.
pub fn format_items(items: &MediaCollection) -> Result<String, serde_json::Error> {
    let body = serde_json::to_string_pretty(items)?;
    let header = format_header(&format!("{} media item(s)", items.len()));

    Ok(format!("{header}\n{body}"))
}

/// Formats a single event for the watch command.
pub fn format_event(event: &MediaEvent) -> String {
    match event {
        MediaEvent::Notify { code, text } if text.is_empty() => format!(
            "{}notifiy{} code={code} {}(stopped){}",
            Colors::BOLD,
            Colors::RESET,
            Colors::DIM,
            Colors::RESET
        ),
        MediaEvent::Notify { code, text } => format!(
            "{}notifiy{} code={code} text={text:?}",
            Colors::BOLD,
            Colors::RESET
        ),
        other => format!("{}{other}{}", Colors::DIM, Colors::RESET),
    }
}
