//! smart-media - D-Bus service exposing an in-memory list of JSON media entries.
//!
//! A [`MediaManager`](services::media::MediaManager) owns an ordered list of
//! JSON objects. Registered on the bus it becomes `io.smart.SMedia` at
//! `/io/smart/OMedia`, lets other processes read, replace and append to the
//! list, and forwards playback notifications as signals.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use smart_media::services::media::{MediaManager, register};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let connection = zbus::Connection::session().await?;
//! let registration = register(
//!     &connection,
//!     "/io/smart/OMedia",
//!     "io.smart.SMedia",
//!     MediaManager::default(),
//! )
//! .await?;
//!
//! // ... serve until done
//! registration.release().await?;
//! # Ok(())
//! # }
//! ```

/// Configuration schema definitions and validation.
pub mod config;

/// Core error types and result aliases.
pub mod core;

/// Command-line interface.
pub mod cli;

/// Services exposed on or consumed from the bus.
pub mod services;

/// Tracing subscriber setup.
pub mod tracing_config;

/// Re-exported core types for convenience.
pub use crate::core::{Result, SmediaError};
