//! Media collection service.
//!
//! [`MediaManager`] owns an ordered list of JSON media entries and publishes
//! an event for every append and playback notification. [`register`] exports
//! a manager on the bus as [`MediaInterface`], and [`SMediaProxy`] talks to an
//! exported manager from another process.

/// JSON text encoding used on the bus
pub mod codec;
/// Media service error types
pub mod error;
/// Bus-facing adapter
pub mod interface;
/// Collection owner and event publisher
pub mod manager;
/// D-Bus proxy for remote managers
pub mod proxy;
/// Bus registration capability
pub mod registration;
/// Connection setup and service lifecycle
pub mod service;
/// Media item and event types
pub mod types;

pub use error::*;
pub use interface::MediaInterface;
pub use manager::*;
pub use proxy::*;
pub use registration::{BusTarget, Registration, export, register};
pub use service::{Config, MediaService, client, connect};
pub use types::*;
