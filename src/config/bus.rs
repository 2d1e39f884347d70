use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::services::media::{DEFAULT_OBJECT_PATH, DEFAULT_SERVICE_NAME};

/// Which message bus to connect to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum BusKind {
    /// Per-login session bus.
    #[default]
    Session,

    /// System-wide bus.
    System,
}

impl fmt::Display for BusKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BusKind::Session => write!(f, "session"),
            BusKind::System => write!(f, "system"),
        }
    }
}

/// Bus connection and registration settings.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(default)]
pub struct BusConfig {
    /// Bus to connect to when `address` is empty.
    pub kind: BusKind,

    /// Explicit bus address (e.g. `unix:path=/run/user/1000/bus`). Overrides `kind` when set.
    pub address: String,

    /// Object path the media manager is exported at.
    pub object_path: String,

    /// Well-known name requested on the bus.
    pub service_name: String,
}

impl Default for BusConfig {
    fn default() -> Self {
        Self {
            kind: BusKind::default(),
            address: String::new(),
            object_path: DEFAULT_OBJECT_PATH.to_string(),
            service_name: DEFAULT_SERVICE_NAME.to_string(),
        }
    }
}
