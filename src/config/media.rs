use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::services::media::{DEFAULT_EVENT_CAPACITY, ParsePolicy};

/// Media collection configuration
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(default)]
pub struct MediaConfig {
    /// How `appendMovie` treats text that is not a JSON object.
    pub parse_policy: ParsePolicy,

    /// Events buffered per subscriber before older ones are dropped.
    pub event_capacity: usize,
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self {
            parse_policy: ParsePolicy::default(),
            event_capacity: DEFAULT_EVENT_CAPACITY,
        }
    }
}
