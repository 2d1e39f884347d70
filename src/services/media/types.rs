use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single media entry.
///
/// Any JSON object is accepted; no particular field is required.
pub type MediaItem = Map<String, Value>;

/// Ordered list of media entries. Duplicates are allowed.
pub type MediaCollection = Vec<MediaItem>;

/// Default object path the media manager is exported at.
pub const DEFAULT_OBJECT_PATH: &str = "/io/smart/OMedia";

/// Default well-known bus name requested by the media manager.
pub const DEFAULT_SERVICE_NAME: &str = "io.smart.SMedia";

/// Code carried by the `notifiy` signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum NotifyCode {
    /// Playback state changed (a song started or stopped).
    Playback = 1,
}

impl NotifyCode {
    /// Wire representation of the code.
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl From<NotifyCode> for i32 {
    fn from(code: NotifyCode) -> Self {
        code.as_i32()
    }
}

/// Events published by the media manager.
///
/// Every event is delivered at most once to each subscriber that was
/// listening when it was emitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaEvent {
    /// Emitted right before an item is appended.
    PreItemAppended,

    /// Emitted right after an item was appended.
    PostItemAppended,

    /// Playback notification.
    Notify {
        /// Notification code
        code: i32,
        /// Song name, empty when playback stopped
        text: String,
    },
}

impl fmt::Display for MediaEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaEvent::PreItemAppended => write!(f, "preItemAppended"),
            MediaEvent::PostItemAppended => write!(f, "postItemAppended"),
            MediaEvent::Notify { code, text } => write!(f, "notifiy({code}, {text:?})"),
        }
    }
}

/// How `append_movie` treats text that is not a JSON object.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ParsePolicy {
    /// Malformed input is appended as an empty object and reported as success.
    #[default]
    Lenient,

    /// Malformed input is rejected and nothing is appended.
    Strict,
}

impl fmt::Display for ParsePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParsePolicy::Lenient => write!(f, "lenient"),
            ParsePolicy::Strict => write!(f, "strict"),
        }
    }
}
