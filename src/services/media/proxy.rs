#![allow(missing_docs)]

use zbus::{Result, proxy};

/// Client side of the media manager interface
///
/// Member names match [`MediaInterface`](super::MediaInterface) on the wire.
#[proxy(
    interface = "io.smart.SMedia",
    default_service = "io.smart.SMedia",
    default_path = "/io/smart/OMedia"
)]
pub trait SMedia {
    /// Current collection as JSON array text
    #[zbus(name = "items")]
    fn items(&self) -> Result<String>;

    /// Replace the collection with JSON array text
    #[zbus(name = "setItems")]
    fn set_items(&self, items: &str) -> Result<()>;

    /// Append one JSON object
    #[zbus(name = "appendMovie")]
    fn append_movie(&self, text: &str) -> Result<bool>;

    /// Number of entries in the collection
    #[zbus(name = "numbersOfMovies")]
    fn numbers_of_movies(&self) -> Result<i32>;

    /// Announce the song currently playing
    #[zbus(name = "currentPlayingSong")]
    fn current_playing_song(&self, name: &str) -> Result<bool>;

    /// Announce that playback stopped
    #[zbus(name = "songHasStoppped")]
    fn song_has_stopped(&self) -> Result<bool>;

    #[zbus(signal, name = "preItemAppended")]
    fn pre_item_appended(&self) -> Result<()>;

    #[zbus(signal, name = "postItemAppended")]
    fn post_item_appended(&self) -> Result<()>;

    #[zbus(signal, name = "notifiy")]
    fn notify(&self, code: i32, text: String) -> Result<()>;
}
