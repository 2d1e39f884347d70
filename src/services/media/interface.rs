use tracing::{debug, warn};
use zbus::{fdo, interface, object_server::SignalEmitter};

use super::{
    MediaManager, NotifyCode,
    codec::{decode_items, encode_items, parse_item},
};

/// Bus adapter exporting a [`MediaManager`].
///
/// Member names are camelCase on the wire to stay compatible with existing
/// subscribers, including the misspelled `notifiy` signal and the
/// `songHasStoppped` method. Signals are sent from within the method call,
/// so a caller sees them before the reply.
#[derive(Debug)]
pub struct MediaInterface {
    manager: MediaManager,
}

impl MediaInterface {
    /// Wraps a manager for export.
    pub fn new(manager: MediaManager) -> Self {
        Self { manager }
    }

    /// The wrapped manager.
    ///
    /// Reach it through the object server's interface reference to inspect
    /// the collection or subscribe to its events in-process.
    pub fn manager(&self) -> &MediaManager {
        &self.manager
    }
}

fn log_emit_failure(signal: &str, result: zbus::Result<()>) {
    if let Err(e) = result {
        warn!(signal, error = %e, "Failed to emit media signal");
    }
}

#[interface(name = "io.smart.SMedia")]
impl MediaInterface {
    /// Current collection as a JSON array.
    #[zbus(name = "items")]
    fn items(&self) -> fdo::Result<String> {
        Ok(encode_items(&self.manager.items())?)
    }

    /// Replaces the collection with a JSON array of objects.
    #[zbus(name = "setItems")]
    fn set_items(&mut self, items: String) -> fdo::Result<()> {
        let items = decode_items(&items)?;
        self.manager.set_items(items);
        Ok(())
    }

    /// Appends a JSON object.
    #[zbus(name = "appendMovie")]
    async fn append_movie(
        &mut self,
        text: String,
        #[zbus(signal_emitter)] emitter: SignalEmitter<'_>,
    ) -> fdo::Result<bool> {
        let item = parse_item(&text, self.manager.policy())?;

        log_emit_failure("preItemAppended", Self::pre_item_appended(&emitter).await);
        let appended = self.manager.append_item(item);
        log_emit_failure("postItemAppended", Self::post_item_appended(&emitter).await);

        Ok(appended)
    }

    /// Number of entries.
    #[zbus(name = "numbersOfMovies")]
    fn numbers_of_movies(&self) -> i32 {
        i32::try_from(self.manager.numbers_of_movies()).unwrap_or(i32::MAX)
    }

    #[zbus(name = "currentPlayingSong")]
    async fn current_playing_song(
        &self,
        name: String,
        #[zbus(signal_emitter)] emitter: SignalEmitter<'_>,
    ) -> bool {
        debug!(%name, "Now playing");
        let result = self.manager.current_playing_song(&name);
        log_emit_failure(
            "notifiy",
            Self::notify(&emitter, NotifyCode::Playback.as_i32(), &name).await,
        );
        result
    }

    #[zbus(name = "songHasStoppped")]
    async fn song_has_stopped(&self, #[zbus(signal_emitter)] emitter: SignalEmitter<'_>) -> bool {
        debug!("Playback stopped");
        let result = self.manager.song_has_stopped();
        log_emit_failure(
            "notifiy",
            Self::notify(&emitter, NotifyCode::Playback.as_i32(), "").await,
        );
        result
    }

    /// Emitted before an item is appended.
    #[zbus(signal, name = "preItemAppended")]
    pub async fn pre_item_appended(emitter: &SignalEmitter<'_>) -> zbus::Result<()>;

    /// Emitted after an item was appended.
    #[zbus(signal, name = "postItemAppended")]
    pub async fn post_item_appended(emitter: &SignalEmitter<'_>) -> zbus::Result<()>;

    /// Playback notification.
    #[zbus(signal, name = "notifiy")]
    pub async fn notify(emitter: &SignalEmitter<'_>, code: i32, text: &str) -> zbus::Result<()>;
}
