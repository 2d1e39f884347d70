use futures::{Stream, StreamExt};
use tokio::sync::broadcast;
use tokio_stream::wrappers::{BroadcastStream, errors::BroadcastStreamRecvError};
use tracing::{debug, instrument, warn};

use super::{
    MediaCollection, MediaError, MediaEvent, MediaItem, NotifyCode, ParsePolicy,
    codec::parse_item,
};

/// Default number of events buffered per subscriber before it starts lagging.
pub const DEFAULT_EVENT_CAPACITY: usize = 64;

/// Owner of the media collection.
///
/// Holds an ordered list of JSON media entries and publishes an event for
/// every append and playback notification to in-process subscribers.
/// Mutation requires `&mut self`; callers that share a manager must
/// serialize access themselves (the bus object server does this for
/// [`MediaInterface`](super::MediaInterface)).
#[derive(Debug)]
pub struct MediaManager {
    items: MediaCollection,
    policy: ParsePolicy,
    events: broadcast::Sender<MediaEvent>,
}

impl Default for MediaManager {
    fn default() -> Self {
        Self::new(ParsePolicy::default(), DEFAULT_EVENT_CAPACITY)
    }
}

impl MediaManager {
    /// Creates a manager with an empty collection.
    ///
    /// `event_capacity` is the per-subscriber event buffer; zero is treated
    /// as one.
    pub fn new(policy: ParsePolicy, event_capacity: usize) -> Self {
        let (events, _) = broadcast::channel(event_capacity.max(1));

        Self {
            items: MediaCollection::new(),
            policy,
            events,
        }
    }

    /// Parse policy applied by [`append_movie`](Self::append_movie).
    pub fn policy(&self) -> ParsePolicy {
        self.policy
    }

    /// Snapshot of the current collection.
    pub fn items(&self) -> MediaCollection {
        self.items.clone()
    }

    /// Replaces the whole collection.
    pub fn set_items(&mut self, items: MediaCollection) {
        debug!(count = items.len(), "Replacing media collection");
        self.items = items;
    }

    /// Appends the JSON object contained in `text`.
    ///
    /// Publishes [`MediaEvent::PreItemAppended`] before the collection
    /// changes and [`MediaEvent::PostItemAppended`] afterwards. Always
    /// returns `true` when the item was appended; under
    /// [`ParsePolicy::Lenient`] malformed text is appended as an empty object.
    ///
    /// # Errors
    ///
    /// Returns `MediaError::InvalidItem` under [`ParsePolicy::Strict`] if
    /// `text` is not a JSON object. No event is published in that case.
    #[instrument(skip(self, text), fields(len = text.len()))]
    pub fn append_movie(&mut self, text: &str) -> Result<bool, MediaError> {
        let item = parse_item(text, self.policy)?;
        Ok(self.append_item(item))
    }

    /// Appends an already parsed item, bracketed by the pre and post events.
    ///
    /// Always returns `true`.
    pub fn append_item(&mut self, item: MediaItem) -> bool {
        self.publish(MediaEvent::PreItemAppended);
        self.items.push(item);
        self.publish(MediaEvent::PostItemAppended);

        debug!(count = self.items.len(), "Appended media item");
        true
    }

    /// Number of entries in the collection.
    pub fn numbers_of_movies(&self) -> usize {
        self.items.len()
    }

    /// Announces that `name` started playing. Always returns `true`.
    #[instrument(skip(self))]
    pub fn current_playing_song(&self, name: &str) -> bool {
        self.publish(MediaEvent::Notify {
            code: NotifyCode::Playback.as_i32(),
            text: name.to_string(),
        });
        true
    }

    /// Announces that playback stopped.
    ///
    /// Returns `false`, unlike [`current_playing_song`](Self::current_playing_song);
    /// existing bus clients rely on that value.
    #[instrument(skip(self))]
    pub fn song_has_stopped(&self) -> bool {
        self.publish(MediaEvent::Notify {
            code: NotifyCode::Playback.as_i32(),
            text: String::new(),
        });
        false
    }

    /// Subscribes to events published from now on.
    pub fn subscribe(&self) -> broadcast::Receiver<MediaEvent> {
        self.events.subscribe()
    }

    /// Stream of events published from now on.
    ///
    /// Events missed because the subscriber lagged are skipped.
    pub fn events(&self) -> impl Stream<Item = MediaEvent> + Send + 'static {
        BroadcastStream::new(self.events.subscribe()).filter_map(|event| async move {
            match event {
                Ok(event) => Some(event),
                Err(BroadcastStreamRecvError::Lagged(missed)) => {
                    warn!(missed, "Media event subscriber lagged");
                    None
                }
            }
        })
    }

    fn publish(&self, event: MediaEvent) {
        // No subscribers is not an error.
        let _ = self.events.send(event);
    }
}
