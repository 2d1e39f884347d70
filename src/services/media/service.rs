use tracing::{info, instrument};
use zbus::{Connection, connection::Builder};

use crate::config::{BusConfig, BusKind, MediaConfig};

use super::{
    BusTarget, MediaError, MediaManager, SMediaProxy,
    registration::Registration,
};

/// Configuration for the media service
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Which bus to connect to and where to register
    pub bus: BusConfig,
    /// Collection behaviour
    pub media: MediaConfig,
}

/// Media manager served on the bus.
///
/// Owns the bus connection and the registration for as long as it lives.
pub struct MediaService {
    registration: Registration,
}

impl MediaService {
    /// Connect to the configured bus and register a fresh media manager.
    ///
    /// # Errors
    ///
    /// Returns `MediaError::InitializationFailed` if the bus connection fails
    /// or the configured names are invalid, and the registration errors of
    /// [`register`](super::register) otherwise.
    #[instrument(skip(config), fields(bus = %config.bus.kind, policy = %config.media.parse_policy))]
    pub async fn start(config: Config) -> Result<Self, MediaError> {
        info!("Starting media service");

        let target = BusTarget::new(&config.bus.object_path, &config.bus.service_name)?;
        let connection = connect(&config.bus).await?;
        let manager = MediaManager::new(config.media.parse_policy, config.media.event_capacity);
        let registration = Registration::acquire(&connection, target, manager).await?;

        Ok(Self { registration })
    }

    /// The live registration.
    pub fn registration(&self) -> &Registration {
        &self.registration
    }

    /// Unregister from the bus.
    ///
    /// # Errors
    ///
    /// Returns `MediaError::DbusError` if the bus rejects the release.
    pub async fn stop(self) -> Result<(), MediaError> {
        self.registration.release().await
    }
}

/// Open a connection to the configured bus.
///
/// A non-empty `address` takes precedence over `kind`.
///
/// # Errors
///
/// Returns `MediaError::InitializationFailed` if the connection fails.
pub async fn connect(bus: &BusConfig) -> Result<Connection, MediaError> {
    let builder = if !bus.address.is_empty() {
        Builder::address(bus.address.as_str())
    } else {
        match bus.kind {
            BusKind::Session => Builder::session(),
            BusKind::System => Builder::system(),
        }
    }
    .map_err(connection_failed)?;

    builder.build().await.map_err(connection_failed)
}

fn connection_failed(error: zbus::Error) -> MediaError {
    MediaError::InitializationFailed(format!("D-Bus connection failed: {error}"))
}

/// Build a client proxy for the media manager described by `bus`.
///
/// # Errors
///
/// Returns `MediaError::InitializationFailed` for malformed names or a failed
/// connection.
pub async fn client(bus: &BusConfig) -> Result<SMediaProxy<'static>, MediaError> {
    let target = BusTarget::new(&bus.object_path, &bus.service_name)?;
    let connection = connect(bus).await?;

    let proxy = SMediaProxy::builder(&connection)
        .destination(target.service_name().clone())?
        .path(target.object_path().clone())?
        .build()
        .await?;

    Ok(proxy)
}
