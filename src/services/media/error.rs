/// Errors that can occur in the media service
#[derive(thiserror::Error, Debug)]
pub enum MediaError {
    /// D-Bus communication error
    #[error("D-Bus operation failed: {0}")]
    DbusError(#[from] zbus::Error),

    /// Text passed to an append or replace operation is not valid media JSON
    #[error("Invalid media item: {0}")]
    InvalidItem(String),

    /// Another object is already exported at the requested path
    #[error("Object path {0} is already in use")]
    ObjectPathInUse(String),

    /// Requesting the well-known bus name failed
    #[error("Failed to register service name {name}: {details}")]
    NameRegistrationFailed {
        /// Requested well-known name
        name: String,
        /// Underlying bus error
        details: String,
    },

    /// Failed to connect to the bus
    #[error("Failed to initialize media service: {0}")]
    InitializationFailed(String),
}

impl From<MediaError> for zbus::fdo::Error {
    fn from(error: MediaError) -> Self {
        match error {
            MediaError::InvalidItem(details) => zbus::fdo::Error::InvalidArgs(details),
            MediaError::DbusError(e) => zbus::fdo::Error::ZBus(e),
            other => zbus::fdo::Error::Failed(other.to_string()),
        }
    }
}
