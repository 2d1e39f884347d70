use tokio::runtime::Handle;
use tracing::{info, instrument, warn};
use zbus::{Connection, names::WellKnownName, zvariant::ObjectPath};

use super::{MediaError, MediaInterface, MediaManager};

/// Validated object path and well-known name pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusTarget {
    object_path: ObjectPath<'static>,
    service_name: WellKnownName<'static>,
}

impl BusTarget {
    /// Validates an object path and a well-known bus name.
    ///
    /// # Errors
    ///
    /// Returns `MediaError::InitializationFailed` if either string is not
    /// valid for the bus.
    pub fn new(object_path: &str, service_name: &str) -> Result<Self, MediaError> {
        let object_path = parse_object_path(object_path)?;
        let service_name = WellKnownName::try_from(service_name)
            .map_err(|e| {
                MediaError::InitializationFailed(format!(
                    "invalid service name '{service_name}': {e}"
                ))
            })?
            .into_owned();

        Ok(Self {
            object_path,
            service_name,
        })
    }

    /// Object path the manager is exported at.
    pub fn object_path(&self) -> &ObjectPath<'static> {
        &self.object_path
    }

    /// Well-known name requested on the bus.
    pub fn service_name(&self) -> &WellKnownName<'static> {
        &self.service_name
    }
}

fn parse_object_path(object_path: &str) -> Result<ObjectPath<'static>, MediaError> {
    ObjectPath::try_from(object_path)
        .map(ObjectPath::into_owned)
        .map_err(|e| {
            MediaError::InitializationFailed(format!("invalid object path '{object_path}': {e}"))
        })
}

/// Live registration of a [`MediaManager`] on the bus.
///
/// Owns the exported object and, when registered through [`register`], the
/// requested name. [`release`](Self::release) undoes both and reports
/// errors. Dropping an unreleased registration schedules the same cleanup on
/// the current tokio runtime.
#[derive(Debug)]
pub struct Registration {
    connection: Connection,
    object_path: ObjectPath<'static>,
    service_name: Option<WellKnownName<'static>>,
    released: bool,
}

/// Exports `manager` at `object_path` and requests `service_name`.
///
/// # Errors
///
/// Returns `MediaError::InitializationFailed` for malformed names,
/// `MediaError::ObjectPathInUse` if the path is already served on this
/// connection and `MediaError::NameRegistrationFailed` if the name cannot be
/// acquired. Nothing stays exported when an error is returned.
pub async fn register(
    connection: &Connection,
    object_path: &str,
    service_name: &str,
    manager: MediaManager,
) -> Result<Registration, MediaError> {
    let target = BusTarget::new(object_path, service_name)?;
    Registration::acquire(connection, target, manager).await
}

/// Exports `manager` at `object_path` without requesting a name.
///
/// Used on peer-to-peer connections, where there is no bus daemon to own
/// names.
///
/// # Errors
///
/// Returns `MediaError::InitializationFailed` for a malformed path and
/// `MediaError::ObjectPathInUse` if the path is already served on this
/// connection.
pub async fn export(
    connection: &Connection,
    object_path: &str,
    manager: MediaManager,
) -> Result<Registration, MediaError> {
    let object_path = parse_object_path(object_path)?;
    Registration::export_at(connection, object_path, manager).await
}

impl Registration {
    /// Registers `manager` at an already validated target.
    ///
    /// # Errors
    ///
    /// See [`register`].
    #[instrument(skip(connection, manager), fields(path = %target.object_path, name = %target.service_name))]
    pub async fn acquire(
        connection: &Connection,
        target: BusTarget,
        manager: MediaManager,
    ) -> Result<Self, MediaError> {
        let BusTarget {
            object_path,
            service_name,
        } = target;
        let mut registration = Self::export_at(connection, object_path, manager).await?;

        if let Err(e) = connection.request_name(service_name.clone()).await {
            if let Err(rollback) = registration.release().await {
                warn!(error = %rollback, "Failed to unexport media object after name failure");
            }

            return Err(MediaError::NameRegistrationFailed {
                name: service_name.to_string(),
                details: e.to_string(),
            });
        }
        registration.service_name = Some(service_name);

        info!("Media manager registered on bus");
        Ok(registration)
    }

    async fn export_at(
        connection: &Connection,
        object_path: ObjectPath<'static>,
        manager: MediaManager,
    ) -> Result<Self, MediaError> {
        let exported = connection
            .object_server()
            .at(object_path.clone(), MediaInterface::new(manager))
            .await?;
        if !exported {
            return Err(MediaError::ObjectPathInUse(object_path.to_string()));
        }

        Ok(Self {
            connection: connection.clone(),
            object_path,
            service_name: None,
            released: false,
        })
    }

    /// Connection the manager is exported on.
    pub fn connection(&self) -> &Connection {
        &self.connection
    }

    /// Object path the manager is exported at.
    pub fn object_path(&self) -> &ObjectPath<'static> {
        &self.object_path
    }

    /// Well-known name held by this registration, if one was requested.
    pub fn service_name(&self) -> Option<&WellKnownName<'static>> {
        self.service_name.as_ref()
    }

    /// Unexports the manager and releases the name.
    ///
    /// # Errors
    ///
    /// Returns `MediaError::DbusError` if the bus rejects either step.
    #[instrument(skip(self), fields(path = %self.object_path, name = ?self.service_name))]
    pub async fn release(mut self) -> Result<(), MediaError> {
        self.released = true;
        unexport(
            &self.connection,
            self.object_path.clone(),
            self.service_name.take(),
        )
        .await?;

        info!("Media manager unregistered from bus");
        Ok(())
    }
}

impl Drop for Registration {
    fn drop(&mut self) {
        if self.released {
            return;
        }

        let connection = self.connection.clone();
        let object_path = self.object_path.clone();
        let service_name = self.service_name.take();

        match Handle::try_current() {
            Ok(handle) => {
                handle.spawn(async move {
                    if let Err(e) = unexport(&connection, object_path, service_name).await {
                        warn!(error = %e, "Failed to unregister dropped media registration");
                    }
                });
            }
            Err(_) => {
                warn!(
                    path = %object_path,
                    "Media registration dropped outside a runtime; left exported until the connection closes"
                );
            }
        }
    }
}

async fn unexport(
    connection: &Connection,
    object_path: ObjectPath<'static>,
    service_name: Option<WellKnownName<'static>>,
) -> Result<(), MediaError> {
    connection
        .object_server()
        .remove::<MediaInterface, _>(object_path)
        .await?;

    if let Some(name) = service_name {
        if !connection.release_name(name).await? {
            warn!("Service name was not owned at release time");
        }
    }

    Ok(())
}
