/// Media collection exposed over D-Bus
pub mod media;

pub use media::{MediaEvent, MediaManager, MediaService};
