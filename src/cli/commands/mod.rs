/// Configuration inspection commands
pub mod config;
/// Media collection commands
pub mod media;
