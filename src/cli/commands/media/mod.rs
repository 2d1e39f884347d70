/// Media collection commands
mod append;
mod count;
mod items;
mod playing;
mod set_items;
mod stopped;
mod watch;

pub use append::AppendCommand;
pub use count::CountCommand;
pub use items::ItemsCommand;
pub use playing::PlayingCommand;
pub use set_items::SetItemsCommand;
pub use stopped::StoppedCommand;
pub use watch::WatchCommand;
