/// Configuration inspection commands
mod schema;
mod show;

pub use schema::SchemaCommand;
pub use show::ShowCommand;
