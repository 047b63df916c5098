pub mod cli;
pub mod config;
pub mod events;
pub mod inputs;
pub mod keys;
pub mod report;
pub mod resize;
pub mod state;
pub mod subscription;
pub mod watcher;

pub use cli::Args;
pub use state::*;
