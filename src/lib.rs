pub mod config;
pub mod error;
pub mod launcher;
pub mod logger;
pub mod platform;
pub mod process;
pub mod watcher;

pub use config::Config;
pub use error::LauncherError;
pub use logger::Logger;
