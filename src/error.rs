use std::io;
use std::path::PathBuf;

/// Fatal launcher errors. Per-window failures (an unreadable caption, a
/// maximize call reporting no change) are skipped where they occur and
/// never surface here.
#[derive(Debug, thiserror::Error)]
pub enum LauncherError {
    #[error("Failed to read config file at {path}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse config file at {path}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid config: {reason}")]
    ConfigInvalid { reason: String },

    #[error("Failed to start '{path}'")]
    Launch {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Window enumeration failed: {message}")]
    Enumeration { message: String },

    #[error("Failed to wait for '{path}' to exit")]
    ProcessWait {
        path: String,
        #[source]
        source: io::Error,
    },
}
