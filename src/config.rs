use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::LauncherError;

/// Launch configuration, read once at startup from a `config.json` next to
/// the executable:
///
/// ```json
/// {
///     "Program": {
///         "Path": "C:\\tools\\editor.exe",
///         "Arguments": ["--fullscreen"],
///         "Title": "Editor"
///     },
///     "After": {
///         "Path": "C:\\tools\\cleanup.exe",
///         "Arguments": []
///     }
/// }
/// ```
///
/// `After` is optional; an empty `After.Path` means nothing runs once the
/// program exits.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Config {
    pub program: ProgramConfig,
    pub after: AfterConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ProgramConfig {
    pub path: String,
    pub arguments: Vec<String>,
    pub title: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct AfterConfig {
    pub path: String,
    pub arguments: Vec<String>,
}

impl Config {
    pub fn load(path: &Path) -> Result<Self, LauncherError> {
        let contents = fs::read_to_string(path).map_err(|err| LauncherError::ConfigRead {
            path: path.to_path_buf(),
            source: err,
        })?;

        let config: Config =
            serde_json::from_str(&contents).map_err(|err| LauncherError::ConfigParse {
                path: path.to_path_buf(),
                source: err,
            })?;

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), LauncherError> {
        if self.program.path.is_empty() {
            return Err(LauncherError::ConfigInvalid {
                reason: "Program.Path must not be empty".to_string(),
            });
        }
        if self.program.title.is_empty() {
            return Err(LauncherError::ConfigInvalid {
                reason: "Program.Title must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Whether a follow-up program is configured for after the primary
    /// program exits.
    pub fn has_after(&self) -> bool {
        !self.after.path.is_empty()
    }
}
