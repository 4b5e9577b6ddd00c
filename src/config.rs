use serde::Deserialize;

use std::fs::File;
use std::io::BufReader;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use thiserror::Error;

const DEFAULT_TEXT: &str = "halo3 is the best";

/// What [`redo`](crate::HistoryManager::redo) does with the command it
/// re-applies.
#[derive(Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RedoPolicy {
    /// Re-apply only. The command is not put back on the undo history.
    #[default]
    Reapply,
    /// Re-apply and push the command onto the undo history.
    Record,
}

/// Settings for an editing session.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// The text the session starts from
    pub initial_text: String,
    /// Maximum entries kept in each history, unbounded when absent
    pub history_limit: Option<NonZeroUsize>,
    /// See [`RedoPolicy`]
    pub redo_policy: RedoPolicy,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Json(#[from] serde_json::Error),
}

impl Default for Config {
    fn default() -> Self {
        Self {
            initial_text: String::from(DEFAULT_TEXT),
            history_limit: None,
            redo_policy: RedoPolicy::default(),
        }
    }
}

impl Config {
    /// # Errors
    ///
    /// Will return `Err` if the file cannot be opened or is not a valid config
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let file = File::open(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let reader = BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }

    /// # Errors
    ///
    /// Will return `Err` if `json` is not a valid config
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}
