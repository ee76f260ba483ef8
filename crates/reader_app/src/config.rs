use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::Context;
use reader_engine::{DEFAULT_SENTENCE_COUNT, READ_LIMIT_CHARS};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::platform::logging::LogDestination;

const CONFIG_FILENAME: &str = "reader_assist.ron";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssistConfig {
    pub sentence_count: usize,
    pub read_limit_chars: usize,
    pub speech_rate: f32,
    pub recognition_lang: String,
    pub log_destination: LogDestination,
}

impl Default for AssistConfig {
    fn default() -> Self {
        Self {
            sentence_count: DEFAULT_SENTENCE_COUNT,
            read_limit_chars: READ_LIMIT_CHARS,
            speech_rate: 1.0,
            recognition_lang: reader_core::DEFAULT_RECOGNITION_LANG.to_string(),
            log_destination: LogDestination::Terminal,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse {}: {message}", .path.display())]
    Parse { path: PathBuf, message: String },
}

/// Load a config file. A missing file is not an error and yields `None`.
pub fn load(path: &Path) -> Result<Option<AssistConfig>, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    ron::from_str(&content)
        .map(Some)
        .map_err(|err| ConfigError::Parse {
            path: path.to_path_buf(),
            message: err.to_string(),
        })
}

/// Pick the configuration for this run.
///
/// An explicitly requested file must exist and parse. The implicit
/// `./reader_assist.ron` is optional; problems with it are returned alongside
/// the defaults so they can be logged once logging is up.
pub fn resolve(explicit: Option<&Path>) -> anyhow::Result<(AssistConfig, Option<ConfigError>)> {
    if let Some(path) = explicit {
        let config = load(path)?
            .with_context(|| format!("config file {} does not exist", path.display()))?;
        return Ok((config, None));
    }

    match load(Path::new(CONFIG_FILENAME)) {
        Ok(config) => Ok((config.unwrap_or_default(), None)),
        Err(err) => Ok((AssistConfig::default(), Some(err))),
    }
}

pub fn to_ron(config: &AssistConfig) -> Result<String, ron::Error> {
    ron::ser::to_string_pretty(config, ron::ser::PrettyConfig::new())
}
