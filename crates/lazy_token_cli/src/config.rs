//! Optional RON configuration for the `lazy-token` binary.
//!
//! Every field may be omitted; command-line flags take precedence over the
//! file, and the file over built-in defaults.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use lazy_token_core::Estimator;
use serde::Deserialize;
use thiserror::Error;
use token_logging::LogDestination;

/// Read from the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = ".lazy_token.ron";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub estimator: Option<Estimator>,
    pub token_limit: Option<usize>,
    pub log: Option<LogDestination>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config {path:?}: {message}")]
    Parse { path: PathBuf, message: String },
}

/// Load a config file that must exist.
pub fn load(path: &Path) -> Result<FileConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse(path, &content)
}

/// Load a config file that may be absent; absence yields the defaults.
pub fn load_optional(path: &Path) -> Result<FileConfig, ConfigError> {
    match fs::read_to_string(path) {
        Ok(content) => parse(path, &content),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(FileConfig::default()),
        Err(source) => Err(ConfigError::Read {
            path: path.to_path_buf(),
            source,
        }),
    }
}

fn parse(path: &Path, content: &str) -> Result<FileConfig, ConfigError> {
    ron::from_str(content).map_err(|err| ConfigError::Parse {
        path: path.to_path_buf(),
        message: err.to_string(),
    })
}
