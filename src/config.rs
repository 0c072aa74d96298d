//! Optional `mdsplice.toml` in the working directory

use crate::importer::ReportFormat;
use serde::Deserialize;
use std::{fs, path::Path, path::PathBuf};
use thiserror::Error;

pub const CONFIG_FILENAME: &str = "mdsplice.toml";

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct SpliceConfig {
    /// Where to write a run report; no report when unset
    pub report: Option<PathBuf>,
    #[serde(alias = "reportFormat")]
    pub report_format: ReportFormat,
}

#[derive(Debug, Clone)]
pub struct ConfigLoadResult {
    pub config: SpliceConfig,
    pub path: PathBuf,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file at {path:?}: {source}")]
    Io {
        #[source]
        source: std::io::Error,
        path: PathBuf,
    },
    #[error("failed to parse config file at {path:?}: {source}")]
    Parse {
        #[source]
        source: toml::de::Error,
        path: PathBuf,
    },
}

pub fn resolve_config_path(dir: &Path) -> PathBuf {
    dir.join(CONFIG_FILENAME)
}

/// Load `mdsplice.toml` from `dir`, or `None` when there is no such file
pub fn load_config(dir: &Path) -> Result<Option<ConfigLoadResult>, ConfigError> {
    let path = resolve_config_path(dir);
    if !path.exists() {
        return Ok(None);
    }

    let config_text = fs::read_to_string(&path).map_err(|source| ConfigError::Io {
        source,
        path: path.clone(),
    })?;

    let config: SpliceConfig =
        toml::from_str(&config_text).map_err(|source| ConfigError::Parse {
            source,
            path: path.clone(),
        })?;

    Ok(Some(ConfigLoadResult { config, path }))
}
