//! `eduplatform.toml` loading.
//!
//! Every section and key is optional; absent values fall back to
//! [`Config::default`]. Unknown keys are rejected so typos surface early.
#![warn(unreachable_pub)]

use eduplatform_core::query::SortKey;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use thiserror::Error as ThisError;

/// Conventional file name, looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "eduplatform.toml";

/// Environment variable naming an explicit config path.
pub const CONFIG_ENV_VAR: &str = "EDUPLATFORM_CONFIG";

///
/// ConfigError
///

#[derive(Debug, ThisError)]
#[remain::sorted]
pub enum ConfigError {
    #[error("failed to read config '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

///
/// Config
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub catalog: CatalogConfig,
    pub query: QueryConfig,
    pub log: LogConfig,
}

impl Config {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_toml_str(&text)
    }

    /// Load `path` when given, else [`CONFIG_FILE_NAME`] from `dir` if it
    /// exists, else defaults.
    pub fn discover(path: Option<&Path>, dir: &Path) -> Result<Self, ConfigError> {
        if let Some(path) = path {
            return Self::load(path);
        }

        let candidate = dir.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            Self::load(&candidate)
        } else {
            Ok(Self::default())
        }
    }
}

///
/// CatalogConfig
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct CatalogConfig {
    /// Directory holding `courses.json`, `tutors.json`, `articles.json` and
    /// `dashboard.json`. `None` uses the bundled seed data.
    pub data_dir: Option<PathBuf>,
}

///
/// QueryConfig
/// Session policy and the default sort per listing.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct QueryConfig {
    pub debug: bool,
    pub course_sort: SortKey,
    pub tutor_sort: SortKey,
    pub article_sort: SortKey,
}

///
/// LogConfig
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct LogConfig {
    /// `tracing` filter directive, used when `RUST_LOG` is unset.
    pub filter: String,
}

impl LogConfig {
    pub const DEFAULT_FILTER: &'static str = "warn";
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: Self::DEFAULT_FILTER.to_string(),
        }
    }
}

///
/// TESTS
///
