//! Configuration file loading
//!
//! The auxiliary include directories come from two places, searched in this
//! order after the issuing file's own directory:
//! 1. `-I/--include-dir` flags, in command-line order
//! 2. `include_dirs` from the config file (`--config FILE`, or `incflat.toml`
//!    in the current directory when present)
//!
//! Relative entries in a config file are resolved against the directory that
//! contains the file.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::search::SearchPaths;

/// Config file looked up in the current directory when `--config` is not given
pub const PROJECT_CONFIG_FILE: &str = "incflat.toml";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read config file '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Contents of an `incflat.toml` file
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Auxiliary include directories, in search order
    #[serde(default)]
    pub include_dirs: Vec<PathBuf>,
}

impl Config {
    /// Load a config file, resolving relative directories against its location
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let base = path.parent().unwrap_or_else(|| Path::new(""));
        Self::parse(&content, base).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load `incflat.toml` from `dir` if it exists
    pub fn load_project(dir: &Path) -> Result<Option<Self>, ConfigError> {
        let path = dir.join(PROJECT_CONFIG_FILE);
        if !path.is_file() {
            return Ok(None);
        }
        Self::load(&path).map(Some)
    }

    fn parse(content: &str, base: &Path) -> Result<Self, toml::de::Error> {
        let mut config: Config = toml::from_str(content)?;
        config.include_dirs = config
            .include_dirs
            .into_iter()
            .map(|dir| absolutize(&dir, base))
            .collect();
        Ok(config)
    }
}

/// Build the ordered search paths from CLI directories and an optional config.
///
/// Relative CLI directories are resolved against `cwd`.
pub fn search_paths(cli_dirs: &[PathBuf], cwd: &Path, config: Option<&Config>) -> SearchPaths {
    let mut paths = SearchPaths::default();
    for dir in cli_dirs {
        paths.push(absolutize(dir, cwd));
    }
    if let Some(config) = config {
        for dir in &config.include_dirs {
            paths.push(dir);
        }
    }
    paths
}

fn absolutize(path: &Path, base: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}
