//! Optional `testcafe-runner.yml` configuration.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::ConfigError;
use crate::runner::Browser;

pub const DEFAULT_CONFIG_FILE: &str = "testcafe-runner.yml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunnerConfig {
    /// TestCafe entry point, relative paths resolve against `cwd`.
    pub program: PathBuf,
    pub cwd: PathBuf,
    pub default_browser: Browser,
    /// File extensions treated as TestCafe sources.
    pub extensions: Vec<String>,
    /// Where the last run is remembered, relative paths resolve against `cwd`.
    pub state_file: PathBuf,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            program: PathBuf::from("node_modules/testcafe/bin/testcafe.js"),
            cwd: PathBuf::from("."),
            default_browser: Browser::default(),
            extensions: vec!["js".to_string(), "ts".to_string()],
            state_file: PathBuf::from(".testcafe-runner/last-run.json"),
        }
    }
}

impl RunnerConfig {
    /// Loads `explicit` if given, otherwise `testcafe-runner.yml` in
    /// `search_dir` when present, otherwise defaults.
    pub fn load(explicit: Option<&Path>, search_dir: &Path) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) if !path.exists() => Err(ConfigError::not_found(path)),
            Some(path) => Self::from_file(path),
            None => {
                let path = search_dir.join(DEFAULT_CONFIG_FILE);
                if path.exists() {
                    Self::from_file(&path)
                } else {
                    debug!(dir = %search_dir.display(), "no config file, using defaults");
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self =
            serde_yaml::from_str(&content).map_err(|source| ConfigError::ParseError {
                path: path.to_path_buf(),
                source,
            })?;
        debug!(path = %path.display(), "loaded config");
        config.normalized()
    }

    fn normalized(mut self) -> Result<Self, ConfigError> {
        self.extensions = self
            .extensions
            .iter()
            .map(|ext| ext.trim().trim_start_matches('.').to_ascii_lowercase())
            .filter(|ext| !ext.is_empty())
            .collect();
        if self.extensions.is_empty() {
            return Err(ConfigError::invalid("extensions must not be empty"));
        }
        Ok(self)
    }

    pub fn program_path(&self) -> PathBuf {
        self.cwd.join(&self.program)
    }

    pub fn state_path(&self) -> PathBuf {
        self.cwd.join(&self.state_file)
    }
}
