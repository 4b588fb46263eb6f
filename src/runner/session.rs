//! Single-slot "last run" register.
//!
//! Every successful run overwrites the slot; `repeat` replays it unchanged.
//! A `Session` is owned by one caller and passed by `&mut`; hosts that
//! trigger runs from several threads wrap it in a `Mutex`.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

use super::launcher::Launcher;
use super::target::RunTarget;
use crate::error::SessionError;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    #[serde(default)]
    last: Option<RunTarget>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<&RunTarget> {
        self.last.as_ref()
    }

    pub fn record(&mut self, target: RunTarget) {
        debug!(run = %target, "recorded last run");
        self.last = Some(target);
    }

    /// Launches `target` and, once the launcher accepted it, records it.
    pub fn run<L: Launcher + ?Sized>(
        &mut self,
        launcher: &mut L,
        target: RunTarget,
    ) -> Result<(), SessionError> {
        info!(run = %target, "running");
        launcher.launch(&target)?;
        self.record(target);
        Ok(())
    }

    pub fn repeat<L: Launcher + ?Sized>(&self, launcher: &mut L) -> Result<&RunTarget, SessionError> {
        let target = self.last.as_ref().ok_or(SessionError::NoPreviousRun)?;
        info!(run = %target, "repeating last run");
        launcher.launch(target)?;
        Ok(target)
    }

    /// Loads the register from `path`; a missing file is an empty session.
    pub fn load(path: &Path) -> Result<Self, SessionError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no saved run state");
                return Ok(Self::new());
            }
            Err(source) => {
                return Err(SessionError::ReadState {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        serde_json::from_str(&content).map_err(|source| SessionError::ParseState {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn save(&self, path: &Path) -> Result<(), SessionError> {
        let write_error = |source: std::io::Error| SessionError::WriteState {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(write_error)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(|e| SessionError::WriteState {
            path: path.to_path_buf(),
            source: e.into(),
        })?;
        std::fs::write(path, json).map_err(write_error)
    }
}
