use std::io::Write;
use std::path::PathBuf;
use tracing::info;

use super::target::{LaunchConfig, RunTarget};
use crate::cli::EmitMode;
use crate::error::SessionError;

/// Receives a resolved target and hands it to TestCafe's launcher.
pub trait Launcher {
    fn launch(&mut self, target: &RunTarget) -> Result<(), SessionError>;
}

/// Writes the invocation for a target instead of spawning it.
pub struct EmitLauncher<W: Write> {
    writer: W,
    mode: EmitMode,
    program: PathBuf,
    cwd: PathBuf,
}

impl<W: Write> EmitLauncher<W> {
    pub fn new(writer: W, mode: EmitMode, program: impl Into<PathBuf>, cwd: impl Into<PathBuf>) -> Self {
        Self {
            writer,
            mode,
            program: program.into(),
            cwd: cwd.into(),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn render(&self, target: &RunTarget) -> Result<String, SessionError> {
        match self.mode {
            EmitMode::Launch => {
                let config = LaunchConfig::new(target, &self.program, &self.cwd);
                serde_json::to_string_pretty(&config)
                    .map_err(|e| SessionError::launch_failed(e.to_string()))
            }
            EmitMode::Command => Ok(command_line(&self.program, target)),
        }
    }
}

impl<W: Write> Launcher for EmitLauncher<W> {
    fn launch(&mut self, target: &RunTarget) -> Result<(), SessionError> {
        let rendered = self.render(target)?;
        writeln!(self.writer, "{rendered}")
            .map_err(|e| SessionError::launch_failed(e.to_string()))?;
        info!(run = %target, mode = self.mode.as_str(), "emitted invocation");
        Ok(())
    }
}

/// `node <program> <args>` with each word quoted for a POSIX shell.
pub fn command_line(program: &std::path::Path, target: &RunTarget) -> String {
    let mut words = vec!["node".to_string(), shell_quote(&program.to_string_lossy())];
    words.extend(target.args().iter().map(|arg| shell_quote(arg)));
    words.join(" ")
}

fn shell_quote(word: &str) -> String {
    let plain = !word.is_empty()
        && word
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_./:=@,+%".contains(c));
    if plain {
        word.to_string()
    } else {
        format!("'{}'", word.replace('\'', r"'\''"))
    }
}
