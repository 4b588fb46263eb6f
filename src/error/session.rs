use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("previous test is not found")]
    NoPreviousRun,

    #[error("failed to read run state '{path}': {source}")]
    ReadState {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write run state '{path}': {source}")]
    WriteState {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("corrupt run state '{path}': {source}")]
    ParseState {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("launch failed: {message}")]
    LaunchFailed { message: String },
}

impl SessionError {
    pub fn launch_failed(message: impl Into<String>) -> Self {
        Self::LaunchFailed {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_previous_run_display() {
        assert_eq!(
            SessionError::NoPreviousRun.to_string(),
            "previous test is not found"
        );
    }

    #[test]
    fn test_launch_failed_display() {
        let err = SessionError::launch_failed("stdout closed");
        assert_eq!(err.to_string(), "launch failed: stdout closed");
    }
}
