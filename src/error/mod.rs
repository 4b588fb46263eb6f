mod config;
mod io;
mod locate;
mod session;

pub use config::ConfigError;
pub use io::{read_source, IoError};
pub use locate::LocateError;
pub use session::SessionError;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] IoError),

    #[error(transparent)]
    Locate(#[from] LocateError),

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("unsupported language for {path}: expected one of the configured extensions ({extensions})")]
    UnsupportedLanguage { path: String, extensions: String },
}

impl Error {
    pub fn unsupported_language(path: impl Into<String>, extensions: &[String]) -> Self {
        Self::UnsupportedLanguage {
            path: path.into(),
            extensions: extensions.join(", "),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
