//! The collaborator side: what to run, how to hand it off, and the
//! "repeat last run" register.

pub mod launcher;
pub mod session;
pub mod target;

pub use launcher::{EmitLauncher, Launcher};
pub use session::Session;
pub use target::{Browser, LaunchConfig, RunTarget, ScopeKind};
