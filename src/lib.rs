/// TestCafe Runner
///
/// Finds the TestCafe `test` or `fixture` governing a cursor position with a
/// pattern scanner, then builds the TestCafe invocation that runs exactly
/// that construct.
pub mod cli;
pub mod config;
pub mod discovery;
pub mod error;
pub mod logging;
pub mod output;
pub mod resolver;
pub mod runner;
pub mod scanner;
pub mod utils;

pub use resolver::{locate, resolve, Selection};
pub use scanner::{scan, ConstructKind, Occurrence, ScanResult};
pub use utils::is_computed_name;
