use anyhow::{Context as AnyhowContext, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};

use crate::runner::Browser;
use crate::utils::offset_at;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// How a run is handed off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EmitMode {
    /// Node debug launch configuration (JSON)
    Launch,
    /// Shell command line
    Command,
}

#[derive(Parser, Debug)]
#[command(name = "testcafe-runner", version)]
#[command(about = "Run the TestCafe test or fixture under the cursor", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Config file (defaults to ./testcafe-runner.yml when present)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output format for locate and list (text, json)
    #[arg(short = 'f', long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// How run, run-file and repeat emit the TestCafe invocation
    #[arg(long, global = true, default_value = "command")]
    pub emit: EmitMode,

    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the test or fixture governing the cursor
    Locate {
        /// TestCafe source file
        file: PathBuf,
        #[command(flatten)]
        cursor: CursorArgs,
    },
    /// Run the test or fixture governing the cursor
    Run {
        /// TestCafe source file
        file: PathBuf,
        #[command(flatten)]
        cursor: CursorArgs,
        /// Browser alias (defaults to the configured browser)
        #[arg(short, long)]
        browser: Option<Browser>,
    },
    /// Run every test in a file
    RunFile {
        /// TestCafe source file
        file: PathBuf,
        /// Browser alias (defaults to the configured browser)
        #[arg(short, long)]
        browser: Option<Browser>,
    },
    /// Replay the last run unchanged
    Repeat,
    /// List fixtures and tests in a file or directory
    List {
        /// File or directory to scan
        path: PathBuf,
    },
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct CursorArgs {
    /// Cursor as a character offset from the start of the file
    #[arg(long, value_name = "N", conflicts_with = "line", required_unless_present = "line")]
    pub offset: Option<usize>,

    /// 1-based cursor line
    #[arg(long, value_name = "L")]
    pub line: Option<usize>,

    /// 1-based cursor column (defaults to the end of the line)
    #[arg(long, value_name = "C", requires = "line")]
    pub column: Option<usize>,
}

impl CursorArgs {
    pub fn at_offset(offset: usize) -> Self {
        Self {
            offset: Some(offset),
            line: None,
            column: None,
        }
    }

    /// Character offset of the cursor within `text`.
    pub fn cursor(&self, text: &str) -> Result<usize> {
        if let Some(offset) = self.offset {
            return Ok(offset);
        }
        let line = self.line.context("either --offset or --line is required")?;
        let column = self.column.unwrap_or(usize::MAX);
        offset_at(text, line, column)
            .with_context(|| format!("line {line}, column {column} is outside the file"))
    }
}

impl Cli {
    pub fn validate(&self) -> Result<()> {
        match &self.command {
            Command::Locate { file, .. }
            | Command::Run { file, .. }
            | Command::RunFile { file, .. } => validate_file(file),
            Command::List { path } => validate_path(path),
            Command::Repeat => Ok(()),
        }
    }
}

pub fn validate_file(path: &Path) -> Result<()> {
    validate_path(path)?;
    if !path.is_file() {
        anyhow::bail!("Not a file: {}", path.display());
    }
    Ok(())
}

pub fn validate_path(path: &Path) -> Result<()> {
    if !path.exists() {
        anyhow::bail!("Path does not exist: {}", path.display());
    }

    if path.is_file() {
        std::fs::metadata(path).with_context(|| format!("Cannot read file: {}", path.display()))?;
    } else if path.is_dir() {
        std::fs::metadata(path)
            .with_context(|| format!("Cannot read directory: {}", path.display()))?;
    } else {
        anyhow::bail!("Path is neither a file nor a directory: {}", path.display());
    }

    Ok(())
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        }
    }
}

impl EmitMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            EmitMode::Launch => "launch",
            EmitMode::Command => "command",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn parse(args: &[&str]) -> std::result::Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("testcafe-runner").chain(args.iter().copied()))
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_locate_offset() {
        let cli = parse(&["locate", "a.js", "--offset", "42"]).unwrap();
        match cli.command {
            Command::Locate { file, cursor } => {
                assert_eq!(file, PathBuf::from("a.js"));
                assert_eq!(cursor, CursorArgs::at_offset(42));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_run_with_browser_and_globals() {
        let cli = parse(&[
            "run", "a.js", "--line", "3", "--browser", "firefox", "--emit", "launch", "-vv",
        ])
        .unwrap();
        assert_eq!(cli.emit, EmitMode::Launch);
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Command::Run { browser, cursor, .. } => {
                assert_eq!(browser, Some(Browser::new("firefox")));
                assert_eq!(cursor.line, Some(3));
                assert_eq!(cursor.column, None);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_cursor_required() {
        assert!(parse(&["locate", "a.js"]).is_err());
    }

    #[test]
    fn test_offset_conflicts_with_line() {
        assert!(parse(&["locate", "a.js", "--offset", "1", "--line", "1"]).is_err());
    }

    #[test]
    fn test_column_requires_line() {
        assert!(parse(&["locate", "a.js", "--offset", "1", "--column", "1"]).is_err());
    }

    #[test]
    fn test_invalid_format_rejected() {
        assert!(parse(&["list", ".", "--format", "xml"]).is_err());
    }

    #[test]
    fn test_cursor_from_line_defaults_to_line_end() {
        let text = "fixture('F');\ntest('T', fn);";
        let cursor = CursorArgs {
            offset: None,
            line: Some(1),
            column: None,
        };
        assert_eq!(cursor.cursor(text).unwrap(), 13);
    }

    #[test]
    fn test_cursor_line_out_of_range() {
        let cursor = CursorArgs {
            offset: None,
            line: Some(9),
            column: Some(1),
        };
        assert!(cursor.cursor("one line").is_err());
    }

    #[test]
    fn test_validate_path_file_exists() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("login.test.js");
        fs::write(&file_path, "fixture('Login');").unwrap();

        assert!(validate_file(&file_path).is_ok());
    }

    #[test]
    fn test_validate_file_rejects_directory() {
        let temp_dir = TempDir::new().unwrap();
        assert!(validate_path(temp_dir.path()).is_ok());
        assert!(validate_file(temp_dir.path()).is_err());
    }

    #[test]
    fn test_validate_path_not_exists() {
        let path = Path::new("/nonexistent/path/that/does/not/exist");
        assert!(validate_path(path).is_err());
    }

    #[test]
    fn test_repeat_needs_no_file() {
        let cli = parse(&["repeat"]).unwrap();
        assert!(cli.validate().is_ok());
    }

    #[test]
    fn test_as_str() {
        assert_eq!(OutputFormat::Json.as_str(), "json");
        assert_eq!(EmitMode::Command.as_str(), "command");
    }
}
