use anyhow::{Context as AnyhowContext, Result};
use clap::Parser;
use std::io::Write;
use std::path::Path;
use tracing::{debug, warn};

use testcafe_runner::cli::{Cli, Command, CursorArgs};
use testcafe_runner::config::RunnerConfig;
use testcafe_runner::discovery::{discover, load_source};
use testcafe_runner::error::SessionError;
use testcafe_runner::logging::{self, Verbosity};
use testcafe_runner::output::{FileListing, OutputFormatter};
use testcafe_runner::runner::{Browser, EmitLauncher, RunTarget, Session};
use testcafe_runner::{locate, scan, Selection};

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(Verbosity::from_flags(cli.verbose, cli.quiet));
    cli.validate().context("Invalid arguments")?;

    let cwd = std::env::current_dir().context("Cannot determine working directory")?;
    let config = RunnerConfig::load(cli.config.as_deref(), &cwd)
        .context("Failed to load configuration")?;
    debug!(format = cli.format.as_str(), emit = cli.emit.as_str(), "configured");

    match &cli.command {
        Command::Locate { file, cursor } => {
            let selection = locate_in_file(file, cursor, &config)?;
            println!("{}", OutputFormatter::format_selection(&selection, cli.format)?);
        }
        Command::Run {
            file,
            cursor,
            browser,
        } => {
            let selection = locate_in_file(file, cursor, &config)?;
            let browser = browser_or_default(browser, &config);
            run_target(&cli, &config, RunTarget::from_selection(browser, file, selection))?;
        }
        Command::RunFile { file, browser } => {
            load_source(file, &config.extensions)?;
            let browser = browser_or_default(browser, &config);
            run_target(&cli, &config, RunTarget::file(browser, file))?;
        }
        Command::Repeat => {
            let session = Session::load(&config.state_path())?;
            let mut launcher = launcher(&cli, &config);
            session.repeat(&mut launcher)?;
        }
        Command::List { path } => {
            let mut listings = Vec::new();
            for file in discover(path, &config.extensions)? {
                let text = load_source(&file, &config.extensions)?;
                listings.push(FileListing::new(&file, &text, &scan(&text)));
            }
            let out = OutputFormatter::format_listing(&listings, cli.format)?;
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(out.as_bytes())?;
            stdout.flush()?;
        }
    }

    Ok(())
}

fn locate_in_file(file: &Path, cursor: &CursorArgs, config: &RunnerConfig) -> Result<Selection> {
    let text = load_source(file, &config.extensions)?;
    let offset = cursor.cursor(&text)?;
    Ok(locate(&text, offset)?)
}

fn browser_or_default(browser: &Option<Browser>, config: &RunnerConfig) -> Browser {
    browser
        .clone()
        .unwrap_or_else(|| config.default_browser.clone())
}

fn launcher(cli: &Cli, config: &RunnerConfig) -> EmitLauncher<std::io::Stdout> {
    EmitLauncher::new(
        std::io::stdout(),
        cli.emit,
        config.program_path(),
        config.cwd.clone(),
    )
}

fn run_target(cli: &Cli, config: &RunnerConfig, target: RunTarget) -> Result<()> {
    let state = config.state_path();
    // The slot is about to be overwritten, so unreadable contents are not fatal.
    let mut session = match Session::load(&state) {
        Err(err @ SessionError::ParseState { .. }) => {
            warn!(error = %err, "discarding unreadable run state");
            Session::new()
        }
        loaded => loaded?,
    };
    let mut launcher = launcher(cli, config);
    session.run(&mut launcher, target)?;
    session
        .save(&state)
        .with_context(|| format!("Failed to remember last run in {}", state.display()))
}
