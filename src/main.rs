//! sway-setup - Main entry point
//!
//! Parses flags, sets up logging and configuration, then hands the terminal
//! to the interactive menu.

use anyhow::{Context, Result};
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::fs::OpenOptions;
use std::io::stdout;
use std::path::Path;
use std::sync::Mutex;
use swaysetup::cli::Cli;
use swaysetup::error::{self, SwaySetupError};
use swaysetup::{App, SetupConfig, Theme, process_guard};
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;

/// Initialize tracing.
///
/// The TUI owns stdout and stderr, so logs go to `log_file` or nowhere.
/// `RUST_LOG` overrides the default `info` level.
fn init_logger(log_file: Option<&Path>) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .context("failed to initialize tracing filter")?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false);

    match log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("cannot open log file {}", path.display()))?;
            builder.with_writer(Mutex::new(file)).init();
        }
        None => builder.with_writer(std::io::sink).init(),
    }
    Ok(())
}

/// Defaults, overlaid by `--config`, adjusted by `--dry-run`
fn load_config(cli: &Cli) -> Result<SetupConfig> {
    let config = match &cli.config {
        Some(path) => SetupConfig::load_from_file(path)
            .with_context(|| format!("failed to load configuration file {}", path.display()))?,
        None => SetupConfig::default(),
    };
    let dry_run = cli.dry_run || config.dry_run;
    let config = config.with_dry_run(dry_run);
    config.validate().context("invalid configuration")?;
    if config.home_dir.is_none() {
        warn!("Home directory unknown; Configure Sway and Set Environment will fail");
    }
    Ok(config)
}

/// Leave raw mode and the alternate screen. Safe to call more than once.
fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = crossterm::execute!(stdout(), LeaveAlternateScreen);
}

/// Run the interactive menu
fn run_tui(config: SetupConfig) -> error::Result<()> {
    debug!("Initializing terminal for TUI mode");

    enable_raw_mode()
        .map_err(|e| SwaySetupError::terminal(format!("Failed to enable raw mode: {}", e)))?;
    if let Err(e) = crossterm::execute!(stdout(), EnterAlternateScreen) {
        restore_terminal();
        return Err(SwaySetupError::terminal(format!(
            "Failed to enter alternate screen: {}",
            e
        )));
    }

    let backend = CrosstermBackend::new(stdout());
    let mut terminal = match Terminal::new(backend) {
        Ok(terminal) => terminal,
        Err(e) => {
            restore_terminal();
            return Err(SwaySetupError::terminal(format!("Failed to create terminal: {}", e)));
        }
    };

    let mut app = App::new(config, Theme::default());
    let result = app.run(&mut terminal);

    // Always attempt cleanup, even if the loop failed
    restore_terminal();
    let _ = terminal.show_cursor();

    result
}

fn main() {
    let cli = Cli::parse_args();

    if let Err(e) = init_logger(cli.log_file.as_deref()) {
        eprintln!("✗ {:#}", e);
        std::process::exit(1);
    }
    info!("sway-setup starting up");

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            error!("{:#}", e);
            eprintln!("✗ {:#}", e);
            std::process::exit(1);
        }
    };

    // Children die with us and the terminal is restored on SIGTERM/SIGHUP
    if let Err(e) = process_guard::init_signal_handlers(restore_terminal) {
        warn!("Failed to initialize signal handlers: {}", e);
    }

    if let Err(e) = run_tui(config) {
        error!("Error running program: {}", e);
        eprintln!("Error running program: {}", e);
        std::process::exit(1);
    }

    info!("sway-setup exiting");
}
