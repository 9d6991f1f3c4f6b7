use clap::Parser;
use std::path::PathBuf;

/// sway-setup - prepare a FreeBSD host for Sway
///
/// Run without arguments to open the interactive menu.
#[derive(Parser, Debug)]
#[command(name = "sway-setup")]
#[command(about = "Interactive menu to install and configure Sway, seatd, and Wayland on FreeBSD")]
#[command(version)]
pub struct Cli {
    /// JSON file overriding the default commands, paths, and timeout
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Dry-run mode: log what each action would run without changing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Append log output to this file (logs are discarded otherwise)
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
