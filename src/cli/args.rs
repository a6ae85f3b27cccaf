//! CLI argument parsing and configuration.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Pulse One - terminal mockup of a mobile fitness dashboard
#[derive(Parser, Debug)]
#[command(name = "pulse-one")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Keys: 1-4 select a tab, Tab/Left/Right cycle tabs, click a tab, q or Esc to quit")]
pub struct Args {
    /// JSON content file to show instead of the built-in sample data
    #[arg(long, value_name = "PATH")]
    pub content: Option<PathBuf>,

    /// Log file (defaults to the user cache directory)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, value_name = "LEVEL", default_value = "info")]
    pub log_level: String,

    /// Input poll interval in milliseconds
    #[arg(long, value_name = "MS", default_value_t = 100, value_parser = clap::value_parser!(u64).range(1..))]
    pub tick_rate: u64,

    /// Do not capture the mouse (disables clicking on tabs)
    #[arg(long)]
    pub no_mouse: bool,
}

/// Configuration from CLI arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    pub content_path: Option<PathBuf>,
    pub log_file: Option<PathBuf>,
    pub log_level: String,
    pub tick_rate: Duration,
    pub mouse: bool,
}

impl From<Args> for CliConfig {
    fn from(args: Args) -> Self {
        Self {
            content_path: args.content,
            log_file: args.log_file,
            log_level: args.log_level,
            tick_rate: Duration::from_millis(args.tick_rate),
            mouse: !args.no_mouse,
        }
    }
}

/// Parse CLI arguments and return configuration
pub fn parse_args() -> CliConfig {
    Args::parse().into()
}
