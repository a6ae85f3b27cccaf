//! CLI argument parsing for Pulse One.

mod args;

pub use args::{parse_args, CliConfig, VERSION};
