// NOTE: Command Organization
//
// Flat verbs for the everyday flow (analyze -> results/browse -> transactions),
// one namespace for configuration.

mod commands;
mod common;
mod enums;

pub use commands::*;
pub use common::*;
pub use enums::*;

use clap::Parser;

#[derive(Parser)]
#[command(name = "copytrace")]
#[command(about = "Find and rank wallets that copy-trade a Solana wallet", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Workspace directory (defaults to $COPYTRACE_PATH, then the XDG data dir)
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    /// Log verbosity on stderr (RUST_LOG takes precedence)
    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Commands,
}
