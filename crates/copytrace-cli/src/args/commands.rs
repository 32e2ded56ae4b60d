use super::common::{LeaderboardArgs, ViewModeArgs};
use super::enums::{DirectionArg, SortArg};
use clap::Subcommand;
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Analyze a wallet and show its copy-trader leaderboard")]
    Analyze {
        /// Reference (leader) wallet address
        wallet: String,

        #[command(flatten)]
        view: LeaderboardArgs,
    },

    #[command(about = "Show the leaderboard of the last analysis")]
    Results {
        #[command(flatten)]
        view: LeaderboardArgs,

        /// Forget the stored result instead of showing it
        #[arg(long, conflicts_with_all = ["sort", "direction", "page", "scheme"])]
        clear: bool,
    },

    #[command(about = "Browse the last analysis interactively")]
    Browse,

    #[command(about = "List trades a follower copied from a leader")]
    Transactions {
        /// Leader wallet address
        leader: String,

        /// Follower wallet address
        follower: String,

        #[command(flatten)]
        view_mode: ViewModeArgs,
    },

    #[command(about = "Export the last analysis as CSV")]
    Export {
        /// Destination file
        #[arg(short, long)]
        output: PathBuf,

        #[arg(long)]
        sort: Option<SortArg>,

        #[arg(long)]
        direction: Option<DirectionArg>,
    },

    #[command(about = "Inspect or create config.toml")]
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    #[command(about = "Print the effective configuration")]
    Show,

    #[command(about = "Write a config.toml with default values")]
    Init {
        /// Overwrite an existing config.toml
        #[arg(long)]
        force: bool,
    },
}
