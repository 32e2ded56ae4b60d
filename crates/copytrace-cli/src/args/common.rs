use clap::Args;

use super::enums::{DirectionArg, SchemeArg, SortArg};

#[derive(Debug, Clone, Default, Args)]
pub struct ViewModeArgs {
    #[arg(
        long,
        help = "Minimal output (addresses only, for scripting)",
        group = "view_mode"
    )]
    pub quiet: bool,

    #[arg(long, help = "Compact output (table only)", group = "view_mode")]
    pub compact: bool,

    #[arg(
        long,
        help = "Verbose output (median delay and normalized metrics)",
        group = "view_mode"
    )]
    pub verbose: bool,
}

impl ViewModeArgs {
    pub fn resolve(&self) -> crate::presentation::ViewMode {
        use crate::presentation::ViewMode;

        if self.quiet {
            ViewMode::Minimal
        } else if self.compact {
            ViewMode::Compact
        } else if self.verbose {
            ViewMode::Verbose
        } else {
            ViewMode::default()
        }
    }
}

/// Ordering, paging and labelling of a leaderboard.
#[derive(Debug, Clone, Default, Args)]
pub struct LeaderboardArgs {
    /// Column to sort by (defaults to score)
    #[arg(long)]
    pub sort: Option<SortArg>,

    /// Sort direction (defaults to desc)
    #[arg(long)]
    pub direction: Option<DirectionArg>,

    /// Page to show, starting at 1 (clamped to the last page)
    #[arg(long, default_value = "1")]
    pub page: usize,

    /// Tier label scheme (overrides display.tier_scheme)
    #[arg(long)]
    pub scheme: Option<SchemeArg>,

    #[command(flatten)]
    pub view_mode: ViewModeArgs,
}
