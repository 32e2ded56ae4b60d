pub mod clear;
pub mod common;
pub mod config;
pub mod export;
pub mod leaderboard;
pub mod result;
pub mod transactions;

use std::fmt;

pub use clear::ClearViewModel;
pub use common::{DisplayOptions, Guidance, StatusBadge, StatusLevel, ViewMode};
pub use config::ConfigViewModel;
pub use export::ExportViewModel;
pub use leaderboard::{
    DistributionViewModel, LeaderboardRowViewModel, LeaderboardViewModel, ProgressStepViewModel,
    SortViewModel, TierShareViewModel,
};
pub use result::CommandResultViewModel;
pub use transactions::{CopyTransactionViewModel, TransactionSideViewModel, TransactionsViewModel};

/// Builds the text view for a view model.
pub trait CreateView {
    fn create_view<'a>(&'a self, options: DisplayOptions) -> Box<dyn fmt::Display + 'a>;
}
