pub mod clear;
pub mod config;
pub mod export;
pub mod leaderboard;
pub mod transactions;

pub use clear::present_clear;
pub use config::{present_config_init, present_config_show};
pub use export::present_export;
pub use leaderboard::{present_analysis, present_leaderboard};
pub use transactions::present_transactions;
