pub mod clear;
pub mod config;
pub mod export;
pub mod leaderboard;
pub mod transactions;
pub mod tui;
