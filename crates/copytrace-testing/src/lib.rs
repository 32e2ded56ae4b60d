//! Testing infrastructure for copytrace tests.
//!
//! - `fixtures`: score records, analysis payloads and copy transactions
//! - `TestWorld`: isolated data directory plus CLI execution
//! - `assertions`: checks against the CLI's JSON output

pub mod assertions;
pub mod fixtures;
pub mod world;

pub use world::{CliResult, TestWorld};
