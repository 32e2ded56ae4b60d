// NOTE: copytrace Architecture
//
// The backend does the expensive work (fetching swaps, matching copies, scoring).
// Everything here is presentation over one stored payload:
// - runtime fetches and stores the raw payload exactly as received
// - engine re-derives tiers from scores on every read, so threshold or scheme
//   changes in config.toml apply to old results without re-fetching
// - handlers drive an engine ViewController and hand its snapshot to presenters

mod args;
mod commands;
mod handlers;
mod logging;
pub mod presentation;

pub use args::{Cli, Commands, ConfigCommand};
pub use commands::run;
