//! # Presentation Layer
//!
//! User-facing output for the CLI, split along MVVM lines so the engine never
//! knows how its results are drawn.
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ Renderer ] ==(JSON)==> serde_json
//!                                                                  ==(Text)==> [ View ]
//! ```
//!
//! ## Where does code go?
//!
//! * `view_models/` - Serializable data contracts. Raw numbers, not formatted
//!   strings: `score: 0.8123`, never `"81%"`. `--format json` dumps these as-is.
//! * `presenters/` - Pure functions from engine/runtime types to view models.
//!   Totals, badges and follow-up suggestions are decided here.
//! * `views/` - `fmt::Display` layouts over a view model. Column widths, colors
//!   and `ViewMode` filtering live here.
//! * `formatters/` - Small string helpers shared by views (scores, delays,
//!   signatures, USD amounts, timestamps).
//! * `renderers/` - Drivers: `ConsoleRenderer` switches between JSON and text,
//!   `tui` runs the interactive leaderboard.
//!
//! | If you need to... | Go to... |
//! |-------------------|----------|
//! | Add a field to the JSON output | `view_models/` |
//! | Compute a share or a count | `presenters/` |
//! | Change a column or a color | `views/` |
//! | Format a delay as "4.5 slots" | `formatters/` |

pub mod formatters;
pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

pub use renderers::{ConsoleRenderer, Renderer};
pub use view_models::{DisplayOptions, ViewMode};
