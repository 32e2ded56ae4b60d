mod context;

pub mod analyze;
pub mod browse;
pub mod config;
pub mod export;
pub mod results;
pub mod transactions;

pub use context::HandlerContext;

use copytrace_engine::ViewController;
use copytrace_types::{SortDirection, SortField, TierScheme};

use crate::args::LeaderboardArgs;

/// Apply `--sort`, `--direction` and `--page` to a loaded controller.
///
/// A lone `--direction` applies to the default score column.
pub(crate) fn apply_view_args(controller: &mut ViewController, args: &LeaderboardArgs) {
    let direction = args.direction.map(SortDirection::from);
    match (args.sort, direction) {
        (Some(sort), direction) => {
            controller.set_sort(SortField::from(sort), direction.unwrap_or_default());
        }
        (None, Some(direction)) => controller.set_sort(SortField::default(), direction),
        (None, None) => {}
    }
    controller.go_to_page(args.page);
}

/// `--scheme` wins over `display.tier_scheme`.
pub(crate) fn resolve_scheme(controller: &ViewController, args: &LeaderboardArgs) -> TierScheme {
    args.scheme
        .map(TierScheme::from)
        .unwrap_or(controller.options().classifier.scheme)
}
