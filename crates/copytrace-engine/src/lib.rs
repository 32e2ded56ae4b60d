// Engine module - Pure result-processing pipeline (tiering, ordering, paging, aggregation)
// This layer sits between wire types (types) and CLI presentation
//
// raw records -> normalize -> sort_records -> { aggregate (full set), paginate (ordered set) }
// ViewController owns one result set and re-runs this pipeline on every state change.

pub mod aggregate;
pub mod controller;
pub mod normalize;
pub mod paginate;
pub mod sort;
pub mod tier;
pub mod transactions;

pub use aggregate::{TierDistribution, aggregate};
pub use controller::{LeaderboardView, Phase, RankedRecord, ViewController, ViewOptions};
pub use normalize::normalize;
pub use paginate::{DEFAULT_PAGE_SIZE, Page, PageInfo, paginate};
pub use sort::{compare, compare_directed, sort_records};
pub use tier::TierClassifier;
pub use transactions::{DelayBreakdown, TransactionSummary, summarize_transactions};
