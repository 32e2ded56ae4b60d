// Core types - wire payloads, tiers and view state shared by every layer

pub mod error;
pub mod record;
pub mod response;
pub mod tier;
pub mod transaction;
pub mod view;
pub mod wallet;

pub use error::{Error, Result};
pub use record::ScoreRecord;
pub use response::{AnalysisData, AnalysisRequest, AnalysisResponse, ResultSet, StepStatus};
pub use tier::{BelowThresholdPolicy, Tier, TierScheme, TierThresholds};
pub use transaction::{
    CopyTransaction, DelayClass, TokenInfo, TransactionInfo, TransactionsRequest,
    TransactionsResponse,
};
pub use view::{SortDirection, SortField, ViewState};
pub use wallet::validate_wallet;
