use copytrace_engine::DelayBreakdown;
use copytrace_types::DelayClass;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct TransactionsViewModel {
    pub leader: String,
    pub follower: String,
    pub count: usize,
    /// Leader timestamp of the most recent copy, RFC 3339
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_copy_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_delay_slots: Option<f64>,
    pub delays: DelayBreakdown,
    pub transactions: Vec<CopyTransactionViewModel>,
}

#[derive(Debug, Serialize)]
pub struct CopyTransactionViewModel {
    pub token_symbol: String,
    pub token_name: String,
    pub token_address: String,
    pub delay_slots: i64,
    pub delay_class: DelayClass,
    pub leader: TransactionSideViewModel,
    pub follower: TransactionSideViewModel,
}

#[derive(Debug, Serialize)]
pub struct TransactionSideViewModel {
    pub slot: u64,
    pub timestamp: i64,
    pub signature: String,
    pub amount: String,
    pub usd_amount: f64,
    pub url: String,
}
