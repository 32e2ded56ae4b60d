use serde::{Deserialize, Serialize};
use std::fmt;

/// Body of `POST /get-copy-transactions`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionsRequest {
    pub target_wallet: String,
    pub follower_wallet: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionsResponse {
    #[serde(default)]
    pub transactions: Vec<CopyTransaction>,
}

/// A leader buy matched with the follower buy that copied it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CopyTransaction {
    pub token: TokenInfo,
    pub leader_transaction: TransactionInfo,
    pub follower_transaction: TransactionInfo,
    pub delay_slots: i64,
}

impl CopyTransaction {
    pub fn delay_class(&self) -> DelayClass {
        DelayClass::from_slots(self.delay_slots)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenInfo {
    pub address: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub symbol: String,
    #[serde(default)]
    pub logo: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionInfo {
    pub slot: u64,
    /// Unix seconds
    pub timestamp: i64,
    pub signature: String,
    /// Token amount as a decimal string; precision is preserved as sent.
    #[serde(default)]
    pub amount: String,
    #[serde(default)]
    pub usd_amount: f64,
}

/// Speed bucket for a single copy, by slot delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DelayClass {
    VeryFast,
    Fast,
    Average,
    Slow,
}

impl DelayClass {
    pub const ALL: [DelayClass; 4] = [
        DelayClass::VeryFast,
        DelayClass::Fast,
        DelayClass::Average,
        DelayClass::Slow,
    ];

    pub fn from_slots(slots: i64) -> Self {
        match slots {
            ..=3 => DelayClass::VeryFast,
            4..=6 => DelayClass::Fast,
            7..=10 => DelayClass::Average,
            _ => DelayClass::Slow,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DelayClass::VeryFast => "Very Fast",
            DelayClass::Fast => "Fast",
            DelayClass::Average => "Average",
            DelayClass::Slow => "Slow",
        }
    }
}

impl fmt::Display for DelayClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
