//! Sample data for engine, runtime and CLI tests.
//!
//! Follower addresses generated by [`success_response`] are `F0`, `F1`, ... in
//! input order, so tests can assert on ordering by address.

use copytrace_types::{
    AnalysisData, AnalysisResponse, CopyTransaction, ScoreRecord, StepStatus, Tier, TokenInfo,
    TransactionInfo,
};
use std::collections::BTreeMap;

/// A valid base58 wallet used as the reference (leader) wallet.
pub const LEADER_WALLET: &str = "9xQeWvG816bUx9EPjHmaT23yvVM2ZWbrrpZb9PusVFin";

/// A valid base58 wallet used as a follower in drill-down tests.
pub const FOLLOWER_WALLET: &str = "7xKXtg2CW87d97TXJSDpbD5jBkheTqA83TZRuJosgAsU";

/// Fluent builder for [`ScoreRecord`].
pub struct RecordBuilder {
    record: ScoreRecord,
}

impl RecordBuilder {
    pub fn new(address: &str) -> Self {
        Self {
            record: ScoreRecord {
                address: address.to_string(),
                hits: 10,
                breadth: 2,
                avg_delay: 5.0,
                median_delay: 4.0,
                freq_norm: 0.5,
                speed_norm: 0.5,
                breadth_norm: 0.5,
                score: 0.5,
                tier: Tier::Unknown,
            },
        }
    }

    pub fn score(mut self, score: f64) -> Self {
        self.record.score = score;
        self
    }

    pub fn hits(mut self, hits: u64) -> Self {
        self.record.hits = hits;
        self
    }

    pub fn breadth(mut self, breadth: u64) -> Self {
        self.record.breadth = breadth;
        self
    }

    pub fn avg_delay(mut self, avg_delay: f64) -> Self {
        self.record.avg_delay = avg_delay;
        self
    }

    pub fn tier(mut self, tier: Tier) -> Self {
        self.record.tier = tier;
        self
    }

    pub fn build(self) -> ScoreRecord {
        self.record
    }
}

/// Record with default metrics and the given score.
pub fn record(address: &str, score: f64) -> ScoreRecord {
    RecordBuilder::new(address).score(score).build()
}

/// Successful analysis payload with one follower per score.
pub fn success_response(wallet: &str, scores: &[f64]) -> AnalysisResponse {
    let follower_scores = scores
        .iter()
        .enumerate()
        .map(|(i, score)| {
            RecordBuilder::new(&format!("F{}", i))
                .score(*score)
                .hits(i as u64 + 1)
                .build()
        })
        .collect();

    let progress: BTreeMap<String, StepStatus> = [
        "fetch_transactions",
        "filter_transactions",
        "fetch_swaps",
        "analyze_copy_trades",
        "calculate_scores",
    ]
    .into_iter()
    .map(|step| (step.to_string(), StepStatus::Completed))
    .collect();

    AnalysisResponse {
        status: "success".to_string(),
        message: format!("Found {} potential copy traders", scores.len()),
        data: Some(AnalysisData {
            wallet_address: Some(wallet.to_string()),
            follower_scores,
            analysis_timestamp: Some("2025-03-01T12:00:00".to_string()),
            extra: serde_json::Map::new(),
        }),
        current_step: Some("calculate_scores".to_string()),
        next_step: None,
        progress,
    }
}

/// Payload the backend sends when it could not analyze the wallet.
pub fn error_response(message: &str) -> AnalysisResponse {
    AnalysisResponse {
        status: "error".to_string(),
        message: message.to_string(),
        data: None,
        current_step: Some("fetch_transactions".to_string()),
        next_step: None,
        progress: BTreeMap::from([("fetch_transactions".to_string(), StepStatus::Failed)]),
    }
}

/// A matched leader/follower pair for `symbol`.
pub fn copy_transaction(symbol: &str, leader_timestamp: i64, delay_slots: i64) -> CopyTransaction {
    let leader_slot = 300_000_000u64;
    let follower_slot = leader_slot + delay_slots.max(0) as u64;

    CopyTransaction {
        token: TokenInfo {
            address: format!("{}Mint1111111111111111111111111111", symbol),
            name: symbol.to_string(),
            symbol: symbol.to_string(),
            logo: String::new(),
        },
        leader_transaction: TransactionInfo {
            slot: leader_slot,
            timestamp: leader_timestamp,
            signature: format!("{}LeaderSig5VERYLongSignatureValue111111111111", symbol),
            amount: "1500.5".to_string(),
            usd_amount: 25.0,
        },
        follower_transaction: TransactionInfo {
            slot: follower_slot,
            timestamp: leader_timestamp + delay_slots / 2,
            signature: format!("{}FollowerSig5VERYLongSignatureValue11111111", symbol),
            amount: "300".to_string(),
            usd_amount: 5.0,
        },
        delay_slots,
    }
}
