use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::record::ScoreRecord;

/// Body of `POST /process-wallet`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub wallet_address: String,
}

/// Response of `POST /process-wallet`.
///
/// This is also the shape persisted as the last result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResponse {
    pub status: String,

    #[serde(default)]
    pub message: String,

    #[serde(default)]
    pub data: Option<AnalysisData>,

    #[serde(default, alias = "currentStep")]
    pub current_step: Option<String>,

    #[serde(default, alias = "nextStep")]
    pub next_step: Option<String>,

    #[serde(default)]
    pub progress: BTreeMap<String, StepStatus>,
}

impl AnalysisResponse {
    pub fn is_success(&self) -> bool {
        self.status.eq_ignore_ascii_case("success")
    }

    /// Follower records, or `None` if the payload carries no data section.
    pub fn follower_scores(&self) -> Option<&[ScoreRecord]> {
        self.data.as_ref().map(|d| d.follower_scores.as_slice())
    }

    /// Reference wallet named by the payload, ignoring blank values.
    pub fn wallet_address(&self) -> Option<&str> {
        self.data
            .as_ref()
            .and_then(|d| d.wallet_address.as_deref())
            .map(str::trim)
            .filter(|w| !w.is_empty())
    }

    /// Record `wallet` as the analyzed wallet. No-op when there is no data section.
    pub fn set_wallet_address(&mut self, wallet: &str) {
        if let Some(data) = self.data.as_mut() {
            data.wallet_address = Some(wallet.to_string());
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisData {
    #[serde(default, alias = "walletAddress")]
    pub wallet_address: Option<String>,

    #[serde(default, alias = "followerScores")]
    pub follower_scores: Vec<ScoreRecord>,

    #[serde(
        default,
        alias = "analysisTimestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub analysis_timestamp: Option<String>,

    /// Backend-specific counters (transactions fetched, buy percentage, ...)
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// State of one backend pipeline step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepStatus {
    Pending,
    Completed,
    Failed,
    #[serde(other)]
    Unknown,
}

/// A normalized follower set for one reference wallet.
///
/// No record's address equals `reference_wallet` (case-insensitively).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultSet {
    pub reference_wallet: String,
    pub records: Vec<ScoreRecord>,
}

impl ResultSet {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
