use serde::{Deserialize, Serialize};

use crate::tier::Tier;

/// Computed metrics for one follower wallet, as returned by the analysis backend.
///
/// `tier` is whatever the backend sent; it is re-derived from `score` before display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreRecord {
    #[serde(rename = "addr", alias = "address")]
    pub address: String,

    /// Matched copy events
    #[serde(default)]
    pub hits: u64,

    /// Distinct tokens copied
    #[serde(default)]
    pub breadth: u64,

    /// Mean leader-to-follower delay, in slots
    #[serde(default, alias = "avgDelay")]
    pub avg_delay: f64,

    #[serde(rename = "med_delay", alias = "median_delay", alias = "medDelay", default)]
    pub median_delay: f64,

    #[serde(default, alias = "freqNorm")]
    pub freq_norm: f64,

    #[serde(default, alias = "speedNorm")]
    pub speed_norm: f64,

    #[serde(default, alias = "breadthNorm")]
    pub breadth_norm: f64,

    pub score: f64,

    #[serde(default)]
    pub tier: Tier,
}

impl ScoreRecord {
    /// Case-insensitive address comparison; wallet input is frequently re-typed by hand.
    pub fn is_wallet(&self, wallet: &str) -> bool {
        self.address.eq_ignore_ascii_case(wallet.trim())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_backend_record() {
        let json = r#"{
            "addr": "9xQeWvG816bUx9EPjHmaT23yvVM2ZWbrrpZb9PusVFin",
            "hits": 12,
            "breadth": 4,
            "avg_delay": 3.5,
            "med_delay": 2.0,
            "freq_norm": 0.8,
            "speed_norm": 0.9,
            "breadth_norm": 0.4,
            "score": 0.79,
            "tier": "Silver"
        }"#;

        let record: ScoreRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.hits, 12);
        assert_eq!(record.median_delay, 2.0);
        assert_eq!(record.tier, Tier::Medium);
    }

    #[test]
    fn test_deserialize_without_tier() {
        let json = r#"{"addr": "abc", "hits": 1, "breadth": 1, "avg_delay": 1.0,
            "med_delay": 1.0, "freq_norm": 0.1, "speed_norm": 0.1, "breadth_norm": 0.1,
            "score": 0.1}"#;

        let record: ScoreRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.tier, Tier::Unknown);
    }

    #[test]
    fn test_is_wallet_ignores_case() {
        let json = r#"{"addr": "AbCdEf", "score": 0.5}"#;
        let record: ScoreRecord = serde_json::from_str(json).unwrap();
        assert!(record.is_wallet("abcdef"));
        assert!(record.is_wallet("  ABCDEF "));
        assert!(!record.is_wallet("abcde"));
    }
}
