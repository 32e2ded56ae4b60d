use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Error, Result};

/// Confidence bucket a follower falls into.
///
/// Ordering between tiers is by [`Tier::rank`], never by label text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "Option<String>")]
pub enum Tier {
    High,
    Medium,
    Low,
    #[default]
    Unknown,
}

impl Tier {
    /// All tiers from strongest to weakest.
    pub const ALL: [Tier; 4] = [Tier::High, Tier::Medium, Tier::Low, Tier::Unknown];

    pub fn rank(self) -> u8 {
        match self {
            Tier::High => 3,
            Tier::Medium => 2,
            Tier::Low => 1,
            Tier::Unknown => 0,
        }
    }

    /// High and Medium followers are reported as likely copy traders.
    pub fn is_likely_copier(self) -> bool {
        matches!(self, Tier::High | Tier::Medium)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Tier::High => "high",
            Tier::Medium => "medium",
            Tier::Low => "low",
            Tier::Unknown => "unknown",
        }
    }

    /// Parse an upstream label from either naming scheme.
    ///
    /// Unrecognised labels map to `Unknown`; the tier is re-derived from the
    /// score during normalization anyway.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "high" | "high confidence" | "gold" => Tier::High,
            "medium" | "medium confidence" | "silver" => Tier::Medium,
            "low" | "low confidence" | "bronze" => Tier::Low,
            _ => Tier::Unknown,
        }
    }
}

impl From<Option<String>> for Tier {
    fn from(label: Option<String>) -> Self {
        label.as_deref().map(Tier::from_label).unwrap_or_default()
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display label set for the four tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TierScheme {
    /// "High Confidence", "Medium Confidence", "Low Confidence", "Unknown"
    #[default]
    Confidence,
    /// "Gold", "Silver", "Bronze", "Unranked"
    Legacy,
}

impl TierScheme {
    pub fn label(self, tier: Tier) -> &'static str {
        match (self, tier) {
            (TierScheme::Confidence, Tier::High) => "High Confidence",
            (TierScheme::Confidence, Tier::Medium) => "Medium Confidence",
            (TierScheme::Confidence, Tier::Low) => "Low Confidence",
            (TierScheme::Confidence, Tier::Unknown) => "Unknown",
            (TierScheme::Legacy, Tier::High) => "Gold",
            (TierScheme::Legacy, Tier::Medium) => "Silver",
            (TierScheme::Legacy, Tier::Low) => "Bronze",
            (TierScheme::Legacy, Tier::Unknown) => "Unranked",
        }
    }
}

/// What happens to records scoring below the lowest threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BelowThresholdPolicy {
    /// Keep them, labelled `Unknown`
    #[default]
    Label,
    /// Drop them from the working set
    Exclude,
}

/// Lower bounds (inclusive) for each scored tier. Missing fields take the defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TierThresholds {
    pub high: f64,
    pub medium: f64,
    pub low: f64,
}

impl Default for TierThresholds {
    fn default() -> Self {
        Self {
            high: 0.75,
            medium: 0.5,
            low: 0.3,
        }
    }
}

impl TierThresholds {
    pub fn new(high: f64, medium: f64, low: f64) -> Result<Self> {
        let thresholds = Self { high, medium, low };
        thresholds.validate()?;
        Ok(thresholds)
    }

    pub fn validate(&self) -> Result<()> {
        let in_range = |v: f64| v.is_finite() && (0.0..=1.0).contains(&v);
        if !(in_range(self.high) && in_range(self.medium) && in_range(self.low)) {
            return Err(Error::InvalidThresholds(format!(
                "thresholds must lie within [0, 1] (high={}, medium={}, low={})",
                self.high, self.medium, self.low
            )));
        }
        if !(self.low < self.medium && self.medium < self.high) {
            return Err(Error::InvalidThresholds(format!(
                "expected low < medium < high (high={}, medium={}, low={})",
                self.high, self.medium, self.low
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_orders_tiers() {
        assert!(Tier::High.rank() > Tier::Medium.rank());
        assert!(Tier::Medium.rank() > Tier::Low.rank());
        assert!(Tier::Low.rank() > Tier::Unknown.rank());
    }

    #[test]
    fn test_from_label_accepts_both_schemes() {
        assert_eq!(Tier::from_label("Gold"), Tier::High);
        assert_eq!(Tier::from_label("High Confidence"), Tier::High);
        assert_eq!(Tier::from_label("silver"), Tier::Medium);
        assert_eq!(Tier::from_label("Bronze"), Tier::Low);
        assert_eq!(Tier::from_label("Unranked"), Tier::Unknown);
        assert_eq!(Tier::from_label("platinum"), Tier::Unknown);
    }

    #[test]
    fn test_tier_deserializes_null_as_unknown() {
        let tier: Tier = serde_json::from_str("null").unwrap();
        assert_eq!(tier, Tier::Unknown);

        let tier: Tier = serde_json::from_str("\"Gold\"").unwrap();
        assert_eq!(tier, Tier::High);
    }

    #[test]
    fn test_tier_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Tier::Medium).unwrap(), "\"medium\"");
    }

    #[test]
    fn test_scheme_labels() {
        assert_eq!(TierScheme::Confidence.label(Tier::Low), "Low Confidence");
        assert_eq!(TierScheme::Legacy.label(Tier::Unknown), "Unranked");
    }

    #[test]
    fn test_thresholds_must_increase() {
        assert!(TierThresholds::new(0.75, 0.5, 0.3).is_ok());
        assert!(TierThresholds::new(0.5, 0.5, 0.3).is_err());
        assert!(TierThresholds::new(1.5, 0.5, 0.3).is_err());
        assert!(TierThresholds::new(f64::NAN, 0.5, 0.3).is_err());
    }
}
