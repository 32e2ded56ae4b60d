use copytrace_types::{BelowThresholdPolicy, Error, Result, Tier, TierScheme, TierThresholds};

/// Maps a score to a tier. One classifier serves both label schemes; the
/// scheme only changes how a tier is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TierClassifier {
    pub thresholds: TierThresholds,
    pub scheme: TierScheme,
    pub policy: BelowThresholdPolicy,
}

impl TierClassifier {
    pub fn new(thresholds: TierThresholds) -> Result<Self> {
        thresholds.validate()?;
        Ok(Self {
            thresholds,
            ..Self::default()
        })
    }

    pub fn with_scheme(mut self, scheme: TierScheme) -> Self {
        self.scheme = scheme;
        self
    }

    pub fn with_policy(mut self, policy: BelowThresholdPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Thresholds are checked high to low and the first match wins, so every
    /// finite score lands in exactly one tier.
    pub fn classify(&self, score: f64) -> Result<Tier> {
        if !score.is_finite() {
            return Err(Error::InvalidScore(score));
        }

        let t = &self.thresholds;
        let tier = if score >= t.high {
            Tier::High
        } else if score >= t.medium {
            Tier::Medium
        } else if score >= t.low {
            Tier::Low
        } else {
            Tier::Unknown
        };
        Ok(tier)
    }

    pub fn label(&self, tier: Tier) -> &'static str {
        self.scheme.label(tier)
    }

    /// Whether a record of this tier stays in the working set.
    pub fn retains(&self, tier: Tier) -> bool {
        match self.policy {
            BelowThresholdPolicy::Label => true,
            BelowThresholdPolicy::Exclude => tier != Tier::Unknown,
        }
    }
}
