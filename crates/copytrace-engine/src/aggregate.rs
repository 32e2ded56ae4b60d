use copytrace_types::{ScoreRecord, Tier};
use serde::Serialize;

/// Follower counts per tier. Every tier is present, zero when empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct TierDistribution {
    pub high: usize,
    pub medium: usize,
    pub low: usize,
    pub unknown: usize,
}

impl TierDistribution {
    pub fn count(&self, tier: Tier) -> usize {
        match tier {
            Tier::High => self.high,
            Tier::Medium => self.medium,
            Tier::Low => self.low,
            Tier::Unknown => self.unknown,
        }
    }

    fn bump(&mut self, tier: Tier) {
        match tier {
            Tier::High => self.high += 1,
            Tier::Medium => self.medium += 1,
            Tier::Low => self.low += 1,
            Tier::Unknown => self.unknown += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.high + self.medium + self.low + self.unknown
    }

    /// Followers in the High and Medium tiers.
    pub fn likely_copy_traders(&self) -> usize {
        self.iter()
            .filter(|(tier, _)| tier.is_likely_copier())
            .map(|(_, count)| count)
            .sum()
    }

    /// Fraction in `[0, 1]` of followers that are likely copy traders; 0 when empty.
    pub fn copy_rate(&self) -> f64 {
        match self.total() {
            0 => 0.0,
            total => self.likely_copy_traders() as f64 / total as f64,
        }
    }

    /// Share of one tier, in percent; 0 when empty.
    pub fn percentage(&self, tier: Tier) -> f64 {
        match self.total() {
            0 => 0.0,
            total => self.count(tier) as f64 * 100.0 / total as f64,
        }
    }

    /// Counts per tier, strongest first.
    pub fn iter(&self) -> impl Iterator<Item = (Tier, usize)> + '_ {
        Tier::ALL.into_iter().map(|tier| (tier, self.count(tier)))
    }
}

pub fn aggregate(working: &[ScoreRecord]) -> TierDistribution {
    let mut distribution = TierDistribution::default();
    for record in working {
        distribution.bump(record.tier);
    }
    distribution
}
