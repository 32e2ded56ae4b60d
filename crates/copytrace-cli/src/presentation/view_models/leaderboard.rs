use copytrace_engine::PageInfo;
use copytrace_types::{SortDirection, SortField, StepStatus, Tier, TierScheme};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct LeaderboardViewModel {
    pub reference_wallet: String,
    pub rows: Vec<LeaderboardRowViewModel>,
    pub distribution: DistributionViewModel,
    pub page: PageInfo,
    pub sort: SortViewModel,
    pub scheme: TierScheme,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analyzed_at: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub progress: Vec<ProgressStepViewModel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_step: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_step: Option<String>,
}

impl LeaderboardViewModel {
    pub fn is_empty(&self) -> bool {
        self.page.total_items == 0
    }
}

#[derive(Debug, Serialize)]
pub struct LeaderboardRowViewModel {
    pub rank: usize,
    pub address: String,
    pub tier: Tier,
    pub tier_label: String,
    pub score: f64,
    pub hits: u64,
    pub breadth: u64,
    pub avg_delay: f64,
    pub median_delay: f64,
    pub freq_norm: f64,
    pub speed_norm: f64,
    pub breadth_norm: f64,
}

#[derive(Debug, Serialize)]
pub struct DistributionViewModel {
    pub high: usize,
    pub medium: usize,
    pub low: usize,
    pub unknown: usize,
    pub total: usize,
    pub likely_copy_traders: usize,
    /// Share of likely copy traders in `[0, 1]`
    pub copy_rate: f64,
    /// One entry per tier, strongest first
    pub tiers: Vec<TierShareViewModel>,
}

#[derive(Debug, Serialize)]
pub struct TierShareViewModel {
    pub tier: Tier,
    pub count: usize,
    /// Percent of the working set, 0 when empty
    pub percent: f64,
}

#[derive(Debug, Serialize)]
pub struct SortViewModel {
    pub field: SortField,
    pub direction: SortDirection,
}

#[derive(Debug, Serialize)]
pub struct ProgressStepViewModel {
    pub step: String,
    pub status: StepStatus,
}
