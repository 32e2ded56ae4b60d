use copytrace_types::{
    AnalysisResponse, ResultSet, ScoreRecord, SortDirection, SortField, TierScheme, ViewState,
    validate_wallet,
};
use serde::Serialize;
use std::num::NonZeroUsize;
use tracing::{debug, warn};

use crate::aggregate::{TierDistribution, aggregate};
use crate::normalize::normalize;
use crate::paginate::{DEFAULT_PAGE_SIZE, PageInfo, clamp_page, paginate};
use crate::sort::sort_records;
use crate::tier::TierClassifier;

/// Settings that shape every view the controller produces.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewOptions {
    pub classifier: TierClassifier,
    pub page_size: NonZeroUsize,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            classifier: TierClassifier::default(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum Phase {
    Idle,
    Loading { wallet: String },
    Ready,
    Failed { message: String },
}

/// One leaderboard row; `rank` is the 1-based position in the full ordering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedRecord {
    pub rank: usize,
    #[serde(flatten)]
    pub record: ScoreRecord,
}

/// Everything needed to draw one page of the leaderboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeaderboardView {
    pub reference_wallet: String,
    pub rows: Vec<RankedRecord>,
    pub page: PageInfo,
    pub distribution: TierDistribution,
    pub copy_rate: f64,
    pub state: ViewState,
    pub scheme: TierScheme,
}

impl LeaderboardView {
    /// No followers survived normalization.
    pub fn is_empty(&self) -> bool {
        self.page.total_items == 0
    }
}

/// Drives one results view: Idle -> Loading -> Ready | Failed.
///
/// Sorting and paging only touch `ViewState`; every view is recomputed from the
/// normalized set, which is replaced wholesale when a new result arrives.
#[derive(Debug, Clone)]
pub struct ViewController {
    options: ViewOptions,
    phase: Phase,
    result: Option<ResultSet>,
    state: ViewState,
}

impl ViewController {
    pub fn new(options: ViewOptions) -> Self {
        Self {
            options,
            phase: Phase::Idle,
            result: None,
            state: ViewState::default(),
        }
    }

    /// Start directly in `Ready` from a previously stored result.
    ///
    /// A stored payload that is not a success, carries no data, or does not name
    /// its reference wallet leaves the controller idle.
    pub fn from_persisted(response: &AnalysisResponse, options: ViewOptions) -> Self {
        let mut controller = Self::new(options);
        if !response.is_success() || response.data.is_none() {
            warn!(status = %response.status, "stored result is not usable");
            return controller;
        }
        match response.wallet_address() {
            Some(reference) => controller.load(response, reference),
            None => warn!("stored result does not name its reference wallet"),
        }
        controller
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn state(&self) -> ViewState {
        self.state
    }

    pub fn options(&self) -> &ViewOptions {
        &self.options
    }

    pub fn result(&self) -> Option<&ResultSet> {
        self.result.as_ref()
    }

    /// Validate the wallet and enter `Loading`. On a validation error the phase
    /// is left untouched. Submitting while loading supersedes the pending wallet.
    pub fn submit(&mut self, input: &str) -> copytrace_types::Result<String> {
        let wallet = validate_wallet(input)?;
        self.phase = Phase::Loading {
            wallet: wallet.clone(),
        };
        Ok(wallet)
    }

    /// Accept the backend payload for the pending wallet.
    pub fn receive(&mut self, response: &AnalysisResponse) {
        let Phase::Loading { wallet } = &self.phase else {
            warn!("ignoring analysis result received outside of loading");
            return;
        };
        let wallet = wallet.clone();

        if !response.is_success() {
            let message = if response.message.is_empty() {
                format!("Analysis failed with status '{}'", response.status)
            } else {
                response.message.clone()
            };
            self.phase = Phase::Failed { message };
            return;
        }
        if response.data.is_none() {
            self.phase = Phase::Failed {
                message: "Analysis response did not include any data".to_string(),
            };
            return;
        }

        self.load(response, &wallet);
    }

    /// Record a fetch failure for the pending wallet.
    pub fn fail(&mut self, message: impl Into<String>) {
        if !matches!(self.phase, Phase::Loading { .. }) {
            warn!("ignoring failure reported outside of loading");
            return;
        }
        self.phase = Phase::Failed {
            message: message.into(),
        };
    }

    pub fn select_sort(&mut self, field: SortField) {
        if self.phase == Phase::Ready {
            self.state.select_sort(field);
            debug!(field = %self.state.sort_field, direction = %self.state.sort_direction, "sort changed");
        }
    }

    pub fn set_sort(&mut self, field: SortField, direction: SortDirection) {
        if self.phase == Phase::Ready {
            self.state.sort_field = field;
            self.state.sort_direction = direction;
            self.state.current_page = 1;
        }
    }

    pub fn toggle_direction(&mut self) {
        if self.phase == Phase::Ready {
            self.state.toggle_direction();
        }
    }

    pub fn go_to_page(&mut self, page: usize) {
        if self.phase == Phase::Ready {
            self.state.current_page = clamp_page(page, self.len(), self.options.page_size);
        }
    }

    pub fn next_page(&mut self) {
        self.go_to_page(self.state.current_page.saturating_add(1));
    }

    pub fn previous_page(&mut self) {
        self.go_to_page(self.state.current_page.saturating_sub(1));
    }

    /// The full working set in the current sort order.
    pub fn sorted(&self) -> Vec<ScoreRecord> {
        match &self.result {
            Some(result) => sort_records(
                &result.records,
                self.state.sort_field,
                self.state.sort_direction,
            ),
            None => Vec::new(),
        }
    }

    /// Snapshot of the current page; `None` unless a result is loaded.
    pub fn view(&self) -> Option<LeaderboardView> {
        if self.phase != Phase::Ready {
            return None;
        }
        let result = self.result.as_ref()?;

        let ordered = self.sorted();
        let page = paginate(&ordered, self.options.page_size, self.state.current_page);
        let distribution = aggregate(&result.records);

        let rows = page
            .items
            .iter()
            .enumerate()
            .map(|(i, record)| RankedRecord {
                rank: page.info.start_index + i + 1,
                record: record.clone(),
            })
            .collect();

        Some(LeaderboardView {
            reference_wallet: result.reference_wallet.clone(),
            rows,
            page: page.info,
            distribution,
            copy_rate: distribution.copy_rate(),
            state: self.state,
            scheme: self.options.classifier.scheme,
        })
    }

    fn len(&self) -> usize {
        self.result.as_ref().map_or(0, ResultSet::len)
    }

    fn load(&mut self, response: &AnalysisResponse, reference_wallet: &str) {
        let raw = response.follower_scores().unwrap_or_default();
        let result = normalize(raw, reference_wallet, &self.options.classifier);
        debug!(
            reference = %result.reference_wallet,
            received = raw.len(),
            kept = result.len(),
            "result set loaded"
        );

        self.result = Some(result);
        self.state = ViewState::default();
        self.phase = Phase::Ready;
    }
}
