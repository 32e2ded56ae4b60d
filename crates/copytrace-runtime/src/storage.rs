use copytrace_types::AnalysisResponse;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::Result;

/// Name of the single persisted slot.
pub const LAST_RESULT_KEY: &str = "copyTradersResult";

/// File holding [`LAST_RESULT_KEY`] inside the data directory.
pub const LAST_RESULT_FILE: &str = "copyTradersResult.json";

/// One-slot store for the most recent successful analysis.
///
/// Each save replaces the slot wholesale; readers see either the old or the new
/// payload, never a partial write.
#[derive(Debug, Clone)]
pub struct LastResultStore {
    path: PathBuf,
}

impl LastResultStore {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join(LAST_RESULT_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn save(&self, response: &AnalysisResponse) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, serde_json::to_vec_pretty(response)?)?;
        std::fs::rename(&tmp, &self.path)?;

        info!(path = %self.path.display(), key = LAST_RESULT_KEY, "stored analysis result");
        Ok(())
    }

    /// `Ok(None)` when nothing has been stored yet.
    pub fn load(&self) -> Result<Option<AnalysisResponse>> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no stored analysis result");
            return Ok(None);
        }

        let content = std::fs::read(&self.path)?;
        let response = serde_json::from_slice(&content)?;
        Ok(Some(response))
    }

    pub fn clear(&self) -> Result<bool> {
        if !self.path.exists() {
            return Ok(false);
        }
        std::fs::remove_file(&self.path)?;
        Ok(true)
    }
}
