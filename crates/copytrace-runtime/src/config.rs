use crate::{Error, Result};
use copytrace_engine::{TierClassifier, ViewOptions};
use copytrace_types::{BelowThresholdPolicy, TierScheme, TierThresholds};
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

/// Environment variable overriding the workspace data directory.
pub const PATH_ENV: &str = "COPYTRACE_PATH";

/// Environment variable overriding `backend.base_url`.
pub const BACKEND_URL_ENV: &str = "COPYTRACE_BACKEND_URL";

/// Resolve the workspace data directory path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. COPYTRACE_PATH environment variable (with tilde expansion)
/// 3. XDG data directory (recommended default)
/// 4. ~/.copytrace (fallback for systems without XDG)
pub fn resolve_workspace_path(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var(PATH_ENV) {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(data_dir) = dirs::data_dir() {
        return Ok(data_dir.join("copytrace"));
    }

    if let Some(home) = dirs::home_dir() {
        return Ok(home.join(".copytrace"));
    }

    Err(Error::Config(
        "Could not determine workspace path: no HOME directory or XDG data directory found"
            .to_string(),
    ))
}

fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(stripped);
    }
    PathBuf::from(path)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackendConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Wallet analysis runs the whole backend pipeline, so this is generous.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_timeout_secs() -> u64 {
    300
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    #[serde(default)]
    pub tier_scheme: TierScheme,
    #[serde(default)]
    pub below_threshold: BelowThresholdPolicy,
    #[serde(default)]
    pub thresholds: TierThresholds,
}

fn default_page_size() -> usize {
    100
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            tier_scheme: TierScheme::default(),
            below_threshold: BelowThresholdPolicy::default(),
            thresholds: TierThresholds::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub backend: BackendConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn path_in(data_dir: &Path) -> PathBuf {
        data_dir.join("config.toml")
    }

    pub fn validate(&self) -> Result<()> {
        if self.display.page_size == 0 {
            return Err(Error::Config(
                "display.page_size must be greater than zero".to_string(),
            ));
        }
        if self.backend.base_url.trim().is_empty() {
            return Err(Error::Config("backend.base_url is empty".to_string()));
        }
        self.display.thresholds.validate()?;
        Ok(())
    }

    /// Apply environment overrides on top of the file contents.
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(url) = std::env::var(BACKEND_URL_ENV)
            && !url.trim().is_empty()
        {
            self.backend.base_url = url;
        }
        self
    }

    pub fn classifier(&self) -> Result<TierClassifier> {
        Ok(TierClassifier::new(self.display.thresholds)?
            .with_scheme(self.display.tier_scheme)
            .with_policy(self.display.below_threshold))
    }

    pub fn view_options(&self) -> Result<ViewOptions> {
        let page_size = NonZeroUsize::new(self.display.page_size).ok_or_else(|| {
            Error::Config("display.page_size must be greater than zero".to_string())
        })?;
        Ok(ViewOptions {
            classifier: self.classifier()?,
            page_size,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.backend.base_url, "http://localhost:8000");
        assert_eq!(config.display.page_size, 100);
        assert_eq!(config.display.tier_scheme, TierScheme::Confidence);
        assert_eq!(config.display.below_threshold, BelowThresholdPolicy::Label);
    }

    #[test]
    fn test_missing_file_yields_default() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config = Config::load_from(&temp_dir.path().join("config.toml"))?;
        assert_eq!(config, Config::default());
        Ok(())
    }

    #[test]
    fn test_config_save_and_load() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = Config::path_in(temp_dir.path());

        let mut config = Config::default();
        config.backend.base_url = "http://analysis.internal:9000".to_string();
        config.display.page_size = 25;
        config.display.tier_scheme = TierScheme::Legacy;
        config.display.below_threshold = BelowThresholdPolicy::Exclude;

        config.save_to(&config_path)?;
        assert!(config_path.exists());

        let loaded = Config::load_from(&config_path)?;
        assert_eq!(loaded, config);
        Ok(())
    }

    #[test]
    fn test_partial_file_fills_defaults() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = Config::path_in(temp_dir.path());
        std::fs::write(
            &config_path,
            "[display]\nbelow_threshold = \"exclude\"\n\n[display.thresholds]\nhigh = 0.8\nmedium = 0.6\nlow = 0.4\n",
        )?;

        let config = Config::load_from(&config_path)?;
        assert_eq!(config.display.below_threshold, BelowThresholdPolicy::Exclude);
        assert_eq!(config.display.page_size, 100);
        assert_eq!(config.display.thresholds.high, 0.8);
        assert_eq!(config.backend, BackendConfig::default());
        Ok(())
    }

    #[test]
    fn test_partial_thresholds_keep_remaining_defaults() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = Config::path_in(temp_dir.path());
        std::fs::write(&config_path, "[display.thresholds]\nhigh = 0.8\n")?;

        let config = Config::load_from(&config_path)?;
        assert_eq!(
            config.display.thresholds,
            TierThresholds {
                high: 0.8,
                ..TierThresholds::default()
            }
        );
        Ok(())
    }

    #[test]
    fn test_invalid_values_are_rejected() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = Config::path_in(temp_dir.path());

        std::fs::write(&config_path, "[display]\npage_size = 0\n")?;
        assert!(matches!(
            Config::load_from(&config_path),
            Err(Error::Config(_))
        ));

        std::fs::write(
            &config_path,
            "[display.thresholds]\nhigh = 0.3\nmedium = 0.5\nlow = 0.7\n",
        )?;
        assert!(matches!(
            Config::load_from(&config_path),
            Err(Error::Types(_))
        ));

        std::fs::write(&config_path, "[display\n")?;
        assert!(matches!(
            Config::load_from(&config_path),
            Err(Error::Config(_))
        ));
        Ok(())
    }

    #[test]
    fn test_view_options_follow_display_settings() -> Result<()> {
        let mut config = Config::default();
        config.display.page_size = 10;
        config.display.tier_scheme = TierScheme::Legacy;

        let options = config.view_options()?;
        assert_eq!(options.page_size.get(), 10);
        assert_eq!(options.classifier.scheme, TierScheme::Legacy);
        Ok(())
    }

    #[test]
    fn test_explicit_workspace_path_wins() -> Result<()> {
        let path = resolve_workspace_path(Some("/tmp/copytrace-explicit"))?;
        assert_eq!(path, PathBuf::from("/tmp/copytrace-explicit"));
        Ok(())
    }
}
