use copytrace_engine::{Phase, ViewController, ViewOptions};
use copytrace_types::{AnalysisResponse, TransactionsResponse, validate_wallet};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::backend::BackendClient;
use crate::config::Config;
use crate::storage::LastResultStore;
use crate::{Error, Result};

/// A finished analysis: the payload as received plus a controller ready to render it.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub response: AnalysisResponse,
    pub controller: ViewController,
}

/// Entry point tying configuration, the last-result slot and the backend together.
pub struct CopyTrace {
    data_dir: PathBuf,
    config: Config,
    store: LastResultStore,
    backend: BackendClient,
}

impl CopyTrace {
    pub fn open(data_dir: PathBuf) -> Result<Self> {
        let config = Config::load_from(&Config::path_in(&data_dir))?.with_env_overrides();
        config.validate()?;

        let backend = BackendClient::new(&config.backend)?;
        let store = LastResultStore::new(&data_dir);

        Ok(Self {
            data_dir,
            config,
            store,
            backend,
        })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn store(&self) -> &LastResultStore {
        &self.store
    }

    pub fn view_options(&self) -> Result<ViewOptions> {
        self.config.view_options()
    }

    /// Validate, fetch and store the analysis for `input`.
    ///
    /// Only successful payloads replace the stored result.
    pub async fn analyze(&self, input: &str) -> Result<Analysis> {
        let mut controller = ViewController::new(self.view_options()?);
        let wallet = controller.submit(input)?;

        let mut response = match self.backend.analyze_wallet(&wallet).await {
            Ok(response) => response,
            Err(err) => {
                controller.fail(err.to_string());
                return Err(err);
            }
        };

        response.set_wallet_address(&wallet);
        controller.receive(&response);
        if let Phase::Failed { message } = controller.phase() {
            return Err(Error::fetch(message.clone()));
        }

        self.store.save(&response)?;
        info!(
            wallet = %wallet,
            followers = controller.result().map_or(0, |r| r.len()),
            "analysis complete"
        );

        Ok(Analysis {
            response,
            controller,
        })
    }

    /// The stored payload, if any.
    pub fn last_response(&self) -> Result<AnalysisResponse> {
        self.store.load()?.ok_or(Error::NoResult)
    }

    /// A controller initialised from the stored result.
    pub fn last_result(&self) -> Result<ViewController> {
        let response = self.last_response()?;
        if response.is_success() && response.data.is_some() && response.wallet_address().is_none()
        {
            return Err(Error::Decode(
                "stored result does not name its reference wallet".to_string(),
            ));
        }
        let controller = ViewController::from_persisted(&response, self.view_options()?);
        if controller.phase() != &Phase::Ready {
            return Err(Error::NoResult);
        }
        Ok(controller)
    }

    pub async fn copy_transactions(
        &self,
        leader: &str,
        follower: &str,
    ) -> Result<TransactionsResponse> {
        let leader = validate_wallet(leader)?;
        let follower = validate_wallet(follower)?;
        self.backend.copy_transactions(&leader, &follower).await
    }
}
