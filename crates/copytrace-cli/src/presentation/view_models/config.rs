use copytrace_runtime::Config;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ConfigViewModel {
    pub path: String,
    pub exists: bool,
    pub config: Config,
    /// Set by `config init`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub written: Option<bool>,
}
