pub mod backend;
pub mod config;
pub mod error;
pub mod storage;
pub mod workspace;

pub use backend::BackendClient;
pub use config::{BackendConfig, Config, DisplayConfig, resolve_workspace_path};
pub use error::{Error, Result};
pub use storage::{LAST_RESULT_FILE, LAST_RESULT_KEY, LastResultStore};
pub use workspace::{Analysis, CopyTrace};
