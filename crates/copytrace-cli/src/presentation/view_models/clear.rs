use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ClearViewModel {
    pub path: String,
    pub removed: bool,
}
