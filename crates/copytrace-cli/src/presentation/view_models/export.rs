use copytrace_types::{SortDirection, SortField};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ExportViewModel {
    pub reference_wallet: String,
    pub output_path: String,
    pub exported: usize,
    pub sort_field: SortField,
    pub sort_direction: SortDirection,
}
