use copytrace_types::ViewState;
use std::path::Path;

use crate::presentation::view_models::{CommandResultViewModel, ExportViewModel, StatusBadge};

pub fn present_export(
    reference_wallet: String,
    output_path: &Path,
    exported: usize,
    state: ViewState,
) -> CommandResultViewModel<ExportViewModel> {
    let content = ExportViewModel {
        reference_wallet,
        output_path: output_path.display().to_string(),
        exported,
        sort_field: state.sort_field,
        sort_direction: state.sort_direction,
    };

    let label = format!("Exported {} rows to {}", exported, output_path.display());
    CommandResultViewModel::new(content).with_badge(StatusBadge::success(label))
}
