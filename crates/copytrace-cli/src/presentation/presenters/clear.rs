use std::path::Path;

use crate::presentation::view_models::{
    ClearViewModel, CommandResultViewModel, Guidance, StatusBadge,
};

pub fn present_clear(path: &Path, removed: bool) -> CommandResultViewModel<ClearViewModel> {
    let content = ClearViewModel {
        path: path.display().to_string(),
        removed,
    };

    let badge = if removed {
        StatusBadge::success("Stored result cleared")
    } else {
        StatusBadge::info("No stored result to clear")
    };

    CommandResultViewModel::new(content)
        .with_badge(badge)
        .with_suggestion(
            Guidance::new("Run a new analysis").with_command("copytrace analyze <WALLET>"),
        )
}
