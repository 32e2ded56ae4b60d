use copytrace_runtime::Config;
use std::path::Path;

use crate::presentation::view_models::{
    CommandResultViewModel, ConfigViewModel, Guidance, StatusBadge,
};

pub fn present_config_show(
    path: &Path,
    exists: bool,
    config: Config,
) -> CommandResultViewModel<ConfigViewModel> {
    let content = ConfigViewModel {
        path: path.display().to_string(),
        exists,
        config,
        written: None,
    };

    let mut result = CommandResultViewModel::new(content);
    if !exists {
        result = result.with_suggestion(
            Guidance::new("Write these defaults to disk").with_command("copytrace config init"),
        );
    }
    result
}

pub fn present_config_init(
    path: &Path,
    written: bool,
    config: Config,
) -> CommandResultViewModel<ConfigViewModel> {
    let content = ConfigViewModel {
        path: path.display().to_string(),
        exists: true,
        config,
        written: Some(written),
    };

    if written {
        CommandResultViewModel::new(content)
            .with_badge(StatusBadge::success(format!("Wrote {}", path.display())))
    } else {
        CommandResultViewModel::new(content)
            .with_badge(StatusBadge::warning(format!(
                "{} already exists",
                path.display()
            )))
            .with_suggestion(
                Guidance::new("Overwrite it with defaults")
                    .with_command("copytrace config init --force"),
            )
    }
}
