use std::fmt;

use crate::presentation::view_models::{ConfigViewModel, CreateView, DisplayOptions};

impl CreateView for ConfigViewModel {
    fn create_view<'a>(&'a self, _options: DisplayOptions) -> Box<dyn fmt::Display + 'a> {
        Box::new(ConfigView { data: self })
    }
}

struct ConfigView<'a> {
    data: &'a ConfigViewModel,
}

impl<'a> fmt::Display for ConfigView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = if self.data.exists {
            ""
        } else {
            " (not created yet, showing defaults)"
        };
        writeln!(f, "# {}{}", self.data.path, state)?;

        let body = toml::to_string_pretty(&self.data.config).map_err(|_| fmt::Error)?;
        write!(f, "{}", body)
    }
}
