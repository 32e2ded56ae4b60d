use std::fmt;

use crate::presentation::view_models::{CreateView, DisplayOptions, ExportViewModel, ViewMode};

impl CreateView for ExportViewModel {
    fn create_view<'a>(&'a self, options: DisplayOptions) -> Box<dyn fmt::Display + 'a> {
        Box::new(ExportView {
            data: self,
            mode: options.mode,
        })
    }
}

struct ExportView<'a> {
    data: &'a ExportViewModel,
    mode: ViewMode,
}

impl<'a> fmt::Display for ExportView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.mode == ViewMode::Minimal {
            return writeln!(f, "{}", self.data.output_path);
        }
        writeln!(
            f,
            "Followers of {} sorted by {} ({})",
            self.data.reference_wallet, self.data.sort_field, self.data.sort_direction
        )
    }
}
