use std::fmt;

use crate::presentation::view_models::{ClearViewModel, CreateView, DisplayOptions};

impl CreateView for ClearViewModel {
    fn create_view<'a>(&'a self, _options: DisplayOptions) -> Box<dyn fmt::Display + 'a> {
        Box::new(ClearView { data: self })
    }
}

struct ClearView<'a> {
    data: &'a ClearViewModel,
}

impl<'a> fmt::Display for ClearView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.data.removed {
            writeln!(f, "Removed {}", self.data.path)
        } else {
            writeln!(f, "Nothing stored at {}", self.data.path)
        }
    }
}
