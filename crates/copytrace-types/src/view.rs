use serde::{Deserialize, Serialize};
use std::fmt;

/// Column the leaderboard is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    Tier,
    #[default]
    Score,
    Hits,
    Breadth,
    AvgDelay,
}

impl SortField {
    pub const ALL: [SortField; 5] = [
        SortField::Tier,
        SortField::Score,
        SortField::Hits,
        SortField::Breadth,
        SortField::AvgDelay,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SortField::Tier => "tier",
            SortField::Score => "score",
            SortField::Hits => "hits",
            SortField::Breadth => "breadth",
            SortField::AvgDelay => "avg_delay",
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    pub fn toggle(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User-controlled leaderboard state. Pages are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    pub sort_field: SortField,
    pub sort_direction: SortDirection,
    pub current_page: usize,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            sort_field: SortField::Score,
            sort_direction: SortDirection::Desc,
            current_page: 1,
        }
    }
}

impl ViewState {
    /// Selecting a new column sorts it descending; selecting the active column
    /// flips direction. Either way the view returns to the first page.
    pub fn select_sort(&mut self, field: SortField) {
        if self.sort_field == field {
            self.sort_direction = self.sort_direction.toggle();
        } else {
            self.sort_field = field;
            self.sort_direction = SortDirection::Desc;
        }
        self.current_page = 1;
    }

    pub fn toggle_direction(&mut self) {
        self.sort_direction = self.sort_direction.toggle();
        self.current_page = 1;
    }
}
