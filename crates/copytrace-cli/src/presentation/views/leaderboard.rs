use std::fmt;

use copytrace_types::{SortDirection, SortField, StepStatus};
use owo_colors::Style;

use crate::presentation::formatters::{
    format_delay, format_percent, format_score, paint, tier_style,
};
use crate::presentation::presenters::leaderboard::EMPTY_LEADERBOARD_MESSAGE;
use crate::presentation::view_models::{
    CreateView, DisplayOptions, LeaderboardViewModel, ViewMode,
};

impl CreateView for LeaderboardViewModel {
    fn create_view<'a>(&'a self, options: DisplayOptions) -> Box<dyn fmt::Display + 'a> {
        match options.mode {
            ViewMode::Minimal => Box::new(AddressListView { data: self }),
            _ => Box::new(LeaderboardView {
                data: self,
                options,
            }),
        }
    }
}

// --------------------------------------------------------
// Minimal: one address per line
// --------------------------------------------------------

struct AddressListView<'a> {
    data: &'a LeaderboardViewModel,
}

impl<'a> fmt::Display for AddressListView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in &self.data.rows {
            writeln!(f, "{}", row.address)?;
        }
        Ok(())
    }
}

// --------------------------------------------------------
// Table
// --------------------------------------------------------

struct LeaderboardView<'a> {
    data: &'a LeaderboardViewModel,
    options: DisplayOptions,
}

impl<'a> LeaderboardView<'a> {
    fn verbose(&self) -> bool {
        self.options.mode == ViewMode::Verbose
    }

    fn summary(&self) -> bool {
        matches!(self.options.mode, ViewMode::Standard | ViewMode::Verbose)
    }

    fn header(&self, field: SortField, title: &str) -> String {
        if self.data.sort.field != field {
            return title.to_string();
        }
        let arrow = match self.data.sort.direction {
            SortDirection::Asc => "▲",
            SortDirection::Desc => "▼",
        };
        format!("{} {}", title, arrow)
    }

    fn write_summary(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let data = self.data;
        let color = self.options.enable_color;

        writeln!(f, "Reference wallet: {}", data.reference_wallet)?;
        if let Some(at) = &data.analyzed_at {
            writeln!(f, "Analyzed at:      {}", at)?;
        }

        if self.verbose() && !data.progress.is_empty() {
            writeln!(f, "Steps:")?;
            for step in &data.progress {
                let mark = match step.status {
                    StepStatus::Completed => "✓",
                    StepStatus::Failed => "✗",
                    StepStatus::Pending | StepStatus::Unknown => "·",
                };
                writeln!(f, "  {} {}", mark, step.step)?;
            }
            if let Some(current) = &data.current_step {
                writeln!(f, "Last step: {}", current)?;
            }
            if let Some(next) = &data.next_step {
                writeln!(f, "Next step: {}", next)?;
            }
        }
        writeln!(f)?;

        let dist = &data.distribution;
        let parts: Vec<String> = dist
            .tiers
            .iter()
            .map(|share| {
                paint(
                    format!(
                        "{} {} ({:.1}%)",
                        data.scheme.label(share.tier),
                        share.count,
                        share.percent
                    ),
                    tier_style(share.tier),
                    color,
                )
            })
            .collect();
        writeln!(f, "Tiers: {}", parts.join(" | "))?;
        writeln!(
            f,
            "Likely copy traders: {} of {} ({})",
            dist.likely_copy_traders,
            dist.total,
            format_percent(dist.copy_rate)
        )?;
        writeln!(f)
    }
}

impl<'a> fmt::Display for LeaderboardView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let data = self.data;
        let color = self.options.enable_color;

        if self.summary() {
            self.write_summary(f)?;
        }

        if data.is_empty() {
            writeln!(f, "{}", EMPTY_LEADERBOARD_MESSAGE)?;
            return Ok(());
        }

        let mut header = format!(
            "{:<6} {:<46} {:<20} {:<9} {:<8} {:<10} {:<12}",
            "RANK",
            "ADDRESS",
            self.header(SortField::Tier, "TIER"),
            self.header(SortField::Score, "SCORE"),
            self.header(SortField::Hits, "HITS"),
            self.header(SortField::Breadth, "BREADTH"),
            self.header(SortField::AvgDelay, "AVG DELAY"),
        );
        if self.verbose() {
            header.push_str(&format!(
                " {:<12} {:<6} {:<6} {:<6}",
                "MED DELAY", "FREQ", "SPEED", "BRDTH"
            ));
        }
        writeln!(f, "{}", paint(header.trim_end(), Style::new().bold(), color))?;
        writeln!(f, "{}", "-".repeat(if self.verbose() { 150 } else { 118 }))?;

        for row in &data.rows {
            let tier = paint(
                format!("{:<20}", row.tier_label),
                tier_style(row.tier),
                color,
            );
            let mut line = format!(
                "{:<6} {:<46} {} {:<9} {:<8} {:<10} {:<12}",
                row.rank,
                row.address,
                tier,
                format_score(row.score),
                row.hits,
                row.breadth,
                format_delay(row.avg_delay),
            );
            if self.verbose() {
                line.push_str(&format!(
                    " {:<12} {:<6.2} {:<6.2} {:<6.2}",
                    format_delay(row.median_delay),
                    row.freq_norm,
                    row.speed_norm,
                    row.breadth_norm
                ));
            }
            writeln!(f, "{}", line.trim_end())?;
        }

        let page = &data.page;
        writeln!(f)?;
        writeln!(
            f,
            "Showing {}-{} of {} (page {} of {})",
            page.start_index + 1,
            page.end_index,
            page.total_items,
            page.page,
            page.total_pages
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::presenters::present_analysis;
    use copytrace_engine::{ViewController, ViewOptions};
    use copytrace_testing::fixtures::{LEADER_WALLET, success_response};
    use copytrace_types::TierScheme;

    fn render(scores: &[f64], mode: ViewMode) -> String {
        let response = success_response(LEADER_WALLET, scores);
        let controller = ViewController::from_persisted(&response, ViewOptions::default());
        let view = controller.view().unwrap();
        let result = present_analysis(view, TierScheme::Confidence, &response);
        let options = DisplayOptions {
            mode,
            enable_color: false,
        };
        result.content.create_view(options).to_string()
    }

    #[test]
    fn test_standard_view_shows_summary_and_range() {
        let out = render(&[0.2, 0.9, 0.6], ViewMode::Standard);

        assert!(out.contains(&format!("Reference wallet: {}", LEADER_WALLET)));
        assert!(out.contains("Likely copy traders: 2 of 3 (66.7%)"));
        assert!(out.contains("High Confidence 1 (33.3%) | Medium Confidence 1 (33.3%)"));
        assert!(out.contains("Low Confidence 0 (0.0%) | Unknown 1 (33.3%)"));
        assert!(out.contains("SCORE ▼"));
        assert!(out.contains("High Confidence"));
        assert!(out.contains("Showing 1-3 of 3 (page 1 of 1)"));
    }

    #[test]
    fn test_minimal_view_prints_addresses_only() {
        let out = render(&[0.2, 0.9], ViewMode::Minimal);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(!out.contains("Showing"));
    }

    #[test]
    fn test_compact_view_skips_summary() {
        let out = render(&[0.9], ViewMode::Compact);
        assert!(!out.contains("Reference wallet"));
        assert!(out.contains("Showing 1-1 of 1"));
    }

    #[test]
    fn test_verbose_view_adds_metric_columns() {
        let out = render(&[0.9], ViewMode::Verbose);
        assert!(out.contains("MED DELAY"));
        assert!(out.contains("Steps:"));
    }

    #[test]
    fn test_empty_view_message() {
        let out = render(&[], ViewMode::Standard);
        assert!(out.contains(EMPTY_LEADERBOARD_MESSAGE));
        assert!(!out.contains("RANK"));
    }
}
