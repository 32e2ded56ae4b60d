//! Ratatui widgets for `copytrace browse`.

use copytrace_types::{SortDirection, SortField, Tier};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, Widget},
};

use crate::presentation::formatters::{format_delay, format_percent, format_score};
use crate::presentation::presenters::leaderboard::EMPTY_LEADERBOARD_MESSAGE;
use crate::presentation::view_models::LeaderboardViewModel;

const COLUMNS: [(SortField, &str); 5] = [
    (SortField::Tier, "1 Tier"),
    (SortField::Score, "2 Score"),
    (SortField::Hits, "3 Hits"),
    (SortField::Breadth, "4 Breadth"),
    (SortField::AvgDelay, "5 Avg delay"),
];

pub fn tier_color(tier: Tier) -> Color {
    match tier {
        Tier::High => Color::Green,
        Tier::Medium => Color::Yellow,
        Tier::Low => Color::Blue,
        Tier::Unknown => Color::DarkGray,
    }
}

pub struct LeaderboardScreen<'a> {
    model: &'a LeaderboardViewModel,
}

impl<'a> LeaderboardScreen<'a> {
    pub fn new(model: &'a LeaderboardViewModel) -> Self {
        Self { model }
    }

    fn render_summary(&self, area: Rect, buf: &mut Buffer) {
        let dist = &self.model.distribution;
        let mut tiers = vec![Span::raw("Tiers: ")];
        for (i, share) in dist.tiers.iter().enumerate() {
            if i > 0 {
                tiers.push(Span::raw(" | "));
            }
            tiers.push(Span::styled(
                format!(
                    "{} {} ({:.1}%)",
                    self.model.scheme.label(share.tier),
                    share.count,
                    share.percent
                ),
                Style::default().fg(tier_color(share.tier)),
            ));
        }

        let lines = vec![
            Line::from(format!("Reference wallet: {}", self.model.reference_wallet)),
            Line::from(tiers),
            Line::from(format!(
                "Likely copy traders: {} of {} ({})",
                dist.likely_copy_traders,
                dist.total,
                format_percent(dist.copy_rate)
            )),
        ];

        Paragraph::new(lines)
            .block(Block::default().title(" copytrace ").borders(Borders::ALL))
            .render(area, buf);
    }

    fn render_table(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default().borders(Borders::ALL);

        if self.model.is_empty() {
            Paragraph::new(EMPTY_LEADERBOARD_MESSAGE)
                .block(block)
                .render(area, buf);
            return;
        }

        let mut header_cells = vec![Cell::from("#"), Cell::from("Address")];
        for (field, title) in COLUMNS {
            let title = if self.model.sort.field == field {
                let arrow = match self.model.sort.direction {
                    SortDirection::Asc => "▲",
                    SortDirection::Desc => "▼",
                };
                format!("{} {}", title, arrow)
            } else {
                title.to_string()
            };
            header_cells.push(Cell::from(title));
        }
        let header = Row::new(header_cells).style(Style::default().add_modifier(Modifier::BOLD));

        let rows = self.model.rows.iter().map(|row| {
            Row::new(vec![
                Cell::from(row.rank.to_string()),
                Cell::from(row.address.clone()),
                Cell::from(row.tier_label.clone()),
                Cell::from(format_score(row.score)),
                Cell::from(row.hits.to_string()),
                Cell::from(row.breadth.to_string()),
                Cell::from(format_delay(row.avg_delay)),
            ])
            .style(Style::default().fg(tier_color(row.tier)))
        });

        let widths = [
            Constraint::Length(6),
            Constraint::Length(46),
            Constraint::Length(20),
            Constraint::Length(10),
            Constraint::Length(8),
            Constraint::Length(11),
            Constraint::Length(14),
        ];

        Table::new(rows, widths)
            .header(header)
            .block(block)
            .render(area, buf);
    }

    fn render_footer(&self, area: Rect, buf: &mut Buffer) {
        let page = &self.model.page;
        let key = Style::default().fg(Color::Yellow);

        let line = Line::from(vec![
            Span::raw(format!(
                "Showing {}-{} of {}  (page {}/{})   ",
                if page.total_items == 0 {
                    0
                } else {
                    page.start_index + 1
                },
                page.end_index,
                page.total_items,
                page.page,
                page.total_pages
            )),
            Span::styled("[1-5]", key),
            Span::raw("sort "),
            Span::styled("[r]", key),
            Span::raw("everse "),
            Span::styled("[←/→]", key),
            Span::raw("page "),
            Span::styled("[q]", key),
            Span::raw("uit"),
        ]);

        Paragraph::new(line)
            .block(Block::default().borders(Borders::ALL))
            .render(area, buf);
    }
}

impl<'a> Widget for LeaderboardScreen<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::vertical([
            Constraint::Length(5),
            Constraint::Min(5),
            Constraint::Length(3),
        ])
        .split(area);

        self.render_summary(chunks[0], buf);
        self.render_table(chunks[1], buf);
        self.render_footer(chunks[2], buf);
    }
}
