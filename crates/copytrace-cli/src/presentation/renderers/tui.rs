//! Interactive leaderboard for `copytrace browse`.
//!
//! The app owns a `ViewController`; every key press goes through it and the
//! screen is rebuilt from a fresh view model on each draw.

use std::io;
use std::time::Duration;

use anyhow::Result;
use copytrace_engine::ViewController;
use copytrace_types::{AnalysisResponse, SortField, TierScheme};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Frame, Terminal, backend::CrosstermBackend};

use crate::presentation::presenters::present_leaderboard;
use crate::presentation::views::tui::LeaderboardScreen;

pub struct BrowseApp {
    controller: ViewController,
    response: AnalysisResponse,
    scheme: TierScheme,
    should_quit: bool,
}

impl BrowseApp {
    pub fn new(controller: ViewController, response: AnalysisResponse, scheme: TierScheme) -> Self {
        Self {
            controller,
            response,
            scheme,
            should_quit: false,
        }
    }

    pub fn controller(&self) -> &ViewController {
        &self.controller
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn run(mut self) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.event_loop(&mut terminal);

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    fn event_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
        while !self.should_quit {
            terminal.draw(|f| self.draw(f))?;

            if event::poll(Duration::from_millis(250))?
                && let Event::Key(key) = event::read()?
            {
                self.handle_key_event(key);
            }
        }
        Ok(())
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char(c @ '1'..='5') => {
                let index = c as usize - '1' as usize;
                self.controller.select_sort(SortField::ALL[index]);
            }
            KeyCode::Char('r') => self.controller.toggle_direction(),
            KeyCode::Left | KeyCode::Char('h') => self.controller.previous_page(),
            KeyCode::Right | KeyCode::Char('l') => self.controller.next_page(),
            KeyCode::Home => self.controller.go_to_page(1),
            KeyCode::End => self.controller.go_to_page(usize::MAX),
            _ => {}
        }
    }

    fn draw(&self, f: &mut Frame) {
        let Some(view) = self.controller.view() else {
            return;
        };
        let model = present_leaderboard(view, self.scheme, &self.response).content;
        f.render_widget(LeaderboardScreen::new(&model), f.area());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use copytrace_engine::ViewOptions;
    use copytrace_testing::fixtures::{LEADER_WALLET, success_response};
    use copytrace_types::SortDirection;
    use crossterm::event::KeyModifiers;
    use ratatui::backend::TestBackend;

    fn app(count: usize) -> BrowseApp {
        let scores: Vec<f64> = (0..count).map(|i| i as f64 / count.max(1) as f64).collect();
        let response = success_response(LEADER_WALLET, &scores);
        let controller = ViewController::from_persisted(&response, ViewOptions::default());
        BrowseApp::new(controller, response, TierScheme::Confidence)
    }

    fn press(app: &mut BrowseApp, code: KeyCode) {
        app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_number_keys_select_and_toggle_sort() {
        let mut app = app(5);

        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.controller().state().sort_field, SortField::Hits);
        assert_eq!(app.controller().state().sort_direction, SortDirection::Desc);

        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.controller().state().sort_direction, SortDirection::Asc);

        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.controller().state().sort_direction, SortDirection::Desc);
    }

    #[test]
    fn test_arrow_keys_page_within_bounds() {
        let mut app = app(250);

        press(&mut app, KeyCode::Left);
        assert_eq!(app.controller().state().current_page, 1);

        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Char('l'));
        press(&mut app, KeyCode::Right);
        assert_eq!(app.controller().state().current_page, 3);

        press(&mut app, KeyCode::Char('h'));
        assert_eq!(app.controller().state().current_page, 2);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = app(1);
        assert!(!app.should_quit());
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit());
    }

    #[test]
    fn test_draw_shows_range_footer() -> Result<()> {
        let app = app(3);
        let mut terminal = Terminal::new(TestBackend::new(140, 20))?;
        terminal.draw(|f| app.draw(f))?;

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(text.contains("Showing 1-3 of 3"));
        Ok(())
    }
}
