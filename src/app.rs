/// Main TUI application

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;

use crate::core::Dataset;
use crate::screens::Dashboard;
use crate::utils::AppConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Resources,
    Costs,
    Optimization,
    Alerts,
}

impl Tab {
    pub fn title(&self) -> &'static str {
        match self {
            Tab::Resources => "Resource Usage",
            Tab::Costs => "Cost Analysis",
            Tab::Optimization => "Optimization",
            Tab::Alerts => "Alerts & Monitoring",
        }
    }

    pub fn all() -> &'static [Tab] {
        &[Tab::Resources, Tab::Costs, Tab::Optimization, Tab::Alerts]
    }

    pub fn next(&self) -> Tab {
        match self {
            Tab::Resources => Tab::Costs,
            Tab::Costs => Tab::Optimization,
            Tab::Optimization => Tab::Alerts,
            Tab::Alerts => Tab::Resources,
        }
    }

    pub fn prev(&self) -> Tab {
        match self {
            Tab::Resources => Tab::Alerts,
            Tab::Costs => Tab::Resources,
            Tab::Optimization => Tab::Costs,
            Tab::Alerts => Tab::Optimization,
        }
    }
}

/// Selected reporting window, shown in the header
///
/// Nothing downstream consumes it yet; the demo dataset is the same for
/// every range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeRange {
    LastHour,
    #[default]
    Last24Hours,
    Last7Days,
    Last30Days,
}

impl TimeRange {
    pub fn label(&self) -> &'static str {
        match self {
            TimeRange::LastHour => "1h",
            TimeRange::Last24Hours => "24h",
            TimeRange::Last7Days => "7d",
            TimeRange::Last30Days => "30d",
        }
    }

    pub fn next(&self) -> TimeRange {
        match self {
            TimeRange::LastHour => TimeRange::Last24Hours,
            TimeRange::Last24Hours => TimeRange::Last7Days,
            TimeRange::Last7Days => TimeRange::Last30Days,
            TimeRange::Last30Days => TimeRange::LastHour,
        }
    }
}

impl From<&str> for TimeRange {
    fn from(value: &str) -> Self {
        match value {
            "1h" => TimeRange::LastHour,
            "24h" => TimeRange::Last24Hours,
            "7d" => TimeRange::Last7Days,
            "30d" => TimeRange::Last30Days,
            _ => TimeRange::default(),
        }
    }
}

pub struct App {
    dashboard: Dashboard,
    config: AppConfig,
    current_tab: Tab,
    time_range: TimeRange,
    selected_index: usize,
    should_quit: bool,
    show_help: bool,
    status_message: Option<String>,
}

impl App {
    pub fn new() -> Result<Self> {
        let config = match AppConfig::load() {
            Ok(config) => config,
            Err(e) => {
                log::warn!("could not load config: {}", e);
                AppConfig::default()
            }
        };
        let time_range = config
            .default_time_range
            .as_deref()
            .map(TimeRange::from)
            .unwrap_or_default();

        let dashboard = Dashboard::new(Dataset::demo());
        log::info!("dashboard initialized, time range {}", time_range.label());

        Ok(Self {
            dashboard,
            config,
            current_tab: Tab::Resources,
            time_range,
            selected_index: 0,
            should_quit: false,
            show_help: false,
            status_message: None,
        })
    }

    fn set_status(&mut self, message: String) {
        self.status_message = Some(message);
    }

    fn clear_status(&mut self) {
        self.status_message = None;
    }

    pub fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.run_loop(&mut terminal);

        // Restore terminal
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    fn run_loop<B: ratatui::backend::Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if event::poll(Duration::from_millis(100))? {
                if let Event::Key(key_event) = event::read()? {
                    self.handle_key(key_event.code)?;
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn render(&self, frame: &mut ratatui::Frame) {
        self.dashboard.render(
            frame,
            self.current_tab,
            self.time_range,
            self.selected_index,
            self.status_message.as_deref(),
            self.show_help,
        );
    }

    fn handle_key(&mut self, key: KeyCode) -> Result<()> {
        // Any key dismisses a stale status message
        self.clear_status();

        match key {
            KeyCode::Char('q') => {
                self.should_quit = true;
            }
            KeyCode::Esc => {
                if self.show_help {
                    self.show_help = false;
                } else {
                    self.should_quit = true;
                }
            }
            KeyCode::Char('?') | KeyCode::F(1) => {
                self.show_help = !self.show_help;
            }
            KeyCode::Right | KeyCode::Tab => {
                self.current_tab = self.current_tab.next();
                self.selected_index = 0;
            }
            KeyCode::Left | KeyCode::BackTab => {
                self.current_tab = self.current_tab.prev();
                self.selected_index = 0;
            }
            KeyCode::Char('1') => {
                self.current_tab = Tab::Resources;
                self.selected_index = 0;
            }
            KeyCode::Char('2') => {
                self.current_tab = Tab::Costs;
                self.selected_index = 0;
            }
            KeyCode::Char('3') => {
                self.current_tab = Tab::Optimization;
                self.selected_index = 0;
            }
            KeyCode::Char('4') => {
                self.current_tab = Tab::Alerts;
                self.selected_index = 0;
            }
            KeyCode::Up | KeyCode::Char('k') => {
                if self.selected_index > 0 {
                    self.selected_index -= 1;
                }
            }
            KeyCode::Down | KeyCode::Char('j') => {
                let max = self.get_max_selection();
                if self.selected_index < max {
                    self.selected_index += 1;
                }
            }
            KeyCode::Char('t') => {
                self.time_range = self.time_range.next();
                if let Err(e) = self.config.set_default_time_range(self.time_range.label()) {
                    log::debug!("could not persist time range: {}", e);
                }
                self.set_status(format!("Time range: {}", self.time_range.label()));
            }
            KeyCode::Char('r') => {
                self.dashboard.update_data(Dataset::demo());
                self.set_status("Refreshed".to_string());
            }
            KeyCode::Char('e') => {
                self.set_status("Report export is not available in this build".to_string());
            }
            KeyCode::Char('s') => {
                self.set_status("Settings are not available in this build".to_string());
            }
            _ => {}
        }

        Ok(())
    }

    fn get_max_selection(&self) -> usize {
        let data = self.dashboard.data();
        match self.current_tab {
            Tab::Resources | Tab::Costs => data.resources.len().saturating_sub(1),
            Tab::Optimization => data.optimizations.len().saturating_sub(1),
            Tab::Alerts => data.alerts.len().saturating_sub(1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_cycle_wraps() {
        let mut tab = Tab::Resources;
        for _ in 0..Tab::all().len() {
            tab = tab.next();
        }
        assert_eq!(tab, Tab::Resources);

        assert_eq!(Tab::Resources.prev(), Tab::Alerts);
        assert_eq!(Tab::Alerts.next(), Tab::Resources);
    }

    #[test]
    fn test_tab_titles() {
        let titles: Vec<&str> = Tab::all().iter().map(|t| t.title()).collect();
        assert_eq!(
            titles,
            vec![
                "Resource Usage",
                "Cost Analysis",
                "Optimization",
                "Alerts & Monitoring"
            ]
        );
    }

    #[test]
    fn test_time_range_parse_falls_back_to_default() {
        assert_eq!(TimeRange::from("7d"), TimeRange::Last7Days);
        assert_eq!(TimeRange::from("1h"), TimeRange::LastHour);
        assert_eq!(TimeRange::from("yearly"), TimeRange::Last24Hours);
    }

    #[test]
    fn test_time_range_cycle_wraps() {
        let mut range = TimeRange::default();
        for _ in 0..4 {
            range = range.next();
        }
        assert_eq!(range, TimeRange::default());
    }
}
