/// Main dashboard screen

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Clear, Gauge, Paragraph, Row, Table},
    Frame,
};

use crate::app::{Tab, TimeRange};
use crate::core::data::Dataset;
use crate::core::metrics::{clamp_percent, cost_share, total_potential};
use crate::core::model::{Alert, Optimization, ResourceUsage, ServiceHealth};
use crate::utils::{capitalize, format_currency, format_share};
use crate::widgets::{badge, centered_rect};

pub struct Dashboard {
    pub title: String,
    data: Dataset,
}

impl Dashboard {
    pub fn new(data: Dataset) -> Self {
        Self {
            title: "Cloud Resource Monitor".to_string(),
            data,
        }
    }

    pub fn update_data(&mut self, data: Dataset) {
        self.data = data;
    }

    pub fn data(&self) -> &Dataset {
        &self.data
    }

    pub fn render(
        &self,
        frame: &mut Frame,
        current_tab: Tab,
        time_range: TimeRange,
        selected_index: usize,
        status_message: Option<&str>,
        show_help: bool,
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4), // Title
                Constraint::Length(6), // Overview cards
                Constraint::Length(3), // Tab bar
                Constraint::Min(0),    // Content
                Constraint::Length(3), // Footer
            ])
            .split(frame.size());

        self.render_header(frame, chunks[0], time_range);
        self.render_overview_cards(frame, chunks[1]);
        self.render_tab_bar(frame, chunks[2], current_tab);

        // Content area - only the active tab's panel is rendered
        match current_tab {
            Tab::Resources => self.render_resources(frame, chunks[3], selected_index),
            Tab::Costs => self.render_costs(frame, chunks[3], selected_index),
            Tab::Optimization => self.render_optimization(frame, chunks[3], selected_index),
            Tab::Alerts => self.render_alerts(frame, chunks[3], selected_index),
        }

        self.render_footer(frame, chunks[4], status_message);

        // Show help overlay if requested
        if show_help {
            self.render_help(frame);
        }
    }

    fn render_header(&self, frame: &mut Frame, area: Rect, time_range: TimeRange) {
        let title_line = Line::from(vec![
            Span::styled(
                &self.title,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(
                "Springer Cloud Infrastructure Dashboard",
                Style::default().fg(Color::Gray),
            ),
        ]);

        let range_line = Line::from(vec![
            Span::styled("Range: ", Style::default().fg(Color::Gray)),
            Span::styled(
                time_range.label(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  |  "),
            Span::styled("[e] Export Report", Style::default().fg(Color::DarkGray)),
            Span::raw("  "),
            Span::styled("[s] Settings", Style::default().fg(Color::DarkGray)),
        ]);

        let header = Paragraph::new(vec![title_line, range_line])
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));

        frame.render_widget(header, area);
    }

    fn render_overview_cards(&self, frame: &mut Frame, area: Rect) {
        let cards = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(25); 4])
            .split(area);

        let m = &self.data.overview;

        // Sign is conveyed by the icon; the numeral shows the magnitude
        let (cost_icon, cost_color) = if m.monthly_cost_change <= 0.0 {
            ("↓", Color::Green)
        } else {
            ("↑", Color::Red)
        };
        let cost_card = Paragraph::new(vec![
            Line::from(Span::styled(
                format!("${}", format_currency(m.total_cost)),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(vec![
                Span::styled(format!("{} ", cost_icon), Style::default().fg(cost_color)),
                Span::styled(
                    format!("{:.1}% from last month", m.monthly_cost_change.abs()),
                    Style::default().fg(Color::Gray),
                ),
            ]),
        ])
        .block(Block::default().borders(Borders::ALL).title("Total Monthly Cost"));
        frame.render_widget(cost_card, cards[0]);

        let (res_icon, res_color) = if m.resource_change >= 0 {
            ("↑", Color::Blue)
        } else {
            ("↓", Color::Yellow)
        };
        let resources_card = Paragraph::new(vec![
            Line::from(Span::styled(
                m.active_resources.to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(vec![
                Span::styled(format!("{} ", res_icon), Style::default().fg(res_color)),
                Span::styled(
                    format!("{:+} this week", m.resource_change),
                    Style::default().fg(Color::Gray),
                ),
            ]),
        ])
        .block(Block::default().borders(Borders::ALL).title("Active Resources"));
        frame.render_widget(resources_card, cards[1]);

        let (eff_icon, eff_color) = if m.efficiency_change >= 0.0 {
            ("↑", Color::Green)
        } else {
            ("↓", Color::Red)
        };
        let efficiency_card = Paragraph::new(vec![
            Line::from(Span::styled(
                format!("{}%", m.efficiency),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(vec![
                Span::styled(format!("{} ", eff_icon), Style::default().fg(eff_color)),
                Span::styled(
                    format!("{:+.1}% improvement", m.efficiency_change),
                    Style::default().fg(Color::Gray),
                ),
            ]),
        ])
        .block(Block::default().borders(Borders::ALL).title("Efficiency Score"));
        frame.render_widget(efficiency_card, cards[2]);

        let alerts_card = Paragraph::new(vec![
            Line::from(Span::styled(
                m.alerts.to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Requires attention",
                Style::default().fg(Color::Gray),
            )),
        ])
        .block(Block::default().borders(Borders::ALL).title("Active Alerts"));
        frame.render_widget(alerts_card, cards[3]);
    }

    fn render_tab_bar(&self, frame: &mut Frame, area: Rect, current_tab: Tab) {
        let items: Vec<Span> = Tab::all()
            .iter()
            .enumerate()
            .flat_map(|(i, tab)| {
                let is_current = *tab == current_tab;
                let style = if is_current {
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Cyan)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::White)
                };

                vec![
                    Span::styled(format!(" [{}] {} ", i + 1, tab.title()), style),
                    Span::raw("  "),
                ]
            })
            .collect();

        let menu = Paragraph::new(Line::from(items))
            .block(Block::default().borders(Borders::ALL));

        frame.render_widget(menu, area);
    }

    fn render_resources(&self, frame: &mut Frame, area: Rect, selected_index: usize) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title("Resource Utilization Overview");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut constraints = vec![Constraint::Length(1)];
        constraints.extend(std::iter::repeat(Constraint::Length(4)).take(self.data.resources.len()));
        constraints.push(Constraint::Min(0));

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(inner);

        let desc = Paragraph::new("Real-time monitoring of cloud resources across all services")
            .style(Style::default().fg(Color::Gray));
        frame.render_widget(desc, rows[0]);

        for (idx, resource) in self.data.resources.iter().enumerate() {
            self.render_resource_row(frame, rows[idx + 1], resource, idx == selected_index);
        }
    }

    fn render_resource_row(
        &self,
        frame: &mut Frame,
        area: Rect,
        resource: &ResourceUsage,
        selected: bool,
    ) {
        let lines = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // name / cost
                Constraint::Length(1), // gauge
                Constraint::Length(1), // caption
                Constraint::Length(1), // spacer
            ])
            .split(area);

        let name_style = if selected {
            Style::default()
                .add_modifier(Modifier::BOLD)
                .bg(Color::DarkGray)
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        };

        let header_cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(32)])
            .split(lines[0]);

        let left = Line::from(vec![
            Span::styled(resource.status.icon(), Style::default().fg(resource.status.color())),
            Span::raw(" "),
            Span::styled(resource.name, name_style),
            Span::raw(" "),
            badge(
                resource.status.label(),
                Style::default().fg(resource.status.color()),
            ),
        ]);
        frame.render_widget(Paragraph::new(left), header_cols[0]);

        let right = Line::from(vec![
            Span::styled(
                format!("${}", format_currency(resource.cost)),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(" ({} instances)", resource.instances),
                Style::default().fg(Color::Gray),
            ),
        ]);
        frame.render_widget(
            Paragraph::new(right).alignment(Alignment::Right),
            header_cols[1],
        );

        let usage = clamp_percent(resource.usage);
        let gauge = Gauge::default()
            .gauge_style(
                Style::default()
                    .fg(resource.status.color())
                    .bg(Color::Black),
            )
            .ratio(usage / 100.0)
            .label(format!("{:.0}%", usage));
        frame.render_widget(gauge, lines[1]);

        let caption_cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(14)])
            .split(lines[2]);
        frame.render_widget(
            Paragraph::new(format!("{:.0}% utilized", usage))
                .style(Style::default().fg(Color::Gray)),
            caption_cols[0],
        );
        frame.render_widget(
            Paragraph::new("monthly cost")
                .style(Style::default().fg(Color::Gray))
                .alignment(Alignment::Right),
            caption_cols[1],
        );
    }

    fn render_costs(&self, frame: &mut Frame, area: Rect, selected_index: usize) {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);

        let total = self.data.overview.total_cost;

        let rows: Vec<Row> = self
            .data
            .resources
            .iter()
            .enumerate()
            .map(|(idx, r)| {
                let row = Row::new(vec![
                    Cell::from(Line::from(vec![
                        Span::styled("● ", Style::default().fg(Color::Blue)),
                        Span::raw(r.name),
                    ])),
                    Cell::from(format!("${}", format_currency(r.cost))),
                    Cell::from(format_share(cost_share(r.cost, total))),
                ]);
                if idx == selected_index {
                    row.style(Style::default().bg(Color::DarkGray))
                } else {
                    row
                }
            })
            .collect();

        let table = Table::new(
            rows,
            [
                Constraint::Min(22),
                Constraint::Length(12),
                Constraint::Length(7),
            ],
        )
        .header(
            Row::new(vec!["Service", "Cost", "Share"])
                .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
                .bottom_margin(1),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Cost Breakdown by Service"),
        );
        frame.render_widget(table, cols[0]);

        let t = &self.data.trends;
        let (savings_text, savings_color) = if t.savings <= 0.0 {
            (format!("-${}", format_currency(t.savings.abs())), Color::Green)
        } else {
            (format!("+${}", format_currency(t.savings)), Color::Red)
        };

        let kv = |label: &str, value: String| -> Line<'static> {
            Line::from(vec![
                Span::raw(format!("{:<26}", label)),
                Span::styled(format!("{:>12}", value), Style::default().add_modifier(Modifier::BOLD)),
            ])
        };

        let trends = Paragraph::new(vec![
            Line::from(Span::styled(
                "Cost Savings",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "This month vs last month",
                Style::default().fg(Color::Green),
            )),
            Line::from(Span::styled(
                savings_text,
                Style::default().fg(savings_color).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            kv("Average daily spend", format!("${}", format_currency(t.avg_daily_spend))),
            kv(
                "Projected monthly total",
                format!("${}", format_currency(t.projected_monthly)),
            ),
            Line::from(vec![
                Span::raw(format!("{:<26}", "Budget remaining")),
                Span::styled(
                    format!("{:>12}", format!("${}", format_currency(t.budget_remaining))),
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
        ])
        .block(Block::default().borders(Borders::ALL).title("Cost Trends"));
        frame.render_widget(trends, cols[1]);
    }

    fn render_optimization(&self, frame: &mut Frame, area: Rect, selected_index: usize) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title("Cost Optimization Recommendations");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut constraints = vec![Constraint::Length(1)];
        constraints.extend(
            std::iter::repeat(Constraint::Length(3)).take(self.data.optimizations.len()),
        );
        constraints.push(Constraint::Min(0));

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(inner);

        let desc = Line::from(vec![
            Span::styled("Potential savings: ", Style::default().fg(Color::Gray)),
            Span::styled(
                format!("${}", format_currency(total_potential(&self.data.optimizations))),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("/month", Style::default().fg(Color::Gray)),
        ]);
        frame.render_widget(Paragraph::new(desc), rows[0]);

        for (idx, optimization) in self.data.optimizations.iter().enumerate() {
            self.render_optimization_row(frame, rows[idx + 1], optimization, idx == selected_index);
        }
    }

    fn render_optimization_row(
        &self,
        frame: &mut Frame,
        area: Rect,
        optimization: &Optimization,
        selected: bool,
    ) {
        let lines = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // type / savings
                Constraint::Length(1), // description
                Constraint::Length(1), // spacer
            ])
            .split(area);

        let kind_style = if selected {
            Style::default()
                .add_modifier(Modifier::BOLD)
                .bg(Color::DarkGray)
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        };

        let header_cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(16)])
            .split(lines[0]);

        let left = Line::from(vec![
            Span::styled("⚡ ", Style::default().fg(Color::Yellow)),
            Span::styled(optimization.kind, kind_style),
            Span::raw(" "),
            badge(
                &format!("{} priority", optimization.priority.label()),
                optimization.priority.badge().style(),
            ),
        ]);
        frame.render_widget(Paragraph::new(left), header_cols[0]);

        let right = Line::from(Span::styled(
            format!("${}/mo", format_currency(optimization.potential)),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ));
        frame.render_widget(
            Paragraph::new(right).alignment(Alignment::Right),
            header_cols[1],
        );

        frame.render_widget(
            Paragraph::new(optimization.description).style(Style::default().fg(Color::Gray)),
            lines[1],
        );
    }

    fn render_alerts(&self, frame: &mut Frame, area: Rect, selected_index: usize) {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);

        let block = Block::default().borders(Borders::ALL).title("Active Alerts");
        let inner = block.inner(cols[0]);
        frame.render_widget(block, cols[0]);

        let mut constraints = vec![Constraint::Length(1)];
        constraints.extend(std::iter::repeat(Constraint::Length(5)).take(self.data.alerts.len()));
        constraints.push(Constraint::Min(0));

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(inner);

        let desc = Paragraph::new("Issues requiring attention").style(Style::default().fg(Color::Gray));
        frame.render_widget(desc, rows[0]);

        for (idx, alert) in self.data.alerts.iter().enumerate() {
            self.render_alert_row(frame, rows[idx + 1], alert, idx == selected_index);
        }

        self.render_system_health(frame, cols[1]);
    }

    fn render_alert_row(&self, frame: &mut Frame, area: Rect, alert: &Alert, selected: bool) {
        let border_style = if selected {
            Style::default()
                .fg(alert.severity.color())
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(alert.severity.color())
        };

        let block = Block::default().borders(Borders::ALL).border_style(border_style);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let lines = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // title / badge
                Constraint::Length(1), // message
                Constraint::Length(1), // time
            ])
            .split(inner);

        let title_cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(10)])
            .split(lines[0]);

        let title = Line::from(vec![
            Span::styled("⚠ ", Style::default().fg(alert.severity.color())),
            Span::styled(
                format!("{} Alert", capitalize(alert.kind)),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]);
        frame.render_widget(Paragraph::new(title), title_cols[0]);
        frame.render_widget(
            Paragraph::new(Line::from(badge(
                alert.severity.label(),
                alert.severity.badge().style(),
            )))
            .alignment(Alignment::Right),
            title_cols[1],
        );

        frame.render_widget(Paragraph::new(alert.message), lines[1]);
        frame.render_widget(
            Paragraph::new(alert.time).style(Style::default().fg(Color::DarkGray)),
            lines[2],
        );
    }

    fn render_system_health(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::ALL).title("System Health");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut constraints = vec![Constraint::Length(1)];
        constraints.extend(std::iter::repeat(Constraint::Length(2)).take(self.data.health.len()));
        constraints.push(Constraint::Min(0));

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(inner);

        let desc = Paragraph::new("Overall infrastructure status").style(Style::default().fg(Color::Gray));
        frame.render_widget(desc, rows[0]);

        for (idx, service) in self.data.health.iter().enumerate() {
            self.render_health_row(frame, rows[idx + 1], service);
        }
    }

    fn render_health_row(&self, frame: &mut Frame, area: Rect, service: &ServiceHealth) {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(11)])
            .split(area);

        let left = Line::from(vec![
            Span::styled(
                service.state.icon(),
                Style::default().fg(service.state.color()),
            ),
            Span::raw(" "),
            Span::styled(service.name, Style::default().add_modifier(Modifier::BOLD)),
        ]);
        frame.render_widget(Paragraph::new(left), cols[0]);
        frame.render_widget(
            Paragraph::new(Line::from(badge(
                service.state.label(),
                service.state.badge_style(),
            )))
            .alignment(Alignment::Right),
            cols[1],
        );
    }

    fn render_footer(&self, frame: &mut Frame, area: Rect, status_message: Option<&str>) {
        let footer_text = if let Some(status) = status_message {
            status.to_string()
        } else {
            "[1-4/← →] Switch tab | [↑↓] Select | [t] Time range | [r]efresh | [e]xport | [s]ettings | [?] Help | [q]uit"
                .to_string()
        };

        let footer = Paragraph::new(footer_text)
            .alignment(Alignment::Center)
            .style(if status_message.is_some() {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            })
            .block(Block::default().borders(Borders::ALL));

        frame.render_widget(footer, area);
    }

    fn render_help(&self, frame: &mut Frame) {
        let area = centered_rect(50, 60, frame.size());
        frame.render_widget(Clear, area);

        let text = vec![
            Line::from(Span::styled(
                "Keyboard Shortcuts",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from("  1-4        Jump to tab"),
            Line::from("  ← → / Tab  Cycle tabs"),
            Line::from("  ↑ ↓        Move selection"),
            Line::from("  t          Cycle time range"),
            Line::from("  r          Refresh data"),
            Line::from("  e          Export report"),
            Line::from("  s          Settings"),
            Line::from("  ? / F1     Toggle this help"),
            Line::from("  q / Esc    Quit"),
        ];

        let help = Paragraph::new(text).block(
            Block::default()
                .borders(Borders::ALL)
                .title("Help")
                .border_style(Style::default().fg(Color::Cyan)),
        );
        frame.render_widget(help, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    fn render_to_buffer(tab: Tab, show_help: bool) -> Buffer {
        let dashboard = Dashboard::new(Dataset::demo());
        let backend = TestBackend::new(120, 40);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| dashboard.render(f, tab, TimeRange::Last24Hours, 0, None, show_help))
            .unwrap();
        terminal.backend().buffer().clone()
    }

    fn buffer_text(buffer: &Buffer) -> String {
        buffer.content.iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn test_resources_tab_renders_only_resource_panel() {
        let text = buffer_text(&render_to_buffer(Tab::Resources, false));
        assert!(text.contains("Compute (EC2)"));
        assert!(text.contains("Lambda Functions"));
        assert!(!text.contains("Right-sizing"));
        assert!(!text.contains("Cost Trends"));
        assert!(!text.contains("System Health"));
    }

    #[test]
    fn test_costs_tab_renders_breakdown_and_trends() {
        let text = buffer_text(&render_to_buffer(Tab::Costs, false));
        assert!(text.contains("Cost Breakdown by Service"));
        assert!(text.contains("Cost Trends"));
        // 4250.00 / 12847.32 * 100 = 33.1%
        assert!(text.contains("33.1%"));
        assert!(!text.contains("—"));
        assert!(!text.contains("Right-sizing"));
    }

    #[test]
    fn test_optimization_tab_renders_recommendations() {
        let text = buffer_text(&render_to_buffer(Tab::Optimization, false));
        assert!(text.contains("Right-sizing"));
        assert!(text.contains("2,095.50"));
        assert!(text.contains("high priority"));
        assert!(!text.contains("Compute (EC2)"));
    }

    #[test]
    fn test_alerts_tab_renders_alerts_and_health() {
        let text = buffer_text(&render_to_buffer(Tab::Alerts, false));
        assert!(text.contains("Cost Alert"));
        assert!(text.contains("Monthly spend projected to exceed budget by 15%"));
        assert!(text.contains("System Health"));
        assert!(text.contains("Storage Services"));
        assert!(!text.contains("Compute (EC2)"));
    }

    #[test]
    fn test_overview_cards_are_always_visible() {
        for tab in Tab::all() {
            let text = buffer_text(&render_to_buffer(*tab, false));
            assert!(text.contains("Total Monthly Cost"));
            assert!(text.contains("12,847.32"));
            assert!(text.contains("Efficiency Score"));
        }
    }

    #[test]
    fn test_render_is_idempotent() {
        let first = render_to_buffer(Tab::Resources, false);
        let second = render_to_buffer(Tab::Resources, false);
        assert_eq!(first, second);
    }

    #[test]
    fn test_help_overlay() {
        let text = buffer_text(&render_to_buffer(Tab::Resources, true));
        assert!(text.contains("Keyboard Shortcuts"));
    }
}
