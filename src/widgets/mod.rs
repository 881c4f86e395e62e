/// Shared rendering helpers used across the dashboard panels

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::Span,
};

/// Badge-style span with padded text
pub fn badge(text: &str, style: Style) -> Span<'static> {
    Span::styled(format!(" {} ", text), style)
}

/// Centered rect covering the given percentages of `area`, for overlays
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_is_contained() {
        let area = Rect::new(0, 0, 100, 40);
        let centered = centered_rect(50, 50, area);
        assert!(centered.width <= area.width);
        assert!(centered.height <= area.height);
        assert!(centered.x >= area.x && centered.y >= area.y);
    }
}
