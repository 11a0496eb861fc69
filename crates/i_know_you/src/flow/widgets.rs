//! Small drawing helpers shared by the screens.

use ratatui::{
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// The mascot shown on every screen.
pub const ICON: &str = "🐥";

/// Placeholder for an empty numeric input.
pub const INPUT_PLACEHOLDER: &str = "•••";

/// Accent colour for titles and focused controls.
pub const ACCENT: Color = Color::Magenta;

/// Renders a button label; disabled buttons are greyed out.
pub fn button(label: &str, enabled: bool, focused: bool) -> Span<'static> {
    let style = if !enabled {
        Style::default().fg(Color::DarkGray)
    } else if focused {
        Style::default()
            .fg(Color::Black)
            .bg(ACCENT)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    };
    Span::styled(format!("[ {} ]", label), style)
}

/// A bordered, centered input field showing `value` or the placeholder.
pub fn digit_input(value: &str) -> Paragraph<'static> {
    let line = if value.is_empty() {
        Line::styled(INPUT_PLACEHOLDER, Style::default().fg(Color::DarkGray))
    } else {
        Line::styled(
            value.to_string(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )
    };
    Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(ACCENT)))
}

/// A centered, single-line bold heading.
pub fn heading(text: &str, color: Color) -> Paragraph<'static> {
    Paragraph::new(text.to_string())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
}

/// A help line at the bottom of the screen.
pub fn help(text: &str) -> Paragraph<'static> {
    Paragraph::new(text.to_string())
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
}

/// Returns a `width` x `height` rectangle centered in `area`, clamped to it.
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(row);
    cell
}

/// Splits `area` into `count` boxes of `width` columns, centered
/// horizontally.
pub fn slot_row(area: Rect, count: usize, width: u16) -> Vec<Rect> {
    Layout::horizontal(vec![Constraint::Length(width); count])
        .flex(Flex::Center)
        .spacing(1)
        .split(area)
        .to_vec()
}
