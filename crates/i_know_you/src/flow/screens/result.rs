//! Result screen: reveals the "guess" one digit at a time.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent};
use derive_getters::Getters;
use i_know_you_core::{RevealSequencer, ScreenId};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};
use tracing::{debug, info, instrument};

use crate::flow::screen::{Screen, ScreenAction, ScreenContext};
use crate::flow::widgets::{self, ACCENT, ICON};

const SLOT_WIDTH: u16 = 5;
const PLACEHOLDER: &str = "•";

/// State for the result screen.
#[derive(Debug, Getters)]
pub struct ResultScreen {
    reveal: RevealSequencer,
}

impl ResultScreen {
    /// Starts revealing `digits` at `now`.
    #[instrument(skip(digits))]
    pub fn new(digits: &str, now: Instant) -> Self {
        debug!(slots = digits.len(), "Initializing ResultScreen");
        Self {
            reveal: RevealSequencer::new(digits, now),
        }
    }
}

impl Screen for ResultScreen {
    fn id(&self) -> ScreenId {
        ScreenId::Result
    }

    #[instrument(skip_all)]
    fn render(&self, frame: &mut Frame, ctx: &ScreenContext<'_>, _now: Instant) {
        let t = ctx.text();

        let [_, icon, label, digits, _, question, button, help] = Layout::vertical([
            Constraint::Min(1),
            Constraint::Length(2),
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Length(2),
            Constraint::Min(1),
        ])
        .areas(frame.area());

        frame.render_widget(widgets::heading(ICON, Color::Yellow), icon);
        frame.render_widget(
            widgets::heading(&t.result_label.to_uppercase(), Color::Gray),
            label,
        );

        let slots = widgets::slot_row(digits, *self.reveal.slots(), SLOT_WIDTH);
        let revealed = self.reveal.revealed();
        for (i, area) in slots.into_iter().enumerate() {
            let (text, style, border) = match revealed.get(i) {
                Some(digit) => (
                    digit.to_string(),
                    Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                    Style::default().fg(ACCENT),
                ),
                None => (
                    PLACEHOLDER.to_string(),
                    Style::default().fg(Color::DarkGray),
                    Style::default().fg(Color::DarkGray),
                ),
            };
            frame.render_widget(
                Paragraph::new(text)
                    .style(style)
                    .alignment(Alignment::Center)
                    .block(Block::default().borders(Borders::ALL).border_style(border)),
                area,
            );
        }

        if *self.reveal.is_final() {
            frame.render_widget(widgets::heading(t.result_question, Color::White), question);
            frame.render_widget(
                Paragraph::new(Line::from(widgets::button(t.try_again, true, true)))
                    .alignment(Alignment::Center),
                button,
            );
            frame.render_widget(widgets::help("Enter: Try again | Esc: Quit"), help);
        }
    }

    #[instrument(skip(self, _ctx, _now))]
    fn handle_key(
        &mut self,
        key: KeyEvent,
        _ctx: &ScreenContext<'_>,
        _now: Instant,
    ) -> ScreenAction {
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') if *self.reveal.is_final() => {
                info!("Try again pressed");
                ScreenAction::Reset
            }
            _ => ScreenAction::Stay,
        }
    }

    fn tick(&mut self, now: Instant) -> ScreenAction {
        self.reveal.tick(now);
        ScreenAction::Stay
    }
}
