//! Thinking screen: the staged analysis before the reveal.

use std::time::Instant;

use crossterm::event::KeyEvent;
use derive_getters::Getters;
use i_know_you_core::{ScreenId, ThinkingSequencer, ThinkingStep};
use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Gauge},
};
use tracing::{debug, instrument};

use crate::flow::screen::{Screen, ScreenAction, ScreenContext};
use crate::flow::widgets::{self, ACCENT, ICON};

/// Ring frames, one revolution per spin period.
const SPINNER: [&str; 8] = ["◜ ", " ◝", " ◞", "◟ ", "◜ ", " ◝", " ◞", "◟ "];

/// State for the thinking screen.
#[derive(Debug, Getters)]
pub struct ThinkingScreen {
    sequencer: ThinkingSequencer,
}

impl ThinkingScreen {
    /// Starts the wait at `now`.
    #[instrument]
    pub fn new(now: Instant) -> Self {
        debug!("Initializing ThinkingScreen");
        Self {
            sequencer: ThinkingSequencer::new(now),
        }
    }
}

impl Screen for ThinkingScreen {
    fn id(&self) -> ScreenId {
        ScreenId::Thinking
    }

    #[instrument(skip_all)]
    fn render(&self, frame: &mut Frame, ctx: &ScreenContext<'_>, now: Instant) {
        let t = ctx.text();

        let [_, ring, icon, title, message, _, progress, _] = Layout::vertical([
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Length(2),
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(1),
        ])
        .areas(frame.area());

        let frame_index = self.sequencer.spinner_frame(now, SPINNER.len());
        frame.render_widget(widgets::heading(SPINNER[frame_index], ACCENT), ring);

        let icon_style = if self.sequencer.pulse(now) > 0.5 {
            Color::Yellow
        } else {
            Color::LightYellow
        };
        frame.render_widget(widgets::heading(ICON, icon_style), icon);

        frame.render_widget(widgets::heading(t.thinking_title, Color::White), title);

        let index = self.sequencer.message_index(t.thinking_messages.len());
        frame.render_widget(
            widgets::heading(&format!("{}...", t.thinking_messages[index]), Color::Gray),
            message,
        );

        let gauge = Gauge::default()
            .block(Block::default().borders(Borders::ALL))
            .gauge_style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD))
            .ratio(self.sequencer.progress(now))
            .label("");
        frame.render_widget(gauge, widgets::centered(progress, 40, 3));
    }

    fn handle_key(
        &mut self,
        _key: KeyEvent,
        _ctx: &ScreenContext<'_>,
        _now: Instant,
    ) -> ScreenAction {
        ScreenAction::Stay
    }

    fn tick(&mut self, now: Instant) -> ScreenAction {
        match self.sequencer.tick(now) {
            ThinkingStep::Done => ScreenAction::GoTo(ScreenId::Result),
            ThinkingStep::Running => ScreenAction::Stay,
        }
    }
}
