//! Welcome screen: number entry.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent};
use derive_getters::Getters;
use i_know_you_core::{DigitBuffer, ScreenId};
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

/// State for the welcome screen.
#[derive(Debug, Default, Getters)]
pub struct WelcomeScreen {
    input: DigitBuffer,
}

impl WelcomeScreen {
    /// Creates a welcome screen with an empty input.
    #[instrument]
    pub fn new() -> Self {
        debug!("Initializing WelcomeScreen");
        Self::default()
    }
}

impl Screen for WelcomeScreen {
    fn id(&self) -> ScreenId {
        ScreenId::Welcome
    }

    #[instrument(skip_all)]
    fn render(&self, frame: &mut Frame, ctx: &ScreenContext<'_>, _now: Instant) {
        let t = ctx.text();
        let language = ctx.preference.language();

        let [top, icon, title, subtitle, instruction, input, hint, button, help] =
            Layout::vertical([
                Constraint::Length(1),
                Constraint::Length(2),
                Constraint::Length(1),
                Constraint::Length(2),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(2),
                Constraint::Length(2),
                Constraint::Min(1),
            ])
            .areas(frame.area());

        let flag = Paragraph::new(format!("{} {}  (Tab)", language.flag(), language.label()))
            .style(Style::default().fg(Color::Gray))
            .alignment(Alignment::Right);
        frame.render_widget(flag, top);

        frame.render_widget(widgets::heading(ICON, Color::Yellow), icon);
        frame.render_widget(widgets::heading(t.title, ACCENT), title);
        frame.render_widget(
            widgets::heading(&t.subtitle.to_uppercase(), Color::Gray),
            subtitle,
        );

        let instruction_lines: Vec<Line> = t.instruction.lines().map(Line::from).collect();
        frame.render_widget(
            Paragraph::new(instruction_lines)
                .style(Style::default().fg(Color::White))
                .alignment(Alignment::Center),
            instruction,
        );

        frame.render_widget(
            widgets::digit_input(self.input.as_str()),
            widgets::centered(input, 11, 3),
        );

        frame.render_widget(
            Paragraph::new(t.hint)
                .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::ITALIC))
                .alignment(Alignment::Center),
            hint,
        );

        let enabled = self.input.is_valid();
        frame.render_widget(
            Paragraph::new(Line::from(widgets::button(t.continue_button, enabled, enabled)))
                .alignment(Alignment::Center),
            button,
        );

        frame.render_widget(
            widgets::help("0-9: Type | Enter: Continue | Tab: Language | Esc: Quit")
                .block(Block::default().borders(Borders::TOP)),
            help,
        );
    }

    #[instrument(skip(self, _ctx, _now))]
    fn handle_key(
        &mut self,
        key: KeyEvent,
        _ctx: &ScreenContext<'_>,
        _now: Instant,
    ) -> ScreenAction {
        match key.code {
            KeyCode::Char(c) => {
                self.input.push(c);
                ScreenAction::Stay
            }
            KeyCode::Backspace => {
                self.input.backspace();
                ScreenAction::Stay
            }
            KeyCode::Enter => match self.input.to_secret() {
                Ok(secret) => {
                    info!(digits = secret.as_str().len(), "Secret number submitted");
                    ScreenAction::SubmitSecret(secret)
                }
                Err(e) => {
                    debug!(reason = %e, "Continue disabled");
                    ScreenAction::Stay
                }
            },
            _ => ScreenAction::Stay,
        }
    }

    fn handle_paste(&mut self, text: &str) -> ScreenAction {
        self.input.set_filtered(text);
        debug!(length = self.input.as_str().len(), "Pasted into number input");
        ScreenAction::Stay
    }
}
