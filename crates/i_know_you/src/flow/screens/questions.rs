//! Questions screen: five yes/no prompts and one number prompt.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent};
use derive_getters::Getters;
use i_know_you_core::{
    AnswerSelection, QUESTION_COUNT, QuestionKind, QuestionsSequencer, QuestionsStep, ScreenId,
    YesNo, questions_for,
};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
};
use tracing::{debug, info, instrument};

use crate::flow::screen::{Screen, ScreenAction, ScreenContext};
use crate::flow::widgets::{self, ACCENT, ICON};

/// State for the questions screen.
#[derive(Debug, Getters)]
pub struct QuestionsScreen {
    sequencer: QuestionsSequencer,
    focus: YesNo,
}

impl Default for QuestionsScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl QuestionsScreen {
    /// Creates the screen at the first question.
    #[instrument]
    pub fn new() -> Self {
        debug!("Initializing QuestionsScreen");
        Self {
            sequencer: QuestionsSequencer::new(),
            focus: YesNo::Yes,
        }
    }

    fn step_action(step: QuestionsStep) -> ScreenAction {
        match step {
            QuestionsStep::Finished => {
                info!("Questions exhausted");
                ScreenAction::GoTo(ScreenId::Thinking)
            }
            QuestionsStep::Advanced(index) => {
                debug!(index, "Showing next question");
                ScreenAction::Stay
            }
            QuestionsStep::Pending => ScreenAction::Stay,
        }
    }

    fn answer(&mut self, answer: YesNo, now: Instant) -> ScreenAction {
        self.focus = answer;
        self.sequencer.select(answer, now);
        ScreenAction::Stay
    }

    fn text_style(&self, now: Instant) -> Style {
        let fade = self.sequencer.fade(now);
        let color = if fade < 0.5 {
            Color::DarkGray
        } else if fade < 1.0 {
            Color::Gray
        } else {
            Color::White
        };
        Style::default().fg(color)
    }

    fn option_span(&self, label: &str, answer: YesNo) -> Span<'static> {
        let picked = *self.sequencer.selection() == AnswerSelection::Picked(answer);
        let focused = self.focus == answer && !self.sequencer.is_advance_pending();
        widgets::button(label, true, picked || focused)
    }
}

impl Screen for QuestionsScreen {
    fn id(&self) -> ScreenId {
        ScreenId::Questions
    }

    #[instrument(skip_all)]
    fn render(&self, frame: &mut Frame, ctx: &ScreenContext<'_>, now: Instant) {
        let t = ctx.text();
        let questions = questions_for(ctx.preference.language());
        let index = *self.sequencer.index();
        let question = questions[index.min(questions.len() - 1)];

        let [progress, icon, analyzing, text, answer, extra, help] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(2),
            Constraint::Length(2),
            Constraint::Length(4),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(1),
        ])
        .areas(frame.area());

        let position = index + 1;
        let gauge = Gauge::default()
            .block(Block::default().borders(Borders::ALL))
            .gauge_style(Style::default().fg(ACCENT))
            .ratio(position as f64 / QUESTION_COUNT as f64)
            .label(format!("{} / {}", position, QUESTION_COUNT));
        frame.render_widget(gauge, progress);

        frame.render_widget(widgets::heading(ICON, Color::Yellow), icon);
        frame.render_widget(
            widgets::heading(&t.analyzing.to_uppercase(), Color::Gray),
            analyzing,
        );

        let style = self.text_style(now);
        frame.render_widget(
            Paragraph::new(question.text())
                .style(style.add_modifier(Modifier::BOLD))
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true }),
            text,
        );

        match question.kind() {
            QuestionKind::YesNo => {
                let row = Line::from(vec![
                    self.option_span(t.yes, YesNo::Yes),
                    Span::raw("    "),
                    self.option_span(t.no, YesNo::No),
                ]);
                frame.render_widget(Paragraph::new(row).alignment(Alignment::Center), answer);
                frame.render_widget(
                    widgets::help("←→: Choose | Enter: Answer | y/n: Answer directly"),
                    help,
                );
            }
            QuestionKind::NumericEntry => {
                frame.render_widget(
                    widgets::digit_input(self.sequencer.numeric_input().as_str()),
                    widgets::centered(answer, 11, 3),
                );
                let enabled = self.sequencer.can_guess();
                let lines = vec![
                    Line::styled(t.number_hint, Style::default().fg(Color::Gray)),
                    Line::from(widgets::button(t.guess_button, enabled, enabled)),
                ];
                frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), extra);
                frame.render_widget(widgets::help("0-9: Type | Enter: Guess"), help);
            }
        }
    }

    #[instrument(skip(self, _ctx))]
    fn handle_key(&mut self, key: KeyEvent, _ctx: &ScreenContext<'_>, now: Instant) -> ScreenAction {
        match self.sequencer.current_kind() {
            QuestionKind::YesNo => match key.code {
                KeyCode::Left | KeyCode::Right => {
                    if !self.sequencer.is_advance_pending() {
                        self.focus = match self.focus {
                            YesNo::Yes => YesNo::No,
                            YesNo::No => YesNo::Yes,
                        };
                    }
                    ScreenAction::Stay
                }
                KeyCode::Enter | KeyCode::Char(' ') => self.answer(self.focus, now),
                KeyCode::Char('y' | 'Y' | '1') => self.answer(YesNo::Yes, now),
                KeyCode::Char('n' | 'N' | '2') => self.answer(YesNo::No, now),
                _ => ScreenAction::Stay,
            },
            QuestionKind::NumericEntry => match key.code {
                KeyCode::Char(c) => {
                    self.sequencer.push_digit(c);
                    ScreenAction::Stay
                }
                KeyCode::Backspace => {
                    self.sequencer.backspace();
                    ScreenAction::Stay
                }
                KeyCode::Enter => Self::step_action(self.sequencer.guess(now)),
                _ => ScreenAction::Stay,
            },
        }
    }

    fn handle_paste(&mut self, text: &str) -> ScreenAction {
        self.sequencer.set_input(text);
        ScreenAction::Stay
    }

    fn tick(&mut self, now: Instant) -> ScreenAction {
        Self::step_action(self.sequencer.tick(now))
    }
}
