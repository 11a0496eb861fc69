//! Language picker: modal overlay listing the display languages.

use crossterm::event::{KeyCode, KeyEvent};
use i_know_you_core::LanguageCode;
use ratatui::{
    Frame,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, List, ListItem, ListState},
};
use tracing::{debug, info, instrument};
use unicode_width::UnicodeWidthStr;

use crate::flow::widgets::{self, ACCENT};

/// What the picker asks the controller to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerAction {
    /// Keep the picker open.
    Stay,
    /// Close without changing the language.
    Close,
    /// Switch to the given language and close.
    Select(LanguageCode),
}

/// State for the language picker overlay.
#[derive(Debug)]
pub struct LanguagePicker {
    current: LanguageCode,
    list_state: ListState,
}

impl LanguagePicker {
    /// Opens the picker with `current` highlighted.
    #[instrument]
    pub fn new(current: LanguageCode) -> Self {
        debug!("Opening language picker");
        let position = LanguageCode::all()
            .iter()
            .position(|code| *code == current)
            .unwrap_or(0);
        let mut list_state = ListState::default();
        list_state.select(Some(position));
        Self {
            current,
            list_state,
        }
    }

    /// Returns the highlighted language.
    pub fn highlighted(&self) -> LanguageCode {
        let options = LanguageCode::all();
        let idx = self.list_state.selected().unwrap_or(0);
        options[idx.min(options.len() - 1)]
    }

    /// Moves the highlight up, wrapping around.
    #[instrument(skip(self))]
    fn select_previous(&mut self) {
        let count = LanguageCode::all().len();
        let i = match self.list_state.selected() {
            Some(i) if i > 0 => i - 1,
            _ => count - 1,
        };
        self.list_state.select(Some(i));
    }

    /// Moves the highlight down, wrapping around.
    #[instrument(skip(self))]
    fn select_next(&mut self) {
        let count = LanguageCode::all().len();
        let i = match self.list_state.selected() {
            Some(i) => (i + 1) % count,
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    /// Handles a key event.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyEvent) -> PickerAction {
        match key.code {
            KeyCode::Up => {
                self.select_previous();
                PickerAction::Stay
            }
            KeyCode::Down | KeyCode::Tab => {
                self.select_next();
                PickerAction::Stay
            }
            KeyCode::Enter => {
                let code = self.highlighted();
                info!(language = %code, "Language picked");
                PickerAction::Select(code)
            }
            KeyCode::Esc => PickerAction::Close,
            _ => PickerAction::Stay,
        }
    }

    /// Draws the picker on top of whatever is already in the frame.
    #[instrument(skip_all)]
    pub fn render(&self, frame: &mut Frame) {
        let labels: Vec<String> = LanguageCode::all()
            .iter()
            .map(|code| {
                let marker = if *code == self.current { " ✓" } else { "" };
                format!("{} {}{}", code.flag(), code.label(), marker)
            })
            .collect();

        let widest = labels.iter().map(|l| l.width()).max().unwrap_or(0) as u16;
        let area = widgets::centered(frame.area(), widest + 6, labels.len() as u16 + 2);

        let items: Vec<ListItem> = labels.into_iter().map(ListItem::new).collect();
        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(ACCENT)),
            )
            .highlight_style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");

        frame.render_widget(Clear, area);
        let mut list_state = self.list_state.clone();
        frame.render_stateful_widget(list, area, &mut list_state);
    }
}
