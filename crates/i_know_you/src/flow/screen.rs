//! Screen trait and the actions screens hand back to the controller.

use std::time::Instant;

use crossterm::event::KeyEvent;
use i_know_you_core::{ScreenId, SecretNumber, Translations};
use ratatui::Frame;

use crate::LanguagePreference;

/// What a screen asks the [`AppController`](crate::AppController) to do
/// after handling a key or a tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenAction {
    /// Stay on the current screen with no state change.
    Stay,
    /// Commit the secret number, then move to the questions screen.
    SubmitSecret(SecretNumber),
    /// Move to the given screen.
    GoTo(ScreenId),
    /// Clear the secret and return to the welcome screen.
    Reset,
}

/// The language store, lent to a screen for one render or one event.
///
/// Screens never see the game state; they report changes through
/// [`ScreenAction`] and the controller applies them.
#[derive(Debug, Clone, Copy)]
pub struct ScreenContext<'a> {
    /// Active language.
    pub preference: &'a LanguagePreference,
}

impl ScreenContext<'_> {
    /// Strings for the active language.
    pub fn text(&self) -> &'static Translations {
        self.preference.translations()
    }
}

/// Trait implemented by each of the four screens.
///
/// A screen owns its local state, including its timers, for as long as it
/// is displayed. The controller drops it on navigation, which cancels
/// whatever it still had scheduled.
pub trait Screen {
    /// The screen id this screen renders.
    fn id(&self) -> ScreenId;

    /// Renders the screen into the provided [`Frame`].
    fn render(&self, frame: &mut Frame, ctx: &ScreenContext<'_>, now: Instant);

    /// Handles a key event and returns the resulting [`ScreenAction`].
    fn handle_key(&mut self, key: KeyEvent, ctx: &ScreenContext<'_>, now: Instant)
    -> ScreenAction;

    /// Handles text pasted into the terminal.
    fn handle_paste(&mut self, _text: &str) -> ScreenAction {
        ScreenAction::Stay
    }

    /// Fires due timers.
    fn tick(&mut self, _now: Instant) -> ScreenAction {
        ScreenAction::Stay
    }
}
