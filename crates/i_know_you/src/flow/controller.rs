//! Flow controller driving the four screens.

use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use derive_getters::Getters;
use i_know_you_core::{GameState, ScreenId};
use ratatui::{Frame, Terminal, backend::Backend};
use tokio::time::sleep;
use tracing::{debug, info, instrument, warn};

use crate::LanguagePreference;
use crate::flow::screen::{Screen, ScreenAction, ScreenContext};
use crate::flow::screens::{
    LanguagePicker, PickerAction, QuestionsScreen, ResultScreen, ThinkingScreen, WelcomeScreen,
};

/// Active screen in the flow state machine.
#[derive(Debug)]
enum ActiveScreen {
    Welcome(WelcomeScreen),
    Questions(QuestionsScreen),
    Thinking(ThinkingScreen),
    Result(ResultScreen),
}

impl ActiveScreen {
    /// Builds a fresh screen for the store's current screen id.
    #[instrument(skip(game))]
    fn for_state(game: &GameState, now: Instant) -> Self {
        match game.screen() {
            ScreenId::Welcome => Self::Welcome(WelcomeScreen::new()),
            ScreenId::Questions => Self::Questions(QuestionsScreen::new()),
            ScreenId::Thinking => Self::Thinking(ThinkingScreen::new(now)),
            ScreenId::Result => Self::Result(ResultScreen::new(game.secret_number(), now)),
        }
    }

    fn as_screen(&self) -> &dyn Screen {
        match self {
            Self::Welcome(s) => s,
            Self::Questions(s) => s,
            Self::Thinking(s) => s,
            Self::Result(s) => s,
        }
    }

    fn as_screen_mut(&mut self) -> &mut dyn Screen {
        match self {
            Self::Welcome(s) => s,
            Self::Questions(s) => s,
            Self::Thinking(s) => s,
            Self::Result(s) => s,
        }
    }
}

/// Whether the event loop should keep going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    /// Keep running.
    Continue,
    /// Leave the event loop.
    Quit,
}

/// Controller that owns both stores and drives screen transitions.
///
/// Call [`AppController::run`] to start the event loop, or drive it directly
/// with [`AppController::handle_key`] and [`AppController::tick`].
#[derive(Debug, Getters)]
pub struct AppController {
    preference: LanguagePreference,
    game: GameState,
    strict_transitions: bool,
    tick_rate: Duration,
    #[getter(skip)]
    screen: ActiveScreen,
    #[getter(skip)]
    picker: Option<LanguagePicker>,
}

impl AppController {
    /// Creates a controller on the welcome screen.
    ///
    /// `preference` should already be loaded.
    #[instrument(skip(preference, now))]
    pub fn new(
        preference: LanguagePreference,
        strict_transitions: bool,
        tick_rate: Duration,
        now: Instant,
    ) -> Self {
        info!(language = %preference.language(), "Creating AppController");
        let game = GameState::new();
        let screen = ActiveScreen::for_state(&game, now);
        Self {
            preference,
            game,
            strict_transitions,
            tick_rate,
            screen,
            picker: None,
        }
    }

    /// Returns the id of the screen being displayed.
    pub fn active_screen(&self) -> ScreenId {
        self.screen.as_screen().id()
    }

    /// Returns true while the language picker is open.
    pub fn is_picker_open(&self) -> bool {
        self.picker.is_some()
    }

    /// Runs the event loop until the user quits.
    #[instrument(skip(self, terminal))]
    pub async fn run<B: Backend + std::io::Write>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> anyhow::Result<()>
    where
        <B as Backend>::Error: Send + Sync + 'static,
    {
        info!("Starting flow event loop");

        loop {
            let now = Instant::now();
            self.tick(now);
            terminal.draw(|f| self.render(f, now))?;

            // Poll for input with a short timeout so timers stay responsive.
            if event::poll(self.tick_rate)? {
                match event::read()? {
                    // Skip key release events (crossterm fires both press and release).
                    Event::Key(key) if key.kind == KeyEventKind::Release => continue,
                    Event::Key(key) => {
                        if self.handle_key(key, Instant::now()) == LoopControl::Quit {
                            info!("Flow quitting");
                            return Ok(());
                        }
                    }
                    Event::Paste(text) => self.handle_paste(&text, Instant::now()),
                    _ => {}
                }
            }

            sleep(Duration::from_millis(10)).await;
        }
    }

    /// Draws the active screen and, if open, the language picker.
    pub fn render(&self, frame: &mut Frame, now: Instant) {
        let ctx = ScreenContext {
            preference: &self.preference,
        };
        self.screen.as_screen().render(frame, &ctx, now);
        if let Some(picker) = &self.picker {
            picker.render(frame);
        }
    }

    /// Handles one key press.
    #[instrument(skip(self, now))]
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) -> LoopControl {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            info!("Interrupted");
            return LoopControl::Quit;
        }

        if let Some(picker) = &mut self.picker {
            match picker.handle_key(key) {
                PickerAction::Stay => {}
                PickerAction::Close => self.picker = None,
                PickerAction::Select(code) => {
                    // Persistence runs in the background; the handle is not needed.
                    drop(self.preference.select(code));
                    self.picker = None;
                }
            }
            return LoopControl::Continue;
        }

        match key.code {
            KeyCode::Tab => {
                self.picker = Some(LanguagePicker::new(self.preference.language()));
                LoopControl::Continue
            }
            KeyCode::Esc => LoopControl::Quit,
            _ => {
                let ctx = ScreenContext {
                    preference: &self.preference,
                };
                let action = self.screen.as_screen_mut().handle_key(key, &ctx, now);
                self.apply(action, now);
                LoopControl::Continue
            }
        }
    }

    /// Hands pasted text to the active screen. Ignored while the picker is
    /// open.
    #[instrument(skip(self, text, now))]
    pub fn handle_paste(&mut self, text: &str, now: Instant) {
        if self.picker.is_some() {
            debug!("Ignoring paste while picker is open");
            return;
        }
        let action = self.screen.as_screen_mut().handle_paste(text);
        self.apply(action, now);
    }

    /// Fires the active screen's due timers.
    pub fn tick(&mut self, now: Instant) {
        let action = self.screen.as_screen_mut().tick(now);
        self.apply(action, now);
    }

    /// Applies a screen action to the game state, then rebuilds the active
    /// screen if the state now names a different one.
    #[instrument(skip(self, now))]
    fn apply(&mut self, action: ScreenAction, now: Instant) {
        match action {
            ScreenAction::Stay => return,
            ScreenAction::SubmitSecret(secret) => {
                self.game.set_secret_number(secret.into_inner());
                self.request_screen(ScreenId::Questions);
            }
            ScreenAction::GoTo(to) => self.request_screen(to),
            ScreenAction::Reset => self.game.reset(),
        }
        self.sync_screen(now);
    }

    fn request_screen(&mut self, to: ScreenId) {
        if self.strict_transitions {
            if let Err(e) = self.game.transition(to) {
                warn!(error = %e, "Ignoring screen request");
            }
        } else {
            self.game.set_screen(to);
        }
    }

    fn sync_screen(&mut self, now: Instant) {
        let wanted = *self.game.screen();
        if self.screen.as_screen().id() == wanted {
            return;
        }
        debug!(from = %self.screen.as_screen().id(), to = %wanted, "Replacing active screen");
        // Dropping the old screen cancels its pending timers.
        self.screen = ActiveScreen::for_state(&self.game, now);
    }
}
