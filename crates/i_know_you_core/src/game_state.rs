//! Game progress: the secret number and the visible screen.

use derive_getters::Getters;
use tracing::{debug, info, instrument, warn};

use crate::{ScreenId, TransitionError};

/// The secret number and the current screen.
///
/// Owned by the flow controller and lent to each screen; there is no global
/// instance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters)]
pub struct GameState {
    /// Digits committed on the welcome screen, empty before and after a round.
    secret_number: String,
    /// The screen being displayed.
    screen: ScreenId,
}

impl GameState {
    /// Creates a fresh state on the welcome screen with no secret.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `digits` verbatim. Validation is the caller's job.
    #[instrument(skip(self, digits))]
    pub fn set_secret_number(&mut self, digits: impl Into<String>) {
        self.secret_number = digits.into();
        debug!(length = self.secret_number.len(), "Secret number committed");
    }

    /// Overwrites the current screen without any legality check.
    #[instrument(skip(self))]
    pub fn set_screen(&mut self, screen: ScreenId) {
        debug!(from = %self.screen, to = %screen, "Setting screen");
        self.screen = screen;
    }

    /// Moves to `to` if it is the next screen in the fixed order.
    ///
    /// # Errors
    ///
    /// Returns [`TransitionError`] and leaves the state untouched for any
    /// other target.
    #[instrument(skip(self))]
    pub fn transition(&mut self, to: ScreenId) -> Result<(), TransitionError> {
        if !self.screen.can_transition_to(to) {
            warn!(from = %self.screen, to = %to, "Rejected screen transition");
            return Err(TransitionError::new(self.screen, to));
        }
        info!(from = %self.screen, to = %to, "Screen transition");
        self.screen = to;
        Ok(())
    }

    /// Clears the secret and returns to the welcome screen.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!(from = %self.screen, "Resetting game");
        self.secret_number.clear();
        self.screen = ScreenId::Welcome;
    }
}
