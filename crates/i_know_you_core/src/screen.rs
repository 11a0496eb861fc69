//! Screen identifiers and the forward-only transition table.

use tracing::instrument;

/// One of the four mutually exclusive screens.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, strum::Display, strum::EnumIter,
)]
#[strum(serialize_all = "lowercase")]
pub enum ScreenId {
    /// Number entry and language selection.
    #[default]
    Welcome,
    /// The six decorative questions.
    Questions,
    /// The fake analysis animation.
    Thinking,
    /// The digit-by-digit reveal.
    Result,
}

impl ScreenId {
    /// Returns the screen that follows this one in normal play, or `None`
    /// for the result screen, which only leaves through a reset.
    #[instrument]
    pub fn next(self) -> Option<Self> {
        match self {
            Self::Welcome => Some(Self::Questions),
            Self::Questions => Some(Self::Thinking),
            Self::Thinking => Some(Self::Result),
            Self::Result => None,
        }
    }

    /// Returns true if `(self, to)` is an allowed forward step.
    ///
    /// Returning to the welcome screen is not a transition; it happens only
    /// through [`GameState::reset`](crate::GameState::reset).
    #[instrument]
    pub fn can_transition_to(self, to: Self) -> bool {
        self.next() == Some(to)
    }
}

/// Error returned when a requested screen change is not a forward step.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Illegal screen transition {} -> {} at {}:{}", from, to, file, line)]
pub struct TransitionError {
    /// Screen that was active.
    pub from: ScreenId,
    /// Screen that was requested.
    pub to: ScreenId,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl TransitionError {
    /// Creates a new transition error with caller location tracking.
    #[track_caller]
    #[instrument]
    pub fn new(from: ScreenId, to: ScreenId) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            from,
            to,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
