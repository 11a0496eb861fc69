//! I Know You core - the game flow behind the mind-reading trick
//!
//! The user types a number, answers six questions that change nothing, waits
//! through a staged analysis and is shown their own number as the "guess".
//! This crate holds that flow without any terminal or storage code.
//!
//! # Architecture
//!
//! - **Language**: [`LanguageCode`] and the static [`Translations`] tables
//! - **State**: [`GameState`] holding the secret and the visible [`ScreenId`]
//! - **Sequencers**: [`QuestionsSequencer`], [`ThinkingSequencer`] and
//!   [`RevealSequencer`], each driven by a screen-owned [`Timeline`]
//!
//! # Example
//!
//! ```
//! use std::time::{Duration, Instant};
//! use i_know_you_core::{GameState, RevealSequencer, ScreenId, SecretNumber};
//!
//! let mut state = GameState::new();
//! let secret = SecretNumber::parse("317").unwrap();
//! state.set_secret_number(secret.as_str());
//! state.transition(ScreenId::Questions).unwrap();
//!
//! let start = Instant::now();
//! let mut reveal = RevealSequencer::new(state.secret_number(), start);
//! reveal.tick(start + Duration::from_millis(1400));
//! assert_eq!(reveal.revealed_text(), "317");
//! assert!(*reveal.is_final());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod game_state;
mod language;
mod question;
mod questions;
mod reveal;
mod screen;
mod secret;
mod thinking;
mod timeline;
mod translations;

pub use game_state::GameState;
pub use language::LanguageCode;
pub use question::{Question, QuestionKind, questions_for};
pub use questions::{
    AnswerSelection, QUESTION_FADE, QuestionsSequencer, QuestionsStep, SELECTION_PAUSE, YesNo,
};
pub use reveal::{FINAL_DELAY, REVEAL_INTERVAL, RevealSequencer};
pub use screen::{ScreenId, TransitionError};
pub use secret::{DigitBuffer, MAX_DIGITS, MAX_VALUE, MIN_VALUE, SecretNumber, SecretNumberError};
pub use thinking::{
    MESSAGE_INTERVAL, PULSE_PERIOD, SPIN_PERIOD, THINKING_DURATION, ThinkingSequencer,
    ThinkingStep,
};
pub use timeline::Timeline;
pub use translations::{QUESTION_COUNT, THINKING_MESSAGE_COUNT, Translations, translations};
