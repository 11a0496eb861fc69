//! Stepping through the question list.

use std::time::{Duration, Instant};

use derive_getters::Getters;
use tracing::{debug, info, instrument};

use crate::{DigitBuffer, QUESTION_COUNT, QuestionKind, Timeline};

/// Pause between picking a yes/no answer and moving on, so the choice is
/// visible.
pub const SELECTION_PAUSE: Duration = Duration::from_millis(250);

/// Length of the fade played after each advance.
pub const QUESTION_FADE: Duration = Duration::from_millis(300);

/// A yes/no answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YesNo {
    /// Yes
    Yes,
    /// No
    No,
}

/// The answer currently highlighted on a yes/no question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnswerSelection {
    /// Nothing picked yet.
    #[default]
    Unset,
    /// The given answer was picked.
    Picked(YesNo),
}

/// What the sequencer did in response to an input or a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionsStep {
    /// Still on the same question.
    Pending,
    /// Moved to the question at this index.
    Advanced(usize),
    /// The last question was answered.
    Finished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum QuestionEvent {
    Advance,
}

/// Per-visit state of the questions screen.
///
/// Answers are only used to trigger the next question; nothing is kept.
#[derive(Debug, Getters)]
pub struct QuestionsSequencer {
    /// Index of the visible question.
    index: usize,
    /// Highlighted yes/no answer.
    selection: AnswerSelection,
    /// Input for the numeric question.
    numeric_input: DigitBuffer,
    /// When the last advance happened, for the fade.
    advanced_at: Option<Instant>,
    #[getter(skip)]
    timeline: Timeline<QuestionEvent>,
    #[getter(skip)]
    finished: bool,
}

impl Default for QuestionsSequencer {
    fn default() -> Self {
        Self::new()
    }
}

impl QuestionsSequencer {
    /// Starts at the first question.
    #[instrument]
    pub fn new() -> Self {
        Self {
            index: 0,
            selection: AnswerSelection::Unset,
            numeric_input: DigitBuffer::new(),
            advanced_at: None,
            timeline: Timeline::new(),
            finished: false,
        }
    }

    /// Kind of the visible question.
    pub fn current_kind(&self) -> QuestionKind {
        QuestionKind::at(self.index)
    }

    /// Returns true once the last question has been answered.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Returns true while a picked answer waits for its pause to end.
    pub fn is_advance_pending(&self) -> bool {
        !self.timeline.is_empty()
    }

    /// Picks a yes/no answer and schedules the advance.
    ///
    /// Returns false, changing nothing, when the visible question is not
    /// yes/no or an answer is already waiting.
    #[instrument(skip(self))]
    pub fn select(&mut self, answer: YesNo, now: Instant) -> bool {
        if self.finished
            || self.current_kind() != QuestionKind::YesNo
            || self.is_advance_pending()
        {
            debug!(index = self.index, "Ignoring answer");
            return false;
        }
        debug!(index = self.index, ?answer, "Answer picked");
        self.selection = AnswerSelection::Picked(answer);
        self.timeline
            .schedule_at(now + SELECTION_PAUSE, QuestionEvent::Advance);
        true
    }

    /// Types a character into the numeric question. Non-digits and a fourth
    /// digit are dropped.
    #[instrument(skip(self))]
    pub fn push_digit(&mut self, c: char) -> bool {
        self.current_kind() == QuestionKind::NumericEntry && self.numeric_input.push(c)
    }

    /// Deletes the last typed digit of the numeric question.
    #[instrument(skip(self))]
    pub fn backspace(&mut self) {
        if self.current_kind() == QuestionKind::NumericEntry {
            self.numeric_input.backspace();
        }
    }

    /// Replaces the numeric input with the digits of `text`.
    #[instrument(skip(self))]
    pub fn set_input(&mut self, text: &str) {
        if self.current_kind() == QuestionKind::NumericEntry {
            self.numeric_input.set_filtered(text);
        }
    }

    /// Returns true when the guess button is enabled.
    pub fn can_guess(&self) -> bool {
        !self.finished
            && self.current_kind() == QuestionKind::NumericEntry
            && self.numeric_input.is_valid()
    }

    /// Presses the guess button on the numeric question.
    #[instrument(skip(self))]
    pub fn guess(&mut self, now: Instant) -> QuestionsStep {
        if !self.can_guess() {
            debug!(input = %self.numeric_input.as_str(), "Guess disabled");
            return QuestionsStep::Pending;
        }
        self.advance(now)
    }

    /// Fires due timers, advancing if a picked answer's pause is over.
    pub fn tick(&mut self, now: Instant) -> QuestionsStep {
        let mut step = QuestionsStep::Pending;
        for event in self.timeline.drain_due(now) {
            match event {
                QuestionEvent::Advance => step = self.advance(now),
            }
        }
        step
    }

    /// Returns the fade progress in `0.0..=1.0`, where 1.0 means fully
    /// visible.
    pub fn fade(&self, now: Instant) -> f64 {
        match self.advanced_at {
            Some(at) => {
                let elapsed = now.saturating_duration_since(at);
                (elapsed.as_secs_f64() / QUESTION_FADE.as_secs_f64()).min(1.0)
            }
            None => 1.0,
        }
    }

    #[instrument(skip(self))]
    fn advance(&mut self, now: Instant) -> QuestionsStep {
        if self.index + 1 >= QUESTION_COUNT {
            info!("Last question answered");
            self.finished = true;
            self.timeline.cancel_all();
            return QuestionsStep::Finished;
        }
        self.index += 1;
        self.selection = AnswerSelection::Unset;
        self.numeric_input.clear();
        self.advanced_at = Some(now);
        debug!(index = self.index, "Advanced to next question");
        QuestionsStep::Advanced(self.index)
    }
}
