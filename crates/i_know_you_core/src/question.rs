//! The fixed question list shown between the welcome and thinking screens.

use derive_getters::Getters;
use derive_new::new;
use tracing::instrument;

use crate::{LanguageCode, QUESTION_COUNT, translations};

/// How a question is answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionKind {
    /// Answered with one of two buttons.
    YesNo,
    /// Answered with a 1–3 digit number.
    NumericEntry,
}

impl QuestionKind {
    /// Kind of the question at `index`: the last entry takes a number,
    /// every other entry is yes/no.
    #[instrument]
    pub fn at(index: usize) -> Self {
        if index == QUESTION_COUNT - 1 {
            Self::NumericEntry
        } else {
            Self::YesNo
        }
    }
}

/// One entry of the question list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, new)]
pub struct Question {
    /// Position in the list, starting at 0.
    index: usize,
    /// Localized question text.
    #[getter(skip)]
    text: &'static str,
    /// How the question is answered.
    kind: QuestionKind,
}

impl Question {
    /// Localized question text.
    pub fn text(&self) -> &'static str {
        self.text
    }
}

/// Builds the question list for a language.
///
/// Recomputed on every call, so a language switch is reflected the next
/// time the list is read.
#[instrument]
pub fn questions_for(code: LanguageCode) -> Vec<Question> {
    translations(code)
        .questions
        .iter()
        .enumerate()
        .map(|(index, text)| Question::new(index, *text, QuestionKind::at(index)))
        .collect()
}
