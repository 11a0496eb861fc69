//! Screen implementations for the game flow.

mod language_picker;
mod questions;
mod result;
mod thinking;
mod welcome;

pub use language_picker::{LanguagePicker, PickerAction};
pub use questions::QuestionsScreen;
pub use result::ResultScreen;
pub use thinking::ThinkingScreen;
pub use welcome::WelcomeScreen;
