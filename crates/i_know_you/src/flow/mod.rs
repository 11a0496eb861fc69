//! Game flow: the four-screen TUI state machine and its language picker.

mod controller;
mod screen;
mod screens;
mod widgets;

pub use controller::{AppController, LoopControl};
pub use screen::{Screen, ScreenAction, ScreenContext};
pub use screens::{
    LanguagePicker, PickerAction, QuestionsScreen, ResultScreen, ThinkingScreen, WelcomeScreen,
};
