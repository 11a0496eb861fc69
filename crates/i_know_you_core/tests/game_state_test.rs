//! Tests for the game state store and the screen transition table.

use strum::IntoEnumIterator;

use i_know_you_core::{DigitBuffer, GameState, ScreenId, SecretNumber};

/// Runs the welcome screen's submit rule against a raw input string.
fn submit(state: &mut GameState, raw: &str) {
    let mut input = DigitBuffer::new();
    input.set_filtered(raw);
    if let Ok(secret) = input.to_secret() {
        state.set_secret_number(secret.as_str());
        state.transition(ScreenId::Questions).expect("Forward transition");
    }
}

#[test]
fn test_initial_state_is_welcome_without_secret() {
    let state = GameState::new();
    assert_eq!(*state.screen(), ScreenId::Welcome);
    assert_eq!(state.secret_number(), "");
}

#[test]
fn test_valid_submissions_commit_secret_and_advance() {
    for raw in ["1", "7", "42", "317", "999", "010"] {
        let mut state = GameState::new();
        submit(&mut state, raw);
        assert_eq!(state.secret_number(), raw, "input {raw}");
        assert_eq!(*state.screen(), ScreenId::Questions, "input {raw}");
    }
}

#[test]
fn test_exhaustive_three_digit_range_is_accepted() {
    for value in 1..=999u16 {
        let raw = value.to_string();
        let mut state = GameState::new();
        submit(&mut state, &raw);
        assert_eq!(state.secret_number(), raw.as_str());
        assert_eq!(*state.screen(), ScreenId::Questions);
    }
}

#[test]
fn test_invalid_submissions_stay_on_welcome() {
    for raw in ["", "0", "00", "000"] {
        let mut state = GameState::new();
        submit(&mut state, raw);
        assert_eq!(*state.screen(), ScreenId::Welcome, "input {raw:?}");
        assert_eq!(state.secret_number(), "");
    }
}

#[test]
fn test_values_above_range_are_rejected_by_parse() {
    assert!(SecretNumber::parse("1000").is_err());
    assert!(SecretNumber::parse("4321").is_err());
}

#[test]
fn test_store_keeps_secret_verbatim() {
    let mut state = GameState::new();
    state.set_secret_number("not validated");
    assert_eq!(state.secret_number(), "not validated");
}

#[test]
fn test_set_screen_is_unchecked() {
    let mut state = GameState::new();
    state.set_screen(ScreenId::Result);
    assert_eq!(*state.screen(), ScreenId::Result);
    state.set_screen(ScreenId::Questions);
    assert_eq!(*state.screen(), ScreenId::Questions);
}

#[test]
fn test_transition_allows_only_forward_pairs() {
    let allowed = [
        (ScreenId::Welcome, ScreenId::Questions),
        (ScreenId::Questions, ScreenId::Thinking),
        (ScreenId::Thinking, ScreenId::Result),
    ];
    for from in ScreenId::iter() {
        for to in ScreenId::iter() {
            let mut state = GameState::new();
            state.set_screen(from);
            let result = state.transition(to);
            if allowed.contains(&(from, to)) {
                assert!(result.is_ok(), "{from} -> {to} should be allowed");
                assert_eq!(*state.screen(), to);
            } else {
                let err = result.expect_err("transition should be rejected");
                assert_eq!(err.from, from);
                assert_eq!(err.to, to);
                assert_eq!(*state.screen(), from, "state must not change");
            }
        }
    }
}

#[test]
fn test_reset_from_every_screen() {
    for screen in ScreenId::iter() {
        let mut state = GameState::new();
        state.set_secret_number("123");
        state.set_screen(screen);
        state.reset();
        assert_eq!(state.secret_number(), "");
        assert_eq!(*state.screen(), ScreenId::Welcome);
    }
}

#[test]
fn test_reset_is_idempotent() {
    let mut once = GameState::new();
    once.set_secret_number("55");
    once.set_screen(ScreenId::Thinking);
    once.reset();

    let mut twice = once.clone();
    twice.reset();
    assert_eq!(once, twice);
}

#[test]
fn test_screen_ids_display_lowercase() {
    let names: Vec<String> = ScreenId::iter().map(|s| s.to_string()).collect();
    assert_eq!(names, ["welcome", "questions", "thinking", "result"]);
}
