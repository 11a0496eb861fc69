//! Tests for the questions, thinking and reveal sequencers and their timers.

use std::time::{Duration, Instant};

use i_know_you_core::{
    AnswerSelection, QUESTION_COUNT, QuestionKind, QuestionsSequencer, QuestionsStep,
    RevealSequencer, ThinkingSequencer, ThinkingStep, Timeline, YesNo,
};

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

/// Answers the five yes/no questions, returning the instant after the last
/// advance fired.
fn answer_yes_no(seq: &mut QuestionsSequencer, start: Instant) -> Instant {
    let mut now = start;
    for expected_next in 1..QUESTION_COUNT {
        assert!(seq.select(YesNo::Yes, now));
        now += ms(250);
        assert_eq!(seq.tick(now), QuestionsStep::Advanced(expected_next));
    }
    now
}

#[test]
fn test_yes_no_answer_advances_after_pause() {
    let start = Instant::now();
    let mut seq = QuestionsSequencer::new();
    assert!(seq.select(YesNo::No, start));
    assert_eq!(*seq.selection(), AnswerSelection::Picked(YesNo::No));

    assert_eq!(seq.tick(start + ms(249)), QuestionsStep::Pending);
    assert_eq!(*seq.index(), 0);

    assert_eq!(seq.tick(start + ms(250)), QuestionsStep::Advanced(1));
    assert_eq!(*seq.index(), 1);
    assert_eq!(*seq.selection(), AnswerSelection::Unset);
}

#[test]
fn test_second_answer_while_pending_is_ignored() {
    let start = Instant::now();
    let mut seq = QuestionsSequencer::new();
    assert!(seq.select(YesNo::Yes, start));
    assert!(!seq.select(YesNo::No, start + ms(100)));
    assert_eq!(*seq.selection(), AnswerSelection::Picked(YesNo::Yes));

    assert_eq!(seq.tick(start + ms(1000)), QuestionsStep::Advanced(1));
    assert_eq!(*seq.index(), 1, "only one advance may fire");
}

#[test]
fn test_sequencer_visits_six_questions_then_finishes() {
    let start = Instant::now();
    let mut seq = QuestionsSequencer::new();
    let now = answer_yes_no(&mut seq, start);

    assert_eq!(*seq.index(), 5);
    assert_eq!(seq.current_kind(), QuestionKind::NumericEntry);
    assert!(!seq.select(YesNo::Yes, now), "numeric question takes no yes/no");

    assert!(seq.push_digit('4'));
    assert!(seq.push_digit('2'));
    assert_eq!(seq.guess(now), QuestionsStep::Finished);
    assert!(seq.is_finished());
    assert_eq!(*seq.index(), 5);
}

#[test]
fn test_guess_disabled_until_value_in_range() {
    let start = Instant::now();
    let mut seq = QuestionsSequencer::new();
    let now = answer_yes_no(&mut seq, start);

    assert!(!seq.can_guess());
    assert_eq!(seq.guess(now), QuestionsStep::Pending);

    seq.set_input("0");
    assert!(!seq.can_guess());

    seq.set_input("a1b2c3d4");
    assert_eq!(seq.numeric_input().as_str(), "123");
    assert!(seq.can_guess());

    assert!(!seq.push_digit('9'), "fourth digit is dropped");
    seq.backspace();
    assert_eq!(seq.numeric_input().as_str(), "12");
}

#[test]
fn test_digits_ignored_on_yes_no_questions() {
    let mut seq = QuestionsSequencer::new();
    assert!(!seq.push_digit('5'));
    assert!(seq.numeric_input().is_empty());
    assert!(!seq.can_guess());
}

#[test]
fn test_fade_runs_after_advance() {
    let start = Instant::now();
    let mut seq = QuestionsSequencer::new();
    assert_eq!(seq.fade(start), 1.0);

    seq.select(YesNo::Yes, start);
    let advanced = start + ms(250);
    seq.tick(advanced);
    assert_eq!(seq.fade(advanced), 0.0);
    assert!(seq.fade(advanced + ms(150)) > 0.4);
    assert_eq!(seq.fade(advanced + ms(300)), 1.0);
}

#[test]
fn test_reveal_schedule_for_317() {
    let start = Instant::now();
    let mut reveal = RevealSequencer::new("317", start);
    assert_eq!(*reveal.slots(), 3);
    assert_eq!(reveal.placeholders(), 3);

    reveal.tick(start);
    assert_eq!(reveal.revealed_text(), "3");

    reveal.tick(start + ms(499));
    assert_eq!(reveal.revealed_text(), "3");

    reveal.tick(start + ms(500));
    assert_eq!(reveal.revealed_text(), "31");
    assert_eq!(reveal.placeholders(), 1);

    reveal.tick(start + ms(1000));
    assert_eq!(reveal.revealed_text(), "317");
    assert!(!*reveal.is_final());

    reveal.tick(start + ms(1399));
    assert!(!*reveal.is_final());

    reveal.tick(start + ms(1400));
    assert!(*reveal.is_final());
}

#[test]
fn test_reveal_catches_up_in_order_after_a_long_gap() {
    let start = Instant::now();
    let mut reveal = RevealSequencer::new("908", start);
    assert!(reveal.tick(start + ms(5000)));
    assert_eq!(reveal.revealed_text(), "908");
    assert!(*reveal.is_final());
    assert!(!reveal.tick(start + ms(6000)), "one shot");
}

#[test]
fn test_single_digit_goes_final_after_400ms() {
    let start = Instant::now();
    let mut reveal = RevealSequencer::new("5", start);
    reveal.tick(start + ms(399));
    assert_eq!(reveal.revealed_text(), "5");
    assert!(!*reveal.is_final());
    reveal.tick(start + ms(400));
    assert!(*reveal.is_final());
}

#[test]
fn test_empty_secret_still_reaches_final() {
    let start = Instant::now();
    let mut reveal = RevealSequencer::new("", start);
    assert_eq!(*reveal.slots(), 0);
    reveal.tick(start + ms(400));
    assert!(*reveal.is_final());
}

#[test]
fn test_thinking_done_after_five_seconds() {
    let start = Instant::now();
    let mut thinking = ThinkingSequencer::new(start);
    assert_eq!(thinking.tick(start + ms(4999)), ThinkingStep::Running);
    assert_eq!(thinking.tick(start + ms(5000)), ThinkingStep::Done);
}

#[test]
fn test_thinking_messages_cycle_every_1200ms() {
    let start = Instant::now();
    let mut thinking = ThinkingSequencer::new(start);
    assert_eq!(thinking.message_index(5), 0);

    thinking.tick(start + ms(1199));
    assert_eq!(thinking.message_index(5), 0);

    thinking.tick(start + ms(1200));
    assert_eq!(thinking.message_index(5), 1);

    thinking.tick(start + ms(4800));
    assert_eq!(thinking.message_index(5), 4);
}

#[test]
fn test_thinking_animation_phases() {
    let start = Instant::now();
    let thinking = ThinkingSequencer::new(start);
    assert_eq!(thinking.spinner_frame(start, 8), 0);
    assert_eq!(thinking.spinner_frame(start + ms(2000), 8), 4);
    assert_eq!(thinking.spinner_frame(start + ms(4000), 8), 0);

    assert_eq!(thinking.pulse(start), 0.0);
    assert_eq!(thinking.pulse(start + ms(1200)), 1.0);

    assert_eq!(thinking.progress(start + ms(2500)), 0.5);
    assert_eq!(thinking.progress(start + ms(9000)), 1.0);
}

#[test]
fn test_timeline_drops_nothing_late_after_cancel() {
    let start = Instant::now();
    let mut timeline = Timeline::new();
    timeline.schedule_at(start + ms(10), 1);
    timeline.schedule_every(start, ms(5), 2);
    assert_eq!(timeline.len(), 2);

    timeline.cancel_all();
    assert!(timeline.is_empty());
    assert!(timeline.drain_due(start + ms(100)).is_empty());
}

#[test]
fn test_timeline_orders_by_deadline() {
    let start = Instant::now();
    let mut timeline = Timeline::new();
    timeline.schedule_at(start + ms(30), "c");
    timeline.schedule_at(start + ms(10), "a");
    timeline.schedule_every(start + ms(20), ms(20), "tick");
    assert_eq!(timeline.next_deadline(), Some(start + ms(10)));

    assert_eq!(
        timeline.drain_due(start + ms(40)),
        vec!["a", "tick", "c", "tick"]
    );
    assert_eq!(timeline.next_deadline(), Some(start + ms(60)));
}
