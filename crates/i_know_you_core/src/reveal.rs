//! Digit-by-digit disclosure of the secret on the result screen.

use std::time::{Duration, Instant};

use derive_getters::Getters;
use tracing::{debug, info, instrument};

use crate::Timeline;

/// Gap between two digit reveals.
pub const REVEAL_INTERVAL: Duration = Duration::from_millis(500);

/// Delay between the last digit and the confirmation panel.
pub const FINAL_DELAY: Duration = Duration::from_millis(400);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RevealEvent {
    Digit(char),
    Final,
}

/// One-shot reveal of a digit string.
///
/// Digit `i` appears `i * 500ms` after construction and the final state is
/// entered 400ms after the last digit. The number of slots is known from
/// the start so placeholders can be drawn for unrevealed digits.
#[derive(Debug, Getters)]
pub struct RevealSequencer {
    /// Digits shown so far, left to right.
    revealed: Vec<char>,
    /// Total number of digit slots.
    slots: usize,
    /// True once the confirmation panel and reset control are visible.
    is_final: bool,
    #[getter(skip)]
    timeline: Timeline<RevealEvent>,
}

impl RevealSequencer {
    /// Schedules the reveal of `digits` counting from `started`.
    #[instrument(skip(digits))]
    pub fn new(digits: &str, started: Instant) -> Self {
        let mut timeline = Timeline::new();
        let mut last = None;
        for (i, digit) in digits.chars().enumerate() {
            let at = started + REVEAL_INTERVAL * i as u32;
            timeline.schedule_at(at, RevealEvent::Digit(digit));
            last = Some(at);
        }
        timeline.schedule_at(last.unwrap_or(started) + FINAL_DELAY, RevealEvent::Final);
        debug!(slots = digits.chars().count(), "Reveal scheduled");

        Self {
            revealed: Vec::new(),
            slots: digits.chars().count(),
            is_final: false,
            timeline,
        }
    }

    /// Fires due reveal events. Returns true if anything changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let events = self.timeline.drain_due(now);
        let changed = !events.is_empty();
        for event in events {
            match event {
                RevealEvent::Digit(digit) => self.revealed.push(digit),
                RevealEvent::Final => {
                    info!("Reveal complete");
                    self.is_final = true;
                }
            }
        }
        changed
    }

    /// Number of slots still showing a placeholder.
    pub fn placeholders(&self) -> usize {
        self.slots.saturating_sub(self.revealed.len())
    }

    /// The revealed digits as a string.
    pub fn revealed_text(&self) -> String {
        self.revealed.iter().collect()
    }
}
