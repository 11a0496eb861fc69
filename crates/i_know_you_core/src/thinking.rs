//! The staged wait between the last question and the reveal.

use std::time::{Duration, Instant};

use derive_getters::Getters;
use tracing::{info, instrument};

use crate::Timeline;

/// How long the thinking screen stays up.
pub const THINKING_DURATION: Duration = Duration::from_millis(5000);

/// Interval between message changes.
pub const MESSAGE_INTERVAL: Duration = Duration::from_millis(1200);

/// Time for one full spinner revolution.
pub const SPIN_PERIOD: Duration = Duration::from_millis(4000);

/// Time for one grow-and-shrink pulse.
pub const PULSE_PERIOD: Duration = Duration::from_millis(2400);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ThinkingEvent {
    NextMessage,
    Done,
}

/// Result of ticking the thinking sequencer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThinkingStep {
    /// Keep showing the animation.
    Running,
    /// The wait is over; move to the result screen.
    Done,
}

/// Timers and animation phases of one thinking screen visit.
#[derive(Debug, Getters)]
pub struct ThinkingSequencer {
    /// When the screen was entered.
    started: Instant,
    /// Number of message changes so far; take it modulo the message count.
    message_ticks: usize,
    #[getter(skip)]
    timeline: Timeline<ThinkingEvent>,
}

impl ThinkingSequencer {
    /// Schedules the message cycle and the end of the wait.
    #[instrument]
    pub fn new(started: Instant) -> Self {
        let mut timeline = Timeline::new();
        timeline.schedule_every(
            started + MESSAGE_INTERVAL,
            MESSAGE_INTERVAL,
            ThinkingEvent::NextMessage,
        );
        timeline.schedule_at(started + THINKING_DURATION, ThinkingEvent::Done);
        Self {
            started,
            message_ticks: 0,
            timeline,
        }
    }

    /// Fires due timers.
    pub fn tick(&mut self, now: Instant) -> ThinkingStep {
        for event in self.timeline.drain_due(now) {
            match event {
                ThinkingEvent::NextMessage => self.message_ticks += 1,
                ThinkingEvent::Done => {
                    info!("Thinking finished");
                    self.timeline.cancel_all();
                    return ThinkingStep::Done;
                }
            }
        }
        ThinkingStep::Running
    }

    /// Index of the message to show out of `count` messages.
    pub fn message_index(&self, count: usize) -> usize {
        if count == 0 { 0 } else { self.message_ticks % count }
    }

    /// Spinner frame out of `frames`, completing one revolution per
    /// [`SPIN_PERIOD`].
    pub fn spinner_frame(&self, now: Instant, frames: usize) -> usize {
        if frames == 0 {
            return 0;
        }
        let phase = phase(self.elapsed(now), SPIN_PERIOD);
        ((phase * frames as f64) as usize).min(frames - 1)
    }

    /// Pulse level in `0.0..=1.0`, rising for the first half of
    /// [`PULSE_PERIOD`] and falling for the second.
    pub fn pulse(&self, now: Instant) -> f64 {
        let phase = phase(self.elapsed(now), PULSE_PERIOD);
        if phase < 0.5 { phase * 2.0 } else { (1.0 - phase) * 2.0 }
    }

    /// Fraction of the wait that has elapsed, capped at 1.0.
    pub fn progress(&self, now: Instant) -> f64 {
        (self.elapsed(now).as_secs_f64() / THINKING_DURATION.as_secs_f64()).min(1.0)
    }

    fn elapsed(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.started)
    }
}

fn phase(elapsed: Duration, period: Duration) -> f64 {
    let period_ms = period.as_millis().max(1);
    (elapsed.as_millis() % period_ms) as f64 / period_ms as f64
}
