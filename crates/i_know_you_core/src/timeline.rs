//! Deadline-ordered timers owned by a single screen.
//!
//! A [`Timeline`] never runs anything on its own. The event loop passes the
//! current instant to [`Timeline::drain_due`] and receives the events whose
//! deadlines have passed, oldest first. Because the timeline is a plain
//! value owned by the screen state, dropping the screen cancels every timer
//! it scheduled.

use std::time::{Duration, Instant};

use tracing::{debug, instrument, trace};

/// Smallest period accepted for repeating entries.
const MIN_PERIOD: Duration = Duration::from_millis(1);

#[derive(Debug)]
struct Entry<E> {
    due: Instant,
    seq: u64,
    period: Option<Duration>,
    event: E,
}

/// A set of pending one-shot and repeating timers.
#[derive(Debug)]
pub struct Timeline<E> {
    entries: Vec<Entry<E>>,
    next_seq: u64,
}

impl<E> Default for Timeline<E> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            next_seq: 0,
        }
    }
}

impl<E: Clone + std::fmt::Debug> Timeline<E> {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules `event` to fire once at `due`.
    #[instrument(skip(self))]
    pub fn schedule_at(&mut self, due: Instant, event: E) {
        self.push(due, None, event);
    }

    /// Schedules `event` to fire at `first` and then every `period`.
    #[instrument(skip(self))]
    pub fn schedule_every(&mut self, first: Instant, period: Duration, event: E) {
        self.push(first, Some(period.max(MIN_PERIOD)), event);
    }

    fn push(&mut self, due: Instant, period: Option<Duration>, event: E) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.entries.push(Entry {
            due,
            seq,
            period,
            event,
        });
    }

    /// Removes and returns every event due at or before `now`, ordered by
    /// deadline and then by scheduling order.
    ///
    /// A repeating entry that missed several periods fires once per missed
    /// period.
    pub fn drain_due(&mut self, now: Instant) -> Vec<E> {
        let mut fired = Vec::new();
        while let Some(pos) = self.next_due(now) {
            let event = self.entries[pos].event.clone();
            match self.entries[pos].period {
                Some(period) => self.entries[pos].due += period,
                None => {
                    self.entries.swap_remove(pos);
                }
            }
            trace!(?event, "Timer fired");
            fired.push(event);
        }
        fired
    }

    fn next_due(&self, now: Instant) -> Option<usize> {
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.due <= now)
            .min_by_key(|(_, e)| (e.due, e.seq))
            .map(|(pos, _)| pos)
    }

    /// Drops every pending timer.
    #[instrument(skip(self))]
    pub fn cancel_all(&mut self) {
        if !self.entries.is_empty() {
            debug!(pending = self.entries.len(), "Cancelling timers");
        }
        self.entries.clear();
    }

    /// Returns the earliest pending deadline.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.entries.iter().map(|e| e.due).min()
    }

    /// Returns the number of pending timers.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true when nothing is scheduled.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<E> Drop for Timeline<E> {
    fn drop(&mut self) {
        if !self.entries.is_empty() {
            debug!(pending = self.entries.len(), "Timeline dropped with pending timers");
        }
    }
}
