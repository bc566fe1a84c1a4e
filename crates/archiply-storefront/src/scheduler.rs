//! Virtual-time timer scheduler.
//!
//! Stands in for the page's `setTimeout`/`setInterval`. Time only moves when
//! the owner advances it, so every widget transition is reproducible in
//! tests. Timers carry a [`TimerTask`] value rather than a callback; the
//! storefront dispatches on the task when it fires.

use std::time::Duration;

use crate::notifications::ToastId;

/// Handle to a scheduled timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

/// Work to perform when a timer fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerTask {
    /// Start the enter transition of a toast.
    RevealNotification(ToastId),
    /// Auto-dismiss a toast.
    DismissNotification(ToastId),
    /// Drop a toast once its exit transition ends.
    RemoveNotification(ToastId),
    /// Cart modal finished opening.
    FinishModalOpen,
    /// Cart modal finished closing.
    FinishModalClose,
    /// Move the testimonial carousel forward.
    AdvanceTestimonial,
    /// Simulated order processing finished.
    CompleteCheckout,
    /// Simulated newsletter signup finished.
    CompleteNewsletter,
}

#[derive(Debug)]
struct Timer {
    id: TimerId,
    due: Duration,
    interval: Option<Duration>,
    task: TimerTask,
    /// Tie-breaker so timers due at the same instant fire in scheduling order.
    seq: u64,
}

/// A timer that has come due.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fired {
    pub id: TimerId,
    pub task: TimerTask,
    /// Virtual time at which it fired.
    pub at: Duration,
}

/// Schedules one-shot and repeating timers against a virtual clock.
#[derive(Debug, Default)]
pub struct Scheduler {
    now: Duration,
    next_id: u64,
    next_seq: u64,
    timers: Vec<Timer>,
}

/// Shortest allowed repeat interval; a zero interval would never let time pass.
const MIN_INTERVAL: Duration = Duration::from_millis(1);

impl Scheduler {
    /// Create a new scheduler at time zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Run `task` once, `delay` from now.
    pub fn schedule_once(&mut self, delay: Duration, task: TimerTask) -> TimerId {
        self.insert(delay, None, task)
    }

    /// Run `task` every `interval`, first firing one interval from now.
    pub fn schedule_repeating(&mut self, interval: Duration, task: TimerTask) -> TimerId {
        let interval = interval.max(MIN_INTERVAL);
        self.insert(interval, Some(interval), task)
    }

    /// Cancel a timer. Returns false if it already fired or was cancelled.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let len_before = self.timers.len();
        self.timers.retain(|t| t.id != id);
        self.timers.len() < len_before
    }

    /// Check if a timer is still scheduled.
    pub fn is_pending(&self, id: TimerId) -> bool {
        self.timers.iter().any(|t| t.id == id)
    }

    /// Number of scheduled timers.
    pub fn pending(&self) -> usize {
        self.timers.len()
    }

    /// Pop the earliest timer due at or before `until`.
    ///
    /// Moves the clock to the timer's due time, so work done in response can
    /// schedule follow-ups relative to the moment it fired. Repeating timers
    /// are re-armed before being returned.
    pub fn next_due(&mut self, until: Duration) -> Option<Fired> {
        let index = self
            .timers
            .iter()
            .enumerate()
            .filter(|(_, t)| t.due <= until)
            .min_by_key(|(_, t)| (t.due, t.seq))
            .map(|(i, _)| i)?;

        let due = self.timers[index].due;
        self.now = self.now.max(due);

        let fired = match self.timers[index].interval {
            Some(interval) => {
                let seq = self.bump_seq();
                let timer = &mut self.timers[index];
                timer.due += interval;
                timer.seq = seq;
                Fired {
                    id: timer.id,
                    task: timer.task,
                    at: due,
                }
            }
            None => {
                let timer = self.timers.remove(index);
                Fired {
                    id: timer.id,
                    task: timer.task,
                    at: due,
                }
            }
        };
        Some(fired)
    }

    /// Move the clock forward to `until` without firing anything.
    pub fn advance_to(&mut self, until: Duration) {
        self.now = self.now.max(until);
    }

    /// Fire everything due within `elapsed` and move the clock past it.
    pub fn advance(&mut self, elapsed: Duration) -> Vec<Fired> {
        let until = self.now + elapsed;
        let mut fired = Vec::new();
        while let Some(f) = self.next_due(until) {
            fired.push(f);
        }
        self.advance_to(until);
        fired
    }

    fn insert(&mut self, delay: Duration, interval: Option<Duration>, task: TimerTask) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        let seq = self.bump_seq();
        self.timers.push(Timer {
            id,
            due: self.now + delay,
            interval,
            task,
            seq,
        });
        tracing::trace!(?id, ?task, ?delay, "scheduled timer");
        id
    }

    fn bump_seq(&mut self) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        seq
    }
}
