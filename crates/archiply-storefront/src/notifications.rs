//! Toast display for [`Notification`] values.
//!
//! Only one toast is on screen at a time; showing a new one replaces it
//! outright. A toast enters shortly after being shown, dismisses itself after
//! the configured duration, and is removed once its exit transition ends.

use std::fmt;
use std::time::Duration;

use archiply_commerce::Notification;

use crate::config::TimingConfig;
use crate::scheduler::{Scheduler, TimerId, TimerTask};

/// Identifies one toast across its timers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(u64);

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "toast-{}", self.0)
    }
}

/// Transition phase of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPhase {
    /// Attached but not yet shown.
    Entering,
    /// Fully shown (the `show` class).
    Visible,
    /// Exit transition running.
    Leaving,
}

/// A notification on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: ToastId,
    pub notification: Notification,
    pub phase: ToastPhase,
}

#[derive(Debug, Clone, Copy)]
struct ToastTimings {
    enter: Duration,
    visible: Duration,
    exit: Duration,
}

/// Shows at most one toast and runs its lifecycle.
#[derive(Debug)]
pub struct NotificationCenter {
    current: Option<Toast>,
    dismiss_timer: Option<TimerId>,
    next_id: u64,
    timings: ToastTimings,
}

impl NotificationCenter {
    pub fn new(timings: &TimingConfig) -> Self {
        Self {
            current: None,
            dismiss_timer: None,
            next_id: 0,
            timings: ToastTimings {
                enter: timings.enter(),
                visible: timings.notification(),
                exit: timings.exit(),
            },
        }
    }

    /// The toast currently on screen, if any.
    pub fn current(&self) -> Option<&Toast> {
        self.current.as_ref()
    }

    /// Show a notification, replacing whatever is on screen.
    pub fn show(&mut self, notification: Notification, scheduler: &mut Scheduler) -> ToastId {
        if let Some(timer) = self.dismiss_timer.take() {
            scheduler.cancel(timer);
        }
        if let Some(replaced) = self.current.take() {
            tracing::trace!(toast = %replaced.id, "replacing notification");
        }

        let id = ToastId(self.next_id);
        self.next_id += 1;

        tracing::debug!(
            toast = %id,
            severity = %notification.severity,
            message = %notification.message,
            "showing notification"
        );

        scheduler.schedule_once(self.timings.enter, TimerTask::RevealNotification(id));
        self.dismiss_timer =
            Some(scheduler.schedule_once(self.timings.visible, TimerTask::DismissNotification(id)));
        self.current = Some(Toast {
            id,
            notification,
            phase: ToastPhase::Entering,
        });
        id
    }

    /// Start the exit transition of the current toast (the close button).
    ///
    /// Returns false if nothing is showing or it is already leaving.
    pub fn dismiss(&mut self, scheduler: &mut Scheduler) -> bool {
        let Some(toast) = self.current.as_mut() else {
            return false;
        };
        if toast.phase == ToastPhase::Leaving {
            return false;
        }

        if let Some(timer) = self.dismiss_timer.take() {
            scheduler.cancel(timer);
        }
        toast.phase = ToastPhase::Leaving;
        scheduler.schedule_once(self.timings.exit, TimerTask::RemoveNotification(toast.id));
        true
    }

    /// Advance the toast lifecycle for a fired timer.
    ///
    /// Timers belonging to a toast that has since been replaced are ignored.
    pub fn on_timer(&mut self, task: TimerTask, scheduler: &mut Scheduler) {
        let id = match task {
            TimerTask::RevealNotification(id)
            | TimerTask::DismissNotification(id)
            | TimerTask::RemoveNotification(id) => id,
            _ => return,
        };
        if self.current.as_ref().map(|t| t.id) != Some(id) {
            tracing::trace!(toast = %id, ?task, "ignoring stale notification timer");
            return;
        }

        match task {
            TimerTask::RevealNotification(_) => {
                if let Some(toast) = self.current.as_mut() {
                    if toast.phase == ToastPhase::Entering {
                        toast.phase = ToastPhase::Visible;
                    }
                }
            }
            TimerTask::DismissNotification(_) => {
                self.dismiss_timer = None;
                self.dismiss(scheduler);
            }
            TimerTask::RemoveNotification(_) => {
                self.current = None;
            }
            _ => {}
        }
    }
}
