//! Cart modal dialog.

use std::time::Duration;

use crate::scheduler::{Scheduler, TimerId, TimerTask};

/// Visibility of the cart modal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ModalState {
    #[default]
    Hidden,
    /// Displayed, content not yet animated in.
    Opening,
    Open,
    /// Content animating out; hidden once the transition ends.
    Closing,
}

/// The cart modal and its open/close transitions.
#[derive(Debug)]
pub struct CartModal {
    state: ModalState,
    transition: Option<TimerId>,
    enter: Duration,
    exit: Duration,
}

impl CartModal {
    pub fn new(enter: Duration, exit: Duration) -> Self {
        Self {
            state: ModalState::Hidden,
            transition: None,
            enter,
            exit,
        }
    }

    pub fn state(&self) -> ModalState {
        self.state
    }

    /// Whether the modal is displayed at all (any state but hidden).
    pub fn is_displayed(&self) -> bool {
        self.state != ModalState::Hidden
    }

    /// Open the modal. Reopening while closing aborts the close.
    pub fn open(&mut self, scheduler: &mut Scheduler) {
        match self.state {
            ModalState::Opening | ModalState::Open => return,
            ModalState::Hidden | ModalState::Closing => {}
        }
        self.cancel_transition(scheduler);
        self.state = ModalState::Opening;
        self.transition = Some(scheduler.schedule_once(self.enter, TimerTask::FinishModalOpen));
        tracing::debug!("opening cart modal");
    }

    /// Close the modal. No-op if hidden or already closing.
    pub fn close(&mut self, scheduler: &mut Scheduler) {
        match self.state {
            ModalState::Hidden | ModalState::Closing => return,
            ModalState::Opening | ModalState::Open => {}
        }
        self.cancel_transition(scheduler);
        self.state = ModalState::Closing;
        self.transition = Some(scheduler.schedule_once(self.exit, TimerTask::FinishModalClose));
        tracing::debug!("closing cart modal");
    }

    /// A click landed on the backdrop outside the modal content.
    pub fn backdrop_clicked(&mut self, scheduler: &mut Scheduler) {
        self.close(scheduler);
    }

    pub fn on_timer(&mut self, task: TimerTask) {
        match (task, self.state) {
            (TimerTask::FinishModalOpen, ModalState::Opening) => {
                self.transition = None;
                self.state = ModalState::Open;
            }
            (TimerTask::FinishModalClose, ModalState::Closing) => {
                self.transition = None;
                self.state = ModalState::Hidden;
            }
            _ => {}
        }
    }

    fn cancel_transition(&mut self, scheduler: &mut Scheduler) {
        if let Some(timer) = self.transition.take() {
            scheduler.cancel(timer);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn modal() -> CartModal {
        CartModal::new(ms(10), ms(300))
    }

    fn run(modal: &mut CartModal, scheduler: &mut Scheduler, elapsed: Duration) {
        for fired in scheduler.advance(elapsed) {
            modal.on_timer(fired.task);
        }
    }

    #[test]
    fn test_open_then_close() {
        let mut scheduler = Scheduler::new();
        let mut modal = modal();

        modal.open(&mut scheduler);
        assert_eq!(modal.state(), ModalState::Opening);
        assert!(modal.is_displayed());
        run(&mut modal, &mut scheduler, ms(10));
        assert_eq!(modal.state(), ModalState::Open);

        modal.close(&mut scheduler);
        assert_eq!(modal.state(), ModalState::Closing);
        run(&mut modal, &mut scheduler, ms(299));
        assert!(modal.is_displayed());
        run(&mut modal, &mut scheduler, ms(1));
        assert_eq!(modal.state(), ModalState::Hidden);
    }

    #[test]
    fn test_backdrop_closes() {
        let mut scheduler = Scheduler::new();
        let mut modal = modal();
        modal.open(&mut scheduler);
        run(&mut modal, &mut scheduler, ms(50));

        modal.backdrop_clicked(&mut scheduler);
        run(&mut modal, &mut scheduler, ms(300));
        assert_eq!(modal.state(), ModalState::Hidden);
    }

    #[test]
    fn test_reopen_while_closing() {
        let mut scheduler = Scheduler::new();
        let mut modal = modal();
        modal.open(&mut scheduler);
        run(&mut modal, &mut scheduler, ms(10));
        modal.close(&mut scheduler);
        run(&mut modal, &mut scheduler, ms(100));

        modal.open(&mut scheduler);
        run(&mut modal, &mut scheduler, ms(500));
        assert_eq!(modal.state(), ModalState::Open);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn test_close_when_hidden_is_noop() {
        let mut scheduler = Scheduler::new();
        let mut modal = modal();
        modal.close(&mut scheduler);
        assert_eq!(modal.state(), ModalState::Hidden);
        assert_eq!(scheduler.pending(), 0);
    }
}
