//! Testimonial slider.

use std::time::Duration;

use crate::scheduler::{Scheduler, TimerId, TimerTask};

/// Cycles through testimonial slides until the visitor picks one.
#[derive(Debug)]
pub struct TestimonialCarousel {
    count: usize,
    index: usize,
    autoplay: Option<TimerId>,
}

impl TestimonialCarousel {
    pub fn new(count: usize) -> Self {
        Self {
            count,
            index: 0,
            autoplay: None,
        }
    }

    /// Start auto-advancing. Does nothing without slides or if already running.
    pub fn start(&mut self, interval: Duration, scheduler: &mut Scheduler) {
        if self.count == 0 || self.autoplay.is_some() {
            return;
        }
        self.autoplay = Some(scheduler.schedule_repeating(interval, TimerTask::AdvanceTestimonial));
    }

    /// Index of the active slide.
    pub fn current(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn is_autoplaying(&self) -> bool {
        self.autoplay.is_some()
    }

    /// A slider dot was clicked: show that slide and stop auto-advance for good.
    ///
    /// Out-of-range indices are ignored, though auto-advance still stops.
    pub fn select(&mut self, index: usize, scheduler: &mut Scheduler) {
        if let Some(timer) = self.autoplay.take() {
            scheduler.cancel(timer);
            tracing::debug!("testimonial autoplay stopped");
        }
        if index < self.count {
            self.index = index;
        }
    }

    pub fn on_timer(&mut self, task: TimerTask) {
        if task == TimerTask::AdvanceTestimonial && self.count > 0 {
            self.index = (self.index + 1) % self.count;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(carousel: &mut TestimonialCarousel, scheduler: &mut Scheduler, ms: u64) {
        for fired in scheduler.advance(Duration::from_millis(ms)) {
            carousel.on_timer(fired.task);
        }
    }

    #[test]
    fn test_autoplay_wraps() {
        let mut scheduler = Scheduler::new();
        let mut carousel = TestimonialCarousel::new(3);
        carousel.start(Duration::from_millis(5000), &mut scheduler);

        run(&mut carousel, &mut scheduler, 4999);
        assert_eq!(carousel.current(), 0);
        run(&mut carousel, &mut scheduler, 1);
        assert_eq!(carousel.current(), 1);
        run(&mut carousel, &mut scheduler, 10_000);
        assert_eq!(carousel.current(), 0);
    }

    #[test]
    fn test_select_stops_autoplay() {
        let mut scheduler = Scheduler::new();
        let mut carousel = TestimonialCarousel::new(3);
        carousel.start(Duration::from_millis(5000), &mut scheduler);

        carousel.select(2, &mut scheduler);
        assert_eq!(carousel.current(), 2);
        assert!(!carousel.is_autoplaying());

        run(&mut carousel, &mut scheduler, 60_000);
        assert_eq!(carousel.current(), 2);

        carousel.select(7, &mut scheduler);
        assert_eq!(carousel.current(), 2);
    }

    #[test]
    fn test_no_slides() {
        let mut scheduler = Scheduler::new();
        let mut carousel = TestimonialCarousel::new(0);
        carousel.start(Duration::from_millis(5000), &mut scheduler);

        assert!(carousel.is_empty());
        assert_eq!(scheduler.pending(), 0);
        carousel.on_timer(TimerTask::AdvanceTestimonial);
        assert_eq!(carousel.current(), 0);
    }
}
