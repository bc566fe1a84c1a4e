//! Simulated checkout flow.

use std::time::Duration;

use archiply_commerce::Notification;

use crate::scheduler::{Scheduler, TimerId, TimerTask};

pub const EMPTY_CART_MESSAGE: &str = "Your cart is empty";
pub const PROCESSING_MESSAGE: &str = "Processing your order...";
pub const ORDER_PLACED_MESSAGE: &str = "Order placed successfully!";

/// Tracks the one order that may be processing at a time.
#[derive(Debug, Default)]
pub struct Checkout {
    pending: Option<TimerId>,
}

impl Checkout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Begin checkout.
    ///
    /// An empty cart yields an error notification. While an order is already
    /// processing the request is ignored and `None` is returned.
    pub fn start(
        &mut self,
        cart_is_empty: bool,
        delay: Duration,
        scheduler: &mut Scheduler,
    ) -> Option<Notification> {
        if self.pending.is_some() {
            tracing::debug!("checkout already in progress");
            return None;
        }
        if cart_is_empty {
            return Some(Notification::error(EMPTY_CART_MESSAGE));
        }

        self.pending = Some(scheduler.schedule_once(delay, TimerTask::CompleteCheckout));
        tracing::info!("processing order");
        Some(Notification::info(PROCESSING_MESSAGE))
    }

    /// The simulated processing finished. The caller clears the cart and
    /// closes the modal.
    pub fn complete(&mut self) -> Notification {
        self.pending = None;
        tracing::info!("order placed");
        Notification::success(ORDER_PLACED_MESSAGE)
    }
}
