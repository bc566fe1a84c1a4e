//! Newsletter signup form.

use std::sync::OnceLock;

use archiply_commerce::Notification;
use regex::Regex;

use crate::scheduler::{Scheduler, TimerTask};

const EMAIL_PATTERN: &str = r#"^(([^<>()\[\]\\.,;:\s@"]+(\.[^<>()\[\]\\.,;:\s@"]+)*)|(".+"))@((\[[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\])|(([a-zA-Z\-0-9]+\.)+[a-zA-Z]{2,}))$"#;

pub const EMPTY_EMAIL_MESSAGE: &str = "Please enter your email address";
pub const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email address";
pub const SUBSCRIBED_MESSAGE: &str = "Thank you for subscribing to our newsletter!";

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern is valid"))
}

/// Check an address against the signup form's email pattern.
///
/// The address is lowercased first, so validation ignores case.
pub fn is_valid_email(email: &str) -> bool {
    email_regex().is_match(&email.to_lowercase())
}

/// The signup form: its input field and any in-flight submissions.
#[derive(Debug, Default)]
pub struct NewsletterForm {
    input: String,
    in_flight: usize,
}

impl NewsletterForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current contents of the email field.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Number of submissions awaiting their simulated response.
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// Submit `email`.
    ///
    /// Returns an error notification if the trimmed address is empty or
    /// invalid; otherwise schedules the simulated signup and returns `None`.
    pub fn submit(
        &mut self,
        email: &str,
        delay: std::time::Duration,
        scheduler: &mut Scheduler,
    ) -> Option<Notification> {
        self.input = email.to_string();
        let email = email.trim();

        if email.is_empty() {
            return Some(Notification::error(EMPTY_EMAIL_MESSAGE));
        }
        if !is_valid_email(email) {
            tracing::debug!(email, "rejected newsletter address");
            return Some(Notification::error(INVALID_EMAIL_MESSAGE));
        }

        self.in_flight += 1;
        scheduler.schedule_once(delay, TimerTask::CompleteNewsletter);
        None
    }

    /// The simulated signup finished: clear the field and confirm.
    pub fn complete(&mut self) -> Notification {
        self.in_flight = self.in_flight.saturating_sub(1);
        self.input.clear();
        tracing::info!("newsletter signup completed");
        Notification::success(SUBSCRIBED_MESSAGE)
    }
}
