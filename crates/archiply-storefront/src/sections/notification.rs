//! Toast markup.

use crate::notifications::{Toast, ToastPhase};

use super::html_escape;

/// Render a toast. The `show` class is present only while fully visible.
pub fn render_notification(toast: &Toast) -> String {
    let show = if toast.phase == ToastPhase::Visible {
        " show"
    } else {
        ""
    };
    format!(
        r#"<div class="notification {severity}{show}" id="{id}">
    <div class="notification-content">
        <span>{message}</span>
        <button class="notification-close">&times;</button>
    </div>
</div>"#,
        severity = toast.notification.severity.as_str(),
        id = toast.id,
        message = html_escape(&toast.notification.message),
    )
}
