use services::{Notification, NotificationLevel};

/// How many notifications stay on screen at once.
pub const MAX_TOASTS: usize = 3;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToastVm {
    pub class: &'static str,
    pub message: String,
}

impl From<&Notification> for ToastVm {
    fn from(notification: &Notification) -> Self {
        let class = match notification.level {
            NotificationLevel::Success => "toast toast-success",
            NotificationLevel::Error => "toast toast-error",
        };
        Self {
            class,
            message: notification.message.clone(),
        }
    }
}

/// Appends `incoming` and drops the oldest entries beyond [`MAX_TOASTS`].
pub fn queue_toasts(queue: &mut Vec<Notification>, incoming: impl IntoIterator<Item = Notification>) {
    queue.extend(incoming);
    let excess = queue.len().saturating_sub(MAX_TOASTS);
    queue.drain(..excess);
}

/// Newest notifications last, capped at [`MAX_TOASTS`].
#[must_use]
pub fn map_toasts(notifications: &[Notification]) -> Vec<ToastVm> {
    let skip = notifications.len().saturating_sub(MAX_TOASTS);
    notifications.iter().skip(skip).map(ToastVm::from).collect()
}
