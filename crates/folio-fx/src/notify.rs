//! Single-slot notification model
//!
//! At most one notification is live. Showing a new one supersedes the
//! current one immediately; there is no queue. Each notification gets a
//! fresh id so that the dismissal timer of a superseded notification cannot
//! clear its replacement.

/// Notification severity
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Severity {
    #[default]
    Info,
    Success,
}

impl Severity {
    /// Parse a severity name; anything unknown is `Info`
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "success" => Severity::Success,
            _ => Severity::Info,
        }
    }

    /// Class suffix (`notification-{name}`)
    pub fn name(self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Success => "success",
        }
    }

    /// Font Awesome icon class
    pub fn icon(self) -> &'static str {
        match self {
            Severity::Info => "fa-info-circle",
            Severity::Success => "fa-check-circle",
        }
    }

    /// Background color
    pub fn color(self) -> &'static str {
        match self {
            Severity::Info => "#3b82f6",
            Severity::Success => "#10b981",
        }
    }
}

/// One transient message
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub severity: Severity,
}

impl Notification {
    pub fn new(message: impl Into<String>, severity: Severity) -> Self {
        Self {
            message: message.into(),
            severity,
        }
    }

    /// CSS class list for the notification node
    pub fn class_name(&self) -> String {
        format!("notification notification-{}", self.severity.name())
    }
}

/// Identity of a shown notification
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

/// Live notification with its expiry
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LiveNotification {
    pub id: NotificationId,
    pub notification: Notification,
    /// Timestamp at which the exit transition starts
    pub visible_until_ms: u64,
}

/// What the shell must do to render a `show`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShowPlan {
    /// Notification to remove synchronously before inserting the new one
    pub superseded: Option<NotificationId>,
    /// Id of the new notification
    pub id: NotificationId,
}

/// The single notification slot
#[derive(Clone, Debug)]
pub struct NotificationSlot {
    current: Option<LiveNotification>,
    next_id: u64,
    visible_ms: u64,
}

impl NotificationSlot {
    /// Create an empty slot whose notifications stay `visible_ms`
    pub fn new(visible_ms: u64) -> Self {
        Self {
            current: None,
            next_id: 1,
            visible_ms,
        }
    }

    /// Replace whatever is showing with `notification`
    pub fn show(&mut self, notification: Notification, now_ms: u64) -> ShowPlan {
        let id = NotificationId(self.next_id);
        self.next_id += 1;
        let superseded = self.current.take().map(|live| live.id);
        self.current = Some(LiveNotification {
            id,
            notification,
            visible_until_ms: now_ms + self.visible_ms,
        });
        ShowPlan { superseded, id }
    }

    /// Dismiss `id` if it is still the live notification
    ///
    /// Returns false for superseded ids; their timers must leave the slot
    /// alone.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        match &self.current {
            Some(live) if live.id == id => {
                self.current = None;
                true
            }
            _ => false,
        }
    }

    /// The live notification, if any
    pub fn current(&self) -> Option<&LiveNotification> {
        self.current.as_ref()
    }

    /// Number of live notifications (0 or 1)
    pub fn live_count(&self) -> usize {
        usize::from(self.current.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_supersedes() {
        let mut slot = NotificationSlot::new(5000);
        let first = slot.show(Notification::new("one", Severity::Info), 0);
        assert_eq!(first.superseded, None);

        let second = slot.show(Notification::new("two", Severity::Success), 10);
        assert_eq!(second.superseded, Some(first.id));
        assert_eq!(slot.live_count(), 1);
        assert_eq!(slot.current().unwrap().notification.message, "two");
        assert_eq!(slot.current().unwrap().visible_until_ms, 5010);
    }

    #[test]
    fn test_stale_dismiss_is_ignored() {
        let mut slot = NotificationSlot::new(5000);
        let first = slot.show(Notification::new("one", Severity::Info), 0);
        let second = slot.show(Notification::new("two", Severity::Info), 100);

        assert!(!slot.dismiss(first.id));
        assert_eq!(slot.live_count(), 1);
        assert!(slot.dismiss(second.id));
        assert_eq!(slot.live_count(), 0);
        assert!(!slot.dismiss(second.id));
    }

    #[test]
    fn test_severity_styling() {
        assert_eq!(Severity::from_name("success"), Severity::Success);
        assert_eq!(Severity::from_name("error"), Severity::Info);
        assert_eq!(Severity::Success.icon(), "fa-check-circle");
        assert_eq!(Severity::Info.color(), "#3b82f6");
        assert_eq!(
            Notification::new("x", Severity::Success).class_name(),
            "notification notification-success"
        );
    }
}
