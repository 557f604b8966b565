use std::time::Duration;

/// Delay after which a notification hides itself.
pub const AUTO_DISMISS: Duration = Duration::from_millis(2500);

pub const SUCCESS_MESSAGE: &str = "Login Successful";
pub const DEFAULT_FAILURE_MESSAGE: &str = "Login failed";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Failure,
}

/// Why a notification is asked to close.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    /// Incidental click outside of the banner. Never closes it.
    ClickAway,
    /// The user pressed the close button.
    Explicit,
    /// The auto-dismiss delay elapsed.
    Timeout,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Notification {
    pub visible: bool,
    pub message: String,
}

/// The two banners of the login page. They are toggled independently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notifications {
    pub success: Notification,
    pub failure: Notification,
}

impl Default for Notifications {
    fn default() -> Self {
        Self {
            success: Notification {
                visible: false,
                message: SUCCESS_MESSAGE.to_string(),
            },
            failure: Notification {
                visible: false,
                message: DEFAULT_FAILURE_MESSAGE.to_string(),
            },
        }
    }
}

impl Notifications {
    pub fn get(&self, kind: NotificationKind) -> &Notification {
        match kind {
            NotificationKind::Success => &self.success,
            NotificationKind::Failure => &self.failure,
        }
    }

    fn get_mut(&mut self, kind: NotificationKind) -> &mut Notification {
        match kind {
            NotificationKind::Success => &mut self.success,
            NotificationKind::Failure => &mut self.failure,
        }
    }

    pub fn show_success(&mut self) {
        self.success.visible = true;
    }

    /// Show the failure banner with the given message, or the default one if the message is
    /// missing or empty.
    pub fn show_failure(&mut self, message: Option<&str>) {
        self.failure.message = match message {
            Some(m) if !m.is_empty() => m.to_string(),
            _ => DEFAULT_FAILURE_MESSAGE.to_string(),
        };
        self.failure.visible = true;
    }

    /// Returns true if the notification was hidden by this call.
    pub fn close(&mut self, kind: NotificationKind, reason: CloseReason) -> bool {
        if reason == CloseReason::ClickAway {
            return false;
        }
        let notification = self.get_mut(kind);
        let was_visible = notification.visible;
        notification.visible = false;
        was_visible
    }

    pub fn is_visible(&self, kind: NotificationKind) -> bool {
        self.get(kind).visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_by_default() {
        let n = Notifications::default();
        assert!(!n.is_visible(NotificationKind::Success));
        assert!(!n.is_visible(NotificationKind::Failure));
        assert_eq!(n.success.message, SUCCESS_MESSAGE);
    }

    #[test]
    fn failure_message_fallback() {
        let mut n = Notifications::default();
        n.show_failure(Some("Invalid credentials"));
        assert_eq!(n.failure.message, "Invalid credentials");
        assert!(n.failure.visible);

        // A missing message does not reuse the previous server message.
        n.show_failure(None);
        assert_eq!(n.failure.message, DEFAULT_FAILURE_MESSAGE);

        n.show_failure(Some(""));
        assert_eq!(n.failure.message, DEFAULT_FAILURE_MESSAGE);
    }

    #[test]
    fn click_away_is_ignored() {
        let mut n = Notifications::default();
        n.show_success();
        assert!(!n.close(NotificationKind::Success, CloseReason::ClickAway));
        assert!(n.is_visible(NotificationKind::Success));

        assert!(n.close(NotificationKind::Success, CloseReason::Explicit));
        assert!(!n.is_visible(NotificationKind::Success));

        // Closing twice is harmless.
        assert!(!n.close(NotificationKind::Success, CloseReason::Timeout));
    }

    #[test]
    fn banners_are_independent() {
        let mut n = Notifications::default();
        n.show_success();
        n.show_failure(None);
        assert!(n.close(NotificationKind::Failure, CloseReason::Timeout));
        assert!(n.is_visible(NotificationKind::Success));
        assert!(!n.is_visible(NotificationKind::Failure));
    }
}
