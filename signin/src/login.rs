use std::time::Duration;

use tracing::{debug, info, warn};

use crate::{
    form::{Credentials, Field, FormState},
    http::{AuthError, LoginResponse},
    notification::{CloseReason, NotificationKind, Notifications, AUTO_DISMISS},
    validation::{validate, Validation},
};

/// Where the user lands after a successful login.
pub const LANDING_ROUTE: &str = "/";

/// Time left to the user to read the success banner before leaving the page.
pub const NAVIGATION_DELAY: Duration = Duration::from_millis(2500);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Submission {
    #[default]
    Idle,
    Submitting,
    /// Logged in, waiting for the navigation to the landing route. The form stays locked.
    Navigating,
}

/// Side effects requested by the [`LoginForm`]. The caller is in charge of running them and of
/// feeding the results back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Call the authentication service, then pass the result to
    /// [`LoginForm::on_login_result`].
    Login(Credentials),
    /// Close the notification with [`CloseReason::Timeout`] once the delay elapsed.
    Dismiss {
        kind: NotificationKind,
        after: Duration,
    },
    /// Navigate to the route once the delay elapsed.
    Navigate {
        route: &'static str,
        after: Duration,
    },
}

/// State of the login form: the typed values, the errors displayed under the fields, the
/// submission lifecycle and the notification banners.
#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    form: FormState,
    validation: Validation,
    submission: Submission,
    notifications: Notifications,
}

impl LoginForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    /// Errors computed at the last submit attempt.
    pub fn validation(&self) -> &Validation {
        &self.validation
    }

    pub fn submission(&self) -> Submission {
        self.submission
    }

    pub fn notifications(&self) -> &Notifications {
        &self.notifications
    }

    /// Whether the form is locked by a login in flight or a pending navigation.
    pub fn is_busy(&self) -> bool {
        self.submission != Submission::Idle
    }

    pub fn can_submit(&self) -> bool {
        !self.is_busy()
    }

    /// Field errors are only refreshed on submit.
    pub fn on_change(&mut self, field: Field, value: String) {
        self.form.set(field, value);
    }

    /// Start a submission. Returns `None` if one is already in flight or if the form is invalid,
    /// in which case the field errors are updated for display.
    pub fn submit(&mut self) -> Option<Effect> {
        if self.is_busy() {
            debug!("Login already in progress, ignoring submit");
            return None;
        }

        self.validation = validate(&self.form);
        if !self.validation.is_valid() {
            info!("Login form has invalid fields, not submitting");
            return None;
        }

        self.submission = Submission::Submitting;
        info!("Submitting login for {}", self.form.email);
        Some(Effect::Login(self.form.credentials()))
    }

    /// Apply the result of the authentication call. Transport errors are shown as a failed
    /// login with the default message. A successful login keeps the form locked until
    /// [`LoginForm::on_navigated`].
    pub fn on_login_result(&mut self, result: Result<LoginResponse, AuthError>) -> Vec<Effect> {
        if self.submission != Submission::Submitting {
            warn!("Received a login result with no login in progress");
            return Vec::new();
        }

        match result {
            Ok(res) if res.success => {
                info!("Login succeeded");
                self.submission = Submission::Navigating;
                self.notifications.show_success();
                vec![
                    Effect::Dismiss {
                        kind: NotificationKind::Success,
                        after: AUTO_DISMISS,
                    },
                    Effect::Navigate {
                        route: LANDING_ROUTE,
                        after: NAVIGATION_DELAY,
                    },
                ]
            }
            Ok(res) => {
                info!("Login rejected: {:?}", res.message);
                self.submission = Submission::Idle;
                self.notifications.show_failure(res.message.as_deref());
                vec![Effect::Dismiss {
                    kind: NotificationKind::Failure,
                    after: AUTO_DISMISS,
                }]
            }
            Err(e) => {
                warn!("Login request failed: {}", e);
                self.submission = Submission::Idle;
                self.notifications.show_failure(None);
                vec![Effect::Dismiss {
                    kind: NotificationKind::Failure,
                    after: AUTO_DISMISS,
                }]
            }
        }
    }

    /// To be called when the delayed navigation fires. Returns false if no navigation is
    /// pending, for instance after a reset, in which case it must not be followed.
    pub fn on_navigated(&mut self) -> bool {
        if self.submission != Submission::Navigating {
            debug!("No navigation pending");
            return false;
        }
        self.submission = Submission::Idle;
        true
    }

    /// Returns true if a visible notification was hidden.
    pub fn close(&mut self, kind: NotificationKind, reason: CloseReason) -> bool {
        self.notifications.close(kind, reason)
    }

    /// Back to a blank form, as when the page is left and opened again.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notification::{DEFAULT_FAILURE_MESSAGE, SUCCESS_MESSAGE};
    use crate::validation::{INVALID_EMAIL, SHORT_PASSWORD};

    fn filled(email: &str, password: &str) -> LoginForm {
        let mut login = LoginForm::new();
        login.on_change(Field::Email, email.to_string());
        login.on_change(Field::Password, password.to_string());
        login
    }

    #[test]
    fn invalid_form_is_not_submitted() {
        let mut login = filled("not-an-email", "123");
        assert_eq!(login.submit(), None);
        assert_eq!(login.submission(), Submission::Idle);
        assert_eq!(login.validation().email.warning(), Some(INVALID_EMAIL));
        assert_eq!(login.validation().password.warning(), Some(SHORT_PASSWORD));
        assert!(login.can_submit());
    }

    #[test]
    fn errors_stay_until_next_submit() {
        let mut login = filled("nope", "secret1");
        assert_eq!(login.submit(), None);
        login.on_change(Field::Email, "a@b.co".to_string());
        assert!(login.validation().email.has_error);

        assert!(login.submit().is_some());
        assert!(!login.validation().email.has_error);
    }

    #[test]
    fn valid_form_starts_login() {
        let mut login = filled("a@b.co", "secret1");
        assert_eq!(
            login.submit(),
            Some(Effect::Login(Credentials {
                email: "a@b.co".to_string(),
                password: "secret1".to_string(),
            }))
        );
        assert_eq!(login.submission(), Submission::Submitting);
        assert!(!login.can_submit());

        // No second submission while the first one is in flight.
        assert_eq!(login.submit(), None);
        assert_eq!(login.submission(), Submission::Submitting);
    }

    #[test]
    fn successful_login() {
        let mut login = filled("a@b.co", "secret1");
        login.submit();
        let effects = login.on_login_result(Ok(LoginResponse::success()));
        assert_eq!(login.submission(), Submission::Navigating);
        assert!(!login.can_submit());
        assert!(login.notifications().success.visible);
        assert_eq!(login.notifications().success.message, SUCCESS_MESSAGE);
        assert!(!login.notifications().failure.visible);
        assert_eq!(
            effects,
            vec![
                Effect::Dismiss {
                    kind: NotificationKind::Success,
                    after: Duration::from_millis(2500),
                },
                Effect::Navigate {
                    route: "/",
                    after: Duration::from_millis(2500),
                },
            ]
        );

        // Locked until the navigation happened.
        assert_eq!(login.submit(), None);
        assert!(login.on_navigated());
        assert_eq!(login.submission(), Submission::Idle);
        assert!(login.can_submit());
        assert!(!login.on_navigated());
    }

    #[test]
    fn navigation_after_reset_is_dropped() {
        let mut login = filled("a@b.co", "secret1");
        login.submit();
        login.on_login_result(Ok(LoginResponse::success()));
        login.reset();
        assert!(!login.on_navigated());
        assert_eq!(login.submission(), Submission::Idle);
    }

    #[test]
    fn rejected_login() {
        let mut login = filled("a@b.co", "secret1");
        login.submit();
        let effects = login.on_login_result(Ok(LoginResponse::failure(Some(
            "Invalid credentials".to_string(),
        ))));
        assert_eq!(login.submission(), Submission::Idle);
        assert!(login.notifications().failure.visible);
        assert_eq!(login.notifications().failure.message, "Invalid credentials");
        assert_eq!(
            effects,
            vec![Effect::Dismiss {
                kind: NotificationKind::Failure,
                after: Duration::from_millis(2500),
            }]
        );

        login.submit();
        login.on_login_result(Ok(LoginResponse::failure(None)));
        assert_eq!(login.notifications().failure.message, DEFAULT_FAILURE_MESSAGE);
    }

    #[test]
    fn transport_error_is_a_failed_login() {
        let mut login = filled("a@b.co", "secret1");
        login.submit();
        let effects =
            login.on_login_result(Err(AuthError::Transport("connection refused".to_string())));
        assert_eq!(login.submission(), Submission::Idle);
        assert!(login.notifications().failure.visible);
        assert_eq!(login.notifications().failure.message, DEFAULT_FAILURE_MESSAGE);
        assert!(!effects
            .iter()
            .any(|e| matches!(e, Effect::Navigate { .. })));
    }

    #[test]
    fn late_result_is_ignored() {
        let mut login = filled("a@b.co", "secret1");
        login.submit();
        login.reset();
        assert!(login
            .on_login_result(Ok(LoginResponse::success()))
            .is_empty());
        assert!(!login.notifications().success.visible);
    }

    #[test]
    fn close_notification() {
        let mut login = filled("a@b.co", "secret1");
        login.submit();
        login.on_login_result(Ok(LoginResponse::failure(None)));
        assert!(!login.close(NotificationKind::Failure, CloseReason::ClickAway));
        assert!(login.notifications().failure.visible);
        assert!(login.close(NotificationKind::Failure, CloseReason::Explicit));
        assert!(!login.notifications().failure.visible);
    }

    #[test]
    fn reset_clears_everything() {
        let mut login = filled("nope", "1");
        login.submit();
        login.reset();
        assert_eq!(login.form(), &FormState::default());
        assert!(login.validation().is_valid());
        assert_eq!(login.submission(), Submission::Idle);
    }
}
