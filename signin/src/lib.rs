pub mod controller;
pub mod form;
pub mod http;
pub mod login;
pub mod notification;
pub mod validation;

pub use controller::{AuthClient, Controller, Navigator, Outcome, Timer, TokioTimer};
pub use form::{Credentials, Field, FormState};
pub use http::{AuthError, HttpAuthClient, LoginResponse};
pub use login::{Effect, LoginForm, Submission, LANDING_ROUTE, NAVIGATION_DELAY};
pub use notification::{CloseReason, Notification, NotificationKind, Notifications};
pub use validation::{validate, FieldValidation, Validation};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

pub const VERSION: Version = Version {
    major: 0,
    minor: 1,
    patch: 0,
};
