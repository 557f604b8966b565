use std::{
    sync::{Arc, Mutex, MutexGuard, PoisonError},
    time::Duration,
};

use async_trait::async_trait;
use futures::future::join_all;
use tracing::{debug, info};

use crate::{
    form::{Credentials, Field},
    http::{AuthError, LoginResponse},
    login::{Effect, LoginForm},
    notification::{CloseReason, NotificationKind},
};

/// The remote authentication service.
#[async_trait]
pub trait AuthClient: Send + Sync {
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, AuthError>;
}

/// Moves the user to a named destination.
pub trait Navigator: Send + Sync {
    fn go(&self, route: &str);
}

/// Source of delays, so that tests can control the clock.
#[async_trait]
pub trait Timer: Send + Sync {
    async fn sleep(&self, duration: Duration);
}

#[async_trait]
impl<T: AuthClient + ?Sized> AuthClient for Arc<T> {
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, AuthError> {
        (**self).login(credentials).await
    }
}

impl<T: Navigator + ?Sized> Navigator for Arc<T> {
    fn go(&self, route: &str) {
        (**self).go(route)
    }
}

#[async_trait]
impl<T: Timer + ?Sized> Timer for Arc<T> {
    async fn sleep(&self, duration: Duration) {
        (**self).sleep(duration).await
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TokioTimer;

#[async_trait]
impl Timer for TokioTimer {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Some fields are invalid, nothing was sent.
    Invalid,
    /// Another submission is in progress, nothing was sent.
    Busy,
    Succeeded,
    Failed,
}

/// Drives a [`LoginForm`] against its collaborators: the authentication service, the navigator
/// and the timer.
pub struct Controller<A, N, T> {
    state: Mutex<LoginForm>,
    auth: A,
    navigator: N,
    timer: T,
}

impl<A: AuthClient, N: Navigator, T: Timer> Controller<A, N, T> {
    pub fn new(auth: A, navigator: N, timer: T) -> Self {
        Self {
            state: Mutex::new(LoginForm::new()),
            auth,
            navigator,
            timer,
        }
    }

    // The form is never left half-updated, a poisoned lock is still usable.
    fn state(&self) -> MutexGuard<'_, LoginForm> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn snapshot(&self) -> LoginForm {
        self.state().clone()
    }

    pub fn change(&self, field: Field, value: String) {
        self.state().on_change(field, value);
    }

    pub fn close(&self, kind: NotificationKind, reason: CloseReason) -> bool {
        self.state().close(kind, reason)
    }

    /// Validate and submit the form. Once the service answered, the notification timers and
    /// the navigation run concurrently and this returns after the last of them fired.
    pub async fn submit(&self) -> Outcome {
        let credentials = match self.begin() {
            Ok(credentials) => credentials,
            Err(outcome) => return outcome,
        };

        let result = self.auth.login(&credentials).await;
        let outcome = match &result {
            Ok(res) if res.success => Outcome::Succeeded,
            _ => Outcome::Failed,
        };

        let effects = self.state().on_login_result(result);
        join_all(effects.into_iter().map(|effect| self.run(effect))).await;
        outcome
    }

    fn begin(&self) -> Result<Credentials, Outcome> {
        let mut state = self.state();
        if !state.can_submit() {
            debug!("Submit ignored, a login is in progress");
            return Err(Outcome::Busy);
        }
        match state.submit() {
            Some(Effect::Login(credentials)) => Ok(credentials),
            _ => Err(Outcome::Invalid),
        }
    }

    async fn run(&self, effect: Effect) {
        match effect {
            Effect::Dismiss { kind, after } => {
                self.timer.sleep(after).await;
                if self.close(kind, CloseReason::Timeout) {
                    debug!("{:?} notification dismissed", kind);
                }
            }
            Effect::Navigate { route, after } => {
                self.timer.sleep(after).await;
                if self.state().on_navigated() {
                    info!("Navigating to {}", route);
                    self.navigator.go(route);
                }
            }
            Effect::Login(_) => {
                debug!("Unexpected login effect after a login result");
            }
        }
    }
}
