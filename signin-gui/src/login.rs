use std::sync::Arc;

use iced::{
    alignment::{Horizontal, Vertical},
    Length, Task,
};
use tracing::debug;

use signin::{
    AuthClient, AuthError, CloseReason, Effect, Field, LoginForm, LoginResponse, NotificationKind,
    Submission, Timer,
};
use signin_ui::{
    component::{
        button, card,
        form::Form,
        notification::{toast, Severity},
        text,
    },
    widget::*,
};

#[derive(Debug, Clone)]
pub enum Message {
    EmailEdited(String),
    PasswordEdited(String),
    Submit,
    LoginResult(Result<LoginResponse, AuthError>),
    CloseNotification(NotificationKind, CloseReason),
    /// Emitted once the navigation delay elapsed, handled by the router.
    Navigate(&'static str),
}

pub struct LoginPage {
    form: LoginForm,
    auth: Arc<dyn AuthClient>,
    timer: Arc<dyn Timer>,
}

impl LoginPage {
    pub fn new(auth: Arc<dyn AuthClient>, timer: Arc<dyn Timer>) -> Self {
        Self {
            form: LoginForm::new(),
            auth,
            timer,
        }
    }

    pub fn form(&self) -> &LoginForm {
        &self.form
    }

    pub fn reset(&mut self) {
        self.form.reset();
    }

    /// Returns false if the page no longer waits for a navigation.
    pub fn navigated(&mut self) -> bool {
        self.form.on_navigated()
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::EmailEdited(value) => {
                self.form.on_change(Field::Email, value);
                Task::none()
            }
            Message::PasswordEdited(value) => {
                self.form.on_change(Field::Password, value);
                Task::none()
            }
            Message::Submit => match self.form.submit() {
                Some(effect) => self.run(effect),
                None => Task::none(),
            },
            Message::LoginResult(res) => {
                let effects = self.form.on_login_result(res);
                Task::batch(effects.into_iter().map(|effect| self.run(effect)))
            }
            Message::CloseNotification(kind, reason) => {
                if !self.form.close(kind, reason) {
                    debug!("{:?} notification already closed ({:?})", kind, reason);
                }
                Task::none()
            }
            Message::Navigate(_) => Task::none(),
        }
    }

    fn run(&self, effect: Effect) -> Task<Message> {
        match effect {
            Effect::Login(credentials) => {
                let auth = self.auth.clone();
                Task::perform(
                    async move { auth.login(&credentials).await },
                    Message::LoginResult,
                )
            }
            Effect::Dismiss { kind, after } => {
                let timer = self.timer.clone();
                Task::perform(async move { timer.sleep(after).await }, move |_| {
                    Message::CloseNotification(kind, CloseReason::Timeout)
                })
            }
            Effect::Navigate { route, after } => {
                let timer = self.timer.clone();
                Task::perform(async move { timer.sleep(after).await }, move |_| {
                    Message::Navigate(route)
                })
            }
        }
    }

    pub fn view(&self) -> Element<Message> {
        Stack::new()
            .push(
                Container::new(login_card(&self.form))
                    .center_x(Length::Fill)
                    .center_y(Length::Fill),
            )
            .push(notifications(&self.form))
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

fn login_card(login: &LoginForm) -> Container<Message> {
    let submitting = login.is_busy();
    let form = login.form();
    let validation = login.validation();

    let email = if submitting {
        Form::new_disabled("your@email.com", &form.email)
    } else {
        Form::new("your@email.com", &form.email, Message::EmailEdited).on_submit(Message::Submit)
    };
    let password = if submitting {
        Form::new_disabled("••••••", &form.password)
    } else {
        Form::new("••••••", &form.password, Message::PasswordEdited).on_submit(Message::Submit)
    };

    card(
        Column::new()
            .spacing(20)
            .push(text::h2("Login"))
            .push(
                Column::new()
                    .spacing(5)
                    .push(text::p1_bold("Email"))
                    .push(
                        email
                            .maybe_warning(validation.email.warning())
                            .size(text::P1_SIZE)
                            .padding(10),
                    ),
            )
            .push(
                Column::new()
                    .spacing(5)
                    .push(text::p1_bold("Password"))
                    .push(
                        password
                            .secure(true)
                            .maybe_warning(validation.password.warning())
                            .size(text::P1_SIZE)
                            .padding(10),
                    ),
            )
            .push(
                button::primary(None, if submitting { "Logging in..." } else { "Login" })
                    .width(Length::Fill)
                    .on_press_maybe(login.can_submit().then_some(Message::Submit)),
            ),
    )
}

fn notifications(login: &LoginForm) -> Container<Message> {
    let banners = login.notifications();
    Container::new(
        Column::new()
            .spacing(10)
            .push_maybe(banners.success.visible.then(|| {
                toast(
                    Severity::Success,
                    &banners.success.message,
                    Message::CloseNotification(NotificationKind::Success, CloseReason::Explicit),
                )
            }))
            .push_maybe(banners.failure.visible.then(|| {
                toast(
                    Severity::Error,
                    &banners.failure.message,
                    Message::CloseNotification(NotificationKind::Failure, CloseReason::Explicit),
                )
            })),
    )
    .align_x(Horizontal::Right)
    .align_y(Vertical::Top)
    .width(Length::Fill)
    .height(Length::Fill)
    .padding(20)
}
