use std::sync::Arc;

use iced::{
    event::{self, Event},
    keyboard,
    widget::{focus_next, focus_previous},
    Subscription, Task,
};
use tracing::{error, info, warn};
use tracing_subscriber::filter::LevelFilter;

use signin::{HttpAuthClient, TokioTimer, LANDING_ROUTE};
use signin_ui::widget::Element;

use crate::{
    config::{auth_api_url, Config, Settings},
    home, login,
    logger::setup_logger,
    VERSION,
};

/// Pages of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    Home,
}

impl Route {
    pub fn from_path(path: &str) -> Option<Route> {
        match path {
            LANDING_ROUTE => Some(Route::Home),
            "/login" => Some(Route::Login),
            _ => None,
        }
    }
}

pub struct GUI {
    route: Route,
    login: login::LoginPage,
    /// Email of the signed in user.
    signed_in: Option<String>,
}

#[derive(Debug, Clone)]
pub enum Message {
    CtrlC,
    KeyPressed(Key),
    Login(login::Message),
    Home(home::Message),
}

#[derive(Debug, Clone)]
pub enum Key {
    Tab(bool),
}

async fn ctrl_c() -> Result<(), ()> {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("{}", e);
    };
    info!("Signal received, exiting");
    Ok(())
}

impl GUI {
    pub fn title(&self) -> String {
        format!("Sign in v{}", VERSION)
    }

    pub fn new((config, log_level): (Config, Option<LevelFilter>)) -> (GUI, Task<Message>) {
        if let Err(e) = config.signin_directory.init() {
            eprintln!("Failed to create data directory: {}", e);
        }

        let settings = Settings::from_file(&config.signin_directory.settings_path());
        let file_level = settings.as_ref().map(|s| s.log_level());
        let log_level = log_level
            .or(match &file_level {
                Ok(Ok(level)) => *level,
                _ => None,
            })
            .unwrap_or(LevelFilter::INFO);
        if let Err(e) = setup_logger(log_level, &config.signin_directory) {
            eprintln!("Error while setting up the logger: {}", e);
        }

        if let Ok(Err(e)) = &file_level {
            warn!("{}, ignoring the log_level setting", e);
        }
        let settings = settings.unwrap_or_else(|e| {
            warn!("{}, using default settings", e);
            Settings::default()
        });
        let url = auth_api_url(&config, &settings);
        info!("Using authentication service at {}", url);

        (
            Self::with_page(login::LoginPage::new(
                Arc::new(HttpAuthClient::new(url)),
                Arc::new(TokioTimer),
            )),
            Task::perform(ctrl_c(), |_| Message::CtrlC),
        )
    }

    fn with_page(login: login::LoginPage) -> Self {
        Self {
            route: Route::Login,
            login,
            signed_in: None,
        }
    }

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::CtrlC => iced::exit(),
            Message::KeyPressed(Key::Tab(shift)) => {
                if shift {
                    focus_previous()
                } else {
                    focus_next()
                }
            }
            Message::Login(login::Message::Navigate(path)) => {
                if !self.login.navigated() {
                    warn!("Dropping navigation to {}, no login pending", path);
                    return Task::none();
                }
                match Route::from_path(path) {
                    Some(Route::Home) => {
                        self.signed_in = Some(self.login.form().form().email.clone());
                        // The page is left, its state is not kept.
                        self.login.reset();
                        self.route = Route::Home;
                    }
                    Some(route) => self.route = route,
                    None => error!("Unknown route {}", path),
                }
                Task::none()
            }
            Message::Login(msg) => self.login.update(msg).map(Message::Login),
            Message::Home(home::Message::Logout) => {
                info!("Logged out");
                self.signed_in = None;
                self.login.reset();
                self.route = Route::Login;
                Task::none()
            }
        }
    }

    pub fn subscription(&self) -> Subscription<Message> {
        iced::event::listen_with(|event, status, _| match (&event, status) {
            (
                Event::Keyboard(keyboard::Event::KeyPressed {
                    key: keyboard::Key::Named(keyboard::key::Named::Tab),
                    modifiers,
                    ..
                }),
                event::Status::Ignored,
            ) => Some(Message::KeyPressed(Key::Tab(modifiers.shift()))),
            _ => None,
        })
    }

    pub fn view(&self) -> Element<Message> {
        match (self.route, &self.signed_in) {
            (Route::Home, Some(email)) => home::view(email).map(Message::Home),
            _ => self.login.view().map(Message::Login),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use signin::{AuthClient, AuthError, Credentials, LoginResponse};

    struct Accept;

    #[async_trait]
    impl AuthClient for Accept {
        async fn login(&self, _credentials: &Credentials) -> Result<LoginResponse, AuthError> {
            Ok(LoginResponse::success())
        }
    }

    fn gui() -> GUI {
        GUI::with_page(login::LoginPage::new(Arc::new(Accept), Arc::new(TokioTimer)))
    }

    #[test]
    fn routes() {
        assert_eq!(Route::from_path("/"), Some(Route::Home));
        assert_eq!(Route::from_path("/login"), Some(Route::Login));
        assert_eq!(Route::from_path("/signup"), None);
    }

    #[test]
    fn navigate_home_then_logout() {
        let mut gui = gui();
        let _ = gui.update(Message::Login(login::Message::EmailEdited(
            "a@b.co".to_string(),
        )));
        let _ = gui.update(Message::Login(login::Message::PasswordEdited(
            "secret1".to_string(),
        )));
        let _ = gui.update(Message::Login(login::Message::Submit));
        let _ = gui.update(Message::Login(login::Message::LoginResult(Ok(
            LoginResponse::success(),
        ))));
        assert_eq!(gui.route(), Route::Login);

        let _ = gui.update(Message::Login(login::Message::Navigate("/")));
        assert_eq!(gui.route(), Route::Home);
        assert_eq!(gui.signed_in.as_deref(), Some("a@b.co"));
        assert_eq!(gui.login.form().form().email, "");

        let _ = gui.update(Message::Home(home::Message::Logout));
        assert_eq!(gui.route(), Route::Login);
        assert_eq!(gui.signed_in, None);

        // A late navigation does not sign the user back in.
        let _ = gui.update(Message::Login(login::Message::Navigate("/")));
        assert_eq!(gui.route(), Route::Login);
        assert_eq!(gui.signed_in, None);
    }

    #[test]
    fn navigation_without_login_is_ignored() {
        let mut gui = gui();
        let _ = gui.update(Message::Login(login::Message::Navigate("/")));
        assert_eq!(gui.route(), Route::Login);
        assert_eq!(gui.signed_in, None);
    }
}
