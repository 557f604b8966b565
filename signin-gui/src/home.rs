use iced::Length;

use signin_ui::{
    component::{button, card, text},
    theme,
    widget::*,
};

#[derive(Debug, Clone)]
pub enum Message {
    Logout,
}

/// Landing page once signed in.
pub fn view(email: &str) -> Element<Message> {
    Container::new(card(
        Column::new()
            .spacing(20)
            .push(text::h2("Welcome"))
            .push(
                text::p1_regular(format!("Signed in as {}", email)).style(theme::text::secondary),
            )
            .push(
                button::transparent(None, "Log out")
                    .width(Length::Fill)
                    .on_press(Message::Logout),
            ),
    ))
    .center_x(Length::Fill)
    .center_y(Length::Fill)
    .into()
}
