use iced::{widget::Space, Alignment, Length};

use crate::{
    component::{button, text},
    theme,
    widget::*,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

/// A banner with a message and a close button.
pub fn toast<'a, T: 'a + Clone>(severity: Severity, message: &'a str, on_close: T) -> Container<'a, T> {
    let style = match severity {
        Severity::Success => theme::notification::success,
        Severity::Error => theme::notification::error,
    };
    Container::new(
        Row::new()
            .align_y(Alignment::Center)
            .spacing(10)
            .push(text::p1_medium(message).width(Length::Fill))
            .push(Space::with_width(Length::Fixed(5.0)))
            .push(button::transparent(None, "×").on_press(on_close)),
    )
    .padding([10, 15])
    .width(Length::Fixed(360.0))
    .style(style)
}
