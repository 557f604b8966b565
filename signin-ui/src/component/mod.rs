pub mod button;
pub mod form;
pub mod notification;
pub mod text;

use iced::Length;

use crate::{theme, widget::*};

/// Bordered box holding a page's main content.
pub fn card<'a, T: 'a>(content: impl Into<Element<'a, T>>) -> Container<'a, T> {
    Container::new(content)
        .padding(30)
        .width(Length::Fixed(450.0))
        .style(theme::card::simple)
}
