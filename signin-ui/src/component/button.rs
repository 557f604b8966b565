use super::text::{text, MEDIUM};
use crate::{theme, widget::*};
use iced::alignment::Vertical;
use iced::widget::{container, row};
use iced::Length;

pub fn primary<'a, T: 'a>(icon: Option<Text<'a>>, t: &'static str) -> Button<'a, T> {
    Button::new(content(
        icon,
        text(t)
            .font(MEDIUM)
            .align_y(iced::Alignment::Center)
            .align_x(iced::Alignment::Center),
    ))
    .style(theme::button::primary)
}

pub fn transparent<'a, T: 'a>(icon: Option<Text<'a>>, t: &'static str) -> Button<'a, T> {
    Button::new(content(
        icon,
        text(t)
            .align_y(iced::Alignment::Center)
            .align_x(iced::Alignment::Center),
    ))
    .style(theme::button::transparent)
}

fn content<'a, T: 'a>(icon: Option<Text<'a>>, text: Text<'a>) -> Container<'a, T> {
    match icon {
        None => container(text).center_x(Length::Fill).padding(5),
        Some(i) => container(row![i, text].spacing(10).align_y(Vertical::Center))
            .center_x(Length::Fill)
            .padding(5),
    }
}
