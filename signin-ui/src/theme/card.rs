use iced::widget::container::Style;
use iced::{Background, Border, Color};

use super::Theme;

pub fn simple(theme: &Theme) -> Style {
    let palette = &theme.colors.cards.simple;
    Style {
        background: Some(Background::Color(palette.background)),
        text_color: palette.text,
        border: Border {
            radius: 12.0.into(),
            width: if palette.border.is_some() { 1.0 } else { 0.0 },
            color: palette.border.unwrap_or(Color::TRANSPARENT),
        },
        ..Default::default()
    }
}
