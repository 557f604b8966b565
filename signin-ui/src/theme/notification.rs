use iced::widget::container::Style;
use iced::{Background, Border, Color};

use super::palette::ContainerPalette;
use super::Theme;

fn notification(palette: &ContainerPalette) -> Style {
    Style {
        background: Some(Background::Color(palette.background)),
        text_color: palette.text,
        border: Border {
            radius: 8.0.into(),
            width: if palette.border.is_some() { 1.0 } else { 0.0 },
            color: palette.border.unwrap_or(Color::TRANSPARENT),
        },
        ..Default::default()
    }
}

pub fn success(theme: &Theme) -> Style {
    notification(&theme.colors.notifications.success)
}

pub fn error(theme: &Theme) -> Style {
    notification(&theme.colors.notifications.error)
}
