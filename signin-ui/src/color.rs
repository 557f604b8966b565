use iced::Color;
pub const TRANSPARENT: Color = iced::Color::TRANSPARENT;
pub const INK: Color = Color::from_rgb(
    0x0F as f32 / 255.0,
    0x17 as f32 / 255.0,
    0x2A as f32 / 255.0,
);
pub const SLATE_800: Color = Color::from_rgb(
    0x1E as f32 / 255.0,
    0x29 as f32 / 255.0,
    0x3B as f32 / 255.0,
);
pub const SLATE_700: Color = Color::from_rgb(
    0x33 as f32 / 255.0,
    0x41 as f32 / 255.0,
    0x55 as f32 / 255.0,
);
pub const SLATE_500: Color = Color::from_rgb(
    0x64 as f32 / 255.0,
    0x74 as f32 / 255.0,
    0x8B as f32 / 255.0,
);
pub const SLATE_400: Color = Color::from_rgb(
    0x94 as f32 / 255.0,
    0xA3 as f32 / 255.0,
    0xB8 as f32 / 255.0,
);
pub const SLATE_200: Color = Color::from_rgb(
    0xE2 as f32 / 255.0,
    0xE8 as f32 / 255.0,
    0xF0 as f32 / 255.0,
);
pub const WHITE: Color = iced::Color::WHITE;
pub const INDIGO: Color = Color::from_rgb(
    0x63 as f32 / 255.0,
    0x66 as f32 / 255.0,
    0xF1 as f32 / 255.0,
);
pub const INDIGO_DARK: Color = Color::from_rgb(
    0x4F as f32 / 255.0,
    0x46 as f32 / 255.0,
    0xE5 as f32 / 255.0,
);
pub const EMERALD: Color = Color::from_rgb(
    0x10 as f32 / 255.0,
    0xB9 as f32 / 255.0,
    0x81 as f32 / 255.0,
);
pub const EMERALD_DARK: Color = Color::from_rgb(
    0x06 as f32 / 255.0,
    0x5F as f32 / 255.0,
    0x46 as f32 / 255.0,
);
pub const ROSE: Color = Color::from_rgb(
    0xF4 as f32 / 255.0,
    0x3F as f32 / 255.0,
    0x5E as f32 / 255.0,
);
pub const ROSE_DARK: Color = Color::from_rgb(
    0x9F as f32 / 255.0,
    0x12 as f32 / 255.0,
    0x39 as f32 / 255.0,
);
