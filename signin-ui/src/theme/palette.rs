use crate::color;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Palette {
    pub general: General,
    pub text: Text,
    pub buttons: Buttons,
    pub cards: Cards,
    pub notifications: Notifications,
    pub text_inputs: TextInputs,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Text {
    pub primary: iced::Color,
    pub secondary: iced::Color,
    pub error: iced::Color,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct General {
    pub background: iced::Color,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Buttons {
    pub primary: Button,
    pub transparent: Button,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Button {
    pub active: ButtonPalette,
    pub hovered: ButtonPalette,
    pub pressed: Option<ButtonPalette>,
    pub disabled: Option<ButtonPalette>,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ButtonPalette {
    pub background: iced::Color,
    pub text: iced::Color,
    pub border: Option<iced::Color>,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ContainerPalette {
    pub background: iced::Color,
    pub text: Option<iced::Color>,
    pub border: Option<iced::Color>,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Cards {
    pub simple: ContainerPalette,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Notifications {
    pub success: ContainerPalette,
    pub error: ContainerPalette,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextInputs {
    pub primary: TextInput,
    pub invalid: TextInput,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextInput {
    pub active: TextInputPalette,
    pub disabled: TextInputPalette,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextInputPalette {
    pub background: iced::Color,
    pub icon: iced::Color,
    pub placeholder: iced::Color,
    pub value: iced::Color,
    pub selection: iced::Color,
    pub border: Option<iced::Color>,
}

impl std::default::Default for Palette {
    fn default() -> Self {
        Self {
            general: General {
                background: color::INK,
            },
            text: Text {
                primary: color::SLATE_200,
                secondary: color::SLATE_400,
                error: color::ROSE,
            },
            buttons: Buttons {
                primary: Button {
                    active: ButtonPalette {
                        background: color::INDIGO,
                        text: color::WHITE,
                        border: None,
                    },
                    hovered: ButtonPalette {
                        background: color::INDIGO_DARK,
                        text: color::WHITE,
                        border: None,
                    },
                    pressed: Some(ButtonPalette {
                        background: color::INDIGO_DARK,
                        text: color::SLATE_200,
                        border: None,
                    }),
                    disabled: Some(ButtonPalette {
                        background: color::SLATE_700,
                        text: color::SLATE_400,
                        border: None,
                    }),
                },
                transparent: Button {
                    active: ButtonPalette {
                        background: color::TRANSPARENT,
                        text: color::SLATE_200,
                        border: None,
                    },
                    hovered: ButtonPalette {
                        background: color::TRANSPARENT,
                        text: color::WHITE,
                        border: None,
                    },
                    pressed: None,
                    disabled: None,
                },
            },
            cards: Cards {
                simple: ContainerPalette {
                    background: color::SLATE_800,
                    text: None,
                    border: color::SLATE_700.into(),
                },
            },
            notifications: Notifications {
                success: ContainerPalette {
                    background: color::EMERALD_DARK,
                    text: color::WHITE.into(),
                    border: color::EMERALD.into(),
                },
                error: ContainerPalette {
                    background: color::ROSE_DARK,
                    text: color::WHITE.into(),
                    border: color::ROSE.into(),
                },
            },
            text_inputs: TextInputs {
                primary: TextInput {
                    active: TextInputPalette {
                        background: color::INK,
                        icon: color::SLATE_500,
                        placeholder: color::SLATE_500,
                        value: color::SLATE_200,
                        selection: color::INDIGO,
                        border: Some(color::SLATE_700),
                    },
                    disabled: TextInputPalette {
                        background: color::SLATE_800,
                        icon: color::SLATE_700,
                        placeholder: color::SLATE_700,
                        value: color::SLATE_500,
                        selection: color::INDIGO,
                        border: Some(color::SLATE_700),
                    },
                },
                invalid: TextInput {
                    active: TextInputPalette {
                        background: color::INK,
                        icon: color::SLATE_500,
                        placeholder: color::SLATE_500,
                        value: color::SLATE_200,
                        selection: color::INDIGO,
                        border: Some(color::ROSE),
                    },
                    disabled: TextInputPalette {
                        background: color::SLATE_800,
                        icon: color::SLATE_700,
                        placeholder: color::SLATE_700,
                        value: color::SLATE_500,
                        selection: color::INDIGO,
                        border: Some(color::ROSE),
                    },
                },
            },
        }
    }
}
