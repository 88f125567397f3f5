use iced::widget::{button, container, pick_list, text_editor, text_input};
use iced::{Background, Border, Color, Theme};

use crate::http::method::HttpMethod;
use crate::testing::TestResult;

const fn rgb(r: u8, g: u8, b: u8) -> Color {
    Color {
        r: r as f32 / 255.0,
        g: g as f32 / 255.0,
        b: b as f32 / 255.0,
        a: 1.0,
    }
}

pub const BG: Color = rgb(18, 21, 27);
pub const SURFACE_0: Color = rgb(20, 24, 32);
pub const SURFACE_1: Color = rgb(25, 30, 38);
pub const SURFACE_2: Color = rgb(31, 37, 46);
pub const SURFACE_3: Color = rgb(37, 45, 56);
pub const BORDER: Color = rgb(48, 58, 70);
pub const TEXT: Color = rgb(230, 236, 244);
pub const TEXT_MUTED: Color = rgb(132, 145, 160);
pub const PRIMARY: Color = rgb(58, 201, 111);
pub const PRIMARY_HOVER: Color = rgb(71, 214, 124);
pub const DANGER: Color = rgb(226, 92, 92);
pub const ACCENT: Color = rgb(82, 167, 244);

const SELECTION: Color = Color {
    r: 0.23,
    g: 0.79,
    b: 0.44,
    a: 0.35,
};

pub fn method_color(method: Option<HttpMethod>) -> Color {
    match method {
        Some(HttpMethod::Get | HttpMethod::Head) => rgb(73, 204, 144),
        Some(HttpMethod::Post) => rgb(255, 176, 59),
        Some(HttpMethod::Put) => ACCENT,
        Some(HttpMethod::Patch) => rgb(180, 130, 240),
        Some(HttpMethod::Delete) => rgb(240, 92, 92),
        Some(HttpMethod::Options) => rgb(233, 120, 180),
        None => TEXT_MUTED,
    }
}

pub fn result_color(result: Option<TestResult>) -> Color {
    match result {
        Some(TestResult::Success) => PRIMARY,
        Some(TestResult::Failure) => DANGER,
        None => BORDER,
    }
}

pub fn app_theme() -> Theme {
    Theme::custom(
        "API Test Creator".to_string(),
        iced::theme::Palette {
            background: BG,
            text: TEXT,
            primary: PRIMARY,
            success: PRIMARY,
            danger: DANGER,
        },
    )
}

pub fn surface_style(color: Color, border_radius: f32) -> container::Style {
    container::Style::default()
        .background(Background::Color(color))
        .color(TEXT)
        .border(Border {
            radius: border_radius.into(),
            width: 1.0,
            color: BORDER,
        })
}

pub fn flat_surface_style(color: Color) -> container::Style {
    container::Style::default()
        .background(Background::Color(color))
        .color(TEXT)
}

/// Test card outlined in the colour of its last result.
pub fn card_style(result: Option<TestResult>) -> container::Style {
    container::Style::default()
        .background(Background::Color(SURFACE_1))
        .color(TEXT)
        .border(Border {
            radius: 8.0.into(),
            width: if result.is_some() { 2.0 } else { 1.0 },
            color: result_color(result),
        })
}

fn filled_button(background: Color, text_color: Color, border: Color, radius: f32) -> button::Style {
    button::Style {
        background: Some(Background::Color(background)),
        text_color,
        border: Border {
            radius: radius.into(),
            width: 1.0,
            color: border,
        },
        shadow: Default::default(),
    }
}

pub fn primary_button(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active | button::Status::Pressed => filled_button(PRIMARY, BG, PRIMARY, 8.0),
        button::Status::Hovered => filled_button(PRIMARY_HOVER, BG, PRIMARY_HOVER, 8.0),
        button::Status::Disabled => filled_button(SURFACE_3, TEXT_MUTED, SURFACE_3, 8.0),
    }
}

pub fn subtle_button(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active => filled_button(SURFACE_2, TEXT, BORDER, 8.0),
        button::Status::Hovered | button::Status::Pressed => filled_button(SURFACE_3, TEXT, BORDER, 8.0),
        button::Status::Disabled => filled_button(SURFACE_1, TEXT_MUTED, BORDER, 8.0),
    }
}

pub fn input_style(_theme: &Theme, status: text_input::Status) -> text_input::Style {
    let base = text_input::Style {
        background: Background::Color(SURFACE_1),
        border: Border {
            radius: 8.0.into(),
            width: 1.0,
            color: BORDER,
        },
        icon: TEXT_MUTED,
        placeholder: TEXT_MUTED,
        value: TEXT,
        selection: SELECTION,
    };

    match status {
        text_input::Status::Active => base,
        text_input::Status::Hovered => text_input::Style {
            border: Border {
                color: SURFACE_3,
                ..base.border
            },
            ..base
        },
        text_input::Status::Focused => text_input::Style {
            border: Border {
                color: PRIMARY,
                ..base.border
            },
            ..base
        },
        text_input::Status::Disabled => text_input::Style {
            value: TEXT_MUTED,
            ..base
        },
    }
}

pub fn editor_style(_theme: &Theme, status: text_editor::Status) -> text_editor::Style {
    let border_color = match status {
        text_editor::Status::Focused => PRIMARY,
        text_editor::Status::Hovered => SURFACE_3,
        text_editor::Status::Active | text_editor::Status::Disabled => BORDER,
    };

    text_editor::Style {
        background: Background::Color(SURFACE_1),
        border: Border {
            radius: 8.0.into(),
            width: 1.0,
            color: border_color,
        },
        icon: TEXT_MUTED,
        placeholder: TEXT_MUTED,
        value: if matches!(status, text_editor::Status::Disabled) {
            TEXT_MUTED
        } else {
            TEXT
        },
        selection: SELECTION,
    }
}

pub fn pick_list_style(_theme: &Theme, status: pick_list::Status) -> pick_list::Style {
    pick_list::Style {
        text_color: TEXT,
        background: Background::Color(SURFACE_1),
        placeholder_color: TEXT_MUTED,
        handle_color: TEXT_MUTED,
        border: Border {
            radius: 8.0.into(),
            width: 1.0,
            color: match status {
                pick_list::Status::Active => BORDER,
                pick_list::Status::Hovered | pick_list::Status::Opened => PRIMARY,
            },
        },
    }
}
