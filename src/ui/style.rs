//! Colours and widget styles shared by the list and detail screens

use iced::widget::{button, container};
use iced::{Background, Border, Color, Theme};

/// Age line on a card (#155C78)
pub const AGE: Color = rgb(0.082, 0.361, 0.471);

/// Breed line on a card
pub const BREED: Color = rgb(0.643, 0.208, 0.961);

/// Action buttons and the top bar (#6627E6)
pub const ACCENT: Color = rgb(0.4, 0.153, 0.902);

/// Section titles and the divider on the detail screen (#6600FF)
pub const TITLE: Color = rgb(0.4, 0.0, 1.0);

/// Body text on the detail screen
pub const INFO: Color = rgb(0.5, 0.5, 0.5);

/// Error banner text
pub const ERROR: Color = rgb(0.75, 0.1, 0.1);

const fn rgb(r: f32, g: f32, b: f32) -> Color {
    Color { r, g, b, a: 1.0 }
}

/// Filled accent button with white text
pub fn action_button(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => Color {
            a: 0.85,
            ..ACCENT
        },
        button::Status::Disabled => Color { a: 0.4, ..ACCENT },
        button::Status::Active => ACCENT,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: Color::WHITE,
        border: Border::default().rounded(5.0),
        ..button::Style::default()
    }
}

/// Flat button used for "Back" in the top bar
pub fn bar_button(_theme: &Theme, status: button::Status) -> button::Style {
    let text_color = match status {
        button::Status::Hovered | button::Status::Pressed => Color { a: 0.8, ..Color::WHITE },
        _ => Color::WHITE,
    };

    button::Style {
        background: None,
        text_color,
        ..button::Style::default()
    }
}

/// Top app bar background
pub fn top_bar(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(ACCENT)),
        text_color: Some(Color::WHITE),
        ..container::Style::default()
    }
}

/// Elevated card surface
pub fn card(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.base.color)),
        border: Border {
            color: palette.background.strong.color,
            width: 1.0,
            radius: 8.0.into(),
        },
        shadow: iced::Shadow {
            color: Color { a: 0.2, ..Color::BLACK },
            offset: iced::Vector::new(0.0, 2.0),
            blur_radius: 8.0,
        },
        ..container::Style::default()
    }
}

/// Box shown where a picture is loading or missing
pub fn picture_placeholder(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.weak.color)),
        text_color: Some(INFO),
        border: Border::default().rounded(8.0),
        ..container::Style::default()
    }
}
