/// User interface module
///
/// - list.rs: catalog grid and pet cards
/// - detail.rs: pet detail screen
/// - style.rs: colours and widget styles
///
/// Widgets shared by both screens live here.

pub mod detail;
pub mod list;
pub mod style;

use iced::widget::{button, container, image, row, text, Space};
use iced::{Alignment, Element, Length};

use crate::pictures::{PictureBoard, PictureState};
use crate::Message;

/// Height of the top app bar
const TOP_BAR_HEIGHT: f32 = 56.0;

/// Top app bar with a bold title and an optional back button
pub fn top_bar<'a>(title: &str, back: Option<Message>) -> Element<'a, Message> {
    let back_button: Element<'a, Message> = match back {
        Some(message) => button(text("←  Back").size(16))
            .on_press(message)
            .style(style::bar_button)
            .padding([6, 12])
            .into(),
        None => Space::with_width(Length::Fixed(16.0)).into(),
    };

    let bar = row![
        back_button,
        text(title.to_string())
            .size(18)
            .font(iced::Font {
                weight: iced::font::Weight::Bold,
                ..iced::Font::DEFAULT
            }),
    ]
    .spacing(8)
    .align_y(Alignment::Center);

    container(bar)
        .width(Length::Fill)
        .height(Length::Fixed(TOP_BAR_HEIGHT))
        .center_y(Length::Fixed(TOP_BAR_HEIGHT))
        .style(style::top_bar)
        .into()
}

/// A pet picture, or a placeholder box while it loads (or if it never will)
pub fn picture<'a>(
    url: Option<&str>,
    pictures: &PictureBoard,
    height: f32,
) -> Element<'a, Message> {
    let state = url.and_then(|url| pictures.state(url));

    let label = match state {
        Some(PictureState::Ready(path)) => {
            return image(image::Handle::from_path(path))
                .width(Length::Fill)
                .height(Length::Fixed(height))
                .into();
        }
        Some(PictureState::Loading) => "Loading…".to_string(),
        Some(PictureState::Failed(reason)) => format!("Picture unavailable\n{}", reason),
        None => "No picture".to_string(),
    };

    container(text(label).size(12).align_x(iced::alignment::Horizontal::Center))
        .width(Length::Fill)
        .height(Length::Fixed(height))
        .center_x(Length::Fill)
        .center_y(Length::Fixed(height))
        .style(style::picture_placeholder)
        .into()
}
