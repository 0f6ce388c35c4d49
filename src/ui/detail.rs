//! Pet detail screen

use iced::widget::{button, column, container, horizontal_rule, rule, scrollable, text};
use iced::{Element, Font, Length};

use super::{picture, style, top_bar};
use crate::pictures::PictureBoard;
use crate::state::data::Pet;
use crate::Message;

/// Height of the picture on the detail screen
const DETAIL_PICTURE_HEIGHT: f32 = 300.0;

/// Everything the detail screen shows, as display text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailContent {
    /// Top bar title (the breed)
    pub title: String,
    pub name: String,
    pub age: String,
    pub picture_url: Option<String>,
    /// Owner and address on separate lines
    pub address_block: String,
    pub about: String,
}

impl From<&Pet> for DetailContent {
    fn from(pet: &Pet) -> Self {
        Self {
            title: pet.breed().to_string(),
            name: pet.name().to_string(),
            age: pet.age().to_string(),
            picture_url: pet.picture().map(str::to_string),
            address_block: format!("{}\n{}", pet.owner(), pet.address()),
            about: pet.about().to_string(),
        }
    }
}

/// Build the detail screen for the selected pet
pub fn view<'a>(pet: &Pet, pictures: &PictureBoard) -> Element<'a, Message> {
    let content = DetailContent::from(pet);

    let body = column![
        section_title(content.name),
        info(content.age),
        picture(content.picture_url.as_deref(), pictures, DETAIL_PICTURE_HEIGHT),
        section_title("Address".to_string()),
        info(content.address_block),
        horizontal_rule(1).style(|theme| rule::Style {
            color: style::TITLE,
            ..rule::default(theme)
        }),
        section_title("About".to_string()),
        info(content.about),
        container(
            button(
                text("Confirm Adoption")
                    .size(14)
                    .width(Length::Fill)
                    .align_x(iced::alignment::Horizontal::Center),
            )
            .on_press(Message::ConfirmAdoption)
            .style(style::action_button)
            .width(Length::Fill)
            .height(Length::Fixed(40.0)),
        )
        .padding([16, 24]),
    ]
    .spacing(8)
    .padding(16);

    column![
        top_bar(&content.title, Some(Message::Back)),
        scrollable(body).height(Length::Fill),
    ]
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}

fn section_title<'a>(label: String) -> Element<'a, Message> {
    text(label)
        .size(16)
        .color(style::TITLE)
        .font(Font {
            weight: iced::font::Weight::Semibold,
            ..Font::DEFAULT
        })
        .into()
}

fn info<'a>(body: String) -> Element<'a, Message> {
    text(body).size(14).color(style::INFO).into()
}
