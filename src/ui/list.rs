//! Pets Listing screen: the catalog as a fixed-column grid of cards

use iced::widget::{button, column, container, scrollable, text, Column, Row, Space};
use iced::{Alignment, Element, Length};

use super::{picture, style, top_bar};
use crate::pictures::PictureBoard;
use crate::state::catalog::Catalog;
use crate::state::data::Pet;
use crate::Message;

/// Height of the picture on a card
const CARD_PICTURE_HEIGHT: f32 = 140.0;

/// What a single card shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardContent {
    pub picture_url: Option<String>,
    pub age: String,
    pub breed: String,
}

impl From<&Pet> for CardContent {
    fn from(pet: &Pet) -> Self {
        Self {
            picture_url: pet.picture().map(str::to_string),
            age: pet.age().to_string(),
            breed: pet.breed().to_string(),
        }
    }
}

/// Card contents for every pet, in catalog order
pub fn cards(catalog: &Catalog) -> Vec<CardContent> {
    catalog.iter().map(CardContent::from).collect()
}

/// Build the list screen
pub fn view<'a>(
    catalog: &Catalog,
    pictures: &PictureBoard,
    columns: usize,
    error: Option<&str>,
) -> Element<'a, Message> {
    let columns = columns.max(1);

    let mut grid = Column::new().spacing(16).padding(16).width(Length::Fill);

    if let Some(error) = error {
        grid = grid.push(text(format!("Could not load pets: {}", error)).color(style::ERROR));
    } else if catalog.is_empty() {
        grid = grid.push(text("No pets to show.").color(style::INFO));
    }

    let cards = cards(catalog);
    for (row_index, chunk) in cards.chunks(columns).enumerate() {
        let mut grid_row = Row::new().spacing(16).width(Length::Fill);

        for (offset, content) in chunk.iter().enumerate() {
            let index = row_index * columns + offset;
            grid_row = grid_row.push(card(index, content, pictures));
        }

        // Pad the last row so every card keeps the same width
        for _ in chunk.len()..columns {
            grid_row = grid_row.push(Space::with_width(Length::FillPortion(1)));
        }

        grid = grid.push(grid_row);
    }

    column![
        top_bar("Pets Listing", None),
        scrollable(grid).height(Length::Fill),
    ]
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}

/// One pet card: picture, age, breed and the "View Details" action
fn card<'a>(index: usize, content: &CardContent, pictures: &PictureBoard) -> Element<'a, Message> {
    let body = column![
        container(picture(content.picture_url.as_deref(), pictures, CARD_PICTURE_HEIGHT))
            .padding([0, 16]),
        text(content.age.clone()).size(14).color(style::AGE),
        text(content.breed.clone()).size(15).color(style::BREED),
        button(
            text("View Details")
                .size(12)
                .width(Length::Fill)
                .align_x(iced::alignment::Horizontal::Center),
        )
        .on_press(Message::ViewDetails(index))
        .style(style::action_button)
        .width(Length::Fill)
        .height(Length::Fixed(40.0)),
    ]
    .spacing(8)
    .padding(16)
    .align_x(Alignment::Center);

    container(body)
        .width(Length::FillPortion(1))
        .style(style::card)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_card_per_pet() {
        let catalog = Catalog::from_json(
            r#"[
                {"breed": "Beagle", "ageDescription": "2 years old"},
                {"breed": "Pug"},
                {}
            ]"#,
        )
        .unwrap();

        let cards = cards(&catalog);

        assert_eq!(cards.len(), 3);
        assert_eq!(cards[0].breed, "Beagle");
        assert_eq!(cards[0].age, "2 years old");
        assert_eq!(cards[1].breed, "Pug");
        assert_eq!(cards[1].age, "");
        assert_eq!(cards[2].breed, "");
        assert_eq!(cards[2].picture_url, None);
    }

    #[test]
    fn test_card_carries_picture_url() {
        let pet = Pet {
            picture_url: Some("https://picsum.photos/300/300".to_string()),
            ..Pet::default()
        };

        let card = CardContent::from(&pet);

        assert_eq!(card.picture_url.as_deref(), Some("https://picsum.photos/300/300"));
    }
}
