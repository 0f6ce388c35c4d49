//! Shared data structures for the application state
//!
//! These structs represent the data model that flows between
//! the catalog loader and the UI layer.

use serde::Deserialize;
use std::fmt;

/// A single adoptable pet as described by the catalog asset.
///
/// Every field is optional: the asset is hand-written and entries
/// routinely leave some of them out. Unknown keys are ignored.
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Pet {
    /// Pet's name (e.g., "Bruno")
    pub pets_name: Option<String>,
    pub breed: Option<String>,
    /// Free-form age, e.g. "6 months old"
    pub age_description: Option<String>,
    pub name_of_owner: Option<String>,
    pub current_address: Option<String>,
    /// Picture location, usually an http(s) URL
    pub picture_url: Option<String>,
    pub description: Option<String>,
}

impl Pet {
    /// The pet shown on the detail screen when nothing has been selected yet.
    ///
    /// All fields are populated so the detail screen always has something to render.
    pub fn placeholder() -> Self {
        Self {
            pets_name: Some("Bruno".to_string()),
            breed: Some("German Shepherd".to_string()),
            age_description: Some("6 months old".to_string()),
            name_of_owner: Some("Ram Laal Rastogi".to_string()),
            current_address: Some("Gali no 55, Chandni chowk, New Delhi- 110058".to_string()),
            picture_url: Some("https://picsum.photos/300/300".to_string()),
            description: Some(
                "very cute pet name muffine, 6 months old, labra breed not price of adoption."
                    .to_string(),
            ),
        }
    }

    pub fn name(&self) -> &str {
        text_or_empty(&self.pets_name)
    }

    pub fn breed(&self) -> &str {
        text_or_empty(&self.breed)
    }

    pub fn age(&self) -> &str {
        text_or_empty(&self.age_description)
    }

    pub fn owner(&self) -> &str {
        text_or_empty(&self.name_of_owner)
    }

    pub fn address(&self) -> &str {
        text_or_empty(&self.current_address)
    }

    pub fn about(&self) -> &str {
        text_or_empty(&self.description)
    }

    /// Picture URL, if the entry has a non-blank one
    pub fn picture(&self) -> Option<&str> {
        self.picture_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }
}

/// Absent text renders as an empty string
fn text_or_empty(field: &Option<String>) -> &str {
    field.as_deref().unwrap_or("")
}

impl fmt::Display for Pet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.name(), self.breed())
    }
}
