//! List/detail navigation and the current pet selection
//!
//! The navigator is the only place the selection lives. `update` writes it,
//! the detail view reads it.

use super::data::Pet;

/// Screens the app can show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Grid of every pet in the catalog (root)
    List,
    /// Full details of the selected pet
    Detail,
}

/// Outcome of a `select` call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Detail was pushed on top of the list
    Pushed,
    /// Detail was already on top; only the selection changed
    Reused,
}

/// Back stack plus selection.
///
/// The stack always holds `List` at the bottom and at most one `Detail`
/// above it.
#[derive(Debug, Clone)]
pub struct Navigator {
    stack: Vec<Route>,
    selection: Option<Pet>,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator {
    pub fn new() -> Self {
        Self {
            stack: vec![Route::List],
            selection: None,
        }
    }

    /// Route currently on top of the stack
    pub fn current(&self) -> Route {
        self.stack.last().copied().unwrap_or(Route::List)
    }

    /// Number of entries on the back stack
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Select a pet and show its details.
    ///
    /// Detail is launched single-top: triggering this again while the
    /// detail screen is showing overwrites the selection without stacking
    /// another entry.
    pub fn select(&mut self, pet: Pet) -> Transition {
        tracing::debug!("🐾 Selected {}", pet);
        self.selection = Some(pet);

        if self.current() == Route::Detail {
            return Transition::Reused;
        }

        self.stack.push(Route::Detail);
        Transition::Pushed
    }

    /// Pop back to the list. The selection is kept.
    ///
    /// Returns false when already at the root.
    pub fn back(&mut self) -> bool {
        if self.stack.len() <= 1 {
            return false;
        }
        self.stack.pop();
        true
    }

    /// The selected pet, or the placeholder pet if nothing was selected yet
    pub fn selection(&self) -> &Pet {
        self.selection.as_ref().unwrap_or_else(|| placeholder())
    }

    /// Whether a pet has ever been selected
    pub fn has_selection(&self) -> bool {
        self.selection.is_some()
    }

    /// "Confirm Adoption" action. Intentionally has no effect.
    pub fn confirm_adoption(&self) {
        tracing::debug!(
            placeholder = !self.has_selection(),
            "Confirm adoption pressed for {} (no-op)",
            self.selection()
        );
    }
}

fn placeholder() -> &'static Pet {
    static PLACEHOLDER: std::sync::OnceLock<Pet> = std::sync::OnceLock::new();
    PLACEHOLDER.get_or_init(Pet::placeholder)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::catalog::Catalog;

    fn sample_catalog() -> Catalog {
        Catalog::from_json(
            r#"[
                {"petsName": "Fido", "breed": "Beagle"},
                {"petsName": "Luna", "breed": "Husky"},
                {"petsName": "Max", "breed": "Pug"}
            ]"#,
        )
        .unwrap()
    }

    #[test]
    fn test_starts_on_list() {
        let nav = Navigator::new();
        assert_eq!(nav.current(), Route::List);
        assert_eq!(nav.depth(), 1);
        assert!(!nav.has_selection());
    }

    #[test]
    fn test_select_shows_detail_with_that_pet() {
        let catalog = sample_catalog();
        let mut nav = Navigator::new();

        let transition = nav.select(catalog.get(1).cloned().unwrap());

        assert_eq!(transition, Transition::Pushed);
        assert_eq!(nav.current(), Route::Detail);
        assert_eq!(nav.selection(), catalog.get(1).unwrap());
    }

    #[test]
    fn test_rapid_selects_push_once() {
        let catalog = sample_catalog();
        let mut nav = Navigator::new();

        let first = nav.select(catalog.get(0).cloned().unwrap());
        let second = nav.select(catalog.get(2).cloned().unwrap());

        assert_eq!(first, Transition::Pushed);
        assert_eq!(second, Transition::Reused);
        assert_eq!(nav.depth(), 2);
        assert_eq!(nav.selection().name(), "Max");
    }

    #[test]
    fn test_selection_defaults_to_placeholder() {
        let nav = Navigator::new();
        let pet = nav.selection();

        assert_eq!(pet, &Pet::placeholder());
        assert_eq!(pet.name(), "Bruno");
        assert_eq!(pet.breed(), "German Shepherd");
    }

    #[test]
    fn test_back_keeps_selection() {
        let catalog = sample_catalog();
        let mut nav = Navigator::new();
        nav.select(catalog.get(0).cloned().unwrap());

        assert!(nav.back());
        assert_eq!(nav.current(), Route::List);
        assert_eq!(nav.selection().name(), "Fido");
    }

    #[test]
    fn test_back_at_root_is_noop() {
        let mut nav = Navigator::new();
        assert!(!nav.back());
        assert_eq!(nav.current(), Route::List);
        assert_eq!(nav.depth(), 1);
    }

    #[test]
    fn test_reselect_after_back() {
        let catalog = sample_catalog();
        let mut nav = Navigator::new();

        nav.select(catalog.get(0).cloned().unwrap());
        nav.back();
        let transition = nav.select(catalog.get(1).cloned().unwrap());

        assert_eq!(transition, Transition::Pushed);
        assert_eq!(nav.depth(), 2);
        assert_eq!(nav.selection().name(), "Luna");
    }

    #[test]
    fn test_confirm_adoption_on_placeholder() {
        let nav = Navigator::new();

        nav.confirm_adoption();

        assert_eq!(nav.current(), Route::List);
        assert!(!nav.has_selection());
        assert_eq!(nav.selection(), &Pet::placeholder());
    }

    #[test]
    fn test_confirm_adoption_changes_nothing() {
        let catalog = sample_catalog();
        let mut nav = Navigator::new();
        nav.select(catalog.get(0).cloned().unwrap());

        nav.confirm_adoption();

        assert_eq!(nav.current(), Route::Detail);
        assert_eq!(nav.depth(), 2);
        assert_eq!(nav.selection(), catalog.get(0).unwrap());
    }
}
