use std::path::Path;

use super::data::Pet;
use crate::error::CatalogError;

/// Default catalog shipped inside the binary
const BUNDLED_CATALOG: &str = include_str!("../../assets/pets.json");

/// The Catalog holds every pet loaded from a catalog asset.
///
/// Order is the order of the source document. Nothing is sorted,
/// deduplicated or cached between loads.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    pets: Vec<Pet>,
}

impl Catalog {
    /// Parse a JSON array of pet objects.
    ///
    /// Fails as a whole on malformed input; no partial catalog is returned.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let pets: Vec<Pet> = serde_json::from_str(json)?;
        Ok(Self { pets })
    }

    /// Read and parse a catalog file from disk
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let catalog = Self::from_json(&json)?;
        tracing::info!("📁 Loaded {} pets from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    /// Parse the catalog embedded at build time
    pub fn bundled() -> Result<Self, CatalogError> {
        let catalog = Self::from_json(BUNDLED_CATALOG)?;
        tracing::info!("📁 Loaded {} pets from bundled catalog", catalog.len());
        Ok(catalog)
    }

    pub fn len(&self) -> usize {
        self.pets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pets.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Pet> {
        self.pets.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Pet> {
        self.pets.iter()
    }

    /// Distinct picture URLs in catalog order (blank ones skipped)
    pub fn picture_urls(&self) -> Vec<String> {
        let mut urls: Vec<String> = Vec::new();
        for url in self.pets.iter().filter_map(Pet::picture) {
            if !urls.iter().any(|seen| seen == url) {
                urls.push(url.to_string());
            }
        }
        urls
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_array() {
        let catalog = Catalog::from_json("[]").unwrap();
        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
    }

    #[test]
    fn test_keeps_source_order() {
        let json = r#"[
            {"petsName": "Charlie"},
            {"petsName": "Alfie"},
            {"petsName": "Bella"}
        ]"#;

        let catalog = Catalog::from_json(json).unwrap();
        let names: Vec<&str> = catalog.iter().map(Pet::name).collect();

        assert_eq!(names, ["Charlie", "Alfie", "Bella"]);
    }

    #[test]
    fn test_duplicates_are_kept() {
        let json = r#"[{"petsName": "Rex"}, {"petsName": "Rex"}]"#;
        let catalog = Catalog::from_json(json).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(0), catalog.get(1));
    }

    #[test]
    fn test_missing_breed() {
        let json = r#"[{
            "petsName": "Bruno",
            "ageDescription": "2 years old",
            "nameOfOwner": "Asha",
            "currentAddress": "12 Lake Road",
            "pictureUrl": "https://example.com/bruno.jpg",
            "description": "Loves naps"
        }]"#;

        let pet = Catalog::from_json(json).unwrap().get(0).cloned().unwrap();

        assert_eq!(pet.breed, None);
        assert_eq!(pet.pets_name.as_deref(), Some("Bruno"));
        assert_eq!(pet.age_description.as_deref(), Some("2 years old"));
        assert_eq!(pet.name_of_owner.as_deref(), Some("Asha"));
        assert_eq!(pet.current_address.as_deref(), Some("12 Lake Road"));
        assert_eq!(pet.picture_url.as_deref(), Some("https://example.com/bruno.jpg"));
        assert_eq!(pet.description.as_deref(), Some("Loves naps"));
    }

    #[test]
    fn test_null_and_unknown_keys() {
        let json = r#"[{"petsName": null, "breed": "Pug", "vaccinated": true, "weightKg": 7}]"#;
        let pet = Catalog::from_json(json).unwrap().get(0).cloned().unwrap();

        assert_eq!(pet.pets_name, None);
        assert_eq!(pet.breed.as_deref(), Some("Pug"));
    }

    #[test]
    fn test_malformed_json_fails() {
        let result = Catalog::from_json(r#"[{"petsName": "Rex""#);
        assert!(matches!(result, Err(CatalogError::Parse(_))));
    }

    #[test]
    fn test_non_array_fails() {
        let result = Catalog::from_json(r#"{"petsName": "Rex"}"#);
        assert!(matches!(result, Err(CatalogError::Parse(_))));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"petsName":"Fido","breed":"Beagle"}}]"#).unwrap();

        let catalog = Catalog::load(file.path()).unwrap();

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get(0).map(Pet::breed), Some("Beagle"));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = Catalog::load(&dir.path().join("nope.json"));
        assert!(matches!(result, Err(CatalogError::Read { .. })));
    }

    #[test]
    fn test_bundled_catalog_parses() {
        let catalog = Catalog::bundled().unwrap();
        assert!(!catalog.is_empty());
    }

    #[test]
    fn test_picture_urls_are_distinct() {
        let json = r#"[
            {"pictureUrl": "https://example.com/a.jpg"},
            {"pictureUrl": ""},
            {},
            {"pictureUrl": "https://example.com/b.jpg"},
            {"pictureUrl": "https://example.com/a.jpg"}
        ]"#;

        let catalog = Catalog::from_json(json).unwrap();

        assert_eq!(
            catalog.picture_urls(),
            ["https://example.com/a.jpg", "https://example.com/b.jpg"]
        );
    }
}
