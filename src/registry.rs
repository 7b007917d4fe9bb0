use crate::error::{LoadError, RegistryError, ValidationError};
use crate::recipe::{Entry, IntoEntry, RawEntry, Recipe};
use ahash::AHashMap;
use itertools::Itertools;
use std::fs;
use tracing::debug;

/// The registry of named cookbook entries.
///
/// Names are case-sensitive and unique across ingredients and recipes alike.
/// Insertion is the only mutation: entries are never replaced or removed.
#[derive(Debug, Default, Clone)]
pub struct Cookbook {
    entries: AHashMap<String, Entry>,
}

impl Cookbook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores an entry under its name.
    ///
    /// Fails if the name is blank or already registered; the existing entry is
    /// never overwritten. Recipes must have non-blank, unique required item
    /// names with quantities of at least one.
    pub fn insert(&mut self, entry: impl Into<Entry>) -> Result<(), RegistryError> {
        let entry = entry.into();
        let name = entry.name();
        if name.trim().is_empty() {
            return Err(RegistryError::BlankName);
        }
        if self.entries.contains_key(name) {
            return Err(RegistryError::DuplicateName(name.to_string()));
        }
        if let Entry::Recipe(recipe) = &entry {
            check_required_items(recipe)?;
        }

        debug!(name, kind = entry.kind(), "registering cookbook entry");
        self.entries.insert(name.to_string(), entry);
        Ok(())
    }

    /// Validates raw input and registers it in one step.
    ///
    /// Checks run in a fixed order: name, type, uniqueness, then the
    /// type-specific fields.
    pub fn add_raw(&mut self, raw: RawEntry) -> Result<(), ValidationError> {
        let (name, _) = raw.header()?;
        if self.contains(name) {
            return Err(ValidationError::DuplicateName(name.to_string()));
        }
        let entry = raw.into_entry()?;
        self.insert(entry)?;
        Ok(())
    }

    /// Returns the entry registered under `name`.
    pub fn lookup(&self, name: &str) -> Option<&Entry> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Builds a cookbook from raw entries, stopping at the first invalid one.
    pub fn from_raw_entries<I>(raw_entries: I) -> Result<Self, LoadError>
    where
        I: IntoIterator<Item = RawEntry>,
    {
        let mut cookbook = Self::new();
        for (index, raw) in raw_entries.into_iter().enumerate() {
            cookbook
                .add_raw(raw)
                .map_err(|source| LoadError::InvalidEntry { index, source })?;
        }
        Ok(cookbook)
    }

    /// Parses a JSON array of entries, in the same shape accepted by `POST /entry`.
    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        let raw_entries: Vec<RawEntry> = serde_json::from_str(json)?;
        Self::from_raw_entries(raw_entries)
    }

    /// Loads a cookbook from a JSON file.
    pub fn from_file(path: &str) -> Result<Self, LoadError> {
        let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_string(),
            source,
        })?;
        Self::from_json(&content)
    }
}

fn check_required_items(recipe: &Recipe) -> Result<(), RegistryError> {
    for (index, item) in recipe.required_items.iter().enumerate() {
        if item.name.trim().is_empty() {
            return Err(RegistryError::BlankRequiredItem { index });
        }
        if item.quantity == 0 {
            return Err(RegistryError::ZeroQuantity {
                item: item.name.clone(),
            });
        }
    }

    match recipe
        .required_items
        .iter()
        .map(|item| item.name.as_str())
        .duplicates()
        .next()
    {
        Some(name) => Err(RegistryError::DuplicateRequiredItem(name.to_string())),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recipe::{Ingredient, Recipe};

    #[test]
    fn test_insert_and_lookup() {
        let mut cookbook = Cookbook::new();
        cookbook.insert(Ingredient::new("Egg", 6)).unwrap();

        assert_eq!(
            cookbook.lookup("Egg"),
            Some(&Entry::Ingredient(Ingredient::new("Egg", 6)))
        );
        assert!(cookbook.lookup("egg").is_none());
        assert_eq!(cookbook.len(), 1);
    }

    #[test]
    fn test_duplicate_rejected_across_kinds() {
        let mut cookbook = Cookbook::new();
        cookbook.insert(Ingredient::new("Egg", 6)).unwrap();

        let err = cookbook
            .insert(Recipe::new("Egg", [("Flour", 1)]))
            .unwrap_err();
        assert_eq!(err, RegistryError::DuplicateName("Egg".to_string()));
        // The original entry is untouched.
        assert!(matches!(cookbook.lookup("Egg"), Some(Entry::Ingredient(_))));
    }

    #[test]
    fn test_blank_name_rejected() {
        let mut cookbook = Cookbook::new();
        assert_eq!(
            cookbook.insert(Ingredient::new(" \t", 1)),
            Err(RegistryError::BlankName)
        );
        assert!(cookbook.is_empty());
    }

    #[test]
    fn test_recipe_may_reference_unregistered_items() {
        let mut cookbook = Cookbook::new();
        cookbook
            .insert(Recipe::new("Toast", [("Bread", 1)]))
            .unwrap();
        assert!(cookbook.contains("Toast"));
        assert!(!cookbook.contains("Bread"));
    }

    #[test]
    fn test_zero_quantity_rejected_on_insert() {
        let mut cookbook = Cookbook::new();
        assert_eq!(
            cookbook.insert(Recipe::new("Nothing", [("Egg", 0)])),
            Err(RegistryError::ZeroQuantity {
                item: "Egg".to_string()
            })
        );
        assert!(!cookbook.contains("Nothing"));
    }

    #[test]
    fn test_duplicate_required_item_rejected_on_insert() {
        let mut cookbook = Cookbook::new();
        assert_eq!(
            cookbook.insert(Recipe::new("Twice", [("Egg", 1), ("Flour", 1), ("Egg", 2)])),
            Err(RegistryError::DuplicateRequiredItem("Egg".to_string()))
        );
        assert!(cookbook.is_empty());
    }

    #[test]
    fn test_blank_required_item_rejected_on_insert() {
        let mut cookbook = Cookbook::new();
        assert_eq!(
            cookbook.insert(Recipe::new("Toast", [("Bread", 1), (" ", 1)])),
            Err(RegistryError::BlankRequiredItem { index: 1 })
        );
    }

    #[test]
    fn test_deserialized_entries_go_through_insert_checks() {
        let entry: Entry = serde_json::from_str(
            r#"{"type":"recipe","name":"Nothing","requiredItems":[{"name":"Egg","quantity":0}]}"#,
        )
        .unwrap();
        let mut cookbook = Cookbook::new();
        assert!(matches!(
            cookbook.insert(entry),
            Err(RegistryError::ZeroQuantity { .. })
        ));
    }

    fn raw_ingredient(name: &str, entry_type: &str, cook_time: i64) -> RawEntry {
        RawEntry {
            entry_type: Some(entry_type.to_string()),
            name: Some(name.to_string()),
            cook_time: Some(cook_time),
            required_items: None,
        }
    }

    #[test]
    fn test_add_raw_reports_duplicate_before_fields() {
        let mut cookbook = Cookbook::new();
        cookbook.insert(Ingredient::new("Egg", 6)).unwrap();

        assert_eq!(
            cookbook.add_raw(raw_ingredient("Egg", "ingredient", -5)),
            Err(ValidationError::DuplicateName("Egg".to_string()))
        );
    }

    #[test]
    fn test_add_raw_reports_type_before_duplicate() {
        let mut cookbook = Cookbook::new();
        cookbook.insert(Ingredient::new("Egg", 6)).unwrap();

        assert_eq!(
            cookbook.add_raw(raw_ingredient("Egg", "sauce", 1)),
            Err(ValidationError::InvalidType("sauce".to_string()))
        );
        assert_eq!(
            cookbook.add_raw(raw_ingredient(" ", "sauce", 1)),
            Err(ValidationError::InvalidName)
        );
    }

    #[test]
    fn test_from_json_reports_failing_index() {
        let json = r#"[
            { "type": "ingredient", "name": "Egg", "cookTime": 6 },
            { "type": "ingredient", "name": "Egg", "cookTime": 2 }
        ]"#;
        match Cookbook::from_json(json) {
            Err(LoadError::InvalidEntry { index, source }) => {
                assert_eq!(index, 1);
                assert_eq!(source, ValidationError::DuplicateName("Egg".to_string()));
            }
            other => panic!("expected an invalid entry error, got {:?}", other),
        }
    }

    #[test]
    fn test_names_are_sorted() {
        let mut cookbook = Cookbook::new();
        cookbook.insert(Ingredient::new("Flour", 0)).unwrap();
        cookbook.insert(Ingredient::new("Egg", 6)).unwrap();
        assert_eq!(cookbook.names(), vec!["Egg", "Flour"]);
    }
}
