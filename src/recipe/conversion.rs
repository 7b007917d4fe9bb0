use super::definition::{Entry, Ingredient, Recipe, RequiredItem};
use crate::error::ValidationError;
use ahash::AHashSet;
use serde::Deserialize;

/// A trait for untrusted input that can be validated into a cookbook `Entry`.
///
/// The registry never sees anything that has not gone through this conversion,
/// so every implementation must uphold the entry invariants: non-blank names,
/// non-negative cook times, positive quantities and unique required item names.
///
/// # Example
///
/// ```rust
/// use cookbook::prelude::*;
///
/// let raw: RawEntry = serde_json::from_str(
///     r#"{ "type": "ingredient", "name": "egg", "cookTime": 6 }"#,
/// ).unwrap();
/// let entry = raw.into_entry().unwrap();
/// assert_eq!(entry.name(), "egg");
/// ```
pub trait IntoEntry {
    /// Consumes the input and converts it into a validated entry.
    fn into_entry(self) -> Result<Entry, ValidationError>;
}

/// The wire shape of an entry creation request.
///
/// Every field is optional and integers are signed so that missing or
/// out-of-range values surface as `ValidationError`s rather than
/// deserialization failures.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawEntry {
    #[serde(rename = "type")]
    pub entry_type: Option<String>,
    pub name: Option<String>,
    pub cook_time: Option<i64>,
    pub required_items: Option<Vec<RawRequiredItem>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawRequiredItem {
    pub name: Option<String>,
    pub quantity: Option<i64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum EntryKind {
    Ingredient,
    Recipe,
}

impl RawEntry {
    /// Checks the fields every entry carries: a non-blank name, then the type.
    pub(crate) fn header(&self) -> Result<(&str, EntryKind), ValidationError> {
        let name = self
            .name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .ok_or(ValidationError::InvalidName)?;

        match self.entry_type.as_deref() {
            Some("ingredient") => Ok((name, EntryKind::Ingredient)),
            Some("recipe") => Ok((name, EntryKind::Recipe)),
            Some(other) => Err(ValidationError::InvalidType(other.to_string())),
            None => Err(ValidationError::MissingType),
        }
    }
}

impl IntoEntry for RawEntry {
    fn into_entry(self) -> Result<Entry, ValidationError> {
        let (_, kind) = self.header()?;
        let name = self.name.unwrap_or_default();

        match kind {
            EntryKind::Ingredient => {
                let cook_time = self
                    .cook_time
                    .and_then(|t| u64::try_from(t).ok())
                    .ok_or(ValidationError::InvalidCookTime)?;
                Ok(Entry::Ingredient(Ingredient { name, cook_time }))
            }
            EntryKind::Recipe => {
                let raw_items = self
                    .required_items
                    .ok_or(ValidationError::MissingRequiredItems)?;
                let required_items = validate_required_items(raw_items)?;
                Ok(Entry::Recipe(Recipe {
                    name,
                    required_items,
                }))
            }
        }
    }
}

fn validate_required_items(
    raw_items: Vec<RawRequiredItem>,
) -> Result<Vec<RequiredItem>, ValidationError> {
    let mut seen = AHashSet::with_capacity(raw_items.len());
    let mut items = Vec::with_capacity(raw_items.len());

    for (index, raw) in raw_items.into_iter().enumerate() {
        let name = match raw.name {
            Some(name) if !name.trim().is_empty() => name,
            _ => return Err(ValidationError::InvalidRequiredItemName { index }),
        };
        let quantity = match raw.quantity {
            Some(q) if q > 0 => q as u64,
            _ => return Err(ValidationError::InvalidQuantity { item: name }),
        };
        if !seen.insert(name.clone()) {
            return Err(ValidationError::DuplicateRequiredItem(name));
        }
        items.push(RequiredItem { name, quantity });
    }

    Ok(items)
}
