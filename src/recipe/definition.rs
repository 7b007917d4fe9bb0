use serde::{Deserialize, Serialize};

/// A single cookbook entry. Every entry is either a leaf ingredient or a recipe
/// composed of other entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Entry {
    Ingredient(Ingredient),
    Recipe(Recipe),
}

impl Entry {
    /// The registry key of this entry.
    pub fn name(&self) -> &str {
        match self {
            Entry::Ingredient(ingredient) => &ingredient.name,
            Entry::Recipe(recipe) => &recipe.name,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Entry::Ingredient(_) => "ingredient",
            Entry::Recipe(_) => "recipe",
        }
    }
}

/// An atomic ingredient with a fixed preparation time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    pub name: String,
    pub cook_time: u64,
}

/// A composite recipe requiring named quantities of other entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub name: String,
    pub required_items: Vec<RequiredItem>,
}

/// A reference from a recipe to another entry, by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequiredItem {
    pub name: String,
    pub quantity: u64,
}

impl Ingredient {
    pub fn new(name: impl Into<String>, cook_time: u64) -> Self {
        Self {
            name: name.into(),
            cook_time,
        }
    }
}

impl Recipe {
    pub fn new<N: Into<String>>(
        name: impl Into<String>,
        required_items: impl IntoIterator<Item = (N, u64)>,
    ) -> Self {
        Self {
            name: name.into(),
            required_items: required_items
                .into_iter()
                .map(|(name, quantity)| RequiredItem {
                    name: name.into(),
                    quantity,
                })
                .collect(),
        }
    }
}

impl From<Ingredient> for Entry {
    fn from(ingredient: Ingredient) -> Self {
        Entry::Ingredient(ingredient)
    }
}

impl From<Recipe> for Entry {
    fn from(recipe: Recipe) -> Self {
        Entry::Recipe(recipe)
    }
}
