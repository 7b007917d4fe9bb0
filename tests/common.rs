//! Common test utilities for building cookbooks.
use cookbook::prelude::*;

/// The cake cookbook used across tests.
///
/// `cake` = 1 x `batter` + 1 x `egg`, `batter` = 2 x `egg` + 1 x `flour`.
#[allow(dead_code)]
pub fn create_cake_cookbook() -> Cookbook {
    let mut cookbook = Cookbook::new();
    cookbook.insert(Ingredient::new("egg", 6)).unwrap();
    cookbook.insert(Ingredient::new("flour", 0)).unwrap();
    cookbook
        .insert(Recipe::new("batter", [("egg", 2), ("flour", 1)]))
        .unwrap();
    cookbook
        .insert(Recipe::new("cake", [("batter", 1), ("egg", 1)]))
        .unwrap();
    cookbook
}

/// A cookbook where `Bun` reaches `Butter` directly and through two sub-recipes.
#[allow(dead_code)]
pub fn create_diamond_cookbook() -> Cookbook {
    let mut cookbook = Cookbook::new();
    cookbook.insert(Ingredient::new("Butter", 2)).unwrap();
    cookbook.insert(Ingredient::new("Flour", 1)).unwrap();
    cookbook
        .insert(Recipe::new("Dough", [("Flour", 3), ("Butter", 1)]))
        .unwrap();
    cookbook
        .insert(Recipe::new("Glaze", [("Butter", 2)]))
        .unwrap();
    cookbook
        .insert(Recipe::new(
            "Bun",
            [("Dough", 2), ("Glaze", 3), ("Butter", 4)],
        ))
        .unwrap();
    cookbook
}

/// The same cake cookbook, in the JSON shape accepted by `POST /entry`.
#[allow(dead_code)]
pub const CAKE_COOKBOOK_JSON: &str = r#"[
    { "type": "ingredient", "name": "egg", "cookTime": 6 },
    { "type": "ingredient", "name": "flour", "cookTime": 0 },
    { "type": "recipe", "name": "batter", "requiredItems": [
        { "name": "egg", "quantity": 2 },
        { "name": "flour", "quantity": 1 }
    ] },
    { "type": "recipe", "name": "cake", "requiredItems": [
        { "name": "batter", "quantity": 1 },
        { "name": "egg", "quantity": 1 }
    ] }
]"#;

/// Sorted `(name, quantity)` pairs for order-insensitive comparisons.
#[allow(dead_code)]
pub fn sorted_quantities(summary: &RecipeSummary) -> Vec<(String, u64)> {
    let mut pairs: Vec<(String, u64)> = summary
        .ingredients
        .iter()
        .map(|i| (i.name.clone(), i.quantity))
        .collect();
    pairs.sort();
    pairs
}
