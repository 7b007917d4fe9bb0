use serde::{Deserialize, Serialize};

/// The fully expanded view of a recipe: total cook time and the consolidated
/// quantity of every leaf ingredient, in first-encountered order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeSummary {
    pub name: String,
    pub cook_time: u64,
    pub ingredients: Vec<IngredientQuantity>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientQuantity {
    pub name: String,
    pub quantity: u64,
}

impl RecipeSummary {
    /// Looks up the resolved quantity of a single ingredient.
    pub fn quantity_of(&self, ingredient: &str) -> Option<u64> {
        self.ingredients
            .iter()
            .find(|i| i.name == ingredient)
            .map(|i| i.quantity)
    }
}
