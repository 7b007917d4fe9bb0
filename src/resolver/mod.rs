use crate::error::ResolveError;
use crate::recipe::{Entry, Recipe, RecipeSummary};
use crate::registry::Cookbook;
use crate::trace::ExpansionTrace;
use tracing::debug;

mod engine;

use engine::Expansion;

/// The outcome of a resolution that also recorded how it got there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub summary: RecipeSummary,
    pub trace: ExpansionTrace,
}

/// Expands recipes into their consolidated leaf ingredients.
///
/// A `Resolver` only ever reads the cookbook it borrows. Each call runs an
/// independent depth-first expansion:
///
/// * quantities multiply along the path from the resolved recipe to a leaf,
/// * cook time accumulates as `ingredient.cook_time * effective quantity`,
/// * an ingredient reached via several paths is summed into a single total,
/// * any unknown reference or cycle aborts the whole resolution.
pub struct Resolver<'a> {
    cookbook: &'a Cookbook,
}

impl<'a> Resolver<'a> {
    pub fn new(cookbook: &'a Cookbook) -> Self {
        Self { cookbook }
    }

    /// Resolves `name` into its total cook time and ingredient list.
    ///
    /// # Returns
    ///
    /// * `Ok(RecipeSummary)`: ingredients appear in the order they were first
    ///   reached during expansion.
    /// * `Err(ResolveError)`: `NotFound` or `NotARecipe` for a bad query,
    ///   `UnknownReference`, `CyclicReference` or `QuantityOverflow` when the
    ///   requirement graph below the recipe cannot be fully expanded.
    pub fn resolve(&self, name: &str) -> Result<RecipeSummary, ResolveError> {
        let recipe = self.root(name)?;
        let mut expansion = Expansion::new(self.cookbook);
        expansion.run(recipe)?;
        Ok(self.summarize(recipe, expansion))
    }

    /// Like `resolve`, but also returns the expansion tree.
    pub fn resolve_with_trace(&self, name: &str) -> Result<Resolution, ResolveError> {
        let recipe = self.root(name)?;
        let mut expansion = Expansion::with_trace(self.cookbook);
        let children = expansion.run(recipe)?;

        Ok(Resolution {
            summary: self.summarize(recipe, expansion),
            trace: ExpansionTrace::Recipe {
                name: recipe.name.clone(),
                quantity: 1,
                children,
            },
        })
    }

    fn root(&self, name: &str) -> Result<&'a Recipe, ResolveError> {
        match self.cookbook.lookup(name) {
            Some(Entry::Recipe(recipe)) => {
                debug!(recipe = name, "resolving recipe");
                Ok(recipe)
            }
            Some(Entry::Ingredient(_)) => Err(ResolveError::NotARecipe(name.to_string())),
            None => Err(ResolveError::NotFound(name.to_string())),
        }
    }

    fn summarize(&self, recipe: &Recipe, expansion: Expansion<'_>) -> RecipeSummary {
        let (cook_time, ingredients) = expansion.finish();
        debug!(
            recipe = %recipe.name,
            cook_time,
            ingredients = ingredients.len(),
            "recipe resolved"
        );
        RecipeSummary {
            name: recipe.name.clone(),
            cook_time,
            ingredients,
        }
    }
}

impl Cookbook {
    /// A resolver reading from this cookbook.
    pub fn resolver(&self) -> Resolver<'_> {
        Resolver::new(self)
    }
}
