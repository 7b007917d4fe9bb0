use crate::error::ResolveError;
use crate::recipe::{Entry, Ingredient, IngredientQuantity, Recipe};
use crate::registry::Cookbook;
use crate::trace::ExpansionTrace;
use ahash::{AHashSet, RandomState};
use indexmap::IndexMap;

/// A recipe whose required items are being expanded.
struct Frame<'a> {
    recipe: &'a Recipe,
    multiplier: u64,
    /// Index of the next required item to expand.
    next: usize,
    /// Trace nodes of already expanded items; stays empty unless tracing.
    children: Vec<ExpansionTrace>,
}

impl Frame<'_> {
    fn into_trace(self) -> ExpansionTrace {
        ExpansionTrace::Recipe {
            name: self.recipe.name.clone(),
            quantity: self.multiplier,
            children: self.children,
        }
    }
}

/// Accumulates totals during a depth-first expansion of a recipe.
///
/// The traversal runs on an explicit stack of frames rather than the call
/// stack, so the depth of a requirement chain is bounded only by memory.
/// The frames double as the active path used for cycle detection.
pub(super) struct Expansion<'a> {
    cookbook: &'a Cookbook,
    trace: bool,
    cook_time: u64,
    totals: IndexMap<String, u64, RandomState>,
    stack: Vec<Frame<'a>>,
    active: AHashSet<&'a str>,
}

impl<'a> Expansion<'a> {
    /// An expansion that only accumulates totals.
    pub(super) fn new(cookbook: &'a Cookbook) -> Self {
        Self {
            cookbook,
            trace: false,
            cook_time: 0,
            totals: IndexMap::default(),
            stack: Vec::new(),
            active: AHashSet::new(),
        }
    }

    /// An expansion that also records an `ExpansionTrace` node per visited entry.
    pub(super) fn with_trace(cookbook: &'a Cookbook) -> Self {
        Self {
            trace: true,
            ..Self::new(cookbook)
        }
    }

    /// Expands every required item of `root`, returning the trace nodes of
    /// its direct children (empty unless tracing).
    pub(super) fn run(&mut self, root: &'a Recipe) -> Result<Vec<ExpansionTrace>, ResolveError> {
        let mut root_children = Vec::new();
        self.enter(root, 1);

        while let Some(frame) = self.stack.last_mut() {
            let recipe = frame.recipe;
            let multiplier = frame.multiplier;
            let Some(item) = recipe.required_items.get(frame.next) else {
                if let Some(done) = self.stack.pop() {
                    self.active.remove(done.recipe.name.as_str());
                    match self.stack.last_mut() {
                        Some(parent) if self.trace => parent.children.push(done.into_trace()),
                        Some(_) => {}
                        None => root_children = done.children,
                    }
                }
                continue;
            };
            frame.next += 1;

            let quantity = item
                .quantity
                .checked_mul(multiplier)
                .ok_or_else(|| overflow(&item.name))?;
            let cookbook = self.cookbook;
            let entry = cookbook.lookup(&item.name).ok_or_else(|| {
                ResolveError::UnknownReference {
                    missing: item.name.clone(),
                    required_by: recipe.name.clone(),
                }
            })?;

            match entry {
                Entry::Ingredient(ingredient) => self.add_ingredient(ingredient, quantity)?,
                Entry::Recipe(sub) => {
                    if self.active.contains(sub.name.as_str()) {
                        return Err(self.cycle(sub));
                    }
                    self.enter(sub, quantity);
                }
            }
        }

        Ok(root_children)
    }

    fn enter(&mut self, recipe: &'a Recipe, multiplier: u64) {
        self.active.insert(&recipe.name);
        self.stack.push(Frame {
            recipe,
            multiplier,
            next: 0,
            children: Vec::new(),
        });
    }

    fn add_ingredient(&mut self, ingredient: &Ingredient, quantity: u64) -> Result<(), ResolveError> {
        let contributed = ingredient
            .cook_time
            .checked_mul(quantity)
            .ok_or_else(|| overflow(&ingredient.name))?;
        self.cook_time = self
            .cook_time
            .checked_add(contributed)
            .ok_or_else(|| overflow(&ingredient.name))?;

        match self.totals.get_mut(&ingredient.name) {
            Some(total) => {
                *total = total
                    .checked_add(quantity)
                    .ok_or_else(|| overflow(&ingredient.name))?;
            }
            None => {
                self.totals.insert(ingredient.name.clone(), quantity);
            }
        }

        if self.trace {
            if let Some(parent) = self.stack.last_mut() {
                parent.children.push(ExpansionTrace::Ingredient {
                    name: ingredient.name.clone(),
                    quantity,
                    unit_cook_time: ingredient.cook_time,
                });
            }
        }
        Ok(())
    }

    /// The active path from the first visit of `recipe` back to itself.
    fn cycle(&self, recipe: &Recipe) -> ResolveError {
        let start = self
            .stack
            .iter()
            .position(|frame| frame.recipe.name == recipe.name)
            .unwrap_or(0);
        let mut path: Vec<String> = self.stack[start..]
            .iter()
            .map(|frame| frame.recipe.name.clone())
            .collect();
        path.push(recipe.name.clone());
        ResolveError::CyclicReference { path }
    }

    /// Consumes the accumulator, yielding total cook time and ingredient totals.
    pub(super) fn finish(self) -> (u64, Vec<IngredientQuantity>) {
        let ingredients = self
            .totals
            .into_iter()
            .map(|(name, quantity)| IngredientQuantity { name, quantity })
            .collect();
        (self.cook_time, ingredients)
    }
}

fn overflow(item: &str) -> ResolveError {
    ResolveError::QuantityOverflow {
        item: item.to_string(),
    }
}
