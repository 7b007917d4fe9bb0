//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and traits from the cookbook crate.
//!
//! # Example
//!
//! ```rust,no_run
//! use cookbook::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let cookbook = Cookbook::from_file("path/to/cookbook.json")?;
//! let resolution = cookbook.resolver().resolve_with_trace("Cake")?;
//!
//! println!("{:?}", resolution.summary);
//! println!("{}", TraceFormatter::format_trace(&resolution.trace));
//! # Ok(())
//! # }
//! ```

// Registry and resolution
pub use crate::registry::Cookbook;
pub use crate::resolver::{Resolution, Resolver};

// Entry model
pub use crate::recipe::{
    Entry, Ingredient, IngredientQuantity, IntoEntry, RawEntry, RawRequiredItem, Recipe,
    RecipeSummary, RequiredItem,
};

// Name normalization
pub use crate::handwriting::parse_handwriting;

// Error types
pub use crate::error::{LoadError, NameError, RegistryError, ResolveError, ValidationError};

// Trace formatting
pub use crate::trace::{ExpansionTrace, TraceFormatter};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
