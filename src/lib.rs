//! # Cookbook - Recipe Registry and Resolution Engine
//!
//! **Cookbook** keeps a registry of named entries, atomic ingredients with a
//! fixed cook time and recipes that require quantities of other entries, and
//! resolves any recipe into the fully expanded list of ingredient quantities
//! plus its total cook time.
//!
//! ## Core Workflow
//!
//! 1.  **Register Entries**: Insert validated `Ingredient`s and `Recipe`s into a `Cookbook`,
//!     either directly or from untrusted `RawEntry` input via `Cookbook::add_raw`.
//! 2.  **Resolve**: Ask the cookbook's `Resolver` for a recipe. Nested recipes are expanded
//!     depth-first, quantities multiply along every path and repeated ingredients are merged.
//! 3.  **Explain** (optional): `Resolver::resolve_with_trace` also returns an `ExpansionTrace`,
//!     which `TraceFormatter` renders as an indented breakdown.
//! 4.  **Serve** (optional, `server` feature): `server::build_router` exposes the same
//!     operations over HTTP.
//!
//! ## Quick Start
//!
//! ```rust
//! use cookbook::prelude::*;
//!
//! fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
//!     let mut cookbook = Cookbook::new();
//!     cookbook.insert(Ingredient::new("egg", 6))?;
//!     cookbook.insert(Ingredient::new("flour", 0))?;
//!     cookbook.insert(Recipe::new("batter", [("egg", 2), ("flour", 1)]))?;
//!     cookbook.insert(Recipe::new("cake", [("batter", 1), ("egg", 1)]))?;
//!
//!     let summary = cookbook.resolver().resolve("cake")?;
//!     assert_eq!(summary.cook_time, 18);
//!     assert_eq!(summary.quantity_of("egg"), Some(3));
//!     assert_eq!(summary.quantity_of("flour"), Some(1));
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod handwriting;
pub mod prelude;
pub mod recipe;
pub mod registry;
pub mod resolver;
#[cfg(feature = "server")]
pub mod server;
pub mod trace;
