mod formatter;

pub use formatter::TraceFormatter;

/// A record of how a recipe was expanded, one node per visited entry.
///
/// Quantities are effective quantities: the product of every quantity on the
/// path from the resolved recipe down to the node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpansionTrace {
    Recipe {
        name: String,
        quantity: u64,
        children: Vec<ExpansionTrace>,
    },
    Ingredient {
        name: String,
        quantity: u64,
        unit_cook_time: u64,
    },
}

impl ExpansionTrace {
    pub fn name(&self) -> &str {
        match self {
            ExpansionTrace::Recipe { name, .. } | ExpansionTrace::Ingredient { name, .. } => name,
        }
    }

    pub fn quantity(&self) -> u64 {
        match self {
            ExpansionTrace::Recipe { quantity, .. }
            | ExpansionTrace::Ingredient { quantity, .. } => *quantity,
        }
    }

    /// Total cook time contributed by this subtree.
    pub fn cook_time(&self) -> u64 {
        match self {
            ExpansionTrace::Recipe { children, .. } => {
                children.iter().map(ExpansionTrace::cook_time).sum()
            }
            ExpansionTrace::Ingredient {
                quantity,
                unit_cook_time,
                ..
            } => quantity * unit_cook_time,
        }
    }

    /// Depth of the subtree; a leaf ingredient has depth 1.
    pub fn depth(&self) -> usize {
        match self {
            ExpansionTrace::Recipe { children, .. } => {
                1 + children.iter().map(ExpansionTrace::depth).max().unwrap_or(0)
            }
            ExpansionTrace::Ingredient { .. } => 1,
        }
    }
}
