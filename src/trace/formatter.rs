use super::ExpansionTrace;
use itertools::Itertools;

/// Formats expansion traces into human-readable breakdowns.
pub struct TraceFormatter;

impl TraceFormatter {
    /// Format an expansion trace as an indented tree.
    ///
    /// The root line carries the recipe name and its total cook time, every
    /// nested line is prefixed with the effective quantity.
    pub fn format_trace(trace: &ExpansionTrace) -> String {
        let mut lines = vec![format!(
            "{} (cook time {})",
            trace.name(),
            trace.cook_time()
        )];
        if let ExpansionTrace::Recipe { children, .. } = trace {
            for child in children {
                Self::format_recursive(child, 1, &mut lines);
            }
        }
        lines.into_iter().join("\n")
    }

    fn format_recursive(trace: &ExpansionTrace, depth: usize, lines: &mut Vec<String>) {
        let indent = "  ".repeat(depth);
        match trace {
            ExpansionTrace::Recipe {
                name,
                quantity,
                children,
            } => {
                lines.push(format!("{}{} x {}", indent, quantity, name));
                for child in children {
                    Self::format_recursive(child, depth + 1, lines);
                }
            }
            ExpansionTrace::Ingredient {
                name,
                quantity,
                unit_cook_time,
            } => {
                lines.push(format!(
                    "{}{} x {} ({} each, {} total)",
                    indent,
                    quantity,
                    name,
                    unit_cook_time,
                    trace.cook_time()
                ));
            }
        }
    }
}
