use clap::Parser;
use cookbook::prelude::*;
use std::time::Instant;

/// Resolve recipes from a cookbook file
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the cookbook JSON file (an array of entries)
    cookbook_path: Option<String>,
    /// Name of the recipe to resolve
    recipe: Option<String>,

    /// Print the full expansion tree
    #[arg(short, long)]
    explain: bool,

    /// Print the summary as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Normalize a hand-written recipe name and exit
    #[arg(long, value_name = "TEXT")]
    normalize: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    if let Some(text) = cli.normalize {
        match parse_handwriting(&text) {
            Ok(name) => println!("{}", name),
            Err(e) => exit_with_error(&e.to_string()),
        }
        return;
    }

    let cookbook_path = cli
        .cookbook_path
        .unwrap_or_else(|| exit_with_error("Cookbook path is required."));
    let recipe = cli
        .recipe
        .unwrap_or_else(|| exit_with_error("Recipe name is required."));

    run_resolution(&cookbook_path, &recipe, cli.explain, cli.json);
}

fn run_resolution(cookbook_path: &str, recipe: &str, explain: bool, json: bool) {
    // --- 1. Loading ---
    let load_start = Instant::now();
    let cookbook = Cookbook::from_file(cookbook_path)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to load cookbook: {}", e)));
    let load_duration = load_start.elapsed();

    // --- 2. Resolution ---
    let resolve_start = Instant::now();
    let resolver = cookbook.resolver();
    let resolved = if explain {
        resolver
            .resolve_with_trace(recipe)
            .map(|resolution| (resolution.summary, Some(resolution.trace)))
    } else {
        resolver.resolve(recipe).map(|summary| (summary, None))
    };
    let (summary, trace) =
        resolved.unwrap_or_else(|e| exit_with_error(&format!("Resolution failed: {}", e)));
    let resolve_duration = resolve_start.elapsed();

    // --- 3. Output ---
    if json {
        let out = serde_json::to_string_pretty(&summary)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to encode summary: {}", e)));
        println!("{}", out);
        return;
    }

    println!("Recipe: {}", summary.name);
    println!("Cook time: {}", summary.cook_time);
    println!("Ingredients:");
    for ingredient in &summary.ingredients {
        println!("  - {} x {}", ingredient.quantity, ingredient.name);
    }

    if let Some(trace) = &trace {
        println!("\n--- Breakdown ---");
        println!("{}", TraceFormatter::format_trace(trace));
    }

    println!("\n--- Summary ---");
    println!("Entries Loaded:   {}", cookbook.len());
    if let Some(trace) = &trace {
        println!("Expansion Depth:  {}", trace.depth());
    }
    println!("Loading:          {:?}", load_duration);
    println!("Resolution:       {:?}", resolve_duration);
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
