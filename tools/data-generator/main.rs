use clap::Parser;
use cookbook::recipe::{Entry, Ingredient, Recipe, RequiredItem};
use rand::Rng;
use rand::rngs::ThreadRng;
use std::fs;

/// A CLI tool to generate a synthetic, acyclic cookbook
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The path to write the generated JSON file to
    #[arg(short, long, default_value = "generated_cookbook.json")]
    output: String,

    /// Number of ingredients at the bottom layer
    #[arg(long, default_value_t = 20)]
    ingredients: usize,

    /// Number of recipe layers stacked above the ingredients
    #[arg(long, default_value_t = 4)]
    layers: usize,

    /// Number of recipes per layer
    #[arg(long, default_value_t = 10)]
    per_layer: usize,

    /// Maximum number of required items per recipe
    #[arg(long, default_value_t = 4)]
    max_items: usize,

    /// Maximum quantity of a single required item
    #[arg(long, default_value_t = 3)]
    max_quantity: u64,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut rng = rand::rng();

    if cli.ingredients == 0 || cli.max_items == 0 || cli.max_quantity == 0 {
        eprintln!("Error: --ingredients, --max-items and --max-quantity must be at least 1");
        std::process::exit(1);
    }

    println!(
        "Generating cookbook ({} ingredients, {} layers of {} recipes)...",
        cli.ingredients, cli.layers, cli.per_layer
    );

    let mut entries: Vec<Entry> = generate_ingredients(&mut rng, cli.ingredients);
    // Names available to the next layer; recipes only reference lower layers.
    let mut lower: Vec<String> = entries.iter().map(|e| e.name().to_string()).collect();

    for layer in 1..=cli.layers {
        let recipes = generate_layer(&mut rng, &cli, layer, &lower);
        lower.extend(recipes.iter().map(|e| e.name().to_string()));
        println!("-> Generated layer {} with {} recipe(s).", layer, recipes.len());
        entries.extend(recipes);
    }

    let json_output = serde_json::to_string_pretty(&entries)?;
    fs::write(&cli.output, json_output)?;

    println!(
        "Successfully generated {} entries and saved them to '{}'",
        entries.len(),
        cli.output
    );

    Ok(())
}

fn generate_ingredients(rng: &mut ThreadRng, count: usize) -> Vec<Entry> {
    (0..count)
        .map(|i| {
            Entry::Ingredient(Ingredient::new(
                format!("ingredient_{}", i),
                rng.random_range(0..=30),
            ))
        })
        .collect()
}

fn generate_layer(rng: &mut ThreadRng, cli: &Cli, layer: usize, lower: &[String]) -> Vec<Entry> {
    (0..cli.per_layer)
        .map(|i| {
            let wanted = rng.random_range(1..=cli.max_items.min(lower.len()));
            let mut required_items: Vec<RequiredItem> = Vec::with_capacity(wanted);
            while required_items.len() < wanted {
                let name = &lower[rng.random_range(0..lower.len())];
                if required_items.iter().any(|item| &item.name == name) {
                    continue;
                }
                required_items.push(RequiredItem {
                    name: name.clone(),
                    quantity: rng.random_range(1..=cli.max_quantity),
                });
            }
            Entry::Recipe(Recipe {
                name: format!("recipe_{}_{}", layer, i),
                required_items,
            })
        })
        .collect()
}
