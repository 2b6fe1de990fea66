use clap::{Args, Parser, Subcommand};
use log::debug;
use serde_json::json;
use std::path::PathBuf;

use recipe_nutrition::config::{load_config, load_config_from};
use recipe_nutrition::generation::{
    DietaryPreferences, FullRecipeParams, GenerateIdeasParams, RecipeGenerator,
    DEFAULT_DIFFICULTY, DEFAULT_ESTIMATED_TIME, DEFAULT_SERVINGS,
};
use recipe_nutrition::nutrition::{LookupCache, UnitConverter};
use recipe_nutrition::{
    format_ingredient_display, handle_calculate_request, CalculateNutritionRequest,
    NutritionConfig, NutritionError, RecipeIngredientInput, RecipeNutritionCalculator,
};

#[derive(Parser)]
#[command(name = "recipe-nutrition")]
#[command(about = "Estimate recipe nutrition from free-text ingredient amounts", long_about = None)]
struct Cli {
    /// Config file (defaults to ./config.toml when present)
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Calculate total and per-serving nutrition
    Calculate {
        /// JSON request file: {"ingredients": [{"name", "amount"}], "servings"}
        #[arg(long, conflicts_with = "ingredients")]
        file: Option<PathBuf>,

        /// Ingredient as "name=amount", e.g. "rice=1 cup"
        #[arg(short, long = "ingredient", value_name = "NAME=AMOUNT")]
        ingredients: Vec<String>,

        #[arg(short, long, default_value_t = DEFAULT_SERVINGS)]
        servings: u32,

        /// Skip FoodData Central lookups
        #[arg(long)]
        offline: bool,
    },
    /// Show how an amount converts to grams
    Convert { amount: String, ingredient: String },
    /// Render an ingredient line for display
    Format {
        name: String,
        amount: String,
        #[arg(default_value = "")]
        unit: String,
        #[arg(long)]
        grams: Option<f64>,
    },
    /// Resolve per-100g nutrition for one ingredient
    Lookup {
        #[arg(required_unless_present = "fdc_id")]
        name: Option<String>,

        /// Fetch a FoodData Central record by id instead
        #[arg(long, conflicts_with = "name")]
        fdc_id: Option<u64>,
    },
    /// Generate three recipe ideas
    Ideas(RecipeArgs),
    /// Generate a full recipe
    Recipe {
        /// Recipe name, e.g. one of the generated ideas
        #[arg(long)]
        name: String,

        #[arg(long, default_value = DEFAULT_ESTIMATED_TIME)]
        time: String,

        #[arg(long, default_value = DEFAULT_DIFFICULTY)]
        difficulty: String,

        /// Also estimate nutrition for the generated ingredients
        #[arg(long)]
        nutrition: bool,

        #[command(flatten)]
        recipe: RecipeArgs,
    },
}

#[derive(Args)]
struct RecipeArgs {
    /// Ingredients to use, comma separated or repeated
    #[arg(short, long = "ingredients", value_delimiter = ',', required = true)]
    ingredients: Vec<String>,

    #[arg(long, default_value = "Any")]
    cuisine: String,

    #[arg(long, default_value = "Dinner")]
    meal_type: String,

    #[arg(long)]
    style: Option<String>,

    #[arg(short, long, default_value_t = DEFAULT_SERVINGS)]
    servings: u32,

    #[arg(long)]
    vegetarian: bool,

    #[arg(long)]
    vegan: bool,

    #[arg(long)]
    pescatarian: bool,

    /// Allergies to avoid, comma separated
    #[arg(long, value_delimiter = ',')]
    allergies: Vec<String>,

    /// Free-form dietary instructions
    #[arg(long)]
    dietary_notes: Option<String>,
}

impl RecipeArgs {
    fn dietary_preferences(&self) -> Option<DietaryPreferences> {
        let preferences = DietaryPreferences {
            is_vegetarian: self.vegetarian,
            is_vegan: self.vegan,
            is_pescatarian: self.pescatarian,
            allergies: self.allergies.clone(),
            custom_instructions: self.dietary_notes.clone(),
        };
        (preferences != DietaryPreferences::default()).then_some(preferences)
    }

    fn ideas_params(&self) -> GenerateIdeasParams {
        GenerateIdeasParams {
            ingredients: self.ingredients.iter().map(|i| i.trim().to_string()).collect(),
            cuisine: self.cuisine.clone(),
            style: self.style.clone(),
            meal_type: self.meal_type.clone(),
            servings: self.servings,
            dietary_preferences: self.dietary_preferences(),
        }
    }
}

fn parse_ingredient(arg: &str) -> Result<RecipeIngredientInput, NutritionError> {
    let (name, amount) = arg.split_once('=').ok_or_else(|| {
        NutritionError::InvalidInput(format!("Expected NAME=AMOUNT, got '{}'", arg))
    })?;
    Ok(RecipeIngredientInput::new(name.trim(), amount.trim()))
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<(), NutritionError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let cli = Cli::parse();
    let config: NutritionConfig = match &cli.config {
        Some(path) => load_config_from(path)?,
        None => load_config()?,
    };
    debug!("Loaded configuration: {:?}", config);

    match cli.command {
        Command::Calculate {
            file,
            ingredients,
            servings,
            offline,
        } => {
            let request = match file {
                Some(path) => serde_json::from_str(&tokio::fs::read_to_string(path).await?)?,
                None => CalculateNutritionRequest::new(
                    ingredients
                        .iter()
                        .map(|arg| parse_ingredient(arg))
                        .collect::<Result<_, _>>()?,
                    servings,
                ),
            };

            let mut config = config;
            if offline {
                config.usda.enabled = false;
            }
            let calculator = RecipeNutritionCalculator::from_config(&config)?;
            let result = handle_calculate_request(&calculator, &request).await?;
            print_json(&result)?;
        }
        Command::Convert { amount, ingredient } => {
            println!("{}", UnitConverter::default().conversion_info(&amount, &ingredient));
        }
        Command::Format {
            name,
            amount,
            unit,
            grams,
        } => {
            println!("{}", format_ingredient_display(&name, &amount, &unit, grams));
        }
        Command::Lookup { name, fdc_id } => {
            let calculator = RecipeNutritionCalculator::from_config(&config)?;
            let cache = LookupCache::new(calculator.source());

            let output = match (fdc_id, name) {
                (Some(fdc_id), _) => json!({
                    "fdcId": fdc_id,
                    "per100g": cache.get_nutrition_by_id(fdc_id).await,
                }),
                (None, Some(name)) => {
                    let resolution = calculator.resolver().resolve(&name, &cache).await;
                    json!({
                        "ingredient": name,
                        "category": calculator.resolver().categories().categorize(&name),
                        "per100g": resolution.per_100g,
                        "source": resolution.provenance,
                    })
                }
                (None, None) => {
                    return Err(NutritionError::InvalidInput(
                        "Provide an ingredient name or --fdc-id".to_string(),
                    )
                    .into())
                }
            };
            print_json(&output)?;
        }
        Command::Ideas(args) => {
            let generator = RecipeGenerator::from_config(&config)?;
            let ideas = generator.generate_ideas(&args.ideas_params()).await?;
            print_json(&ideas)?;
        }
        Command::Recipe {
            name,
            time,
            difficulty,
            nutrition,
            recipe,
        } => {
            let ideas = recipe.ideas_params();
            let params = FullRecipeParams {
                recipe_name: name,
                ingredients: ideas.ingredients,
                cuisine: ideas.cuisine,
                style: ideas.style,
                meal_type: ideas.meal_type,
                servings: ideas.servings,
                estimated_time: time,
                difficulty,
                dietary_preferences: ideas.dietary_preferences,
            };

            let generator = RecipeGenerator::from_config(&config)?;
            let full_recipe = generator.generate_full_recipe(&params).await?;

            if nutrition {
                let calculator = RecipeNutritionCalculator::from_config(&config)?;
                let servings = full_recipe.servings.max(1);
                let result = calculator
                    .calculate(&full_recipe.nutrition_inputs(), servings)
                    .await?;
                print_json(&json!({ "recipe": full_recipe, "nutrition": result }))?;
            } else {
                print_json(&full_recipe)?;
            }
        }
    }

    Ok(())
}
