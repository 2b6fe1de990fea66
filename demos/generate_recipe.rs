//! Generate recipe ideas, expand the first one and estimate its nutrition
//!
//! Requires GOOGLE_API_KEY (or a configured provider in config.toml).

use recipe_nutrition::generation::{FullRecipeParams, GenerateIdeasParams, RecipeGenerator};
use recipe_nutrition::{load_config, RecipeNutritionCalculator};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = load_config()?;
    let generator = RecipeGenerator::from_config(&config)?;

    let params = GenerateIdeasParams {
        ingredients: vec!["salmon".into(), "spinach".into(), "rice".into()],
        cuisine: "Japanese".into(),
        style: None,
        meal_type: "Dinner".into(),
        servings: 2,
        dietary_preferences: None,
    };

    let ideas = generator.generate_ideas(&params).await?;
    for idea in &ideas {
        println!("- {} ({}, {}): {}", idea.name, idea.estimated_time, idea.difficulty, idea.description);
    }

    let recipe = generator
        .generate_full_recipe(&FullRecipeParams::from_idea(&ideas[0], &params))
        .await?;
    println!("\n{}", recipe.name);
    for (step, instruction) in recipe.instructions.iter().enumerate() {
        println!("{}. {}", step + 1, instruction);
    }

    let calculator = RecipeNutritionCalculator::from_config(&config)?;
    let nutrition = calculator
        .calculate(&recipe.nutrition_inputs(), recipe.servings.max(1))
        .await?;
    println!(
        "\nPer serving: {} kcal, {}g protein",
        nutrition.nutrition_per_serving.calories, nutrition.nutrition_per_serving.protein
    );
    for warning in &nutrition.warnings {
        println!("  ! {}", warning);
    }

    Ok(())
}
