//! Estimate nutrition for a small recipe
//!
//! Uses the built-in ingredient table and category defaults. Set
//! USDA_API_KEY to also look up unknown ingredients in FoodData Central.

use recipe_nutrition::{format_ingredient_display, RecipeIngredientInput, RecipeNutritionCalculator};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let ingredients = vec![
        RecipeIngredientInput::new("chicken breast", "1 lb"),
        RecipeIngredientInput::new("olive oil", "2 tablespoons"),
        RecipeIngredientInput::new("rice", "1 cup"),
        RecipeIngredientInput::new("garlic", "2 cloves"),
        RecipeIngredientInput::new("za'atar", "1 tsp"),
    ];

    let calculator = RecipeNutritionCalculator::builder().build()?;
    let result = calculator.calculate(&ingredients, 2).await?;

    println!("=== Ingredients ===");
    for detail in &result.details {
        let parsed = recipe_nutrition::parse_amount(&detail.amount);
        let line = format_ingredient_display(
            &detail.ingredient,
            &format!("{}", parsed.quantity),
            &parsed.unit,
            detail.grams,
        );
        println!("  {} [{}]", line, detail.source);
    }

    let total = result.nutrition_total;
    let serving = result.nutrition_per_serving;
    println!("\n=== Total ===");
    println!(
        "{} kcal, {}g protein, {}g carbs, {}g fat",
        total.calories, total.protein, total.carbs, total.fat
    );
    println!("\n=== Per serving ===");
    println!(
        "{} kcal, {}g protein, {}g carbs, {}g fat",
        serving.calories, serving.protein, serving.carbs, serving.fat
    );

    if !result.warnings.is_empty() {
        println!("\n=== Warnings ===");
        for warning in &result.warnings {
            println!("  - {}", warning);
        }
    }

    Ok(())
}
