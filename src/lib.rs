//! Nutrition estimates for free-text recipe ingredients.
//!
//! Amounts such as "1 1/2 cups" are parsed and converted to grams, each
//! ingredient is matched against a curated table, FoodData Central, or a
//! category default, and the results are summed per recipe and per serving.
//!
//! ```no_run
//! # #[tokio::main]
//! # async fn main() -> Result<(), recipe_nutrition::NutritionError> {
//! use recipe_nutrition::{calculate_recipe_nutrition, RecipeIngredientInput};
//!
//! let result = calculate_recipe_nutrition(
//!     &[
//!         RecipeIngredientInput::new("chicken breast", "1 lb"),
//!         RecipeIngredientInput::new("olive oil", "2 tablespoons"),
//!     ],
//!     2,
//! )
//! .await?;
//! println!("{} kcal per serving", result.nutrition_per_serving.calories);
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod config;
pub mod error;
pub mod generation;
pub mod model;
pub mod nutrition;
pub mod providers;
pub mod request;

pub use builder::NutritionCalculatorBuilder;
pub use config::{load_config, NutritionConfig};
pub use error::NutritionError;
pub use model::{
    IngredientNutritionDetail, NutritionInfo, NutritionPer100g, NutritionResult, Provenance,
    RecipeIngredientInput,
};
pub use nutrition::{
    convert_to_grams, format_ingredient_display, format_ingredient_simple, parse_amount,
    ParsedAmount, RecipeNutritionCalculator,
};
pub use request::CalculateNutritionRequest;

use log::debug;

/// Calculate recipe nutrition using configuration from `config.toml` and the environment
pub async fn calculate_recipe_nutrition(
    ingredients: &[RecipeIngredientInput],
    servings: u32,
) -> Result<NutritionResult, NutritionError> {
    let config = load_config()?;
    let calculator = RecipeNutritionCalculator::from_config(&config)?;
    debug!("Calculating nutrition with source '{}'", calculator.source_name());
    calculator.calculate(ingredients, servings).await
}

/// Validate a request, then calculate it with the given calculator
pub async fn handle_calculate_request(
    calculator: &RecipeNutritionCalculator,
    request: &CalculateNutritionRequest,
) -> Result<NutritionResult, NutritionError> {
    request.validate()?;
    calculator
        .calculate(&request.ingredients, request.servings)
        .await
}
