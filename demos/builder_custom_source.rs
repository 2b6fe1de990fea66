//! Plug a custom nutrition source and mapping into the calculator
//!
//! Any type implementing `NutritionSource` can stand in for FoodData Central,
//! e.g. an in-house database or a fixture for tests.

use async_trait::async_trait;
use recipe_nutrition::nutrition::{ConversionTable, MappingTable, NutritionSource, UnitConverter};
use recipe_nutrition::{NutritionPer100g, RecipeIngredientInput, RecipeNutritionCalculator};

/// A tiny pantry database keyed by name
struct PantrySource;

#[async_trait]
impl NutritionSource for PantrySource {
    fn source_name(&self) -> &str {
        "pantry"
    }

    async fn search(&self, query: &str) -> Option<NutritionPer100g> {
        match query.to_lowercase().as_str() {
            "tahini" => Some(NutritionPer100g::new(595.0, 17.0, 21.0, 54.0)),
            "chickpeas" => Some(NutritionPer100g::new(164.0, 8.9, 27.4, 2.6)),
            _ => None,
        }
    }

    async fn by_id(&self, _food_id: u64) -> Option<NutritionPer100g> {
        None
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mapping = MappingTable::from_json(
        r#"[
            {"name": "lemon juice", "per100g": {"calories": 22, "protein": 0.4, "carbs": 6.9, "fat": 0.2}},
            {"name": "olive oil", "per100g": {"calories": 884, "protein": 0, "carbs": 0, "fat": 100}}
        ]"#,
    )?;

    let converter = UnitConverter::default().with_override(
        "tahini",
        ConversionTable::new()
            .with("cup", 240.0)
            .with("tablespoon", 15.0),
    );

    let calculator = RecipeNutritionCalculator::builder()
        .mapping(mapping)
        .converter(converter)
        .source(PantrySource)
        .build()?;

    let hummus = vec![
        RecipeIngredientInput::new("chickpeas", "400 g"),
        RecipeIngredientInput::new("tahini", "3 tbsp"),
        RecipeIngredientInput::new("lemon juice", "2 tablespoons"),
        RecipeIngredientInput::new("olive oil", "1 tbsp"),
        RecipeIngredientInput::new("garlic", "1 clove"),
    ];

    let result = calculator.calculate(&hummus, 6).await?;
    println!("{}", serde_json::to_string_pretty(&result)?);

    Ok(())
}
