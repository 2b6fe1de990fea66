use serde::{Deserialize, Serialize};

use crate::error::NutritionError;
use crate::model::RecipeIngredientInput;

pub const MAX_SERVINGS: u32 = 100;

/// Body of a "calculate nutrition" request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculateNutritionRequest {
    #[serde(default)]
    pub ingredients: Vec<RecipeIngredientInput>,
    pub servings: u32,
}

impl CalculateNutritionRequest {
    pub fn new(ingredients: Vec<RecipeIngredientInput>, servings: u32) -> Self {
        Self {
            ingredients,
            servings,
        }
    }

    /// Check the request before it reaches the pipeline
    pub fn validate(&self) -> Result<(), NutritionError> {
        if self.ingredients.is_empty() {
            return Err(NutritionError::InvalidInput(
                "Ingredients array is required".to_string(),
            ));
        }

        if !(1..=MAX_SERVINGS).contains(&self.servings) {
            return Err(NutritionError::InvalidInput(
                "Servings must be between 1 and 100".to_string(),
            ));
        }

        if self
            .ingredients
            .iter()
            .any(|i| i.name.trim().is_empty() || i.amount.trim().is_empty())
        {
            return Err(NutritionError::InvalidInput(
                "Each ingredient must have a name and amount".to_string(),
            ));
        }

        Ok(())
    }
}
