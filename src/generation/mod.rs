//! Recipe ideas and full recipes from an LLM
//!
//! The provider returns free text; this module builds the prompts and coerces
//! the answers into typed values.

mod params;
mod parse;
mod prompts;

pub use params::{
    DietaryPreferences, FullRecipe, FullRecipeIngredient, FullRecipeParams, GenerateIdeasParams,
    RecipeIdea, DEFAULT_DIFFICULTY, DEFAULT_ESTIMATED_TIME, DEFAULT_SERVINGS,
};
pub use parse::{parse_full_recipe, parse_recipe_ideas};
pub use prompts::{full_recipe_prompt, ideas_prompt};

use log::info;

use crate::config::NutritionConfig;
use crate::error::NutritionError;
use crate::providers::{FallbackProvider, LlmProvider};

pub struct RecipeGenerator {
    provider: Box<dyn LlmProvider>,
}

impl RecipeGenerator {
    pub fn new(provider: Box<dyn LlmProvider>) -> Self {
        Self { provider }
    }

    /// Use the configured provider chain
    pub fn from_config(config: &NutritionConfig) -> Result<Self, NutritionError> {
        Ok(Self::new(Box::new(FallbackProvider::new(config)?)))
    }

    pub fn provider_name(&self) -> &str {
        self.provider.provider_name()
    }

    pub async fn generate_ideas(
        &self,
        params: &GenerateIdeasParams,
    ) -> Result<Vec<RecipeIdea>, NutritionError> {
        if params.ingredients.is_empty() {
            return Err(NutritionError::InvalidInput(
                "At least one ingredient is required".to_string(),
            ));
        }

        info!(
            "Generating {} {} ideas with {}",
            params.cuisine,
            params.meal_type,
            self.provider_name()
        );
        let text = self.provider.generate(&ideas_prompt(params)).await?;
        parse_recipe_ideas(&text)
    }

    pub async fn generate_full_recipe(
        &self,
        params: &FullRecipeParams,
    ) -> Result<FullRecipe, NutritionError> {
        info!(
            "Generating full recipe for '{}' with {}",
            params.recipe_name,
            self.provider_name()
        );
        let text = self.provider.generate(&full_recipe_prompt(params)).await?;
        parse_full_recipe(&text)
    }
}
