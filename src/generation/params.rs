use serde::{Deserialize, Serialize};

use crate::model::RecipeIngredientInput;

pub const DEFAULT_SERVINGS: u32 = 4;
pub const DEFAULT_ESTIMATED_TIME: &str = "30 minutes";
pub const DEFAULT_DIFFICULTY: &str = "Medium";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DietaryPreferences {
    #[serde(default)]
    pub is_vegetarian: bool,
    #[serde(default)]
    pub is_vegan: bool,
    #[serde(default)]
    pub is_pescatarian: bool,
    #[serde(default)]
    pub allergies: Vec<String>,
    #[serde(default)]
    pub custom_instructions: Option<String>,
}

impl DietaryPreferences {
    /// Restrictions in prompt order; empty when nothing applies
    pub fn restrictions(&self) -> Vec<String> {
        let mut restrictions = Vec::new();
        if self.is_vegetarian {
            restrictions.push("vegetarian".to_string());
        }
        if self.is_vegan {
            restrictions.push("vegan".to_string());
        }
        if self.is_pescatarian {
            restrictions.push("pescatarian".to_string());
        }
        if !self.allergies.is_empty() {
            restrictions.push(format!("no {}", self.allergies.join(", ")));
        }
        if let Some(custom) = self
            .custom_instructions
            .as_deref()
            .filter(|custom| !custom.trim().is_empty())
        {
            restrictions.push(custom.to_string());
        }
        restrictions
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateIdeasParams {
    pub ingredients: Vec<String>,
    pub cuisine: String,
    #[serde(default)]
    pub style: Option<String>,
    pub meal_type: String,
    #[serde(default = "default_servings")]
    pub servings: u32,
    #[serde(default)]
    pub dietary_preferences: Option<DietaryPreferences>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FullRecipeParams {
    pub recipe_name: String,
    pub ingredients: Vec<String>,
    pub cuisine: String,
    #[serde(default)]
    pub style: Option<String>,
    pub meal_type: String,
    #[serde(default = "default_servings")]
    pub servings: u32,
    #[serde(default = "default_estimated_time")]
    pub estimated_time: String,
    #[serde(default = "default_difficulty")]
    pub difficulty: String,
    #[serde(default)]
    pub dietary_preferences: Option<DietaryPreferences>,
}

impl FullRecipeParams {
    /// Expand one of the ideas produced for `ideas`
    pub fn from_idea(idea: &RecipeIdea, ideas: &GenerateIdeasParams) -> Self {
        Self {
            recipe_name: idea.name.clone(),
            ingredients: ideas.ingredients.clone(),
            cuisine: ideas.cuisine.clone(),
            style: ideas.style.clone(),
            meal_type: ideas.meal_type.clone(),
            servings: ideas.servings,
            estimated_time: idea.estimated_time.clone(),
            difficulty: idea.difficulty.clone(),
            dietary_preferences: ideas.dietary_preferences.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeIdea {
    pub name: String,
    pub description: String,
    #[serde(default = "default_estimated_time")]
    pub estimated_time: String,
    #[serde(default = "default_difficulty")]
    pub difficulty: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FullRecipeIngredient {
    pub name: String,
    #[serde(default)]
    pub amount: String,
    #[serde(default)]
    pub unit: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FullRecipe {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub ingredients: Vec<FullRecipeIngredient>,
    #[serde(default)]
    pub instructions: Vec<String>,
    #[serde(default = "default_estimated_time")]
    pub cook_time: String,
    #[serde(default = "default_difficulty")]
    pub difficulty: String,
    #[serde(default = "default_servings")]
    pub servings: u32,
    #[serde(default)]
    pub cuisine_type: String,
    #[serde(default)]
    pub recipe_style: String,
}

impl FullRecipe {
    /// Ingredient lines in the shape the nutrition pipeline consumes
    pub fn nutrition_inputs(&self) -> Vec<RecipeIngredientInput> {
        self.ingredients
            .iter()
            .map(|ingredient| {
                let amount = format!("{} {}", ingredient.amount.trim(), ingredient.unit.trim());
                RecipeIngredientInput::new(ingredient.name.trim(), amount.trim())
            })
            .collect()
    }
}

fn default_servings() -> u32 {
    DEFAULT_SERVINGS
}

fn default_estimated_time() -> String {
    DEFAULT_ESTIMATED_TIME.to_string()
}

fn default_difficulty() -> String {
    DEFAULT_DIFFICULTY.to_string()
}
