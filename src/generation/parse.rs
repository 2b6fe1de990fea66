use log::debug;
use serde::de::DeserializeOwned;

use crate::error::NutritionError;
use crate::generation::params::{FullRecipe, RecipeIdea};

/// Text from the first `open` to the last `close`, inclusive
///
/// Models tend to wrap JSON in markdown fences or add chatter around it.
fn outer_span(text: &str, open: char, close: char) -> Option<&str> {
    let start = text.find(open)?;
    let end = text.rfind(close)?;
    (end > start).then(|| &text[start..=end])
}

fn decode<T: DeserializeOwned>(
    text: &str,
    open: char,
    close: char,
    what: &str,
) -> Result<T, NutritionError> {
    let Some(json) = outer_span(text, open, close) else {
        debug!("Raw response: {}", text);
        return Err(NutritionError::GenerationError(format!(
            "No JSON {} found in response",
            what
        )));
    };

    serde_json::from_str(json).map_err(|e| {
        debug!("Raw response: {}", text);
        NutritionError::GenerationError(format!("Malformed {}: {}", what, e))
    })
}

pub fn parse_recipe_ideas(text: &str) -> Result<Vec<RecipeIdea>, NutritionError> {
    let ideas: Vec<RecipeIdea> = decode(text, '[', ']', "array")?;
    if ideas.len() != 3 {
        return Err(NutritionError::GenerationError(format!(
            "Did not receive exactly 3 recipe ideas (got {})",
            ideas.len()
        )));
    }
    Ok(ideas)
}

pub fn parse_full_recipe(text: &str) -> Result<FullRecipe, NutritionError> {
    decode(text, '{', '}', "object")
}
