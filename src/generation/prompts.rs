use crate::generation::params::{DietaryPreferences, FullRecipeParams, GenerateIdeasParams};

fn dietary_line(preferences: Option<&DietaryPreferences>) -> String {
    let restrictions = preferences
        .map(DietaryPreferences::restrictions)
        .unwrap_or_default();
    if restrictions.is_empty() {
        String::new()
    } else {
        format!("\nDietary restrictions: {}", restrictions.join(", "))
    }
}

pub fn ideas_prompt(params: &GenerateIdeasParams) -> String {
    let style = params
        .style
        .as_deref()
        .map(|style| format!("Recipe style: {}", style))
        .unwrap_or_default();

    format!(
        r#"You are a professional chef and recipe creator. Generate exactly 3 unique and creative {cuisine} {meal_type} recipe ideas using the following ingredients: {ingredients}.
{style}
Servings: {servings}{dietary}

For each recipe idea, provide:
1. A creative and appetizing recipe name
2. A brief 2-3 sentence description highlighting what makes it special
3. Estimated cooking time (e.g., "30 minutes", "1 hour")
4. Difficulty level (Easy, Medium, or Hard)

Format your response as a JSON array with exactly 3 objects, each having these fields:
- name: string
- description: string
- estimatedTime: string
- difficulty: string

IMPORTANT: Return ONLY the JSON array, no other text or explanation."#,
        cuisine = params.cuisine,
        meal_type = params.meal_type.to_lowercase(),
        ingredients = params.ingredients.join(", "),
        style = style,
        servings = params.servings,
        dietary = dietary_line(params.dietary_preferences.as_ref()),
    )
}

pub fn full_recipe_prompt(params: &FullRecipeParams) -> String {
    let style = params
        .style
        .as_deref()
        .map(|style| format!("- Style: {}", style))
        .unwrap_or_default();

    format!(
        r#"You are a professional chef. Create a complete, detailed recipe for "{name}".

Recipe requirements:
- Cuisine: {cuisine}
{style}
- Meal type: {meal_type}
- Servings: {servings}
- Estimated time: {time}
- Difficulty: {difficulty}
- Must use these ingredients: {ingredients}{dietary}

Provide a detailed recipe with:
1. A compelling 2-3 sentence description
2. Complete ingredients list with specific amounts and units
3. Step-by-step cooking instructions (be detailed and clear)

Format your response as JSON with these fields:
{{
  "name": string (the recipe name),
  "description": string,
  "ingredients": array of objects with {{ "name": string, "amount": string, "unit": string }},
  "instructions": array of strings (each step as a separate string),
  "cookTime": string,
  "difficulty": string,
  "servings": number,
  "cuisineType": string,
  "recipeStyle": string
}}

IMPORTANT:
- Be precise with ingredient amounts (e.g., "2", "1/2", "1.5")
- Use standard units (cup, tablespoon, teaspoon, ounce, pound, gram, whole, clove, etc.)
- Return ONLY the JSON object, no other text or explanation."#,
        name = params.recipe_name,
        cuisine = params.cuisine,
        style = style,
        meal_type = params.meal_type,
        servings = params.servings,
        time = params.estimated_time,
        difficulty = params.difficulty,
        ingredients = params.ingredients.join(", "),
        dietary = dietary_line(params.dietary_preferences.as_ref()),
    )
}
