use log::debug;

use crate::model::{IngredientNutritionDetail, RecipeIngredientInput};
use crate::nutrition::cache::LookupCache;
use crate::nutrition::resolver::NutritionResolver;
use crate::nutrition::units::UnitConverter;

/// Nutrition of a single ingredient line.
///
/// An amount that cannot be converted to a positive gram weight yields a
/// `failed` detail without consulting any nutrition source.
pub async fn calculate_ingredient(
    converter: &UnitConverter,
    resolver: &NutritionResolver,
    ingredient: &RecipeIngredientInput,
    cache: &LookupCache<'_>,
) -> IngredientNutritionDetail {
    let grams = match converter.convert_to_grams(&ingredient.amount, &ingredient.name) {
        Some(grams) if grams.is_finite() && grams > 0.0 => grams,
        _ => {
            debug!(
                "Could not convert '{}' of '{}' to grams",
                ingredient.amount, ingredient.name
            );
            return IngredientNutritionDetail::failed(ingredient);
        }
    };

    let resolution = resolver.resolve(&ingredient.name, cache).await;
    let nutrition = resolution.per_100g.scale_to(grams);

    debug!(
        "{} ({}) = {:.1}g via {}",
        ingredient.name, ingredient.amount, grams, resolution.provenance
    );

    IngredientNutritionDetail {
        ingredient: ingredient.name.clone(),
        amount: ingredient.amount.clone(),
        grams: Some(grams),
        nutrition: Some(nutrition),
        source: resolution.provenance,
    }
}
