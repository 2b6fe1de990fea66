use futures::future::join_all;
use log::{debug, info};

use crate::builder::NutritionCalculatorBuilder;
use crate::config::NutritionConfig;
use crate::error::NutritionError;
use crate::model::{NutritionInfo, NutritionResult, RecipeIngredientInput};
use crate::nutrition::cache::LookupCache;
use crate::nutrition::ingredient::calculate_ingredient;
use crate::nutrition::resolver::NutritionResolver;
use crate::nutrition::source::{NutritionSource, OfflineSource};
use crate::nutrition::units::UnitConverter;

/// Recipe-level nutrition pipeline
///
/// Owns the conversion tables, the resolution chain and the remote source.
/// Each [`calculate`](Self::calculate) call gets its own lookup cache.
pub struct RecipeNutritionCalculator {
    converter: UnitConverter,
    resolver: NutritionResolver,
    source: Box<dyn NutritionSource>,
}

impl Default for RecipeNutritionCalculator {
    /// Built-in tables and no remote lookups
    fn default() -> Self {
        Self::new(
            UnitConverter::default(),
            NutritionResolver::default(),
            Box::new(OfflineSource),
        )
    }
}

impl RecipeNutritionCalculator {
    pub fn new(
        converter: UnitConverter,
        resolver: NutritionResolver,
        source: Box<dyn NutritionSource>,
    ) -> Self {
        Self {
            converter,
            resolver,
            source,
        }
    }

    /// Start configuring a calculator
    ///
    /// # Example
    /// ```
    /// use recipe_nutrition::RecipeNutritionCalculator;
    ///
    /// let calculator = RecipeNutritionCalculator::builder()
    ///     .offline()
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(calculator.source_name(), "offline");
    /// ```
    pub fn builder() -> NutritionCalculatorBuilder {
        NutritionCalculatorBuilder::default()
    }

    /// Build a calculator from loaded configuration
    pub fn from_config(config: &NutritionConfig) -> Result<Self, NutritionError> {
        NutritionCalculatorBuilder::from_config(config).build()
    }

    pub fn converter(&self) -> &UnitConverter {
        &self.converter
    }

    pub fn resolver(&self) -> &NutritionResolver {
        &self.resolver
    }

    pub fn source(&self) -> &dyn NutritionSource {
        self.source.as_ref()
    }

    pub fn source_name(&self) -> &str {
        self.source.source_name()
    }

    /// Estimate total and per-serving nutrition for a recipe.
    ///
    /// Individual ingredients never fail the call: they are reported through
    /// `warnings` and their `details` entry. Only `servings == 0` is rejected.
    pub async fn calculate(
        &self,
        ingredients: &[RecipeIngredientInput],
        servings: u32,
    ) -> Result<NutritionResult, NutritionError> {
        if servings == 0 {
            return Err(NutritionError::InvalidInput(
                "Servings must be at least 1".to_string(),
            ));
        }

        let cache = LookupCache::new(self.source.as_ref());
        let details = join_all(ingredients.iter().map(|ingredient| {
            calculate_ingredient(&self.converter, &self.resolver, ingredient, &cache)
        }))
        .await;

        let mut total = NutritionInfo::default();
        let mut warnings = Vec::new();
        for detail in &details {
            if let Some(nutrition) = &detail.nutrition {
                total += nutrition;
            }
            if let Some(warning) = detail.warning() {
                warnings.push(warning);
            }
        }

        debug!(
            "Resolved {} ingredients with {} remote lookups",
            details.len(),
            cache.len().await
        );
        info!(
            "Recipe total: {} kcal, {}g protein, {}g carbs, {}g fat ({} warnings)",
            total.calories,
            total.protein,
            total.carbs,
            total.fat,
            warnings.len()
        );

        Ok(NutritionResult {
            nutrition_total: total,
            nutrition_per_serving: total.per_serving(servings),
            warnings,
            details,
        })
    }
}
