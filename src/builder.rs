use std::path::PathBuf;
use std::time::Duration;

use crate::config::NutritionConfig;
use crate::error::NutritionError;
use crate::nutrition::category::CategoryRules;
use crate::nutrition::mapping::MappingTable;
use crate::nutrition::resolver::NutritionResolver;
use crate::nutrition::source::{NutritionSource, OfflineSource};
use crate::nutrition::units::UnitConverter;
use crate::nutrition::usda::{UsdaClient, DEFAULT_USDA_BASE_URL};
use crate::RecipeNutritionCalculator;

const DEFAULT_USDA_TIMEOUT: Duration = Duration::from_secs(10);

/// Builder for configuring a [`RecipeNutritionCalculator`]
///
/// Without further settings the calculator uses the built-in tables and
/// queries FoodData Central with the key from `USDA_API_KEY`, if any.
#[derive(Default)]
pub struct NutritionCalculatorBuilder {
    usda_api_key: Option<String>,
    usda_base_url: Option<String>,
    timeout: Option<Duration>,
    mapping: Option<MappingTable>,
    mapping_file: Option<PathBuf>,
    categories: Option<CategoryRules>,
    converter: Option<UnitConverter>,
    source: Option<Box<dyn NutritionSource>>,
    offline: bool,
}

impl NutritionCalculatorBuilder {
    /// Seed a builder from loaded configuration
    pub fn from_config(config: &NutritionConfig) -> Self {
        let mut builder = Self::default().timeout(Duration::from_secs(config.usda.timeout));
        builder.usda_base_url = Some(config.usda.base_url.clone());
        builder.usda_api_key = config.usda.api_key.clone();
        builder.mapping_file = config.mapping_file.as_ref().map(PathBuf::from);
        builder.offline = !config.usda.enabled;
        builder
    }

    /// Set the FoodData Central API key
    ///
    /// # Example
    /// ```
    /// use recipe_nutrition::RecipeNutritionCalculator;
    ///
    /// let builder = RecipeNutritionCalculator::builder()
    ///     .usda_api_key("your-api-key");
    /// ```
    pub fn usda_api_key(mut self, key: impl Into<String>) -> Self {
        self.usda_api_key = Some(key.into());
        self
    }

    /// Point the USDA client at another host (a proxy or a test server)
    pub fn usda_base_url(mut self, url: impl Into<String>) -> Self {
        self.usda_base_url = Some(url.into());
        self
    }

    /// Set the timeout for each remote nutrition lookup
    ///
    /// # Example
    /// ```
    /// use recipe_nutrition::RecipeNutritionCalculator;
    /// use std::time::Duration;
    ///
    /// let builder = RecipeNutritionCalculator::builder()
    ///     .timeout(Duration::from_secs(5));
    /// ```
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    /// Replace the built-in ingredient mapping
    pub fn mapping(mut self, mapping: MappingTable) -> Self {
        self.mapping = Some(mapping);
        self
    }

    /// Load the ingredient mapping from a JSON file when building
    pub fn mapping_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.mapping_file = Some(path.into());
        self
    }

    /// Replace the category keyword rules used for default nutrition
    pub fn categories(mut self, categories: CategoryRules) -> Self {
        self.categories = Some(categories);
        self
    }

    /// Replace the unit conversion tables
    pub fn converter(mut self, converter: UnitConverter) -> Self {
        self.converter = Some(converter);
        self
    }

    /// Use a custom remote nutrition source instead of FoodData Central
    pub fn source(mut self, source: impl NutritionSource + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Skip remote lookups entirely
    pub fn offline(mut self) -> Self {
        self.offline = true;
        self
    }

    /// Build the calculator
    ///
    /// # Errors
    /// Returns `NutritionError` if:
    /// - the timeout is zero
    /// - both a mapping and a mapping file were given
    /// - the mapping file cannot be read or parsed
    /// - the HTTP client cannot be created
    pub fn build(self) -> Result<RecipeNutritionCalculator, NutritionError> {
        let timeout = self.timeout.unwrap_or(DEFAULT_USDA_TIMEOUT);
        if timeout.is_zero() {
            return Err(NutritionError::BuilderError(
                "Timeout must be greater than zero".to_string(),
            ));
        }

        let mapping = match (self.mapping, self.mapping_file) {
            (Some(_), Some(_)) => {
                return Err(NutritionError::BuilderError(
                    "Use either .mapping() or .mapping_file(), not both".to_string(),
                ))
            }
            (Some(mapping), None) => mapping,
            (None, Some(path)) => MappingTable::from_file(path)?,
            (None, None) => MappingTable::builtin(),
        };

        let source: Box<dyn NutritionSource> = match self.source {
            Some(source) => source,
            None if self.offline => Box::new(OfflineSource),
            None => {
                let api_key = self
                    .usda_api_key
                    .or_else(|| std::env::var("USDA_API_KEY").ok());
                let base_url = self
                    .usda_base_url
                    .unwrap_or_else(|| DEFAULT_USDA_BASE_URL.to_string());
                Box::new(UsdaClient::new(api_key, base_url, timeout)?)
            }
        };

        Ok(RecipeNutritionCalculator::new(
            self.converter.unwrap_or_default(),
            NutritionResolver::new(mapping, self.categories.unwrap_or_default()),
            source,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RecipeIngredientInput;

    #[test]
    fn test_builder_defaults_to_usda() {
        let calculator = RecipeNutritionCalculator::builder()
            .usda_api_key("test-key")
            .build()
            .unwrap();
        assert_eq!(calculator.source_name(), "usda");
    }

    #[test]
    fn test_builder_offline() {
        let calculator = RecipeNutritionCalculator::builder().offline().build().unwrap();
        assert_eq!(calculator.source_name(), "offline");
    }

    #[test]
    fn test_builder_zero_timeout() {
        let result = RecipeNutritionCalculator::builder()
            .timeout(Duration::ZERO)
            .build();
        assert!(matches!(result, Err(NutritionError::BuilderError(_))));
    }

    #[test]
    fn test_builder_conflicting_mappings() {
        let result = RecipeNutritionCalculator::builder()
            .mapping(MappingTable::builtin())
            .mapping_file("mapping.json")
            .build();
        assert!(matches!(result, Err(NutritionError::BuilderError(_))));
    }

    #[test]
    fn test_builder_missing_mapping_file() {
        let result = RecipeNutritionCalculator::builder()
            .mapping_file("/nonexistent/mapping.json")
            .build();
        assert!(matches!(result, Err(NutritionError::IoError(_))));
    }

    #[test]
    fn test_from_config_respects_disabled_usda() {
        let mut config = NutritionConfig::default();
        config.usda.enabled = false;
        let calculator = RecipeNutritionCalculator::from_config(&config).unwrap();
        assert_eq!(calculator.source_name(), "offline");
    }

    #[tokio::test]
    async fn test_custom_mapping_is_used() {
        let mapping = MappingTable::from_json(
            r#"[{"name": "jackfruit", "per100g": {"calories": 95, "protein": 1.7, "carbs": 23, "fat": 0.6}}]"#,
        )
        .unwrap();
        let calculator = RecipeNutritionCalculator::builder()
            .offline()
            .mapping(mapping)
            .build()
            .unwrap();

        let result = calculator
            .calculate(&[RecipeIngredientInput::new("young jackfruit", "200 g")], 1)
            .await
            .unwrap();
        assert_eq!(result.nutrition_total.calories, 190);
        assert!(result.warnings.is_empty());
    }
}
