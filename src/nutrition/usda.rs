//! USDA FoodData Central lookup
//!
//! Searches foods by name (first candidate only) or fetches one by its FDC id,
//! and reduces the nutrient list to calories, protein, carbohydrate and fat
//! per 100 g. <https://fdc.nal.usda.gov/api-guide.html>

use async_trait::async_trait;
use log::{debug, error, warn};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::config::UsdaConfig;
use crate::error::NutritionError;
use crate::model::NutritionPer100g;
use crate::nutrition::source::NutritionSource;

pub const DEFAULT_USDA_BASE_URL: &str = "https://api.nal.usda.gov/fdc/v1";

// Standardized FoodData Central nutrient ids
const ENERGY_KCAL: u32 = 1008;
const PROTEIN: u32 = 1003;
const CARBOHYDRATE: u32 = 1005;
const TOTAL_FAT: u32 = 1004;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsdaFood {
    pub fdc_id: u64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub data_type: Option<String>,
    #[serde(default)]
    pub food_nutrients: Vec<UsdaNutrient>,
}

/// Nutrient row; search results use the flat shape, food details the nested one
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsdaNutrient {
    #[serde(default)]
    pub nutrient_id: Option<u32>,
    #[serde(default)]
    pub nutrient_name: Option<String>,
    #[serde(default)]
    pub value: Option<f64>,
    #[serde(default)]
    pub unit_name: Option<String>,
    #[serde(default)]
    pub nutrient: Option<NutrientRef>,
    #[serde(default)]
    pub amount: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutrientRef {
    pub id: u32,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub unit_name: Option<String>,
}

impl UsdaNutrient {
    fn id(&self) -> Option<u32> {
        self.nutrient_id
            .or_else(|| self.nutrient.as_ref().map(|nutrient| nutrient.id))
    }

    fn quantity(&self) -> Option<f64> {
        self.value.or(self.amount)
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    foods: Vec<UsdaFood>,
}

/// Reduce a food record to the four tracked nutrients; missing ones read as 0.
pub fn extract_nutrition_per_100g(food: &UsdaFood) -> NutritionPer100g {
    let find = |id: u32| {
        food.food_nutrients
            .iter()
            .find(|nutrient| nutrient.id() == Some(id))
            .and_then(UsdaNutrient::quantity)
            .filter(|value| value.is_finite() && *value > 0.0)
            .unwrap_or(0.0)
    };

    NutritionPer100g {
        calories: find(ENERGY_KCAL),
        protein: find(PROTEIN),
        carbs: find(CARBOHYDRATE),
        fat: find(TOTAL_FAT),
    }
}

pub struct UsdaClient {
    client: Client,
    api_key: Option<String>,
    base_url: String,
}

impl UsdaClient {
    /// Create a client; every request is bounded by `timeout`.
    pub fn new(
        api_key: Option<String>,
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, NutritionError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent("recipe-nutrition/0.1")
            .build()?;

        Ok(UsdaClient {
            client,
            api_key: api_key.filter(|key| !key.trim().is_empty()),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Create a client from configuration, falling back to the USDA_API_KEY variable
    pub fn from_config(config: &UsdaConfig) -> Result<Self, NutritionError> {
        let api_key = config
            .api_key
            .clone()
            .or_else(|| std::env::var("USDA_API_KEY").ok());

        Self::new(
            api_key,
            config.base_url.clone(),
            Duration::from_secs(config.timeout),
        )
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    fn api_key(&self) -> Option<&str> {
        let key = self.api_key.as_deref();
        if key.is_none() {
            warn!("USDA_API_KEY is not configured");
        }
        key
    }

    /// First search candidate for `query`, or `None` when nothing matched
    pub async fn search_food(&self, query: &str) -> Result<Option<UsdaFood>, NutritionError> {
        let Some(api_key) = self.api_key() else {
            return Ok(None);
        };

        debug!("Searching USDA for '{}'", query);
        let response = self
            .client
            .get(format!("{}/foods/search", self.base_url))
            .query(&[("query", query), ("pageSize", "1"), ("api_key", api_key)])
            .send()
            .await?;

        if !response.status().is_success() {
            warn!("USDA API error: {}", response.status());
            return Ok(None);
        }

        let body: SearchResponse = response.json().await?;
        Ok(body.foods.into_iter().next())
    }

    pub async fn food_by_id(&self, fdc_id: u64) -> Result<Option<UsdaFood>, NutritionError> {
        let Some(api_key) = self.api_key() else {
            return Ok(None);
        };

        debug!("Fetching USDA food {}", fdc_id);
        let response = self
            .client
            .get(format!("{}/food/{}", self.base_url, fdc_id))
            .query(&[("api_key", api_key)])
            .send()
            .await?;

        if !response.status().is_success() {
            warn!("USDA API error: {}", response.status());
            return Ok(None);
        }

        Ok(Some(response.json().await?))
    }
}

#[async_trait]
impl NutritionSource for UsdaClient {
    fn source_name(&self) -> &str {
        "usda"
    }

    async fn search(&self, query: &str) -> Option<NutritionPer100g> {
        match self.search_food(query).await {
            Ok(food) => food.map(|food| {
                debug!("USDA matched '{}' to '{}' ({})", query, food.description, food.fdc_id);
                extract_nutrition_per_100g(&food)
            }),
            Err(e) => {
                error!("Error searching USDA database for '{}': {}", query, e);
                None
            }
        }
    }

    async fn by_id(&self, food_id: u64) -> Option<NutritionPer100g> {
        match self.food_by_id(food_id).await {
            Ok(food) => food.map(|food| extract_nutrition_per_100g(&food)),
            Err(e) => {
                error!("Error fetching USDA food {}: {}", food_id, e);
                None
            }
        }
    }
}
