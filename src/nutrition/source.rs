use async_trait::async_trait;

use crate::model::NutritionPer100g;

/// A remote nutrition database
///
/// Implementations swallow their own failures: a network error, a bad
/// response or missing credentials all read as "no data".
#[async_trait]
pub trait NutritionSource: Send + Sync {
    /// Short name used in logs (e.g. "usda")
    fn source_name(&self) -> &str;

    /// Per-100g nutrition of the best match for a free-text food name
    async fn search(&self, query: &str) -> Option<NutritionPer100g>;

    /// Per-100g nutrition of a food by its database identifier
    async fn by_id(&self, food_id: u64) -> Option<NutritionPer100g>;
}

/// Source that never has data; used when remote lookups are disabled
#[derive(Debug, Default, Clone, Copy)]
pub struct OfflineSource;

#[async_trait]
impl NutritionSource for OfflineSource {
    fn source_name(&self) -> &str {
        "offline"
    }

    async fn search(&self, _query: &str) -> Option<NutritionPer100g> {
        None
    }

    async fn by_id(&self, _food_id: u64) -> Option<NutritionPer100g> {
        None
    }
}
