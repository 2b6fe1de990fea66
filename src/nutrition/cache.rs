use log::debug;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, OnceCell};

use crate::model::NutritionPer100g;
use crate::nutrition::source::NutritionSource;

type Slot = Arc<OnceCell<Option<NutritionPer100g>>>;

/// Remote lookups memoized for the duration of one recipe calculation
///
/// Both hits and misses are remembered, so each distinct key reaches the
/// source at most once, even when ingredients are resolved concurrently.
/// The cache is never shared between calculations.
pub struct LookupCache<'a> {
    source: &'a dyn NutritionSource,
    slots: Mutex<HashMap<String, Slot>>,
}

impl<'a> LookupCache<'a> {
    pub fn new(source: &'a dyn NutritionSource) -> Self {
        LookupCache {
            source,
            slots: Mutex::new(HashMap::new()),
        }
    }

    pub async fn get_nutrition(&self, ingredient: &str) -> Option<NutritionPer100g> {
        let query = ingredient.trim();
        let slot = self.slot(query.to_lowercase()).await;
        *slot
            .get_or_init(|| async {
                debug!("Looking up '{}' via {}", query, self.source.source_name());
                self.source.search(query).await
            })
            .await
    }

    pub async fn get_nutrition_by_id(&self, food_id: u64) -> Option<NutritionPer100g> {
        let slot = self.slot(format!("fdc_{}", food_id)).await;
        *slot
            .get_or_init(|| async {
                debug!("Looking up food {} via {}", food_id, self.source.source_name());
                self.source.by_id(food_id).await
            })
            .await
    }

    /// Number of distinct keys looked up so far
    pub async fn len(&self) -> usize {
        self.slots.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.slots.lock().await.is_empty()
    }

    async fn slot(&self, key: String) -> Slot {
        let mut slots = self.slots.lock().await;
        slots.entry(key).or_default().clone()
    }
}
