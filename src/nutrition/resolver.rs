use log::debug;

use crate::model::{NutritionPer100g, Provenance};
use crate::nutrition::cache::LookupCache;
use crate::nutrition::category::CategoryRules;
use crate::nutrition::mapping::MappingTable;

/// Per-100g nutrition together with the step that produced it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolution {
    pub per_100g: NutritionPer100g,
    pub provenance: Provenance,
}

/// Ordered chain of nutrition sources: curated mapping, remote lookup, category default
///
/// Always yields a value; the category default cannot fail.
#[derive(Debug, Clone, Default)]
pub struct NutritionResolver {
    mapping: MappingTable,
    categories: CategoryRules,
}

impl NutritionResolver {
    pub fn new(mapping: MappingTable, categories: CategoryRules) -> Self {
        Self {
            mapping,
            categories,
        }
    }

    pub fn from_mapping(mapping: MappingTable) -> Self {
        Self::new(mapping, CategoryRules::default())
    }

    pub fn mapping(&self) -> &MappingTable {
        &self.mapping
    }

    pub fn categories(&self) -> &CategoryRules {
        &self.categories
    }

    pub async fn resolve(&self, ingredient: &str, cache: &LookupCache<'_>) -> Resolution {
        if let Some(per_100g) = self.mapping.lookup(ingredient) {
            return Resolution {
                per_100g,
                provenance: Provenance::Mapping,
            };
        }

        if !ingredient.trim().is_empty() {
            if let Some(per_100g) = cache.get_nutrition(ingredient).await {
                return Resolution {
                    per_100g,
                    provenance: Provenance::Usda,
                };
            }
        }

        let category = self.categories.categorize(ingredient);
        debug!("Using {:?} defaults for '{}'", category, ingredient);
        Resolution {
            per_100g: category.default_nutrition(),
            provenance: Provenance::Default,
        }
    }
}
