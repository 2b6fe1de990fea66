use serde::Deserialize;
use std::path::Path;

use crate::error::NutritionError;
use crate::model::NutritionPer100g;

// Longer names come before shorter names they contain so substring matching
// reaches the specific entry first.
const BUILTIN_MAPPINGS: &[(&str, NutritionPer100g)] = &[
    // proteins
    ("chicken breast", NutritionPer100g::new(165.0, 31.0, 0.0, 3.6)),
    ("chicken thigh", NutritionPer100g::new(209.0, 26.0, 0.0, 10.9)),
    ("ground beef", NutritionPer100g::new(254.0, 17.2, 0.0, 20.0)),
    ("ground turkey", NutritionPer100g::new(189.0, 27.0, 0.0, 8.3)),
    ("pork loin", NutritionPer100g::new(242.0, 27.0, 0.0, 14.0)),
    ("salmon", NutritionPer100g::new(208.0, 20.0, 0.0, 13.0)),
    ("shrimp", NutritionPer100g::new(99.0, 24.0, 0.2, 0.3)),
    ("tuna", NutritionPer100g::new(132.0, 28.0, 0.0, 1.3)),
    ("eggplant", NutritionPer100g::new(25.0, 1.0, 6.0, 0.2)),
    ("egg", NutritionPer100g::new(143.0, 12.6, 0.7, 9.5)),
    ("tofu", NutritionPer100g::new(76.0, 8.0, 1.9, 4.8)),
    // fats
    ("olive oil", NutritionPer100g::new(884.0, 0.0, 0.0, 100.0)),
    ("vegetable oil", NutritionPer100g::new(884.0, 0.0, 0.0, 100.0)),
    ("butter", NutritionPer100g::new(717.0, 0.9, 0.1, 81.0)),
    ("avocado", NutritionPer100g::new(160.0, 2.0, 8.5, 14.7)),
    // grains, dry weight
    ("brown rice", NutritionPer100g::new(370.0, 7.9, 77.0, 2.9)),
    ("rice", NutritionPer100g::new(365.0, 7.1, 80.0, 0.7)),
    ("spaghetti", NutritionPer100g::new(371.0, 13.0, 75.0, 1.5)),
    ("pasta", NutritionPer100g::new(371.0, 13.0, 75.0, 1.5)),
    ("quinoa", NutritionPer100g::new(368.0, 14.0, 64.0, 6.0)),
    ("oats", NutritionPer100g::new(389.0, 16.9, 66.0, 6.9)),
    ("bread", NutritionPer100g::new(265.0, 9.0, 49.0, 3.2)),
    ("flour", NutritionPer100g::new(364.0, 10.0, 76.0, 1.0)),
    // sweeteners
    ("brown sugar", NutritionPer100g::new(380.0, 0.1, 98.0, 0.0)),
    ("sugar", NutritionPer100g::new(387.0, 0.0, 100.0, 0.0)),
    ("honey", NutritionPer100g::new(304.0, 0.3, 82.0, 0.0)),
    // dairy
    ("milk", NutritionPer100g::new(61.0, 3.2, 4.8, 3.3)),
    ("cheddar cheese", NutritionPer100g::new(403.0, 25.0, 1.3, 33.0)),
    ("parmesan", NutritionPer100g::new(431.0, 38.0, 4.1, 29.0)),
    ("greek yogurt", NutritionPer100g::new(59.0, 10.0, 3.6, 0.4)),
    // vegetables
    ("broccoli", NutritionPer100g::new(34.0, 2.8, 7.0, 0.4)),
    ("spinach", NutritionPer100g::new(23.0, 2.9, 3.6, 0.4)),
    ("carrot", NutritionPer100g::new(41.0, 0.9, 10.0, 0.2)),
    ("onion", NutritionPer100g::new(40.0, 1.1, 9.3, 0.1)),
    ("garlic", NutritionPer100g::new(149.0, 6.4, 33.0, 0.5)),
    ("tomato", NutritionPer100g::new(18.0, 0.9, 3.9, 0.2)),
    ("bell pepper", NutritionPer100g::new(31.0, 1.0, 6.0, 0.3)),
    ("sweet potato", NutritionPer100g::new(86.0, 1.6, 20.0, 0.1)),
    ("potato", NutritionPer100g::new(77.0, 2.0, 17.0, 0.1)),
    ("mushroom", NutritionPer100g::new(22.0, 3.1, 3.3, 0.3)),
    // other
    ("soy sauce", NutritionPer100g::new(53.0, 8.1, 4.9, 0.6)),
    ("water", NutritionPer100g::new(0.0, 0.0, 0.0, 0.0)),
];

/// One curated ingredient and its per-100g nutrition
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MappingEntry {
    pub name: String,
    /// FoodData Central id the values were taken from, if known
    #[serde(default)]
    pub fdc_id: Option<u64>,
    #[serde(rename = "per100g")]
    pub per_100g: NutritionPer100g,
}

/// Curated ingredient → nutrition table, consulted before any network access
///
/// Lookup is exact on the lowercase-trimmed name first, then the first entry
/// (in table order) whose name contains, or is contained in, the ingredient name.
#[derive(Debug, Clone, PartialEq)]
pub struct MappingTable {
    entries: Vec<MappingEntry>,
}

impl Default for MappingTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl MappingTable {
    pub fn builtin() -> Self {
        Self::new(
            BUILTIN_MAPPINGS
                .iter()
                .map(|(name, per_100g)| MappingEntry {
                    name: name.to_string(),
                    fdc_id: None,
                    per_100g: *per_100g,
                })
                .collect(),
        )
    }

    pub fn new(entries: Vec<MappingEntry>) -> Self {
        let entries = entries
            .into_iter()
            .map(|entry| MappingEntry {
                name: entry.name.trim().to_lowercase(),
                ..entry
            })
            .collect();
        Self { entries }
    }

    /// Parse a JSON array of `{"name": .., "per100g": {..}}` objects.
    ///
    /// An array is required so that table order survives deserialization.
    pub fn from_json(json: &str) -> Result<Self, NutritionError> {
        let entries: Vec<MappingEntry> = serde_json::from_str(json)
            .map_err(|e| NutritionError::MappingError(e.to_string()))?;

        for entry in &entries {
            if entry.name.trim().is_empty() {
                return Err(NutritionError::MappingError(
                    "Mapping entry with an empty name".to_string(),
                ));
            }
            let values = entry.per_100g;
            if [values.calories, values.protein, values.carbs, values.fat]
                .iter()
                .any(|v| !v.is_finite() || *v < 0.0)
            {
                return Err(NutritionError::MappingError(format!(
                    "Nutrition values for '{}' must be non-negative numbers",
                    entry.name
                )));
            }
        }

        Ok(Self::new(entries))
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, NutritionError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn lookup(&self, ingredient: &str) -> Option<NutritionPer100g> {
        self.find(ingredient).map(|entry| entry.per_100g)
    }

    /// The entry `lookup` would use for `ingredient`
    pub fn find(&self, ingredient: &str) -> Option<&MappingEntry> {
        let name = ingredient.trim().to_lowercase();
        if name.is_empty() {
            return None;
        }

        self.entries
            .iter()
            .find(|entry| entry.name == name)
            .or_else(|| {
                self.entries.iter().find(|entry| {
                    name.contains(entry.name.as_str()) || entry.name.contains(name.as_str())
                })
            })
    }

    pub fn entries(&self) -> &[MappingEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_lookup_is_case_insensitive() {
        let table = MappingTable::builtin();
        let chicken = table.lookup("  Chicken Breast ").unwrap();
        assert_eq!(chicken.calories, 165.0);
        assert_eq!(chicken.protein, 31.0);
    }

    #[test]
    fn test_exact_match_beats_earlier_substring() {
        let table = MappingTable::builtin();
        // "brown rice" appears first and contains "rice"
        assert_eq!(table.lookup("rice").unwrap().calories, 365.0);
        assert_eq!(table.lookup("sugar").unwrap().calories, 387.0);
    }

    #[test]
    fn test_substring_match_key_in_name() {
        let table = MappingTable::builtin();
        let oil = table.lookup("extra virgin olive oil").unwrap();
        assert_eq!(oil.fat, 100.0);
    }

    #[test]
    fn test_substring_match_name_in_key() {
        let table = MappingTable::builtin();
        // "oil" is contained in "olive oil"
        assert_eq!(table.lookup("oil").unwrap().calories, 884.0);
    }

    #[test]
    fn test_first_substring_match_in_table_order() {
        let table = MappingTable::builtin();
        // the specific entry is listed before the general one
        assert_eq!(table.lookup("roasted eggplant").unwrap().calories, 25.0);
        assert_eq!(table.lookup("large eggs").unwrap().calories, 143.0);
    }

    #[test]
    fn test_unknown_and_empty_names() {
        let table = MappingTable::builtin();
        assert!(table.lookup("saffron threads").is_none());
        assert!(table.lookup("   ").is_none());
    }

    #[test]
    fn test_from_json_preserves_order() {
        let json = r#"[
            {"name": "Lentils", "fdcId": 172420, "per100g": {"calories": 352, "protein": 24.6, "carbs": 63.4, "fat": 1.1}},
            {"name": "red lentils", "per100g": {"calories": 358, "protein": 24, "carbs": 63, "fat": 2.2}}
        ]"#;
        let table = MappingTable::from_json(json).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.entries()[0].name, "lentils");
        assert_eq!(table.find("lentils").unwrap().fdc_id, Some(172420));
        assert_eq!(table.find("red lentils").unwrap().fdc_id, None);
        // first substring match wins even though a more specific entry exists
        assert_eq!(table.lookup("cooked red lentils").unwrap().calories, 352.0);
        assert_eq!(table.lookup("red lentils").unwrap().calories, 358.0);
    }

    #[test]
    fn test_from_json_rejects_negative_values() {
        let json = r#"[{"name": "mystery", "per100g": {"calories": -1, "protein": 0, "carbs": 0, "fat": 0}}]"#;
        let result = MappingTable::from_json(json);
        assert!(matches!(result, Err(NutritionError::MappingError(_))));
    }

    #[test]
    fn test_from_json_rejects_object_format() {
        let json = r#"{"rice": {"per100g": {"calories": 130, "protein": 2.7, "carbs": 28, "fat": 0.3}}}"#;
        assert!(MappingTable::from_json(json).is_err());
    }
}
