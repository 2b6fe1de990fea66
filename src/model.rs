use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::AddAssign;

/// One ingredient line as supplied by the caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeIngredientInput {
    pub name: String,
    /// Free-text quantity, e.g. "1/2 cup" or "2 cloves"
    pub amount: String,
}

impl RecipeIngredientInput {
    pub fn new(name: impl Into<String>, amount: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            amount: amount.into(),
        }
    }
}

/// Nutrition normalized to a 100 gram reference quantity
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct NutritionPer100g {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl NutritionPer100g {
    pub const fn new(calories: f64, protein: f64, carbs: f64, fat: f64) -> Self {
        Self {
            calories,
            protein,
            carbs,
            fat,
        }
    }

    /// Scale to an absolute amount; every field is rounded on its own.
    pub fn scale_to(&self, grams: f64) -> NutritionInfo {
        let factor = grams / 100.0;
        NutritionInfo {
            calories: round_non_negative(self.calories * factor),
            protein: round_non_negative(self.protein * factor),
            carbs: round_non_negative(self.carbs * factor),
            fat: round_non_negative(self.fat * factor),
        }
    }
}

/// Absolute nutrition for an ingredient, a recipe total or one serving
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NutritionInfo {
    pub calories: u32,
    pub protein: u32,
    pub carbs: u32,
    pub fat: u32,
}

impl NutritionInfo {
    pub fn per_serving(&self, servings: u32) -> NutritionInfo {
        let servings = f64::from(servings);
        NutritionInfo {
            calories: round_non_negative(f64::from(self.calories) / servings),
            protein: round_non_negative(f64::from(self.protein) / servings),
            carbs: round_non_negative(f64::from(self.carbs) / servings),
            fat: round_non_negative(f64::from(self.fat) / servings),
        }
    }
}

// Saturates: an absurd amount pins the total at u32::MAX instead of wrapping.
impl AddAssign<&NutritionInfo> for NutritionInfo {
    fn add_assign(&mut self, other: &NutritionInfo) {
        self.calories = self.calories.saturating_add(other.calories);
        self.protein = self.protein.saturating_add(other.protein);
        self.carbs = self.carbs.saturating_add(other.carbs);
        self.fat = self.fat.saturating_add(other.fat);
    }
}

fn round_non_negative(value: f64) -> u32 {
    if value.is_finite() && value > 0.0 {
        value.round() as u32
    } else {
        0
    }
}

/// Which resolution step produced an ingredient's nutrition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provenance {
    Mapping,
    /// Remote database hit; the label is kept for API compatibility
    Usda,
    Default,
    Failed,
}

impl Provenance {
    pub fn as_str(&self) -> &'static str {
        match self {
            Provenance::Mapping => "mapping",
            Provenance::Usda => "usda",
            Provenance::Default => "default",
            Provenance::Failed => "failed",
        }
    }
}

impl fmt::Display for Provenance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngredientNutritionDetail {
    pub ingredient: String,
    pub amount: String,
    pub grams: Option<f64>,
    pub nutrition: Option<NutritionInfo>,
    pub source: Provenance,
}

impl IngredientNutritionDetail {
    pub(crate) fn failed(ingredient: &RecipeIngredientInput) -> Self {
        Self {
            ingredient: ingredient.name.clone(),
            amount: ingredient.amount.clone(),
            grams: None,
            nutrition: None,
            source: Provenance::Failed,
        }
    }

    /// Recipe-level warning for this ingredient, if its provenance calls for one
    pub fn warning(&self) -> Option<String> {
        match self.source {
            Provenance::Failed => Some(format!(
                "Could not calculate nutrition for: {} ({})",
                self.ingredient, self.amount
            )),
            Provenance::Default => Some(format!(
                "Using estimated nutrition for: {}",
                self.ingredient
            )),
            Provenance::Mapping | Provenance::Usda => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionResult {
    pub nutrition_total: NutritionInfo,
    pub nutrition_per_serving: NutritionInfo,
    pub warnings: Vec<String>,
    pub details: Vec<IngredientNutritionDetail>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_rounds_each_field() {
        let per_100g = NutritionPer100g::new(165.0, 31.0, 0.0, 3.6);
        let scaled = per_100g.scale_to(453.592);
        assert_eq!(
            scaled,
            NutritionInfo {
                calories: 748,
                protein: 141,
                carbs: 0,
                fat: 16,
            }
        );
    }

    #[test]
    fn test_add_assign_saturates() {
        let mut total = NutritionInfo {
            calories: u32::MAX - 1,
            protein: 10,
            carbs: 0,
            fat: 0,
        };
        total += &NutritionInfo {
            calories: 5,
            protein: 2,
            carbs: 1,
            fat: 0,
        };
        assert_eq!(total.calories, u32::MAX);
        assert_eq!(total.protein, 12);
        assert_eq!(total.carbs, 1);
    }

    #[test]
    fn test_per_serving_rounds_independently() {
        let total = NutritionInfo {
            calories: 1001,
            protein: 3,
            carbs: 5,
            fat: 1,
        };
        let serving = total.per_serving(2);
        assert_eq!(serving.calories, 501);
        assert_eq!(serving.protein, 2);
        assert_eq!(serving.carbs, 3);
        assert_eq!(serving.fat, 1);
    }

    #[test]
    fn test_provenance_serializes_lowercase() {
        let json = serde_json::to_string(&Provenance::Usda).unwrap();
        assert_eq!(json, "\"usda\"");
    }

    #[test]
    fn test_detail_serializes_nulls_and_camel_case() {
        let detail = IngredientNutritionDetail::failed(&RecipeIngredientInput::new("salt", "a pinch"));
        let value = serde_json::to_value(&detail).unwrap();
        assert!(value["grams"].is_null());
        assert!(value["nutrition"].is_null());
        assert_eq!(value["source"], "failed");

        let result = NutritionResult {
            nutrition_total: NutritionInfo::default(),
            nutrition_per_serving: NutritionInfo::default(),
            warnings: vec![],
            details: vec![detail],
        };
        let value = serde_json::to_value(&result).unwrap();
        assert!(value.get("nutritionTotal").is_some());
        assert!(value.get("nutritionPerServing").is_some());
    }

    #[test]
    fn test_warnings_by_provenance() {
        let mut detail =
            IngredientNutritionDetail::failed(&RecipeIngredientInput::new("saffron", "3 xyz"));
        assert_eq!(
            detail.warning().unwrap(),
            "Could not calculate nutrition for: saffron (3 xyz)"
        );

        detail.source = Provenance::Default;
        assert_eq!(
            detail.warning().unwrap(),
            "Using estimated nutrition for: saffron"
        );

        detail.source = Provenance::Mapping;
        assert!(detail.warning().is_none());
    }
}
