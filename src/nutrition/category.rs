use serde::Serialize;

use crate::model::NutritionPer100g;

/// Broad food group used when no specific nutrition data exists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FoodCategory {
    Protein,
    Vegetable,
    Carb,
    Fat,
    Spice,
    Sauce,
    Generic,
}

impl FoodCategory {
    /// Fixed per-100g estimate for the category
    pub fn default_nutrition(&self) -> NutritionPer100g {
        match self {
            FoodCategory::Protein => NutritionPer100g::new(150.0, 25.0, 0.0, 5.0),
            FoodCategory::Vegetable => NutritionPer100g::new(25.0, 1.5, 5.0, 0.2),
            FoodCategory::Carb => NutritionPer100g::new(120.0, 3.0, 25.0, 0.5),
            FoodCategory::Fat => NutritionPer100g::new(800.0, 0.0, 0.0, 90.0),
            FoodCategory::Spice => NutritionPer100g::new(200.0, 8.0, 40.0, 5.0),
            FoodCategory::Sauce => NutritionPer100g::new(100.0, 2.0, 10.0, 5.0),
            FoodCategory::Generic => NutritionPer100g::new(50.0, 2.0, 10.0, 1.0),
        }
    }
}

/// A keyword that marks a category, optionally vetoed by a later word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keyword {
    term: String,
    unless_followed_by: Option<String>,
}

impl Keyword {
    pub fn new(term: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            unless_followed_by: None,
        }
    }

    /// Veto the match when `word` appears anywhere after the keyword
    pub fn unless_followed_by(mut self, word: impl Into<String>) -> Self {
        self.unless_followed_by = Some(word.into());
        self
    }

    fn matches(&self, name: &str) -> bool {
        name.match_indices(self.term.as_str()).any(|(index, _)| {
            match &self.unless_followed_by {
                Some(veto) => !name[index + self.term.len()..].contains(veto.as_str()),
                None => true,
            }
        })
    }
}

const PROTEIN_KEYWORDS: &[&str] = &[
    "chicken", "beef", "pork", "fish", "salmon", "tuna", "turkey", "lamb", "tofu", "tempeh",
    "seitan", "egg",
];

const VEGETABLE_KEYWORDS: &[&str] = &[
    "broccoli",
    "carrot",
    "spinach",
    "kale",
    "lettuce",
    "tomato",
    "pepper",
    "onion",
    "garlic",
    "mushroom",
    "zucchini",
    "cucumber",
    "celery",
    "cauliflower",
    "cabbage",
    "asparagus",
    "eggplant",
];

const CARB_KEYWORDS: &[&str] = &[
    "rice", "pasta", "bread", "potato", "quinoa", "oats", "noodle", "tortilla", "pita", "bagel",
    "cereal",
];

const FAT_KEYWORDS: &[&str] = &["oil", "butter", "margarine", "lard", "shortening"];

const SPICE_KEYWORDS: &[&str] = &[
    "pepper",
    "salt",
    "cumin",
    "paprika",
    "oregano",
    "basil",
    "thyme",
    "rosemary",
    "cinnamon",
    "ginger",
    "turmeric",
    "cayenne",
    "chili powder",
];

const SAUCE_KEYWORDS: &[&str] = &[
    "sauce", "dressing", "marinade", "salsa", "pesto", "mayo", "mustard", "ketchup", "gravy",
];

/// Keyword classifier; categories are tested in list order and the first hit wins
#[derive(Debug, Clone)]
pub struct CategoryRules {
    rules: Vec<(FoodCategory, Vec<Keyword>)>,
}

impl Default for CategoryRules {
    fn default() -> Self {
        fn keywords(terms: &[&str]) -> Vec<Keyword> {
            terms.iter().map(|term| Keyword::new(*term)).collect()
        }

        let mut fats = keywords(FAT_KEYWORDS);
        fats.push(Keyword::new("cream").unless_followed_by("cheese"));

        Self {
            rules: vec![
                (FoodCategory::Protein, keywords(PROTEIN_KEYWORDS)),
                (FoodCategory::Vegetable, keywords(VEGETABLE_KEYWORDS)),
                (FoodCategory::Carb, keywords(CARB_KEYWORDS)),
                (FoodCategory::Fat, fats),
                (FoodCategory::Spice, keywords(SPICE_KEYWORDS)),
                (FoodCategory::Sauce, keywords(SAUCE_KEYWORDS)),
            ],
        }
    }
}

impl CategoryRules {
    pub fn new(rules: Vec<(FoodCategory, Vec<Keyword>)>) -> Self {
        Self { rules }
    }

    /// Classify by unanchored, case-insensitive substring match.
    pub fn categorize(&self, ingredient: &str) -> FoodCategory {
        let name = ingredient.to_lowercase();
        self.rules
            .iter()
            .find(|(_, keywords)| keywords.iter().any(|keyword| keyword.matches(&name)))
            .map(|(category, _)| *category)
            .unwrap_or(FoodCategory::Generic)
    }

    pub fn default_nutrition(&self, ingredient: &str) -> NutritionPer100g {
        self.categorize(ingredient).default_nutrition()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories() {
        let rules = CategoryRules::default();
        assert_eq!(rules.categorize("Smoked Salmon"), FoodCategory::Protein);
        assert_eq!(rules.categorize("baby kale"), FoodCategory::Vegetable);
        assert_eq!(rules.categorize("rice noodles"), FoodCategory::Carb);
        assert_eq!(rules.categorize("sesame oil"), FoodCategory::Fat);
        assert_eq!(rules.categorize("smoked paprika"), FoodCategory::Spice);
        assert_eq!(rules.categorize("hoisin sauce"), FoodCategory::Sauce);
        assert_eq!(rules.categorize("saffron"), FoodCategory::Generic);
    }

    #[test]
    fn test_priority_order() {
        let rules = CategoryRules::default();
        // "pepper" is a vegetable keyword before it is a spice keyword
        assert_eq!(rules.categorize("black pepper"), FoodCategory::Vegetable);
        // protein is tested before vegetable
        assert_eq!(rules.categorize("eggplant"), FoodCategory::Protein);
        // protein before sauce
        assert_eq!(rules.categorize("fish sauce"), FoodCategory::Protein);
    }

    #[test]
    fn test_cream_is_fat_unless_cheese_follows() {
        let rules = CategoryRules::default();
        assert_eq!(rules.categorize("heavy cream"), FoodCategory::Fat);
        assert_eq!(rules.categorize("cream cheese"), FoodCategory::Generic);
        assert_eq!(rules.categorize("sour cream"), FoodCategory::Fat);
    }

    #[test]
    fn test_default_profiles() {
        let rules = CategoryRules::default();
        assert_eq!(
            rules.default_nutrition("olive tapenade"),
            NutritionPer100g::new(50.0, 2.0, 10.0, 1.0)
        );
        assert_eq!(
            rules.default_nutrition("canola oil"),
            NutritionPer100g::new(800.0, 0.0, 0.0, 90.0)
        );
    }

    #[test]
    fn test_custom_rules() {
        let rules = CategoryRules::new(vec![(
            FoodCategory::Sauce,
            vec![Keyword::new("aioli")],
        )]);
        assert_eq!(rules.categorize("garlic aioli"), FoodCategory::Sauce);
        assert_eq!(rules.categorize("garlic"), FoodCategory::Generic);
    }
}
