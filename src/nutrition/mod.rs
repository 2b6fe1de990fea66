pub mod amount;
pub mod cache;
pub mod calculator;
pub mod category;
pub mod display;
pub mod ingredient;
pub mod mapping;
pub mod resolver;
pub mod source;
pub mod units;
pub mod usda;

pub use amount::{parse_amount, ParsedAmount};
pub use cache::LookupCache;
pub use calculator::RecipeNutritionCalculator;
pub use category::{CategoryRules, FoodCategory, Keyword};
pub use display::{format_ingredient_display, format_ingredient_simple};
pub use ingredient::calculate_ingredient;
pub use mapping::{MappingEntry, MappingTable};
pub use resolver::{NutritionResolver, Resolution};
pub use source::{NutritionSource, OfflineSource};
pub use units::{convert_to_grams, ConversionTable, UnitConverter};
pub use usda::{UsdaClient, UsdaFood, DEFAULT_USDA_BASE_URL};
