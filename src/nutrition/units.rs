use log::warn;

use super::amount::{parse_amount, ParsedAmount};

/// Spelling variants mapped to the canonical unit used by the conversion tables
const UNIT_ALIASES: &[(&str, &str)] = &[
    ("gram", "g"),
    ("grams", "g"),
    ("gr", "g"),
    ("kilogram", "kg"),
    ("kilograms", "kg"),
    ("kilo", "kg"),
    ("kilos", "kg"),
    ("ounce", "oz"),
    ("ounces", "oz"),
    ("lbs", "lb"),
    ("pound", "lb"),
    ("pounds", "lb"),
    ("cloves", "clove"),
    ("pieces", "piece"),
    ("pc", "piece"),
    ("pcs", "piece"),
    ("slices", "slice"),
    ("milliliter", "ml"),
    ("milliliters", "ml"),
    ("millilitre", "ml"),
    ("millilitres", "ml"),
    ("liter", "l"),
    ("liters", "l"),
    ("litre", "l"),
    ("litres", "l"),
    ("cups", "cup"),
    ("c", "cup"),
    ("tablespoons", "tablespoon"),
    ("tbsp", "tablespoon"),
    ("tbsps", "tablespoon"),
    ("tbs", "tablespoon"),
    ("tbl", "tablespoon"),
    ("teaspoons", "teaspoon"),
    ("tsp", "teaspoon"),
    ("tsps", "teaspoon"),
    ("pints", "pint"),
    ("pt", "pint"),
    ("quarts", "quart"),
    ("qt", "quart"),
    ("gallons", "gallon"),
    ("gal", "gallon"),
    ("fluid ounce", "fl oz"),
    ("fluid ounces", "fl oz"),
    ("sticks", "stick"),
];

/// Grams per canonical unit. Volumes assume water density (1 ml = 1 g).
const GENERIC_GRAMS_PER_UNIT: &[(&str, f64)] = &[
    // weight
    ("g", 1.0),
    ("kg", 1000.0),
    ("oz", 28.35),
    ("lb", 453.592),
    // count
    ("clove", 3.0),
    ("piece", 50.0),
    ("slice", 25.0),
    ("whole", 100.0),
    ("medium", 150.0),
    ("large", 200.0),
    ("small", 75.0),
    // volume
    ("ml", 1.0),
    ("l", 1000.0),
    ("cup", 236.588),
    ("tablespoon", 14.787),
    ("teaspoon", 4.929),
    ("pint", 473.176),
    ("quart", 946.353),
    ("gallon", 3785.41),
    ("fl oz", 29.574),
];

// More specific names come before the names they contain.
const INGREDIENT_GRAMS_PER_UNIT: &[(&str, &[(&str, f64)])] = &[
    ("flour", &[("cup", 120.0), ("tablespoon", 8.0), ("teaspoon", 2.5)]),
    ("brown sugar", &[("cup", 220.0), ("tablespoon", 14.0), ("teaspoon", 4.5)]),
    ("sugar", &[("cup", 200.0), ("tablespoon", 12.5), ("teaspoon", 4.0)]),
    ("butter", &[("cup", 227.0), ("tablespoon", 14.0), ("stick", 113.0)]),
    ("olive oil", &[("cup", 216.0), ("tablespoon", 13.5), ("teaspoon", 4.5)]),
    ("oil", &[("cup", 218.0), ("tablespoon", 13.6), ("teaspoon", 4.5)]),
    ("honey", &[("cup", 340.0), ("tablespoon", 21.0), ("teaspoon", 7.0)]),
    ("milk", &[("cup", 244.0), ("tablespoon", 15.0), ("teaspoon", 5.0)]),
    ("water", &[("cup", 236.588), ("tablespoon", 14.787), ("teaspoon", 4.929)]),
    ("rice", &[("cup", 185.0), ("tablespoon", 12.0)]),
    ("pasta", &[("cup", 105.0)]),
    ("oats", &[("cup", 80.0)]),
];

/// Ordered unit → grams factors
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConversionTable {
    factors: Vec<(String, f64)>,
}

impl ConversionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or append a factor; the first entry for a unit wins on lookup.
    pub fn with(mut self, unit: impl Into<String>, grams_per_unit: f64) -> Self {
        self.factors.push((unit.into(), grams_per_unit));
        self
    }

    pub fn grams_per_unit(&self, unit: &str) -> Option<f64> {
        self.factors
            .iter()
            .find(|(candidate, _)| candidate == unit)
            .map(|(_, factor)| *factor)
    }

    pub fn len(&self) -> usize {
        self.factors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factors.is_empty()
    }

    fn from_static(factors: &[(&str, f64)]) -> Self {
        Self {
            factors: factors
                .iter()
                .map(|(unit, factor)| (unit.to_string(), *factor))
                .collect(),
        }
    }
}

/// Converts free-text amounts into grams
///
/// Ingredient-specific factors are consulted before the generic table. Keys are
/// scanned in table order and match the name as a substring in either
/// direction; the first key that knows the unit wins.
#[derive(Debug, Clone)]
pub struct UnitConverter {
    aliases: Vec<(String, String)>,
    generic: ConversionTable,
    overrides: Vec<(String, ConversionTable)>,
}

impl Default for UnitConverter {
    fn default() -> Self {
        let aliases = UNIT_ALIASES
            .iter()
            .map(|(alias, canonical)| (alias.to_string(), canonical.to_string()))
            .collect();
        let overrides = INGREDIENT_GRAMS_PER_UNIT
            .iter()
            .map(|(name, factors)| (name.to_string(), ConversionTable::from_static(factors)))
            .collect();

        UnitConverter {
            aliases,
            generic: ConversionTable::from_static(GENERIC_GRAMS_PER_UNIT),
            overrides,
        }
    }
}

impl UnitConverter {
    /// Build a converter from explicit tables, keeping the built-in unit aliases
    pub fn new(generic: ConversionTable, overrides: Vec<(String, ConversionTable)>) -> Self {
        UnitConverter {
            generic,
            overrides: overrides
                .into_iter()
                .map(|(name, table)| (name.trim().to_lowercase(), table))
                .collect(),
            ..Default::default()
        }
    }

    /// Put an ingredient-specific table ahead of the existing ones
    pub fn with_override(mut self, ingredient: &str, table: ConversionTable) -> Self {
        self.overrides.insert(0, (ingredient.trim().to_lowercase(), table));
        self
    }

    /// Canonical spelling of a unit token, or the token itself when it has no alias
    pub fn canonical_unit<'a>(&'a self, unit: &'a str) -> &'a str {
        self.aliases
            .iter()
            .find(|(alias, _)| alias == unit)
            .map(|(_, canonical)| canonical.as_str())
            .unwrap_or(unit)
    }

    /// Convert an amount like "2 tablespoons" of `ingredient` to grams.
    ///
    /// Returns `None` when the amount has no number or the unit is unknown.
    /// A bare number without a unit is returned unchanged.
    pub fn convert_to_grams(&self, amount: &str, ingredient: &str) -> Option<f64> {
        self.grams_for(&parse_amount(amount), ingredient)
    }

    pub fn grams_for(&self, parsed: &ParsedAmount, ingredient: &str) -> Option<f64> {
        if !parsed.is_convertible() {
            return None;
        }
        if parsed.unit.is_empty() {
            return Some(parsed.quantity);
        }

        let unit = self.canonical_unit(&parsed.unit);
        let name = ingredient.trim().to_lowercase();

        if let Some(factor) = self.override_factor(&name, unit) {
            return Some(parsed.quantity * factor);
        }

        match self.generic.grams_per_unit(unit) {
            Some(factor) => Some(parsed.quantity * factor),
            None => {
                warn!("Unknown unit: {} for ingredient: {}", parsed.unit, ingredient);
                None
            }
        }
    }

    fn override_factor(&self, name: &str, unit: &str) -> Option<f64> {
        if name.is_empty() {
            return None;
        }
        // first key in table order wins, even over a later exact match
        self.overrides
            .iter()
            .filter(|(key, _)| name.contains(key.as_str()) || key.contains(name))
            .find_map(|(_, table)| table.grams_per_unit(unit))
    }

    /// Human-readable summary of the conversion applied to `amount`
    pub fn conversion_info(&self, amount: &str, ingredient: &str) -> String {
        match self.convert_to_grams(amount, ingredient) {
            Some(grams) => format!("{} ≈ {:.1}g", amount, grams),
            None => format!("Could not convert \"{}\"", amount),
        }
    }
}

/// Convert with the built-in tables
pub fn convert_to_grams(amount: &str, ingredient: &str) -> Option<f64> {
    UnitConverter::default().convert_to_grams(amount, ingredient)
}
