//! Presentation strings for ingredient lines with a known gram weight

const COUNTABLE_UNITS: &[&str] = &[
    "clove", "cloves", "whole", "medium", "large", "small", "sprig", "sprigs", "bunch", "bunches",
];

const OIL_KEYWORDS: &[&str] = &["oil", "butter", "ghee", "margarine", "lard", "shortening"];

const GRAIN_KEYWORDS: &[&str] = &[
    "rice", "pasta", "quinoa", "oats", "couscous", "barley", "bulgur", "farro", "noodle",
    "noodles", "spaghetti", "macaroni", "penne",
];

const PROTEIN_KEYWORDS: &[&str] = &[
    "chicken",
    "beef",
    "pork",
    "fish",
    "salmon",
    "tuna",
    "turkey",
    "lamb",
    "duck",
    "tofu",
    "tempeh",
    "seitan",
    "steak",
    "thigh",
    "breast",
    "ground meat",
];

fn matches_any(name: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| name.contains(keyword))
}

/// Grams are only shown when positive, rounded to whole grams
fn shown_grams(grams: Option<f64>) -> Option<u64> {
    grams
        .filter(|g| g.is_finite() && *g > 0.0)
        .map(|g| g.round() as u64)
}

/// "amount unit name", without doubled spaces when the unit is empty
pub fn format_ingredient_simple(name: &str, amount: &str, unit: &str) -> String {
    [amount, unit, name]
        .iter()
        .map(|part| part.trim())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render an ingredient line for display.
///
/// Proteins are shown by weight alone; everything else keeps the recipe's
/// own amount with the gram weight in parentheses.
///
/// ```
/// use recipe_nutrition::format_ingredient_display;
///
/// assert_eq!(format_ingredient_display("garlic", "2", "cloves", Some(6.0)), "2 cloves garlic (6g)");
/// assert_eq!(format_ingredient_display("chicken breast", "1", "lb", Some(454.0)), "454g chicken breast");
/// ```
pub fn format_ingredient_display(name: &str, amount: &str, unit: &str, grams: Option<f64>) -> String {
    let simple = format_ingredient_simple(name, amount, unit);
    let Some(grams) = shown_grams(grams) else {
        return simple;
    };

    let name_lower = name.to_lowercase();
    let unit_lower = unit.trim().to_lowercase();

    let keeps_amount = COUNTABLE_UNITS.contains(&unit_lower.as_str())
        || matches_any(&name_lower, OIL_KEYWORDS)
        || (matches_any(&name_lower, GRAIN_KEYWORDS) && (unit_lower == "cup" || unit_lower == "cups"));

    if !keeps_amount && matches_any(&name_lower, PROTEIN_KEYWORDS) {
        return format!("{}g {}", grams, name.trim());
    }

    format!("{} ({}g)", simple, grams)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_countable_units_keep_amount() {
        assert_eq!(
            format_ingredient_display("garlic", "2", "cloves", Some(6.0)),
            "2 cloves garlic (6g)"
        );
        // countable beats protein
        assert_eq!(
            format_ingredient_display("chicken breast", "2", "large", Some(400.0)),
            "2 large chicken breast (400g)"
        );
    }

    #[test]
    fn test_protein_by_weight() {
        assert_eq!(
            format_ingredient_display("chicken breast", "1", "lb", Some(453.592)),
            "454g chicken breast"
        );
        assert_eq!(
            format_ingredient_display("Salmon fillet", "6", "oz", Some(170.1)),
            "170g Salmon fillet"
        );
    }

    #[test]
    fn test_oils_keep_amount() {
        assert_eq!(
            format_ingredient_display("olive oil", "2", "tablespoons", Some(27.0)),
            "2 tablespoons olive oil (27g)"
        );
    }

    #[test]
    fn test_grains_keep_amount_only_in_cups() {
        assert_eq!(
            format_ingredient_display("rice", "1", "cup", Some(185.0)),
            "1 cup rice (185g)"
        );
        assert_eq!(
            format_ingredient_display("rice", "200", "g", Some(200.0)),
            "200 g rice (200g)"
        );
    }

    #[test]
    fn test_without_grams() {
        assert_eq!(
            format_ingredient_display("chicken breast", "1", "lb", None),
            "1 lb chicken breast"
        );
        assert_eq!(format_ingredient_display("salt", "1", "tsp", Some(0.0)), "1 tsp salt");
    }

    #[test]
    fn test_empty_unit_collapses() {
        assert_eq!(format_ingredient_simple("eggs", "3", ""), "3 eggs");
        assert_eq!(format_ingredient_display("apple", "2", "", Some(364.0)), "2 apple (364g)");
    }
}
