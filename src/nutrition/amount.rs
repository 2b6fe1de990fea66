use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

static QUALIFIER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:about|approximately|roughly)\s+").expect("Qualifier pattern should be valid")
});

static MIXED_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d+)\s+(\d+)/(\d+)").expect("Mixed number pattern should be valid")
});

static FRACTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)/(\d+)").expect("Fraction pattern should be valid"));

static DECIMAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d+(?:\.\d+)?|\.\d+)").expect("Decimal pattern should be valid")
});

// The whole remainder must be the unit; "2 large eggs" has none.
// Two-word fluid ounce spellings are tried before the single-token rule.
static UNIT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(fl\.?\s*oz|fluid\s+ounces?|[a-z]+)\.?$").expect("Unit pattern should be valid")
});

const VULGAR_FRACTIONS: &[(char, &str)] = &[
    ('½', "1/2"),
    ('⅓', "1/3"),
    ('⅔', "2/3"),
    ('¼', "1/4"),
    ('¾', "3/4"),
    ('⅕', "1/5"),
    ('⅖', "2/5"),
    ('⅗', "3/5"),
    ('⅘', "4/5"),
    ('⅙', "1/6"),
    ('⅚', "5/6"),
    ('⅛', "1/8"),
    ('⅜', "3/8"),
    ('⅝', "5/8"),
    ('⅞', "7/8"),
];

/// Quantity and unit decoded from a free-text amount
///
/// A quantity of zero means the text had no decodable number and the amount
/// cannot be converted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParsedAmount {
    pub quantity: f64,
    /// Lowercase unit token, empty when none was given
    pub unit: String,
}

impl ParsedAmount {
    fn unparseable() -> Self {
        ParsedAmount {
            quantity: 0.0,
            unit: String::new(),
        }
    }

    pub fn is_convertible(&self) -> bool {
        self.quantity > 0.0
    }
}

/// Parse a free-text amount such as "1 1/2 cups" or "about 2 cloves".
///
/// Never fails: text without a leading number yields quantity 0 and an empty unit.
pub fn parse_amount(text: &str) -> ParsedAmount {
    let mut normalized = text.trim().to_lowercase();
    for (glyph, fraction) in VULGAR_FRACTIONS {
        if normalized.contains(*glyph) {
            normalized = normalized.replace(*glyph, &format!(" {}", fraction));
        }
    }
    let normalized = QUALIFIER.replace(normalized.trim(), "");

    let Some((quantity, rest)) = leading_quantity(&normalized) else {
        return ParsedAmount::unparseable();
    };

    ParsedAmount {
        quantity,
        unit: leading_unit(rest),
    }
}

/// Decode the number at the start of `text`, returning it with the remaining text.
fn leading_quantity(text: &str) -> Option<(f64, &str)> {
    if let Some(caps) = MIXED_NUMBER.captures(text) {
        let whole: f64 = caps[1].parse().ok()?;
        let fraction = divide(&caps[2], &caps[3])?;
        return Some((whole + fraction, &text[caps[0].len()..]));
    }

    if let Some(caps) = FRACTION.captures(text) {
        let fraction = divide(&caps[1], &caps[2])?;
        return Some((fraction, &text[caps[0].len()..]));
    }

    let found = DECIMAL.find(text)?;
    let quantity: f64 = found.as_str().parse().ok()?;
    Some((quantity, &text[found.end()..]))
}

fn divide(numerator: &str, denominator: &str) -> Option<f64> {
    let numerator: f64 = numerator.parse().ok()?;
    let denominator: f64 = denominator.parse().ok()?;
    if denominator == 0.0 {
        return None;
    }
    Some(numerator / denominator)
}

fn leading_unit(rest: &str) -> String {
    let rest = rest.trim();
    match UNIT.captures(rest) {
        Some(caps) => {
            let token = &caps[1];
            if token.starts_with("fl") || token.starts_with("fluid") {
                // collapse "fl. oz" / "fluid  ounces" spacing to single spaces
                token
                    .replace('.', "")
                    .split_whitespace()
                    .collect::<Vec<_>>()
                    .join(" ")
                    .replace("floz", "fl oz")
            } else {
                token.to_string()
            }
        }
        None => String::new(),
    }
}
