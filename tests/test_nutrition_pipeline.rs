use async_trait::async_trait;
use mockito::{Matcher, Server};
use recipe_nutrition::nutrition::{MappingTable, NutritionSource};
use recipe_nutrition::{
    convert_to_grams, handle_calculate_request, parse_amount, CalculateNutritionRequest,
    NutritionError, NutritionPer100g, Provenance, RecipeIngredientInput,
    RecipeNutritionCalculator,
};
use std::collections::HashMap;
use std::time::Duration;

/// Deterministic stand-in for a remote database
struct FakeSource {
    foods: HashMap<&'static str, NutritionPer100g>,
}

impl FakeSource {
    fn new() -> Self {
        let mut foods = HashMap::new();
        foods.insert("tempeh", NutritionPer100g::new(192.0, 20.3, 7.6, 10.8));
        foods.insert("kimchi", NutritionPer100g::new(15.0, 1.1, 2.4, 0.5));
        Self { foods }
    }
}

#[async_trait]
impl NutritionSource for FakeSource {
    fn source_name(&self) -> &str {
        "fake"
    }

    async fn search(&self, query: &str) -> Option<NutritionPer100g> {
        self.foods.get(query.to_lowercase().as_str()).copied()
    }

    async fn by_id(&self, _food_id: u64) -> Option<NutritionPer100g> {
        None
    }
}

fn ingredients(items: &[(&str, &str)]) -> Vec<RecipeIngredientInput> {
    items
        .iter()
        .map(|(name, amount)| RecipeIngredientInput::new(*name, *amount))
        .collect()
}

fn fake_calculator() -> RecipeNutritionCalculator {
    RecipeNutritionCalculator::builder()
        .source(FakeSource::new())
        .build()
        .unwrap()
}

#[test]
fn test_documented_parse_and_convert_examples() {
    let half = parse_amount("1/2 cup");
    assert_eq!((half.quantity, half.unit.as_str()), (0.5, "cup"));

    let mixed = parse_amount("1 1/2 cups");
    assert_eq!((mixed.quantity, mixed.unit.as_str()), (1.5, "cups"));

    let bare = parse_amount("2");
    assert_eq!((bare.quantity, bare.unit.as_str()), (2.0, ""));

    let none = parse_amount("banana");
    assert_eq!((none.quantity, none.unit.as_str()), (0.0, ""));

    assert_eq!(convert_to_grams("2 cloves", "garlic"), Some(6.0));
    assert_eq!(convert_to_grams("1 cup", "flour"), Some(120.0));
    assert_eq!(convert_to_grams("3 xyz", "chicken"), None);
}

#[tokio::test]
async fn test_aggregation_scenario() {
    let calculator = fake_calculator();
    let result = calculator
        .calculate(
            &ingredients(&[
                ("chicken breast", "1 lb"),
                ("olive oil", "2 tablespoons"),
                ("rice", "1 cup"),
            ]),
            2,
        )
        .await
        .unwrap();

    assert!(result.details.iter().all(|d| d.grams.is_some()));
    assert!(result.details.iter().all(|d| d.source == Provenance::Mapping));
    assert!(result.warnings.is_empty());

    let calories: u32 = result
        .details
        .iter()
        .map(|d| d.nutrition.unwrap().calories)
        .sum();
    assert_eq!(result.nutrition_total.calories, calories);
    assert_eq!(
        result.nutrition_per_serving.calories,
        (f64::from(calories) / 2.0).round() as u32
    );

    // 1 lb chicken breast, 27 g olive oil, 185 g rice
    assert_eq!(result.details[0].nutrition.unwrap().calories, 748);
    assert_eq!(result.details[1].grams, Some(27.0));
    assert_eq!(result.details[1].nutrition.unwrap().calories, 239);
    assert_eq!(result.details[2].grams, Some(185.0));
    assert_eq!(result.details[2].nutrition.unwrap().calories, 675);
    assert_eq!(result.nutrition_total.calories, 1662);
    assert_eq!(result.nutrition_per_serving.calories, 831);
}

#[tokio::test]
async fn test_provenance_through_the_chain() {
    let calculator = fake_calculator();
    let result = calculator
        .calculate(
            &ingredients(&[
                ("spinach", "2 cups"),
                ("tempeh", "8 oz"),
                ("sumac", "1 tsp"),
                ("tamarind", "2 pods"),
            ]),
            4,
        )
        .await
        .unwrap();

    let sources: Vec<_> = result.details.iter().map(|d| d.source).collect();
    assert_eq!(
        sources,
        vec![
            Provenance::Mapping,
            Provenance::Usda,
            Provenance::Default,
            Provenance::Failed
        ]
    );
    assert_eq!(
        result.warnings,
        vec![
            "Using estimated nutrition for: sumac",
            "Could not calculate nutrition for: tamarind (2 pods)",
        ]
    );
}

#[tokio::test]
async fn test_failed_ingredients_always_warn() {
    let calculator = fake_calculator();
    let result = calculator
        .calculate(
            &ingredients(&[("salt", "to taste"), ("vanilla", "a splash"), ("egg", "1 xyz")]),
            1,
        )
        .await
        .unwrap();

    for detail in &result.details {
        assert_eq!(detail.source, Provenance::Failed);
        assert!(detail.grams.is_none());
        let expected = format!(
            "Could not calculate nutrition for: {} ({})",
            detail.ingredient, detail.amount
        );
        assert!(result.warnings.contains(&expected));
    }
}

#[tokio::test]
async fn test_single_serving_equals_total() {
    let calculator = fake_calculator();
    let result = calculator
        .calculate(&ingredients(&[("butter", "3 tbsp"), ("kimchi", "1 cup")]), 1)
        .await
        .unwrap();
    assert_eq!(result.nutrition_per_serving, result.nutrition_total);
}

#[tokio::test]
async fn test_repeated_calls_are_identical() {
    let calculator = fake_calculator();
    let recipe = ingredients(&[
        ("ground beef", "1 lb"),
        ("onion", "1 medium"),
        ("tempeh", "100 g"),
        ("harissa", "2 tbsp"),
    ]);

    let first = calculator.calculate(&recipe, 3).await.unwrap();
    let second = calculator.calculate(&recipe, 3).await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_zero_servings_is_an_error() {
    let calculator = fake_calculator();
    let result = calculator.calculate(&ingredients(&[("rice", "1 cup")]), 0).await;
    assert!(matches!(result, Err(NutritionError::InvalidInput(_))));
}

#[tokio::test]
async fn test_request_boundary() {
    let calculator = fake_calculator();
    let request: CalculateNutritionRequest = serde_json::from_str(
        r#"{"ingredients": [{"name": "rice", "amount": "1 cup"}], "servings": 101}"#,
    )
    .unwrap();

    let err = handle_calculate_request(&calculator, &request).await.unwrap_err();
    assert_eq!(err.to_string(), "Invalid input: Servings must be between 1 and 100");
}

#[tokio::test]
async fn test_result_json_shape() {
    let calculator = fake_calculator();
    let result = calculator
        .calculate(&ingredients(&[("rice", "1 cup"), ("saffron", "3 xyz")]), 2)
        .await
        .unwrap();

    let value = serde_json::to_value(&result).unwrap();
    assert!(value["nutritionTotal"]["calories"].is_u64());
    assert!(value["nutritionPerServing"]["fat"].is_u64());
    assert_eq!(value["details"][0]["source"], "mapping");
    assert_eq!(value["details"][1]["source"], "failed");
    assert!(value["details"][1]["grams"].is_null());
    assert!(value["details"][1]["nutrition"].is_null());
    assert_eq!(value["warnings"].as_array().unwrap().len(), 1);
}

const TEMPEH_SEARCH: &str = r#"{
    "foods": [{
        "fdcId": 174272,
        "description": "Tempeh",
        "foodNutrients": [
            {"nutrientId": 1008, "value": 192},
            {"nutrientId": 1003, "value": 20.3},
            {"nutrientId": 1005, "value": 7.64},
            {"nutrientId": 1004, "value": 10.8}
        ]
    }]
}"#;

#[tokio::test]
async fn test_usda_lookups_are_cached_within_a_call() {
    let mut server = Server::new_async().await;
    let tempeh = server
        .mock("GET", "/foods/search")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("query".into(), "tempeh".into()),
            Matcher::UrlEncoded("api_key".into(), "test-key".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(TEMPEH_SEARCH)
        .expect(1)
        .create_async()
        .await;
    let unknown = server
        .mock("GET", "/foods/search")
        .match_query(Matcher::UrlEncoded("query".into(), "mystery spice".into()))
        .with_status(200)
        .with_body(r#"{"foods": []}"#)
        .expect(1)
        .create_async()
        .await;

    let calculator = RecipeNutritionCalculator::builder()
        .usda_api_key("test-key")
        .usda_base_url(server.url())
        .timeout(Duration::from_secs(5))
        .build()
        .unwrap();

    let result = calculator
        .calculate(
            &ingredients(&[
                ("tempeh", "100 g"),
                (" tempeh ", "50 g"),
                ("mystery spice", "1 tsp"),
                ("mystery spice", "2 tsp"),
                ("olive oil", "1 tbsp"),
            ]),
            2,
        )
        .await
        .unwrap();

    tempeh.assert_async().await;
    unknown.assert_async().await;

    assert_eq!(result.details[0].source, Provenance::Usda);
    assert_eq!(result.details[0].nutrition.unwrap().calories, 192);
    assert_eq!(result.details[1].nutrition.unwrap().calories, 96);
    assert_eq!(result.details[2].source, Provenance::Default);
    assert_eq!(result.details[4].source, Provenance::Mapping);
}

#[tokio::test]
async fn test_cache_does_not_outlive_a_call() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/foods/search")
        .match_query(Matcher::UrlEncoded("query".into(), "tempeh".into()))
        .with_status(200)
        .with_body(TEMPEH_SEARCH)
        .expect(2)
        .create_async()
        .await;

    let calculator = RecipeNutritionCalculator::builder()
        .usda_api_key("test-key")
        .usda_base_url(server.url())
        .build()
        .unwrap();

    let recipe = ingredients(&[("tempeh", "100 g")]);
    calculator.calculate(&recipe, 1).await.unwrap();
    calculator.calculate(&recipe, 1).await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn test_usda_outage_degrades_to_defaults() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/foods/search")
        .match_query(Matcher::Any)
        .with_status(500)
        .create_async()
        .await;

    let calculator = RecipeNutritionCalculator::builder()
        .usda_api_key("test-key")
        .usda_base_url(server.url())
        .build()
        .unwrap();

    let result = calculator
        .calculate(&ingredients(&[("pork belly", "200 g")]), 2)
        .await
        .unwrap();

    // protein default: 150 kcal per 100 g
    assert_eq!(result.details[0].source, Provenance::Default);
    assert_eq!(result.nutrition_total.calories, 300);
    assert_eq!(result.warnings, vec!["Using estimated nutrition for: pork belly"]);
}

#[tokio::test]
async fn test_custom_mapping_takes_priority_over_remote() {
    let mapping = MappingTable::from_json(
        r#"[{"name": "tempeh", "per100g": {"calories": 200, "protein": 19, "carbs": 9, "fat": 11}}]"#,
    )
    .unwrap();
    let calculator = RecipeNutritionCalculator::builder()
        .mapping(mapping)
        .source(FakeSource::new())
        .build()
        .unwrap();

    let result = calculator
        .calculate(&ingredients(&[("tempeh", "100 g"), ("rice", "100 g")]), 1)
        .await
        .unwrap();
    assert_eq!(result.details[0].source, Provenance::Mapping);
    assert_eq!(result.details[0].nutrition.unwrap().calories, 200);
    // the built-in table was replaced, rice now falls to the carb default
    assert_eq!(result.details[1].source, Provenance::Default);
    assert_eq!(result.details[1].nutrition.unwrap().calories, 120);
}

#[tokio::test]
async fn test_bundled_mapping_file() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/data/mapping.json");
    let calculator = RecipeNutritionCalculator::builder()
        .mapping_file(path)
        .source(FakeSource::new())
        .build()
        .unwrap();

    let entry = calculator.resolver().mapping().find("Smoked Tofu").unwrap();
    assert_eq!(entry.fdc_id, Some(2705385));
    assert!(calculator.resolver().mapping().find("soba").unwrap().fdc_id.is_none());

    let result = calculator
        .calculate(&ingredients(&[("smoked tofu", "200 g"), ("white miso", "50 g")]), 1)
        .await
        .unwrap();
    assert_eq!(result.details[0].nutrition.unwrap().calories, 290);
    assert_eq!(result.details[1].source, Provenance::Mapping);
    assert_eq!(result.details[1].nutrition.unwrap().calories, 99);
}
