use async_trait::async_trait;
use smarteats_client::{MenuSource, SourceError};
use smarteats_config::Config;
use smarteats_iconset_openmoji::FoodIconResolver;
use smarteats_types::{DiningHall, Dish};

use crate::commands::showcase::Showcase;
use crate::commands::{AppContext, MenuArgs, ResolveArgs, handle_menu, handle_resolve, handle_showcase};
use crate::render::OutputFormat;

struct StaticSource(Vec<DiningHall>);

#[async_trait]
impl MenuSource for StaticSource {
    async fn halls(&self) -> Result<Vec<DiningHall>, SourceError> {
        Ok(self.0.clone())
    }

    fn describe(&self) -> String {
        "static".to_string()
    }
}

fn dish(id: u64, name: &str, category: &str, calories: u32, protein: u32) -> Dish {
    Dish {
        dish_id: id,
        dish_name: name.to_string(),
        calories,
        protein,
        carbohydrates: 0,
        fat: 0,
        category: Some(category.to_string()),
    }
}

fn source() -> StaticSource {
    StaticSource(vec![DiningHall {
        id: 1,
        name: "ISR Dining".to_string(),
        location: "Illinois St".to_string(),
        dishes: vec![
            dish(1, "Avocado Toast with Poached Egg", "grain", 320, 14),
            dish(2, "Grilled Shrimp Tacos", "protein", 480, 28),
            dish(3, "Chef's Special", "dessert", 400, 5),
            dish(4, "Mystery Dish", "entree", 250, 10),
        ],
    }])
}

fn menu_args(hall: Option<u64>, search: &str, category: &str) -> MenuArgs {
    MenuArgs {
        hall,
        search: search.to_string(),
        category: category.to_string(),
        file: None,
    }
}

fn run<F>(format: OutputFormat, f: F) -> String
where
    F: FnOnce(&AppContext, &mut Vec<u8>) -> anyhow::Result<()>,
{
    let config = Config::default();
    let resolver = FoodIconResolver::new();
    let ctx = AppContext {
        config: &config,
        resolver: &resolver,
        format,
    };
    let mut out = Vec::new();
    f(&ctx, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_resolve_json() {
    let args = ResolveArgs {
        name: "Grilled Chicken".to_string(),
        category: Some("dessert".to_string()),
    };
    let output = run(OutputFormat::Json, |ctx, out| handle_resolve(ctx, &args, out));
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(value["dish"], "Grilled Chicken");
    assert_eq!(value["tier"], "keyword");
    assert_eq!(value["kind"], "icon");
    assert_eq!(value["code"], "1F357");
    assert_eq!(value["src"], "/icons/food/1F357.svg");
}

#[test]
fn test_resolve_text_pill() {
    let args = ResolveArgs {
        name: "Xyzzyx".to_string(),
        category: None,
    };
    let output = run(OutputFormat::Text, |ctx, out| handle_resolve(ctx, &args, out));
    assert!(output.starts_with("(X) Xyzzyx\n"));
    assert!(output.contains("tier: pill"));
    assert!(output.contains("bg var(--se-primary-dim)"));
}

#[test]
fn test_showcase_tiers() {
    let showcase = Showcase::build(&FoodIconResolver::new());
    assert_eq!(showcase.keyword.len(), 12);
    assert!(showcase.keyword.iter().all(|e| e.tier == "keyword"));
    assert_eq!(showcase.category.len(), 9);
    assert!(showcase.category.iter().all(|e| e.tier == "category"));
    assert_eq!(showcase.pill.len(), 5);
    assert!(showcase.pill.iter().all(|e| e.result.is_pill()));

    let output = run(OutputFormat::Text, |ctx, out| handle_showcase(ctx, out));
    assert!(output.contains("Keyword matches (tier 1)"));
    assert!(output.contains("Chef's Special (fruit)"));
}

#[tokio::test]
async fn test_menu_lists_halls() {
    let config = Config::default();
    let resolver = FoodIconResolver::new();
    let ctx = AppContext {
        config: &config,
        resolver: &resolver,
        format: OutputFormat::Json,
    };

    let mut out = Vec::new();
    handle_menu(&ctx, &source(), &menu_args(None, "", "All"), &mut out)
        .await
        .unwrap();

    let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(value[0]["name"], "ISR Dining");
    assert_eq!(value[0]["dishes"], 4);
}

#[tokio::test]
async fn test_menu_hall_rows() {
    let config = Config::default();
    let resolver = FoodIconResolver::new();
    let ctx = AppContext {
        config: &config,
        resolver: &resolver,
        format: OutputFormat::Json,
    };

    let mut out = Vec::new();
    handle_menu(&ctx, &source(), &menu_args(Some(1), "", "All"), &mut out)
        .await
        .unwrap();

    let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(
        value["categories"],
        serde_json::json!(["All", "dessert", "entree", "grain", "protein"])
    );

    let rows = value["rows"].as_array().unwrap();
    assert_eq!(rows.len(), 4);
    // egg rows come before bread rows
    assert_eq!(rows[0]["icon"]["code"], "1F95A");
    assert_eq!(rows[0]["subtitle"], "grain · ISR Dining");
    assert_eq!(rows[1]["icon"]["code"], "1F990");
    assert_eq!(rows[1]["calories"], "480 kcal");
    assert_eq!(rows[2]["icon"]["code"], "1F370");
    assert_eq!(rows[3]["icon"]["kind"], "pill");
    assert_eq!(rows[3]["icon"]["letter"], "M");
}

#[tokio::test]
async fn test_menu_filtered_to_nothing() {
    let config = Config::default();
    let resolver = FoodIconResolver::new();
    let ctx = AppContext {
        config: &config,
        resolver: &resolver,
        format: OutputFormat::Text,
    };

    let mut out = Vec::new();
    handle_menu(&ctx, &source(), &menu_args(Some(1), "pho", "All"), &mut out)
        .await
        .unwrap();

    let text = String::from_utf8(out).unwrap();
    assert!(text.starts_with("ISR Dining\n[All]  dessert"));
    assert!(text.contains("No dishes match"));
}

#[tokio::test]
async fn test_menu_unknown_hall() {
    let config = Config::default();
    let resolver = FoodIconResolver::new();
    let ctx = AppContext {
        config: &config,
        resolver: &resolver,
        format: OutputFormat::Text,
    };

    let mut out = Vec::new();
    let err = handle_menu(&ctx, &source(), &menu_args(Some(99), "", "All"), &mut out)
        .await
        .unwrap_err();
    assert!(err.to_string().contains("Dining hall 99 not found"));
}
