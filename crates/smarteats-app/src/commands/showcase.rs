use std::io::Write;

use serde::Serialize;
use smarteats_core::FoodCategory;
use smarteats_iconset_openmoji::FoodIconResolver;
use smarteats_types::IconResult;

use super::AppContext;
use crate::render::{OutputFormat, describe, glyph, write_json};

const KEYWORD_DISHES: [&str; 12] = [
    "Grilled Chicken",
    "Scrambled Eggs",
    "Caesar Salad",
    "Spaghetti Bolognese",
    "Blueberry Muffin",
    "Chicken Tikka Masala",
    "Beef Tacos",
    "Banana Bread",
    "Chocolate Chip Cookie",
    "Tomato Soup",
    "Cheese Pizza",
    "Strawberry Yogurt",
];

// no keyword matches this name
const CATEGORY_DISH: &str = "Chef's Special";

const PILL_DISHES: [&str; 5] = [
    "Chef's Creation",
    "Daily Special",
    "House Mix",
    "Fusion Blend",
    "Mystery Dish",
];

#[derive(Debug, Serialize)]
pub struct ShowcaseEntry {
    pub dish: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<&'static str>,
    pub tier: &'static str,
    pub result: IconResult,
}

#[derive(Debug, Serialize)]
pub struct Showcase {
    pub keyword: Vec<ShowcaseEntry>,
    pub category: Vec<ShowcaseEntry>,
    pub pill: Vec<ShowcaseEntry>,
}

impl Showcase {
    pub fn build(resolver: &FoodIconResolver) -> Self {
        let entry = |dish: &'static str, category: Option<&'static str>| {
            let resolution = resolver.explain(dish, category);
            ShowcaseEntry {
                dish,
                category,
                tier: resolution.tier.as_str(),
                result: resolution.result,
            }
        };

        Self {
            keyword: KEYWORD_DISHES.iter().map(|&dish| entry(dish, None)).collect(),
            category: FoodCategory::ALL
                .iter()
                .map(|category| entry(CATEGORY_DISH, Some(category.as_str())))
                .collect(),
            pill: PILL_DISHES.iter().map(|&dish| entry(dish, None)).collect(),
        }
    }
}

pub fn handle_showcase(ctx: &AppContext, out: &mut impl Write) -> anyhow::Result<()> {
    let showcase = Showcase::build(ctx.resolver);

    match ctx.format {
        OutputFormat::Json => write_json(out, &showcase),
        OutputFormat::Text => {
            let sections = [
                ("Keyword matches (tier 1)", &showcase.keyword),
                ("Category fallback (tier 2), no keyword match", &showcase.category),
                ("Letter pill fallback (tier 3), no match at all", &showcase.pill),
            ];

            for (title, entries) in sections {
                writeln!(out, "{title}")?;
                for entry in entries {
                    let label = match entry.category {
                        Some(category) => format!("{} ({category})", entry.dish),
                        None => entry.dish.to_string(),
                    };
                    writeln!(
                        out,
                        "  {:<9} {:<32} {}",
                        glyph(&entry.result),
                        label,
                        describe(&entry.result, &ctx.config.icons)
                    )?;
                }
                writeln!(out)?;
            }
            Ok(())
        }
    }
}
