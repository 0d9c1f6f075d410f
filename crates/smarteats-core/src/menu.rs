use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use smarteats_types::{DiningHall, Dish, IconResult};

use crate::resolver::IconResolver;

/// Filter chip that disables category filtering
pub const ALL_CATEGORIES: &str = "All";

// `/api/halls/` returns either a bare list or a paginated page
#[derive(Deserialize)]
#[serde(untagged)]
enum HallsPayload {
    List(Vec<DiningHall>),
    Page {
        #[serde(default)]
        results: Vec<DiningHall>,
    },
}

/// Parse the halls endpoint payload
pub fn parse_halls(json: &str) -> Result<Vec<DiningHall>, MenuError> {
    let payload: HallsPayload =
        serde_json::from_str(json).map_err(|e| MenuError::InvalidPayload(e.to_string()))?;

    let halls = match payload {
        HallsPayload::List(halls) => halls,
        HallsPayload::Page { results } => results,
    };

    tracing::debug!("Parsed {} dining halls", halls.len());
    Ok(halls)
}

pub fn find_hall(halls: &[DiningHall], id: u64) -> Option<&DiningHall> {
    halls.iter().find(|hall| hall.id == id)
}

/// "All" followed by the hall's distinct categories in sorted order
pub fn category_chips(hall: &DiningHall) -> Vec<String> {
    let categories: BTreeSet<&str> = hall
        .dishes
        .iter()
        .filter_map(|dish| dish.category.as_deref())
        .filter(|category| !category.is_empty())
        .collect();

    std::iter::once(ALL_CATEGORIES)
        .chain(categories)
        .map(str::to_string)
        .collect()
}

/// Dishes whose name contains `search` (ignoring case) and whose category
/// equals `active_category`, unless the chip is "All"
pub fn filter_dishes<'a>(hall: &'a DiningHall, search: &str, active_category: &str) -> Vec<&'a Dish> {
    let search = search.to_lowercase();

    hall.dishes
        .iter()
        .filter(|dish| dish.dish_name.to_lowercase().contains(&search))
        .filter(|dish| {
            active_category == ALL_CATEGORIES || dish.category.as_deref() == Some(active_category)
        })
        .collect()
}

/// One rendered line of a menu listing
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListRow {
    pub icon: IconResult,
    pub title: String,
    /// "Category · Hall", either part omitted when empty
    pub subtitle: String,
    pub calories: String,
    pub protein: String,
}

impl ListRow {
    pub fn build<R>(dish: &Dish, hall_name: Option<&str>, resolver: &R) -> Self
    where
        R: IconResolver + ?Sized,
    {
        let category = dish.category.as_deref();
        let icon = resolver.resolve(&dish.dish_name, category);
        tracing::debug!(dish = %dish.dish_name, ?icon, "Resolved dish icon");

        let subtitle = [category, hall_name]
            .into_iter()
            .flatten()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" · ");

        Self {
            icon,
            title: dish.dish_name.clone(),
            subtitle,
            calories: format!("{} kcal", dish.calories),
            protein: format!("{}g P", dish.protein),
        }
    }
}

/// Message shown when a listing has no rows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyState {
    pub message: &'static str,
    pub hint: &'static str,
}

pub fn empty_state(search: &str, active_category: &str) -> EmptyState {
    if !search.is_empty() || active_category != ALL_CATEGORIES {
        EmptyState {
            message: "No dishes match",
            hint: "Try a different search term or category.",
        }
    } else {
        EmptyState {
            message: "No dishes found",
            hint: "This hall has no dishes in the database.",
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum MenuError {
    #[error("Invalid halls payload: {0}")]
    InvalidPayload(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StubResolver;

    impl IconResolver for StubResolver {
        fn icon_set(&self) -> &str {
            "stub"
        }

        fn resolve(&self, dish_name: &str, _category: Option<&str>) -> IconResult {
            IconResult::icon(dish_name.to_uppercase())
        }
    }

    fn dish(id: u64, name: &str, category: Option<&str>) -> Dish {
        Dish {
            dish_id: id,
            dish_name: name.to_string(),
            calories: 320,
            protein: 14,
            carbohydrates: 30,
            fat: 9,
            category: category.map(str::to_string),
        }
    }

    fn hall() -> DiningHall {
        DiningHall {
            id: 1,
            name: "ISR Dining".to_string(),
            location: "Illinois St".to_string(),
            dishes: vec![
                dish(1, "Grilled Shrimp Tacos", Some("protein")),
                dish(2, "Caesar Salad", Some("vegetable")),
                dish(3, "Blueberry Overnight Oats", Some("grain")),
                dish(4, "Chicken Tikka Masala", Some("protein")),
                dish(5, "House Mix", None),
                dish(6, "Daily Special", Some("")),
            ],
        }
    }

    #[test]
    fn test_parse_bare_list() {
        let halls = parse_halls(r#"[{ "Dining_Hall_ID": 1, "name": "PAR", "location": "", "dishes": [] }]"#)
            .unwrap();
        assert_eq!(halls.len(), 1);
        assert_eq!(halls[0].name, "PAR");
    }

    #[test]
    fn test_parse_paginated_page() {
        let json = r#"{ "count": 1, "results": [{ "Dining_Hall_ID": 9, "name": "FAR" }] }"#;
        let halls = parse_halls(json).unwrap();
        assert_eq!(halls[0].id, 9);
        assert!(halls[0].dishes.is_empty());

        // a page without results is an empty listing
        assert!(parse_halls(r#"{ "detail": "none" }"#).unwrap().is_empty());
    }

    #[test]
    fn test_parse_invalid() {
        assert!(matches!(parse_halls("not json"), Err(MenuError::InvalidPayload(_))));
        assert!(parse_halls("42").is_err());
    }

    #[test]
    fn test_find_hall() {
        let halls = vec![hall()];
        assert_eq!(find_hall(&halls, 1).map(|h| h.name.as_str()), Some("ISR Dining"));
        assert!(find_hall(&halls, 2).is_none());
    }

    #[test]
    fn test_category_chips() {
        assert_eq!(
            category_chips(&hall()),
            vec!["All", "grain", "protein", "vegetable"]
        );
    }

    #[test]
    fn test_filter_by_search_and_category() {
        let hall = hall();

        let names = |dishes: Vec<&Dish>| -> Vec<String> {
            dishes.into_iter().map(|d| d.dish_name.clone()).collect()
        };

        assert_eq!(filter_dishes(&hall, "", ALL_CATEGORIES).len(), 6);
        assert_eq!(
            names(filter_dishes(&hall, "", "protein")),
            vec!["Grilled Shrimp Tacos", "Chicken Tikka Masala"]
        );
        assert_eq!(names(filter_dishes(&hall, "CHICK", ALL_CATEGORIES)), vec!["Chicken Tikka Masala"]);
        assert!(filter_dishes(&hall, "chicken", "grain").is_empty());
        // category chips compare exactly
        assert!(filter_dishes(&hall, "", "Protein").is_empty());
    }

    #[test]
    fn test_list_row() {
        let hall = hall();
        let row = ListRow::build(&hall.dishes[0], Some(&hall.name), &StubResolver);
        assert_eq!(row.icon, IconResult::icon("GRILLED SHRIMP TACOS"));
        assert_eq!(row.title, "Grilled Shrimp Tacos");
        assert_eq!(row.subtitle, "protein · ISR Dining");
        assert_eq!(row.calories, "320 kcal");
        assert_eq!(row.protein, "14g P");
    }

    #[test]
    fn test_list_row_subtitle_skips_missing_parts() {
        let hall = hall();
        assert_eq!(ListRow::build(&hall.dishes[4], Some("PAR Dining"), &StubResolver).subtitle, "PAR Dining");
        assert_eq!(ListRow::build(&hall.dishes[3], None, &StubResolver).subtitle, "protein");
        assert_eq!(ListRow::build(&hall.dishes[5], None, &StubResolver).subtitle, "");
    }

    #[test]
    fn test_empty_state() {
        assert_eq!(empty_state("", ALL_CATEGORIES).message, "No dishes found");
        assert_eq!(empty_state("pho", ALL_CATEGORIES).message, "No dishes match");
        assert_eq!(
            empty_state("", "soup").hint,
            "Try a different search term or category."
        );
    }
}
