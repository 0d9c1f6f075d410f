use serde::{Deserialize, Serialize};

/// Coarse dish classification used by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FoodCategory {
    Fruit,
    Vegetable,
    Grain,
    Protein,
    Dairy,
    Dessert,
    Drink,
    Soup,
    Other,
}

impl FoodCategory {
    pub const ALL: [FoodCategory; 9] = [
        FoodCategory::Fruit,
        FoodCategory::Vegetable,
        FoodCategory::Grain,
        FoodCategory::Protein,
        FoodCategory::Dairy,
        FoodCategory::Dessert,
        FoodCategory::Drink,
        FoodCategory::Soup,
        FoodCategory::Other,
    ];

    /// Case-insensitive lookup; anything outside the canonical set is `None`
    pub fn from_label(label: &str) -> Option<Self> {
        match label.to_lowercase().as_str() {
            "fruit" => Some(FoodCategory::Fruit),
            "vegetable" => Some(FoodCategory::Vegetable),
            "grain" => Some(FoodCategory::Grain),
            "protein" => Some(FoodCategory::Protein),
            "dairy" => Some(FoodCategory::Dairy),
            "dessert" => Some(FoodCategory::Dessert),
            "drink" => Some(FoodCategory::Drink),
            "soup" => Some(FoodCategory::Soup),
            "other" => Some(FoodCategory::Other),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FoodCategory::Fruit => "fruit",
            FoodCategory::Vegetable => "vegetable",
            FoodCategory::Grain => "grain",
            FoodCategory::Protein => "protein",
            FoodCategory::Dairy => "dairy",
            FoodCategory::Dessert => "dessert",
            FoodCategory::Drink => "drink",
            FoodCategory::Soup => "soup",
            FoodCategory::Other => "other",
        }
    }
}
