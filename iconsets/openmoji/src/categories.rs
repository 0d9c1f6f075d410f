use smarteats_core::FoodCategory;

/// Representative icon for each category
pub fn category_icon(category: FoodCategory) -> &'static str {
    match category {
        FoodCategory::Fruit => "1F34E",
        FoodCategory::Vegetable => "1F966",
        FoodCategory::Grain => "1F35E",
        FoodCategory::Protein => "1F357",
        FoodCategory::Dairy => "1F9C0",
        FoodCategory::Dessert => "1F370",
        FoodCategory::Drink => "1F95B",
        FoodCategory::Soup => "1F372",
        FoodCategory::Other => "1F37D",
    }
}

/// Icon for a raw category label, `None` outside the canonical set
pub fn category_icon_for_label(label: &str) -> Option<&'static str> {
    FoodCategory::from_label(label).map(category_icon)
}
