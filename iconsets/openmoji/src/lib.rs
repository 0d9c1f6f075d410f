pub mod categories;
pub mod keywords;
pub mod palette;
pub mod resolver;

pub use categories::{category_icon, category_icon_for_label};
pub use keywords::keyword_rules;
pub use palette::PILL_PALETTE;
pub use resolver::FoodIconResolver;
