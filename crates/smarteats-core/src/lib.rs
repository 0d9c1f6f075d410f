pub mod category;
pub mod menu;
pub mod palette;
pub mod preprocess;
pub mod resolver;
pub mod rules;

pub use category::FoodCategory;
pub use palette::{Palette, PillColors};
pub use resolver::IconResolver;
pub use rules::{KeywordRule, RuleError, RuleTable};
