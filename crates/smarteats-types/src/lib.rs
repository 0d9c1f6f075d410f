pub mod types;

pub use types::{DiningHall, Dish, IconResult, IconSize};
