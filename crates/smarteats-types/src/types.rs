use serde::{Deserialize, Serialize};

/// Rendering instruction for a single dish
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum IconResult {
    /// Static image asset addressed by its code
    Icon { code: String },
    /// Circular letter badge
    Pill {
        letter: String,
        background: String,
        foreground: String,
    },
}

impl IconResult {
    pub fn icon(code: impl Into<String>) -> Self {
        IconResult::Icon { code: code.into() }
    }

    pub fn code(&self) -> Option<&str> {
        match self {
            IconResult::Icon { code } => Some(code),
            IconResult::Pill { .. } => None,
        }
    }

    pub fn is_pill(&self) -> bool {
        matches!(self, IconResult::Pill { .. })
    }

    /// Asset location for icon results, e.g. `/icons/food/1F357.svg`
    pub fn asset_path(&self, asset_dir: &str, extension: &str) -> Option<String> {
        self.code().map(|code| {
            format!(
                "{}/{}.{}",
                asset_dir.trim_end_matches('/'),
                code,
                extension.trim_start_matches('.')
            )
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl IconSize {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "sm" => Some(IconSize::Sm),
            "md" => Some(IconSize::Md),
            "lg" => Some(IconSize::Lg),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            IconSize::Sm => "sm",
            IconSize::Md => "md",
            IconSize::Lg => "lg",
        }
    }

    /// Edge length in pixels
    pub fn px(&self) -> u32 {
        match self {
            IconSize::Sm => 20,
            IconSize::Md => 28,
            IconSize::Lg => 40,
        }
    }

    /// Letter size used inside a pill of this size
    pub fn pill_font_px(&self) -> f32 {
        self.px() as f32 * 0.42
    }
}

/// Dish record as returned by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dish {
    pub dish_id: u64,
    pub dish_name: String,
    #[serde(default)]
    pub calories: u32,
    #[serde(default)]
    pub protein: u32,
    #[serde(default)]
    pub carbohydrates: u32,
    #[serde(default)]
    pub fat: u32,
    #[serde(default)]
    pub category: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiningHall {
    #[serde(rename = "Dining_Hall_ID")]
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub dishes: Vec<Dish>,
}
