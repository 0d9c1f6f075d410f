use smarteats_core::palette::pill_letter;
use smarteats_core::preprocess::{DefaultPreprocessor, Preprocessor};
use smarteats_core::{IconResolver, Palette, RuleTable};
use smarteats_types::IconResult;

use crate::categories::category_icon_for_label;
use crate::keywords::keyword_rules;
use crate::palette::PILL_PALETTE;

/// Which strategy produced a result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Keyword,
    Category,
    Pill,
}

impl Tier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Keyword => "keyword",
            Tier::Category => "category",
            Tier::Pill => "pill",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub tier: Tier,
    pub result: IconResult,
}

/// Keyword → category → letter pill resolver over the OpenMoji tables
#[derive(Clone, Copy)]
pub struct FoodIconResolver {
    rules: &'static RuleTable,
    palette: &'static Palette,
}

impl FoodIconResolver {
    pub fn new() -> Self {
        Self {
            rules: keyword_rules(),
            palette: &PILL_PALETTE,
        }
    }

    /// Resolve and report the tier that matched
    pub fn explain(&self, dish_name: &str, category: Option<&str>) -> Resolution {
        let normalized = DefaultPreprocessor.process(dish_name);

        // Tier 1: keyword match
        if let Some(rule) = self.rules.first_match(&normalized) {
            return Resolution {
                tier: Tier::Keyword,
                result: IconResult::icon(rule.code()),
            };
        }

        // Tier 2: category match
        if let Some(code) = category.and_then(category_icon_for_label) {
            return Resolution {
                tier: Tier::Category,
                result: IconResult::icon(code),
            };
        }

        // Tier 3: letter pill, derived from the raw name
        let colors = self.palette.pick(dish_name);
        Resolution {
            tier: Tier::Pill,
            result: IconResult::Pill {
                letter: pill_letter(dish_name),
                background: colors.background.to_string(),
                foreground: colors.foreground.to_string(),
            },
        }
    }
}

impl Default for FoodIconResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl IconResolver for FoodIconResolver {
    fn icon_set(&self) -> &str {
        "openmoji"
    }

    fn resolve(&self, dish_name: &str, category: Option<&str>) -> IconResult {
        self.explain(dish_name, category).result
    }
}
