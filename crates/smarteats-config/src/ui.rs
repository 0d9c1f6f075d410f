use serde::{Deserialize, Serialize};

fn default_show_macros() -> bool {
    true
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct UiConfig {
    /// Show calorie and protein badges on list rows
    #[serde(default = "default_show_macros")]
    pub show_macros: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            show_macros: default_show_macros(),
        }
    }
}
