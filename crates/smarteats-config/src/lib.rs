use serde::{Deserialize, Serialize};

use self::api::ApiConfig;
use self::icons::IconConfig;
use self::ui::UiConfig;

pub mod api;
pub mod icons;
pub mod ui;

#[derive(Debug, Default, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub icons: IconConfig,
    pub ui: UiConfig,
}

impl Config {
    /// Defaults overridden by `SMARTEATS_*` environment variables
    pub fn new() -> Self {
        Config {
            api: ApiConfig::new(),
            icons: IconConfig::new(),
            ui: UiConfig::default(),
        }
    }
}
