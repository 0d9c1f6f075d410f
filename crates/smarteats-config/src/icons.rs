use std::env;

use serde::{Deserialize, Serialize};
use smarteats_types::IconSize;

fn default_asset_dir() -> String {
    "/icons/food".to_string()
}

fn default_extension() -> String {
    "svg".to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct IconConfig {
    /// Directory the static icon assets are served from
    #[serde(default = "default_asset_dir")]
    pub asset_dir: String,
    #[serde(default = "default_extension")]
    pub extension: String,
    #[serde(default)]
    pub size: IconSize,
}

impl Default for IconConfig {
    fn default() -> Self {
        Self {
            asset_dir: default_asset_dir(),
            extension: default_extension(),
            size: IconSize::default(),
        }
    }
}

impl IconConfig {
    pub fn new() -> Self {
        let asset_dir = env::var("SMARTEATS_ICON_DIR").unwrap_or_else(|_| default_asset_dir());

        let size = match env::var("SMARTEATS_ICON_SIZE") {
            Ok(value) => IconSize::from_str(&value).unwrap_or_else(|| {
                tracing::warn!("Unknown icon size {value:?}, using md");
                IconSize::default()
            }),
            Err(_) => IconSize::default(),
        };

        Self {
            asset_dir,
            extension: default_extension(),
            size,
        }
    }
}
