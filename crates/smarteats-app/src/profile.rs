use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use smarteats_config::Config;

/// Represents a user profile
#[derive(Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub value: Config,
}

/// Load the config stored in a profile file
pub fn load_profile(path: &Path) -> anyhow::Result<Config> {
    tracing::info!("Loading profile from {}", path.display());
    let data = fs::read_to_string(path)
        .with_context(|| format!("Failed to read profile {}", path.display()))?;
    let profile: Profile = serde_json::from_str(&data)
        .with_context(|| format!("Failed to parse profile {}", path.display()))?;
    tracing::info!("Using profile {}", profile.name);
    Ok(profile.value)
}

/// Write a profile holding the current defaults, refusing to overwrite
pub fn init_profile(path: &Path, name: &str, config: Config) -> anyhow::Result<()> {
    if path.exists() {
        anyhow::bail!("Profile {} already exists", path.display());
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let profile = Profile {
        name: name.into(),
        value: config,
    };
    fs::write(path, serde_json::to_string_pretty(&profile)?)?;
    tracing::info!("Created profile {name} at {}", path.display());
    Ok(())
}
