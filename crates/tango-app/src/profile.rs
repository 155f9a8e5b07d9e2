use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use tango_config::Config;

/// Named config stored as JSON
#[derive(Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub value: Config,
}

/// Load a profile file. Fields missing from the file keep their defaults.
pub fn load_profile(path: &Path) -> anyhow::Result<Profile> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read profile {}", path.display()))?;
    let profile: Profile = serde_json::from_str(&data)
        .with_context(|| format!("failed to parse profile {}", path.display()))?;
    tracing::info!("Loaded profile {} from {}", profile.name, path.display());
    Ok(profile)
}

/// Write a profile holding the built-in defaults. Existing files are left alone.
pub fn init_profile(path: &Path, name: &str) -> anyhow::Result<bool> {
    if path.exists() {
        tracing::warn!("Profile {} already exists, not overwriting", path.display());
        return Ok(false);
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }

    let profile = Profile {
        name: name.into(),
        value: Config::default(),
    };
    fs::write(path, serde_json::to_string_pretty(&profile)?)
        .with_context(|| format!("failed to write profile {}", path.display()))?;
    tracing::info!("Created profile {name} at {}", path.display());
    Ok(true)
}
