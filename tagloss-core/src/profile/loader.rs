//! Embedded profile registry

use std::collections::HashMap;
use std::sync::OnceLock;

use super::types::ProfileConfig;
use crate::error::ProfileError;

static PROFILES: OnceLock<HashMap<String, ProfileConfig>> = OnceLock::new();

fn load_embedded_profiles() -> Result<HashMap<String, ProfileConfig>, ProfileError> {
    let mut profiles = HashMap::new();

    let embedded = [("ectb", include_str!("../../configs/profiles/ectb.toml"))];

    for (name, toml_content) in embedded {
        let config = ProfileConfig::from_toml_str(toml_content)?;

        // The registry key and the declared name must agree.
        if config.profile.name != name {
            return Err(ProfileError::NameMismatch {
                expected: name.to_string(),
                found: config.profile.name,
            });
        }

        profiles.insert(name.to_string(), config);
    }

    Ok(profiles)
}

fn registry() -> &'static HashMap<String, ProfileConfig> {
    PROFILES.get_or_init(|| load_embedded_profiles().expect("Failed to load embedded profiles"))
}

/// Look up an embedded profile by name
pub fn get_profile(name: &str) -> Result<&'static ProfileConfig, ProfileError> {
    registry()
        .get(name)
        .ok_or_else(|| ProfileError::UnknownProfile(name.to_string()))
}

/// Names of every embedded profile
pub fn list_available_profiles() -> Vec<&'static str> {
    registry().keys().map(|name| name.as_str()).collect()
}
