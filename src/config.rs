use anyhow::Context;
use log::info;
use serde::Deserialize;
use std::{
    fs::File,
    path::{Path, PathBuf},
};

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Where the saved theme preference lives
    pub preference_path: PathBuf,
    /// Set false to skip geolocation entirely; resolution then always falls
    /// back to light when no preference is saved
    pub geolocation: bool,
}

impl Config {
    const PATH: &'static str = "./config.json";

    /// Load config from disk, or fall back to defaults if there is no file
    pub fn load() -> anyhow::Result<Self> {
        if !Path::new(Self::PATH).exists() {
            info!("No config file at `{}`, using defaults", Self::PATH);
            return Ok(Self::default());
        }
        info!("Loading config from `{}`", Self::PATH);
        let file = File::open(Self::PATH)?;
        serde_json::from_reader(file)
            .context(format!("Error parsing config file {}", Self::PATH))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            preference_path: PathBuf::from("./preference.json"),
            geolocation: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config() {
        let config: Config =
            serde_json::from_str("{\"geolocation\": false}").unwrap();
        assert!(!config.geolocation);
        assert_eq!(
            config.preference_path,
            PathBuf::from("./preference.json")
        );
    }
}
