//! Persistence for the user's explicit theme choice. The store holds at most
//! one value; absence means the user has never toggled manually.

use crate::theme::Theme;
use anyhow::Context;
use log::{error, info};
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

/// Where the saved preference lives. Only a manual toggle ever writes it;
/// automatic inference just reads.
pub trait PreferenceStore {
    /// The saved preference, if there is one. Anything unreadable counts as
    /// absent.
    fn load(&self) -> Option<Theme>;

    /// Overwrite the saved preference
    fn save(&mut self, theme: Theme) -> anyhow::Result<()>;
}

/// Preference storage backed by a JSON file on disk
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
}

/// On-disk format: `{"theme": "dark"}`
#[derive(Copy, Clone, Debug, Serialize, Deserialize)]
struct Preference {
    theme: Theme,
}

impl FileStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl PreferenceStore for FileStore {
    fn load(&self) -> Option<Theme> {
        if !self.path.exists() {
            return None;
        }
        // Shitty try block
        let helper = || {
            let contents = fs::read(&self.path)?;
            Ok::<Preference, anyhow::Error>(serde_json::from_slice(
                &contents,
            )?)
        };
        match helper() {
            Ok(preference) => Some(preference.theme),
            Err(err) => {
                error!(
                    "Error loading preference from {:?}: {}",
                    self.path, err
                );
                None
            }
        }
    }

    fn save(&mut self, theme: Theme) -> anyhow::Result<()> {
        info!("Saving preference: {theme}");
        let serialized = serde_json::to_string_pretty(&Preference { theme })?;
        fs::write(&self.path, &serialized).with_context(|| {
            format!("Error saving preference to {:?}", self.path)
        })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    /// A scratch path that won't collide across test runs
    fn scratch_path(name: &str) -> PathBuf {
        env::temp_dir()
            .join(format!("nightfire-{}-{name}", std::process::id()))
    }

    #[test]
    fn test_missing_file_is_absent() {
        let store = FileStore::new(scratch_path("missing.json"));
        assert_eq!(store.load(), None);
    }

    #[test]
    fn test_save_then_load() {
        let path = scratch_path("roundtrip.json");
        let mut store = FileStore::new(path.clone());
        store.save(Theme::Dark).unwrap();
        assert_eq!(store.load(), Some(Theme::Dark));

        // An explicit choice always overwrites the last one
        store.save(Theme::Light).unwrap();
        assert_eq!(store.load(), Some(Theme::Light));

        fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_invalid_contents_are_absent() {
        let path = scratch_path("invalid.json");
        fs::write(&path, "{\"theme\": \"sepia\"}").unwrap();
        let store = FileStore::new(path.clone());
        assert_eq!(store.load(), None);

        fs::write(&path, "not json at all").unwrap();
        assert_eq!(store.load(), None);

        fs::remove_file(path).unwrap();
    }
}
