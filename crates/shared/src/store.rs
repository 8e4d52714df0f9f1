use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::PathBuf;

/// Store key for the persisted [`crate::UserPreferences`].
pub const PREFS_KEY: &str = "user_prefs";
/// Store key for the persisted [`crate::LastRun`].
pub const LAST_RUN_KEY: &str = "last_run";
/// Store key for an optional [`crate::CreatorConstitution`] override.
/// Read by the app, never written by it.
pub const CONSTITUTION_KEY: &str = "constitution";

/// Typed key-value store over JSON files in the user config directory.
///
/// Reads are tolerant: a missing or corrupt value falls back to the
/// caller-supplied default so a bad file never blocks startup.
pub struct PreferenceStore {
    dir: PathBuf,
}

impl PreferenceStore {
    /// Open the store at the standard location, creating the directory
    /// if needed.
    pub fn open() -> Result<Self> {
        let dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join("echomind");

        fs::create_dir_all(&dir).context("Failed to create config directory")?;

        Ok(Self { dir })
    }

    /// Open the store at an explicit directory. Used by tests.
    pub fn at(dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&dir).context("Failed to create store directory")?;
        Ok(Self { dir })
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }

    /// Read the value for `key`, falling back to `default` when the file
    /// is absent, unreadable, or not valid JSON for `T`.
    pub fn get<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        let path = self.key_path(key);

        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(_) => return default,
        };

        match serde_json::from_str(&content) {
            Ok(value) => value,
            Err(e) => {
                eprintln!(
                    "Warning: ignoring corrupt value for '{}' ({}): {}",
                    key,
                    path.display(),
                    e
                );
                default
            }
        }
    }

    /// Write the value for `key`, overwriting any previous value.
    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value)
            .with_context(|| format!("Failed to serialize value for '{}'", key))?;

        let path = self.key_path(key);
        fs::write(&path, json)
            .with_context(|| format!("Failed to write {}", path.display()))?;

        Ok(())
    }
}
