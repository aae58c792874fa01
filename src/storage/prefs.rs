//! Durable user preferences: color theme and cumulative visit counter.
//!
//! Unlike the session history these survive across sessions, stored as JSON
//! in the platform config directory. Same rules as the session store:
//! atomic writes, and a missing or corrupt file silently becomes the
//! defaults. `DLTM_CONVERTER_CONFIG_DIR` overrides the location for tests.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

const PREFS_FILENAME: &str = "prefs.json";

/// Environment override for the config directory (used by tests)
pub const CONFIG_DIR_ENV: &str = "DLTM_CONVERTER_CONFIG_DIR";

/// Color theme preference for the TUI
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThemePreference {
    #[default]
    Dark,
    Light,
}

impl ThemePreference {
    pub fn toggle(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default)]
    pub theme: ThemePreference,
    /// Number of times the interactive converter has been opened
    #[serde(default)]
    pub visits: u64,
}

/// Path of the preferences file
pub fn prefs_path() -> PathBuf {
    let base = match env::var(CONFIG_DIR_ENV) {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => dirs::config_dir().unwrap_or_else(env::temp_dir).join("dltm-converter"),
    };
    base.join(PREFS_FILENAME)
}

/// Load preferences, treating a missing or unreadable file as defaults
pub fn load_prefs(path: &Path) -> Preferences {
    let Ok(json) = fs::read_to_string(path) else {
        return Preferences::default();
    };
    serde_json::from_str(&json).unwrap_or_default()
}

/// Save preferences atomically (temp file + rename)
pub fn save_prefs(path: &Path, prefs: &Preferences) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
    }

    let json = serde_json::to_string_pretty(prefs).context("Failed to serialize preferences")?;
    let temp_path = path.with_extension("json.tmp");
    fs::write(&temp_path, json).context("Failed to write preferences temp file")?;
    fs::rename(&temp_path, path).context("Failed to rename preferences temp file")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_for_missing_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let prefs = load_prefs(&dir.path().join("prefs.json"));
        assert_eq!(prefs, Preferences::default());
        assert_eq!(prefs.theme, ThemePreference::Dark);
        assert_eq!(prefs.visits, 0);
    }

    #[test]
    fn test_defaults_for_corrupt_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("prefs.json");
        fs::write(&path, "\"visits\": what").unwrap();
        assert_eq!(load_prefs(&path), Preferences::default());
    }

    #[test]
    fn test_round_trip() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("prefs.json");

        let prefs = Preferences { theme: ThemePreference::Light, visits: 42 };
        save_prefs(&path, &prefs).unwrap();
        assert_eq!(load_prefs(&path), prefs);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        // Older files without the visits field still load
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("prefs.json");
        fs::write(&path, r#"{"theme":"Light"}"#).unwrap();

        let prefs = load_prefs(&path);
        assert_eq!(prefs.theme, ThemePreference::Light);
        assert_eq!(prefs.visits, 0);
    }

    #[test]
    fn test_theme_toggle() {
        assert_eq!(ThemePreference::Dark.toggle(), ThemePreference::Light);
        assert_eq!(ThemePreference::Light.toggle(), ThemePreference::Dark);
    }
}
