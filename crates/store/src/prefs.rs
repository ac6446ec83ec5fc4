//! Plain key-value store for style preferences.

use std::fs;
use std::path::{Path, PathBuf};

use shared::prefs::{DEFAULT_BRANDING_THEME, DEFAULT_CORPORATE_STYLE, DEFAULT_DIAL};
use shared::StylePreferences;

use crate::error::Result;

const PREFS_FILE: &str = "style_prefs.json";

const KEY_JARGON: &str = "jargon_density";
const KEY_URGENCY: &str = "urgency_meter";
const KEY_VERBOSITY: &str = "verbosity";
const KEY_STYLE: &str = "corporate_style";
const KEY_THEME: &str = "branding_theme";

/// Non-encrypted preference storage, one JSON file of five keys.
///
/// Reads never fail: a missing or mistyped key resolves to its default,
/// key by key, so a partially corrupt file degrades gracefully instead of
/// wiping the surviving values.
pub struct PreferenceStore {
    path: PathBuf,
}

impl PreferenceStore {
    /// Create a store rooted at `root`. The file is created lazily on the
    /// first `set`.
    pub fn new(root: &Path) -> Self {
        Self {
            path: root.join(PREFS_FILE),
        }
    }

    pub fn get(&self) -> StylePreferences {
        let map = match fs::read_to_string(&self.path) {
            Ok(raw) => match serde_json::from_str::<serde_json::Value>(&raw) {
                Ok(value) => value,
                Err(e) => {
                    tracing::warn!("preference file is not valid JSON, using defaults: {e}");
                    serde_json::Value::Null
                }
            },
            // No prior value and unreadable file are the same thing here.
            Err(_) => serde_json::Value::Null,
        };

        StylePreferences {
            jargon_density: dial_or_default(&map, KEY_JARGON),
            urgency_meter: dial_or_default(&map, KEY_URGENCY),
            verbosity: dial_or_default(&map, KEY_VERBOSITY),
            corporate_style: string_or_default(&map, KEY_STYLE, DEFAULT_CORPORATE_STYLE),
            branding_theme: string_or_default(&map, KEY_THEME, DEFAULT_BRANDING_THEME),
        }
    }

    /// Persist all five preferences. Write-then-rename keeps the update
    /// all-or-nothing from the reader's perspective.
    pub fn set(&self, prefs: &StylePreferences) -> Result<()> {
        let body = serde_json::json!({
            KEY_JARGON: prefs.jargon_density,
            KEY_URGENCY: prefs.urgency_meter,
            KEY_VERBOSITY: prefs.verbosity,
            KEY_STYLE: prefs.corporate_style,
            KEY_THEME: prefs.branding_theme,
        });

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, serde_json::to_string_pretty(&body)?)?;
        fs::rename(&tmp, &self.path)?;
        tracing::debug!("saved style preferences");
        Ok(())
    }
}

fn dial_or_default(map: &serde_json::Value, key: &str) -> f32 {
    map.get(key)
        .and_then(|v| v.as_f64())
        .map(|v| v as f32)
        .unwrap_or(DEFAULT_DIAL)
}

fn string_or_default(map: &serde_json::Value, key: &str, default: &str) -> String {
    map.get(key)
        .and_then(|v| v.as_str())
        .map(|s| s.to_string())
        .unwrap_or_else(|| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_returns_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = PreferenceStore::new(dir.path());
        assert_eq!(store.get(), StylePreferences::default());
    }

    #[test]
    fn test_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = PreferenceStore::new(dir.path());

        let prefs = StylePreferences {
            jargon_density: 0.1,
            urgency_meter: 0.75,
            verbosity: 1.0,
            corporate_style: "Engineering Manager".to_string(),
            branding_theme: "Cube Farm Chic".to_string(),
        };
        store.set(&prefs).unwrap();
        assert_eq!(store.get(), prefs);
    }

    #[test]
    fn test_mistyped_key_falls_back_per_key() {
        let dir = tempfile::tempdir().unwrap();
        let store = PreferenceStore::new(dir.path());

        // jargon_density has the wrong type; the other keys are intact.
        fs::write(
            dir.path().join(PREFS_FILE),
            r#"{"jargon_density": "oops", "urgency_meter": 0.9, "corporate_style": "Marketing Executive"}"#,
        )
        .unwrap();

        let prefs = store.get();
        assert_eq!(prefs.jargon_density, DEFAULT_DIAL);
        assert_eq!(prefs.urgency_meter, 0.9);
        assert_eq!(prefs.verbosity, DEFAULT_DIAL);
        assert_eq!(prefs.corporate_style, "Marketing Executive");
        assert_eq!(prefs.branding_theme, DEFAULT_BRANDING_THEME);
    }

    #[test]
    fn test_corrupt_file_returns_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = PreferenceStore::new(dir.path());
        fs::write(dir.path().join(PREFS_FILE), "not json").unwrap();
        assert_eq!(store.get(), StylePreferences::default());
    }

    #[test]
    fn test_out_of_range_dial_is_not_clamped() {
        let dir = tempfile::tempdir().unwrap();
        let store = PreferenceStore::new(dir.path());
        fs::write(dir.path().join(PREFS_FILE), r#"{"verbosity": 3.5}"#).unwrap();
        assert_eq!(store.get().verbosity, 3.5);
    }
}
