//! Non-sensitive style preferences.

use serde::{Deserialize, Serialize};

/// Default position for each of the three style dials.
pub const DEFAULT_DIAL: f32 = 0.5;
/// Default persona label.
pub const DEFAULT_CORPORATE_STYLE: &str = "Business Executive";
/// Default visual theme label.
pub const DEFAULT_BRANDING_THEME: &str = "General Business";

/// Persona options offered by the settings surface. The empty entry means
/// "no persona clause" in the generated prompt.
pub const CORPORATE_STYLES: &[&str] = &[
    "",
    "Business Executive",
    "Engineering Manager",
    "Agile Product Owner",
    "Marketing Executive",
];

/// Visual theme options offered by the settings surface.
pub const BRANDING_THEMES: &[&str] = &[
    "General Business",
    "Executive Mahogany",
    "Cube Farm Chic",
    "Marketing",
];

/// The five style preferences, persisted in the plain (non-encrypted) store.
///
/// The dials live in `[0, 1]` by convention but are not range-checked on
/// load; whatever was stored is what callers get back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StylePreferences {
    pub jargon_density: f32,
    pub urgency_meter: f32,
    pub verbosity: f32,
    pub corporate_style: String,
    pub branding_theme: String,
}

impl Default for StylePreferences {
    fn default() -> Self {
        Self {
            jargon_density: DEFAULT_DIAL,
            urgency_meter: DEFAULT_DIAL,
            verbosity: DEFAULT_DIAL,
            corporate_style: DEFAULT_CORPORATE_STYLE.to_string(),
            branding_theme: DEFAULT_BRANDING_THEME.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let prefs = StylePreferences::default();
        assert_eq!(prefs.jargon_density, 0.5);
        assert_eq!(prefs.urgency_meter, 0.5);
        assert_eq!(prefs.verbosity, 0.5);
        assert_eq!(prefs.corporate_style, "Business Executive");
        assert_eq!(prefs.branding_theme, "General Business");
    }

    #[test]
    fn test_catalogs_contain_defaults() {
        assert!(CORPORATE_STYLES.contains(&DEFAULT_CORPORATE_STYLE));
        assert!(BRANDING_THEMES.contains(&DEFAULT_BRANDING_THEME));
    }
}
