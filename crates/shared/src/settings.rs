//! Connection settings and the derived UI state view.

use serde::{Deserialize, Serialize};

use crate::prefs::StylePreferences;

/// Endpoint credentials for the chat-completion API.
///
/// An instance only exists when all three fields were stored; a partially
/// written configuration reads back as absent, never as a half-filled struct.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectionSettings {
    pub api_url: String,
    pub api_key: String,
    pub model_name: String,
}

impl ConnectionSettings {
    /// A stored configuration still counts as unconfigured while the API key
    /// is blank.
    pub fn is_configured(&self) -> bool {
        !self.api_key.trim().is_empty()
    }

    /// Mask the API key for display: first four and last four characters,
    /// or all stars when the key is too short to mask meaningfully.
    pub fn masked_key(&self) -> String {
        let chars: Vec<char> = self.api_key.chars().collect();
        if chars.len() <= 8 {
            return "********".to_string();
        }
        let head: String = chars[..4].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{}...{}", head, tail)
    }
}

/// Snapshot of everything the front-end needs, assembled from the two stores.
///
/// Recomputed on demand; there is no cache to invalidate.
#[derive(Debug, Clone, Default)]
pub struct UiState {
    pub configured: bool,
    pub settings: Option<ConnectionSettings>,
    pub preferences: StylePreferences,
}

impl UiState {
    pub fn from_parts(settings: Option<ConnectionSettings>, preferences: StylePreferences) -> Self {
        let configured = settings.as_ref().is_some_and(|s| s.is_configured());
        Self {
            configured,
            settings,
            preferences,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(api_key: &str) -> ConnectionSettings {
        ConnectionSettings {
            api_url: "https://api.example.com/v1/chat/completions".to_string(),
            api_key: api_key.to_string(),
            model_name: "gpt-4o-mini".to_string(),
        }
    }

    #[test]
    fn test_blank_api_key_is_unconfigured() {
        assert!(!settings("").is_configured());
        assert!(!settings("   ").is_configured());
        assert!(settings("sk-test").is_configured());
    }

    #[test]
    fn test_ui_state_configured_flag() {
        let state = UiState::from_parts(Some(settings("")), StylePreferences::default());
        assert!(!state.configured);

        let state = UiState::from_parts(Some(settings("sk-test")), StylePreferences::default());
        assert!(state.configured);

        let state = UiState::from_parts(None, StylePreferences::default());
        assert!(!state.configured);
        assert!(state.settings.is_none());
    }

    #[test]
    fn test_masked_key() {
        assert_eq!(settings("sk-abcdefghijklmnop").masked_key(), "sk-a...mnop");
        assert_eq!(settings("short").masked_key(), "********");
    }
}
