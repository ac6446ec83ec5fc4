//! Encrypted storage for connection settings and the access password.

use std::path::Path;

use shared::ConnectionSettings;
use zeroize::Zeroizing;

use crate::error::Result;
use crate::vault::SecretVault;

const KEY_API_URL: &str = "api_url";
const KEY_API_KEY: &str = "api_key";
const KEY_MODEL_NAME: &str = "model_name";
const KEY_API_PASSWORD: &str = "api_password";

/// Sensitive connection settings, at rest behind [`SecretVault`].
///
/// `get` returns `None` unless all three settings fields were written; a
/// partial configuration is indistinguishable from no configuration.
pub struct CredentialStore {
    vault: SecretVault,
}

impl CredentialStore {
    pub fn new(root: &Path) -> Self {
        Self {
            vault: SecretVault::new(root),
        }
    }

    pub fn get(&self) -> Option<ConnectionSettings> {
        let api_url = self.vault.get(KEY_API_URL)?;
        let api_key = self.vault.get(KEY_API_KEY)?;
        let model_name = self.vault.get(KEY_MODEL_NAME)?;
        Some(ConnectionSettings {
            api_url: api_url.to_string(),
            api_key: api_key.to_string(),
            model_name: model_name.to_string(),
        })
    }

    pub fn set(&self, settings: &ConnectionSettings) -> Result<()> {
        self.vault.put_many(&[
            (KEY_API_URL, settings.api_url.as_str()),
            (KEY_API_KEY, settings.api_key.as_str()),
            (KEY_MODEL_NAME, settings.model_name.as_str()),
        ])?;
        tracing::info!("saved connection settings");
        Ok(())
    }

    pub fn set_password(&self, password: &str) -> Result<()> {
        self.vault.put_many(&[(KEY_API_PASSWORD, password)])?;
        tracing::info!("access password updated");
        Ok(())
    }

    pub fn password(&self) -> Option<Zeroizing<String>> {
        self.vault.get(KEY_API_PASSWORD)
    }

    pub fn is_password_set(&self) -> bool {
        self.password().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ConnectionSettings {
        ConnectionSettings {
            api_url: "https://api.example.com/v1/chat/completions".to_string(),
            api_key: "sk-test-1234567890".to_string(),
            model_name: "gpt-4o-mini".to_string(),
        }
    }

    #[test]
    fn test_absent_before_first_set() {
        let dir = tempfile::tempdir().unwrap();
        let store = CredentialStore::new(dir.path());
        assert!(store.get().is_none());
        assert!(!store.is_password_set());
    }

    #[test]
    fn test_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = CredentialStore::new(dir.path());

        store.set(&sample()).unwrap();
        assert_eq!(store.get().unwrap(), sample());
    }

    #[test]
    fn test_password_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = CredentialStore::new(dir.path());

        assert!(store.password().is_none());
        store.set_password("hunter2").unwrap();
        assert!(store.is_password_set());
        assert_eq!(store.password().unwrap().as_str(), "hunter2");

        // Settings and password are independent entries.
        assert!(store.get().is_none());
    }

    #[test]
    fn test_reopened_store_sees_saved_settings() {
        let dir = tempfile::tempdir().unwrap();
        CredentialStore::new(dir.path()).set(&sample()).unwrap();

        let reopened = CredentialStore::new(dir.path());
        assert_eq!(reopened.get().unwrap(), sample());
    }
}
