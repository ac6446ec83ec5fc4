//! At-rest encryption layer shared by credential values.
//!
//! Values are encrypted individually with AES-256-GCM under a master key
//! generated on first write and kept next to the data file. The on-disk
//! format is a JSON map of key name to base64(nonce || ciphertext).

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use aes_gcm::aead::{Aead, KeyInit, OsRng};
use aes_gcm::{Aes256Gcm, Nonce};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use rand::RngCore;
use zeroize::Zeroizing;

use crate::error::{Result, StoreError};

const KEY_FILE: &str = "master.key";
const DATA_FILE: &str = "secure_settings.json";

const MASTER_KEY_LEN: usize = 32;
const NONCE_LEN: usize = 12;

pub(crate) struct SecretVault {
    key_path: PathBuf,
    data_path: PathBuf,
}

impl SecretVault {
    pub(crate) fn new(root: &Path) -> Self {
        Self {
            key_path: root.join(KEY_FILE),
            data_path: root.join(DATA_FILE),
        }
    }

    /// Read and decrypt a single value. Every failure mode (no file, no
    /// entry, undecodable or undecryptable value) reads as absent; there is
    /// no distinct "corrupt" answer for callers.
    pub(crate) fn get(&self, key: &str) -> Option<Zeroizing<String>> {
        let map = self.read_map();
        let encoded = map.get(key)?;
        let master = self.load_key().ok()??;

        match decrypt_value(&master, encoded) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("stored value for `{key}` failed to decrypt, treating as absent");
                None
            }
        }
    }

    /// Encrypt and persist a batch of values. The data file is rewritten
    /// via rename so concurrent readers never observe a half-written map.
    pub(crate) fn put_many(&self, entries: &[(&str, &str)]) -> Result<()> {
        let master = self.load_or_create_key()?;
        let mut map = self.read_map();

        for (key, value) in entries {
            map.insert((*key).to_string(), encrypt_value(&master, value)?);
        }

        if let Some(parent) = self.data_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let tmp = self.data_path.with_extension("json.tmp");
        fs::write(&tmp, serde_json::to_string_pretty(&map)?)?;
        fs::rename(&tmp, &self.data_path)?;
        Ok(())
    }

    fn read_map(&self) -> BTreeMap<String, String> {
        match fs::read_to_string(&self.data_path) {
            Ok(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                tracing::warn!("secure settings file unreadable, treating as empty: {e}");
                BTreeMap::new()
            }),
            Err(_) => BTreeMap::new(),
        }
    }

    fn load_key(&self) -> Result<Option<Zeroizing<Vec<u8>>>> {
        match fs::read(&self.key_path) {
            Ok(bytes) if bytes.len() == MASTER_KEY_LEN => Ok(Some(Zeroizing::new(bytes))),
            Ok(_) => {
                tracing::warn!("master key file has the wrong length");
                Err(StoreError::Crypto)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn load_or_create_key(&self) -> Result<Zeroizing<Vec<u8>>> {
        if let Some(key) = self.load_key()? {
            return Ok(key);
        }

        let mut key = Zeroizing::new(vec![0u8; MASTER_KEY_LEN]);
        OsRng.fill_bytes(&mut key);

        if let Some(parent) = self.key_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.key_path, key.as_slice())?;
        restrict_permissions(&self.key_path)?;
        tracing::info!("generated new master key");
        Ok(key)
    }
}

fn encrypt_value(master: &[u8], plaintext: &str) -> Result<String> {
    let cipher = Aes256Gcm::new_from_slice(master).map_err(|_| StoreError::Crypto)?;

    let mut nonce_bytes = [0u8; NONCE_LEN];
    OsRng.fill_bytes(&mut nonce_bytes);
    let nonce = Nonce::from_slice(&nonce_bytes);

    let ciphertext = cipher
        .encrypt(nonce, plaintext.as_bytes())
        .map_err(|_| StoreError::Crypto)?;

    let mut blob = Vec::with_capacity(NONCE_LEN + ciphertext.len());
    blob.extend_from_slice(&nonce_bytes);
    blob.extend_from_slice(&ciphertext);
    Ok(BASE64.encode(blob))
}

fn decrypt_value(master: &[u8], encoded: &str) -> Result<Zeroizing<String>> {
    let blob = BASE64.decode(encoded).map_err(|_| StoreError::Crypto)?;
    if blob.len() <= NONCE_LEN {
        return Err(StoreError::Crypto);
    }

    let cipher = Aes256Gcm::new_from_slice(master).map_err(|_| StoreError::Crypto)?;
    let nonce = Nonce::from_slice(&blob[..NONCE_LEN]);
    let plaintext = cipher
        .decrypt(nonce, &blob[NONCE_LEN..])
        .map_err(|_| StoreError::Crypto)?;

    String::from_utf8(plaintext)
        .map(Zeroizing::new)
        .map_err(|_| StoreError::Crypto)
}

#[cfg(unix)]
fn restrict_permissions(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o600))?;
    Ok(())
}

#[cfg(not(unix))]
fn restrict_permissions(_path: &Path) -> Result<()> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let vault = SecretVault::new(dir.path());

        vault.put_many(&[("alpha", "one"), ("beta", "two")]).unwrap();
        assert_eq!(vault.get("alpha").unwrap().as_str(), "one");
        assert_eq!(vault.get("beta").unwrap().as_str(), "two");
        assert!(vault.get("gamma").is_none());
    }

    #[test]
    fn test_plaintext_never_hits_disk() {
        let dir = tempfile::tempdir().unwrap();
        let vault = SecretVault::new(dir.path());

        vault.put_many(&[("api_key", "sk-very-secret-value")]).unwrap();
        let raw = fs::read_to_string(dir.path().join(DATA_FILE)).unwrap();
        assert!(!raw.contains("sk-very-secret-value"));
    }

    #[test]
    fn test_overwrite_replaces_value() {
        let dir = tempfile::tempdir().unwrap();
        let vault = SecretVault::new(dir.path());

        vault.put_many(&[("k", "first")]).unwrap();
        vault.put_many(&[("k", "second")]).unwrap();
        assert_eq!(vault.get("k").unwrap().as_str(), "second");
    }

    #[test]
    fn test_tampered_value_reads_as_absent() {
        let dir = tempfile::tempdir().unwrap();
        let vault = SecretVault::new(dir.path());

        vault.put_many(&[("k", "value")]).unwrap();

        let data_path = dir.path().join(DATA_FILE);
        let mut map: BTreeMap<String, String> =
            serde_json::from_str(&fs::read_to_string(&data_path).unwrap()).unwrap();
        map.insert("k".to_string(), BASE64.encode(b"garbage-garbage-garbage"));
        fs::write(&data_path, serde_json::to_string(&map).unwrap()).unwrap();

        assert!(vault.get("k").is_none());
    }
}
