//! Lock state machine in front of the credential store.

use thiserror::Error;

use crate::credentials::CredentialStore;
use crate::error::StoreError;

#[derive(Debug, Error)]
pub enum GateError {
    #[error("incorrect password")]
    WrongPassword,

    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GateState {
    Unlocked,
    Locked,
}

/// Gates read/write access to credential fields behind the stored password.
///
/// The gate starts `Locked` whenever a password exists, so a fresh process
/// always re-locks. There is no timeout-based re-locking and no attempt
/// limit; the password comparison is exact string equality against the
/// stored value, which the source design accepts as-is (see DESIGN.md for
/// the recorded weakness).
pub struct AccessGate {
    state: GateState,
}

impl AccessGate {
    /// Initial state is derived from whether a password was ever stored.
    pub fn for_store(store: &CredentialStore) -> Self {
        let state = if store.is_password_set() {
            GateState::Locked
        } else {
            GateState::Unlocked
        };
        Self { state }
    }

    pub fn is_locked(&self) -> bool {
        self.state == GateState::Locked
    }

    /// Attempt to unlock with a candidate password. A wrong candidate leaves
    /// the gate locked; with no password stored the gate simply opens.
    pub fn unlock(&mut self, store: &CredentialStore, candidate: &str) -> Result<(), GateError> {
        match store.password() {
            Some(stored) if stored.as_str() == candidate => {
                self.state = GateState::Unlocked;
                Ok(())
            }
            Some(_) => {
                tracing::debug!("unlock attempt rejected");
                Err(GateError::WrongPassword)
            }
            None => {
                self.state = GateState::Unlocked;
                Ok(())
            }
        }
    }

    /// Store (or overwrite) the password and lock the gate. Called while
    /// already locked this re-arms with the new password and stays locked.
    pub fn lock(&mut self, store: &CredentialStore, password: &str) -> Result<(), GateError> {
        store.set_password(password)?;
        self.state = GateState::Locked;
        Ok(())
    }
}
