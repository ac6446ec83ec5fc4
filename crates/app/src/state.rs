//! Derived view state assembled from the two stores.

use std::path::Path;

use shared::UiState;
use store::{CredentialStore, PreferenceStore};

/// Re-read both stores and assemble the current [`UiState`]. Called at the
/// top of every subcommand; there is no cache to invalidate.
pub fn load_ui_state(root: &Path) -> UiState {
    let settings = CredentialStore::new(root).get();
    let preferences = PreferenceStore::new(root).get();
    UiState::from_parts(settings, preferences)
}
