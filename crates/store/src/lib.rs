//! Durable key-value storage for Embizzolator.
//!
//! Two independent stores live side by side under one root directory:
//!
//! - [`PreferenceStore`]: the five style preferences, plain JSON.
//! - [`CredentialStore`]: endpoint credentials and the optional access
//!   password, encrypted at rest with a locally generated master key.
//!
//! The stores share nothing beyond the root path. If one is reset the other
//! is untouched; no cross-store reconciliation exists.
//!
//! [`AccessGate`] is the lock state machine that sits in front of the
//! credential store in any consuming front-end.

mod credentials;
mod error;
mod gate;
mod prefs;
mod vault;

pub use credentials::CredentialStore;
pub use error::{Result, StoreError};
pub use gate::{AccessGate, GateError};
pub use prefs::PreferenceStore;
