//! Shared types for the Embizzolator workspace.
//!
//! Everything here is plain data: connection settings, style preferences,
//! and the slider-to-label mapping the prompt builder uses. The stores and
//! the API client both depend on this crate, nothing depends on them.

pub mod intensity;
pub mod prefs;
pub mod settings;

pub use intensity::intensity_label;
pub use prefs::StylePreferences;
pub use settings::{ConnectionSettings, UiState};
