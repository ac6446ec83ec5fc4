//! Builds the jargon-translation prompt and the wire request around it.

use serde::Serialize;
use shared::{intensity_label, ConnectionSettings, StylePreferences};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BuildError {
    #[error("input text is empty")]
    EmptyInput,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

/// Chat-completion request body: the configured model plus a single user
/// message carrying the synthesized instruction. No multi-turn history.
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
}

impl ChatRequest {
    pub fn build(
        user_input: &str,
        settings: &ConnectionSettings,
        prefs: &StylePreferences,
    ) -> Result<Self, BuildError> {
        if user_input.trim().is_empty() {
            return Err(BuildError::EmptyInput);
        }

        Ok(Self {
            model: settings.model_name.clone(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: compose_prompt(user_input, prefs),
            }],
        })
    }
}

/// The instruction string: persona clause (skipped when the style is blank),
/// then the three intensity labels in density/urgency/verbosity order, then
/// the quoted user input.
fn compose_prompt(user_input: &str, prefs: &StylePreferences) -> String {
    let mut prompt = String::from(
        "Translate the following user input into an equivalent phrase that uses heavy corporate and business jargon.\n",
    );

    if !prefs.corporate_style.trim().is_empty() {
        prompt.push_str(&format!(
            "Adopt the persona of a {}.\n",
            prefs.corporate_style
        ));
    }

    prompt.push_str(&format!(
        "The response should have a jargon density level of \"{}\".\n",
        intensity_label(prefs.jargon_density)
    ));
    prompt.push_str(&format!(
        "The tone should reflect an urgency level of \"{}\".\n",
        intensity_label(prefs.urgency_meter)
    ));
    prompt.push_str(&format!(
        "The length of the response should reflect a verbosity level of \"{}\".\n",
        intensity_label(prefs.verbosity)
    ));

    prompt.push_str(&format!("\nUser input: \"{}\"", user_input));
    prompt
}
