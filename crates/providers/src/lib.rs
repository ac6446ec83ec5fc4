//! Chat-completion request construction and the outbound API client.

mod client;
mod request;

pub use client::{ChatClient, TranslateOutcome};
pub use request::{BuildError, ChatMessage, ChatRequest};
