//! Outbound client for the user-configured chat-completion endpoint.

use std::fmt;
use std::sync::LazyLock;
use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use shared::ConnectionSettings;

use crate::request::ChatRequest;

static SHARED_HTTP: LazyLock<Client> = LazyLock::new(|| {
    Client::builder()
        .timeout(Duration::from_secs(120))
        .pool_max_idle_per_host(2)
        .build()
        .expect("failed to build HTTP client")
});

// ── Response types ───────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

// ── Outcome ──────────────────────────────────────────────────────────

/// Result of one translation exchange. Every failure mode is a variant,
/// never a panic or an `Err` escaping the client; the `Display` impl
/// produces the exact text the front-end shows in place of a translation.
#[derive(Debug, Clone, PartialEq)]
pub enum TranslateOutcome {
    /// The endpoint answered with generated text.
    Completed(String),
    /// HTTP success but no `choices[0].message.content` in the body.
    NoContent,
    /// Non-2xx status from the endpoint.
    Http { status: u16, message: String },
    /// Connect/timeout/body-read/JSON-parse fault.
    Transport(String),
}

impl TranslateOutcome {
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Http { .. } | Self::Transport(_))
    }

    /// The string the UI displays verbatim.
    pub fn display_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for TranslateOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Completed(text) => write!(f, "{text}"),
            Self::NoContent => write!(f, "No response content."),
            Self::Http { status, message } => write!(f, "Error: {status} - {message}"),
            Self::Transport(message) => write!(f, "Error: {message}"),
        }
    }
}

// ── Client ───────────────────────────────────────────────────────────

/// One-shot chat-completion client. A single attempt per call: no retries,
/// no cancellation, timeout courtesy of the shared transport.
pub struct ChatClient {
    http: Client,
    api_url: String,
    api_key: String,
}

impl ChatClient {
    /// The request goes to `api_url` exactly as configured; no path is
    /// appended.
    pub fn new(settings: &ConnectionSettings) -> Self {
        Self {
            http: SHARED_HTTP.clone(),
            api_url: settings.api_url.clone(),
            api_key: settings.api_key.clone(),
        }
    }

    pub async fn translate(&self, request: &ChatRequest) -> TranslateOutcome {
        let resp = match self
            .http
            .post(&self.api_url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await
        {
            Ok(resp) => resp,
            Err(e) => {
                tracing::warn!("transport failure talking to endpoint: {e}");
                return TranslateOutcome::Transport(e.to_string());
            }
        };

        let status = resp.status();
        if !status.is_success() {
            tracing::warn!("endpoint returned {status}");
            return TranslateOutcome::Http {
                status: status.as_u16(),
                message: status.canonical_reason().unwrap_or("Unknown").to_string(),
            };
        }

        let body: ChatResponse = match resp.json().await {
            Ok(body) => body,
            Err(e) => {
                tracing::warn!("unparseable response body: {e}");
                return TranslateOutcome::Transport(e.to_string());
            }
        };

        match body.choices.into_iter().next().and_then(|c| c.message.content) {
            Some(text) => TranslateOutcome::Completed(text),
            None => TranslateOutcome::NoContent,
        }
    }
}
