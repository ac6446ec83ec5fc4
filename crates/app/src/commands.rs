//! Subcommand implementations.

use std::io::Read;
use std::path::Path;

use anyhow::{bail, Context, Result};
use providers::{ChatClient, ChatRequest};
use shared::intensity_label;
use shared::prefs::{BRANDING_THEMES, CORPORATE_STYLES};
use shared::ConnectionSettings;
use store::{AccessGate, CredentialStore, PreferenceStore};
use zeroize::Zeroizing;

use crate::state::load_ui_state;

pub async fn translate(root: &Path, text: Option<String>) -> Result<()> {
    let state = load_ui_state(root);
    let configured = state.configured;
    let Some(settings) = state.settings.filter(|_| configured) else {
        bail!("API settings are not configured. Run `embizzolator configure` first.");
    };

    let input = match text {
        Some(text) => text,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            buf
        }
    };

    let request = ChatRequest::build(&input, &settings, &state.preferences)
        .context("nothing to translate")?;

    eprintln!("Synergizing...");
    let outcome = ChatClient::new(&settings).translate(&request).await;

    // Success text and error strings are displayed the same way; the
    // "Error:" prefix is the only signal, exactly as the outcome renders it.
    println!("{outcome}");
    Ok(())
}

pub fn configure(root: &Path, api_url: String, api_key: String, model_name: String) -> Result<()> {
    let creds = CredentialStore::new(root);
    unlock_if_locked(&creds)?;

    creds.set(&ConnectionSettings {
        api_url,
        api_key,
        model_name,
    })?;
    println!("Connection settings saved.");
    Ok(())
}

pub fn show(root: &Path, reveal: bool) -> Result<()> {
    let prefs = PreferenceStore::new(root).get();
    println!("Style preferences:");
    println!(
        "  jargon density : {:.2} ({})",
        prefs.jargon_density,
        intensity_label(prefs.jargon_density)
    );
    println!(
        "  urgency meter  : {:.2} ({})",
        prefs.urgency_meter,
        intensity_label(prefs.urgency_meter)
    );
    println!(
        "  verbosity      : {:.2} ({})",
        prefs.verbosity,
        intensity_label(prefs.verbosity)
    );
    println!("  corporate style: {:?}", prefs.corporate_style);
    println!("  branding theme : {:?}", prefs.branding_theme);

    let creds = CredentialStore::new(root);
    match creds.get() {
        None => println!("\nNo connection settings stored."),
        Some(settings) => {
            let shown_key = if reveal {
                unlock_if_locked(&creds)?;
                settings.api_key.clone()
            } else {
                settings.masked_key()
            };
            println!("\nConnection settings:");
            println!("  endpoint : {}", settings.api_url);
            println!("  model    : {}", settings.model_name);
            println!("  api key  : {}", shown_key);
            if !settings.is_configured() {
                println!("  warning  : API key is blank, translation is disabled");
            }
        }
    }
    if creds.is_password_set() {
        println!("\nCredentials are password-locked.");
    }
    Ok(())
}

pub fn prefs(
    root: &Path,
    jargon_density: Option<f32>,
    urgency: Option<f32>,
    verbosity: Option<f32>,
    style: Option<String>,
    theme: Option<String>,
    list: bool,
) -> Result<()> {
    if list {
        println!("Corporate styles:");
        for style in CORPORATE_STYLES {
            println!("  {:?}", style);
        }
        println!("Branding themes:");
        for theme in BRANDING_THEMES {
            println!("  {:?}", theme);
        }
        return Ok(());
    }

    let store = PreferenceStore::new(root);
    let mut prefs = store.get();

    if let Some(value) = jargon_density {
        prefs.jargon_density = value;
    }
    if let Some(value) = urgency {
        prefs.urgency_meter = value;
    }
    if let Some(value) = verbosity {
        prefs.verbosity = value;
    }
    if let Some(style) = style {
        if !CORPORATE_STYLES.contains(&style.as_str()) {
            eprintln!("note: {:?} is not in the built-in style catalog", style);
        }
        prefs.corporate_style = style;
    }
    if let Some(theme) = theme {
        if !BRANDING_THEMES.contains(&theme.as_str()) {
            eprintln!("note: {:?} is not in the built-in theme catalog", theme);
        }
        prefs.branding_theme = theme;
    }

    store.set(&prefs)?;
    println!("Preferences saved.");
    Ok(())
}

pub fn lock(root: &Path) -> Result<()> {
    let creds = CredentialStore::new(root);
    let mut gate = AccessGate::for_store(&creds);

    let password = Zeroizing::new(rpassword::prompt_password("New password: ")?);
    if password.trim().is_empty() {
        bail!("Password must not be blank.");
    }
    let confirm = Zeroizing::new(rpassword::prompt_password("Confirm password: ")?);
    if *password != *confirm {
        bail!("Passwords do not match.");
    }

    gate.lock(&creds, &password)?;
    println!("Credentials locked.");
    Ok(())
}

/// Prompt for the access password when one is set; with no password the
/// credentials are always editable.
fn unlock_if_locked(creds: &CredentialStore) -> Result<()> {
    let mut gate = AccessGate::for_store(creds);
    if !gate.is_locked() {
        return Ok(());
    }
    let candidate = Zeroizing::new(rpassword::prompt_password("Password: ")?);
    if gate.unlock(creds, &candidate).is_err() {
        bail!("Incorrect password.");
    }
    Ok(())
}
