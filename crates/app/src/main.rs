//! Embizzolator command-line front-end.
//!
//! Thin by design: every subcommand re-opens the stores, does its work, and
//! exits. The interesting logic lives in the `store` and `providers` crates.

use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};

mod commands;
mod state;

#[derive(Parser)]
#[command(
    name = "embizzolator",
    version,
    about = "Rewrites plain text into heavy corporate jargon via a chat-completion endpoint"
)]
struct Cli {
    /// Override the configuration directory (useful for testing)
    #[arg(long, global = true, value_name = "DIR")]
    config_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Translate text into corporate jargon (reads stdin when TEXT is omitted)
    Translate { text: Option<String> },

    /// Save endpoint credentials (asks for the password once one is set)
    Configure {
        #[arg(long)]
        api_url: String,
        #[arg(long)]
        api_key: String,
        #[arg(long)]
        model_name: String,
    },

    /// Show stored settings and preferences (API key masked)
    Show {
        /// Reveal the full API key (asks for the password once one is set)
        #[arg(long)]
        reveal: bool,
    },

    /// Update style preferences
    Prefs {
        /// Jargon density dial in [0, 1]
        #[arg(long)]
        jargon_density: Option<f32>,
        /// Urgency dial in [0, 1]
        #[arg(long)]
        urgency: Option<f32>,
        /// Verbosity dial in [0, 1]
        #[arg(long)]
        verbosity: Option<f32>,
        /// Persona label, e.g. "Engineering Manager" (empty string for none)
        #[arg(long)]
        style: Option<String>,
        /// Visual theme label
        #[arg(long)]
        theme: Option<String>,
        /// List the persona and theme catalogs and exit
        #[arg(long)]
        list: bool,
    },

    /// Set or replace the access password guarding the credentials
    Lock,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let root = match cli.config_dir {
        Some(dir) => dir,
        None => config_root()?,
    };
    std::fs::create_dir_all(&root)?;

    match cli.command {
        Command::Translate { text } => commands::translate(&root, text).await,
        Command::Configure {
            api_url,
            api_key,
            model_name,
        } => commands::configure(&root, api_url, api_key, model_name),
        Command::Show { reveal } => commands::show(&root, reveal),
        Command::Prefs {
            jargon_density,
            urgency,
            verbosity,
            style,
            theme,
            list,
        } => commands::prefs(&root, jargon_density, urgency, verbosity, style, theme, list),
        Command::Lock => commands::lock(&root),
    }
}

fn config_root() -> Result<PathBuf> {
    directories::ProjectDirs::from("net", "Embizzolator", "Embizzolator")
        .map(|proj| proj.config_dir().to_path_buf())
        .ok_or_else(|| anyhow!("could not determine a configuration directory"))
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}
