use anyhow::{Context, anyhow};
use clap::{Parser, Subcommand};
use inquire::{Password, PasswordDisplayMode, Text};
use tracing::{info, warn};
use weather_core::{Config, load_dashboard, provider_from_config};
use weather_web::{AppState, view::NOT_FOUND_MESSAGE};

use crate::render;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather", version, about = "Live weather dashboard")]
pub struct Cli {
    /// Enable debug logging (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeather API key and default city.
    Configure,

    /// Print the dashboard for a city to the terminal.
    Show {
        /// City name; defaults to the configured city.
        city: Option<String>,
    },

    /// Serve the HTML dashboard.
    Serve {
        /// Listen address, e.g. 127.0.0.1:8501.
        #[arg(long)]
        bind: Option<String>,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Show { city } => show(city).await,
            Command::Serve { bind } => serve(bind).await,
        }
    }
}

fn configure() -> anyhow::Result<()> {
    let mut cfg = Config::load_file()?;

    let api_key = Password::new("OpenWeather API key:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;

    let default_city = Text::new("Default city:")
        .with_default(cfg.default_city())
        .prompt()
        .context("Failed to read default city")?;

    let api_key = api_key.trim();
    if !api_key.is_empty() {
        cfg.api_key = Some(api_key.to_string());
    }
    cfg.default_city = Some(default_city.trim().to_string()).filter(|c| !c.is_empty());

    cfg.save()?;
    println!("Configuration saved to {}", Config::config_file_path()?.display());

    Ok(())
}

async fn show(city: Option<String>) -> anyhow::Result<()> {
    let cfg = Config::load()?;
    let provider = provider_from_config(&cfg);

    let city = city
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .unwrap_or(cfg.default_city())
        .to_string();

    match load_dashboard(provider.as_ref(), &city).await {
        Ok(dashboard) => {
            print!("{}", render::dashboard_text(&dashboard));
            Ok(())
        }
        Err(e) => {
            warn!(error = %e, "Dashboard unavailable");
            Err(anyhow!(NOT_FOUND_MESSAGE))
        }
    }
}

async fn serve(bind: Option<String>) -> anyhow::Result<()> {
    let cfg = Config::load()?;
    let addr = bind.unwrap_or_else(|| cfg.bind().to_string());

    let state = AppState::from_config(&cfg).context("Failed to build dashboard state")?;
    info!(default_city = %cfg.default_city(), "Starting weather dashboard");

    weather_web::serve(state, &addr)
        .await
        .with_context(|| format!("Dashboard server on {addr} failed"))
}
