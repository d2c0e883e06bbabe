//! DeskFit Dashboard CLI
//!
//! Headless host for the dashboard page bootstrapper:
//! - Run a full page load against a DeskFit server
//! - Fetch the health status line
//! - Generate a default config file

use anyhow::Context;
use clap::{Parser, Subcommand};
use deskfit_dashboard::config::{generate_default_config, Config, LoadedConfig, LoggingConfig};
use deskfit_dashboard::{
    ChartOutcome, HttpFetcher, PageBootstrapper, PreferenceOutcome, UserPreferences,
    VirtualDocument,
};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "deskfit")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Headless DeskFit dashboard page loader")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: search standard locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// DeskFit server URL (overrides config)
    #[arg(long, global = true)]
    pub base_url: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run a page load and print the resulting document and chart
    Load {
        /// Theme preference (overrides config)
        #[arg(long)]
        theme: Option<String>,
        /// Font size preference (overrides config)
        #[arg(long)]
        font_size: Option<String>,
        /// Accent color preference (overrides config)
        #[arg(long)]
        accent_color: Option<String>,
        /// Exit with an error if either load behavior did not complete
        #[arg(long)]
        strict: bool,
    },

    /// Fetch the health status and print it
    Health,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)
                        .with_context(|| format!("writing config to {:?}", path))?;
                    println!("Config written to {:?}", path);
                }
                None => print!("{}", content),
            }
        }

        Commands::Load {
            theme,
            font_size,
            accent_color,
            strict,
        } => {
            let config = load_config(cli.config, cli.base_url)?;
            let fetcher = HttpFetcher::new(
                &config.endpoints.base_url,
                config.endpoints.request_timeout(),
            )?;
            let document = VirtualDocument::dashboard_page(&config.elements);
            let bootstrapper =
                PageBootstrapper::new(&fetcher, &document, &document, config.elements.clone())
                    .with_endpoints(config.endpoints.paths());

            let defaults = config.preferences;
            let preferences = UserPreferences::from_template(
                theme.unwrap_or(defaults.theme),
                font_size.unwrap_or(defaults.font_size),
                accent_color.unwrap_or(defaults.accent_color),
            );

            let report = bootstrapper.run(&preferences).await;

            let output = serde_json::json!({
                "report": report,
                "document": document.snapshot(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);

            if strict {
                if let ChartOutcome::Skipped { reason } = &report.chart {
                    anyhow::bail!("summary chart not rendered: {}", reason);
                }
                if report.preferences != PreferenceOutcome::Applied {
                    anyhow::bail!("preferences incomplete: {:?}", report.preferences);
                }
            }
        }

        Commands::Health => {
            let config = load_config(cli.config, cli.base_url)?;
            let fetcher = HttpFetcher::new(
                &config.endpoints.base_url,
                config.endpoints.request_timeout(),
            )?;
            let document = VirtualDocument::dashboard_page(&config.elements);
            let bootstrapper =
                PageBootstrapper::new(&fetcher, &document, &document, config.elements.clone())
                    .with_endpoints(config.endpoints.paths());

            let status = bootstrapper
                .refresh_health_status()
                .await
                .context("fetching health status")?;
            println!("{}", status.status);
        }
    }

    Ok(())
}

/// Load config, apply the `--base-url` override and start logging
fn load_config(path: Option<PathBuf>, base_url: Option<String>) -> anyhow::Result<Config> {
    let loaded = match path {
        Some(path) => LoadedConfig {
            config: Config::load_with_env(&path)?,
            source: Some(path),
            skipped: Vec::new(),
        },
        None => Config::load_default(),
    };
    let mut config = loaded.config;
    if let Some(url) = base_url {
        config.endpoints.base_url = url;
    }

    // Subscriber first, so the search results below are not lost
    init_logging(&config.logging);
    for err in &loaded.skipped {
        tracing::warn!("Failed to load config: {}", err);
    }
    match &loaded.source {
        Some(path) => tracing::info!("Loaded config from {:?}", path),
        None => tracing::info!("Using default config with environment overrides"),
    }
    tracing::debug!("Using server {}", config.endpoints.base_url);

    Ok(config)
}

/// Install the tracing subscriber; `RUST_LOG` wins over the config level
fn init_logging(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new(format!("deskfit_dashboard={}", logging.level))
    });

    // Logs go to stderr so `load` output stays machine-readable
    let registry = tracing_subscriber::registry().with(filter);
    if logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
