//! Command-line client for the URL shortener service.
//!
//! # Usage
//!
//! ```bash
//! # Create a short link (prompts for the URL when --url is omitted)
//! shortlink create --url https://example.com/very/long/path --code promo2026
//!
//! # Create a short link that expires
//! shortlink create --url https://example.com --expire-at 2026-12-31T23:59:59Z
//!
//! # Show metadata of a short code
//! shortlink lookup promo2026
//!
//! # Check that the service is reachable
//! shortlink health
//! ```
//!
//! # Environment Variables
//!
//! See [`url_shortener_client::config`]. A `.env` file in the working
//! directory is loaded first.

use url_shortener_client::application::services::LinkWorkflow;
use url_shortener_client::config;
use url_shortener_client::domain::entities::InteractionState;
use url_shortener_client::infrastructure::http::HttpLinkApi;
use url_shortener_client::logging;
use url_shortener_client::presentation::{render_create, render_lookup};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Input;
use std::process::ExitCode;
use std::sync::Arc;

/// Client for creating and inspecting short links.
#[derive(Parser)]
#[command(name = "shortlink")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a short link
    Create {
        /// Long URL to shorten (prompted for when omitted)
        #[arg(short, long)]
        url: Option<String>,

        /// Requested short code (optional, generated by the service otherwise)
        #[arg(short, long)]
        code: Option<String>,

        /// Expiry time in RFC 3339 format (never expires when omitted)
        #[arg(long, value_name = "RFC3339")]
        expire_at: Option<DateTime<Utc>>,
    },

    /// Show metadata of an existing short code
    Lookup {
        /// Short code to look up
        code: String,
    },

    /// Check that the service is reachable
    Health,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env().context("Invalid configuration")?;
    logging::init(&config)?;
    config.print_summary();

    let api = HttpLinkApi::from_config(&config).context("Failed to build HTTP client")?;
    let workflow = LinkWorkflow::new(Arc::new(api));

    let succeeded = match cli.command {
        Commands::Create {
            url,
            code,
            expire_at,
        } => handle_create(&workflow, url, code, expire_at).await?,
        Commands::Lookup { code } => handle_lookup(&workflow, &code).await,
        Commands::Health => handle_health(&workflow, &config.api_base_url).await,
    };

    Ok(if succeeded {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Submits a create request, prompting for missing input.
///
/// The custom code is only prompted for when the URL was prompted for too.
async fn handle_create(
    workflow: &LinkWorkflow<HttpLinkApi>,
    url: Option<String>,
    code: Option<String>,
    expire_at: Option<DateTime<Utc>>,
) -> Result<bool> {
    let (url, code) = match url {
        Some(url) => (url, code.unwrap_or_default()),
        None => {
            let url: String = Input::new()
                .with_prompt("Long URL")
                .allow_empty(true)
                .interact_text()?;
            let code = match code {
                Some(code) => code,
                None => Input::new()
                    .with_prompt("Custom code (optional)")
                    .allow_empty(true)
                    .interact_text()?,
            };
            (url, code)
        }
    };

    println!("{}", render_create(&InteractionState::Pending).join("\n").bright_black());

    let state = workflow
        .submit_create_with_expiry(&url, &code, expire_at)
        .await;
    print_state(&state, "Short link created", &render_create(&state));

    Ok(state.result().is_some())
}

async fn handle_lookup(workflow: &LinkWorkflow<HttpLinkApi>, code: &str) -> bool {
    let state = workflow.submit_lookup(code).await;
    print_state(&state, "Short link details", &render_lookup(&state));

    state.result().is_some()
}

async fn handle_health(workflow: &LinkWorkflow<HttpLinkApi>, base_url: &url::Url) -> bool {
    match workflow.check_health().await {
        Ok(()) => {
            println!("{} {}", "Service is healthy:".green().bold(), base_url.as_str().cyan());
            true
        }
        Err(e) => {
            tracing::warn!(error = %e, "health check failed");
            println!("{} {}", "Service is unavailable:".red().bold(), base_url.as_str().cyan());
            false
        }
    }
}

fn print_state<T>(state: &InteractionState<T>, heading: &str, lines: &[String]) {
    match state {
        InteractionState::Succeeded(_) => {
            println!();
            println!("{}", heading.green().bold());
            for line in lines {
                println!("  {line}");
            }
            println!();
        }
        InteractionState::Failed(_) => {
            for line in lines {
                eprintln!("{} {}", "Error:".red().bold(), line);
            }
        }
        InteractionState::Idle | InteractionState::Pending => {}
    }
}
