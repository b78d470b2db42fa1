//! RideLink CLI
//!
//! Builds ride links for 99 and Uber from two free-text addresses, either
//! through the interactive form or as one-shot commands.

#![allow(clippy::print_stdout)]

mod commands;
mod render;
mod session;

use std::path::PathBuf;

use anyhow::Context;
use application::{AddressSearchPort, RideEndpoint, build_link, whatsapp_share_url};
use clap::{Parser, Subcommand};
use domain::{AddressCandidate, Provider};
use infrastructure::{AppConfig, NominatimSearchAdapter, init_logging};

/// RideLink CLI
#[derive(Parser)]
#[command(name = "ridelink-cli")]
#[command(author, version, about = "Gerador de links de corrida para 99 e Uber", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Configuration file (default: ./ridelink.toml when present)
    #[arg(short, long, env = "RIDELINK_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fill in origin and destination interactively and generate the link
    Interactive {
        /// App selected at start (99 or uber)
        #[arg(short, long, value_parser = parse_provider)]
        app: Option<Provider>,
    },

    /// Search addresses and list the candidates
    Search {
        /// Free-text address
        query: String,
    },

    /// Generate a link from the top candidate of each address
    ///
    /// Example: ridelink-cli link --from "Rua Tiradentes 100, Santos" --to "Rua Princesa Isabel 50, Santos"
    Link {
        /// Pickup address
        #[arg(long)]
        from: String,

        /// Dropoff address
        #[arg(long)]
        to: String,

        /// App the link opens (99 or uber)
        #[arg(short, long, value_parser = parse_provider)]
        app: Option<Provider>,
    },

    /// Print the WhatsApp share URL for a link
    ShareUrl {
        /// App named in the message (99 or uber)
        #[arg(short, long, value_parser = parse_provider, default_value = "99")]
        app: Provider,

        /// The ride link to share
        link: String,
    },
}

/// Determine log filter level from verbosity count
const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn parse_provider(s: &str) -> Result<Provider, String> {
    s.parse::<Provider>().map_err(|e| e.to_string())
}

async fn top_candidate(
    search: &NominatimSearchAdapter,
    query: &str,
    what: &str,
) -> anyhow::Result<AddressCandidate> {
    search
        .search(query)
        .await
        .into_iter()
        .next()
        .with_context(|| format!("Nenhum endereço encontrado para {what}: {query}"))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    config
        .validate()
        .map_err(|e| anyhow::anyhow!("Invalid configuration: {e}"))?;

    // Set up logging based on verbosity
    init_logging(&config.logging, log_filter_from_verbosity(cli.verbose))?;

    match cli.command {
        Commands::Interactive { app } => {
            session::run(&config, app).await?;
        },

        Commands::Search { query } => {
            let search = NominatimSearchAdapter::new(&config.geocoding)?;
            let candidates = search.search(&query).await;

            if candidates.is_empty() {
                println!("Nenhum endereço encontrado.");
            }
            for (i, candidate) in candidates.iter().enumerate() {
                println!("{}", render::candidate_entry(i + 1, candidate));
                println!("      {}", candidate.display_name);
            }
        },

        Commands::Link { from, to, app } => {
            let search = NominatimSearchAdapter::new(&config.geocoding)?;
            let pickup = top_candidate(&search, &from, "origem").await?;
            let dropoff = top_candidate(&search, &to, "destino").await?;
            let provider = app.unwrap_or(config.form.default_provider);

            let link = build_link(
                provider,
                RideEndpoint::new(&pickup, &from),
                RideEndpoint::new(&dropoff, &to),
            );

            println!("📍 {}", pickup.display_name);
            println!("🎯 {}", dropoff.display_name);
            println!("{link}");
        },

        Commands::ShareUrl { app, link } => {
            println!("{}", whatsapp_share_url(app, &link));
        },
    }

    Ok(())
}
