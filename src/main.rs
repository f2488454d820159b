//! Technews bot - a Discord bot for technology news headlines.
//!
//! This is the main entry point for the bot, which exposes one slash
//! command, `/technews`, fetching the current top technology headlines from
//! NewsAPI and rendering them as embed cards.
//!
//! # Overview
//!
//! Users invoke `/technews` with a `language` option (`en` or `ar`, with
//! autocomplete suggestions while typing). The bot validates the option,
//! queries the NewsAPI top-headlines endpoint and replies with up to three
//! cards: headline, description, link, image, source and publish date. All
//! failures are answered with a single ephemeral message visible only to the
//! requester.
//!
//! # Configuration
//!
//! Create a `config.yaml` file with your settings:
//!
//! ```yaml
//! discord:
//!   token: "your-bot-token"
//!   # Optional: register on one guild instead of globally
//!   guild_id: 123456789012345678
//!
//! newsapi:
//!   api_key: "your-newsapi-key"
//! ```
//!
//! Any value can be overridden with `TECHNEWS_`-prefixed environment
//! variables (`TECHNEWS_DISCORD__TOKEN`, `TECHNEWS_NEWSAPI__API_KEY`).
//! The bot refuses to start when the token or the API key is missing.
//!
//! # Usage
//!
//! ```bash
//! technews-bot --config config.yaml
//! ```
//!
//! # Architecture
//!
//! - [`commands`] - Platform-agnostic command pipeline: validation, fetch,
//!   article selection and card formatting
//! - [`newsapi`] - NewsAPI HTTP client and response structures
//! - [`discord`] - serenity gateway integration, command registry and the
//!   `/technews` adapter
//! - [`config`] - YAML configuration with environment variable overrides
//! - [`bot`] - Explicit construction and wiring of the above
//!
//! # Environment Variables
//!
//! - `RUST_LOG` - Controls logging level (default: `info`)

use clap::Parser;
use env_logger::Env;
use log::{error, info};

use crate::{bot::Bot, config::Config};

mod bot;
mod commands;
mod config;
mod discord;
mod newsapi;

/// Command-line arguments for the bot.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the YAML configuration file.
    ///
    /// The file should contain the Discord token and the NewsAPI key. See
    /// the [`config`] module for the expected format.
    #[arg(short, long)]
    config: String,
}

/// Main entry point for the bot.
///
/// Initializes logging, loads and validates the configuration, builds the
/// bot and runs it until the process is terminated. Startup errors are
/// logged and end the process cleanly instead of panicking.
#[tokio::main]
async fn main() {
    // Put logger at info level by default
    let env = Env::default().filter_or("RUST_LOG", "info");
    env_logger::init_from_env(env);

    info!("Starting technews-bot {}...", env!("CARGO_PKG_VERSION"));

    // Parse command line arguments
    let args = Args::parse();

    // Load configuration from YAML file with environment variable overrides
    let mut config: Config = match Config::load(&args.config) {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Failed to load config file: {}", e);
            return;
        }
    };

    // Refuse to start without the required credentials
    if let Err(e) = config.validate() {
        error!("Invalid configuration: {}", e);
        return;
    }

    // Normalize NewsAPI URL by removing trailing slash if present
    if config.newsapi.url.ends_with('/') {
        config.newsapi.url.pop();
    }

    // Launch bot
    let bot = match Bot::new(config).await {
        Ok(b) => b,
        Err(e) => {
            error!("Failed to initialize bot: {:#}", e);
            return;
        }
    };
    bot.start().await;
}
