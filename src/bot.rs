//! Bot construction and lifecycle.
//!
//! This module wires the pieces together: the NewsAPI requester, the command
//! registry and the serenity client. Everything is constructed explicitly
//! and handed down; no global state is involved.
//!
//! # Example
//!
//! ```no_run
//! # async fn run() -> Result<(), anyhow::Error> {
//! let config = Config::load("config.yaml")?;
//! let bot = Bot::new(config).await?;
//! bot.start().await; // Runs until the process is terminated
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use anyhow::Context as _;
use log::{error, info};
use serenity::prelude::{Client, GatewayIntents};

use crate::config::Config;
use crate::discord::{CommandRegistry, DiscordEventHandler, TechNewsCommand};
use crate::newsapi::NewsRequester;

/// Main bot structure owning the Discord client.
///
/// Construction builds the full dependency chain: the NewsAPI requester is
/// injected into the technews command, the command into the registry, the
/// registry into the gateway event handler, and that into the serenity
/// client. Each slash command invocation is handled independently by the
/// gateway; the bot keeps no state across invocations.
pub struct Bot {
    /// Discord gateway client with the event handler attached
    client: Client,
}

impl Bot {
    /// Creates the bot from its configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client or the Discord client cannot be
    /// built. No connection is attempted here; that happens in
    /// [`Bot::start`].
    pub async fn new(config: Config) -> Result<Self, anyhow::Error> {
        let requester = NewsRequester::new(&config.newsapi.url, &config.newsapi.api_key)
            .context("failed to build the NewsAPI client")?;

        let mut registry = CommandRegistry::new();
        registry.register(Arc::new(TechNewsCommand::new(requester)));
        info!("{} command(s) in the registry", registry.len());

        let handler = DiscordEventHandler::new(Arc::new(registry), config.discord.guild_id);

        // Slash commands arrive as interactions, no gateway intents needed
        let client = Client::builder(&config.discord.token, GatewayIntents::empty())
            .event_handler(handler)
            .await
            .context("failed to build the Discord client")?;

        Ok(Bot { client })
    }

    /// Connects to the Discord gateway and processes events until the
    /// process is terminated.
    pub async fn start(mut self) {
        info!("connecting to the Discord gateway");
        if let Err(error) = self.client.start().await {
            error!("Discord client stopped: {}", error);
        }
    }
}
