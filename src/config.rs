//! Configuration file structures and loading for the bot.
//!
//! The configuration is a YAML file with two sections: the Discord account
//! settings and the NewsAPI settings. Any value can be overridden through
//! environment variables with the `TECHNEWS_` prefix and `__` as the section
//! separator.
//!
//! # Configuration File Format
//!
//! ```yaml
//! discord:
//!   token: "your-bot-token"
//!   # Optional: register commands on a single guild instead of globally
//!   guild_id: 123456789012345678
//!
//! newsapi:
//!   url: "https://newsapi.org"
//!   api_key: "your-newsapi-key"
//! ```
//!
//! # Environment Variable Overrides
//!
//! ```bash
//! export TECHNEWS_DISCORD__TOKEN="token-from-env"
//! export TECHNEWS_NEWSAPI__API_KEY="key-from-env"
//! ```

use figment::{
    Figment,
    providers::{Env, Format, Yaml},
};
use serde::Deserialize;

/// Root configuration structure for the bot.
#[derive(Deserialize, Debug)]
pub struct Config {
    /// Discord account configuration
    pub discord: Discord,
    /// NewsAPI configuration
    pub newsapi: NewsApi,
}

/// Discord account configuration.
#[derive(Deserialize, Debug)]
pub struct Discord {
    /// Bot authentication token from the Discord developer portal.
    pub token: String,

    /// Guild to register the slash commands on.
    ///
    /// When set, commands are registered on this single server and updates
    /// show up immediately. When absent, commands are registered globally
    /// and Discord may take up to an hour to propagate them.
    pub guild_id: Option<u64>,
}

/// NewsAPI configuration.
#[derive(Deserialize, Debug)]
pub struct NewsApi {
    /// Base URL of the NewsAPI service.
    ///
    /// Defaults to the public service; overridable for testing.
    #[serde(default = "default_newsapi_url")]
    pub url: String,

    /// NewsAPI key used to authenticate the top-headlines requests.
    pub api_key: String,
}

fn default_newsapi_url() -> String {
    "https://newsapi.org".to_owned()
}

impl Config {
    /// Loads the configuration from a YAML file with environment overrides.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the YAML configuration file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or a value cannot be
    /// deserialized into the expected type.
    pub fn load(path: &str) -> Result<Self, figment::Error> {
        Figment::new()
            .merge(Yaml::file(path))
            .merge(Env::prefixed("TECHNEWS_").split("__"))
            .extract()
    }

    /// Checks that the credentials required at startup are present.
    ///
    /// The process refuses to start without a Discord token and a NewsAPI
    /// key; there is nothing useful it could do without them.
    pub fn validate(&self) -> Result<(), String> {
        if self.discord.token.trim().is_empty() {
            return Err("missing Discord token in configuration".to_owned());
        }
        if self.newsapi.api_key.trim().is_empty() {
            return Err("missing NewsAPI key in configuration".to_owned());
        }
        Ok(())
    }
}
