//! Discord integration: gateway events, command registry and adapters.
//!
//! This module contains everything that talks to Discord through serenity.
//! The command pipeline itself lives in [`crate::commands`]; here the
//! interactions are adapted in and the replies out.
//!
//! # Modules
//!
//! - `gateway` - serenity event handler: command registration and dispatch
//! - `registry` - slash command trait and name-to-handler registry
//! - `technews` - the `/technews` command adapter

mod gateway;
mod registry;
mod technews;

pub use crate::discord::gateway::DiscordEventHandler;
pub use crate::discord::registry::{CommandRegistry, SlashCommandHandler};
pub use crate::discord::technews::TechNewsCommand;
