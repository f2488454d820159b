//! Discord gateway event handling.
//!
//! [`DiscordEventHandler`] is the serenity [`EventHandler`] of the bot. On
//! `ready` it pushes the command definitions from the registry to Discord,
//! then dispatches incoming command and autocomplete interactions to the
//! matching [`SlashCommandHandler`](crate::discord::SlashCommandHandler).
//!
//! Commands are registered on a single guild when a guild id is configured
//! (updates there propagate immediately, convenient while iterating) and
//! globally otherwise (visible everywhere, cached by Discord for up to an
//! hour).

use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, error, info, warn};
use serenity::model::application::command::Command;
use serenity::model::application::interaction::Interaction;
use serenity::model::gateway::Ready;
use serenity::model::id::GuildId;
use serenity::prelude::{Context, EventHandler};

use crate::discord::registry::CommandRegistry;

/// Gateway event handler dispatching interactions to registered commands.
pub struct DiscordEventHandler {
    /// Registered slash commands, shared read-only across events
    registry: Arc<CommandRegistry>,
    /// Guild to register commands on; `None` registers them globally
    guild_id: Option<u64>,
}

impl DiscordEventHandler {
    /// Creates a new event handler.
    ///
    /// # Arguments
    ///
    /// * `registry` - Commands to register and dispatch to
    /// * `guild_id` - Guild-scoped registration target, or `None` for global
    pub fn new(registry: Arc<CommandRegistry>, guild_id: Option<u64>) -> Self {
        DiscordEventHandler { registry, guild_id }
    }
}

#[async_trait]
impl EventHandler for DiscordEventHandler {
    /// Registers the slash commands once the gateway session is ready.
    async fn ready(&self, ctx: Context, ready: Ready) {
        info!("logged in as {} ({})", ready.user.name, ready.user.id);

        let result = match self.guild_id {
            Some(guild_id) => {
                info!(
                    "registering {} command(s) on guild {}",
                    self.registry.len(),
                    guild_id
                );
                GuildId(guild_id)
                    .set_application_commands(&ctx.http, |commands| {
                        for handler in self.registry.handlers() {
                            commands.create_application_command(|command| handler.register(command));
                        }
                        commands
                    })
                    .await
            }
            None => {
                info!("registering {} command(s) globally", self.registry.len());
                Command::set_global_application_commands(&ctx.http, |commands| {
                    for handler in self.registry.handlers() {
                        commands.create_application_command(|command| handler.register(command));
                    }
                    commands
                })
                .await
            }
        };

        match result {
            Ok(commands) => info!("registered {} command(s)", commands.len()),
            Err(error) => error!("failed to register commands: {}", error),
        }
    }

    /// Routes command and autocomplete interactions to their handlers.
    ///
    /// Handler failures are logged and never propagate: a failing invocation
    /// must not take down the gateway loop.
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        match interaction {
            Interaction::ApplicationCommand(command) => {
                debug!(
                    "received command '{}' from {}",
                    command.data.name, command.user.name
                );
                match self.registry.get(&command.data.name) {
                    Some(handler) => {
                        if let Err(error) = handler.handle(&ctx, &command).await {
                            error!("command '{}' failed: {:#}", command.data.name, error);
                        }
                    }
                    None => warn!(
                        "no handler registered for command '{}'",
                        command.data.name
                    ),
                }
            }
            Interaction::Autocomplete(autocomplete) => {
                if let Some(handler) = self.registry.get(&autocomplete.data.name) {
                    if let Err(error) = handler.autocomplete(&ctx, &autocomplete).await {
                        warn!(
                            "autocomplete for '{}' failed: {:#}",
                            autocomplete.data.name, error
                        );
                    }
                }
            }
            _ => {}
        }
    }
}
