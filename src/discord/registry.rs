//! Slash command handler trait and registry.
//!
//! Commands are registered explicitly at startup: each handler implements
//! [`SlashCommandHandler`] and is added to a [`CommandRegistry`] mapping
//! command name to handler. The gateway dispatches interactions by looking up
//! the invoked command name in the registry.

use std::collections::HashMap;
use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use serenity::builder::CreateApplicationCommand;
use serenity::model::application::interaction::application_command::ApplicationCommandInteraction;
use serenity::model::application::interaction::autocomplete::AutocompleteInteraction;
use serenity::prelude::Context;

/// Trait for slash command handlers.
///
/// Each handler owns one command: it declares the command definition sent to
/// Discord, processes invocations, and optionally answers autocomplete
/// queries for its options.
#[async_trait]
pub trait SlashCommandHandler: Send + Sync {
    /// Command name this handler processes.
    fn name(&self) -> &'static str;

    /// Fills in the command definition registered with Discord.
    fn register<'a>(
        &self,
        command: &'a mut CreateApplicationCommand,
    ) -> &'a mut CreateApplicationCommand;

    /// Handles one slash command invocation.
    ///
    /// # Arguments
    ///
    /// * `ctx` - Serenity context for Discord API calls
    /// * `command` - The slash command interaction to handle
    async fn handle(
        &self,
        ctx: &Context,
        command: &ApplicationCommandInteraction,
    ) -> Result<()>;

    /// Answers an autocomplete query for one of the command's options.
    ///
    /// Handlers without autocompleted options keep the default, which sends
    /// no suggestions.
    async fn autocomplete(
        &self,
        _ctx: &Context,
        _interaction: &AutocompleteInteraction,
    ) -> Result<()> {
        Ok(())
    }
}

/// Registry mapping command names to their handlers.
///
/// Populated explicitly at startup, before the gateway connects. Lookup is
/// read-only afterwards, so the registry is shared across event handler
/// invocations without locking.
pub struct CommandRegistry {
    handlers: HashMap<&'static str, Arc<dyn SlashCommandHandler>>,
}

impl CommandRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        CommandRegistry {
            handlers: HashMap::new(),
        }
    }

    /// Adds a handler, keyed by its command name.
    pub fn register(&mut self, handler: Arc<dyn SlashCommandHandler>) {
        self.handlers.insert(handler.name(), handler);
    }

    /// Looks up the handler for a command name.
    pub fn get(&self, name: &str) -> Option<&Arc<dyn SlashCommandHandler>> {
        self.handlers.get(name)
    }

    /// Iterates over all registered handlers.
    pub fn handlers(&self) -> impl Iterator<Item = &Arc<dyn SlashCommandHandler>> {
        self.handlers.values()
    }

    /// Number of registered commands.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Whether the registry has no commands.
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct DummyHandler;

    #[async_trait]
    impl SlashCommandHandler for DummyHandler {
        fn name(&self) -> &'static str {
            "dummy"
        }

        fn register<'a>(
            &self,
            command: &'a mut CreateApplicationCommand,
        ) -> &'a mut CreateApplicationCommand {
            command.name(self.name()).description("dummy command")
        }

        async fn handle(
            &self,
            _ctx: &Context,
            _command: &ApplicationCommandInteraction,
        ) -> Result<()> {
            Ok(())
        }
    }

    // The trait must stay object-safe for the registry to hold dyn handlers
    fn _assert_object_safe(_: &dyn SlashCommandHandler) {}

    #[test]
    fn test_register_and_get() {
        let mut registry = CommandRegistry::new();
        registry.register(Arc::new(DummyHandler));

        assert_eq!(registry.len(), 1);
        assert!(registry.get("dummy").is_some());
        assert!(registry.get("other").is_none());
    }

    #[test]
    fn test_empty_registry() {
        let registry = CommandRegistry::new();

        assert!(registry.is_empty());
        assert_eq!(registry.handlers().count(), 0);
    }

    #[test]
    fn test_reregistering_same_name_replaces() {
        let mut registry = CommandRegistry::new();
        registry.register(Arc::new(DummyHandler));
        registry.register(Arc::new(DummyHandler));

        assert_eq!(registry.len(), 1);
    }
}
