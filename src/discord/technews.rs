//! Discord adapter for the technews command.
//!
//! Bridges serenity interactions to the platform-agnostic
//! [`NewsCommandHandler`]: extracts the `language` option, answers invalid
//! input with an immediate ephemeral reply, defers while the fetch runs, then
//! sends the cards as follow-up embeds or exactly one ephemeral error
//! message.

use anyhow::Result;
use async_trait::async_trait;
use log::{error, warn};
use serenity::builder::{CreateApplicationCommand, CreateEmbed};
use serenity::model::application::command::CommandOptionType;
use serenity::model::application::interaction::InteractionResponseType;
use serenity::model::application::interaction::application_command::{
    ApplicationCommandInteraction, CommandDataOption,
};
use serenity::model::application::interaction::autocomplete::AutocompleteInteraction;
use serenity::prelude::Context;

use crate::commands::embed_response::{NewsCard, format_card_footer, format_reply_error};
use crate::commands::handler::NewsCommandHandler;
use crate::commands::language::{Language, language_choices};
use crate::commands::{CommandRequest, ReplyError};
use crate::discord::registry::SlashCommandHandler;
use crate::newsapi::Requester;

/// Name of the slash command.
pub const COMMAND_NAME: &str = "technews";

/// Name of the language option.
pub const LANGUAGE_OPTION: &str = "language";

/// Accent colour of the news embeds.
const EMBED_COLOUR: u32 = 0x00ff00;

/// The `/technews` slash command.
///
/// Wraps a [`NewsCommandHandler`] and translates between Discord
/// interactions and the core pipeline.
pub struct TechNewsCommand<R: Requester> {
    handler: NewsCommandHandler<R>,
}

impl<R: Requester> TechNewsCommand<R> {
    /// Creates the command around a news requester.
    pub fn new(requester: R) -> Self {
        TechNewsCommand {
            handler: NewsCommandHandler::new(requester),
        }
    }
}

/// Extracts the raw language option from the interaction options.
///
/// Discord guarantees the option on a well-formed invocation; a missing or
/// non-string value falls back to an empty string, which fails validation
/// downstream.
fn extract_language(options: &[CommandDataOption]) -> String {
    options
        .iter()
        .find(|option| option.name == LANGUAGE_OPTION)
        .and_then(|option| option.value.as_ref())
        .and_then(|value| value.as_str())
        .unwrap_or_default()
        .to_owned()
}

/// Fills an embed from a news card.
///
/// The lead card shows the article image at full size, the remaining cards
/// as a thumbnail.
fn apply_card<'a>(embed: &'a mut CreateEmbed, card: &NewsCard) -> &'a mut CreateEmbed {
    embed.title(&card.title).colour(EMBED_COLOUR);

    if let Some(description) = &card.description {
        embed.description(description);
    }
    if let Some(url) = &card.url {
        embed.url(url);
    }
    if let Some(image_url) = &card.image_url {
        if card.lead {
            embed.image(image_url);
        } else {
            embed.thumbnail(image_url);
        }
    }

    embed.footer(|footer| footer.text(format_card_footer(card)))
}

/// Logs the operator-facing diagnostics of a failed invocation.
///
/// Status codes and parse details never reach the user reply.
fn log_reply_error(error: &ReplyError) {
    match error {
        ReplyError::InvalidLanguage => {}
        ReplyError::NetworkError => warn!("technews fetch failed: transport error"),
        ReplyError::FetchFailed(status) => {
            warn!("technews fetch failed: news source answered {}", status)
        }
        ReplyError::NoResults => warn!("technews fetch returned no articles"),
        ReplyError::Unexpected(detail) => error!("technews failed unexpectedly: {}", detail),
    }
}

#[async_trait]
impl<R: Requester + Send + Sync> SlashCommandHandler for TechNewsCommand<R> {
    fn name(&self) -> &'static str {
        COMMAND_NAME
    }

    fn register<'a>(
        &self,
        command: &'a mut CreateApplicationCommand,
    ) -> &'a mut CreateApplicationCommand {
        command
            .name(COMMAND_NAME)
            .description("Get the latest technology news")
            .create_option(|option| {
                option
                    .name(LANGUAGE_OPTION)
                    .description("Choose language: en (English) or ar (Arabic)")
                    .kind(CommandOptionType::String)
                    .required(true)
                    .set_autocomplete(true)
            })
    }

    /// Handles one `/technews` invocation.
    ///
    /// An invalid language is answered directly with an ephemeral message,
    /// before any acknowledgment. A valid one defers the response (the fetch
    /// can take seconds), then follows up with the cards in ranking order or
    /// a single ephemeral error.
    async fn handle(
        &self,
        ctx: &Context,
        command: &ApplicationCommandInteraction,
    ) -> Result<()> {
        let request = CommandRequest {
            language: extract_language(&command.data.options),
        };

        // Validation happens before the deferral so a rejected request never
        // shows a "thinking" state
        if Language::from_code(&request.language).is_none() {
            command
                .create_interaction_response(&ctx.http, |response| {
                    response
                        .kind(InteractionResponseType::ChannelMessageWithSource)
                        .interaction_response_data(|message| {
                            message
                                .content(format_reply_error(&ReplyError::InvalidLanguage))
                                .ephemeral(true)
                        })
                })
                .await?;
            return Ok(());
        }

        command.defer(&ctx.http).await?;

        match self.handler.handle(&request).await {
            Ok(cards) => {
                for card in &cards {
                    command
                        .create_followup_message(&ctx.http, |message| {
                            message.embed(|embed| apply_card(embed, card))
                        })
                        .await?;
                }
            }
            Err(reply_error) => {
                log_reply_error(&reply_error);
                command
                    .create_followup_message(&ctx.http, |message| {
                        message
                            .content(format_reply_error(&reply_error))
                            .ephemeral(true)
                    })
                    .await?;
            }
        }

        Ok(())
    }

    /// Suggests language choices while the user types the option.
    async fn autocomplete(
        &self,
        ctx: &Context,
        interaction: &AutocompleteInteraction,
    ) -> Result<()> {
        let typed = interaction
            .data
            .options
            .iter()
            .find(|option| option.focused || option.name == LANGUAGE_OPTION)
            .and_then(|option| option.value.as_ref())
            .and_then(|value| value.as_str())
            .unwrap_or_default();

        let choices = language_choices(typed);

        interaction
            .create_autocomplete_response(&ctx.http, |response| {
                for (name, code) in choices {
                    response.add_string_choice(name, code);
                }
                response
            })
            .await?;

        Ok(())
    }
}
