use helpdesk_core::{Context, Error};

use crate::help::autocomplete::{cog_choices, command_choices};
use crate::help::framework::{self, HelpRequest, respond_in};
use crate::help::{HelpCommand, MinimalSlashHelp, PrefixHelp};

async fn autocomplete_commands<'a>(
    ctx: Context<'a>,
    partial: &'a str,
) -> impl Iterator<Item = String> + 'a {
    command_choices(&framework::registry(ctx), partial).into_iter()
}

async fn autocomplete_cogs<'a>(
    ctx: Context<'a>,
    partial: &'a str,
) -> impl Iterator<Item = String> + 'a {
    cog_choices(&framework::registry(ctx), partial).into_iter()
}

/// Shows help for a command or category.
///
/// Takes a single query naming a category or a command.
#[poise::command(prefix_command, track_edits, rename = "help")]
pub async fn help_prefix(ctx: Context<'_>, #[rest] query: Option<String>) -> Result<(), Error> {
    let help = HelpCommand::new(PrefixHelp::from_config(&ctx.data().help)?);
    respond_in(ctx, help, HelpRequest::Query(query)).await
}

/// Shows help for a command or category.
#[poise::command(slash_command, rename = "help")]
pub async fn help_slash(
    ctx: Context<'_>,
    #[description = "Command to get help for"]
    #[autocomplete = "autocomplete_commands"]
    command: Option<String>,
    #[description = "Category to get help for"]
    #[autocomplete = "autocomplete_cogs"]
    cog: Option<String>,
) -> Result<(), Error> {
    let help = HelpCommand::new(MinimalSlashHelp::new(ctx.data().help.slash.clone()));
    respond_in(ctx, help, HelpRequest::Lookup { command, cog }).await
}
