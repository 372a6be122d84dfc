//! Adapters between the help engine and a live poise framework.

use std::future::Future;
use std::pin::Pin;

use serenity::all::{Channel, CreateMessage, Permissions};
use serenity::async_trait;
use tracing::{debug, warn};

use helpdesk_core::{
    AuthorizationChecker, CheckError, CommandInfo, Context, Destination, Error, HelpOutput,
    MinimalSlashConfig, PagedEmbed, Registry, RegistrySnapshot, Transport,
};
use helpdesk_utils::embed::{build_page_embed, create_embed};
use helpdesk_utils::permissions::has_user_permission;

use super::{
    HelpCommand, HelpFormatter, HelpHooks, Invocation, Resolution, resolve, resolve_query,
};

type HelpFuture<'a> = Pin<Box<dyn Future<Output = Result<(), Error>> + Send + 'a>>;

fn is_listable<U, E>(command: &poise::Command<U, E>) -> bool {
    command.prefix_action.is_some()
        || command.slash_action.is_some()
        || !command.subcommands.is_empty()
}

fn signature<U, E>(parameters: &[poise::CommandParameter<U, E>]) -> String {
    parameters
        .iter()
        .map(|param| {
            if param.required {
                format!("<{}>", param.name)
            } else {
                format!("[{}]", param.name)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn command_info<U, E>(command: &poise::Command<U, E>) -> CommandInfo {
    let subcommands: Vec<CommandInfo> = command
        .subcommands
        .iter()
        .filter(|sub| is_listable(sub))
        .map(command_info)
        .collect();

    let prefix = command.prefix_action.is_some() || subcommands.iter().any(|sub| sub.prefix);
    let slash = command.slash_action.is_some() || subcommands.iter().any(|sub| sub.slash);

    let mut info = if subcommands.is_empty() {
        CommandInfo::new(command.name.clone())
    } else {
        CommandInfo::group(command.name.clone(), subcommands)
    };
    info.help = command.help_text.clone();
    info.brief = command.description.clone();
    info.description = command.description.clone();
    info.signature = signature(&command.parameters);
    info.hidden = command.hide_in_help;
    info.prefix = prefix;
    info.slash = slash;

    match &command.category {
        Some(category) => info.in_cog(category.clone()),
        None => info,
    }
}

/// Snapshot of the framework's registered commands. Categories become cogs,
/// context-menu-only commands are left out.
pub fn snapshot<U, E>(
    commands: &[poise::Command<U, E>],
    description: Option<&str>,
) -> RegistrySnapshot {
    let mut snapshot = RegistrySnapshot::new();
    for command in commands.iter().filter(|command| is_listable(command)) {
        snapshot.push_command(command_info(command));
    }

    match description {
        Some(description) => snapshot.with_description(description),
        None => snapshot,
    }
}

pub fn registry(ctx: Context<'_>) -> RegistrySnapshot {
    snapshot(
        &ctx.framework().options().commands,
        ctx.data().description.as_deref(),
    )
}

pub fn invocation(ctx: Context<'_>) -> Invocation {
    Invocation {
        prefix: ctx.prefix().to_owned(),
        in_guild: ctx.guild_id().is_some(),
    }
}

fn find_framework_command<'c, U, E>(
    commands: &'c [poise::Command<U, E>],
    qualified_name: &str,
) -> Option<&'c poise::Command<U, E>> {
    commands.iter().find_map(|command| {
        if command.qualified_name == qualified_name {
            return Some(command);
        }
        find_framework_command(&command.subcommands, qualified_name)
    })
}

/// Owner, guild-only and DM-only restrictions.
fn passes_static_gates<U, E>(
    target: &poise::Command<U, E>,
    is_owner: bool,
    in_guild: bool,
) -> bool {
    if target.owners_only && !is_owner {
        return false;
    }
    !((target.guild_only && !in_guild) || (target.dm_only && in_guild))
}

/// Permissions the invoker must hold. Only enforced inside guilds.
fn required_guild_permissions<U, E>(
    target: &poise::Command<U, E>,
    in_guild: bool,
) -> Option<Permissions> {
    (in_guild && !target.required_permissions.is_empty()).then_some(target.required_permissions)
}

/// Runs a command's restrictions, the framework-wide check and the command's
/// own checks against the invoking context.
pub struct FrameworkChecker<'a> {
    ctx: Context<'a>,
}

impl<'a> FrameworkChecker<'a> {
    pub fn new(ctx: Context<'a>) -> Self {
        Self { ctx }
    }

    async fn holds(&self, required: Permissions, command: &str) -> bool {
        let Some(guild_id) = self.ctx.guild_id() else {
            return true;
        };
        let held =
            has_user_permission(self.ctx.http(), guild_id, self.ctx.author().id, required).await;
        match held {
            Ok(held) => held,
            Err(err) => {
                warn!(?err, %command, "failed to resolve invoker permissions; hiding command");
                false
            }
        }
    }

    async fn in_nsfw_channel(&self) -> bool {
        match self.ctx.channel_id().to_channel(self.ctx.serenity_context()).await {
            Ok(Channel::Guild(channel)) => channel.nsfw,
            Ok(_) => true,
            Err(err) => {
                warn!(?err, "failed to fetch invoking channel");
                false
            }
        }
    }
}

#[async_trait]
impl<'a> AuthorizationChecker for FrameworkChecker<'a> {
    async fn can_run(&self, command: &CommandInfo) -> Result<bool, CheckError> {
        let options = self.ctx.framework().options();
        let Some(target) = find_framework_command(&options.commands, &command.qualified_name)
        else {
            debug!(command = %command.qualified_name, "command vanished from the framework");
            return Ok(false);
        };

        let is_owner = options.owners.contains(&self.ctx.author().id);
        if is_owner && options.skip_checks_for_owners {
            return Ok(true);
        }

        let in_guild = self.ctx.guild_id().is_some();
        if !passes_static_gates(target, is_owner, in_guild) {
            return Ok(false);
        }

        if let Some(required) = required_guild_permissions(target, in_guild)
            && !self.holds(required, &command.qualified_name).await
        {
            return Ok(false);
        }

        if target.nsfw_only && in_guild && !self.in_nsfw_channel().await {
            return Ok(false);
        }

        for check in options.command_check.iter().chain(&target.checks) {
            if !check(self.ctx).await.map_err(CheckError::from_check)? {
                return Ok(false);
            }
        }

        Ok(true)
    }
}

/// Sends help through the invoking context. Private output goes to the
/// invoker's DMs for prefix invocations and is ephemeral for slash ones.
pub struct FrameworkTransport<'a> {
    ctx: Context<'a>,
}

impl<'a> FrameworkTransport<'a> {
    pub fn new(ctx: Context<'a>) -> Self {
        Self { ctx }
    }
}

async fn send_pages(ctx: Context<'_>, paged: &PagedEmbed, ephemeral: bool) -> Result<(), Error> {
    #[cfg(feature = "pagination")]
    if !ephemeral {
        helpdesk_utils::pagination::paginate_embed_pages(ctx, paged).await?;
        return Ok(());
    }

    let total = paged.pages.len();
    for (index, page) in paged.pages.iter().enumerate() {
        let embed = build_page_embed(&paged.title, page, paged.color, index + 1, total);
        ctx.send(poise::CreateReply::default().embed(embed).ephemeral(ephemeral))
            .await?;
    }
    Ok(())
}

async fn send_reply(ctx: Context<'_>, output: HelpOutput, ephemeral: bool) -> Result<(), Error> {
    match output {
        HelpOutput::Text(text) => {
            ctx.send(poise::CreateReply::default().content(text).ephemeral(ephemeral))
                .await?;
        }
        HelpOutput::Embed(embed) => {
            ctx.send(
                poise::CreateReply::default()
                    .embed(create_embed(&embed))
                    .ephemeral(ephemeral),
            )
            .await?;
        }
        HelpOutput::Pages(paged) => send_pages(ctx, &paged, ephemeral).await?,
    }
    Ok(())
}

async fn send_direct(ctx: Context<'_>, output: HelpOutput) -> Result<(), Error> {
    let messages = match output {
        HelpOutput::Text(text) => vec![CreateMessage::new().content(text)],
        HelpOutput::Embed(embed) => vec![CreateMessage::new().embed(create_embed(&embed))],
        HelpOutput::Pages(paged) => {
            let total = paged.pages.len();
            paged
                .pages
                .iter()
                .enumerate()
                .map(|(index, page)| {
                    CreateMessage::new().embed(build_page_embed(
                        &paged.title,
                        page,
                        paged.color,
                        index + 1,
                        total,
                    ))
                })
                .collect()
        }
    };

    for message in messages {
        ctx.author()
            .direct_message(ctx.serenity_context(), message)
            .await?;
    }
    Ok(())
}

#[async_trait]
impl<'a> Transport for FrameworkTransport<'a> {
    async fn send(&self, output: HelpOutput, destination: Destination) -> Result<(), Error> {
        let is_slash = matches!(self.ctx, poise::Context::Application(_));
        match (destination, is_slash) {
            (Destination::Origin, _) => send_reply(self.ctx, output, false).await,
            (Destination::Private, true) => send_reply(self.ctx, output, true).await,
            (Destination::Private, false) => send_direct(self.ctx, output).await,
        }
    }
}

/// What the invoker asked help for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HelpRequest {
    /// A single prefix query naming a cog or a command.
    Query(Option<String>),
    /// Separate slash options; the cog wins when both are given.
    Lookup {
        command: Option<String>,
        cog: Option<String>,
    },
}

impl HelpRequest {
    pub fn resolve<'r, R>(&self, registry: &'r R) -> Resolution<'r>
    where
        R: Registry + ?Sized,
    {
        match self {
            Self::Query(query) => resolve_query(registry, query.as_deref()),
            Self::Lookup { command, cog } => resolve(registry, command.as_deref(), cog.as_deref()),
        }
    }
}

/// Answer `request` through the framework the command was invoked from.
///
/// Returns a boxed `Send` future so poise command bodies can await it for any
/// formatter.
pub fn respond_in<'a, F, H>(
    ctx: Context<'a>,
    help: HelpCommand<F, H>,
    request: HelpRequest,
) -> HelpFuture<'a>
where
    F: HelpFormatter + 'a,
    H: HelpHooks + 'a,
{
    Box::pin(async move {
        let registry = registry(ctx);
        let resolution = request.resolve(&registry);
        let invocation = invocation(ctx);
        let checker = FrameworkChecker::new(ctx);
        let transport = FrameworkTransport::new(ctx);

        help.respond(resolution, &invocation, &registry, &checker, &transport)
            .await
    })
}

/// Fold the slash entry point into the prefix one: a single command that
/// parses a rest-of-line query on prefix invocations and separate options on
/// slash invocations.
pub fn merge_surfaces<U, E>(
    mut prefix: poise::Command<U, E>,
    slash: poise::Command<U, E>,
) -> poise::Command<U, E> {
    prefix.slash_action = slash.slash_action;
    prefix.parameters = slash.parameters;
    prefix
}

/// Apply the configured name and description to the help command and drop
/// its cog argument when the bot has no cogs.
pub fn configure_slash_help<U, E>(
    command: &mut poise::Command<U, E>,
    config: &MinimalSlashConfig,
    has_cogs: bool,
) {
    command.name = config.help_command_name.clone();
    command.qualified_name = config.help_command_name.clone();
    command.description = Some(config.help_command_description.clone());
    if !has_cogs {
        command.parameters.retain(|param| param.name != "cog");
    }
}
