use helpdesk_core::{Registry, Surface};
use helpdesk_utils::formatting::clean_query;

/// Discord caps autocomplete responses at 25 choices.
pub const MAX_CHOICES: usize = 25;

/// Visible slash command names starting with `query`, ignoring case and a
/// leading `/`.
pub fn command_choices<R>(registry: &R, query: &str) -> Vec<String>
where
    R: Registry + ?Sized,
{
    let query = clean_query(query);
    registry
        .surface_commands(Surface::Slash)
        .into_iter()
        .filter(|command| !command.hidden)
        .map(|command| command.name.clone())
        .filter(|name| !name.is_empty() && name.to_lowercase().starts_with(&query))
        .take(MAX_CHOICES)
        .collect()
}

/// Cog names starting with `query`, ignoring case.
pub fn cog_choices<R>(registry: &R, query: &str) -> Vec<String>
where
    R: Registry + ?Sized,
{
    let query = query.trim().to_lowercase();
    registry
        .cogs()
        .iter()
        .map(|cog| cog.qualified_name.clone())
        .filter(|name| name.to_lowercase().starts_with(&query))
        .take(MAX_CHOICES)
        .collect()
}
