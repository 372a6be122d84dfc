use helpdesk_core::{Context, Error};

/// Small integer arithmetic.
#[poise::command(
    prefix_command,
    slash_command,
    category = "Math",
    subcommands("add", "sub"),
    subcommand_required
)]
pub async fn math(_ctx: Context<'_>) -> Result<(), Error> {
    Ok(())
}

/// Adds two numbers.
#[poise::command(prefix_command, slash_command, category = "Math")]
pub async fn add(
    ctx: Context<'_>,
    #[description = "First number"] a: i64,
    #[description = "Second number"] b: i64,
) -> Result<(), Error> {
    ctx.say(a.saturating_add(b).to_string()).await?;
    Ok(())
}

/// Subtracts the second number from the first.
#[poise::command(prefix_command, slash_command, category = "Math")]
pub async fn sub(
    ctx: Context<'_>,
    #[description = "First number"] a: i64,
    #[description = "Second number"] b: i64,
) -> Result<(), Error> {
    ctx.say(a.saturating_sub(b).to_string()).await?;
    Ok(())
}
