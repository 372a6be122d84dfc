use poise::serenity_prelude as serenity;

use helpdesk_core::HelpEmbed;

/// Color used for framework-level replies that have no help config behind them.
pub const DEFAULT_EMBED_COLOR: u32 = 0x90_55_30;

/// Convert a rendered help embed into a serenity builder.
pub fn create_embed(embed: &HelpEmbed) -> serenity::CreateEmbed {
    let mut builder = serenity::CreateEmbed::new()
        .title(embed.title.clone())
        .color(embed.color);

    if let Some(description) = embed.description.as_deref().filter(|d| !d.is_empty()) {
        builder = builder.description(description.to_owned());
    }

    builder = builder.fields(
        embed
            .fields
            .iter()
            .map(|field| (field.name.clone(), field.value.clone(), field.inline)),
    );

    match embed.footer.as_deref() {
        Some(footer) if !footer.is_empty() => {
            builder.footer(serenity::CreateEmbedFooter::new(footer.to_owned()))
        }
        _ => builder,
    }
}

/// Build one page of a paged help embed, with a `Page x/y` footer when there
/// is more than one page.
pub fn build_page_embed(
    title: &str,
    description: &str,
    color: u32,
    page: usize,
    total_pages: usize,
) -> serenity::CreateEmbed {
    let page = page.max(1);
    let total_pages = total_pages.max(1);

    let builder = serenity::CreateEmbed::new()
        .title(title.to_owned())
        .color(color)
        .description(description.to_owned());

    if total_pages > 1 {
        builder.footer(serenity::CreateEmbedFooter::new(format!(
            "Page {}/{}",
            page, total_pages
        )))
    } else {
        builder
    }
}
