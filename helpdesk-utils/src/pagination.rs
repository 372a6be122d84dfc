/// Number of pages needed for `total_items`, never less than one.
pub fn total_pages(total_items: usize, per_page: usize) -> usize {
    let per_page = per_page.max(1);
    let pages = total_items.div_ceil(per_page);
    pages.max(1)
}

/// Half-open item range `(start, end)` shown on 1-based `page`.
pub fn page_window(total_items: usize, per_page: usize, page: usize) -> (usize, usize) {
    let per_page = per_page.max(1);
    let page = page.max(1);
    let start = (page - 1).saturating_mul(per_page).min(total_items);
    let end = (start + per_page).min(total_items);
    (start, end)
}

#[cfg(feature = "pagination")]
pub use interactive::{PAGINATION_TIMEOUT_SECS, paginate_embed_pages};

#[cfg(feature = "pagination")]
mod interactive {
    use std::time::Duration;

    use poise::serenity_prelude as serenity;
    use tracing::debug;

    use helpdesk_core::PagedEmbed;

    use crate::embed::build_page_embed;

    pub const PAGINATION_TIMEOUT_SECS: u64 = 60 * 3;

    fn pagination_components(
        prev_id: &str,
        jump_id: &str,
        next_id: &str,
        current_page: usize,
        total_pages: usize,
    ) -> Vec<serenity::CreateActionRow> {
        let is_first_page = current_page == 0;
        let is_last_page = current_page + 1 >= total_pages;

        vec![serenity::CreateActionRow::Buttons(vec![
            serenity::CreateButton::new(prev_id)
                .label("Prev")
                .disabled(is_first_page)
                .style(serenity::ButtonStyle::Secondary),
            serenity::CreateButton::new(jump_id)
                .label("Jump")
                .style(serenity::ButtonStyle::Secondary),
            serenity::CreateButton::new(next_id)
                .label("Next")
                .disabled(is_last_page)
                .style(serenity::ButtonStyle::Secondary),
        ])]
    }

    /// Send `paged` and let the invoker browse it with Prev / Jump / Next
    /// buttons until the collector times out.
    pub async fn paginate_embed_pages<U, E>(
        ctx: poise::Context<'_, U, E>,
        paged: &PagedEmbed,
    ) -> Result<(), serenity::Error>
    where
        U: Send + Sync,
        E: Send + Sync,
    {
        if paged.pages.is_empty() {
            return Ok(());
        }

        let total_pages = paged.pages.len();
        let mut current_page = paged.start_page.clamp(1, total_pages) - 1;
        let page_embed = |index: usize| {
            build_page_embed(
                &paged.title,
                &paged.pages[index],
                paged.color,
                index + 1,
                total_pages,
            )
        };

        if total_pages <= 1 {
            ctx.send(poise::CreateReply::default().embed(page_embed(current_page)))
                .await?;
            return Ok(());
        }

        let ctx_id = ctx.id();
        let prev_button_id = format!("{}_prev", ctx_id);
        let jump_button_id = format!("{}_jump", ctx_id);
        let next_button_id = format!("{}_next", ctx_id);
        let jump_modal_id = format!("{}_jump_modal", ctx_id);
        let jump_input_id = format!("{}_jump_input", ctx_id);
        let components = |page: usize| {
            pagination_components(
                &prev_button_id,
                &jump_button_id,
                &next_button_id,
                page,
                total_pages,
            )
        };

        let reply = ctx
            .send(
                poise::CreateReply::default()
                    .embed(page_embed(current_page))
                    .components(components(current_page)),
            )
            .await?;

        let message = reply.message().await?;
        let message_id = message.id;
        let channel_id = message.channel_id;

        while let Some(press) = serenity::collector::ComponentInteractionCollector::new(ctx)
            .filter({
                let prefix = format!("{}", ctx_id);
                let author_id = ctx.author().id;
                move |interaction| {
                    interaction.data.custom_id.starts_with(&prefix)
                        && interaction.user.id == author_id
                        && interaction.message.id == message_id
                }
            })
            .timeout(Duration::from_secs(PAGINATION_TIMEOUT_SECS))
            .await
        {
            let custom_id = press.data.custom_id.as_str();
            if custom_id == next_button_id || custom_id == prev_button_id {
                current_page = if custom_id == next_button_id {
                    (current_page + 1).min(total_pages - 1)
                } else {
                    current_page.saturating_sub(1)
                };

                press
                    .create_response(
                        ctx.http(),
                        serenity::CreateInteractionResponse::UpdateMessage(
                            serenity::CreateInteractionResponseMessage::new()
                                .embed(page_embed(current_page))
                                .components(components(current_page)),
                        ),
                    )
                    .await?;
                continue;
            }

            if custom_id != jump_button_id {
                continue;
            }

            press
                .create_response(
                    ctx.http(),
                    serenity::CreateInteractionResponse::Modal(
                        serenity::CreateModal::new(&jump_modal_id, "Jump to Page").components(
                            vec![serenity::CreateActionRow::InputText(
                                serenity::CreateInputText::new(
                                    serenity::InputTextStyle::Short,
                                    "Page Number",
                                    &jump_input_id,
                                )
                                .placeholder(format!("1-{}", total_pages))
                                .required(true),
                            )],
                        ),
                    ),
                )
                .await?;

            let maybe_modal = serenity::collector::ModalInteractionCollector::new(ctx)
                .author_id(ctx.author().id)
                .channel_id(ctx.channel_id())
                .custom_ids(vec![jump_modal_id.clone()])
                .timeout(Duration::from_secs(PAGINATION_TIMEOUT_SECS))
                .await;

            let Some(modal) = maybe_modal else {
                continue;
            };

            modal
                .create_response(ctx.http(), serenity::CreateInteractionResponse::Acknowledge)
                .await?;

            let submitted_page = modal
                .data
                .components
                .iter()
                .flat_map(|row| row.components.iter())
                .find_map(|component| {
                    if let serenity::ActionRowComponent::InputText(input) = component
                        && input.custom_id == jump_input_id
                    {
                        return input.value.clone();
                    }

                    None
                });

            if let Some(submitted_page) = submitted_page
                && let Ok(target_page) = submitted_page.trim().parse::<usize>()
                && (1..=total_pages).contains(&target_page)
            {
                current_page = target_page - 1;

                channel_id
                    .edit_message(
                        ctx.http(),
                        message_id,
                        serenity::EditMessage::new()
                            .embed(page_embed(current_page))
                            .components(components(current_page)),
                    )
                    .await?;
            }
        }

        debug!(pages = total_pages, last_page = current_page + 1, "help pagination timed out");

        // Drop the buttons once nobody can press them anymore.
        let _ = channel_id
            .edit_message(
                ctx.http(),
                message_id,
                serenity::EditMessage::new()
                    .embed(page_embed(current_page))
                    .components(Vec::new()),
            )
            .await;

        Ok(())
    }
}
