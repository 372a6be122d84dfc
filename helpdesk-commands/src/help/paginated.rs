use helpdesk_core::{
    Category, CogInfo, CommandInfo, Destination, HelpOutput, MissingDependencyError, PagedEmbed,
    PaginatedConfig, Surface,
};
use helpdesk_utils::formatting::NO_DESCRIPTION;
use helpdesk_utils::pagination::{page_window, total_pages};

use super::embedded::EmbeddedHelp;
use super::formatter::{FilterPolicy, HelpFormatter, Overview};

/// Embed help whose overview is browsed page by page.
#[derive(Clone, Debug)]
pub struct PaginatedHelp {
    config: PaginatedConfig,
    detail: EmbeddedHelp,
}

impl PaginatedHelp {
    /// Fails when the crate was built without the interactive paginator.
    pub fn new(config: PaginatedConfig) -> Result<Self, MissingDependencyError> {
        if !cfg!(feature = "pagination") {
            return Err(MissingDependencyError {
                formatter: "PaginatedHelp",
                dependency: "interactive pagination",
                feature: Some("pagination"),
            });
        }

        Ok(Self::with_backend(config))
    }

    fn with_backend(config: PaginatedConfig) -> Self {
        let detail = EmbeddedHelp::new(config.embedded.clone());
        Self { config, detail }
    }

    pub fn config(&self) -> &PaginatedConfig {
        &self.config
    }
}

/// Render `entries` as one page description: a bold header whenever the
/// category changes, then one line per command.
fn page_description(entries: &[(&Category, &CommandInfo)], no_category: &str) -> String {
    let mut out = String::new();
    let mut current: Option<&Category> = None;

    for &(category, command) in entries {
        if current != Some(category) {
            if !out.is_empty() {
                out.push('\n');
            }
            out.push_str(&format!("**{}**\n", category.heading(no_category)));
            current = Some(category);
        }

        let desc = command
            .brief
            .as_deref()
            .or(command.help.as_deref())
            .filter(|text| !text.is_empty())
            .unwrap_or(NO_DESCRIPTION);
        out.push_str(&format!("`{}`: {}\n", command.name, desc));
    }

    if out.is_empty() {
        out.push_str("No commands available.");
    }

    out.trim_end().to_owned()
}

impl HelpFormatter for PaginatedHelp {
    fn surface(&self) -> Surface {
        Surface::Prefix
    }

    fn policy(&self) -> FilterPolicy {
        self.detail.policy()
    }

    fn destination(&self) -> Destination {
        self.detail.destination()
    }

    fn render_overview(&self, overview: &Overview<'_>) -> HelpOutput {
        let entries: Vec<(&Category, &CommandInfo)> = overview
            .sections
            .iter()
            .flat_map(|section| {
                section
                    .commands
                    .iter()
                    .map(move |&command| (&section.category, command))
            })
            .collect();

        let per_page = self.config.per_page;
        let no_category = &self.config.embedded.no_category;
        let pages = (1..=total_pages(entries.len(), per_page))
            .map(|page| {
                let (start, end) = page_window(entries.len(), per_page, page);
                page_description(&entries[start..end], no_category)
            })
            .collect();

        HelpOutput::Pages(PagedEmbed {
            title: self.config.overview_title.clone(),
            color: self.config.embedded.main_color(),
            pages,
            start_page: 1,
        })
    }

    fn render_cog(&self, cog: &CogInfo, commands: &[&CommandInfo], prefix: &str) -> HelpOutput {
        self.detail.render_cog(cog, commands, prefix)
    }

    fn render_command(&self, command: &CommandInfo, prefix: &str) -> HelpOutput {
        self.detail.render_command(command, prefix)
    }
}
