use helpdesk_core::{
    Category, CogInfo, CommandInfo, CommandKind, Destination, EmbeddedConfig, HelpEmbed,
    HelpOutput, Surface,
};
use helpdesk_utils::formatting::{
    cog_commands_footer, command_label, commands_footer, help_value, signature_line,
    subcommands_footer,
};

use super::formatter::{FilterPolicy, HelpFormatter, Overview};

/// Embed-based help for prefix commands.
#[derive(Clone, Debug, Default)]
pub struct EmbeddedHelp {
    config: EmbeddedConfig,
}

impl EmbeddedHelp {
    pub fn new(config: EmbeddedConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EmbeddedConfig {
        &self.config
    }

    fn command_embed(&self, command: &CommandInfo, prefix: &str) -> HelpEmbed {
        HelpEmbed::new(
            &self.config.command_embed_title,
            self.config.command_embed_description.clone(),
            self.config.command_color(),
        )
        .field(signature_line(prefix, command), help_value(command))
    }

    fn group_embed(&self, group: &CommandInfo, prefix: &str) -> HelpEmbed {
        let embed = HelpEmbed::new(
            &self.config.group_embed_title,
            self.config.group_embed_description.clone(),
            self.config.group_color(),
        );

        group
            .walk()
            .into_iter()
            .fold(embed, |embed, sub| {
                embed.field(signature_line(prefix, sub), help_value(sub))
            })
            .footer(subcommands_footer(group.subcommands().len()))
    }
}

impl HelpFormatter for EmbeddedHelp {
    fn surface(&self) -> Surface {
        Surface::Prefix
    }

    fn policy(&self) -> FilterPolicy {
        FilterPolicy {
            verify_checks: self.config.verify_checks,
            show_hidden: self.config.show_hidden,
            sort_commands: self.config.sort_commands,
        }
    }

    fn destination(&self) -> Destination {
        if self.config.dm_help {
            Destination::Private
        } else {
            Destination::Origin
        }
    }

    fn render_overview(&self, overview: &Overview<'_>) -> HelpOutput {
        let mut embed = HelpEmbed::new(
            &self.config.main_embed_title,
            self.config.main_embed_description.clone(),
            self.config.main_color(),
        );

        for section in &overview.sections {
            let labels = section
                .commands
                .iter()
                .map(|command| command_label(command))
                .collect::<Vec<_>>()
                .join(" ");

            let name = match &section.category {
                Category::Uncategorized => self.config.no_category.clone(),
                Category::Cog(cog) => format!("{} Commands [{}]", cog, section.commands.len()),
            };
            embed = embed.field(name, labels);
        }

        HelpOutput::Embed(embed.footer(commands_footer(overview.total_commands())))
    }

    fn render_cog(&self, cog: &CogInfo, commands: &[&CommandInfo], prefix: &str) -> HelpOutput {
        let description = self
            .config
            .cog_embed_description
            .clone()
            .or_else(|| cog.description.clone());

        let embed = commands.iter().fold(
            HelpEmbed::new(&self.config.cog_embed_title, description, self.config.cog_color()),
            |embed, command| embed.field(signature_line(prefix, command), help_value(command)),
        );

        HelpOutput::Embed(embed.footer(cog_commands_footer(commands.len())))
    }

    fn render_command(&self, command: &CommandInfo, prefix: &str) -> HelpOutput {
        let embed = match &command.kind {
            CommandKind::Command => self.command_embed(command, prefix),
            CommandKind::Group(_) => self.group_embed(command, prefix),
        };
        HelpOutput::Embed(embed)
    }
}
