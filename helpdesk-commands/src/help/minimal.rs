use helpdesk_core::{
    CogInfo, CommandInfo, CommandKind, Destination, HelpOutput, MinimalSlashConfig, Surface,
};
use helpdesk_utils::formatting::{NAME_SEPARATOR, push_block};

use super::formatter::{FilterPolicy, HelpFormatter, Overview};

/// Plain-text help for slash commands.
#[derive(Clone, Debug, Default)]
pub struct MinimalSlashHelp {
    config: MinimalSlashConfig,
}

impl MinimalSlashHelp {
    pub fn new(config: MinimalSlashConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MinimalSlashConfig {
        &self.config
    }

    /// Lists commands that can be invoked as slash commands, leaving out hidden
    /// ones unless `show_hidden` is set.
    fn command_list<'c>(&self, commands: impl IntoIterator<Item = &'c CommandInfo>) -> String {
        let mut names: Vec<&str> = commands
            .into_iter()
            .filter(|command| !command.name.is_empty())
            .filter(|command| command.available_on(Surface::Slash))
            .filter(|command| self.config.show_hidden || !command.hidden)
            .map(|command| command.qualified_name.as_str())
            .collect();
        if self.config.sort_commands {
            names.sort_unstable();
        }

        if names.is_empty() {
            return String::new();
        }

        format!(
            "{}\n{}",
            self.config.commands_heading,
            names
                .iter()
                .map(|name| format!("/{}", name))
                .collect::<Vec<_>>()
                .join(NAME_SEPARATOR)
        )
    }
}

impl HelpFormatter for MinimalSlashHelp {
    fn surface(&self) -> Surface {
        Surface::Slash
    }

    fn policy(&self) -> FilterPolicy {
        FilterPolicy {
            verify_checks: self.config.verify_checks,
            show_hidden: self.config.show_hidden,
            sort_commands: self.config.sort_commands,
        }
    }

    fn destination(&self) -> Destination {
        if self.config.dm_only {
            Destination::Private
        } else {
            Destination::Origin
        }
    }

    fn help_command_name(&self) -> &str {
        &self.config.help_command_name
    }

    fn render_overview(&self, overview: &Overview<'_>) -> HelpOutput {
        let mut output = String::new();

        if let Some(note) = &overview.opening_note {
            push_block(&mut output, note);
        }
        if let Some(description) = overview.description {
            push_block(&mut output, description);
        }

        for section in &overview.sections {
            let joined = section
                .commands
                .iter()
                .map(|command| command.name.as_str())
                .collect::<Vec<_>>()
                .join(NAME_SEPARATOR);

            output.push_str(&format!(
                "__**{}:**__\n",
                section.category.heading(&self.config.no_category)
            ));
            push_block(&mut output, &joined);
        }

        if let Some(note) = &overview.ending_note {
            output.push_str(note);
        }

        HelpOutput::Text(output.trim_end().to_owned())
    }

    fn render_cog(&self, cog: &CogInfo, commands: &[&CommandInfo], _prefix: &str) -> HelpOutput {
        let mut output = String::new();
        push_block(&mut output, &cog.qualified_name);
        if let Some(description) = &cog.description {
            push_block(&mut output, description);
        }
        push_block(&mut output, &self.command_list(commands.iter().copied()));

        HelpOutput::Text(output.trim_end().to_owned())
    }

    fn render_command(&self, command: &CommandInfo, _prefix: &str) -> HelpOutput {
        let mut output = String::new();
        push_block(&mut output, &format!("/{}", command.qualified_name));
        if let Some(description) = &command.description {
            push_block(&mut output, description);
        }

        if let CommandKind::Group(children) = &command.kind {
            push_block(&mut output, &self.command_list(children));
        }

        HelpOutput::Text(output.trim_end().to_owned())
    }
}
