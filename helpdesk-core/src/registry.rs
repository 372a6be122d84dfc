use crate::model::{CogInfo, CommandInfo, Surface};

/// Read-only view of the host's command registry.
pub trait Registry: Send + Sync {
    /// Top-level commands in registration order. Subcommands are reached through groups.
    fn commands(&self) -> &[CommandInfo];

    fn cogs(&self) -> &[CogInfo];

    /// The bot's own description, shown on the overview by some formatters.
    fn description(&self) -> Option<&str> {
        None
    }

    /// Exact, case-sensitive lookup by qualified name.
    fn get_cog(&self, qualified_name: &str) -> Option<&CogInfo> {
        self.cogs()
            .iter()
            .find(|cog| cog.qualified_name == qualified_name)
    }

    /// Exact lookup by qualified name across every command, prefix and slash,
    /// including subcommands.
    fn find_command(&self, qualified_name: &str) -> Option<&CommandInfo> {
        self.commands().iter().find_map(|command| {
            if command.qualified_name == qualified_name {
                return Some(command);
            }
            command
                .walk()
                .into_iter()
                .find(|child| child.qualified_name == qualified_name)
        })
    }

    /// Top-level commands invocable through `surface`.
    fn surface_commands(&self, surface: Surface) -> Vec<&CommandInfo> {
        self.commands()
            .iter()
            .filter(|command| command.available_on(surface))
            .collect()
    }

    /// Top-level commands owned by `cog` and invocable through `surface`.
    fn cog_commands(&self, cog: &CogInfo, surface: Surface) -> Vec<&CommandInfo> {
        self.surface_commands(surface)
            .into_iter()
            .filter(|command| command.cog.as_deref() == Some(cog.qualified_name.as_str()))
            .collect()
    }

    fn bot_mapping(&self, surface: Surface) -> BotMapping<'_> {
        let mut entries: Vec<(Option<&CogInfo>, Vec<&CommandInfo>)> = self
            .cogs()
            .iter()
            .map(|cog| (Some(cog), self.cog_commands(cog, surface)))
            .collect();

        let bare = self
            .surface_commands(surface)
            .into_iter()
            .filter(|command| command.cog.is_none())
            .collect();
        entries.push((None, bare));

        BotMapping { entries }
    }
}

/// Cog-or-none projection of the registry, built per request.
#[derive(Clone, Debug)]
pub struct BotMapping<'a> {
    entries: Vec<(Option<&'a CogInfo>, Vec<&'a CommandInfo>)>,
}

impl<'a> BotMapping<'a> {
    pub fn entries(&self) -> &[(Option<&'a CogInfo>, Vec<&'a CommandInfo>)] {
        &self.entries
    }

    /// Commands for one cog, or the ungrouped commands for `None`.
    pub fn get(&self, cog: Option<&str>) -> &[&'a CommandInfo] {
        self.entries
            .iter()
            .find(|(entry, _)| entry.map(|c| c.qualified_name.as_str()) == cog)
            .map(|(_, commands)| commands.as_slice())
            .unwrap_or(&[])
    }

    /// Every command in the mapping, cogs first, ungrouped last.
    pub fn commands(&self) -> impl Iterator<Item = &'a CommandInfo> + '_ {
        self.entries
            .iter()
            .flat_map(|(_, commands)| commands.iter().copied())
    }
}

/// Owned registry built once per request from whatever the host exposes.
#[derive(Clone, Debug, Default)]
pub struct RegistrySnapshot {
    commands: Vec<CommandInfo>,
    cogs: Vec<CogInfo>,
    description: Option<String>,
}

impl RegistrySnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a command, registering its cog on first sight.
    pub fn with_command(mut self, command: CommandInfo) -> Self {
        self.push_command(command);
        self
    }

    pub fn with_cog(mut self, cog: CogInfo) -> Self {
        self.push_cog(cog);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn push_command(&mut self, command: CommandInfo) {
        if let Some(cog) = &command.cog
            && self.get_cog(cog).is_none()
        {
            self.cogs.push(CogInfo::new(cog.clone()));
        }
        self.commands.push(command);
    }

    /// Registers a cog, replacing the description of an existing one with the same name.
    pub fn push_cog(&mut self, cog: CogInfo) {
        match self
            .cogs
            .iter_mut()
            .find(|existing| existing.qualified_name == cog.qualified_name)
        {
            Some(existing) => existing.description = cog.description,
            None => self.cogs.push(cog),
        }
    }
}

impl Registry for RegistrySnapshot {
    fn commands(&self) -> &[CommandInfo] {
        &self.commands
    }

    fn cogs(&self) -> &[CogInfo] {
        &self.cogs
    }

    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::{Registry, RegistrySnapshot};
    use crate::model::{CogInfo, CommandInfo, Surface};

    fn registry() -> RegistrySnapshot {
        RegistrySnapshot::new()
            .with_command(CommandInfo::new("ping"))
            .with_command(
                CommandInfo::group("math", vec![CommandInfo::new("add"), CommandInfo::new("sub")])
                    .in_cog("Math"),
            )
            .with_command(CommandInfo::new("roll").in_cog("Fun").slash_only())
            .with_cog(CogInfo::new("Math").with_description("Arithmetic"))
    }

    #[test]
    fn cogs_are_registered_once_in_order() {
        let registry = registry();
        let names: Vec<_> = registry.cogs().iter().map(|c| c.qualified_name.as_str()).collect();
        assert_eq!(names, vec!["Math", "Fun"]);
        assert_eq!(
            registry.get_cog("Math").and_then(|c| c.description.as_deref()),
            Some("Arithmetic")
        );
    }

    #[test]
    fn cog_lookup_is_case_sensitive() {
        assert!(registry().get_cog("math").is_none());
    }

    #[test]
    fn finds_subcommands_by_qualified_name() {
        let registry = registry();
        assert_eq!(registry.find_command("math sub").map(|c| c.name.as_str()), Some("sub"));
        assert!(registry.find_command("sub").is_none());
        assert!(registry.find_command("roll").is_some());
    }

    #[test]
    fn mapping_puts_bare_commands_under_none() {
        let registry = registry();
        let mapping = registry.bot_mapping(Surface::Prefix);
        let bare: Vec<_> = mapping.get(None).iter().map(|c| c.name.as_str()).collect();
        assert_eq!(bare, vec!["ping"]);
        assert!(mapping.get(Some("Fun")).is_empty());
        assert_eq!(mapping.commands().count(), 2);
    }
}
