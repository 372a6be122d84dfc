use helpdesk_core::{CogInfo, CommandInfo, Registry};

/// What a help request points at.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resolution<'a> {
    BotOverview,
    Cog(&'a CogInfo),
    Command(&'a CommandInfo),
    CogNotFound(String),
    CommandNotFound(String),
}

/// Resolve explicit `command` / `cog` arguments. A cog name always wins over
/// a command name; empty strings count as absent.
pub fn resolve<'a, R>(
    registry: &'a R,
    command_name: Option<&str>,
    cog_name: Option<&str>,
) -> Resolution<'a>
where
    R: Registry + ?Sized,
{
    if let Some(cog_name) = cog_name.filter(|name| !name.is_empty()) {
        return match registry.get_cog(cog_name) {
            Some(cog) => Resolution::Cog(cog),
            None => Resolution::CogNotFound(cog_name.to_owned()),
        };
    }

    if let Some(command_name) = command_name.filter(|name| !name.is_empty()) {
        return match registry.find_command(command_name) {
            Some(command) => Resolution::Command(command),
            None => Resolution::CommandNotFound(command_name.to_owned()),
        };
    }

    Resolution::BotOverview
}

/// Resolve the single free-form argument of the prefix `help [query]`
/// command: a query naming a cog is a cog lookup, anything else a command
/// lookup. Runs of whitespace between group and subcommand are collapsed.
pub fn resolve_query<'a, R>(registry: &'a R, query: Option<&str>) -> Resolution<'a>
where
    R: Registry + ?Sized,
{
    let Some(query) = query.map(str::trim).filter(|q| !q.is_empty()) else {
        return Resolution::BotOverview;
    };

    if registry.get_cog(query).is_some() {
        return resolve(registry, None, Some(query));
    }

    let normalized = query.split_whitespace().collect::<Vec<_>>().join(" ");
    resolve(registry, Some(&normalized), None)
}

#[cfg(test)]
mod tests {
    use helpdesk_core::{CogInfo, CommandInfo, RegistrySnapshot};

    use super::{Resolution, resolve, resolve_query};

    fn registry() -> RegistrySnapshot {
        RegistrySnapshot::new()
            .with_command(CommandInfo::new("ping"))
            .with_command(
                CommandInfo::group("math", vec![CommandInfo::new("add")]).in_cog("Math"),
            )
            .with_cog(CogInfo::new("Empty"))
    }

    #[test]
    fn no_arguments_is_the_overview() {
        assert_eq!(resolve(&registry(), None, None), Resolution::BotOverview);
        assert_eq!(resolve(&registry(), Some(""), Some("")), Resolution::BotOverview);
    }

    #[test]
    fn cog_wins_over_command() {
        let registry = registry();
        match resolve(&registry, Some("ping"), Some("Math")) {
            Resolution::Cog(cog) => assert_eq!(cog.qualified_name, "Math"),
            other => panic!("unexpected resolution: {:?}", other),
        }
        assert_eq!(
            resolve(&registry, Some("ping"), Some("Unknown")),
            Resolution::CogNotFound("Unknown".to_owned())
        );
    }

    #[test]
    fn unknown_command_keeps_literal_name() {
        assert_eq!(
            resolve(&registry(), Some("Ping"), None),
            Resolution::CommandNotFound("Ping".to_owned())
        );
    }

    #[test]
    fn subcommands_resolve_by_qualified_name() {
        let registry = registry();
        match resolve(&registry, Some("math add"), None) {
            Resolution::Command(command) => assert_eq!(command.name, "add"),
            other => panic!("unexpected resolution: {:?}", other),
        }
    }

    #[test]
    fn query_prefers_cogs_then_commands() {
        let registry = registry();
        assert!(matches!(resolve_query(&registry, Some("Empty")), Resolution::Cog(_)));
        assert!(matches!(
            resolve_query(&registry, Some("  math   add ")),
            Resolution::Command(command) if command.qualified_name == "math add"
        ));
        assert_eq!(
            resolve_query(&registry, Some("nope")),
            Resolution::CommandNotFound("nope".to_owned())
        );
        assert_eq!(resolve_query(&registry, Some("   ")), Resolution::BotOverview);
    }
}
