pub mod autocomplete;
pub mod embedded;
pub mod filter;
pub mod formatter;
pub mod framework;
pub mod grouping;
pub mod hooks;
pub mod minimal;
pub mod paginated;
pub mod prefix;
pub mod resolve;

#[cfg(test)]
pub(crate) mod testing;

use tracing::{debug, info};

use helpdesk_core::{
    AuthorizationChecker, Category, CommandInfo, Destination, Error, HelpOutput, Registry, Transport,
};

pub use embedded::EmbeddedHelp;
pub use filter::CommandFilter;
pub use formatter::{FilterPolicy, HelpFormatter, Overview};
pub use grouping::{Section, group_by_category};
pub use hooks::{DefaultHooks, HelpHooks};
pub use minimal::MinimalSlashHelp;
pub use paginated::PaginatedHelp;
pub use prefix::PrefixHelp;
pub use resolve::{Resolution, resolve, resolve_query};

/// Per-invocation facts about who asked and how.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Invocation {
    /// Prefix the invoker used, `/` for slash invocations.
    pub prefix: String,
    pub in_guild: bool,
}

/// A help command: a formatter plus the hooks it answers "not found" with.
#[derive(Clone, Debug, Default)]
pub struct HelpCommand<F, H = DefaultHooks> {
    formatter: F,
    hooks: H,
}

impl<F: HelpFormatter> HelpCommand<F> {
    pub fn new(formatter: F) -> Self {
        Self {
            formatter,
            hooks: DefaultHooks,
        }
    }
}

impl<F, H> HelpCommand<F, H>
where
    F: HelpFormatter,
    H: HelpHooks,
{
    pub fn with_hooks<H2: HelpHooks>(self, hooks: H2) -> HelpCommand<F, H2> {
        HelpCommand {
            formatter: self.formatter,
            hooks,
        }
    }

    pub fn formatter(&self) -> &F {
        &self.formatter
    }

    /// Resolve, filter and render a request without sending it.
    pub async fn render<R, A>(
        &self,
        resolution: Resolution<'_>,
        invocation: &Invocation,
        registry: &R,
        checker: &A,
    ) -> Result<(HelpOutput, Destination), Error>
    where
        R: Registry + ?Sized,
        A: AuthorizationChecker + ?Sized,
    {
        let destination = self.formatter.destination();
        let prefix = invocation.prefix.as_str();

        let output = match resolution {
            Resolution::CogNotFound(name) => {
                debug!(cog = %name, "help requested for unknown cog");
                HelpOutput::Text(self.hooks.cog_not_found(&name))
            }
            Resolution::CommandNotFound(name) => {
                debug!(command = %name, "help requested for unknown command");
                HelpOutput::Text(self.hooks.command_not_found(&name))
            }
            Resolution::Cog(cog) => {
                let commands = registry.cog_commands(cog, self.formatter.surface());
                self.formatter.render_cog(cog, &commands, prefix)
            }
            Resolution::Command(command) => self.formatter.render_command(command, prefix),
            Resolution::BotOverview => {
                let policy = self.formatter.policy();
                let mapping = registry.bot_mapping(self.formatter.surface());
                let commands: Vec<&CommandInfo> = mapping.commands().collect();
                let visible = CommandFilter::new(checker, policy.verify_checks, invocation.in_guild)
                    .show_hidden(policy.show_hidden)
                    .filter_sorted_by(commands, Category::of)
                    .await?;

                let overview = Overview {
                    sections: group_by_category(&visible, policy.sort_commands),
                    prefix,
                    description: registry.description(),
                    opening_note: self.hooks.opening_note(self.formatter.help_command_name()),
                    ending_note: self.hooks.ending_note(),
                };
                debug!(
                    sections = overview.sections.len(),
                    commands = overview.total_commands(),
                    "rendering help overview"
                );
                self.formatter.render_overview(&overview)
            }
        };

        Ok((output, destination))
    }

    /// Render a resolved request and deliver it. Exactly one send per call.
    pub async fn respond<R, A, T>(
        &self,
        resolution: Resolution<'_>,
        invocation: &Invocation,
        registry: &R,
        checker: &A,
        transport: &T,
    ) -> Result<(), Error>
    where
        R: Registry + ?Sized,
        A: AuthorizationChecker + ?Sized,
        T: Transport + ?Sized,
    {
        let (output, destination) = self.render(resolution, invocation, registry, checker).await?;
        transport.send(output, destination).await?;
        info!(?destination, "help sent");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use helpdesk_core::{
        CogInfo, CommandInfo, Destination, EmbedField, EmbeddedConfig, HelpOutput,
        MinimalSlashConfig, RegistrySnapshot, VerifyChecks,
    };

    use super::testing::{FakeChecker, RecordingTransport};
    use super::{
        EmbeddedHelp, HelpCommand, HelpHooks, Invocation, MinimalSlashHelp, resolve, resolve_query,
    };

    fn invocation() -> Invocation {
        Invocation {
            prefix: "!".to_owned(),
            in_guild: true,
        }
    }

    fn registry() -> RegistrySnapshot {
        RegistrySnapshot::new()
            .with_command(CommandInfo::new("ping").with_description("Replies with Pong!"))
            .with_command(CommandInfo::new("add").with_signature("<a> <b>").in_cog("Math"))
            .with_command(
                CommandInfo::group(
                    "math",
                    vec![
                        CommandInfo::new("add").with_signature("<a> <b>"),
                        CommandInfo::new("sub").with_signature("<a> <b>"),
                    ],
                )
                .in_cog("Algebra"),
            )
            .with_cog(CogInfo::new("Empty"))
    }

    fn field_names(output: &HelpOutput) -> Vec<String> {
        output
            .as_embed()
            .unwrap()
            .fields
            .iter()
            .map(|f| f.name.clone())
            .collect()
    }

    #[tokio::test]
    async fn overview_groups_categories() {
        let registry = RegistrySnapshot::new()
            .with_command(CommandInfo::new("add").in_cog("Math"))
            .with_command(CommandInfo::new("ping"));
        let checker = FakeChecker::allow_all();
        let transport = RecordingTransport::default();

        HelpCommand::new(EmbeddedHelp::default())
            .respond(resolve(&registry, None, None), &invocation(), &registry, &checker, &transport)
            .await
            .unwrap();

        let sent = transport.sent();
        assert_eq!(sent.len(), 1);
        let (output, destination) = &sent[0];
        assert_eq!(*destination, Destination::Origin);
        assert_eq!(
            output.as_embed().unwrap().fields,
            vec![
                EmbedField {
                    name: "No category".to_owned(),
                    value: "`ping`".to_owned(),
                    inline: false,
                },
                EmbedField {
                    name: "Math Commands [1]".to_owned(),
                    value: "`add`".to_owned(),
                    inline: false,
                },
            ]
        );
    }

    #[tokio::test]
    async fn overview_is_idempotent() {
        let registry = registry();
        let checker = FakeChecker::allow_all();
        let help = HelpCommand::new(EmbeddedHelp::default());

        let first = help
            .render(resolve(&registry, None, None), &invocation(), &registry, &checker)
            .await
            .unwrap();
        let second = help
            .render(resolve(&registry, None, None), &invocation(), &registry, &checker)
            .await
            .unwrap();
        assert_eq!(first, second);
        assert_eq!(
            field_names(&first.0),
            vec!["No category", "Algebra Commands [1]", "Math Commands [1]"]
        );
    }

    #[tokio::test]
    async fn unknown_cog_is_a_plain_message() {
        let registry = registry();
        let transport = RecordingTransport::default();
        HelpCommand::new(EmbeddedHelp::default())
            .respond(
                resolve(&registry, Some("ping"), Some("Unknown")),
                &invocation(),
                &registry,
                &FakeChecker::allow_all(),
                &transport,
            )
            .await
            .unwrap();

        assert_eq!(
            transport.sent()[0].0,
            HelpOutput::Text("No cog called \"Unknown\" found.".to_owned())
        );
    }

    #[tokio::test]
    async fn unknown_command_is_exactly_the_hook_message() {
        let registry = registry();
        let (output, _) = HelpCommand::new(EmbeddedHelp::default())
            .render(
                resolve_query(&registry, Some("nope")),
                &invocation(),
                &registry,
                &FakeChecker::allow_all(),
            )
            .await
            .unwrap();
        assert_eq!(output, HelpOutput::Text("No command called \"nope\" found.".to_owned()));
    }

    #[tokio::test]
    async fn command_without_help_uses_fallback_literal() {
        let registry = registry();
        let (output, _) = HelpCommand::new(EmbeddedHelp::default())
            .render(
                resolve_query(&registry, Some("add")),
                &invocation(),
                &registry,
                &FakeChecker::allow_all(),
            )
            .await
            .unwrap();
        let embed = output.as_embed().unwrap();
        assert_eq!(embed.fields[0].name, "!add <a> <b>");
        assert_eq!(embed.fields[0].value, "`No description provided.`");
    }

    #[tokio::test]
    async fn group_help_lists_subcommands() {
        let registry = registry();
        let (output, _) = HelpCommand::new(EmbeddedHelp::default())
            .render(
                resolve_query(&registry, Some("math")),
                &invocation(),
                &registry,
                &FakeChecker::allow_all(),
            )
            .await
            .unwrap();
        assert_eq!(field_names(&output), vec!["!math add <a> <b>", "!math sub <a> <b>"]);
        assert_eq!(output.as_embed().unwrap().footer.as_deref(), Some("2 subcommands"));
    }

    #[tokio::test]
    async fn cog_help_only_lists_that_cogs_commands() {
        let registry = registry();
        let (output, _) = HelpCommand::new(EmbeddedHelp::default())
            .render(
                resolve(&registry, None, Some("Math")),
                &invocation(),
                &registry,
                &FakeChecker::allow_all(),
            )
            .await
            .unwrap();
        assert_eq!(field_names(&output), vec!["!add <a> <b>"]);
        assert_eq!(output.as_embed().unwrap().footer.as_deref(), Some("1 commands"));
    }

    #[tokio::test]
    async fn unverified_overview_never_consults_the_checker() {
        let registry = registry();
        let checker = FakeChecker::deny_all();
        let help = HelpCommand::new(EmbeddedHelp::new(EmbeddedConfig {
            verify_checks: VerifyChecks::Never,
            ..EmbeddedConfig::default()
        }));

        let (output, _) = help
            .render(resolve(&registry, None, None), &invocation(), &registry, &checker)
            .await
            .unwrap();
        assert_eq!(output.as_embed().unwrap().footer.as_deref(), Some("3 Commands"));
        assert_eq!(checker.calls(), 0);
    }

    #[tokio::test]
    async fn denied_commands_disappear_from_the_overview() {
        let registry = registry();
        let checker = FakeChecker::allow_all().deny("math");
        let (output, _) = HelpCommand::new(EmbeddedHelp::default())
            .render(resolve(&registry, None, None), &invocation(), &registry, &checker)
            .await
            .unwrap();
        assert_eq!(field_names(&output), vec!["No category", "Math Commands [1]"]);
    }

    #[tokio::test]
    async fn fatal_check_errors_abort_without_sending() {
        let registry = registry();
        let transport = RecordingTransport::default();
        let result = HelpCommand::new(EmbeddedHelp::default())
            .respond(
                resolve(&registry, None, None),
                &invocation(),
                &registry,
                &FakeChecker::allow_all().fail("ping"),
                &transport,
            )
            .await;
        assert!(result.is_err());
        assert!(transport.sent().is_empty());
    }

    #[tokio::test]
    async fn transport_failures_surface() {
        let registry = registry();
        let transport = RecordingTransport::failing();
        let result = HelpCommand::new(EmbeddedHelp::default())
            .respond(
                resolve(&registry, None, None),
                &invocation(),
                &registry,
                &FakeChecker::allow_all(),
                &transport,
            )
            .await;
        assert!(result.is_err());
    }

    struct Polite;

    impl HelpHooks for Polite {
        fn cog_not_found(&self, name: &str) -> String {
            format!("Sorry, there is no {} here.", name)
        }

        fn opening_note(&self, _help_command_name: &str) -> Option<String> {
            None
        }

        fn ending_note(&self) -> Option<String> {
            Some("Have fun!".to_owned())
        }
    }

    #[tokio::test]
    async fn hooks_are_swappable() {
        let registry = registry();
        let help = HelpCommand::new(MinimalSlashHelp::new(MinimalSlashConfig {
            dm_only: true,
            ..MinimalSlashConfig::default()
        }))
        .with_hooks(Polite);
        let slash = Invocation {
            prefix: "/".to_owned(),
            in_guild: false,
        };

        let (output, destination) = help
            .render(resolve(&registry, None, Some("Nope")), &slash, &registry, &FakeChecker::allow_all())
            .await
            .unwrap();
        assert_eq!(output.as_text(), Some("Sorry, there is no Nope here."));
        assert_eq!(destination, Destination::Private);

        let (output, _) = help
            .render(resolve(&registry, None, None), &slash, &registry, &FakeChecker::allow_all())
            .await
            .unwrap();
        let text = output.as_text().unwrap();
        assert!(text.starts_with("__**\u{200b}No category:**__\nping"));
        assert!(text.ends_with("Have fun!"));
    }
}
