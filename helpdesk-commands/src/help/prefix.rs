use helpdesk_core::{
    CogInfo, CommandInfo, Destination, HelpConfig, HelpOutput, MissingDependencyError,
    PrefixStyle, Surface,
};

use super::embedded::EmbeddedHelp;
use super::formatter::{FilterPolicy, HelpFormatter, Overview};
use super::paginated::PaginatedHelp;

/// The formatter prefix invocations use, picked by `prefix_style`.
#[derive(Clone, Debug)]
pub enum PrefixHelp {
    Embedded(EmbeddedHelp),
    Paginated(PaginatedHelp),
}

impl PrefixHelp {
    /// Fails when the paginated style is configured but unavailable.
    pub fn from_config(config: &HelpConfig) -> Result<Self, MissingDependencyError> {
        Ok(match config.prefix_style {
            PrefixStyle::Embedded => Self::Embedded(EmbeddedHelp::new(config.embedded.clone())),
            PrefixStyle::Paginated => {
                Self::Paginated(PaginatedHelp::new(config.paginated.clone())?)
            }
        })
    }

    fn inner(&self) -> &dyn HelpFormatter {
        match self {
            Self::Embedded(help) => help,
            Self::Paginated(help) => help,
        }
    }
}

impl HelpFormatter for PrefixHelp {
    fn surface(&self) -> Surface {
        self.inner().surface()
    }

    fn policy(&self) -> FilterPolicy {
        self.inner().policy()
    }

    fn destination(&self) -> Destination {
        self.inner().destination()
    }

    fn help_command_name(&self) -> &str {
        self.inner().help_command_name()
    }

    fn render_overview(&self, overview: &Overview<'_>) -> HelpOutput {
        self.inner().render_overview(overview)
    }

    fn render_cog(&self, cog: &CogInfo, commands: &[&CommandInfo], prefix: &str) -> HelpOutput {
        self.inner().render_cog(cog, commands, prefix)
    }

    fn render_command(&self, command: &CommandInfo, prefix: &str) -> HelpOutput {
        self.inner().render_command(command, prefix)
    }
}

#[cfg(test)]
mod tests {
    use helpdesk_core::{CommandInfo, EmbeddedConfig, HelpConfig, PrefixStyle, Surface};

    use super::PrefixHelp;
    use crate::help::formatter::HelpFormatter;

    #[test]
    fn default_config_picks_embedded() {
        let help = PrefixHelp::from_config(&HelpConfig::default()).unwrap();
        assert!(matches!(help, PrefixHelp::Embedded(_)));
        assert_eq!(help.surface(), Surface::Prefix);
    }

    #[test]
    fn delegates_to_the_configured_style() {
        let config = HelpConfig {
            embedded: EmbeddedConfig {
                command_embed_title: "Usage".to_owned(),
                ..EmbeddedConfig::default()
            },
            ..HelpConfig::default()
        };
        let help = PrefixHelp::from_config(&config).unwrap();
        let output = help.render_command(&CommandInfo::new("ping"), "!");
        assert_eq!(output.as_embed().unwrap().title, "Usage");
    }

    #[cfg(feature = "pagination")]
    #[test]
    fn paginated_style_is_available_with_the_feature() {
        let config = HelpConfig {
            prefix_style: PrefixStyle::Paginated,
            ..HelpConfig::default()
        };
        let help = PrefixHelp::from_config(&config).unwrap();
        assert!(matches!(help, PrefixHelp::Paginated(_)));
    }

    #[cfg(not(feature = "pagination"))]
    #[test]
    fn paginated_style_fails_without_the_feature() {
        let config = HelpConfig {
            prefix_style: PrefixStyle::Paginated,
            ..HelpConfig::default()
        };
        assert!(PrefixHelp::from_config(&config).is_err());
    }
}
