pub mod help;
pub mod math;
pub mod utility;

use helpdesk_core::{Data, Error, HelpConfig};

/// Every command the bot registers, with the help command named and
/// described per `config`.
pub fn commands(config: &HelpConfig) -> Vec<poise::Command<Data, Error>> {
    let mut commands = vec![utility::ping::ping(), math::math()];

    let has_cogs = commands.iter().any(|command| command.category.is_some());
    let mut help = help::framework::merge_surfaces(
        utility::help::help_prefix(),
        utility::help::help_slash(),
    );
    help::framework::configure_slash_help(&mut help, &config.slash, has_cogs);
    commands.push(help);

    commands
}

#[cfg(test)]
mod tests {
    use helpdesk_core::{HelpConfig, MinimalSlashConfig};

    use super::commands;

    #[test]
    fn help_command_is_registered_under_configured_name() {
        let config = HelpConfig {
            slash: MinimalSlashConfig {
                help_command_name: "commands".to_owned(),
                ..MinimalSlashConfig::default()
            },
            ..HelpConfig::default()
        };

        let names: Vec<_> = commands(&config).into_iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["ping", "math", "commands"]);
    }

    #[test]
    fn help_command_has_both_entry_points() {
        let commands = commands(&HelpConfig::default());
        let help = commands.iter().find(|c| c.name == "help").unwrap();

        assert!(help.prefix_action.is_some());
        assert!(help.slash_action.is_some());
        let params: Vec<_> = help.parameters.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(params, vec!["command", "cog"]);
    }
}
