/// Overridable user-facing messages, mainly for localisation.
pub trait HelpHooks: Send + Sync {
    fn command_not_found(&self, name: &str) -> String {
        format!("No command called \"{}\" found.", name)
    }

    fn cog_not_found(&self, name: &str) -> String {
        format!("No cog called \"{}\" found.", name)
    }

    /// Printed above the text overview.
    fn opening_note(&self, help_command_name: &str) -> Option<String> {
        Some(format!(
            "Type `/{0} [command]` for more info on a command.\n\
             You can also type `/{0} [category]` for more info on a category.",
            help_command_name
        ))
    }

    /// Printed below the text overview.
    fn ending_note(&self) -> Option<String> {
        None
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultHooks;

impl HelpHooks for DefaultHooks {}
