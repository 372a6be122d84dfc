use helpdesk_core::{CogInfo, CommandInfo, Destination, HelpOutput, Surface, VerifyChecks};

use super::grouping::Section;

/// Filtering knobs a formatter hands to the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FilterPolicy {
    pub verify_checks: VerifyChecks,
    pub show_hidden: bool,
    pub sort_commands: bool,
}

/// Everything the overview renderers get: already filtered and grouped.
#[derive(Clone, Debug)]
pub struct Overview<'a> {
    pub sections: Vec<Section<'a>>,
    pub prefix: &'a str,
    pub description: Option<&'a str>,
    pub opening_note: Option<String>,
    pub ending_note: Option<String>,
}

impl Overview<'_> {
    pub fn total_commands(&self) -> usize {
        self.sections.iter().map(|s| s.commands.len()).sum()
    }
}

/// Turns resolved help targets into output. Implementations are pure: they
/// never look anything up and never filter.
pub trait HelpFormatter: Send + Sync {
    /// Which commands the overview lists.
    fn surface(&self) -> Surface;

    fn policy(&self) -> FilterPolicy;

    fn destination(&self) -> Destination;

    /// Name used in notes that tell users how to call help again.
    fn help_command_name(&self) -> &str {
        "help"
    }

    fn render_overview(&self, overview: &Overview<'_>) -> HelpOutput;

    fn render_cog(&self, cog: &CogInfo, commands: &[&CommandInfo], prefix: &str) -> HelpOutput;

    /// Renders a plain command or a group; implementations match on `command.kind`.
    fn render_command(&self, command: &CommandInfo, prefix: &str) -> HelpOutput;
}
