use helpdesk_core::CommandInfo;

/// Shown wherever a command has no help text.
pub const NO_DESCRIPTION: &str = "No description provided.";

/// Separator between command names in the text overview (EN SPACE).
pub const NAME_SEPARATOR: &str = "\u{2002}";

/// Invocation line, e.g. `!math add <a> <b>`.
pub fn signature_line(prefix: &str, command: &CommandInfo) -> String {
    format!("{}{} {}", prefix, command.qualified_name, command.signature)
        .trim_end()
        .to_owned()
}

/// Help text wrapped in inline code, falling back to [`NO_DESCRIPTION`].
pub fn help_value(command: &CommandInfo) -> String {
    format!("`{}`", command.help_text().unwrap_or(NO_DESCRIPTION))
}

/// Overview label: `` `name` `` for commands, `` `name[group]` `` for groups.
pub fn command_label(command: &CommandInfo) -> String {
    if command.is_group() {
        format!("`{}[group]`", command.name)
    } else {
        format!("`{}`", command.name)
    }
}

pub fn commands_footer(total: usize) -> String {
    format!("{} Commands", total)
}

pub fn subcommands_footer(count: usize) -> String {
    format!("{} subcommands", count)
}

pub fn cog_commands_footer(count: usize) -> String {
    format!("{} commands", count)
}

/// Normalize an autocomplete query for case-insensitive prefix matching.
pub fn clean_query(query: &str) -> String {
    query.replace('/', "").trim().to_lowercase()
}

/// Appends `block` followed by a blank line, skipping empty blocks.
pub fn push_block(out: &mut String, block: &str) {
    if block.is_empty() {
        return;
    }
    out.push_str(block);
    out.push_str("\n\n");
}
