use helpdesk_core::{Category, CommandInfo};

/// One category of the bot overview.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Section<'a> {
    pub category: Category,
    pub commands: Vec<&'a CommandInfo>,
}

/// Split `commands` into contiguous runs sharing the same key.
///
/// The input must already be sorted by `key`; equal keys that are not
/// adjacent end up in separate runs. Nameless commands are dropped, each run
/// is re-sorted by name when `sort_commands` is set, and runs left empty are
/// not emitted.
pub fn group_runs<'a, K, F>(
    commands: &[&'a CommandInfo],
    key: F,
    sort_commands: bool,
) -> Vec<(K, Vec<&'a CommandInfo>)>
where
    K: PartialEq,
    F: Fn(&CommandInfo) -> K,
{
    let mut runs: Vec<(K, Vec<&'a CommandInfo>)> = Vec::new();

    for &command in commands {
        let command_key = key(command);
        if let Some((last_key, members)) = runs.last_mut()
            && *last_key == command_key
        {
            members.push(command);
            continue;
        }
        runs.push((command_key, vec![command]));
    }

    runs.into_iter()
        .filter_map(|(run_key, mut members)| {
            members.retain(|command| !command.name.is_empty());
            if sort_commands {
                members.sort_by(|left, right| left.name.cmp(&right.name));
            }
            (!members.is_empty()).then_some((run_key, members))
        })
        .collect()
}

/// Group an already category-sorted list into overview sections.
pub fn group_by_category<'a>(commands: &[&'a CommandInfo], sort_commands: bool) -> Vec<Section<'a>> {
    group_runs(commands, Category::of, sort_commands)
        .into_iter()
        .map(|(category, commands)| Section { category, commands })
        .collect()
}
