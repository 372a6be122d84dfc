/// Marker prefixed to the synthesized "no category" heading.
///
/// It is zero-width, so the heading reads the same while never being equal
/// to a real cog name.
pub const NO_CATEGORY_MARKER: char = '\u{200b}';

/// Which entry point a command can be invoked through.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Surface {
    Prefix,
    Slash,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CogInfo {
    pub qualified_name: String,
    pub description: Option<String>,
}

impl CogInfo {
    pub fn new(qualified_name: impl Into<String>) -> Self {
        Self {
            qualified_name: qualified_name.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CommandKind {
    Command,
    /// A group owns its subcommands in registration order.
    Group(Vec<CommandInfo>),
}

/// Read-only view of one registered command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommandInfo {
    pub name: String,
    pub qualified_name: String,
    /// Qualified name of the owning group, if this is a subcommand.
    pub parent: Option<String>,
    /// Qualified name of the owning cog.
    pub cog: Option<String>,
    pub help: Option<String>,
    pub brief: Option<String>,
    pub description: Option<String>,
    pub signature: String,
    pub hidden: bool,
    pub prefix: bool,
    pub slash: bool,
    pub kind: CommandKind,
}

impl CommandInfo {
    /// A top-level command reachable through both prefix and slash invocations.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            qualified_name: name.clone(),
            name,
            parent: None,
            cog: None,
            help: None,
            brief: None,
            description: None,
            signature: String::new(),
            hidden: false,
            prefix: true,
            slash: true,
            kind: CommandKind::Command,
        }
    }

    /// A group command. Children are re-parented under `name`, recursively.
    pub fn group(name: impl Into<String>, subcommands: Vec<CommandInfo>) -> Self {
        let mut group = Self::new(name);
        group.kind = CommandKind::Group(subcommands);
        let qualified_name = group.qualified_name.clone();
        let cog = group.cog.clone();
        group.adopt_children(&qualified_name, cog.as_deref());
        group
    }

    /// Assigns the command (and every descendant) to a cog.
    pub fn in_cog(mut self, cog: impl Into<String>) -> Self {
        self.set_cog(Some(cog.into()));
        self
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    pub fn with_brief(mut self, brief: impl Into<String>) -> Self {
        self.brief = Some(brief.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_signature(mut self, signature: impl Into<String>) -> Self {
        self.signature = signature.into();
        self
    }

    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    pub fn prefix_only(mut self) -> Self {
        self.prefix = true;
        self.slash = false;
        self
    }

    pub fn slash_only(mut self) -> Self {
        self.prefix = false;
        self.slash = true;
        self
    }

    pub fn is_group(&self) -> bool {
        matches!(self.kind, CommandKind::Group(_))
    }

    pub fn subcommands(&self) -> &[CommandInfo] {
        match &self.kind {
            CommandKind::Command => &[],
            CommandKind::Group(children) => children,
        }
    }

    /// Every descendant, depth first, parents before their children.
    pub fn walk(&self) -> Vec<&CommandInfo> {
        let mut out = Vec::new();
        for child in self.subcommands() {
            out.push(child);
            out.extend(child.walk());
        }
        out
    }

    /// Help text shown on detail pages: the long help, falling back to the brief.
    pub fn help_text(&self) -> Option<&str> {
        self.help
            .as_deref()
            .or(self.brief.as_deref())
            .filter(|text| !text.is_empty())
    }

    pub fn available_on(&self, surface: Surface) -> bool {
        match surface {
            Surface::Prefix => self.prefix,
            Surface::Slash => self.slash,
        }
    }

    fn set_cog(&mut self, cog: Option<String>) {
        if let CommandKind::Group(children) = &mut self.kind {
            for child in children {
                child.set_cog(cog.clone());
            }
        }
        self.cog = cog;
    }

    fn adopt_children(&mut self, parent: &str, cog: Option<&str>) {
        let CommandKind::Group(children) = &mut self.kind else {
            return;
        };

        for child in children {
            child.parent = Some(parent.to_owned());
            child.qualified_name = format!("{} {}", parent, child.name);
            child.cog = cog.map(str::to_owned);
            let qualified_name = child.qualified_name.clone();
            child.adopt_children(&qualified_name, cog);
        }
    }
}

/// Grouping key for the bot overview.
///
/// `Uncategorized` orders before every cog so ungrouped commands lead the
/// overview.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Uncategorized,
    Cog(String),
}

impl Category {
    pub fn of(command: &CommandInfo) -> Self {
        match &command.cog {
            Some(cog) => Self::Cog(cog.clone()),
            None => Self::Uncategorized,
        }
    }

    /// Plain label, suitable for embed field names.
    pub fn label<'a>(&'a self, no_category: &'a str) -> &'a str {
        match self {
            Self::Cog(name) => name,
            Self::Uncategorized => no_category,
        }
    }

    /// Text heading; the uncategorized heading carries [`NO_CATEGORY_MARKER`].
    pub fn heading(&self, no_category: &str) -> String {
        match self {
            Self::Cog(name) => name.clone(),
            Self::Uncategorized => format!("{}{}", NO_CATEGORY_MARKER, no_category),
        }
    }
}
