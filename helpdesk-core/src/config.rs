use std::path::Path;

use anyhow::Context as _;
use serde::{Deserialize, Serialize};
use tracing::info;

pub const DEFAULT_COLOR: u32 = 0xFF_FF_FF;
pub const DEFAULT_NO_CATEGORY: &str = "No category";
pub const DEFAULT_PER_PAGE: usize = 20;

/// Whether command checks run before a command is listed.
///
/// Serialized as `true`, `false` or `null` (skip checks in DMs).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(from = "Option<bool>", into = "Option<bool>")]
pub enum VerifyChecks {
    #[default]
    Always,
    Never,
    SkipInDms,
}

impl From<Option<bool>> for VerifyChecks {
    fn from(value: Option<bool>) -> Self {
        match value {
            Some(true) => Self::Always,
            Some(false) => Self::Never,
            None => Self::SkipInDms,
        }
    }
}

impl From<VerifyChecks> for Option<bool> {
    fn from(value: VerifyChecks) -> Self {
        match value {
            VerifyChecks::Always => Some(true),
            VerifyChecks::Never => Some(false),
            VerifyChecks::SkipInDms => None,
        }
    }
}

/// Formatter behind the prefix `help` command.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PrefixStyle {
    #[default]
    Embedded,
    Paginated,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct EmbeddedConfig {
    pub dm_help: bool,
    pub default_color: u32,
    pub main_embed_title: String,
    pub main_embed_description: Option<String>,
    pub main_embed_color: Option<u32>,
    pub command_embed_title: String,
    pub command_embed_description: Option<String>,
    pub command_embed_color: Option<u32>,
    pub group_embed_title: String,
    pub group_embed_description: Option<String>,
    pub group_embed_color: Option<u32>,
    pub cog_embed_title: String,
    pub cog_embed_description: Option<String>,
    pub cog_embed_color: Option<u32>,
    pub no_category: String,
    pub sort_commands: bool,
    pub verify_checks: VerifyChecks,
    pub show_hidden: bool,
}

impl Default for EmbeddedConfig {
    fn default() -> Self {
        Self {
            dm_help: false,
            default_color: DEFAULT_COLOR,
            main_embed_title: "Overview about Cogs, Groups and Commands".to_owned(),
            main_embed_description: None,
            main_embed_color: None,
            command_embed_title: "Command help".to_owned(),
            command_embed_description: Some(
                "If a parameter is surrounded by `<>`, it is a required parameter.\n\
                 If a parameter is surrounded by `[]`, it is an optional parameter."
                    .to_owned(),
            ),
            command_embed_color: None,
            group_embed_title: "Group help".to_owned(),
            group_embed_description: None,
            group_embed_color: None,
            cog_embed_title: "Cog help".to_owned(),
            cog_embed_description: None,
            cog_embed_color: None,
            no_category: DEFAULT_NO_CATEGORY.to_owned(),
            sort_commands: true,
            verify_checks: VerifyChecks::Always,
            show_hidden: false,
        }
    }
}

impl EmbeddedConfig {
    pub fn main_color(&self) -> u32 {
        self.main_embed_color.unwrap_or(self.default_color)
    }

    pub fn command_color(&self) -> u32 {
        self.command_embed_color.unwrap_or(self.default_color)
    }

    pub fn group_color(&self) -> u32 {
        self.group_embed_color.unwrap_or(self.default_color)
    }

    pub fn cog_color(&self) -> u32 {
        self.cog_embed_color.unwrap_or(self.default_color)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct MinimalSlashConfig {
    pub dm_only: bool,
    pub sort_commands: bool,
    pub commands_heading: String,
    pub no_category: String,
    pub verify_checks: VerifyChecks,
    pub show_hidden: bool,
    pub help_command_name: String,
    pub help_command_description: String,
}

impl Default for MinimalSlashConfig {
    fn default() -> Self {
        Self {
            dm_only: false,
            sort_commands: true,
            commands_heading: "Commands:".to_owned(),
            no_category: DEFAULT_NO_CATEGORY.to_owned(),
            verify_checks: VerifyChecks::Always,
            show_hidden: false,
            help_command_name: "help".to_owned(),
            help_command_description: "Shows help for a commands.".to_owned(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct PaginatedConfig {
    pub per_page: usize,
    pub overview_title: String,
    /// Settings for colors, destination, filtering and the detail pages.
    pub embedded: EmbeddedConfig,
}

impl Default for PaginatedConfig {
    fn default() -> Self {
        Self {
            per_page: DEFAULT_PER_PAGE,
            overview_title: "Available Commands".to_owned(),
            embedded: EmbeddedConfig::default(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct HelpConfig {
    pub prefix_style: PrefixStyle,
    pub embedded: EmbeddedConfig,
    pub paginated: PaginatedConfig,
    pub slash: MinimalSlashConfig,
}

impl HelpConfig {
    pub fn from_json_str(raw: &str) -> anyhow::Result<Self> {
        let config: Self = serde_json::from_str(raw).context("invalid help config")?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read help config `{}`", path.display()))?;
        let config = Self::from_json_str(&raw)?;
        info!(path = %path.display(), style = ?config.prefix_style, "Help config loaded.");
        Ok(config)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.paginated.per_page == 0 {
            anyhow::bail!("paginated.per_page must be at least 1");
        }

        let name = &self.slash.help_command_name;
        if name.is_empty() || name.len() > 32 {
            anyhow::bail!("slash.help_command_name must be 1-32 characters long");
        }
        if name.chars().any(|ch| ch.is_uppercase() || ch.is_whitespace()) {
            anyhow::bail!("slash.help_command_name must be lowercase without spaces: `{name}`");
        }
        if self.slash.help_command_description.is_empty() {
            anyhow::bail!("slash.help_command_description must not be empty");
        }

        Ok(())
    }
}
