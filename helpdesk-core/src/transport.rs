use serenity::async_trait;

use crate::Error;

/// Where a rendered help message goes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Destination {
    /// The channel or interaction the help was invoked from.
    Origin,
    /// Only the invoker sees it.
    Private,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

/// Transport-neutral embed; converted to a serenity builder at the edge.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HelpEmbed {
    pub title: String,
    pub description: Option<String>,
    pub color: u32,
    pub fields: Vec<EmbedField>,
    pub footer: Option<String>,
}

impl HelpEmbed {
    pub fn new(title: impl Into<String>, description: Option<String>, color: u32) -> Self {
        Self {
            title: title.into(),
            description,
            color,
            fields: Vec::new(),
            footer: None,
        }
    }

    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push(EmbedField {
            name: name.into(),
            value: value.into(),
            inline: false,
        });
        self
    }

    pub fn footer(mut self, text: impl Into<String>) -> Self {
        self.footer = Some(text.into());
        self
    }
}

/// Page descriptions browsed interactively under one title.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PagedEmbed {
    pub title: String,
    pub color: u32,
    pub pages: Vec<String>,
    pub start_page: usize,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HelpOutput {
    Text(String),
    Embed(HelpEmbed),
    Pages(PagedEmbed),
}

impl HelpOutput {
    /// Text content of the output, if it is a plain message.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_embed(&self) -> Option<&HelpEmbed> {
        match self {
            Self::Embed(embed) => Some(embed),
            _ => None,
        }
    }
}

/// Delivers rendered help through the host.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, output: HelpOutput, destination: Destination) -> Result<(), Error>;
}
