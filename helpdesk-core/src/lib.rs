/// Authorization seam consulted while filtering commands.
pub mod auth;
/// Help settings and their defaults.
pub mod config;
/// Typed errors callers need to branch on.
pub mod error;
/// Request-scoped views of commands and cogs.
pub mod model;
/// Read-only registry seam and the snapshot implementation.
pub mod registry;
/// Output types and the delivery seam.
pub mod transport;

pub use auth::{AuthorizationChecker, CheckError, PermissionDenied};
pub use config::{
    EmbeddedConfig, HelpConfig, MinimalSlashConfig, PaginatedConfig, PrefixStyle, VerifyChecks,
};
pub use error::MissingDependencyError;
pub use model::{Category, CogInfo, CommandInfo, CommandKind, Surface};
pub use registry::{BotMapping, Registry, RegistrySnapshot};
pub use transport::{Destination, EmbedField, HelpEmbed, HelpOutput, PagedEmbed, Transport};

pub type Error = anyhow::Error;

#[derive(Clone, Debug, Default)]
pub struct Data {
    pub help: HelpConfig,
    pub description: Option<String>,
}

pub type Context<'a> = poise::Context<'a, Data, Error>;
