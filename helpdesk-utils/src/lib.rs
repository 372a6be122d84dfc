/// Embed builders shared by the help transports.
pub mod embed;
/// Text helpers for signature lines, labels and footers.
pub mod formatting;
/// Page math and the interactive paginator.
pub mod pagination;
/// Guild permission resolution for permission-gated commands.
pub mod permissions;
