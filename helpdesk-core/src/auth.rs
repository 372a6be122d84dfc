use std::fmt;

use serenity::async_trait;

use crate::model::CommandInfo;

/// Host-supplied predicate deciding whether the invoker may see a command.
///
/// `Ok(false)` and `Err(CheckError::Denied)` both hide the command; any
/// `CheckError::Other` aborts the help request.
#[async_trait]
pub trait AuthorizationChecker: Send + Sync {
    async fn can_run(&self, command: &CommandInfo) -> Result<bool, CheckError>;
}

#[derive(Debug)]
pub enum CheckError {
    Denied(String),
    Other(anyhow::Error),
}

impl CheckError {
    /// Classifies an error raised by a host check. Errors carrying
    /// [`PermissionDenied`] are denials, everything else is fatal.
    pub fn from_check(error: anyhow::Error) -> Self {
        match error.downcast::<PermissionDenied>() {
            Ok(denied) => Self::Denied(denied.0),
            Err(other) => Self::Other(other),
        }
    }
}

impl fmt::Display for CheckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Denied(reason) => write!(f, "permission denied: {}", reason),
            Self::Other(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for CheckError {}

/// Error a command check returns to say "this invoker may not run me".
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PermissionDenied(pub String);

impl fmt::Display for PermissionDenied {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "permission denied: {}", self.0)
    }
}

impl std::error::Error for PermissionDenied {}
