use tracing::debug;

use helpdesk_core::{AuthorizationChecker, CheckError, CommandInfo, Error, VerifyChecks};

/// Narrows command lists down to what the invoker is allowed to see.
pub struct CommandFilter<'a, A: ?Sized> {
    checker: &'a A,
    verify_checks: VerifyChecks,
    show_hidden: bool,
    in_guild: bool,
}

impl<'a, A> CommandFilter<'a, A>
where
    A: AuthorizationChecker + ?Sized,
{
    pub fn new(checker: &'a A, verify_checks: VerifyChecks, in_guild: bool) -> Self {
        Self {
            checker,
            verify_checks,
            show_hidden: false,
            in_guild,
        }
    }

    pub fn show_hidden(mut self, show_hidden: bool) -> Self {
        self.show_hidden = show_hidden;
        self
    }

    fn skips_checks(&self) -> bool {
        match self.verify_checks {
            VerifyChecks::Always => false,
            VerifyChecks::Never => true,
            VerifyChecks::SkipInDms => !self.in_guild,
        }
    }

    /// Visible commands in input order.
    pub async fn filter<'c, I>(&self, commands: I) -> Result<Vec<&'c CommandInfo>, Error>
    where
        I: IntoIterator<Item = &'c CommandInfo>,
    {
        let candidates: Vec<&CommandInfo> = commands
            .into_iter()
            .filter(|command| self.show_hidden || !command.hidden)
            .collect();

        if self.skips_checks() {
            return Ok(candidates);
        }

        let mut visible = Vec::with_capacity(candidates.len());
        for command in candidates {
            match self.checker.can_run(command).await {
                Ok(true) => visible.push(command),
                Ok(false) => {}
                Err(CheckError::Denied(reason)) => {
                    debug!(command = %command.qualified_name, %reason, "hiding command from help");
                }
                Err(CheckError::Other(err)) => return Err(err),
            }
        }

        Ok(visible)
    }

    /// Visible commands, stably sorted by `key`.
    pub async fn filter_sorted_by<'c, I, F, K>(
        &self,
        commands: I,
        key: F,
    ) -> Result<Vec<&'c CommandInfo>, Error>
    where
        I: IntoIterator<Item = &'c CommandInfo>,
        F: Fn(&CommandInfo) -> K,
        K: Ord,
    {
        let mut visible = self.filter(commands).await?;
        visible.sort_by_cached_key(|command| key(*command));
        Ok(visible)
    }
}
