use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use serenity::async_trait;

use helpdesk_core::{
    AuthorizationChecker, CheckError, CommandInfo, Destination, Error, HelpOutput, Transport,
};

#[derive(Clone, Copy, Debug)]
enum Outcome {
    Allow,
    Refuse,
    Deny,
    Fail,
}

/// Checker answering from a per-command table and counting its calls.
#[derive(Debug)]
pub struct FakeChecker {
    fallback: Outcome,
    outcomes: HashMap<String, Outcome>,
    calls: AtomicUsize,
}

impl FakeChecker {
    fn with_fallback(fallback: Outcome) -> Self {
        Self {
            fallback,
            outcomes: HashMap::new(),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn allow_all() -> Self {
        Self::with_fallback(Outcome::Allow)
    }

    pub fn deny_all() -> Self {
        Self::with_fallback(Outcome::Deny)
    }

    /// The check returns `Ok(false)`.
    pub fn refuse(mut self, qualified_name: &str) -> Self {
        self.outcomes.insert(qualified_name.to_owned(), Outcome::Refuse);
        self
    }

    /// The check raises a permission error.
    pub fn deny(mut self, qualified_name: &str) -> Self {
        self.outcomes.insert(qualified_name.to_owned(), Outcome::Deny);
        self
    }

    /// The check raises an unrelated error.
    pub fn fail(mut self, qualified_name: &str) -> Self {
        self.outcomes.insert(qualified_name.to_owned(), Outcome::Fail);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AuthorizationChecker for FakeChecker {
    async fn can_run(&self, command: &CommandInfo) -> Result<bool, CheckError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let outcome = self
            .outcomes
            .get(&command.qualified_name)
            .copied()
            .unwrap_or(self.fallback);

        match outcome {
            Outcome::Allow => Ok(true),
            Outcome::Refuse => Ok(false),
            Outcome::Deny => Err(CheckError::Denied(format!(
                "{} is restricted",
                command.qualified_name
            ))),
            Outcome::Fail => Err(CheckError::Other(anyhow::anyhow!(
                "check for {} blew up",
                command.qualified_name
            ))),
        }
    }
}

/// Transport that records what would have been sent.
#[derive(Debug, Default)]
pub struct RecordingTransport {
    sent: Mutex<Vec<(HelpOutput, Destination)>>,
    fail: bool,
}

impl RecordingTransport {
    pub fn failing() -> Self {
        Self {
            sent: Mutex::default(),
            fail: true,
        }
    }

    pub fn sent(&self) -> Vec<(HelpOutput, Destination)> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn send(&self, output: HelpOutput, destination: Destination) -> Result<(), Error> {
        if self.fail {
            anyhow::bail!("channel is gone");
        }
        self.sent.lock().unwrap().push((output, destination));
        Ok(())
    }
}
