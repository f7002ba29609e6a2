//! Secret initialization.
//!
//! Authenticates once against the target store, then replays a flattened map
//! as individual writes. One failed write never stops the others.

use tracing::{debug, info, warn};

use crate::core::target::TargetStore;
use crate::core::types::FlattenedSecretMap;
use crate::error::SecretWriteError;

/// Outcome of one initialization run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InitReport {
    /// Whether the target accepted the credential.
    pub authenticated: bool,
    /// Variables written successfully.
    pub succeeded: usize,
    /// Variables the target refused or could not be reached for.
    pub failed: usize,
    /// Per-variable failures, in write order.
    pub errors: Vec<SecretWriteError>,
}

impl InitReport {
    /// Report for a run that never got past authentication.
    pub fn unauthenticated() -> Self {
        Self::default()
    }

    /// Whether every variable was written.
    pub fn is_complete(&self) -> bool {
        self.authenticated && self.failed == 0
    }

    /// The `(authenticated, succeeded, failed)` triple.
    pub fn tally(&self) -> (bool, usize, usize) {
        (self.authenticated, self.succeeded, self.failed)
    }

    fn record(mut self, outcome: Result<(), SecretWriteError>) -> Self {
        match outcome {
            Ok(()) => self.succeeded += 1,
            Err(e) => {
                debug!(path = %e.path(), code = ?e.error_code(), "{}", e);
                self.failed += 1;
                self.errors.push(e);
            }
        }
        self
    }
}

/// Writes flattened secrets into a target store.
#[derive(Debug, Clone)]
pub struct SecretInitializer {
    identity: String,
}

impl SecretInitializer {
    /// Create an initializer that logs in as `identity`
    /// (e.g. `host/it/app/apikey`).
    pub fn new(identity: impl Into<String>) -> Self {
        Self {
            identity: identity.into(),
        }
    }

    pub fn identity(&self) -> &str {
        &self.identity
    }

    /// Authenticate with `credential` and write every entry of `secrets`.
    ///
    /// Writes happen one at a time in map order, at most once each, with no
    /// retry. An authentication failure returns an unauthenticated report
    /// without attempting any write.
    pub fn initialize<T: TargetStore + ?Sized>(
        &self,
        secrets: &FlattenedSecretMap,
        target: &T,
        credential: &str,
    ) -> InitReport {
        let token = match target.authenticate(&self.identity, credential) {
            Ok(token) => token,
            Err(e) => {
                warn!(identity = %self.identity, "{}", e);
                return InitReport::unauthenticated();
            }
        };
        info!(count = secrets.len(), "authenticated, setting secrets");

        let start = InitReport {
            authenticated: true,
            ..InitReport::default()
        };
        let report = secrets.iter().fold(start, |report, (path, value)| {
            report.record(target.write_secret(&token, path, value))
        });

        info!(
            succeeded = report.succeeded,
            failed = report.failed,
            "initialization finished"
        );
        report
    }
}
