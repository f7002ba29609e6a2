//! Target store access.
//!
//! The initializer authenticates once and then writes variables one by one,
//! so a target backend only has to provide those two calls.

use zeroize::Zeroizing;

use crate::error::{SecretWriteError, TargetAuthError};

mod conjur;

pub use conjur::Conjur;

/// Short-lived access token issued by the target store.
pub type AccessToken = Zeroizing<String>;

/// Write access to the store secrets are migrated into.
pub trait TargetStore {
    /// Exchange a long-lived credential for an access token.
    ///
    /// # Errors
    ///
    /// Returns `TargetAuthError` if the store rejects the credential or
    /// cannot be reached.
    fn authenticate(&self, identity: &str, credential: &str)
        -> Result<AccessToken, TargetAuthError>;

    /// Set the value of one variable.
    ///
    /// # Errors
    ///
    /// Returns `SecretWriteError` carrying the store's error code.
    fn write_secret(
        &self,
        token: &AccessToken,
        path: &str,
        value: &str,
    ) -> Result<(), SecretWriteError>;
}
