//! CyberArk Conjur backend.

use reqwest::blocking::Client;
use reqwest::header::{ACCEPT_ENCODING, AUTHORIZATION, CONTENT_TYPE};
use reqwest::StatusCode;
use tracing::debug;
use url::form_urlencoded;
use zeroize::Zeroizing;

use super::{AccessToken, TargetStore};
use crate::error::{SecretWriteError, TargetAuthError};

/// Blocking client for the Conjur REST API.
#[derive(Debug)]
pub struct Conjur {
    client: Client,
    base_url: String,
    account: String,
}

impl Conjur {
    /// Create a client for `account` on the Conjur instance at `url`.
    ///
    /// # Errors
    ///
    /// Returns `TargetAuthError::Transport` if the HTTP client cannot be built.
    pub fn new(url: &str, account: &str) -> Result<Self, TargetAuthError> {
        let client = Client::builder()
            .user_agent(concat!("vault2conjur/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| TargetAuthError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            base_url: url.trim_end_matches('/').to_string(),
            account: account.to_string(),
        })
    }

    fn authn_url(&self, identity: &str) -> String {
        format!(
            "{}/authn/{}/{}/authenticate",
            self.base_url,
            encode(&self.account),
            encode(identity)
        )
    }

    fn variable_url(&self, path: &str) -> String {
        format!(
            "{}/secrets/{}/variable/{}",
            self.base_url,
            encode(&self.account),
            encode(path)
        )
    }
}

/// Form-urlencode a single path segment (spaces become `+`, `/` is escaped).
fn encode(segment: &str) -> String {
    form_urlencoded::byte_serialize(segment.as_bytes()).collect()
}

fn authorization(token: &str) -> String {
    format!("Token token=\"{}\"", token)
}

impl TargetStore for Conjur {
    fn authenticate(
        &self,
        identity: &str,
        credential: &str,
    ) -> Result<AccessToken, TargetAuthError> {
        debug!(identity = %identity, "authenticating to conjur");

        let resp = self
            .client
            .post(self.authn_url(identity))
            .header(ACCEPT_ENCODING, "base64")
            .body(credential.to_string())
            .send()
            .map_err(|e| TargetAuthError::Transport(e.to_string()))?;

        if resp.status() != StatusCode::OK {
            return Err(TargetAuthError::Rejected {
                status: resp.status().as_u16(),
            });
        }

        let token = resp
            .text()
            .map_err(|e| TargetAuthError::Transport(e.to_string()))?;
        Ok(Zeroizing::new(token))
    }

    fn write_secret(
        &self,
        token: &AccessToken,
        path: &str,
        value: &str,
    ) -> Result<(), SecretWriteError> {
        let header = Zeroizing::new(authorization(token));
        let resp = self
            .client
            .post(self.variable_url(path))
            .header(AUTHORIZATION, header.as_str())
            .header(CONTENT_TYPE, "text/plain")
            .body(value.to_string())
            .send()
            .map_err(|e| SecretWriteError::Transport {
                path: path.to_string(),
                reason: e.to_string(),
            })?;

        match resp.status() {
            StatusCode::CREATED => {
                debug!(path = %path, "secret set");
                Ok(())
            }
            s => Err(SecretWriteError::Rejected {
                path: path.to_string(),
                status: s.as_u16(),
            }),
        }
    }
}
