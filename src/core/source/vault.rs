//! HashiCorp Vault KV v2 backend.

use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;
use url::Url;
use zeroize::Zeroizing;

use super::{SecretData, SourceStore};
use crate::error::SourceStoreError;

const TOKEN_HEADER: &str = "X-Vault-Token";
const NAMESPACE_HEADER: &str = "X-Vault-Namespace";

/// Blocking client for a KV v2 secrets engine.
pub struct Vault {
    client: Client,
    base_url: Url,
    namespace: Option<String>,
    mount: String,
    token: Option<Zeroizing<String>>,
}

#[derive(Deserialize)]
struct ListResponse {
    data: ListData,
}

#[derive(Deserialize)]
struct ListData {
    #[serde(default)]
    keys: Vec<String>,
}

#[derive(Deserialize)]
struct ReadResponse {
    data: ReadData,
}

#[derive(Deserialize)]
struct ReadData {
    // null when the latest version is deleted or destroyed
    data: Option<SecretData>,
}

impl Vault {
    /// Create a client for the KV v2 engine mounted at `mount`.
    ///
    /// # Arguments
    ///
    /// * `url` - Vault address, e.g. `https://vault.example.com:8200`
    /// * `namespace` - Enterprise namespace, sent with every request when set
    /// * `mount` - Mount point of the KV v2 engine
    ///
    /// # Errors
    ///
    /// Returns `SourceStoreError::Http` if `url` does not parse or the HTTP
    /// client cannot be built.
    pub fn new(
        url: &str,
        namespace: Option<&str>,
        mount: &str,
    ) -> Result<Self, SourceStoreError> {
        let base_url = Url::parse(url).map_err(|e| SourceStoreError::Http {
            path: url.to_string(),
            reason: e.to_string(),
        })?;
        let client = Client::builder()
            .user_agent(concat!("vault2conjur/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| SourceStoreError::Http {
                path: url.to_string(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            client,
            base_url,
            namespace: namespace.filter(|n| !n.is_empty()).map(str::to_string),
            mount: mount.trim_matches('/').to_string(),
            token: None,
        })
    }

    /// Build `<base>/v1/<segments...>`, percent-encoding each segment.
    fn endpoint<'s>(
        &self,
        segments: impl IntoIterator<Item = &'s str>,
        path: &str,
    ) -> Result<Url, SourceStoreError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| SourceStoreError::Http {
                path: path.to_string(),
                reason: format!("{} cannot be a base URL", self.base_url),
            })?
            .pop_if_empty()
            .push("v1")
            .extend(segments);
        Ok(url)
    }

    /// Endpoint for `path` under the KV v2 `section` (`data` or `metadata`).
    fn kv_endpoint(&self, section: &str, path: &str) -> Result<Url, SourceStoreError> {
        let segments = self
            .mount
            .split('/')
            .chain([section])
            .chain(relative(path).split('/'));
        self.endpoint(segments, path)
    }

    fn get(&self, url: Url) -> RequestBuilder {
        let mut req = self.client.get(url);
        if let Some(token) = &self.token {
            req = req.header(TOKEN_HEADER, token.as_str());
        }
        if let Some(ns) = &self.namespace {
            req = req.header(NAMESPACE_HEADER, ns);
        }
        req
    }

    fn send(&self, req: RequestBuilder, path: &str) -> Result<Response, SourceStoreError> {
        req.send().map_err(|e| SourceStoreError::Http {
            path: path.to_string(),
            reason: e.to_string(),
        })
    }

    fn decode<T: DeserializeOwned>(resp: Response, path: &str) -> Result<T, SourceStoreError> {
        resp.json().map_err(|e| SourceStoreError::Decode {
            path: path.to_string(),
            reason: e.to_string(),
        })
    }
}

fn relative(path: &str) -> &str {
    path.trim_start_matches('/')
}

impl SourceStore for Vault {
    fn authenticate(&mut self, token: &str) -> Result<bool, SourceStoreError> {
        self.token = Some(Zeroizing::new(token.to_string()));

        let path = "auth/token/lookup-self";
        let url = self.endpoint(path.split('/'), path)?;
        let resp = self.send(self.get(url), path)?;
        match resp.status() {
            s if s.is_success() => Ok(true),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Ok(false),
            s => Err(SourceStoreError::Status {
                path: path.to_string(),
                status: s.as_u16(),
            }),
        }
    }

    fn list_children(&self, path: &str) -> Result<Vec<String>, SourceStoreError> {
        let mut url = self.kv_endpoint("metadata", path)?;
        url.set_query(Some("list=true"));
        debug!(path = %path, "listing folder");

        let resp = self.send(self.get(url), path)?;
        match resp.status() {
            // Vault answers 404 for a folder with nothing in it
            StatusCode::NOT_FOUND => Ok(Vec::new()),
            s if s.is_success() => {
                let listing: ListResponse = Self::decode(resp, path)?;
                Ok(listing
                    .data
                    .keys
                    .into_iter()
                    .map(|key| format!("{}{}", path, key))
                    .collect())
            }
            s => Err(SourceStoreError::Status {
                path: path.to_string(),
                status: s.as_u16(),
            }),
        }
    }

    fn read_secret_values(&self, path: &str) -> Result<Option<SecretData>, SourceStoreError> {
        let url = self.kv_endpoint("data", path)?;
        debug!(path = %path, "reading secret");

        let resp = self.send(self.get(url), path)?;
        match resp.status() {
            StatusCode::NOT_FOUND => Ok(None),
            s if s.is_success() => {
                let secret: ReadResponse = Self::decode(resp, path)?;
                Ok(secret.data.data)
            }
            s => Err(SourceStoreError::Status {
                path: path.to_string(),
                status: s.as_u16(),
            }),
        }
    }
}
