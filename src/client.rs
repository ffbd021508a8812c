//! HTTP access to the notebook server.
//!
//! The server wraps every payload in a `{"result": ...}` envelope. Both
//! endpoints take a JSON body via `POST`:
//!
//! - `/api/disk` lists a directory (`{}` for the default root,
//!   `{"path": ...}` otherwise).
//! - `/api/sessions` creates a session for a path and answers with its id.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

use crate::core::entry::DirectoryListing;
use crate::core::remote::{BoxFuture, DirectoryLister, SessionService};
use crate::core::session::SessionId;
use crate::error::BoxError;

const DISK_ENDPOINT: &str = "api/disk";
const SESSIONS_ENDPOINT: &str = "api/sessions";

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("invalid server URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("server error ({status}): {body}")]
    Status { status: StatusCode, body: String },

    #[error("unexpected response: {0}")]
    Decode(#[from] serde_json::Error),
}

// ───────────────────────────────────────── wire types ────────

#[derive(Debug, Serialize)]
struct PathRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
struct Envelope<T> {
    result: T,
}

#[derive(Debug, Deserialize)]
struct CreatedSession {
    id: SessionId,
}

// ───────────────────────────────────────── backend ───────────

/// Directory lister and session service for one notebook server.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: Client,
    base_url: Url,
}

impl HttpBackend {
    pub fn new(base_url: &Url, timeout: Duration) -> Result<Self, ClientError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: normalise_base(base_url),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Absolute URL for a route on the server (e.g. a session destination).
    pub fn url_for(&self, route: &str) -> Result<Url, ClientError> {
        Ok(self.base_url.join(route.trim_start_matches('/'))?)
    }

    pub async fn list_directory(&self, path: Option<&str>) -> Result<DirectoryListing, ClientError> {
        self.post(DISK_ENDPOINT, &PathRequest { path }).await
    }

    pub async fn open_session(&self, path: &str) -> Result<SessionId, ClientError> {
        let created: CreatedSession = self.post(SESSIONS_ENDPOINT, &PathRequest { path: Some(path) }).await?;
        Ok(created.id)
    }

    async fn post<B, T>(&self, endpoint: &str, body: &B) -> Result<T, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.base_url.join(endpoint)?;
        tracing::debug!(%url, "POST");

        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await?;

        let status = response.status();
        let bytes = response.bytes().await?;
        if !status.is_success() {
            let body = String::from_utf8_lossy(&bytes).into_owned();
            tracing::warn!(%status, endpoint, "server rejected request");
            return Err(ClientError::Status { status, body });
        }

        decode_envelope(&bytes)
    }
}

/// Ensure the base URL ends in `/` so `join` appends rather than replaces.
fn normalise_base(url: &Url) -> Url {
    let mut url = url.clone();
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}

fn decode_envelope<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, ClientError> {
    let envelope: Envelope<T> = serde_json::from_slice(bytes)?;
    Ok(envelope.result)
}

impl DirectoryLister for HttpBackend {
    fn list<'a>(&'a self, path: Option<&'a str>) -> BoxFuture<'a, Result<DirectoryListing, BoxError>> {
        Box::pin(async move { self.list_directory(path).await.map_err(BoxError::from) })
    }
}

impl SessionService for HttpBackend {
    fn create_session<'a>(&'a self, path: &'a str) -> BoxFuture<'a, Result<SessionId, BoxError>> {
        Box::pin(async move { self.open_session(path).await.map_err(BoxError::from) })
    }
}
