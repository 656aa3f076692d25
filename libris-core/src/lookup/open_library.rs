//! HTTP client for Open Library compatible services

use super::{AuthorRecord, BibliographicSource, EditionRecord};
use crate::error::{LibrisError, RemoteFailure, Result};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Public Open Library endpoint
pub const DEFAULT_BASE_URL: &str = "https://openlibrary.org";

/// Per-request timeout; there is no retry after it elapses
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Talks to `GET {base}/isbn/{isbn}.json` and `GET {base}{author_key}.json`
#[derive(Debug, Clone)]
pub struct OpenLibraryClient {
    client: reqwest::Client,
    base_url: String,
}

impl OpenLibraryClient {
    /// Create a client for the service at `base_url` with the default timeout
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Self::with_timeout(base_url, REQUEST_TIMEOUT)
    }

    /// Create a client with a custom per-request timeout
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("libris/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| RemoteFailure::Transport(e.to_string()))?;

        // Ensure base_url doesn't have trailing slash
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Ok(Self { client, base_url })
    }

    /// Base URL requests are made against
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Edition URL for an ISBN, encoded as a single path segment
    pub fn edition_url(&self, isbn: &str) -> String {
        format!("{}/isbn/{}.json", self.base_url, urlencoding::encode(isbn))
    }

    async fn get(&self, url: &str) -> std::result::Result<reqwest::Response, RemoteFailure> {
        tracing::debug!("GET {}", url);
        self.client.get(url).send().await.map_err(classify)
    }

    async fn parse<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let body = response.bytes().await.map_err(classify)?;
        serde_json::from_slice(&body).map_err(|e| LibrisError::MalformedResponse(e.to_string()))
    }
}

/// Map a transport error to the failure kinds callers distinguish
fn classify(e: reqwest::Error) -> RemoteFailure {
    if e.is_timeout() {
        RemoteFailure::Timeout
    } else if e.is_connect() {
        RemoteFailure::Connect
    } else {
        RemoteFailure::Transport(e.to_string())
    }
}

#[async_trait]
impl BibliographicSource for OpenLibraryClient {
    async fn fetch_edition(&self, isbn: &str) -> Result<EditionRecord> {
        let url = self.edition_url(isbn);
        let response = self.get(&url).await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(LibrisError::NotFound {
                isbn: isbn.to_string(),
            });
        }
        if !status.is_success() {
            tracing::warn!("Book lookup for {} failed with status {}", isbn, status);
            return Err(RemoteFailure::Status(status.as_u16()).into());
        }

        Self::parse(response).await
    }

    async fn fetch_author(&self, key: &str) -> Result<AuthorRecord> {
        let separator = if key.starts_with('/') { "" } else { "/" };
        let url = format!("{}{}{}.json", self.base_url, separator, key);
        let response = self.get(&url).await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RemoteFailure::Status(status.as_u16()).into());
        }

        Self::parse(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = OpenLibraryClient::new("http://localhost:8080/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080");
    }

    #[test]
    fn test_edition_url_encodes_isbn() {
        let client = OpenLibraryClient::new("http://localhost:8080").unwrap();

        assert_eq!(
            client.edition_url("9780743273565"),
            "http://localhost:8080/isbn/9780743273565.json"
        );
        assert_eq!(
            client.edition_url("../authors/OL1A"),
            "http://localhost:8080/isbn/..%2Fauthors%2FOL1A.json"
        );
        assert_eq!(
            client.edition_url("12?x=1#top"),
            "http://localhost:8080/isbn/12%3Fx%3D1%23top.json"
        );
    }

    #[test]
    fn test_default_base_url() {
        let client = OpenLibraryClient::new(DEFAULT_BASE_URL).unwrap();
        assert_eq!(client.base_url(), "https://openlibrary.org");
    }
}
