//! HTTP plumbing shared by every endpoint: base URL, bearer token, JSON envelope.

use reqwest::header::ACCEPT;
use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::envelope::{self, Envelope};
use crate::error::ApiError;

/// Client for the brand-mention backend.
///
/// Cheap to build; views create one per request with the current token, the same
/// way they read the token fresh from storage.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            token: None,
        }
    }

    /// Attach (or drop) the bearer token sent with every request.
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token.filter(|t| !t.trim().is_empty());
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    /// Absolute URL for an endpoint path, joined with exactly one `/`.
    pub fn url(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = self.url(path);
        tracing::debug!("{} {}", method, url);
        let request = self
            .http
            .request(method, url)
            .header(ACCEPT, "application/json");
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<Envelope<T>, ApiError> {
        execute(self.request(Method::GET, path).query(query), path).await
    }

    pub(crate) async fn send<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<Envelope<T>, ApiError> {
        execute(self.request(method, path).json(body), path).await
    }

    pub(crate) async fn send_empty<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
    ) -> Result<Envelope<T>, ApiError> {
        execute(self.request(method, path), path).await
    }
}

async fn execute<T: DeserializeOwned>(
    request: RequestBuilder,
    path: &str,
) -> Result<Envelope<T>, ApiError> {
    let response = request.send().await.map_err(|e| {
        tracing::error!("request to {} failed: {}", path, e);
        ApiError::Network(e.to_string())
    })?;
    let status = response.status().as_u16();
    let body = response
        .text()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    tracing::debug!("{} -> {}", path, status);

    envelope::decode(status, &body).inspect_err(|e| {
        tracing::warn!("{} failed: {}", path, e);
    })
}

pub(crate) fn join_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    if path.is_empty() {
        base.to_string()
    } else {
        format!("{base}/{path}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_url_single_slash() {
        assert_eq!(
            join_url("http://localhost:5000/api", "auth/me"),
            "http://localhost:5000/api/auth/me"
        );
        assert_eq!(
            join_url("http://localhost:5000/api/", "/auth/me"),
            "http://localhost:5000/api/auth/me"
        );
        assert_eq!(join_url("/api", "/mentions"), "/api/mentions");
    }

    #[test]
    fn test_blank_token_is_not_sent() {
        let client = ApiClient::new("http://x/api").with_token(Some("  ".to_string()));
        assert!(!client.has_token());

        let client = client.with_token(Some("jwt".to_string()));
        assert!(client.has_token());
        assert_eq!(client.url("/dashboard/overview"), "http://x/api/dashboard/overview");
    }
}
