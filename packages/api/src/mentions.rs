//! `/mentions` endpoints.

use reqwest::Method;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{CollectionResult, MentionPage, MentionQuery};

/// A finished collection run together with the backend's status message.
#[derive(Debug, Clone, PartialEq)]
pub struct Collected {
    pub message: Option<String>,
    pub result: Option<CollectionResult>,
}

impl ApiClient {
    /// `GET /mentions` with the query's non-empty filters.
    pub async fn list_mentions(&self, query: &MentionQuery) -> Result<MentionPage, ApiError> {
        let envelope = self.get::<MentionPage>("/mentions", &query.to_params()).await?;
        Ok(envelope.data.unwrap_or_default())
    }

    /// `POST /mentions/collect`: ask the backend to poll its sources now.
    pub async fn collect_mentions(&self) -> Result<Collected, ApiError> {
        let envelope = self
            .send::<_, CollectionResult>(Method::POST, "/mentions/collect", &serde_json::json!({}))
            .await?;
        Ok(Collected {
            message: envelope.message,
            result: envelope.data,
        })
    }
}
