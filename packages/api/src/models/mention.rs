//! # Mentions and the mentions-list query
//!
//! A [`Mention`] is one detected occurrence of a tracked brand on an external source,
//! as returned by `GET /mentions`. The client never mutates or caches mentions; they
//! live for one page view.
//!
//! [`MentionQuery`] is the filter/paging state of the mentions page. It owns the rule
//! that changing any filter sends the user back to page 1 ([`MentionQuery::set_filter`])
//! and serialises to query parameters with empty values dropped
//! ([`MentionQuery::to_params`]).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    pub const ALL: [Sentiment; 3] = [Sentiment::Positive, Sentiment::Neutral, Sentiment::Negative];

    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Neutral => "neutral",
            Sentiment::Negative => "negative",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Sentiment::Positive => "Positive",
            Sentiment::Neutral => "Neutral",
            Sentiment::Negative => "Negative",
        }
    }

    /// Case-insensitive lookup; `None` for anything the client has no badge for.
    pub fn from_name(name: &str) -> Option<Sentiment> {
        Sentiment::ALL
            .into_iter()
            .find(|s| s.as_str().eq_ignore_ascii_case(name.trim()))
    }
}

/// Unknown or non-string sentiments decode as `None` instead of failing the page.
fn lenient_sentiment<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Sentiment>, D::Error> {
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(raw
        .as_ref()
        .and_then(serde_json::Value::as_str)
        .and_then(Sentiment::from_name))
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Engagement {
    #[serde(default)]
    pub likes: u64,
    #[serde(default)]
    pub shares: u64,
    #[serde(default)]
    pub comments: u64,
    #[serde(default)]
    pub total: u64,
}

impl Engagement {
    /// `total` as reported, or the sum of the parts when the backend left it at zero.
    pub fn total(&self) -> u64 {
        if self.total > 0 {
            self.total
        } else {
            self.likes + self.shares + self.comments
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mention {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub brand: String,
    pub source: String,
    #[serde(default, deserialize_with = "lenient_sentiment")]
    pub sentiment: Option<Sentiment>,
    #[serde(default)]
    pub content: String,
    pub author: Option<String>,
    #[serde(default)]
    pub url: String,
    pub timestamp: DateTime<Utc>,
    pub engagement: Option<Engagement>,
    #[serde(default)]
    pub topics: Vec<String>,
}

impl Mention {
    pub fn engagement_total(&self) -> u64 {
        self.engagement.as_ref().map(Engagement::total).unwrap_or(0)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Pagination {
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub pages: u32,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub limit: u32,
}

impl Pagination {
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.pages
    }
}

/// `data` of `GET /mentions`.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct MentionPage {
    #[serde(default)]
    pub mentions: Vec<Mention>,
    pub pagination: Option<Pagination>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

/// The user-editable filters of the mentions page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    Brand,
    Sentiment,
    Source,
}

/// Filters, paging and sorting for `GET /mentions`. Empty strings mean "all".
#[derive(Debug, Clone, PartialEq)]
pub struct MentionQuery {
    pub brand: String,
    pub sentiment: String,
    pub source: String,
    pub page: u32,
    pub limit: u32,
    pub sort_by: Option<String>,
    pub sort_order: Option<SortOrder>,
}

impl Default for MentionQuery {
    fn default() -> Self {
        Self::new(20)
    }
}

impl MentionQuery {
    /// First page, no filters.
    pub fn new(limit: u32) -> Self {
        Self {
            brand: String::new(),
            sentiment: String::new(),
            source: String::new(),
            page: 1,
            limit,
            sort_by: None,
            sort_order: None,
        }
    }

    /// Newest mentions first, as shown on the dashboard.
    pub fn recent(limit: u32) -> Self {
        Self {
            sort_by: Some("timestamp".to_string()),
            sort_order: Some(SortOrder::Desc),
            ..Self::new(limit)
        }
    }

    /// Change one filter and go back to the first page.
    pub fn set_filter(&mut self, field: FilterField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FilterField::Brand => self.brand = value,
            FilterField::Sentiment => self.sentiment = value,
            FilterField::Source => self.source = value,
        }
        self.page = 1;
    }

    /// Drop every filter and go back to the first page, keeping the page size.
    pub fn clear_filters(&mut self) {
        *self = Self {
            sort_by: self.sort_by.take(),
            sort_order: self.sort_order,
            ..Self::new(self.limit)
        };
    }

    pub fn has_filters(&self) -> bool {
        !(self.brand.is_empty() && self.sentiment.is_empty() && self.source.is_empty())
    }

    pub fn go_to_page(&mut self, page: u32) {
        self.page = page.max(1);
    }

    /// Query parameters with empty values left out.
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        for (key, value) in [
            ("brand", &self.brand),
            ("sentiment", &self.sentiment),
            ("source", &self.source),
        ] {
            if !value.trim().is_empty() {
                params.push((key, value.trim().to_string()));
            }
        }
        if self.page > 0 {
            params.push(("page", self.page.to_string()));
        }
        if self.limit > 0 {
            params.push(("limit", self.limit.to_string()));
        }
        if let Some(sort_by) = self.sort_by.as_deref().filter(|s| !s.is_empty()) {
            params.push(("sortBy", sort_by.to_string()));
        }
        if let Some(order) = self.sort_order {
            params.push(("sortOrder", order.as_str().to_string()));
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_params_drop_empty_filters() {
        let query = MentionQuery::new(20);
        assert_eq!(
            query.to_params(),
            vec![("page", "1".to_string()), ("limit", "20".to_string())]
        );
    }

    #[test]
    fn test_recent_query_params() {
        assert_eq!(
            MentionQuery::recent(8).to_params(),
            vec![
                ("page", "1".to_string()),
                ("limit", "8".to_string()),
                ("sortBy", "timestamp".to_string()),
                ("sortOrder", "desc".to_string()),
            ]
        );
    }

    #[test]
    fn test_filter_change_resets_page() {
        let mut query = MentionQuery::new(20);
        query.go_to_page(4);
        query.set_filter(FilterField::Sentiment, "negative");

        assert_eq!(query.page, 1);
        assert_eq!(query.sentiment, "negative");
        assert!(query.to_params().contains(&("sentiment", "negative".to_string())));
    }

    #[test]
    fn test_clear_filters_keeps_limit_and_sort() {
        let mut query = MentionQuery::recent(50);
        query.set_filter(FilterField::Brand, "Nike");
        query.set_filter(FilterField::Source, "reddit");
        query.go_to_page(3);
        query.clear_filters();

        assert!(!query.has_filters());
        assert_eq!(query.page, 1);
        assert_eq!(query.limit, 50);
        assert_eq!(query.sort_by.as_deref(), Some("timestamp"));
    }

    #[test]
    fn test_page_never_below_one() {
        let mut query = MentionQuery::default();
        query.go_to_page(0);
        assert_eq!(query.page, 1);
    }

    #[test]
    fn test_decode_mention_page() {
        let page: MentionPage = serde_json::from_str(
            r#"{
                "mentions": [{
                    "_id": "m1",
                    "brand": "Nike",
                    "source": "twitter",
                    "sentiment": "positive",
                    "content": "Love these shoes",
                    "author": "@runner",
                    "url": "https://twitter.com/x/1",
                    "timestamp": "2024-03-01T10:15:00.000Z",
                    "engagement": {"likes": 10, "shares": 2, "comments": 3},
                    "topics": ["running"]
                }],
                "pagination": {"page": 1, "pages": 3, "total": 55, "limit": 20}
            }"#,
        )
        .unwrap();

        let mention = &page.mentions[0];
        assert_eq!(mention.sentiment, Some(Sentiment::Positive));
        assert_eq!(mention.engagement_total(), 15);
        let pagination = page.pagination.unwrap();
        assert!(pagination.has_next());
        assert!(!pagination.has_previous());
    }

    #[test]
    fn test_unrecognised_sentiment_does_not_fail_the_page() {
        let page: MentionPage = serde_json::from_str(
            r#"{
                "mentions": [
                    {"_id": "m1", "brand": "Nike", "source": "blog", "sentiment": "mixed",
                     "timestamp": "2024-03-01T10:15:00Z"},
                    {"_id": "m2", "brand": "Nike", "source": "news", "sentiment": "NEGATIVE",
                     "timestamp": "2024-03-01T11:15:00Z"},
                    {"_id": "m3", "brand": "Nike", "source": "forum", "sentiment": null,
                     "timestamp": "2024-03-01T12:15:00Z"},
                    {"_id": "m4", "brand": "Nike", "source": "reddit",
                     "timestamp": "2024-03-01T13:15:00Z"}
                ]
            }"#,
        )
        .unwrap();

        let sentiments: Vec<_> = page.mentions.iter().map(|m| m.sentiment).collect();
        assert_eq!(sentiments, vec![None, Some(Sentiment::Negative), None, None]);
    }
}
