//! Aggregates served by `/dashboard/*` and `/mentions/collect`. All of them are
//! computed server-side; the client only reshapes them for charts and tables.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::mention::{Mention, Sentiment};

/// Reporting window understood by the dashboard endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Period {
    Day,
    #[default]
    Week,
    Month,
    Quarter,
    Year,
}

impl Period {
    pub const ALL: [Period; 5] = [
        Period::Day,
        Period::Week,
        Period::Month,
        Period::Quarter,
        Period::Year,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Period::Day => "24h",
            Period::Week => "7d",
            Period::Month => "30d",
            Period::Quarter => "90d",
            Period::Year => "1y",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Period::Day => "Last 24 Hours",
            Period::Week => "Last 7 Days",
            Period::Month => "Last 30 Days",
            Period::Quarter => "Last 3 Months",
            Period::Year => "Last Year",
        }
    }

    /// Whether timeline buckets are finer than a day.
    pub fn is_intraday(&self) -> bool {
        matches!(self, Period::Day)
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Period {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Period::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| format!("unknown period: {s}"))
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    #[serde(default)]
    pub total_mentions: u64,
    #[serde(default)]
    pub period_mentions: u64,
    pub growth_percentage: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SentimentShare {
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SentimentBreakdown {
    #[serde(default)]
    pub positive: SentimentShare,
    #[serde(default)]
    pub neutral: SentimentShare,
    #[serde(default)]
    pub negative: SentimentShare,
}

impl SentimentBreakdown {
    pub fn get(&self, sentiment: Sentiment) -> &SentimentShare {
        match sentiment {
            Sentiment::Positive => &self.positive,
            Sentiment::Neutral => &self.neutral,
            Sentiment::Negative => &self.negative,
        }
    }

    /// Counts in positive, neutral, negative order.
    pub fn counts(&self) -> [u64; 3] {
        Sentiment::ALL.map(|s| self.get(s).count)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SourceCount {
    pub source: String,
    #[serde(default)]
    pub count: u64,
}

/// One timeline bucket. `_id` is the bucket's start, as an ISO timestamp or date.
/// Epoch milliseconds and date-part objects are accepted too; see [`bucket_text`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TimelinePoint {
    #[serde(rename = "_id", default, deserialize_with = "lenient_bucket")]
    pub bucket: String,
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub positive: u64,
    #[serde(default)]
    pub negative: u64,
}

fn lenient_bucket<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(bucket_text(&Value::deserialize(deserializer)?))
}

/// Text form of a grouping key:
///
/// | `_id` | Result |
/// |-------|--------|
/// | `"2024-03-01T10:00:00Z"` | unchanged |
/// | `1709287200000` | `"1709287200000"` (epoch ms, parsed by the label formatter) |
/// | `{"year":2024,"month":3,"day":1,"hour":10}` | `"2024-03-01T10:00:00Z"` |
/// | `{"year":2024,"month":3,"day":1}` | `"2024-03-01"` |
/// | anything else | its JSON text |
pub fn bucket_text(id: &Value) -> String {
    match id {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Null => String::new(),
        Value::Object(parts) => {
            let part = |key: &str| parts.get(key).and_then(Value::as_u64);
            match (part("year"), part("month"), part("day")) {
                (Some(year), Some(month), Some(day)) => match part("hour") {
                    Some(hour) => format!(
                        "{year:04}-{month:02}-{day:02}T{hour:02}:{:02}:00Z",
                        part("minute").unwrap_or(0)
                    ),
                    None => format!("{year:04}-{month:02}-{day:02}"),
                },
                _ => id.to_string(),
            }
        }
        other => other.to_string(),
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TopBrand {
    #[serde(rename = "_id")]
    pub brand: String,
    #[serde(default)]
    pub count: u64,
    pub positive: Option<u64>,
    pub negative: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngagementStats {
    #[serde(default)]
    pub total_engagement: u64,
    #[serde(default)]
    pub avg_engagement: f64,
}

/// `data` of `GET /dashboard/overview`.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Overview {
    #[serde(default)]
    pub summary: Summary,
    #[serde(default)]
    pub sentiment: SentimentBreakdown,
    #[serde(default)]
    pub sources: Vec<SourceCount>,
    #[serde(default)]
    pub timeline: Vec<TimelinePoint>,
    #[serde(default)]
    pub top_brands: Vec<TopBrand>,
    pub engagement: Option<EngagementStats>,
    #[serde(default)]
    pub spikes: Vec<Mention>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SentimentDistribution {
    #[serde(default)]
    pub positive: f64,
    #[serde(default)]
    pub neutral: f64,
    #[serde(default)]
    pub negative: f64,
}

/// One row of `GET /dashboard/brands/performance`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandPerformance {
    pub brand: String,
    #[serde(default)]
    pub total_mentions: u64,
    #[serde(default)]
    pub positive_mentions: u64,
    #[serde(default)]
    pub negative_mentions: u64,
    #[serde(default)]
    pub neutral_mentions: u64,
    #[serde(default)]
    pub sentiment_distribution: SentimentDistribution,
    #[serde(default)]
    pub avg_sentiment_score: f64,
    #[serde(default)]
    pub avg_engagement: f64,
}

/// `data` of `POST /mentions/collect`.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionResult {
    #[serde(default)]
    pub new_mentions: u64,
    #[serde(default)]
    pub brands: Vec<serde_json::Value>,
    #[serde(default)]
    pub duration: u64,
}

impl CollectionResult {
    pub fn summary(&self) -> String {
        format!(
            "{} new mentions collected from {} brands in {}ms",
            self.new_mentions,
            self.brands.len(),
            self.duration
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_period_round_trip() {
        for period in Period::ALL {
            assert_eq!(period.as_str().parse::<Period>().unwrap(), period);
        }
        assert!("2w".parse::<Period>().is_err());
        assert_eq!(Period::default(), Period::Week);
    }

    #[test]
    fn test_sparse_overview_decodes() {
        let overview: Overview = serde_json::from_str(
            r#"{"summary": {"totalMentions": 120, "periodMentions": 12},
                "sentiment": {"positive": {"count": 6, "percentage": 50}}}"#,
        )
        .unwrap();

        assert_eq!(overview.summary.total_mentions, 120);
        assert!(overview.summary.growth_percentage.is_none());
        assert_eq!(overview.sentiment.counts(), [6, 0, 0]);
        assert!(overview.timeline.is_empty());
        assert!(overview.engagement.is_none());
    }

    #[test]
    fn test_top_brands_and_timeline_use_mongo_ids() {
        let overview: Overview = serde_json::from_str(
            r#"{"topBrands": [{"_id": "Nike", "count": 40, "positive": 30}],
                "timeline": [{"_id": "2024-03-01T10:00:00.000Z", "count": 4, "positive": 3, "negative": 1}]}"#,
        )
        .unwrap();

        assert_eq!(overview.top_brands[0].brand, "Nike");
        assert_eq!(overview.top_brands[0].negative, None);
        assert_eq!(overview.timeline[0].bucket, "2024-03-01T10:00:00.000Z");
    }

    #[test]
    fn test_timeline_accepts_numeric_and_date_part_ids() {
        let overview: Overview = serde_json::from_str(
            r#"{"timeline": [
                {"_id": 1709287200000, "count": 1},
                {"_id": {"year": 2024, "month": 3, "day": 1, "hour": 9}, "count": 2},
                {"_id": {"year": 2024, "month": 3, "day": 2}, "count": 3},
                {"_id": null, "count": 4}
            ]}"#,
        )
        .unwrap();

        let buckets: Vec<_> = overview.timeline.iter().map(|p| p.bucket.as_str()).collect();
        assert_eq!(
            buckets,
            vec!["1709287200000", "2024-03-01T09:00:00Z", "2024-03-02", ""]
        );
        assert_eq!(overview.timeline[3].count, 4);
    }

    #[test]
    fn test_collection_summary() {
        let result: CollectionResult = serde_json::from_str(
            r#"{"newMentions": 17, "brands": ["Nike", "Apple"], "duration": 2310}"#,
        )
        .unwrap();
        assert_eq!(
            result.summary(),
            "17 new mentions collected from 2 brands in 2310ms"
        );
    }
}
