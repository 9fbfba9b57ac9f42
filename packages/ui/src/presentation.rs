//! Badge colours and option lists shared by the views.

use api::{Plan, Sentiment};

use crate::components::Tone;

/// Sources the mentions filter offers: `(value, label)`.
pub const MENTION_SOURCES: &[(&str, &str)] = &[
    ("twitter", "Twitter"),
    ("reddit", "Reddit"),
    ("news", "News"),
    ("blog", "Blog"),
];

/// Industries as stored on user profiles; value and label are the same text.
pub const INDUSTRIES: &[(&str, &str)] = &[
    ("Technology", "Technology"),
    ("Retail", "Retail"),
    ("Healthcare", "Healthcare"),
    ("Finance", "Finance"),
    ("Manufacturing", "Manufacturing"),
    ("Education", "Education"),
    ("Entertainment", "Entertainment"),
    ("Food & Beverage", "Food & Beverage"),
    ("Automotive", "Automotive"),
    ("Fashion", "Fashion"),
    ("Travel", "Travel"),
    ("Real Estate", "Real Estate"),
    ("Energy", "Energy"),
    ("Other", "Other"),
];

pub const COMPANY_SIZES: &[(&str, &str)] = &[
    ("1-10", "1-10 employees"),
    ("11-50", "11-50 employees"),
    ("51-200", "51-200 employees"),
    ("201-500", "201-500 employees"),
    ("501-1000", "501-1000 employees"),
    ("1000+", "1000+ employees"),
];

/// Owned `(value, label)` pairs for [`crate::components::Select`].
pub fn options(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .map(|(value, label)| (value.to_string(), label.to_string()))
        .collect()
}

pub fn sentiment_label(sentiment: Option<Sentiment>) -> &'static str {
    sentiment.map(|s| s.label()).unwrap_or("Unknown")
}

pub fn sentiment_tone(sentiment: Option<Sentiment>) -> Tone {
    match sentiment {
        Some(Sentiment::Positive) => Tone::Success,
        Some(Sentiment::Negative) => Tone::Danger,
        Some(Sentiment::Neutral) => Tone::Warning,
        None => Tone::Secondary,
    }
}

pub fn source_tone(source: &str) -> Tone {
    match source.to_ascii_lowercase().as_str() {
        "twitter" => Tone::Info,
        "reddit" => Tone::Warning,
        "news" => Tone::Success,
        "blog" | "facebook" => Tone::Primary,
        "forum" => Tone::Secondary,
        "instagram" | "youtube" => Tone::Danger,
        _ => Tone::Secondary,
    }
}

pub fn plan_tone(plan: Plan) -> Tone {
    match plan {
        Plan::Free => Tone::Secondary,
        Plan::Starter => Tone::Info,
        Plan::Professional => Tone::Primary,
        Plan::Enterprise => Tone::Success,
    }
}

/// Average sentiment score in `-1.0..=1.0`.
pub fn score_tone(score: f64) -> Tone {
    if score > 0.2 {
        Tone::Success
    } else if score < -0.2 {
        Tone::Danger
    } else {
        Tone::Warning
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_industry_options_match_stored_profile_values() {
        let industries = options(INDUSTRIES);
        assert_eq!(industries.len(), 14);
        assert!(industries.iter().all(|(value, label)| value == label));
        assert!(industries.iter().any(|(value, _)| value == "Technology"));
        assert!(industries.iter().any(|(value, _)| value == "Food & Beverage"));
        assert_eq!(industries.last().map(|(v, _)| v.as_str()), Some("Other"));
    }

    #[test]
    fn test_score_tone_thresholds() {
        assert_eq!(score_tone(0.5), Tone::Success);
        assert_eq!(score_tone(0.2), Tone::Warning);
        assert_eq!(score_tone(-0.2), Tone::Warning);
        assert_eq!(score_tone(-0.21), Tone::Danger);
    }

    #[test]
    fn test_source_tone_is_case_insensitive() {
        assert_eq!(source_tone("Twitter"), Tone::Info);
        assert_eq!(source_tone("news"), Tone::Success);
        assert_eq!(source_tone("mastodon"), Tone::Secondary);
    }

    #[test]
    fn test_sentiment_tone() {
        assert_eq!(sentiment_tone(Some(Sentiment::Positive)), Tone::Success);
        assert_eq!(sentiment_tone(Some(Sentiment::Neutral)), Tone::Warning);
        assert_eq!(sentiment_tone(None), Tone::Secondary);
    }
}
