//! # Notification and locale preferences
//!
//! [`Preferences`] mirrors the `preferences` block of the backend's user record. The
//! settings page seeds it from `/auth/me` and saves edits through
//! [`crate::Session::save_preferences`], so the same struct is used both on the wire
//! (camelCase JSON) and in browser storage.
//!
//! Every field has a default, so partial or missing JSON decodes to a usable value:
//! all four notification toggles on, English, UTC.

use serde::{Deserialize, Serialize};

/// Languages offered by the settings page: `(code, label)`.
pub const LANGUAGES: &[(&str, &str)] = &[
    ("en", "English"),
    ("es", "Spanish"),
    ("fr", "French"),
    ("de", "German"),
];

/// Time zones offered by the settings page, in IANA form.
pub const TIMEZONES: &[&str] = &[
    "UTC",
    "America/New_York",
    "America/Chicago",
    "America/Denver",
    "America/Los_Angeles",
    "Europe/London",
    "Europe/Paris",
    "Europe/Berlin",
    "Asia/Tokyo",
    "Asia/Shanghai",
    "Australia/Sydney",
];

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    #[serde(default = "default_true")]
    pub email_notifications: bool,
    #[serde(default = "default_true")]
    pub weekly_reports: bool,
    #[serde(default = "default_true")]
    pub sentiment_alerts: bool,
    #[serde(default = "default_true")]
    pub spike_alerts: bool,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default = "default_timezone")]
    pub timezone: String,
}

fn default_true() -> bool {
    true
}

fn default_language() -> String {
    "en".to_string()
}

fn default_timezone() -> String {
    "UTC".to_string()
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            email_notifications: true,
            weekly_reports: true,
            sentiment_alerts: true,
            spike_alerts: true,
            language: default_language(),
            timezone: default_timezone(),
        }
    }
}

impl Preferences {
    /// Defaults with the given time zone, used when the browser reports one.
    pub fn with_timezone(mut self, timezone: impl Into<String>) -> Self {
        self.timezone = timezone.into();
        self
    }

    /// Display label for a language code, falling back to the code itself.
    pub fn language_label(code: &str) -> &str {
        LANGUAGES
            .iter()
            .find(|(c, _)| *c == code)
            .map(|(_, label)| *label)
            .unwrap_or(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_uses_defaults() {
        let prefs: Preferences =
            serde_json::from_str(r#"{"weeklyReports": false, "language": "de"}"#).unwrap();

        assert!(prefs.email_notifications);
        assert!(!prefs.weekly_reports);
        assert!(prefs.spike_alerts);
        assert_eq!(prefs.language, "de");
        assert_eq!(prefs.timezone, "UTC");
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_value(Preferences::default()).unwrap();
        assert_eq!(json["emailNotifications"], true);
        assert_eq!(json["spikeAlerts"], true);
        assert_eq!(json["timezone"], "UTC");
    }

    #[test]
    fn test_language_label() {
        assert_eq!(Preferences::language_label("es"), "Spanish");
        assert_eq!(Preferences::language_label("pt"), "pt");
    }
}
