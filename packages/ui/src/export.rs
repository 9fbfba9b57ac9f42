//! Report export: the analytics brand table as a CSV download.

use api::{BrandPerformance, Period};

use crate::format::format_decimal;

const HEADER: [&str; 7] = [
    "Brand",
    "Total Mentions",
    "Positive",
    "Neutral",
    "Negative",
    "Avg Sentiment Score",
    "Avg Engagement",
];

/// Quote a field when it contains a delimiter, quote or line break.
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

pub fn brand_performance_csv(rows: &[BrandPerformance]) -> String {
    let mut out = HEADER.join(",");
    out.push_str("\r\n");
    for row in rows {
        let fields = [
            csv_field(&row.brand),
            row.total_mentions.to_string(),
            row.positive_mentions.to_string(),
            row.neutral_mentions.to_string(),
            row.negative_mentions.to_string(),
            format!("{:.2}", row.avg_sentiment_score),
            format_decimal(row.avg_engagement),
        ];
        out.push_str(&fields.join(","));
        out.push_str("\r\n");
    }
    out
}

pub fn report_filename(period: Period) -> String {
    format!("brand-performance-{}.csv", period.as_str())
}

const DOWNLOAD: &str = r#"
const { filename, content } = await dioxus.recv();
const blob = new Blob([content], { type: "text/csv;charset=utf-8" });
const url = URL.createObjectURL(blob);
const link = document.createElement("a");
link.href = url;
link.download = filename;
document.body.appendChild(link);
link.click();
link.remove();
URL.revokeObjectURL(url);
"#;

/// Hand the report to the browser as a file download.
pub fn download_report(period: Period, rows: &[BrandPerformance]) {
    let filename = report_filename(period);
    let eval = dioxus::prelude::document::eval(DOWNLOAD);
    let payload = serde_json::json!({ "filename": filename, "content": brand_performance_csv(rows) });
    match eval.send(payload) {
        Ok(()) => tracing::info!("Exported {} brand rows to {}", rows.len(), filename),
        Err(e) => tracing::error!("Failed to export report: {:?}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csv_quotes_only_when_needed() {
        assert_eq!(csv_field("Nike"), "Nike");
        assert_eq!(csv_field("Ben & Jerry's, Inc"), "\"Ben & Jerry's, Inc\"");
        assert_eq!(csv_field("The \"Best\""), "\"The \"\"Best\"\"\"");
    }

    #[test]
    fn test_brand_performance_csv_rows() {
        let rows = vec![BrandPerformance {
            brand: "Nike".into(),
            total_mentions: 10,
            positive_mentions: 6,
            neutral_mentions: 3,
            negative_mentions: 1,
            avg_sentiment_score: 0.456,
            avg_engagement: 12.0,
            ..BrandPerformance::default()
        }];
        let csv = brand_performance_csv(&rows);
        let lines: Vec<_> = csv.split("\r\n").collect();
        assert_eq!(lines[0], "Brand,Total Mentions,Positive,Neutral,Negative,Avg Sentiment Score,Avg Engagement");
        assert_eq!(lines[1], "Nike,10,6,3,1,0.46,12");
        assert_eq!(lines[2], "");
    }

    #[test]
    fn test_report_filename_uses_period() {
        assert_eq!(report_filename(Period::Month), "brand-performance-30d.csv");
    }
}
