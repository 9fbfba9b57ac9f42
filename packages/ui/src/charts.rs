//! # Chart.js bridge
//!
//! Charts are drawn by Chart.js, loaded as an external script by the web package.
//! Rust builds a serializable [`ChartConfig`] (the same shape `new Chart(canvas, config)`
//! takes) and the [`Chart`] component ships it to the page with `document::eval`:
//!
//! | Builder | Chart | Used by |
//! |---------|-------|---------|
//! | [`sentiment_doughnut`] | doughnut of positive / neutral / negative counts | dashboard, analytics |
//! | [`source_bar`] | mentions per source | dashboard (multi-colour), analytics (single colour) |
//! | [`timeline_line`] | mentions over time, optionally split by sentiment | dashboard, analytics |
//! | [`brand_comparison`] | total / positive / negative per brand | analytics |
//!
//! A config change redraws the chart: the previous instance stored on the canvas is
//! destroyed first, so re-renders never stack charts on one canvas.

use chrono::FixedOffset;
use dioxus::prelude::*;
use serde::Serialize;
use serde_json::{json, Value};

use api::{BrandPerformance, Period, SentimentBreakdown, SourceCount, TimelinePoint};

use crate::format::{capitalize, timeline_label};

const POSITIVE: &str = "#28a745";
const NEUTRAL: &str = "#ffc107";
const NEGATIVE: &str = "#dc3545";
const PRIMARY: &str = "#007bff";
const SOURCE_PALETTE: [&str; 6] = ["#1da1f2", "#ff4500", "#28a745", "#6f42c1", "#fd7e14", "#20c997"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Bar,
    Line,
    Doughnut,
}

/// One colour for the whole series or one per data point.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Colors {
    One(String),
    Many(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub data: Vec<f64>,
    pub background_color: Colors,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<Colors>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tension: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<bool>,
}

impl Dataset {
    fn new(label: Option<&str>, data: Vec<f64>, background: Colors) -> Self {
        Self {
            label: label.map(str::to_string),
            data,
            background_color: background,
            border_color: None,
            border_width: None,
            tension: None,
            fill: None,
        }
    }

    fn line(label: &str, data: Vec<f64>, color: &str, fill: bool) -> Self {
        Self {
            border_color: Some(Colors::One(color.to_string())),
            tension: Some(0.4),
            fill: Some(fill),
            ..Self::new(Some(label), data, Colors::One(translucent(color)))
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub kind: ChartKind,
    pub data: ChartData,
    pub options: Value,
}

impl ChartConfig {
    pub fn is_empty(&self) -> bool {
        self.data.datasets.iter().all(|d| d.data.iter().all(|v| *v == 0.0))
    }
}

/// `#rrggbb` at 10% opacity, for line fills.
fn translucent(hex: &str) -> String {
    format!("{}1a", hex)
}

fn axis_options(show_legend: bool) -> Value {
    json!({
        "responsive": true,
        "maintainAspectRatio": false,
        "plugins": { "legend": { "display": show_legend, "position": "top" } },
        "scales": { "y": { "beginAtZero": true, "ticks": { "precision": 0 } } }
    })
}

pub fn sentiment_doughnut(sentiment: &SentimentBreakdown) -> ChartConfig {
    let data = sentiment.counts().iter().map(|c| *c as f64).collect();
    ChartConfig {
        kind: ChartKind::Doughnut,
        data: ChartData {
            labels: vec!["Positive".into(), "Neutral".into(), "Negative".into()],
            datasets: vec![Dataset {
                border_width: Some(2),
                ..Dataset::new(
                    None,
                    data,
                    Colors::Many(vec![POSITIVE.into(), NEUTRAL.into(), NEGATIVE.into()]),
                )
            }],
        },
        options: json!({
            "responsive": true,
            "maintainAspectRatio": false,
            "plugins": { "legend": { "position": "bottom" } }
        }),
    }
}

/// Source colouring: the dashboard gives each bar its own colour, analytics uses one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourcePalette {
    PerSource,
    Single,
}

pub fn source_bar(sources: &[SourceCount], palette: SourcePalette) -> ChartConfig {
    let labels = sources.iter().map(|s| capitalize(&s.source)).collect();
    let data = sources.iter().map(|s| s.count as f64).collect();
    let dataset = match palette {
        SourcePalette::PerSource => Dataset::new(
            Some("Mentions"),
            data,
            Colors::Many(
                (0..sources.len())
                    .map(|i| SOURCE_PALETTE[i % SOURCE_PALETTE.len()].to_string())
                    .collect(),
            ),
        ),
        SourcePalette::Single => Dataset {
            border_color: Some(Colors::One(PRIMARY.into())),
            border_width: Some(1),
            ..Dataset::new(Some("Mentions"), data, Colors::One("rgba(0, 123, 255, 0.6)".into()))
        },
    };
    ChartConfig {
        kind: ChartKind::Bar,
        data: ChartData {
            labels,
            datasets: vec![dataset],
        },
        options: axis_options(false),
    }
}

/// Mentions over time. `by_sentiment` adds positive and negative series next to the total.
pub fn timeline_line(
    timeline: &[TimelinePoint],
    period: Period,
    offset: FixedOffset,
    by_sentiment: bool,
) -> ChartConfig {
    let labels = timeline
        .iter()
        .map(|p| timeline_label(&p.bucket, period, offset))
        .collect();
    let series = |f: fn(&TimelinePoint) -> u64| timeline.iter().map(|p| f(p) as f64).collect::<Vec<_>>();

    let mut datasets = vec![Dataset::line(
        if by_sentiment { "Total Mentions" } else { "Mentions" },
        series(|p| p.count),
        PRIMARY,
        true,
    )];
    if by_sentiment {
        datasets.push(Dataset::line("Positive", series(|p| p.positive), POSITIVE, false));
        datasets.push(Dataset::line("Negative", series(|p| p.negative), NEGATIVE, false));
    }

    ChartConfig {
        kind: ChartKind::Line,
        data: ChartData { labels, datasets },
        options: axis_options(by_sentiment),
    }
}

pub fn brand_comparison(performance: &[BrandPerformance]) -> ChartConfig {
    let labels = performance.iter().map(|b| b.brand.clone()).collect();
    let series = |f: fn(&BrandPerformance) -> u64| performance.iter().map(|b| f(b) as f64).collect::<Vec<_>>();
    ChartConfig {
        kind: ChartKind::Bar,
        data: ChartData {
            labels,
            datasets: vec![
                Dataset::new(Some("Total Mentions"), series(|b| b.total_mentions), Colors::One(PRIMARY.into())),
                Dataset::new(Some("Positive"), series(|b| b.positive_mentions), Colors::One(POSITIVE.into())),
                Dataset::new(Some("Negative"), series(|b| b.negative_mentions), Colors::One(NEGATIVE.into())),
            ],
        },
        options: axis_options(true),
    }
}

const DRAW_CHART: &str = r#"
const { id, config } = await dioxus.recv();
let attempts = 0;
const draw = () => {
    const canvas = document.getElementById(id);
    if (!canvas || !window.Chart) {
        if (attempts++ < 50) { setTimeout(draw, 100); }
        return;
    }
    if (canvas._chart) { canvas._chart.destroy(); }
    canvas._chart = new Chart(canvas, config);
};
draw();
"#;

const DESTROY_CHART: &str = r#"
const id = await dioxus.recv();
const canvas = document.getElementById(id);
if (canvas && canvas._chart) { canvas._chart.destroy(); canvas._chart = null; }
"#;

fn draw(canvas_id: &str, config: &ChartConfig) {
    let eval = document::eval(DRAW_CHART);
    if let Err(e) = eval.send(json!({ "id": canvas_id, "config": config })) {
        tracing::warn!("Failed to draw chart {}: {:?}", canvas_id, e);
    }
}

/// A canvas that Chart.js draws `config` into. Redraws whenever `config` changes.
#[component]
pub fn Chart(id: String, config: ChartConfig, #[props(default = 250)] height: u32) -> Element {
    let canvas_id = id.clone();
    use_effect(use_reactive((&config,), move |(config,)| {
        draw(&canvas_id, &config);
    }));

    let drop_id = id.clone();
    use_drop(move || {
        let eval = document::eval(DESTROY_CHART);
        if let Err(e) = eval.send(drop_id.clone()) {
            tracing::debug!("Failed to release chart {}: {:?}", drop_id, e);
        }
    });

    rsx! {
        div {
            class: "chart-container",
            style: "position: relative; height: {height}px;",
            canvas { id: "{id}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::SentimentShare;

    fn utc() -> FixedOffset {
        FixedOffset::east_opt(0).unwrap()
    }

    #[test]
    fn test_doughnut_serializes_for_chartjs() {
        let breakdown = SentimentBreakdown {
            positive: SentimentShare { count: 5, percentage: 50.0 },
            neutral: SentimentShare { count: 3, percentage: 30.0 },
            negative: SentimentShare { count: 2, percentage: 20.0 },
        };
        let value = serde_json::to_value(sentiment_doughnut(&breakdown)).unwrap();
        assert_eq!(value["type"], "doughnut");
        assert_eq!(value["data"]["labels"], json!(["Positive", "Neutral", "Negative"]));
        assert_eq!(value["data"]["datasets"][0]["data"], json!([5.0, 3.0, 2.0]));
        assert_eq!(value["data"]["datasets"][0]["backgroundColor"][0], POSITIVE);
        assert!(value["data"]["datasets"][0].get("label").is_none());
    }

    #[test]
    fn test_source_bar_palettes() {
        let sources = vec![
            SourceCount { source: "twitter".into(), count: 4 },
            SourceCount { source: "reddit".into(), count: 1 },
        ];
        let multi = source_bar(&sources, SourcePalette::PerSource);
        assert_eq!(multi.data.labels, vec!["Twitter", "Reddit"]);
        assert!(matches!(&multi.data.datasets[0].background_color, Colors::Many(c) if c.len() == 2));

        let single = source_bar(&sources, SourcePalette::Single);
        assert!(matches!(single.data.datasets[0].background_color, Colors::One(_)));
        assert_eq!(single.data.datasets[0].border_width, Some(1));
    }

    #[test]
    fn test_timeline_series_and_labels() {
        let timeline = vec![
            TimelinePoint { bucket: "2024-03-01T10:00:00Z".into(), count: 3, positive: 2, negative: 1 },
            TimelinePoint { bucket: "2024-03-01T11:00:00Z".into(), count: 1, positive: 0, negative: 0 },
        ];
        let plain = timeline_line(&timeline, Period::Day, utc(), false);
        assert_eq!(plain.data.labels, vec!["10:00", "11:00"]);
        assert_eq!(plain.data.datasets.len(), 1);

        let split = timeline_line(&timeline, Period::Week, utc(), true);
        assert_eq!(split.data.labels, vec!["Mar 1", "Mar 1"]);
        let labels: Vec<_> = split.data.datasets.iter().filter_map(|d| d.label.clone()).collect();
        assert_eq!(labels, vec!["Total Mentions", "Positive", "Negative"]);
        assert_eq!(split.data.datasets[1].data, vec![2.0, 0.0]);
    }

    #[test]
    fn test_empty_detection() {
        let config = source_bar(&[], SourcePalette::Single);
        assert!(config.is_empty());
        let config = brand_comparison(&[BrandPerformance {
            brand: "Nike".into(),
            total_mentions: 2,
            ..BrandPerformance::default()
        }]);
        assert!(!config.is_empty());
    }
}
