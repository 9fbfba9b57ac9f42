use chrono::Utc;
use dioxus::prelude::*;

use api::{ApiError, BrandPerformance, Overview, Period};

use crate::auth::{handle_api_error, use_auth, SESSION_EXPIRED};
use crate::charts::{brand_comparison, sentiment_doughnut, source_bar, timeline_line, Chart, SourcePalette};
use crate::components::{Alert, Badge, Button, ButtonVariant, Card, LoadingState, Select, StatCard, Tone};
use crate::export::download_report;
use crate::format::{format_count, format_decimal, growth_text, local_timestamp};
use crate::icons::{
    FaArrowDown, FaArrowUp, FaArrowsRotate, FaChartLine, FaFaceFrown, FaFaceSmile, FaFileExport, FaHeart,
};
use crate::platform::local_offset;
use crate::presentation::{score_tone, sentiment_label, sentiment_tone};
use crate::session::make_client;
use crate::Icon;

const ALL_BRANDS: &str = "all";

/// Banner text for a failed overview fetch.
fn analytics_error_message(error: &ApiError) -> String {
    match error {
        ApiError::NotFound => {
            "Analytics endpoint not found. Please check if the dashboard routes are set up.".to_string()
        }
        ApiError::Unauthorized(_) => SESSION_EXPIRED.to_string(),
        _ => "Error loading analytics data. Please try again.".to_string(),
    }
}

/// What to render after an overview fetch. A failure drops the previous data so
/// stale charts never sit under the error banner.
fn overview_outcome(result: Result<Overview, ApiError>) -> (Option<Overview>, Option<String>) {
    match result {
        Ok(data) => (Some(data), None),
        Err(e) => (None, Some(analytics_error_message(&e))),
    }
}

#[component]
pub fn AnalyticsView() -> Element {
    let auth = use_auth();
    let mut period = use_signal(Period::default);
    let mut brand = use_signal(|| ALL_BRANDS.to_string());
    let mut overview = use_signal(|| Option::<Overview>::None);
    let mut performance = use_signal(Vec::<BrandPerformance>::new);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);
    let mut reload = use_signal(|| 0u32);

    // Refetch whenever the period or brand filter changes
    let _loader = use_resource(move || async move {
        let window = period();
        let selected = brand();
        let _ = reload();
        loading.set(true);
        error.set(None);

        let client = make_client();
        let brand_filter = (selected != ALL_BRANDS).then_some(selected.as_str());
        let (summary, brands) = futures::join!(
            client.overview(window, brand_filter),
            client.brand_performance(window)
        );
        if let Err(e) = &summary {
            handle_api_error(auth, e);
        }
        let (data, message) = overview_outcome(summary);
        overview.set(data);
        error.set(message);
        match brands {
            Ok(rows) => performance.set(rows),
            Err(e) => tracing::warn!("Failed to load brand performance: {}", e),
        }
        loading.set(false);
    });

    let period_options: Vec<(String, String)> = Period::ALL
        .iter()
        .map(|p| (p.as_str().to_string(), p.label().to_string()))
        .collect();
    let mut brand_options = vec![(ALL_BRANDS.to_string(), "All Brands".to_string())];
    if let Some(user) = auth().user {
        brand_options.extend(user.brand_names().into_iter().map(|n| (n.clone(), n)));
    }

    let window = period();
    let offset = local_offset(Utc::now());

    rsx! {
        div {
            class: "analytics",
            div {
                class: "d-flex justify-content-between align-items-end flex-wrap gap-3 mb-4",
                div {
                    h1 { class: "h3 mb-1", "Analytics" }
                    p { class: "text-muted mb-0", "Sentiment, sources and brand performance over time" }
                }
                div {
                    class: "d-flex gap-2 align-items-end flex-wrap",
                    div {
                        label { class: "form-label small mb-1", r#for: "analytics-period", "Time Range" }
                        Select {
                            id: "analytics-period",
                            value: window.as_str().to_string(),
                            options: period_options,
                            onchange: move |evt: FormEvent| {
                                match evt.value().parse::<Period>() {
                                    Ok(p) => period.set(p),
                                    Err(e) => tracing::warn!("{}", e),
                                }
                            },
                        }
                    }
                    div {
                        label { class: "form-label small mb-1", r#for: "analytics-brand", "Brand" }
                        Select {
                            id: "analytics-brand",
                            value: brand(),
                            options: brand_options,
                            onchange: move |evt: FormEvent| brand.set(evt.value()),
                        }
                    }
                    Button {
                        variant: ButtonVariant::OutlinePrimary,
                        disabled: loading(),
                        onclick: move |_| *reload.write() += 1,
                        Icon { icon: FaArrowsRotate, width: 14, height: 14 }
                        " Refresh Data"
                    }
                    Button {
                        variant: ButtonVariant::Success,
                        disabled: performance().is_empty(),
                        onclick: move |_| download_report(period(), &performance.read()),
                        Icon { icon: FaFileExport, width: 14, height: 14 }
                        " Export Report"
                    }
                }
            }

            if let Some(message) = error() {
                Alert { tone: Tone::Danger, "{message}" }
            }

            if loading() && overview().is_none() {
                LoadingState { message: "Loading analytics..." }
            } else if let Some(data) = overview() {
                if data.summary.period_mentions == 0 && data.timeline.is_empty() {
                    Alert {
                        tone: Tone::Info,
                        "No data for {window.label().to_lowercase()}. Collect mentions from the dashboard or pick a longer time range."
                    }
                }

                div {
                    class: "row g-3 mb-4",
                    div {
                        class: "col-md-3",
                        StatCard {
                            title: "Mentions",
                            value: format_count(data.summary.period_mentions),
                            footnote: rsx! {
                                if let Some(growth) = data.summary.growth_percentage {
                                    small {
                                        class: if growth >= 0.0 { "text-success" } else { "text-danger" },
                                        if growth >= 0.0 {
                                            Icon { icon: FaArrowUp, width: 10, height: 10 }
                                        } else {
                                            Icon { icon: FaArrowDown, width: 10, height: 10 }
                                        }
                                        " {growth_text(growth)}"
                                    }
                                } else {
                                    small { class: "text-muted", "{window.label()}" }
                                }
                            },
                            icon: rsx! { Icon { icon: FaChartLine, width: 24, height: 24 } },
                        }
                    }
                    div {
                        class: "col-md-3",
                        StatCard {
                            title: "Positive",
                            value: format_count(data.sentiment.positive.count),
                            tone: Tone::Success,
                            footnote: rsx! {
                                small { class: "text-muted", "{format_decimal(data.sentiment.positive.percentage)}%" }
                            },
                            icon: rsx! { Icon { icon: FaFaceSmile, width: 24, height: 24 } },
                        }
                    }
                    div {
                        class: "col-md-3",
                        StatCard {
                            title: "Negative",
                            value: format_count(data.sentiment.negative.count),
                            tone: Tone::Danger,
                            footnote: rsx! {
                                small { class: "text-muted", "{format_decimal(data.sentiment.negative.percentage)}%" }
                            },
                            icon: rsx! { Icon { icon: FaFaceFrown, width: 24, height: 24 } },
                        }
                    }
                    div {
                        class: "col-md-3",
                        StatCard {
                            title: "Total Engagement",
                            value: format_count(data.engagement.as_ref().map(|e| e.total_engagement).unwrap_or(0)),
                            tone: Tone::Info,
                            footnote: rsx! {
                                small {
                                    class: "text-muted",
                                    "Avg: {format_decimal(data.engagement.as_ref().map(|e| e.avg_engagement).unwrap_or(0.0))} per mention"
                                }
                            },
                            icon: rsx! { Icon { icon: FaHeart, width: 24, height: 24 } },
                        }
                    }
                }

                div {
                    class: "row g-3 mb-4",
                    div {
                        class: "col-lg-4",
                        Card {
                            title: "Sentiment Analysis",
                            class: "h-100",
                            Chart { id: "analytics-sentiment", config: sentiment_doughnut(&data.sentiment) }
                        }
                    }
                    div {
                        class: "col-lg-8",
                        Card {
                            title: "Mentions Timeline",
                            class: "h-100",
                            Chart {
                                id: "analytics-timeline",
                                config: timeline_line(&data.timeline, window, offset, true),
                            }
                        }
                    }
                }

                div {
                    class: "row g-3 mb-4",
                    div {
                        class: "col-lg-6",
                        Card {
                            title: "Mentions by Source",
                            class: "h-100",
                            Chart { id: "analytics-sources", config: source_bar(&data.sources, SourcePalette::Single) }
                        }
                    }
                    div {
                        class: "col-lg-6",
                        Card {
                            title: "Brand Comparison",
                            class: "h-100",
                            if performance().is_empty() {
                                p { class: "text-muted text-center my-5", "No brand data for this period" }
                            } else {
                                Chart { id: "analytics-brands", config: brand_comparison(&performance()) }
                            }
                        }
                    }
                }

                Card {
                    title: "Brand Performance",
                    class: "mb-4",
                    BrandPerformanceTable { rows: performance() }
                }

                Card {
                    title: "Top Engagement Spikes",
                    class: "mb-4",
                    if data.spikes.is_empty() {
                        p { class: "text-muted mb-0", "No spikes detected in this period." }
                    } else {
                        div {
                            class: "table-responsive",
                            table {
                                class: "table table-hover align-middle mb-0",
                                thead {
                                    tr {
                                        th { "Brand" }
                                        th { "Content" }
                                        th { "Sentiment" }
                                        th { class: "text-end", "Engagement" }
                                        th { "Date" }
                                    }
                                }
                                tbody {
                                    for spike in data.spikes.iter().take(5) {
                                        tr {
                                            key: "{spike.id}",
                                            td { class: "fw-semibold", "{spike.brand}" }
                                            td { class: "text-truncate spike-content", "{spike.content}" }
                                            td {
                                                Badge {
                                                    tone: sentiment_tone(spike.sentiment),
                                                    "{sentiment_label(spike.sentiment)}"
                                                }
                                            }
                                            td { class: "text-end", "{format_count(spike.engagement_total())}" }
                                            td { class: "text-nowrap", "{local_timestamp(&spike.timestamp)}" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn format_score(score: f64) -> String {
    format!("{:.2}", score)
}

#[component]
fn BrandPerformanceTable(rows: Vec<BrandPerformance>) -> Element {
    if rows.is_empty() {
        return rsx! {
            p { class: "text-muted mb-0", "No brand performance data for this period." }
        };
    }

    rsx! {
        div {
            class: "table-responsive",
            table {
                class: "table table-striped align-middle mb-0",
                thead {
                    tr {
                        th { "Brand" }
                        th { class: "text-end", "Total" }
                        th { class: "text-end", "Positive" }
                        th { class: "text-end", "Neutral" }
                        th { class: "text-end", "Negative" }
                        th { "Sentiment Score" }
                        th { class: "text-end", "Avg Engagement" }
                    }
                }
                tbody {
                    for row in rows {
                        tr {
                            key: "{row.brand}",
                            td { class: "fw-semibold", "{row.brand}" }
                            td { class: "text-end", "{format_count(row.total_mentions)}" }
                            td { class: "text-end text-success", "{format_count(row.positive_mentions)}" }
                            td { class: "text-end text-warning", "{format_count(row.neutral_mentions)}" }
                            td { class: "text-end text-danger", "{format_count(row.negative_mentions)}" }
                            td {
                                Badge { tone: score_tone(row.avg_sentiment_score), "{format_score(row.avg_sentiment_score)}" }
                            }
                            td { class: "text-end", "{format_decimal(row.avg_engagement)}" }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analytics_error_messages() {
        assert!(analytics_error_message(&ApiError::NotFound).starts_with("Analytics endpoint not found"));
        assert_eq!(
            analytics_error_message(&ApiError::Network("refused".into())),
            "Error loading analytics data. Please try again."
        );
        assert_eq!(
            analytics_error_message(&ApiError::Unauthorized(Some("jwt expired".into()))),
            "Session expired. Please login again."
        );
    }

    #[test]
    fn test_failed_reload_drops_previous_overview() {
        let (data, message) = overview_outcome(Ok(Overview::default()));
        assert!(data.is_some());
        assert!(message.is_none());

        let (data, message) = overview_outcome(Err(ApiError::Network("refused".into())));
        assert!(data.is_none());
        assert_eq!(message.as_deref(), Some("Error loading analytics data. Please try again."));
    }
}
