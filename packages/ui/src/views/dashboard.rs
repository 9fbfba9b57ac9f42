use chrono::Utc;
use dioxus::prelude::*;

use api::{Mention, MentionQuery, Overview, Period};

use crate::auth::{handle_api_error, use_auth};
use crate::charts::{sentiment_doughnut, source_bar, timeline_line, Chart, SourcePalette};
use crate::components::{
    Alert, Button, ButtonVariant, Card, Feedback, LoadingState, ProgressBar, Spinner, StatCard, Tone,
};
use crate::format::{format_count, format_decimal, growth_text};
use crate::icons::{
    FaArrowDown, FaArrowUp, FaArrowsRotate, FaChartLine, FaComments, FaDownload, FaFaceFrown,
    FaFaceSmile, FaGear, FaMagnifyingGlass,
};
use super::MentionCard;
use crate::navbar::NavTarget;
use crate::platform::{local_offset, sleep_ms};
use crate::session::{client_config, make_client};
use crate::Icon;

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

#[component]
pub fn DashboardView(on_navigate: EventHandler<NavTarget>) -> Element {
    let auth = use_auth();
    let config = client_config();
    let mut overview = use_signal(|| Option::<Overview>::None);
    let mut recent = use_signal(Vec::<Mention>::new);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);
    let mut collecting = use_signal(|| false);
    let mut feedback = use_signal(|| Option::<Feedback>::None);
    let mut reload = use_signal(|| 0u32);

    // Overview and recent mentions load together; bumping `reload` refetches both
    let _loader = use_resource(move || async move {
        let _ = reload();
        loading.set(true);
        let client = make_client();
        let query = MentionQuery::recent(config.dashboard.recent_mentions);
        let (summary, mentions) = futures::join!(
            client.overview(Period::Day, None),
            client.list_mentions(&query)
        );
        match summary {
            Ok(data) => {
                overview.set(Some(data));
                error.set(None);
            }
            Err(e) => error.set(Some(handle_api_error(auth, &e))),
        }
        match mentions {
            Ok(page) => recent.set(page.mentions),
            Err(e) => tracing::warn!("Failed to load recent mentions: {}", e),
        }
        loading.set(false);
    });

    let collect = move |_: MouseEvent| {
        spawn(async move {
            collecting.set(true);
            feedback.set(None);
            let result = make_client().collect_mentions().await;
            collecting.set(false);
            match result {
                Ok(collected) => {
                    let message = collected
                        .message
                        .unwrap_or_else(|| "Mention collection completed".to_string());
                    let notice = match collected.result {
                        Some(run) => Feedback::success(message).with_detail(run.summary()),
                        None => Feedback::success(message),
                    };
                    feedback.set(Some(notice));
                    sleep_ms(config.dashboard.refresh_delay_ms).await;
                    *reload.write() += 1;
                }
                Err(e) => {
                    let message = handle_api_error(auth, &e);
                    feedback.set(Some(Feedback::danger(format!("Collection failed: {}", message))));
                }
            }
        });
    };

    let user = auth().user;
    if loading() && overview().is_none() {
        return rsx! {
            LoadingState { message: "Loading dashboard..." }
        };
    }

    let offset = local_offset(Utc::now());

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "dashboard",
            div {
                class: "d-flex justify-content-between align-items-center flex-wrap gap-2 mb-4",
                div {
                    h1 { class: "h3 mb-1", "Dashboard" }
                    if let Some(user) = user.as_ref() {
                        p { class: "text-muted mb-0", "Welcome back, {user.display_name()}!" }
                    }
                }
                div {
                    class: "d-flex gap-2",
                    Button {
                        variant: ButtonVariant::OutlinePrimary,
                        disabled: loading(),
                        onclick: move |_| *reload.write() += 1,
                        Icon { icon: FaArrowsRotate, width: 14, height: 14 }
                        " Refresh"
                    }
                    Button {
                        variant: ButtonVariant::Primary,
                        disabled: collecting(),
                        onclick: collect,
                        if collecting() {
                            Spinner { small: true, class: "me-1" }
                            "Collecting..."
                        } else {
                            Icon { icon: FaDownload, width: 14, height: 14 }
                            " Collect New Mentions"
                        }
                    }
                }
            }

            if let Some(notice) = feedback() {
                Alert {
                    tone: notice.tone,
                    dismissible: true,
                    on_close: move |_| feedback.set(None),
                    strong { "{notice.message}" }
                    if let Some(detail) = notice.detail {
                        div { class: "small mt-1", "{detail}" }
                    }
                }
            }
            if let Some(message) = error() {
                Alert { tone: Tone::Danger, "{message}" }
            }

            if let Some(user) = user.as_ref().filter(|u| u.is_trial_active) {
                Alert {
                    tone: Tone::Info,
                    div {
                        class: "d-flex justify-content-between align-items-center flex-wrap gap-2",
                        div {
                            strong { "Free Trial Active: " }
                            "{user.trial_days_left} days remaining"
                        }
                        Button {
                            variant: ButtonVariant::OutlinePrimary,
                            small: true,
                            onclick: move |_| on_navigate.call(NavTarget::Settings),
                            "Upgrade Now"
                        }
                    }
                    ProgressBar { class: "mt-2", value: user.trial_progress(), tone: Tone::Info }
                }
            }

            if let Some(data) = overview() {
                div {
                    class: "row g-3 mb-4",
                    div {
                        class: "col-md-3",
                        StatCard {
                            title: "Total Mentions",
                            value: format_count(data.summary.total_mentions),
                            icon: rsx! { Icon { icon: FaComments, width: 24, height: 24 } },
                        }
                    }
                    div {
                        class: "col-md-3",
                        StatCard {
                            title: "Last 24 Hours",
                            value: format_count(data.summary.period_mentions),
                            tone: Tone::Info,
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
                                small { class: "text-muted", "{format_decimal(data.sentiment.positive.percentage)}% of mentions" }
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
                                small { class: "text-muted", "{format_decimal(data.sentiment.negative.percentage)}% of mentions" }
                            },
                            icon: rsx! { Icon { icon: FaFaceFrown, width: 24, height: 24 } },
                        }
                    }
                }

                div {
                    class: "row g-3 mb-4",
                    div {
                        class: "col-lg-4",
                        Card {
                            title: "Sentiment Distribution",
                            class: "h-100",
                            Chart { id: "dashboard-sentiment", config: sentiment_doughnut(&data.sentiment) }
                        }
                    }
                    div {
                        class: "col-lg-4",
                        Card {
                            title: "Mentions by Source",
                            class: "h-100",
                            if data.sources.is_empty() {
                                p { class: "text-muted text-center my-5", "No source data yet" }
                            } else {
                                Chart { id: "dashboard-sources", config: source_bar(&data.sources, SourcePalette::PerSource) }
                            }
                        }
                    }
                    div {
                        class: "col-lg-4",
                        Card {
                            title: "Top Brands",
                            class: "h-100",
                            TopBrands { overview: data.clone() }
                        }
                    }
                }

                div {
                    class: "row g-3 mb-4",
                    div {
                        class: "col-12",
                        Card {
                            title: "Mentions Timeline (24h)",
                            if data.timeline.is_empty() {
                                p { class: "text-muted text-center my-5", "No mentions in the last 24 hours" }
                            } else {
                                Chart {
                                    id: "dashboard-timeline",
                                    config: timeline_line(&data.timeline, Period::Day, offset, false),
                                    height: 300,
                                }
                            }
                        }
                    }
                }
            }

            div {
                class: "row g-3",
                div {
                    class: "col-lg-8",
                    Card {
                        title: "Recent Mentions",
                        header_extra: rsx! {
                            Button {
                                variant: ButtonVariant::OutlinePrimary,
                                small: true,
                                onclick: move |_| on_navigate.call(NavTarget::Mentions),
                                "View All"
                            }
                        },
                        if recent().is_empty() {
                            div {
                                class: "text-center text-muted py-4",
                                p { "No mentions yet." }
                                p { class: "small mb-0", "Click \"Collect New Mentions\" to fetch the latest posts about your brands." }
                            }
                        } else {
                            for mention in recent() {
                                MentionCard { key: "{mention.id}", mention: mention.clone(), compact: true }
                            }
                        }
                    }
                }
                div {
                    class: "col-lg-4",
                    Card {
                        title: "Quick Actions",
                        div {
                            class: "d-grid gap-2",
                            Button {
                                variant: ButtonVariant::OutlinePrimary,
                                onclick: move |_| on_navigate.call(NavTarget::Mentions),
                                Icon { icon: FaMagnifyingGlass, width: 14, height: 14 }
                                " Browse Mentions"
                            }
                            Button {
                                variant: ButtonVariant::OutlineInfo,
                                onclick: move |_| on_navigate.call(NavTarget::Analytics),
                                Icon { icon: FaChartLine, width: 14, height: 14 }
                                " View Analytics"
                            }
                            Button {
                                variant: ButtonVariant::OutlineSecondary,
                                onclick: move |_| on_navigate.call(NavTarget::Settings),
                                Icon { icon: FaGear, width: 14, height: 14 }
                                " Manage Brands"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn TopBrands(overview: Overview) -> Element {
    let brands: Vec<_> = overview.top_brands.iter().take(5).cloned().collect();
    let max = brands.iter().map(|b| b.count).max().unwrap_or(0).max(1);

    if brands.is_empty() {
        return rsx! {
            p { class: "text-muted text-center my-5", "No brand activity yet" }
        };
    }

    rsx! {
        ul {
            class: "list-unstyled mb-0",
            for brand in brands {
                li {
                    key: "{brand.brand}",
                    class: "mb-3",
                    div {
                        class: "d-flex justify-content-between",
                        span { class: "fw-semibold", "{brand.brand}" }
                        span { class: "text-muted", "{format_count(brand.count)}" }
                    }
                    ProgressBar { value: brand.count as f64 / max as f64 * 100.0 }
                    if let (Some(positive), Some(negative)) = (brand.positive, brand.negative) {
                        small {
                            class: "text-muted",
                            span { class: "text-success", "{positive} positive" }
                            " / "
                            span { class: "text-danger", "{negative} negative" }
                        }
                    }
                }
            }
        }
    }
}
