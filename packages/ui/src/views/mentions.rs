use dioxus::prelude::*;

use api::{FilterField, Mention, MentionQuery, Pagination, Sentiment};

use super::MentionCard;
use crate::auth::{handle_api_error, use_auth};
use crate::components::{Alert, Button, ButtonVariant, Card, LoadingState, Select, Tone};
use crate::format::format_count;
use crate::icons::{FaArrowsRotate, FaFilterCircleXmark};
use crate::presentation::{options, MENTION_SOURCES};
use crate::session::{client_config, make_client, make_session};
use crate::Icon;

#[component]
pub fn MentionsView() -> Element {
    let auth = use_auth();
    let mut query = use_signal(|| MentionQuery::new(client_config().mentions.page_size));
    let mut mentions = use_signal(Vec::<Mention>::new);
    let mut pagination = use_signal(|| Option::<Pagination>::None);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);
    let mut retry = use_signal(|| 0u32);

    // Refetch whenever the query changes
    let _loader = use_resource(move || async move {
        let current = query();
        let _ = retry();
        if !make_session().has_token() {
            mentions.set(Vec::new());
            pagination.set(None);
            loading.set(false);
            return;
        }
        loading.set(true);
        match make_client().list_mentions(&current).await {
            Ok(page) => {
                tracing::debug!("Loaded {} mentions (page {})", page.mentions.len(), current.page);
                mentions.set(page.mentions);
                pagination.set(page.pagination);
                error.set(None);
            }
            Err(e) => {
                mentions.set(Vec::new());
                pagination.set(None);
                error.set(Some(handle_api_error(auth, &e)));
            }
        }
        loading.set(false);
    });

    let brand_options: Vec<(String, String)> = auth()
        .user
        .map(|u| u.brand_names())
        .unwrap_or_default()
        .into_iter()
        .map(|name| (name.clone(), name))
        .collect();
    let sentiment_options: Vec<(String, String)> = Sentiment::ALL
        .iter()
        .map(|s| (s.as_str().to_string(), s.label().to_string()))
        .collect();
    let current = query();

    rsx! {
        div {
            class: "mentions",
            div {
                class: "d-flex justify-content-between align-items-center mb-4",
                div {
                    h1 { class: "h3 mb-1", "Mentions" }
                    p { class: "text-muted mb-0", "Everything the tracker found about your brands" }
                }
                if let Some(page) = pagination() {
                    span { class: "text-muted", "{format_count(page.total)} total" }
                }
            }

            Card {
                class: "mb-4",
                div {
                    class: "row g-3 align-items-end",
                    div {
                        class: "col-md-3",
                        label { class: "form-label", r#for: "filter-brand", "Brand" }
                        Select {
                            id: "filter-brand",
                            value: current.brand.clone(),
                            options: brand_options,
                            empty_label: "All Brands",
                            onchange: move |evt: FormEvent| query.write().set_filter(FilterField::Brand, evt.value()),
                        }
                    }
                    div {
                        class: "col-md-3",
                        label { class: "form-label", r#for: "filter-sentiment", "Sentiment" }
                        Select {
                            id: "filter-sentiment",
                            value: current.sentiment.clone(),
                            options: sentiment_options,
                            empty_label: "All Sentiments",
                            onchange: move |evt: FormEvent| query.write().set_filter(FilterField::Sentiment, evt.value()),
                        }
                    }
                    div {
                        class: "col-md-3",
                        label { class: "form-label", r#for: "filter-source", "Source" }
                        Select {
                            id: "filter-source",
                            value: current.source.clone(),
                            options: options(MENTION_SOURCES),
                            empty_label: "All Sources",
                            onchange: move |evt: FormEvent| query.write().set_filter(FilterField::Source, evt.value()),
                        }
                    }
                    div {
                        class: "col-md-3 d-grid",
                        Button {
                            variant: ButtonVariant::OutlineSecondary,
                            disabled: !current.has_filters(),
                            onclick: move |_| query.write().clear_filters(),
                            Icon { icon: FaFilterCircleXmark, width: 14, height: 14 }
                            " Clear Filters"
                        }
                    }
                }
            }

            if let Some(message) = error() {
                Alert { tone: Tone::Danger, "{message}" }
            }

            if loading() {
                LoadingState { message: "Loading mentions..." }
            } else if mentions().is_empty() {
                div {
                    class: "text-center py-5",
                    h5 { "No mentions found" }
                    p {
                        class: "text-muted",
                        if current.has_filters() {
                            "Try adjusting your filters."
                        } else {
                            "Mentions will appear here once they have been collected."
                        }
                    }
                    Button {
                        variant: ButtonVariant::OutlinePrimary,
                        onclick: move |_| *retry.write() += 1,
                        Icon { icon: FaArrowsRotate, width: 14, height: 14 }
                        " Retry"
                    }
                }
            } else {
                for mention in mentions() {
                    MentionCard { key: "{mention.id}", mention: mention.clone() }
                }
            }

            if let Some(page) = pagination().filter(|p| p.pages > 1) {
                nav {
                    class: "d-flex justify-content-between align-items-center mt-3",
                    Button {
                        variant: ButtonVariant::OutlinePrimary,
                        disabled: !page.has_previous() || loading(),
                        onclick: move |_| {
                            let previous = query.peek().page.saturating_sub(1);
                            query.write().go_to_page(previous);
                        },
                        "Previous"
                    }
                    span { class: "text-muted", "Page {page.page} of {page.pages}" }
                    Button {
                        variant: ButtonVariant::OutlinePrimary,
                        disabled: !page.has_next() || loading(),
                        onclick: move |_| {
                            let next = query.peek().page + 1;
                            query.write().go_to_page(next);
                        },
                        "Next"
                    }
                }
            }
        }
    }
}
