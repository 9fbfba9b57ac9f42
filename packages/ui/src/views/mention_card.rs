use dioxus::prelude::*;

use api::Mention;

use crate::components::{Badge, Tone};
use crate::format::{capitalize, format_count, local_timestamp};
use crate::icons::{FaArrowUpRightFromSquare, FaComment, FaHeart, FaRetweet};
use crate::presentation::{sentiment_label, sentiment_tone, source_tone};
use crate::Icon;

/// One mention. `compact` is the dashboard's recent-mentions row; the full card adds
/// author, engagement breakdown, topics and the link to the original post.
#[component]
pub fn MentionCard(mention: Mention, #[props(default)] compact: bool) -> Element {
    let sentiment_text = sentiment_label(mention.sentiment);
    let timestamp = local_timestamp(&mention.timestamp);
    let engagement = mention.engagement.clone().unwrap_or_default();

    if compact {
        return rsx! {
            div {
                class: "mention-item border-bottom py-3",
                div {
                    class: "d-flex justify-content-between align-items-start mb-1",
                    div {
                        class: "d-flex gap-1 flex-wrap",
                        Badge { tone: source_tone(&mention.source), "{capitalize(&mention.source)}" }
                        Badge { tone: sentiment_tone(mention.sentiment), "{sentiment_text}" }
                        Badge { tone: Tone::Light, class: "border", "{mention.brand}" }
                    }
                    small { class: "text-muted text-nowrap ms-2", "{timestamp}" }
                }
                p { class: "mb-1 mention-content", "{mention.content}" }
                small { class: "text-muted", "Engagement: {format_count(mention.engagement_total())}" }
            }
        };
    }

    rsx! {
        div {
            class: "card mention-card mb-3",
            div {
                class: "card-body",
                div {
                    class: "d-flex justify-content-between align-items-start mb-2",
                    div {
                        class: "d-flex gap-1 flex-wrap",
                        Badge { tone: source_tone(&mention.source), "{capitalize(&mention.source)}" }
                        Badge { tone: sentiment_tone(mention.sentiment), "{sentiment_text}" }
                        Badge { tone: Tone::Light, class: "border", "{mention.brand}" }
                    }
                    small { class: "text-muted text-nowrap ms-2", "{timestamp}" }
                }
                p { class: "card-text mention-content", "{mention.content}" }
                div {
                    class: "d-flex justify-content-between align-items-center flex-wrap gap-2",
                    div {
                        class: "text-muted small d-flex gap-3 flex-wrap",
                        if let Some(author) = mention.author.as_ref().filter(|a| !a.is_empty()) {
                            span { "by {author}" }
                        }
                        span {
                            class: "d-flex align-items-center gap-1",
                            Icon { icon: FaHeart, width: 12, height: 12 }
                            "{format_count(engagement.likes)}"
                        }
                        span {
                            class: "d-flex align-items-center gap-1",
                            Icon { icon: FaRetweet, width: 12, height: 12 }
                            "{format_count(engagement.shares)}"
                        }
                        span {
                            class: "d-flex align-items-center gap-1",
                            Icon { icon: FaComment, width: 12, height: 12 }
                            "{format_count(engagement.comments)}"
                        }
                    }
                    if !mention.url.is_empty() {
                        a {
                            class: "btn btn-sm btn-outline-primary d-flex align-items-center gap-1",
                            href: "{mention.url}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            "View Original"
                            Icon { icon: FaArrowUpRightFromSquare, width: 12, height: 12 }
                        }
                    }
                }
                if !mention.topics.is_empty() {
                    div {
                        class: "mt-2 d-flex gap-1 flex-wrap",
                        for topic in mention.topics.iter() {
                            Badge { key: "{topic}", tone: Tone::Light, class: "border text-secondary", "#{topic}" }
                        }
                    }
                }
            }
        }
    }
}
