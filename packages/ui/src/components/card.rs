use dioxus::prelude::*;

use super::Tone;

#[component]
pub fn Card(
    title: Option<String>,
    header_extra: Option<Element>,
    #[props(default)] class: String,
    #[props(default)] body_class: String,
    children: Element,
) -> Element {
    rsx! {
        div {
            class: "card {class}",
            if title.is_some() || header_extra.is_some() {
                div {
                    class: "card-header bg-transparent d-flex justify-content-between align-items-center",
                    if let Some(title) = title {
                        h5 { class: "mb-0", "{title}" }
                    }
                    {header_extra}
                }
            }
            div {
                class: "card-body {body_class}",
                {children}
            }
        }
    }
}

/// Summary tile: a caption, a big number, an optional footnote and an icon.
#[component]
pub fn StatCard(
    title: String,
    value: String,
    tone: Option<Tone>,
    footnote: Option<Element>,
    icon: Element,
) -> Element {
    let value_class = tone
        .map(|t| format!("text-{}", t.as_str()))
        .unwrap_or_default();
    let icon_tone = tone.unwrap_or(Tone::Primary).as_str();
    rsx! {
        div {
            class: "card h-100 border-0 shadow-sm",
            div {
                class: "card-body d-flex justify-content-between align-items-start",
                div {
                    h6 { class: "card-title text-muted mb-2", "{title}" }
                    h2 { class: "mb-0 {value_class}", "{value}" }
                    {footnote}
                }
                div {
                    class: "stat-icon bg-{icon_tone} bg-opacity-10 text-{icon_tone} p-3 rounded",
                    {icon}
                }
            }
        }
    }
}
