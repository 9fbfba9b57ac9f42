//! Route wrappers around the shared views.

use dioxus::prelude::*;

use ui::views::{AnalyticsView, DashboardView, MentionsView, SettingsView};
use ui::NavTarget;

use crate::Route;

#[component]
pub fn Dashboard() -> Element {
    let nav = use_navigator();
    rsx! {
        DashboardView {
            on_navigate: move |target: NavTarget| {
                nav.push(Route::from_target(target));
            },
        }
    }
}

#[component]
pub fn Mentions() -> Element {
    rsx! {
        MentionsView {}
    }
}

#[component]
pub fn Analytics() -> Element {
    rsx! {
        AnalyticsView {}
    }
}

#[component]
pub fn Settings() -> Element {
    let nav = use_navigator();
    rsx! {
        SettingsView {
            on_navigate: move |target: NavTarget| {
                nav.push(Route::from_target(target));
            },
        }
    }
}

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let nav = use_navigator();
    let path = format!("/{}", segments.join("/"));
    rsx! {
        div {
            class: "not-found",
            h1 { "404" }
            p { class: "text-muted", "There is nothing at {path}." }
            button {
                class: "btn btn-primary",
                onclick: move |_| {
                    nav.push(Route::Dashboard {});
                },
                "Back to Dashboard"
            }
        }
    }
}
