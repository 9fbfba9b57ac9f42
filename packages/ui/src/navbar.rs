use dioxus::prelude::*;

use crate::auth::{logout, use_auth};
use crate::components::{Badge, Spinner, Tone};
use crate::icons::{FaChartLine, FaGear, FaRightFromBracket, FaUser};
use crate::Icon;

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Top-level destinations. The web router maps each to a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTarget {
    Dashboard,
    Mentions,
    Analytics,
    Settings,
    Login,
    Register,
}

impl NavTarget {
    pub fn path(&self) -> &'static str {
        match self {
            NavTarget::Dashboard => "/",
            NavTarget::Mentions => "/mentions",
            NavTarget::Analytics => "/analytics",
            NavTarget::Settings => "/settings",
            NavTarget::Login => "/login",
            NavTarget::Register => "/register",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            NavTarget::Dashboard => "Dashboard",
            NavTarget::Mentions => "Mentions",
            NavTarget::Analytics => "Analytics",
            NavTarget::Settings => "Settings",
            NavTarget::Login => "Login",
            NavTarget::Register => "Register",
        }
    }
}

#[component]
fn NavLink(
    target: NavTarget,
    active: bool,
    on_navigate: EventHandler<NavTarget>,
    #[props(default)] class: String,
    children: Element,
) -> Element {
    let active = if active { "active" } else { "" };
    rsx! {
        a {
            class: "nav-link {active} {class}",
            href: target.path(),
            onclick: move |evt: MouseEvent| {
                evt.prevent_default();
                on_navigate.call(target);
            },
            {children}
        }
    }
}

#[component]
pub fn Navbar(#[props(!optional)] active: Option<NavTarget>, on_navigate: EventHandler<NavTarget>) -> Element {
    let auth = use_auth();
    let mut menu_open = use_signal(|| false);
    let state = auth();

    let go = use_callback(move |target: NavTarget| {
        menu_open.set(false);
        on_navigate.call(target);
    });

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        nav {
            class: "navbar navbar-expand-lg navbar-dark bg-primary shadow-sm",
            div {
                class: "container-fluid",
                a {
                    class: "navbar-brand d-flex align-items-center gap-2",
                    href: "/",
                    onclick: move |evt: MouseEvent| {
                        evt.prevent_default();
                        go.call(NavTarget::Dashboard);
                    },
                    Icon { icon: FaChartLine, width: 20, height: 20 }
                    "Brand Mention Tracker"
                    if cfg!(debug_assertions) {
                        Badge { tone: Tone::Warning, class: "ms-1", "DEV" }
                    }
                }

                if state.loading {
                    div { class: "ms-auto text-white", Spinner { small: true } }
                } else if let Some(user) = state.user.clone() {
                    ul {
                        class: "navbar-nav me-auto",
                        li {
                            class: "nav-item",
                            NavLink { target: NavTarget::Dashboard, active: active == Some(NavTarget::Dashboard), on_navigate: go, "Dashboard" }
                        }
                        li {
                            class: "nav-item",
                            NavLink {
                                target: NavTarget::Mentions,
                                active: active == Some(NavTarget::Mentions),
                                on_navigate: go,
                                "Mentions"
                                if user.unread_mentions > 0 {
                                    Badge { tone: Tone::Danger, pill: true, class: "ms-1", "{user.unread_mentions}" }
                                }
                            }
                        }
                        li {
                            class: "nav-item",
                            NavLink { target: NavTarget::Analytics, active: active == Some(NavTarget::Analytics), on_navigate: go, "Analytics" }
                        }
                        li {
                            class: "nav-item",
                            NavLink { target: NavTarget::Settings, active: active == Some(NavTarget::Settings), on_navigate: go, "Settings" }
                        }
                    }
                    div {
                        class: "d-flex align-items-center gap-3",
                        if user.is_trial_active {
                            Badge { tone: Tone::Warning, "Trial: {user.trial_days_left} days left" }
                        }
                        div {
                            class: "dropdown",
                            button {
                                class: "btn btn-link nav-link text-white dropdown-toggle d-flex align-items-center gap-2",
                                r#type: "button",
                                onclick: move |_| menu_open.toggle(),
                                Icon { icon: FaUser, width: 14, height: 14 }
                                "{user.display_name()}"
                                if user.is_admin() {
                                    Badge { tone: Tone::Danger, "Admin" }
                                }
                            }
                            if menu_open() {
                                div {
                                    class: "dropdown-menu dropdown-menu-end show",
                                    div {
                                        class: "dropdown-header",
                                        div { class: "fw-semibold", "{user.email}" }
                                        if let Some(company) = user.company.as_ref().filter(|c| !c.is_empty()) {
                                            small { class: "text-muted", "{company}" }
                                        }
                                    }
                                    hr { class: "dropdown-divider" }
                                    button {
                                        class: "dropdown-item d-flex align-items-center gap-2",
                                        onclick: move |_| go.call(NavTarget::Settings),
                                        Icon { icon: FaGear, width: 14, height: 14 }
                                        "Settings"
                                    }
                                    hr { class: "dropdown-divider" }
                                    button {
                                        class: "dropdown-item d-flex align-items-center gap-2",
                                        onclick: move |_| {
                                            logout(auth);
                                            go.call(NavTarget::Login);
                                        },
                                        Icon { icon: FaRightFromBracket, width: 14, height: 14 }
                                        "Logout"
                                    }
                                }
                            }
                        }
                    }
                } else {
                    ul {
                        class: "navbar-nav ms-auto",
                        li {
                            class: "nav-item",
                            NavLink { target: NavTarget::Login, active: active == Some(NavTarget::Login), on_navigate: go, "Login" }
                        }
                        li {
                            class: "nav-item",
                            NavLink { target: NavTarget::Register, active: active == Some(NavTarget::Register), on_navigate: go, "Register" }
                        }
                    }
                }
            }
        }
    }
}
