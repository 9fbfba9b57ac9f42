use dioxus::prelude::*;

/// Bootstrap contextual colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tone {
    Primary,
    #[default]
    Secondary,
    Success,
    Danger,
    Warning,
    Info,
    Light,
    Dark,
}

impl Tone {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Primary => "primary",
            Tone::Secondary => "secondary",
            Tone::Success => "success",
            Tone::Danger => "danger",
            Tone::Warning => "warning",
            Tone::Info => "info",
            Tone::Light => "light",
            Tone::Dark => "dark",
        }
    }
}

#[component]
pub fn Badge(
    #[props(default)] tone: Tone,
    #[props(default)] pill: bool,
    #[props(default)] class: String,
    children: Element,
) -> Element {
    let pill = if pill { "rounded-pill" } else { "" };
    rsx! {
        span {
            class: "badge text-bg-{tone.as_str()} {pill} {class}",
            {children}
        }
    }
}
