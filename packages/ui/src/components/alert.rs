use dioxus::prelude::*;

use super::Tone;
use crate::icons::{FaCircleCheck, FaCircleInfo, FaTriangleExclamation};
use crate::Icon;

/// A message for the inline alert banner at the top of a view.
#[derive(Debug, Clone, PartialEq)]
pub struct Feedback {
    pub tone: Tone,
    pub message: String,
    pub detail: Option<String>,
}

impl Feedback {
    pub fn new(tone: Tone, message: impl Into<String>) -> Self {
        Self {
            tone,
            message: message.into(),
            detail: None,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(Tone::Success, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Tone::Warning, message)
    }

    pub fn danger(message: impl Into<String>) -> Self {
        Self::new(Tone::Danger, message)
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

#[component]
pub fn Alert(
    #[props(default = Tone::Info)] tone: Tone,
    #[props(default)] class: String,
    #[props(default)] dismissible: bool,
    #[props(default)] on_close: EventHandler<()>,
    children: Element,
) -> Element {
    let dismiss_class = if dismissible { "alert-dismissible" } else { "" };
    rsx! {
        div {
            class: "alert alert-{tone.as_str()} {dismiss_class} {class}",
            role: "alert",
            div {
                class: "d-flex align-items-start gap-2",
                span {
                    class: "flex-shrink-0",
                    match tone {
                        Tone::Success => rsx! { Icon { icon: FaCircleCheck, width: 16, height: 16 } },
                        Tone::Danger | Tone::Warning => rsx! { Icon { icon: FaTriangleExclamation, width: 16, height: 16 } },
                        _ => rsx! { Icon { icon: FaCircleInfo, width: 16, height: 16 } },
                    }
                }
                div { class: "flex-grow-1", {children} }
            }
            if dismissible {
                button {
                    r#type: "button",
                    class: "btn-close",
                    aria_label: "Close",
                    onclick: move |_| on_close.call(()),
                }
            }
        }
    }
}
