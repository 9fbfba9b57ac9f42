use dioxus::prelude::*;

#[component]
pub fn Spinner(
    #[props(default)] small: bool,
    #[props(default = "Loading...".to_string())] label: String,
    #[props(default)] class: String,
) -> Element {
    let size = if small { "spinner-border-sm" } else { "" };
    rsx! {
        div {
            class: "spinner-border {size} {class}",
            role: "status",
            span { class: "visually-hidden", "{label}" }
        }
    }
}

/// Full-width centred spinner with a caption, used while a view's first fetch runs.
#[component]
pub fn LoadingState(#[props(default = "Loading...".to_string())] message: String) -> Element {
    rsx! {
        div {
            class: "text-center py-5",
            Spinner { class: "text-primary spinner-lg", label: message.clone() }
            p { class: "mt-3 text-muted", "{message}" }
        }
    }
}
