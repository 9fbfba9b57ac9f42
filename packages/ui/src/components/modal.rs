use dioxus::prelude::*;

/// A centred dialog over a dimmed backdrop. Clicking the backdrop calls `on_close`.
#[component]
pub fn Modal(
    title: String,
    on_close: EventHandler<()>,
    footer: Option<Element>,
    children: Element,
) -> Element {
    rsx! {
        div {
            class: "modal-backdrop-custom",
            onclick: move |_| on_close.call(()),
            div {
                class: "modal-dialog modal-dialog-centered",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                div {
                    class: "modal-content",
                    div {
                        class: "modal-header",
                        h5 { class: "modal-title", "{title}" }
                        button {
                            r#type: "button",
                            class: "btn-close",
                            aria_label: "Close",
                            onclick: move |_| on_close.call(()),
                        }
                    }
                    div { class: "modal-body", {children} }
                    if let Some(footer) = footer {
                        div { class: "modal-footer", {footer} }
                    }
                }
            }
        }
    }
}
