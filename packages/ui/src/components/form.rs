use dioxus::prelude::*;

/// Label, control and validation feedback for one form field.
#[component]
pub fn Field(
    label: String,
    #[props(default)] html_for: String,
    /// Validation message; empty when the field is valid.
    #[props(default)] feedback: String,
    #[props(default)] hint: String,
    #[props(default = "mb-3".to_string())] class: String,
    children: Element,
) -> Element {
    rsx! {
        div {
            class: "{class}",
            label { class: "form-label fw-semibold", r#for: "{html_for}", "{label}" }
            {children}
            if !feedback.is_empty() {
                div { class: "invalid-feedback d-block", "{feedback}" }
            }
            if !hint.is_empty() {
                div { class: "form-text", "{hint}" }
            }
        }
    }
}

#[component]
pub fn Input(
    #[props(default)] id: String,
    #[props(default = "text".to_string())] r#type: String,
    #[props(default)] placeholder: String,
    value: String,
    #[props(default)] invalid: bool,
    #[props(default)] disabled: bool,
    #[props(default)] class: String,
    oninput: EventHandler<FormEvent>,
    #[props(default)] onkeydown: EventHandler<KeyboardEvent>,
) -> Element {
    let invalid = if invalid { "is-invalid" } else { "" };
    let kind = r#type;
    rsx! {
        input {
            id: "{id}",
            class: "form-control {invalid} {class}",
            r#type: kind,
            placeholder: "{placeholder}",
            value: "{value}",
            disabled,
            oninput: move |evt| oninput.call(evt),
            onkeydown: move |evt| onkeydown.call(evt),
        }
    }
}

/// `<select>` over `(value, label)` pairs, with an optional leading "all" option.
#[component]
pub fn Select(
    #[props(default)] id: String,
    value: String,
    options: Vec<(String, String)>,
    empty_label: Option<String>,
    #[props(default)] class: String,
    onchange: EventHandler<FormEvent>,
) -> Element {
    rsx! {
        select {
            id: "{id}",
            class: "form-select {class}",
            value: "{value}",
            onchange: move |evt| onchange.call(evt),
            if let Some(label) = empty_label {
                option { value: "", selected: value.is_empty(), "{label}" }
            }
            for (option_value, label) in options {
                option {
                    key: "{option_value}",
                    selected: option_value == value,
                    value: "{option_value}",
                    "{label}"
                }
            }
        }
    }
}

/// Bootstrap form switch bound to a boolean.
#[component]
pub fn Switch(
    id: String,
    label: String,
    checked: bool,
    description: Option<String>,
    onchange: EventHandler<bool>,
) -> Element {
    rsx! {
        div {
            class: "form-check form-switch mb-3",
            input {
                id: "{id}",
                class: "form-check-input",
                r#type: "checkbox",
                role: "switch",
                checked,
                onchange: move |evt: FormEvent| onchange.call(evt.checked()),
            }
            label { class: "form-check-label fw-semibold", r#for: "{id}", "{label}" }
            if let Some(description) = description {
                div { class: "form-text mt-0", "{description}" }
            }
        }
    }
}
