use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Success,
    Danger,
    OutlinePrimary,
    OutlineSecondary,
    OutlineSuccess,
    OutlineInfo,
    OutlineWarning,
    OutlineDanger,
    Link,
}

impl ButtonVariant {
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Secondary => "btn-secondary",
            ButtonVariant::Success => "btn-success",
            ButtonVariant::Danger => "btn-danger",
            ButtonVariant::OutlinePrimary => "btn-outline-primary",
            ButtonVariant::OutlineSecondary => "btn-outline-secondary",
            ButtonVariant::OutlineSuccess => "btn-outline-success",
            ButtonVariant::OutlineInfo => "btn-outline-info",
            ButtonVariant::OutlineWarning => "btn-outline-warning",
            ButtonVariant::OutlineDanger => "btn-outline-danger",
            ButtonVariant::Link => "btn-link",
        }
    }
}

#[component]
pub fn Button(
    #[props(default)] variant: ButtonVariant,
    #[props(default)] small: bool,
    #[props(default = "button".to_string())] r#type: String,
    #[props(default)] disabled: bool,
    #[props(default)] class: String,
    #[props(default)] onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    let size = if small { "btn-sm" } else { "" };
    let kind = r#type;
    rsx! {
        button {
            class: "btn {variant.class()} {size} {class}",
            r#type: kind,
            disabled,
            onclick: move |evt| onclick.call(evt),
            {children}
        }
    }
}
