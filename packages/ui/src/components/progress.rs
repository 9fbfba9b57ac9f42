use dioxus::prelude::*;

use super::Tone;

#[component]
pub fn ProgressBar(
    /// Fill in percent; clamped to 0..=100.
    value: f64,
    #[props(default = Tone::Primary)] tone: Tone,
    #[props(default = 6)] height: u32,
    #[props(default)] class: String,
) -> Element {
    let width = value.clamp(0.0, 100.0);
    rsx! {
        div {
            class: "progress {class}",
            style: "height: {height}px;",
            role: "progressbar",
            aria_valuenow: "{width}",
            aria_valuemin: "0",
            aria_valuemax: "100",
            div {
                class: "progress-bar bg-{tone.as_str()}",
                style: "width: {width}%;",
            }
        }
    }
}
