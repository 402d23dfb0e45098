use dioxus::prelude::*;

/// Centered spinning ring, shown while the session check runs.
#[component]
pub fn Spinner(#[props(default)] label: String) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "spinner-wrapper", role: "status",
            div { class: "spinner" }
            if !label.is_empty() {
                p { class: "spinner-label", "{label}" }
            }
        }
    }
}
