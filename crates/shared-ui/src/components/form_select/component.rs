use dioxus::prelude::*;

/// Native `<select>` for filters and form fields.
///
/// Children should be `option { value: "...", "Label" }` elements. A
/// non-empty `placeholder` renders first as an empty-valued option, so an
/// untouched required field submits `""`.
#[component]
pub fn FormSelect(
    #[props(default)]
    value: String,
    #[props(default)]
    onchange: Option<EventHandler<Event<FormData>>>,
    #[props(default)]
    label: String,
    #[props(default)]
    placeholder: String,
    #[props(default = false)]
    required: bool,
    #[props(default = false)]
    disabled: bool,
    /// Validation message shown under the select.
    #[props(default)]
    error: Option<String>,
    children: Element,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "form-select-wrapper",
            if !label.is_empty() {
                label { class: "form-select-label",
                    "{label}"
                    if required {
                        span { class: "form-select-required", " *" }
                    }
                }
            }
            select {
                class: "form-select",
                "data-invalid": if error.is_some() { "true" } else { "false" },
                value: value,
                disabled: disabled,
                onchange: move |evt| {
                    if let Some(handler) = &onchange {
                        handler.call(evt);
                    }
                },
                if !placeholder.is_empty() {
                    option { value: "", "{placeholder}" }
                }
                {children}
            }
            if let Some(message) = error {
                p { class: "form-select-error", "{message}" }
            }
        }
    }
}
