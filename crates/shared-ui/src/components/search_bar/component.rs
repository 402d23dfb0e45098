use dioxus::prelude::*;

/// Filter row: search input, selects and action buttons side by side.
#[component]
pub fn SearchBar(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "search-bar",
            {children}
        }
    }
}

/// Free-text search box. Children render as the leading icon.
#[component]
pub fn SearchInput(
    #[props(default)] value: String,
    #[props(default)] on_input: EventHandler<FormEvent>,
    #[props(default = "Search...".to_string())] placeholder: String,
    children: Element,
) -> Element {
    rsx! {
        div { class: "search-input",
            span { class: "search-input-icon", {children} }
            input {
                r#type: "text",
                value: value,
                placeholder: placeholder,
                oninput: move |evt| on_input.call(evt),
            }
        }
    }
}
