use dioxus::prelude::*;

/// Title row at the top of every page, with a "Home / <page>" trail.
#[component]
pub fn PageHeader(
    title: String,
    #[props(default)] description: String,
    /// Buttons rendered on the right.
    children: Element,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "page-header",
            div { class: "page-header-text",
                h1 { class: "page-title", "{title}" }
                if !description.is_empty() {
                    p { class: "page-description", "{description}" }
                }
            }
            div { class: "page-header-side",
                nav { class: "page-breadcrumb", "aria-label": "Breadcrumb",
                    span { "Home" }
                    span { class: "page-breadcrumb-sep", "/" }
                    span { class: "page-breadcrumb-current", "{title}" }
                }
                div { class: "page-actions", {children} }
            }
        }
    }
}
