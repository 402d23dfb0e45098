use dioxus::prelude::*;
use dioxus_primitives::dialog as prim;

#[component]
pub fn DialogRoot(mut props: prim::DialogRootProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "modal-overlay", None, false));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::DialogRoot { ..props }
    }
}

#[component]
pub fn DialogContent(mut props: prim::DialogContentProps) -> Element {
    if props.class.is_none() {
        props.class = Some("modal-content".to_string());
    }

    rsx! {
        prim::DialogContent { ..props }
    }
}

#[component]
pub fn DialogTitle(mut props: prim::DialogTitleProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "modal-title", None, false));

    rsx! {
        prim::DialogTitle { ..props }
    }
}

#[component]
pub fn DialogDescription(mut props: prim::DialogDescriptionProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "modal-description", None, false));

    rsx! {
        prim::DialogDescription { ..props }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ModalSize {
    #[default]
    Md,
    Lg,
}

impl ModalSize {
    fn class(&self) -> &'static str {
        match self {
            ModalSize::Md => "md",
            ModalSize::Lg => "lg",
        }
    }
}

/// Controlled modal with a title bar and close button. Escape, the overlay
/// and the close button all call `on_close`.
#[component]
pub fn Modal(
    open: bool,
    on_close: EventHandler<()>,
    title: String,
    #[props(default)] description: String,
    #[props(default)] size: ModalSize,
    children: Element,
) -> Element {
    rsx! {
        DialogRoot {
            open: open,
            on_open_change: move |v: bool| {
                if !v {
                    on_close.call(());
                }
            },
            DialogContent {
                div { class: "modal-frame", "data-size": size.class(),
                    div { class: "modal-header",
                        DialogTitle { "{title}" }
                        button {
                            class: "modal-close",
                            r#type: "button",
                            "aria-label": "Close",
                            onclick: move |_| on_close.call(()),
                            "×"
                        }
                    }
                    if !description.is_empty() {
                        DialogDescription { "{description}" }
                    }
                    div { class: "modal-body", {children} }
                }
            }
        }
    }
}
