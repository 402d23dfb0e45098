use std::collections::HashMap;

use crate::components::SubcategorySelector;
use crate::config::app_config;
use crate::delay::sleep_ms;
use crate::format_helpers::format_count;
use dioxus::prelude::*;
use shared_types::{
    ProductDraft, VehicleField, VehicleInput, ALL_CATEGORIES, AVAILABLE_IMAGES,
    DURATION_OPTIONS, VEHICLE_FIELDS,
};
use shared_ui::{
    Button, ButtonVariant, Card, CardContent, CardHeader, CardTitle, FormSelect, Input,
    PageHeader, Textarea,
};

/// Listing form for pawnshop owners. Submission is simulated: after a short
/// delay the form resets and a success notice is shown.
#[component]
pub fn AddProduct() -> Element {
    let mut draft = use_signal(ProductDraft::default);
    let mut errors = use_signal(HashMap::<String, String>::new);
    let mut submitting = use_signal(|| false);
    let mut success = use_signal(|| false);

    let field_error = move |name: &str| errors.read().get(name).cloned();

    let handle_submit = move |evt: FormEvent| async move {
        evt.prevent_default();
        success.set(false);

        let snapshot = draft.read().clone();
        if let Err(e) = snapshot.check() {
            tracing::debug!(fields = e.field_errors.len(), "add product form rejected");
            errors.set(e.field_errors);
            return;
        }
        errors.set(HashMap::new());

        submitting.set(true);
        sleep_ms(app_config().forms.submit_delay_ms).await;
        tracing::info!(
            title = %snapshot.title,
            category = %snapshot.category,
            images = snapshot.images.len(),
            "product submitted"
        );
        draft.write().reset();
        submitting.set(false);
        success.set(true);
    };

    let current = draft.read().clone();
    let category = current.selected_category();

    rsx! {
        PageHeader { title: "Add Product", description: "Create a new auction listing" }

        if success() {
            div { class: "form-success", role: "status", "Product added successfully!" }
        }

        form { class: "add-product-form", onsubmit: handle_submit, novalidate: true,
            Card {
                CardHeader {
                    CardTitle { "Basic Information" }
                }
                CardContent {
                    div { class: "form-grid",
                        Input {
                            label: "Product Title",
                            required: true,
                            value: current.title.clone(),
                            placeholder: "e.g., TOYOTA LAND CRUISER 250",
                            error: field_error("title"),
                            on_input: move |e: FormEvent| draft.write().title = e.value(),
                        }
                        FormSelect {
                            label: "Category",
                            required: true,
                            value: current.category.clone(),
                            placeholder: "Select a category",
                            error: field_error("category"),
                            onchange: move |e: FormEvent| draft.write().set_category(&e.value()),
                            for cat in ALL_CATEGORIES.iter().copied() {
                                option { key: "{cat.id()}", value: cat.name(), "{cat.name()} ({cat.name_en()})" }
                            }
                        }
                    }

                    if let Some(category) = category {
                        SubcategorySelector {
                            key: "{category.id()}",
                            category: category,
                            selected: current.subcategory.clone(),
                            error: field_error("subcategory"),
                            on_select: move |id: String| draft.write().subcategory = id,
                        }
                    }

                    Textarea {
                        label: "Description",
                        required: true,
                        value: current.description.clone(),
                        placeholder: "Describe the item, its condition and history",
                        error: field_error("description"),
                        on_input: move |e: FormEvent| draft.write().description = e.value(),
                    }

                    Input {
                        label: "Your Price (MNT)",
                        required: true,
                        input_type: "number",
                        value: current.starting_price.clone(),
                        placeholder: "e.g., 48200000",
                        error: field_error("starting_price"),
                        on_input: move |e: FormEvent| draft.write().starting_price = e.value(),
                    }

                    if let Some(preview) = current.pricing() {
                        div { class: "pricing-preview",
                            div { class: "pricing-row",
                                span { "Your Price:" }
                                span { "{format_count(preview.price)} MNT" }
                            }
                            div { class: "pricing-row",
                                span { "System Fee (10%):" }
                                span { "+{format_count(preview.system_fee)} MNT" }
                            }
                            div { class: "pricing-row pricing-total",
                                span { "Auction Starting Price:" }
                                span { "{format_count(preview.auction_starting_price)} MNT" }
                            }
                            p { class: "pricing-note",
                                "The auction will start at 110% of your price (includes 10% system fee)"
                            }
                        }
                    }
                }
            }

            if current.is_vehicle() {
                VehicleSection { draft: draft, errors: errors }
            }

            Card {
                CardHeader {
                    CardTitle { "Auction Details" }
                }
                CardContent {
                    div { class: "form-grid",
                        FormSelect {
                            label: "Auction Duration (Days)",
                            value: current.auction_duration.clone(),
                            placeholder: "Select duration",
                            onchange: move |e: FormEvent| draft.write().auction_duration = e.value(),
                            for opt in DURATION_OPTIONS.iter() {
                                option { key: "{opt.value}", value: opt.value, "{opt.label}" }
                            }
                        }
                        Input {
                            label: "Auction Start Date",
                            input_type: "datetime-local",
                            value: current.auction_start.clone(),
                            on_input: move |e: FormEvent| draft.write().auction_start = e.value(),
                        }
                    }
                }
            }

            ImagePicker { draft: draft, error: field_error("images") }

            div { class: "form-actions",
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: move |_| navigator().go_back(),
                    "Cancel"
                }
                Button { button_type: "submit", disabled: submitting(),
                    if submitting() { "Adding..." } else { "Add Product" }
                }
            }
        }
    }
}

#[component]
fn VehicleSection(mut draft: Signal<ProductDraft>, errors: Signal<HashMap<String, String>>) -> Element {
    rsx! {
        Card {
            CardHeader {
                CardTitle { "Vehicle Specifications" }
            }
            CardContent {
                div { class: "form-grid",
                    for field in VEHICLE_FIELDS.iter().copied() {
                        VehicleFieldInput {
                            key: "{field.key}",
                            field: field,
                            value: draft.read().vehicle.get(field.key).unwrap_or_default().to_string(),
                            error: errors.read().get(field.key).cloned(),
                            on_change: move |value: String| {
                                draft.write().vehicle.set(field.key, value);
                            },
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn VehicleFieldInput(
    field: VehicleField,
    value: String,
    error: Option<String>,
    on_change: EventHandler<String>,
) -> Element {
    match field.input {
        VehicleInput::Text { placeholder } => rsx! {
            Input {
                label: field.label,
                required: field.required,
                value: value,
                placeholder: placeholder,
                error: error,
                on_input: move |e: FormEvent| on_change.call(e.value()),
            }
        },
        VehicleInput::Select(options) => rsx! {
            FormSelect {
                label: field.label,
                required: field.required,
                value: value,
                placeholder: "Сонгох",
                error: error,
                onchange: move |e: FormEvent| on_change.call(e.value()),
                for opt in options.iter() {
                    option { key: "{opt.value}", value: opt.value, "{opt.label}" }
                }
            }
        },
    }
}

/// Pick from the bundled demo images; selection order is kept.
#[component]
fn ImagePicker(mut draft: Signal<ProductDraft>, error: Option<String>) -> Element {
    let selected = draft.read().images.clone();

    rsx! {
        Card {
            CardHeader {
                CardTitle { "Product Images" }
            }
            CardContent {
                label { class: "input-label",
                    "Select Images"
                    span { class: "input-required", " *" }
                }
                p { class: "form-hint", "Choose from available product images" }
                div { class: "image-choices",
                    for path in AVAILABLE_IMAGES.iter().copied() {
                        button {
                            key: "{path}",
                            r#type: "button",
                            class: "image-choice",
                            "data-selected": if selected.iter().any(|p| p == path) { "true" } else { "false" },
                            onclick: move |_| draft.write().select_image(path),
                            img { src: path, alt: "" }
                        }
                    }
                }
                if let Some(message) = error {
                    p { class: "input-error", "{message}" }
                }

                if !selected.is_empty() {
                    p { class: "image-selected-count", "Selected Images ({selected.len()})" }
                    div { class: "image-selected",
                        for (index, path) in selected.into_iter().enumerate() {
                            div { key: "{path}", class: "image-selected-item",
                                img { src: "{path}", alt: "" }
                                button {
                                    r#type: "button",
                                    class: "image-remove",
                                    aria_label: "Remove image",
                                    onclick: move |_| draft.write().remove_image(index),
                                    "×"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

