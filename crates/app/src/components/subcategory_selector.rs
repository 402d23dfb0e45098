use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdSearch;
use dioxus_free_icons::Icon;
use shared_types::{search_subcategories, subcategory_by_id, Category};
use shared_ui::SearchInput;

/// Searchable subcategory picker for the add-product form. Emits the
/// subcategory id.
#[component]
pub fn SubcategorySelector(
    category: Category,
    selected: String,
    on_select: EventHandler<String>,
    #[props(default)] error: Option<String>,
) -> Element {
    let mut term = use_signal(String::new);
    let matches = search_subcategories(category, &term.read());
    let chosen = subcategory_by_id(category, &selected);

    rsx! {
        div { class: "subcategory-selector",
            label { class: "input-label",
                "Дэд ангилал"
                span { class: "input-required", " *" }
            }
            if let Some(sub) = chosen {
                p { class: "subcategory-selected",
                    "Сонгосон: "
                    strong { "{sub.name}" }
                }
            }
            SearchInput {
                value: term(),
                placeholder: "Дэд ангилал хайх...",
                on_input: move |e: FormEvent| term.set(e.value()),
                Icon { icon: LdSearch, width: 16, height: 16 }
            }
            div { class: "subcategory-options",
                if matches.is_empty() {
                    p { class: "subcategory-empty", "Илэрц олдсонгүй" }
                }
                for sub in matches {
                    button {
                        key: "{sub.id}",
                        r#type: "button",
                        class: "subcategory-option",
                        "data-selected": if sub.id == selected { "true" } else { "false" },
                        onclick: move |_| on_select.call(sub.id.to_string()),
                        span { "{sub.name}" }
                        span { class: "subcategory-count", "{sub.count}" }
                    }
                }
            }
            if let Some(message) = error {
                p { class: "input-error", "{message}" }
            }
        }
    }
}
