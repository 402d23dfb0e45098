use dioxus::prelude::*;
use shared_types::ALL_CATEGORIES;
use shared_ui::{Card, CardContent};

use crate::format_helpers::format_count;

/// One tile per category linking to its brands page.
#[component]
pub fn CategoryOverview() -> Element {
    rsx! {
        div { class: "category-overview",
            for category in ALL_CATEGORIES.iter().copied() {
                Link { key: "{category.id()}", to: category.brands_path(), class: "category-tile-link",
                    Card { class: "category-tile",
                        CardContent {
                            p { class: "category-tile-name", "{category.name()}" }
                            p { class: "category-tile-subtitle", "{category.name_en()}" }
                            p { class: "category-tile-count",
                                "{format_count(u64::from(category.listing_count()))}"
                                span { " бараа" }
                            }
                        }
                    }
                }
            }
        }
    }
}
