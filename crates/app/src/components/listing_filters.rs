use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdSearch;
use dioxus_free_icons::Icon;
use shared_types::{Category, ListingView, ProductFilter, ALL};
use shared_ui::{Button, ButtonVariant, FormSelect, SearchBar, SearchInput};

/// Search, status and category controls bound to one [`ProductFilter`].
#[component]
pub fn ListingFilters(
    view: ListingView,
    mut filter: Signal<ProductFilter>,
    categories: Vec<Category>,
) -> Element {
    let current = filter();
    let placeholder = match view {
        ListingView::AuctionProducts => "Search by name, ID, seller or winner...",
        ListingView::MyProducts => "Search by name, ID or description...",
    };

    rsx! {
        SearchBar {
            SearchInput {
                value: current.search.clone(),
                placeholder: placeholder.to_string(),
                on_input: move |e: FormEvent| filter.write().search = e.value(),
                Icon::<LdSearch> { icon: LdSearch, width: 18, height: 18 }
            }
            FormSelect {
                value: current.status.clone(),
                onchange: move |e: Event<FormData>| filter.write().status = e.value(),
                option { value: ALL, "All Status" }
                for status in view.status_options().iter() {
                    option { key: "{status.as_str()}", value: status.as_str(), "{status.display_name()}" }
                }
            }
            FormSelect {
                value: current.category.clone(),
                onchange: move |e: Event<FormData>| filter.write().category = e.value(),
                option { value: ALL, "All Categories" }
                for category in categories {
                    option { key: "{category.id()}", value: category.name(), "{category.name()}" }
                }
            }
            if !current.is_cleared() {
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: move |_| filter.write().clear(),
                    "Clear Filters"
                }
            }
        }
    }
}
