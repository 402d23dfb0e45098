use crate::components::{ListingFilters, ProductCard, ProductDetailsModal};
use crate::routes::Route;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdPackage;
use dioxus_free_icons::Icon;
use shared_types::{
    distinct_categories, filter_products, my_products, ListingView, Product, ProductFilter,
};
use shared_ui::{Button, PageHeader};

/// The signed-in owner's listings. Every owner sees the same demo set.
#[component]
pub fn MyProducts() -> Element {
    let products = use_hook(my_products);
    let mut filter = use_signal(ProductFilter::default);
    let mut selected = use_signal(|| Option::<Product>::None);

    let categories = distinct_categories(&products);
    let visible = filter_products(&products, ListingView::MyProducts, &filter.read());

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./listings.css") }

        PageHeader {
            title: "My Products",
            description: "Manage your auction listings",
            Link { to: Route::AddProduct {},
                Button { "Add Product" }
            }
        }

        ListingFilters {
            view: ListingView::MyProducts,
            filter: filter,
            categories: categories,
        }

        p { class: "listing-count", "Showing {visible.len()} of {products.len()} products" }

        if visible.is_empty() {
            div { class: "listing-empty",
                Icon::<LdPackage> { icon: LdPackage, width: 40, height: 40 }
                p { "No products found" }
                if !filter.read().is_cleared() {
                    Button { onclick: move |_| filter.write().clear(), "Clear Filters" }
                }
            }
        } else {
            div { class: "product-grid",
                for product in visible {
                    ProductCard {
                        key: "{product.id}",
                        product: product,
                        on_view: move |p: Product| selected.set(Some(p)),
                    }
                }
            }
        }

        ProductDetailsModal {
            product: selected(),
            on_close: move |_| selected.set(None),
        }
    }
}
