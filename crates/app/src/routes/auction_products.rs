use crate::components::{ListingFilters, ProductCard, ProductDetailsModal};
use crate::format_helpers::{format_mnt, format_mnt_compact};
use dioxus::prelude::*;
use shared_types::{
    auction_products, distinct_categories, filter_products, ListingStats, ListingView, Product,
    ProductFilter,
};
use shared_ui::{PageHeader, StatCard};

/// Every listing across all pawnshops, for super admins.
#[component]
pub fn AuctionProducts() -> Element {
    let products = use_hook(auction_products);
    let filter = use_signal(ProductFilter::default);
    let mut selected = use_signal(|| Option::<Product>::None);

    let stats = ListingStats::compute(&products);
    let categories = distinct_categories(&products);
    let visible = filter_products(&products, ListingView::AuctionProducts, &filter.read());

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./listings.css") }

        PageHeader {
            title: "Auction Products",
            description: "Manage and monitor all auction products",
            span { class: "listing-total", "Total: {products.len()} products" }
        }

        div { class: "stat-grid",
            StatCard { label: "Total Products", value: "{stats.total}" }
            StatCard { label: "Active", value: "{stats.active}" }
            StatCard { label: "Sold", value: "{stats.sold}" }
            StatCard { label: "Pending", value: "{stats.pending}" }
            StatCard {
                label: "Revenue",
                value: format_mnt_compact(stats.revenue),
                hint: format_mnt(stats.revenue),
            }
        }

        ListingFilters {
            view: ListingView::AuctionProducts,
            filter: filter,
            categories: categories,
        }

        if visible.is_empty() {
            div { class: "listing-empty",
                p { "No products match the current filters." }
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
