use crate::auth::use_auth;
use crate::components::StatusBadge;
use crate::routes::landing_route;
use crate::config::app_config;
use crate::delay::sleep_ms;
use crate::format_helpers::{format_date, format_mnt, format_mnt_compact};
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdSearch;
use dioxus_free_icons::Icon;
use shared_types::{auction_products, quick_search, ListingStats, Product, Role};
use shared_ui::{
    Badge, BadgeVariant, Button, Card, CardContent, CardHeader, CardTitle, DataTable,
    DataTableBody, DataTableCell, DataTableColumn, DataTableHeader, DataTableRow, PageHeader,
    SearchInput, Spinner, StatCard,
};

const RECENT_LIMIT: usize = 5;

/// Super admin dashboard: quick lookup by uniq id, headline stats and the
/// latest listings. Owners are sent to their own listings.
#[component]
pub fn Home() -> Element {
    let auth = use_auth();

    if auth.role() == Some(Role::PawnshopOwner) {
        navigator().replace(landing_route(Role::PawnshopOwner));
        return rsx! {
            Spinner {}
        };
    }

    rsx! {
        PageHeader { title: "Dashboard", description: "Auction overview" }
        div { class: "dashboard",
            QuickSearch {}
            DashboardStats {}
            RecentListings {}
        }
    }
}

#[component]
fn QuickSearch() -> Element {
    let mut term = use_signal(String::new);
    let mut results = use_signal(Vec::<Product>::new);
    let mut searched = use_signal(|| Option::<String>::None);
    let mut searching = use_signal(|| false);

    let run_search = move |evt: FormEvent| async move {
        evt.prevent_default();
        let query = term();
        if query.trim().is_empty() {
            results.set(Vec::new());
            searched.set(None);
            return;
        }
        searching.set(true);
        sleep_ms(app_config().search.delay_ms).await;
        results.set(quick_search(&auction_products(), &query));
        searched.set(Some(query));
        searching.set(false);
    };

    rsx! {
        Card {
            CardHeader {
                CardTitle { "Search Auction Products" }
            }
            CardContent {
                form { class: "quick-search", onsubmit: run_search,
                    SearchInput {
                        value: term(),
                        placeholder: "Search by unique ID (e.g., AU-2024-001)...",
                        on_input: move |e: FormEvent| term.set(e.value()),
                        Icon::<LdSearch> { icon: LdSearch, width: 18, height: 18 }
                    }
                    Button { button_type: "submit", disabled: searching(),
                        if searching() { "Searching..." } else { "Search" }
                    }
                }

                if !results.read().is_empty() {
                    h4 { class: "quick-search-heading",
                        "Search Results ({results.read().len()} found)"
                    }
                    div { class: "quick-search-results",
                        for product in results() {
                            SearchResult { key: "{product.id}", product: product }
                        }
                    }
                } else if let Some(query) = searched() {
                    div { class: "quick-search-empty",
                        p {
                            strong { "No products found" }
                            " for \"{query}\""
                        }
                        p { class: "quick-search-empty-hint",
                            "Try searching with a different unique ID or product name."
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn SearchResult(product: Product) -> Element {
    rsx! {
        div { class: "quick-search-result",
            img { src: "{product.image}", alt: "{product.name}" }
            div { class: "quick-search-result-body",
                div { class: "quick-search-result-badges",
                    Badge { variant: BadgeVariant::Warning, "{product.uniq_id}" }
                    StatusBadge { status: product.status }
                }
                h5 { "{product.name}" }
                if let Some(seller) = product.seller.clone() {
                    p { class: "quick-search-result-seller", "{seller}" }
                }
                p { "Starting: {format_mnt(product.starting_price)}" }
                p { "Current: {format_mnt(product.current_bid)}" }
                if let Some(winner) = product.winner.clone() {
                    p { class: "quick-search-result-winner", "Winner: {winner}" }
                }
            }
        }
    }
}

#[component]
fn DashboardStats() -> Element {
    let stats = ListingStats::compute(&auction_products());

    rsx! {
        div { class: "stat-grid",
            StatCard { label: "Total Products", value: "{stats.total}" }
            StatCard { label: "Active Auctions", value: "{stats.active}" }
            StatCard { label: "Sold Items", value: "{stats.sold}" }
            StatCard {
                label: "Total Revenue",
                value: format_mnt_compact(stats.revenue),
                hint: format_mnt(stats.revenue),
            }
        }
    }
}

#[component]
fn RecentListings() -> Element {
    let mut recent = auction_products();
    recent.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    recent.truncate(RECENT_LIMIT);

    rsx! {
        Card {
            CardHeader {
                CardTitle { "Recent Listings" }
            }
            DataTable {
                DataTableHeader {
                    DataTableColumn { "Product" }
                    DataTableColumn { "Category" }
                    DataTableColumn { numeric: true, "Current bid" }
                    DataTableColumn { "Status" }
                    DataTableColumn { "Listed" }
                }
                DataTableBody {
                    for product in recent {
                        DataTableRow { key: "{product.id}",
                            DataTableCell {
                                div { class: "table-product",
                                    img { src: "{product.image}", alt: "{product.name}" }
                                    div {
                                        p { class: "table-product-name", "{product.name}" }
                                        p { class: "table-product-id", "{product.uniq_id}" }
                                    }
                                }
                            }
                            DataTableCell { "{product.category.name()}" }
                            DataTableCell { numeric: true, "{format_mnt(product.current_bid)}" }
                            DataTableCell { StatusBadge { status: product.status } }
                            DataTableCell { "{format_date(&product.created_at)}" }
                        }
                    }
                }
            }
        }
    }
}
