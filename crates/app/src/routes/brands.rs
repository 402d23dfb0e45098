use crate::format_helpers::{format_count, format_percent};
use dioxus::prelude::*;
use shared_types::{
    share_percent, sorted_by_count_desc, split_columns, subcategories, top_subcategory,
    total_count, Category,
};
use shared_ui::{
    Badge, BadgeVariant, Card, CardContent, CardHeader, CardTitle, DataTable, DataTableBody,
    DataTableCell, DataTableColumn, DataTableHeader, DataTableRow, PageHeader, StatCard,
};

const TOP_LIMIT: usize = 10;

/// Brand breakdown for one category: totals, a multi-column index and the
/// ten largest brands by share.
#[component]
fn BrandsPage(category: Category) -> Element {
    let items = subcategories(category);
    let total = total_count(items);
    let top = top_subcategory(items).copied();
    let columns = split_columns(items, category.grid_columns());
    let ranked: Vec<_> = sorted_by_count_desc(items).into_iter().take(TOP_LIMIT).collect();
    let title = format!("{} brands", category.name_en());

    rsx! {
        PageHeader { title: title, description: category.name() }

        div { class: "stat-grid",
            StatCard { label: "Brands", value: format_count(items.len() as u64) }
            StatCard { label: "Total Listings", value: format_count(total) }
            if let Some(top) = top {
                StatCard {
                    label: "Top Brand",
                    value: top.name,
                    hint: format!("{} listings", format_count(u64::from(top.count))),
                }
            }
        }

        Card {
            CardHeader {
                CardTitle { "All Brands" }
            }
            CardContent {
                div {
                    class: "brand-columns",
                    style: "--brand-columns: {category.grid_columns()}",
                    for (i, column) in columns.into_iter().enumerate() {
                        ul { key: "{i}", class: "brand-column",
                            for sub in column {
                                li { key: "{sub.id}", class: "brand-row",
                                    span { class: "brand-name", "{sub.name}" }
                                    span { class: "brand-count", "{format_count(u64::from(sub.count))}" }
                                }
                            }
                        }
                    }
                }
            }
        }

        Card {
            CardHeader {
                CardTitle { "Top {TOP_LIMIT}" }
            }
            CardContent {
                DataTable {
                    DataTableHeader {
                        DataTableColumn { "#" }
                        DataTableColumn { "Brand" }
                        DataTableColumn { numeric: true, "Listings" }
                        DataTableColumn { numeric: true, "Share" }
                    }
                    DataTableBody {
                        for (rank, sub) in ranked.into_iter().enumerate() {
                            DataTableRow { key: "{sub.id}", highlighted: rank == 0,
                                DataTableCell { "{rank + 1}" }
                                DataTableCell {
                                    "{sub.name}"
                                    if rank == 0 {
                                        Badge { variant: BadgeVariant::Primary, "Top" }
                                    }
                                }
                                DataTableCell { numeric: true, "{format_count(u64::from(sub.count))}" }
                                DataTableCell { numeric: true,
                                    "{format_percent(share_percent(sub.count, total))}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn CarBrands() -> Element {
    rsx! { BrandsPage { category: Category::Automobile } }
}

#[component]
pub fn MobileBrands() -> Element {
    rsx! { BrandsPage { category: Category::MobileTablet } }
}

#[component]
pub fn ComputerBrands() -> Element {
    rsx! { BrandsPage { category: Category::Computer } }
}

#[component]
pub fn JewelryBrands() -> Element {
    rsx! { BrandsPage { category: Category::Jewelry } }
}

#[component]
pub fn ElectronicsBrands() -> Element {
    rsx! { BrandsPage { category: Category::Electronics } }
}
