use crate::components::CategoryOverview;
use crate::format_helpers::{format_count, format_mnt};
use dioxus::prelude::*;
use shared_types::ALL_CATEGORIES;
use shared_ui::{
    Card, CardContent, CardHeader, CardTitle, DataTable, DataTableBody, DataTableCell,
    DataTableColumn, DataTableHeader, DataTableRow, PageHeader,
};

#[component]
pub fn Categories() -> Element {
    rsx! {
        PageHeader { title: "Categories", description: "Listing volume by category" }

        CategoryOverview {}

        Card {
            CardHeader {
                CardTitle { "Category Details" }
            }
            CardContent {
                DataTable {
                    DataTableHeader {
                        DataTableColumn { "Category" }
                        DataTableColumn { numeric: true, "Listings" }
                        DataTableColumn { numeric: true, "Active Auctions" }
                        DataTableColumn { numeric: true, "Average Price" }
                        DataTableColumn { "" }
                    }
                    DataTableBody {
                        for category in ALL_CATEGORIES.iter().copied() {
                            DataTableRow { key: "{category.id()}",
                                DataTableCell {
                                    div { class: "table-product",
                                        span { class: "table-product-name", "{category.name()}" }
                                        span { class: "table-product-id", "{category.name_en()}" }
                                    }
                                }
                                DataTableCell { numeric: true,
                                    "{format_count(u64::from(category.listing_count()))}"
                                }
                                DataTableCell { numeric: true,
                                    "{format_count(u64::from(category.active_auctions()))}"
                                }
                                DataTableCell { numeric: true, "{format_mnt(category.average_price())}" }
                                DataTableCell {
                                    Link { to: category.brands_path(), class: "table-link", "View brands" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
