use dioxus::prelude::*;
use shared_types::{Product, ProductStatus};
use shared_ui::{Badge, BadgeVariant, Button, ButtonSize, ButtonVariant, Card};

use super::StatusBadge;
use crate::format_helpers::{format_date, format_mnt};

/// Grid tile for one listing. Seller and winner rows appear only when the
/// record carries them.
#[component]
pub fn ProductCard(product: Product, on_view: EventHandler<Product>) -> Element {
    let viewed = product.clone();

    rsx! {
        Card { class: "product-card",
            div { class: "product-card-image",
                img { src: "{product.image}", alt: "{product.name}" }
                div { class: "product-card-status",
                    StatusBadge { status: product.status }
                }
            }
            div { class: "product-card-body",
                Badge { variant: BadgeVariant::Warning, "{product.uniq_id}" }
                h3 { class: "product-card-name", "{product.name}" }
                p { class: "product-card-description", "{product.description}" }

                dl { class: "product-card-facts",
                    div { dt { "Starting Price:" } dd { "{format_mnt(product.starting_price)}" } }
                    div { dt { "Current Bid:" } dd { class: "product-card-bid", "{format_mnt(product.current_bid)}" } }
                    div { dt { "Bids:" } dd { "{product.bids}" } }
                    div { dt { "Category:" } dd { "{product.category.name()}" } }
                    if let Some(seller) = product.seller.clone() {
                        div { dt { "Seller:" } dd { "{seller}" } }
                    }
                    if let Some(winner) = product.winner.clone() {
                        div { dt { "Winner:" } dd { class: "product-card-winner", "{winner}" } }
                    }
                    div { dt { "Created:" } dd { "{format_date(&product.created_at)}" } }
                    if let Some(end) = product.auction_end {
                        div { dt { "Ends:" } dd { "{format_date(&end)}" } }
                    }
                }

                div { class: "product-card-actions",
                    Button {
                        size: ButtonSize::Sm,
                        class: "product-card-view",
                        onclick: move |_| on_view.call(viewed.clone()),
                        "Дэлгэрэнгүй үзэх"
                    }
                    if product.status == ProductStatus::Pending {
                        Button { size: ButtonSize::Sm, variant: ButtonVariant::Outline, "Edit" }
                    }
                }
            }
        }
    }
}
