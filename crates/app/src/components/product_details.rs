use dioxus::prelude::*;
use shared_types::{Product, VehicleSpecs};
use shared_ui::{Modal, ModalSize};

use super::StatusBadge;
use crate::format_helpers::{format_date, format_date_time, format_mnt};

fn vehicle_rows(specs: &VehicleSpecs) -> Vec<(&'static str, String)> {
    [
        ("Үйлдвэрлэсэн он", &specs.year_of_manufacture),
        ("Орж ирсэн он", &specs.year_of_import),
        ("Хөдөлгүүр", &specs.engine),
        ("Өнгө", &specs.color),
        ("Хөдөлгүүрийн багтаамж", &specs.engine_capacity),
        ("Гадна байдал", &specs.exterior_condition),
        ("Дотор байдал", &specs.interior_condition),
        ("Хурдны хайрцаг", &specs.gearbox),
        ("Хүрд", &specs.steering_wheel),
        ("Байршил", &specs.location),
        ("Хөтлөгч", &specs.drive_type),
        ("Эд ангийн байдал", &specs.parts_condition),
        ("Гүйлт", &specs.mileage),
    ]
    .into_iter()
    .filter(|(_, value)| !value.is_empty())
    .map(|(label, value)| (label, value.clone()))
    .collect()
}

/// Read-only view of one listing. Closed while `product` is `None`.
#[component]
pub fn ProductDetailsModal(product: Option<Product>, on_close: EventHandler<()>) -> Element {
    let Some(product) = product else {
        return rsx! {};
    };
    let vehicle = product.vehicle().map(vehicle_rows).unwrap_or_default();

    rsx! {
        Modal {
            open: true,
            on_close: move |_| on_close.call(()),
            title: product.name.clone(),
            description: product.uniq_id.clone(),
            size: ModalSize::Lg,

            div { class: "product-details",
                img { class: "product-details-image", src: "{product.image}", alt: "{product.name}" }
                div { class: "product-details-info",
                    div { class: "product-details-status",
                        StatusBadge { status: product.status }
                        span { class: "product-details-category", "{product.category.name()}" }
                    }
                    p { class: "product-details-description", "{product.description}" }
                    dl { class: "product-details-facts",
                        dt { "Starting price" }
                        dd { "{format_mnt(product.starting_price)}" }
                        dt { "Current bid" }
                        dd { "{format_mnt(product.current_bid)}" }
                        dt { "Bids" }
                        dd { "{product.bids}" }
                        dt { "Created" }
                        dd { "{format_date(&product.created_at)}" }
                        if let Some(end) = product.auction_end {
                            dt { "Auction ends" }
                            dd { "{format_date_time(&end)}" }
                        }
                        if let Some(seller) = product.seller.clone() {
                            dt { "Seller" }
                            dd { "{seller}" }
                        }
                        if let Some(winner) = product.winner.clone() {
                            dt { "Winner" }
                            dd { "{winner}" }
                        }
                    }
                }
            }

            if !vehicle.is_empty() {
                h4 { class: "product-details-section", "Vehicle specifications" }
                dl { class: "product-details-facts product-details-vehicle",
                    for (label, value) in vehicle {
                        div { key: "{label}", class: "product-details-fact",
                            dt { "{label}" }
                            dd { "{value}" }
                        }
                    }
                }
            }
        }
    }
}
