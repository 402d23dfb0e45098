use dioxus::prelude::*;
use shared_types::ProductStatus;
use shared_ui::{Badge, BadgeVariant};

pub fn status_variant(status: ProductStatus) -> BadgeVariant {
    match status {
        ProductStatus::Active => BadgeVariant::Success,
        ProductStatus::Sold => BadgeVariant::Info,
        ProductStatus::Pending => BadgeVariant::Warning,
        ProductStatus::Ended => BadgeVariant::Neutral,
    }
}

#[component]
pub fn StatusBadge(status: ProductStatus) -> Element {
    rsx! {
        Badge { variant: status_variant(status), "{status.label()}" }
    }
}
