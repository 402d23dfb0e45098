pub mod category_overview;
pub mod listing_filters;
pub mod product_card;
pub mod product_details;
pub mod status_badge;
pub mod subcategory_selector;

pub use category_overview::CategoryOverview;
pub use listing_filters::ListingFilters;
pub use product_card::ProductCard;
pub use product_details::ProductDetailsModal;
pub use status_badge::StatusBadge;
pub use subcategory_selector::SubcategorySelector;
