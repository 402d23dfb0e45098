use crate::catalog::Category;
use crate::product::{Product, ProductStatus};

/// Sentinel filter value that disables a status or category filter.
pub const ALL: &str = "all";

/// Which listing page is filtering. Each searches a different set of fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingView {
    /// Super admin overview: name, uniq id, seller, winner.
    AuctionProducts,
    /// Owner listings: name, uniq id, description.
    MyProducts,
}

impl ListingView {
    /// Status options offered by the page's filter dropdown, after "all".
    pub fn status_options(&self) -> &'static [ProductStatus] {
        match self {
            ListingView::AuctionProducts => &[
                ProductStatus::Active,
                ProductStatus::Sold,
                ProductStatus::Pending,
            ],
            ListingView::MyProducts => &[
                ProductStatus::Active,
                ProductStatus::Ended,
                ProductStatus::Pending,
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductFilter {
    pub search: String,
    pub status: String,
    pub category: String,
}

impl Default for ProductFilter {
    fn default() -> Self {
        Self {
            search: String::new(),
            status: ALL.to_string(),
            category: ALL.to_string(),
        }
    }
}

impl ProductFilter {
    pub fn is_cleared(&self) -> bool {
        *self == Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

fn contains_ci(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

fn matches_search(product: &Product, view: ListingView, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    let optional = |field: &Option<String>| field.as_deref().is_some_and(|v| contains_ci(v, needle));
    contains_ci(&product.name, needle)
        || contains_ci(&product.uniq_id, needle)
        || match view {
            ListingView::AuctionProducts => optional(&product.seller) || optional(&product.winner),
            ListingView::MyProducts => contains_ci(&product.description, needle),
        }
}

/// Search, status and category filters combined with AND. Input order is kept.
pub fn filter_products(products: &[Product], view: ListingView, filter: &ProductFilter) -> Vec<Product> {
    let needle = filter.search.to_lowercase();
    products
        .iter()
        .filter(|p| matches_search(p, view, &needle))
        .filter(|p| filter.status == ALL || p.status.as_str() == filter.status)
        .filter(|p| filter.category == ALL || p.category.name() == filter.category)
        .cloned()
        .collect()
}

/// Categories present in `products`, in first-seen order.
pub fn distinct_categories(products: &[Product]) -> Vec<Category> {
    let mut seen = Vec::new();
    for p in products {
        if !seen.contains(&p.category) {
            seen.push(p.category);
        }
    }
    seen
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ListingStats {
    pub total: usize,
    pub active: usize,
    pub sold: usize,
    pub pending: usize,
    /// Sum of the winning bid over sold listings.
    pub revenue: u64,
}

impl ListingStats {
    pub fn compute(products: &[Product]) -> Self {
        products.iter().fold(
            Self {
                total: products.len(),
                ..Self::default()
            },
            |mut acc, p| {
                match p.status {
                    ProductStatus::Active => acc.active += 1,
                    ProductStatus::Sold => {
                        acc.sold += 1;
                        acc.revenue += p.current_bid;
                    }
                    ProductStatus::Pending => acc.pending += 1,
                    ProductStatus::Ended => {}
                }
                acc
            },
        )
    }
}

/// Dashboard lookup. A blank term finds nothing; otherwise matches uniq id,
/// name, seller or winner.
pub fn quick_search(products: &[Product], term: &str) -> Vec<Product> {
    if term.trim().is_empty() {
        return Vec::new();
    }
    let filter = ProductFilter {
        search: term.to_string(),
        ..ProductFilter::default()
    };
    filter_products(products, ListingView::AuctionProducts, &filter)
}
