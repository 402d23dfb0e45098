use pretty_assertions::assert_eq;
use shared_types::{
    auction_products, distinct_categories, filter_products, my_products, quick_search,
    Category, ListingStats, ListingView, ProductFilter, ProductStatus, ALL,
};

fn names(products: &[shared_types::Product]) -> Vec<String> {
    products.iter().map(|p| p.name.clone()).collect()
}

#[test]
fn test_admin_filters_sold_jewelry() {
    let filter = ProductFilter {
        search: String::new(),
        status: ProductStatus::Sold.as_str().to_string(),
        category: Category::Jewelry.name().to_string(),
    };
    let found = filter_products(&auction_products(), ListingView::AuctionProducts, &filter);
    assert_eq!(names(&found), ["Rolex Watch"]);
}

#[test]
fn test_admin_search_matches_winner() {
    let filter = ProductFilter {
        search: "батбаяр".to_string(),
        ..ProductFilter::default()
    };
    let found = filter_products(&auction_products(), ListingView::AuctionProducts, &filter);
    assert_eq!(names(&found), ["iPhone 15 Pro"]);
}

#[test]
fn test_owner_search_ignores_seller_but_reads_description() {
    let products = my_products();

    let by_description = ProductFilter {
        search: "4k smart".to_string(),
        ..ProductFilter::default()
    };
    let found = filter_products(&products, ListingView::MyProducts, &by_description);
    assert_eq!(names(&found), ["Samsung TV"]);

    let by_id = ProductFilter {
        search: "au-20240120".to_string(),
        ..ProductFilter::default()
    };
    let found = filter_products(&products, ListingView::MyProducts, &by_id);
    assert_eq!(names(&found), ["MacBook Pro"]);
}

#[test]
fn test_clearing_restores_full_list() {
    let products = auction_products();
    let mut filter = ProductFilter {
        search: "nothing matches this".to_string(),
        status: ProductStatus::Active.as_str().to_string(),
        category: ALL.to_string(),
    };
    assert!(filter_products(&products, ListingView::AuctionProducts, &filter).is_empty());

    filter.clear();
    assert!(filter.is_cleared());
    assert_eq!(
        filter_products(&products, ListingView::AuctionProducts, &filter),
        products
    );
}

#[test]
fn test_category_dropdown_follows_fixture_order() {
    assert_eq!(
        distinct_categories(&my_products()),
        [
            Category::Jewelry,
            Category::MobileTablet,
            Category::Computer,
            Category::Electronics
        ]
    );
}

#[test]
fn test_dashboard_stats_for_auction_fixture() {
    let products = auction_products();
    let stats = ListingStats::compute(&products);
    assert_eq!(stats.total, 6);
    assert_eq!(stats.active, 3);
    assert_eq!(stats.sold, 2);
    assert_eq!(stats.pending, 1);

    let sold_bids: u64 = products
        .iter()
        .filter(|p| p.status == ProductStatus::Sold)
        .map(|p| p.current_bid)
        .sum();
    assert_eq!(stats.revenue, sold_bids);
}

#[test]
fn test_quick_search_by_uniq_id() {
    let products = auction_products();
    let found = quick_search(&products, "AU-2024-005");
    assert_eq!(names(&found), ["Toyota Land Cruiser"]);
    assert!(found[0].vehicle().is_some());

    assert!(quick_search(&products, "   ").is_empty());
    assert!(quick_search(&products, "AU-2099").is_empty());
}
