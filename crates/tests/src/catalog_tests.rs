use pretty_assertions::assert_eq;
use shared_types::{
    search_subcategories, share_percent, sorted_by_count_desc, split_columns, subcategories,
    top_subcategory, total_count, Category, ALL_CATEGORIES,
};

#[test]
fn test_jewelry_brand_page_figures() {
    let items = subcategories(Category::Jewelry);
    let total = total_count(items);
    assert_eq!(total, 133);

    let top = top_subcategory(items).unwrap();
    assert_eq!(top.name, "Цагаан алт");
    assert_eq!(share_percent(top.count, total), 23.3);

    let columns = split_columns(items, Category::Jewelry.grid_columns());
    assert_eq!(columns.iter().map(Vec::len).collect::<Vec<_>>(), [2, 2, 2]);
}

#[test]
fn test_ranking_is_descending_for_every_category() {
    for category in ALL_CATEGORIES.iter().copied() {
        let ranked = sorted_by_count_desc(subcategories(category));
        assert!(
            ranked.windows(2).all(|w| w[0].count >= w[1].count),
            "{category:?}"
        );
        assert_eq!(ranked.len(), subcategories(category).len());
        assert_eq!(
            Some(ranked[0].count),
            top_subcategory(subcategories(category)).map(|s| s.count)
        );
    }
}

#[test]
fn test_shares_sum_to_one_hundred_within_rounding() {
    for category in ALL_CATEGORIES.iter().copied() {
        let items = subcategories(category);
        let total = total_count(items);
        let sum: f64 = items.iter().map(|s| share_percent(s.count, total)).sum();
        // each share is rounded to 0.1
        let tolerance = items.len() as f64 * 0.05 + 1e-9;
        assert!((sum - 100.0).abs() <= tolerance, "{category:?}: {sum}");
    }
}

#[test]
fn test_columns_keep_every_brand_once() {
    for category in ALL_CATEGORIES.iter().copied() {
        let items = subcategories(category);
        let columns = split_columns(items, category.grid_columns());
        assert!(columns.len() <= category.grid_columns());
        let flattened: Vec<_> = columns.into_iter().flatten().collect();
        assert_eq!(flattened, items.to_vec());
    }
}

#[test]
fn test_subcategory_search_is_case_insensitive() {
    let found = search_subcategories(Category::Computer, "IPAD");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, "tablets_ereaders");
    assert_eq!(
        search_subcategories(Category::Electronics, "").len(),
        subcategories(Category::Electronics).len()
    );
}
