use pretty_assertions::assert_eq;
use shared_types::{
    search_subcategories, Category, ProductDraft, AVAILABLE_IMAGES, VEHICLE_FIELDS,
};

fn complete_draft(category: Category) -> ProductDraft {
    let mut draft = ProductDraft {
        title: "TOYOTA LAND CRUISER 250".to_string(),
        description: "One owner, full service history".to_string(),
        starting_price: "48200000".to_string(),
        ..ProductDraft::default()
    };
    draft.set_category(category.name());
    draft.subcategory = search_subcategories(category, "")[0].id.to_string();
    draft.select_image(AVAILABLE_IMAGES[0]);
    draft
}

#[test]
fn test_general_listing_passes_without_vehicle_fields() {
    assert!(complete_draft(Category::Jewelry).check().is_ok());
}

#[test]
fn test_car_listing_requires_vehicle_fields() {
    let mut draft = complete_draft(Category::Automobile);
    let err = draft.check().unwrap_err();

    let mut missing: Vec<&str> = err.field_errors.keys().map(String::as_str).collect();
    missing.sort_unstable();
    assert_eq!(missing, ["color", "engine", "engine_capacity", "year_of_manufacture"]);

    for field in VEHICLE_FIELDS.iter().filter(|f| f.required) {
        assert!(draft.vehicle.set(field.key, "x"));
    }
    assert!(draft.check().is_ok());
}

#[test]
fn test_switching_category_drops_subcategory() {
    let mut draft = complete_draft(Category::Automobile);
    draft.set_category(Category::Computer.name());
    assert!(!draft.is_vehicle());

    let err = draft.check().unwrap_err();
    assert_eq!(
        err.field("subcategory"),
        Some("Subcategory is required")
    );
}

#[test]
fn test_pricing_preview_for_form_price() {
    let draft = complete_draft(Category::Automobile);
    let preview = draft.pricing().unwrap();
    assert_eq!(preview.price, 48_200_000);
    assert_eq!(preview.system_fee, 4_820_000);
    assert_eq!(preview.auction_starting_price, 53_020_000);
}

#[test]
fn test_image_selection_and_reset() {
    let mut draft = complete_draft(Category::Jewelry);
    draft.select_image(AVAILABLE_IMAGES[0]);
    draft.select_image(AVAILABLE_IMAGES[2]);
    assert_eq!(draft.images, [AVAILABLE_IMAGES[0], AVAILABLE_IMAGES[2]]);

    draft.remove_image(0);
    draft.remove_image(5);
    assert_eq!(draft.images, [AVAILABLE_IMAGES[2]]);

    draft.reset();
    assert_eq!(draft, ProductDraft::default());
}
