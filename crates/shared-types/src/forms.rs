use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::catalog::Category;
use crate::error::AppError;
use crate::models::Role;
use crate::product::VehicleSpecs;

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

/// Sign-in form as typed by the user.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct LoginForm {
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
    pub role: String,
}

impl LoginForm {
    pub fn new() -> Self {
        Self {
            role: Role::SuperAdmin.as_str().to_string(),
            ..Default::default()
        }
    }

    pub fn check(&self) -> Result<(), AppError> {
        self.validate().map_err(AppError::from)
    }

    /// Selected role, if the select holds a known key.
    pub fn selected_role(&self) -> Option<Role> {
        Role::parse(&self.role)
    }
}

/// One `<option>` of a static select.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
}

const fn opt(value: &'static str, label: &'static str) -> SelectOption {
    SelectOption { value, label }
}

pub const ENGINE_OPTIONS: &[SelectOption] = &[
    opt("Бензин", "Бензин (Petrol)"),
    opt("Дизель", "Дизель (Diesel)"),
    opt("Hybrid", "Hybrid"),
    opt("Electric", "Electric"),
];

pub const CONDITION_OPTIONS: &[SelectOption] = &[
    opt("Хэвийн", "Хэвийн (Normal)"),
    opt("Сайн", "Сайн (Good)"),
    opt("Маш сайн", "Маш сайн (Very Good)"),
    opt("Шинэ", "Шинэ (New)"),
];

pub const GEARBOX_OPTIONS: &[SelectOption] = &[
    opt("Автомат", "Автомат (Automatic)"),
    opt("Гар", "Гар (Manual)"),
    opt("CVT", "CVT"),
];

pub const STEERING_OPTIONS: &[SelectOption] = &[opt("Зөв", "Зөв (Right)"), opt("Зүүн", "Зүүн (Left)")];

pub const DRIVE_TYPE_OPTIONS: &[SelectOption] = &[
    opt("Бүх дугуй 4WD", "Бүх дугуй 4WD (All-wheel drive 4WD)"),
    opt("Арын дугуй", "Арын дугуй (Rear-wheel drive)"),
    opt("Урд дугуй", "Урд дугуй (Front-wheel drive)"),
];

pub const DURATION_OPTIONS: &[SelectOption] = &[
    opt("7", "7 Days"),
    opt("14", "14 Days"),
    opt("21", "21 Days"),
    opt("30", "30 Days"),
];

/// How a vehicle field is entered on the add-product form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VehicleInput {
    Text { placeholder: &'static str },
    Select(&'static [SelectOption]),
}

/// One row of the vehicle section. `key` names the [`VehicleSpecs`] field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VehicleField {
    pub key: &'static str,
    pub label: &'static str,
    pub required: bool,
    pub input: VehicleInput,
}

const fn text(key: &'static str, label: &'static str, required: bool, placeholder: &'static str) -> VehicleField {
    VehicleField {
        key,
        label,
        required,
        input: VehicleInput::Text { placeholder },
    }
}

const fn select(key: &'static str, label: &'static str, required: bool, options: &'static [SelectOption]) -> VehicleField {
    VehicleField {
        key,
        label,
        required,
        input: VehicleInput::Select(options),
    }
}

/// Vehicle section layout, in display order.
pub const VEHICLE_FIELDS: &[VehicleField] = &[
    text("year_of_manufacture", "Үйлдвэрлэсэн он (Year of Manufacture)", true, "e.g., 2024"),
    text("year_of_import", "Импортлогдсон он (Year of Import)", false, "e.g., 2025"),
    select("engine", "Хөдөлгүүр (Engine)", true, ENGINE_OPTIONS),
    text("color", "Өнгө (Color)", true, "e.g., Цэнхэр (Blue)"),
    text("engine_capacity", "Моторын багтаамж (Engine Capacity)", true, "e.g., 3500CC"),
    select("exterior_condition", "Гадна талын ашиглалт (Exterior Condition)", false, CONDITION_OPTIONS),
    select("gearbox", "Хурдны хайрцаг (Gearbox)", false, GEARBOX_OPTIONS),
    select("interior_condition", "Салоны ашиглалт (Interior Condition)", false, CONDITION_OPTIONS),
    select("steering_wheel", "Хүрд (Steering Wheel)", false, STEERING_OPTIONS),
    text("location", "Байршил (Location)", false, "e.g., Улаанбаатар"),
    select("drive_type", "Хөтлөгч (Drive Type)", false, DRIVE_TYPE_OPTIONS),
    text("parts_condition", "Эд ангиудын ашиглалт (Parts Condition)", false, "e.g., Хэвийн"),
    text("mileage", "Гүйлт (Mileage)", false, "e.g., 8000км"),
];

/// In-progress add-product form. All inputs are kept as raw strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct ProductDraft {
    #[validate(custom(function = "not_blank", message = "Title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "Category is required"))]
    pub category: String,
    #[validate(length(min = 1, message = "Subcategory is required"))]
    pub subcategory: String,
    #[validate(custom(function = "not_blank", message = "Description is required"))]
    pub description: String,
    #[validate(custom(function = "not_blank", message = "Starting price is required"))]
    pub starting_price: String,
    pub vehicle: VehicleSpecs,
    pub auction_duration: String,
    pub auction_start: String,
    pub auction_end: String,
    #[validate(length(min = 1, message = "At least one image is required"))]
    pub images: Vec<String>,
}

impl ProductDraft {
    pub fn selected_category(&self) -> Option<Category> {
        Category::from_name(&self.category)
    }

    pub fn is_vehicle(&self) -> bool {
        self.selected_category() == Some(Category::Automobile)
    }

    /// Changing the category invalidates the chosen subcategory.
    pub fn set_category(&mut self, category: &str) {
        self.category = category.to_string();
        self.subcategory.clear();
    }

    /// Adds `path` unless it is already selected.
    pub fn select_image(&mut self, path: &str) {
        if !self.images.iter().any(|p| p == path) {
            self.images.push(path.to_string());
        }
    }

    pub fn remove_image(&mut self, index: usize) {
        if index < self.images.len() {
            self.images.remove(index);
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Full validation, including the vehicle fields required for cars.
    pub fn check(&self) -> Result<(), AppError> {
        let mut field_errors: HashMap<String, String> = match self.validate() {
            Ok(()) => HashMap::new(),
            Err(errors) => AppError::from(errors).field_errors,
        };
        if self.is_vehicle() {
            let required = [
                ("year_of_manufacture", &self.vehicle.year_of_manufacture, "Year of manufacture is required"),
                ("engine", &self.vehicle.engine, "Engine type is required"),
                ("color", &self.vehicle.color, "Color is required"),
                ("engine_capacity", &self.vehicle.engine_capacity, "Engine capacity is required"),
            ];
            for (field, value, message) in required {
                if value.is_empty() {
                    field_errors.insert(field.to_string(), message.to_string());
                }
            }
        }
        if field_errors.is_empty() {
            Ok(())
        } else {
            Err(AppError::validation("Please fill in all required fields", field_errors))
        }
    }

    /// Owner's price as a positive whole number, if it parses.
    pub fn price(&self) -> Option<u64> {
        self.starting_price.trim().parse::<u64>().ok().filter(|p| *p > 0)
    }

    pub fn pricing(&self) -> Option<PricingPreview> {
        self.price().map(PricingPreview::for_price)
    }
}

/// Breakdown shown beside the price input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricingPreview {
    pub price: u64,
    pub system_fee: u64,
    pub auction_starting_price: u64,
}

impl PricingPreview {
    pub fn for_price(price: u64) -> Self {
        Self {
            price,
            system_fee: system_fee(price),
            auction_starting_price: auction_starting_price(price),
        }
    }
}

/// 10% platform fee, rounded half away from zero.
pub fn system_fee(price: u64) -> u64 {
    (price as f64 * 0.1).round() as u64
}

/// Opening bid: the owner's price plus the fee.
pub fn auction_starting_price(price: u64) -> u64 {
    (price as f64 * 1.1).round() as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vehicle_layout_matches_specs_fields() {
        let specs = VehicleSpecs::default();
        for field in VEHICLE_FIELDS {
            assert!(specs.get(field.key).is_some(), "unknown field {}", field.key);
        }
        let required: Vec<&str> = VEHICLE_FIELDS.iter().filter(|f| f.required).map(|f| f.key).collect();
        assert_eq!(required, ["year_of_manufacture", "engine", "color", "engine_capacity"]);
    }

    fn complete_draft() -> ProductDraft {
        ProductDraft {
            title: "Gold Ring".into(),
            category: Category::Jewelry.name().into(),
            subcategory: "bogj".into(),
            description: "18k".into(),
            starting_price: "2500000".into(),
            images: vec!["/images/product/prod1.jpg".into()],
            ..Default::default()
        }
    }

    #[test]
    fn login_requires_email_and_password() {
        let form = LoginForm::new();
        let err = form.check().unwrap_err();
        assert_eq!(err.message, "Please fill in all required fields");
        assert!(err.field_errors.contains_key("email"));
        assert!(err.field_errors.contains_key("password"));

        let form = LoginForm {
            email: "admin@auction.com".into(),
            password: "x".into(),
            ..LoginForm::new()
        };
        assert!(form.check().is_ok());
        assert_eq!(form.selected_role(), Some(Role::SuperAdmin));
    }

    #[test]
    fn empty_draft_reports_every_required_field() {
        let err = ProductDraft::default().check().unwrap_err();
        for field in ["title", "category", "subcategory", "description", "starting_price", "images"] {
            assert!(err.field(field).is_some(), "missing error for {field}");
        }
        assert_eq!(err.field("images"), Some("At least one image is required"));
        assert!(err.field("engine").is_none());
    }

    #[test]
    fn whitespace_title_is_blank() {
        let mut draft = complete_draft();
        draft.title = "   ".into();
        let err = draft.check().unwrap_err();
        assert_eq!(err.field("title"), Some("Title is required"));
        assert_eq!(err.field_errors.len(), 1);
    }

    #[test]
    fn complete_draft_passes() {
        assert!(complete_draft().check().is_ok());
    }

    #[test]
    fn vehicles_need_specs() {
        let mut draft = complete_draft();
        draft.set_category(Category::Automobile.name());
        draft.subcategory = "toyota".into();
        let err = draft.check().unwrap_err();
        assert_eq!(err.field("year_of_manufacture"), Some("Year of manufacture is required"));
        assert_eq!(err.field("engine"), Some("Engine type is required"));
        assert_eq!(err.field("color"), Some("Color is required"));
        assert_eq!(err.field("engine_capacity"), Some("Engine capacity is required"));

        draft.vehicle.year_of_manufacture = "2024".into();
        draft.vehicle.engine = "Hybrid".into();
        draft.vehicle.color = "Цэнхэр".into();
        draft.vehicle.engine_capacity = "3500CC".into();
        assert!(draft.check().is_ok());
    }

    #[test]
    fn category_change_clears_subcategory() {
        let mut draft = complete_draft();
        draft.set_category(Category::Computer.name());
        assert!(draft.subcategory.is_empty());
        assert_eq!(draft.selected_category(), Some(Category::Computer));
    }

    #[test]
    fn images_are_unique_and_removable() {
        let mut draft = ProductDraft::default();
        draft.select_image("/a.png");
        draft.select_image("/b.png");
        draft.select_image("/a.png");
        assert_eq!(draft.images, vec!["/a.png", "/b.png"]);
        draft.remove_image(0);
        draft.remove_image(5);
        assert_eq!(draft.images, vec!["/b.png"]);
    }

    #[test]
    fn reset_clears_everything() {
        let mut draft = complete_draft();
        draft.reset();
        assert_eq!(draft, ProductDraft::default());
    }

    #[test]
    fn pricing_preview() {
        let mut draft = complete_draft();
        let preview = draft.pricing().unwrap();
        assert_eq!(preview.system_fee, 250_000);
        assert_eq!(preview.auction_starting_price, 2_750_000);

        draft.starting_price = "0".into();
        assert!(draft.pricing().is_none());
        draft.starting_price = "abc".into();
        assert!(draft.pricing().is_none());
    }

    #[test]
    fn fee_rounds_half_up() {
        assert_eq!(system_fee(15), 2);
        assert_eq!(system_fee(14), 1);
        assert_eq!(auction_starting_price(48_200_000), 53_020_000);
    }
}
