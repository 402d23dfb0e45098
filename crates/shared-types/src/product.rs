use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::catalog::Category;

/// Lifecycle of an auction listing.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ProductStatus {
    Active,
    Ended,
    Sold,
    Pending,
}

impl ProductStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductStatus::Active => "active",
            ProductStatus::Ended => "ended",
            ProductStatus::Sold => "sold",
            ProductStatus::Pending => "pending",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "active" => Some(ProductStatus::Active),
            "ended" => Some(ProductStatus::Ended),
            "sold" => Some(ProductStatus::Sold),
            "pending" => Some(ProductStatus::Pending),
            _ => None,
        }
    }

    /// Uppercase badge text.
    pub fn label(&self) -> &'static str {
        match self {
            ProductStatus::Active => "ACTIVE",
            ProductStatus::Ended => "ENDED",
            ProductStatus::Sold => "SOLD",
            ProductStatus::Pending => "PENDING",
        }
    }

    /// Capitalized form used in filter dropdowns.
    pub fn display_name(&self) -> &'static str {
        match self {
            ProductStatus::Active => "Active",
            ProductStatus::Ended => "Ended",
            ProductStatus::Sold => "Sold",
            ProductStatus::Pending => "Pending",
        }
    }
}

/// Vehicle attributes captured for the automobile category. Values are kept
/// as entered in the form.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct VehicleSpecs {
    pub year_of_manufacture: String,
    pub year_of_import: String,
    pub engine: String,
    pub color: String,
    pub engine_capacity: String,
    pub exterior_condition: String,
    pub interior_condition: String,
    pub gearbox: String,
    pub steering_wheel: String,
    pub location: String,
    pub drive_type: String,
    pub parts_condition: String,
    pub mileage: String,
}

impl VehicleSpecs {
    /// Field by its snake_case name, as used in form error keys.
    pub fn get(&self, field: &str) -> Option<&str> {
        let value = match field {
            "year_of_manufacture" => &self.year_of_manufacture,
            "year_of_import" => &self.year_of_import,
            "engine" => &self.engine,
            "color" => &self.color,
            "engine_capacity" => &self.engine_capacity,
            "exterior_condition" => &self.exterior_condition,
            "interior_condition" => &self.interior_condition,
            "gearbox" => &self.gearbox,
            "steering_wheel" => &self.steering_wheel,
            "location" => &self.location,
            "drive_type" => &self.drive_type,
            "parts_condition" => &self.parts_condition,
            "mileage" => &self.mileage,
            _ => return None,
        };
        Some(value.as_str())
    }

    /// Sets a field by name. Returns false for an unknown name.
    pub fn set(&mut self, field: &str, value: impl Into<String>) -> bool {
        let slot = match field {
            "year_of_manufacture" => &mut self.year_of_manufacture,
            "year_of_import" => &mut self.year_of_import,
            "engine" => &mut self.engine,
            "color" => &mut self.color,
            "engine_capacity" => &mut self.engine_capacity,
            "exterior_condition" => &mut self.exterior_condition,
            "interior_condition" => &mut self.interior_condition,
            "gearbox" => &mut self.gearbox,
            "steering_wheel" => &mut self.steering_wheel,
            "location" => &mut self.location,
            "drive_type" => &mut self.drive_type,
            "parts_condition" => &mut self.parts_condition,
            "mileage" => &mut self.mileage,
            _ => return false,
        };
        *slot = value.into();
        true
    }
}

/// Category-specific payload of a product.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ProductDetails {
    #[default]
    General,
    Vehicle(VehicleSpecs),
}

/// Canonical auction listing. Prices are whole MNT.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: u32,
    pub uniq_id: String,
    pub name: String,
    pub description: String,
    pub starting_price: u64,
    /// Highest bid so far; equals the starting price before any bids.
    pub current_bid: u64,
    pub category: Category,
    pub status: ProductStatus,
    pub image: String,
    pub seller: Option<String>,
    pub winner: Option<String>,
    pub created_at: NaiveDateTime,
    pub auction_end: Option<NaiveDateTime>,
    pub bids: u32,
    #[serde(default)]
    pub details: ProductDetails,
}

impl Product {
    pub fn vehicle(&self) -> Option<&VehicleSpecs> {
        match &self.details {
            ProductDetails::Vehicle(specs) => Some(specs),
            ProductDetails::General => None,
        }
    }
}

/// Timestamp-derived listing id, e.g. `AU-20240115-103045`.
pub fn generate_uniq_id(created_at: NaiveDateTime) -> String {
    format!("AU-{}", created_at.format("%Y%m%d-%H%M%S"))
}

/// Images the add-product form offers.
pub const AVAILABLE_IMAGES: &[&str] = &[
    "/images/product/prod1.jpg",
    "/images/product/prod2.png",
    "/images/product/prod3.png",
    "/images/product/prod4.png",
];

fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .and_then(|date| date.and_hms_opt(h, min, s))
        .unwrap_or_default()
}

struct Seed {
    id: u32,
    name: &'static str,
    description: &'static str,
    starting_price: u64,
    current_bid: u64,
    category: Category,
    status: ProductStatus,
    image: &'static str,
    bids: u32,
}

impl Seed {
    fn into_product(self, uniq_id: String, created_at: NaiveDateTime) -> Product {
        Product {
            id: self.id,
            uniq_id,
            name: self.name.to_string(),
            description: self.description.to_string(),
            starting_price: self.starting_price,
            current_bid: self.current_bid,
            category: self.category,
            status: self.status,
            image: self.image.to_string(),
            seller: None,
            winner: None,
            created_at,
            auction_end: None,
            bids: self.bids,
            details: ProductDetails::General,
        }
    }
}

fn land_cruiser_specs() -> VehicleSpecs {
    VehicleSpecs {
        year_of_manufacture: "2018".into(),
        year_of_import: "2019".into(),
        engine: "Бензин".into(),
        color: "Цагаан".into(),
        engine_capacity: "4600CC".into(),
        exterior_condition: "Сайн".into(),
        interior_condition: "Сайн".into(),
        gearbox: "Автомат".into(),
        steering_wheel: "Зүүн".into(),
        location: "Улаанбаатар".into(),
        drive_type: "Бүх дугуй 4WD".into(),
        parts_condition: "Хэвийн".into(),
        mileage: "85000км".into(),
    }
}

/// Every listing on the platform, as seen by super admins.
pub fn auction_products() -> Vec<Product> {
    let rows: [(Seed, &str, (u32, u32), &str, Option<&str>); 6] = [
        (
            Seed {
                id: 1,
                name: "Gold Ring",
                description: "Beautiful 18k gold ring with diamond",
                starting_price: 2_500_000,
                current_bid: 2_800_000,
                category: Category::Jewelry,
                status: ProductStatus::Active,
                image: "/images/product/prod1.jpg",
                bids: 12,
            },
            "AU-2024-001",
            (1, 15),
            "Алтан Шармал Дэлгүүр",
            None,
        ),
        (
            Seed {
                id: 2,
                name: "iPhone 15 Pro",
                description: "Latest iPhone with advanced features",
                starting_price: 1_500_000,
                current_bid: 1_800_000,
                category: Category::MobileTablet,
                status: ProductStatus::Sold,
                image: "/images/product/prod2.png",
                bids: 8,
            },
            "AU-2024-002",
            (1, 10),
            "Технологийн Дэлгүүр",
            Some("Батбаяр"),
        ),
        (
            Seed {
                id: 3,
                name: "MacBook Pro",
                description: "High-performance laptop for professionals",
                starting_price: 800_000,
                current_bid: 950_000,
                category: Category::Computer,
                status: ProductStatus::Active,
                image: "/images/product/prod3.png",
                bids: 5,
            },
            "AU-2024-003",
            (1, 20),
            "Компьютер Дэлгүүр",
            None,
        ),
        (
            Seed {
                id: 4,
                name: "Samsung TV",
                description: "55-inch 4K Smart TV",
                starting_price: 3_200_000,
                current_bid: 3_200_000,
                category: Category::Electronics,
                status: ProductStatus::Pending,
                image: "/images/product/prod4.png",
                bids: 0,
            },
            "AU-2024-004",
            (1, 18),
            "Электроник Дэлгүүр",
            None,
        ),
        (
            Seed {
                id: 5,
                name: "Toyota Land Cruiser",
                description: "2018 Toyota Land Cruiser Prado",
                starting_price: 45_000_000,
                current_bid: 52_000_000,
                category: Category::Automobile,
                status: ProductStatus::Active,
                image: "/images/product/prod1.jpg",
                bids: 15,
            },
            "AU-2024-005",
            (1, 22),
            "Авто Дэлгүүр",
            None,
        ),
        (
            Seed {
                id: 6,
                name: "Rolex Watch",
                description: "Vintage Rolex Submariner",
                starting_price: 12_000_000,
                current_bid: 15_000_000,
                category: Category::Jewelry,
                status: ProductStatus::Sold,
                image: "/images/product/prod2.png",
                bids: 22,
            },
            "AU-2024-006",
            (1, 12),
            "Цаг Дэлгүүр",
            Some("Сайханбаяр"),
        ),
    ];

    rows.into_iter()
        .map(|(seed, uniq_id, (month, day), seller, winner)| {
            let is_vehicle = seed.category == Category::Automobile;
            let mut product = seed.into_product(uniq_id.to_string(), at(2024, month, day, 0, 0, 0));
            product.seller = Some(seller.to_string());
            product.winner = winner.map(str::to_string);
            product.auction_end = Some(at(2024, month + 1, day, 18, 0, 0));
            if is_vehicle {
                product.details = ProductDetails::Vehicle(land_cruiser_specs());
            }
            product
        })
        .collect()
}

/// The signed-in owner's listings. Ids derive from the creation timestamp.
pub fn my_products() -> Vec<Product> {
    let rows: [(Seed, NaiveDateTime); 4] = [
        (
            Seed {
                id: 1,
                name: "Gold Ring",
                description: "Beautiful 18k gold ring with diamond",
                starting_price: 2_500_000,
                current_bid: 2_800_000,
                category: Category::Jewelry,
                status: ProductStatus::Active,
                image: "/images/product/prod1.jpg",
                bids: 12,
            },
            at(2024, 1, 15, 10, 30, 45),
        ),
        (
            Seed {
                id: 2,
                name: "iPhone 15 Pro",
                description: "Latest iPhone with advanced features",
                starting_price: 1_500_000,
                current_bid: 1_800_000,
                category: Category::MobileTablet,
                status: ProductStatus::Ended,
                image: "/images/product/prod2.png",
                bids: 8,
            },
            at(2024, 1, 10, 14, 22, 18),
        ),
        (
            Seed {
                id: 3,
                name: "MacBook Pro",
                description: "High-performance laptop for professionals",
                starting_price: 800_000,
                current_bid: 950_000,
                category: Category::Computer,
                status: ProductStatus::Active,
                image: "/images/product/prod3.png",
                bids: 5,
            },
            at(2024, 1, 20, 9, 15, 33),
        ),
        (
            Seed {
                id: 4,
                name: "Samsung TV",
                description: "55-inch 4K Smart TV",
                starting_price: 3_200_000,
                // no bids placed yet
                current_bid: 0,
                category: Category::Electronics,
                status: ProductStatus::Pending,
                image: "/images/product/prod4.png",
                bids: 0,
            },
            at(2024, 1, 18, 16, 45, 12),
        ),
    ];

    rows.into_iter()
        .map(|(seed, created_at)| seed.into_product(generate_uniq_id(created_at), created_at))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vehicle_fields_by_name() {
        let mut specs = VehicleSpecs::default();
        assert!(specs.set("engine_capacity", "3500CC"));
        assert_eq!(specs.get("engine_capacity"), Some("3500CC"));
        assert_eq!(specs.engine_capacity, "3500CC");
        assert!(!specs.set("wheels", "4"));
        assert_eq!(specs.get("wheels"), None);
    }

    #[test]
    fn status_keys_round_trip() {
        for s in [
            ProductStatus::Active,
            ProductStatus::Ended,
            ProductStatus::Sold,
            ProductStatus::Pending,
        ] {
            assert_eq!(ProductStatus::parse(s.as_str()), Some(s));
            assert_eq!(s.label(), s.as_str().to_uppercase());
        }
        assert_eq!(ProductStatus::parse("Active"), None);
    }

    #[test]
    fn uniq_id_is_zero_padded() {
        assert_eq!(generate_uniq_id(at(2024, 1, 15, 10, 30, 45)), "AU-20240115-103045");
        assert_eq!(generate_uniq_id(at(2024, 3, 5, 7, 8, 9)), "AU-20240305-070809");
    }

    #[test]
    fn auction_fixture_shape() {
        let products = auction_products();
        assert_eq!(products.len(), 6);
        let ring = &products[0];
        assert_eq!(ring.uniq_id, "AU-2024-001");
        assert_eq!(ring.category, Category::Jewelry);
        assert_eq!(ring.auction_end, Some(at(2024, 2, 15, 18, 0, 0)));
        assert!(products
            .iter()
            .all(|p| p.winner.is_some() == (p.status == ProductStatus::Sold)));
    }

    #[test]
    fn only_vehicles_carry_specs() {
        for p in auction_products() {
            assert_eq!(p.vehicle().is_some(), p.category == Category::Automobile);
        }
    }

    #[test]
    fn my_products_ids_follow_created_at() {
        let products = my_products();
        assert_eq!(products.len(), 4);
        assert_eq!(products[0].uniq_id, "AU-20240115-103045");
        assert_eq!(products[3].uniq_id, "AU-20240118-164512");
        assert!(products
            .iter()
            .all(|p| p.uniq_id == generate_uniq_id(p.created_at)));
        assert!(products.iter().all(|p| p.seller.is_none()));
    }

    #[test]
    fn details_tag_serialization() {
        let json = serde_json::to_value(ProductDetails::General).unwrap();
        assert_eq!(json["kind"], "general");
        let json = serde_json::to_value(ProductDetails::Vehicle(VehicleSpecs::default())).unwrap();
        assert_eq!(json["kind"], "vehicle");
        assert_eq!(json["engine"], "");
    }
}
