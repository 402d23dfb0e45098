use serde::{Deserialize, Serialize};

/// Top-level auction category. Serialized by its Mongolian display name,
/// which is also the key used in product records and form values.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Category {
    #[serde(rename = "АВТОМАШИН")]
    Automobile,
    #[serde(rename = "ГАР УТАС & ТАБЛЕТ")]
    MobileTablet,
    #[serde(rename = "КОМПЬЮТЕР")]
    Computer,
    #[serde(rename = "ҮНЭТ ЭДЛЭЛ")]
    Jewelry,
    #[serde(rename = "ЦАХИЛГААН БАРАА")]
    Electronics,
}

pub const ALL_CATEGORIES: &[Category] = &[
    Category::Automobile,
    Category::MobileTablet,
    Category::Computer,
    Category::Jewelry,
    Category::Electronics,
];

impl Category {
    pub fn id(&self) -> &'static str {
        match self {
            Category::Automobile => "automobile",
            Category::MobileTablet => "mobile",
            Category::Computer => "computer",
            Category::Jewelry => "jewelry",
            Category::Electronics => "electronics",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Category::Automobile => "АВТОМАШИН",
            Category::MobileTablet => "ГАР УТАС & ТАБЛЕТ",
            Category::Computer => "КОМПЬЮТЕР",
            Category::Jewelry => "ҮНЭТ ЭДЛЭЛ",
            Category::Electronics => "ЦАХИЛГААН БАРАА",
        }
    }

    pub fn name_en(&self) -> &'static str {
        match self {
            Category::Automobile => "Car",
            Category::MobileTablet => "Mobile Phone & Tablet",
            Category::Computer => "Computer",
            Category::Jewelry => "Jewelry",
            Category::Electronics => "Electronics",
        }
    }

    /// Listing count shown on the category overview cards.
    pub fn listing_count(&self) -> u32 {
        match self {
            Category::Automobile => 16,
            Category::MobileTablet => 25,
            Category::Computer => 34,
            Category::Jewelry => 62,
            Category::Electronics => 8,
        }
    }

    /// Running auctions shown in the category details table.
    pub fn active_auctions(&self) -> u32 {
        match self {
            Category::Automobile => 12,
            Category::MobileTablet => 18,
            Category::Computer => 22,
            Category::Jewelry => 35,
            Category::Electronics => 2,
        }
    }

    /// Average listing price in MNT shown in the category details table.
    pub fn average_price(&self) -> u64 {
        match self {
            Category::Automobile => 45_200_000,
            Category::MobileTablet => 1_800_000,
            Category::Computer => 3_200_000,
            Category::Jewelry => 2_100_000,
            Category::Electronics => 4_500_000,
        }
    }

    pub fn brands_path(&self) -> &'static str {
        match self {
            Category::Automobile => "/car-brands",
            Category::MobileTablet => "/mobile-brands",
            Category::Computer => "/computer-brands",
            Category::Jewelry => "/jewelry-brands",
            Category::Electronics => "/electronics-brands",
        }
    }

    /// Column count of the brands grid.
    pub fn grid_columns(&self) -> usize {
        match self {
            Category::Automobile => 5,
            _ => 3,
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        ALL_CATEGORIES.iter().copied().find(|c| c.name() == name)
    }

    pub fn from_id(id: &str) -> Option<Self> {
        ALL_CATEGORIES.iter().copied().find(|c| c.id() == id)
    }
}

/// A brand or item type within a category.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Subcategory {
    pub id: &'static str,
    pub name: &'static str,
    pub count: u32,
}

const fn subcat(id: &'static str, name: &'static str, count: u32) -> Subcategory {
    Subcategory { id, name, count }
}

const CAR_SUBCATEGORIES: &[Subcategory] = &[
    subcat("toyota", "Toyota", 2910),
    subcat("ford", "Ford", 94),
    subcat("land_rover", "Land Rover", 47),
    subcat("audi", "Audi", 23),
    subcat("changan", "Changan", 16),
    subcat("renault", "Renault", 13),
    subcat("chevrolet", "Chevrolet", 7),
    subcat("baic", "Baic", 3),
    subcat("lincoln", "Lincoln", 2),
    subcat("daihatsu", "Daihatsu", 1),
    subcat("lexus", "Lexus", 798),
    subcat("hyundai", "Hyundai", 71),
    subcat("volkswagen", "Volkswagen", 39),
    subcat("geely", "Geely", 19),
    subcat("gwm_tank", "GWM Tank", 16),
    subcat("kia", "Kia", 11),
    subcat("lada", "Lada", 6),
    subcat("chery", "Chery", 3),
    subcat("volvo", "Volvo", 2),
    subcat("fiat", "Fiat", 1),
    subcat("mercedes_benz", "Mercedes-Benz", 225),
    subcat("mitsubishi", "Mitsubishi", 63),
    subcat("honda", "Honda", 29),
    subcat("byd", "BYD", 18),
    subcat("dodge", "Dodge", 14),
    subcat("mg", "MG", 10),
    subcat("dongfeng", "Dongfeng", 5),
    subcat("neta", "Neta", 3),
    subcat("baw", "BAW", 1),
    subcat("isuzu", "Isuzu", 1),
    subcat("nissan", "Nissan", 152),
    subcat("bmw", "BMW", 56),
    subcat("mazda", "Mazda", 26),
    subcat("busad", "Бусад", 18),
    subcat("ssangyong", "SsangYong", 14),
    subcat("hummer", "Hummer", 8),
    subcat("haval", "Haval", 5),
    subcat("tesla", "Tesla", 3),
    subcat("bentley", "Bentley", 1),
    subcat("jaguar", "Jaguar", 1),
    subcat("subaru", "Subaru", 140),
    subcat("jeep", "Jeep", 54),
    subcat("suzuki", "Suzuki", 24),
    subcat("porsche", "Porsche", 17),
    subcat("mini", "MINI", 13),
    subcat("infiniti", "Infiniti", 8),
    subcat("jetour", "Jetour", 4),
    subcat("foton", "Foton", 2),
    subcat("chrysler", "Chrysler", 1),
    subcat("kaiyi", "Kaiyi", 1),
];

const MOBILE_SUBCATEGORIES: &[Subcategory] = &[
    subcat("iphone", "iPhone", 8),
    subcat("samsung", "Samsung", 12),
    subcat("xiaomi", "Xiaomi", 15),
    subcat("huawei", "Huawei", 10),
    subcat("tablet", "Tablet", 18),
    subcat("accessories", "Accessories", 22),
];

const COMPUTER_SUBCATEGORIES: &[Subcategory] = &[
    subcat("desktop", "Суурин компьютер", 12),
    subcat("notebook", "Notebook", 8),
    subcat("gaming_consoles", "PS, XBox, Nintendo", 15),
    subcat("printers_scanners", "Принтер, хувилагч, сканнер, ламинатор", 23),
    subcat("spare_parts", "Сэлбэг", 31),
    subcat("tablets_ereaders", "iPad, tablet, kindle", 19),
    subcat("printer_consumables", "Принтер, хувилагчийн хор", 27),
    subcat("headphones_3d", "Чихэвч, 3D шил", 14),
    subcat("accessories", "Дагалдах хэрэгсэл", 42),
];

const JEWELRY_SUBCATEGORIES: &[Subcategory] = &[
    subcat("zuu", "Зүү", 18),
    subcat("bogj", "Бөгж", 25),
    subcat("mungu", "Мөнгө", 12),
    subcat("tsagaan_alt", "Цагаан алт", 31),
    subcat("khurel", "Хүрэл", 19),
    subcat("erdeniin_chuluu", "Эрдэнийн чулуу", 28),
];

const ELECTRONICS_SUBCATEGORIES: &[Subcategory] = &[
    subcat("television", "Телевизор", 5),
    subcat("refrigerator", "Хөргөгч", 8),
    subcat("washing_machine", "Угаалгын машин", 12),
    subcat("air_conditioner", "Агааржуулагч", 6),
    subcat("microwave", "Микровейв", 9),
    subcat("coffee_machine", "Кофе машин", 7),
];

pub fn subcategories(category: Category) -> &'static [Subcategory] {
    match category {
        Category::Automobile => CAR_SUBCATEGORIES,
        Category::MobileTablet => MOBILE_SUBCATEGORIES,
        Category::Computer => COMPUTER_SUBCATEGORIES,
        Category::Jewelry => JEWELRY_SUBCATEGORIES,
        Category::Electronics => ELECTRONICS_SUBCATEGORIES,
    }
}

pub fn subcategory_by_id(category: Category, id: &str) -> Option<&'static Subcategory> {
    subcategories(category).iter().find(|s| s.id == id)
}

/// Case-insensitive substring match on the subcategory name. A blank term
/// returns the whole table.
pub fn search_subcategories(category: Category, term: &str) -> Vec<&'static Subcategory> {
    let needle = term.trim().to_lowercase();
    subcategories(category)
        .iter()
        .filter(|s| needle.is_empty() || s.name.to_lowercase().contains(&needle))
        .collect()
}

/// Descending by count. Equal counts keep their table order.
pub fn sorted_by_count_desc(items: &[Subcategory]) -> Vec<Subcategory> {
    let mut sorted = items.to_vec();
    sorted.sort_by(|a, b| b.count.cmp(&a.count));
    sorted
}

pub fn total_count(items: &[Subcategory]) -> u64 {
    items.iter().map(|s| u64::from(s.count)).sum()
}

/// Highest count; the earliest entry wins a tie.
pub fn top_subcategory(items: &[Subcategory]) -> Option<&Subcategory> {
    items
        .iter()
        .fold(None, |top: Option<&Subcategory>, s| match top {
            Some(t) if s.count <= t.count => Some(t),
            _ => Some(s),
        })
}

/// Share of `total` as a percentage rounded to one decimal.
pub fn share_percent(count: u32, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let pct = f64::from(count) / total as f64 * 100.0;
    (pct * 10.0).round() / 10.0
}

/// Split `items` into at most `columns` chunks of `ceil(len / columns)`.
pub fn split_columns<T: Clone>(items: &[T], columns: usize) -> Vec<Vec<T>> {
    if items.is_empty() || columns == 0 {
        return Vec::new();
    }
    let per_column = items.len().div_ceil(columns);
    items.chunks(per_column).map(<[T]>::to_vec).collect()
}
