/// Application-wide constants
///
/// Static configuration shared between the landing page, the listings
/// page and the card formatting helpers. Nothing in here is mutable
/// at runtime.

use std::fmt;

/// Application display name (window title, landing hero)
pub const APP_NAME: &str = "StayFinder";

/// Tagline shown on the landing page and in the window subtitle
pub const APP_DESCRIPTION: &str = "Find and book unique places to stay";

/// Currency assumed when a listing does not specify one
pub const DEFAULT_CURRENCY: &str = "USD";

/// How many cards (or skeletons) one page of the grid shows
pub const ITEMS_PER_PAGE: usize = 12;

/// A listing counts as "New" for this many days after being listed
pub const NEW_LISTING_DAYS: i64 = 30;

/// Canonical amenity names a listing may advertise
pub const AMENITIES: [&str; 14] = [
    "WiFi",
    "Kitchen",
    "Air Conditioning",
    "Heating",
    "Parking",
    "Pool",
    "Gym",
    "TV",
    "Washer",
    "Dryer",
    "Hot Tub",
    "Workspace",
    "Pet Friendly",
    "Smoking Allowed",
];

/// Sort orders offered by the listings toolbar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOption {
    PriceAsc,
    PriceDesc,
    Rating,
    #[default]
    Newest,
}

impl SortOption {
    /// All options, in the order the toolbar presents them
    pub const ALL: [SortOption; 4] = [
        SortOption::PriceAsc,
        SortOption::PriceDesc,
        SortOption::Rating,
        SortOption::Newest,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SortOption::PriceAsc => "Price: Low to High",
            SortOption::PriceDesc => "Price: High to Low",
            SortOption::Rating => "Highest Rated",
            SortOption::Newest => "Newest First",
        }
    }
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A nightly-price bracket for the filter dropdown.
/// `max` is exclusive; the open-ended bracket uses `f64::INFINITY`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
    label: &'static str,
}

impl PriceRange {
    pub fn contains(&self, price: f64) -> bool {
        price >= self.min && price < self.max
    }
}

impl fmt::Display for PriceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label)
    }
}

/// Price brackets for the listings filter
pub const PRICE_RANGES: [PriceRange; 5] = [
    PriceRange { min: 0.0, max: 50.0, label: "Under $50" },
    PriceRange { min: 50.0, max: 100.0, label: "$50 - $100" },
    PriceRange { min: 100.0, max: 200.0, label: "$100 - $200" },
    PriceRange { min: 200.0, max: 500.0, label: "$200 - $500" },
    PriceRange { min: 500.0, max: f64::INFINITY, label: "$500+" },
];
