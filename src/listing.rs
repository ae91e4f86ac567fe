/// Listing data model
///
/// These structs represent the catalog data that flows between the
/// sample-catalog loader and the UI layer. A `Listing` is the full
/// record; `card_input` projects it down to the props one card needs.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::card::input::{CardInput, Location};
use crate::constants::{PriceRange, SortOption, NEW_LISTING_DAYS};
use crate::format;

/// One property in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub id: String,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub currency: String,
    pub location: ListingLocation,
    #[serde(default)]
    pub images: Vec<String>,
    pub host: Host,
    #[serde(default)]
    pub amenities: Vec<String>,
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub guests: u32,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub reviews: Option<u32>,
    pub available: bool,
    /// Day the listing went live; drives the "New" badge
    pub listed_at: NaiveDate,
    /// Next availability window, if the host published one
    #[serde(default)]
    pub available_from: Option<NaiveDate>,
    #[serde(default)]
    pub available_to: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingLocation {
    pub city: String,
    pub country: String,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub coordinates: Option<Coordinates>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Host {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub superhost: bool,
}

impl Listing {
    /// Project this listing into card props. `favorite` is supplied by
    /// the caller because wishlist state lives outside the catalog.
    pub fn card_input(&self, favorite: bool) -> CardInput {
        let date_range = match (self.available_from, self.available_to) {
            (Some(from), Some(to)) => Some(format::format_date_range(from, to)),
            _ => None,
        };

        CardInput {
            id: self.id.clone(),
            title: self.title.clone(),
            images: self.images.clone(),
            location: Some(Location::Parts {
                city: Some(self.location.city.clone()),
                region: self.location.region.clone(),
                country: Some(self.location.country.clone()),
            }),
            price_per_night: self.price,
            currency: Some(self.currency.clone()),
            rating: self.rating,
            review_count: self.reviews,
            is_favorite: favorite,
            is_superhost: self.host.superhost,
            is_new: self.is_new(),
            date_range,
        }
    }

    /// Listed within the last [`NEW_LISTING_DAYS`] days
    pub fn is_new(&self) -> bool {
        let today = Utc::now().date_naive();
        (today - self.listed_at).num_days() <= NEW_LISTING_DAYS
    }

    pub fn sort_key(&self) -> CardSortKey {
        CardSortKey {
            price: self.price,
            rating: self.rating,
            listed_at: self.listed_at,
        }
    }
}

/// Comparator matching a toolbar sort order. Listings without a rating
/// sort last under "Highest Rated".
pub fn compare(a: &CardSortKey, b: &CardSortKey, sort: SortOption) -> std::cmp::Ordering {
    use std::cmp::Ordering;

    match sort {
        SortOption::PriceAsc => a.price.total_cmp(&b.price),
        SortOption::PriceDesc => b.price.total_cmp(&a.price),
        SortOption::Rating => match (a.rating, b.rating) {
            (Some(x), Some(y)) => y.total_cmp(&x),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        },
        SortOption::Newest => b.listed_at.cmp(&a.listed_at),
    }
}

/// The fields sorting needs, so cards and listings can share `compare`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardSortKey {
    pub price: f64,
    pub rating: Option<f64>,
    pub listed_at: NaiveDate,
}

/// Active listing filters. Only the price bracket has a toolbar
/// control today; guests and amenities mirror the catalog's query
/// surface and wait on their own pickers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterOptions {
    pub price: Option<PriceRange>,
    pub guests: Option<u32>,
    pub amenities: Vec<String>,
}

impl FilterOptions {
    pub fn matches(&self, listing: &Listing) -> bool {
        if let Some(range) = self.price {
            if !range.contains(listing.price) {
                return false;
            }
        }
        if let Some(guests) = self.guests {
            if listing.guests < guests {
                return false;
            }
        }
        self.amenities
            .iter()
            .all(|amenity| listing.amenities.iter().any(|have| have == amenity))
    }

    /// Restrict to one nightly-price bracket
    pub fn with_price_range(range: PriceRange) -> Self {
        FilterOptions {
            price: Some(range),
            ..FilterOptions::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Listing {
        Listing {
            id: "l-1".into(),
            title: "Canal House".into(),
            description: "A quiet house on the canal".into(),
            price: 180.0,
            currency: "EUR".into(),
            location: ListingLocation {
                city: "Amsterdam".into(),
                country: "Netherlands".into(),
                region: None,
                address: None,
                coordinates: None,
            },
            images: vec!["photos/canal.jpg".into()],
            host: Host {
                id: "h-1".into(),
                name: "Mara".into(),
                avatar: None,
                superhost: true,
            },
            amenities: vec!["WiFi".into(), "Kitchen".into()],
            bedrooms: 2,
            bathrooms: 1,
            guests: 4,
            rating: Some(4.8),
            reviews: Some(52),
            available: true,
            listed_at: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            available_from: NaiveDate::from_ymd_opt(2025, 6, 10),
            available_to: NaiveDate::from_ymd_opt(2025, 6, 15),
        }
    }

    #[test]
    fn test_card_input_projection() {
        let listing = sample();
        let input = listing.card_input(true);

        assert_eq!(input.id, "l-1");
        assert_eq!(input.currency(), "EUR");
        assert!(input.is_favorite);
        assert!(input.is_superhost);
        assert_eq!(input.date_range.as_deref(), Some("Jun 10 - 15"));
        assert_eq!(
            crate::format::resolve_location(input.location.as_ref()),
            "Amsterdam, Netherlands"
        );
    }

    #[test]
    fn test_new_badge_window() {
        let mut listing = sample();
        listing.listed_at = Utc::now().date_naive();
        assert!(listing.is_new());

        listing.listed_at = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        assert!(!listing.is_new());
    }

    #[test]
    fn test_rating_sort_puts_unrated_last() {
        let rated = CardSortKey {
            price: 100.0,
            rating: Some(4.2),
            listed_at: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        };
        let unrated = CardSortKey { rating: None, ..rated };
        assert_eq!(
            compare(&rated, &unrated, SortOption::Rating),
            std::cmp::Ordering::Less
        );
    }

    #[test]
    fn test_filter_price_and_amenities() {
        use crate::constants::PRICE_RANGES;

        let listing = sample();

        let bracket = FilterOptions::with_price_range(PRICE_RANGES[2]);
        assert!(bracket.matches(&listing));

        let too_cheap = FilterOptions::with_price_range(PRICE_RANGES[0]);
        assert!(!too_cheap.matches(&listing));

        // The open-ended bracket admits any price above its floor
        let mut splurge = sample();
        splurge.price = 750.0;
        let open_ended = FilterOptions::with_price_range(PRICE_RANGES[4]);
        assert!(open_ended.matches(&splurge));
        assert!(!open_ended.matches(&listing));

        let needs_pool = FilterOptions {
            amenities: vec!["Pool".into()],
            ..FilterOptions::default()
        };
        assert!(!needs_pool.matches(&listing));
    }
}
