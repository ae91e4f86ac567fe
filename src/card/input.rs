/// Caller-supplied card props
///
/// `CardInput` is the immutable per-render description of one listing
/// summary. The card component never mutates it; everything it shows is
/// derived from these fields plus its own carousel index.

use crate::constants::DEFAULT_CURRENCY;

/// Where a listing is, either already formatted or as structured parts
#[derive(Debug, Clone, PartialEq)]
pub enum Location {
    /// Pre-formatted display text, shown verbatim
    Formatted(String),
    /// Structured parts, joined as "city, region, country" with absent
    /// or empty parts skipped
    Parts {
        city: Option<String>,
        region: Option<String>,
        country: Option<String>,
    },
}

/// Everything a caller supplies to render one listing card.
///
/// `id` is the correlation key: it round-trips unchanged into every
/// intent the card reports. Optional fields default to absent; an
/// absent `currency` means [`DEFAULT_CURRENCY`].
#[derive(Debug, Clone, PartialEq)]
pub struct CardInput {
    pub id: String,
    /// Visible heading, also the image fallback description
    pub title: String,
    /// Ordered photo references; may be empty (a placeholder slot is
    /// substituted so the carousel never sees a zero-length sequence)
    pub images: Vec<String>,
    pub location: Option<Location>,
    pub price_per_night: f64,
    pub currency: Option<String>,
    /// 0..5, not validated (permissive pass-through)
    pub rating: Option<f64>,
    /// Only shown next to `rating`; ignored on its own
    pub review_count: Option<u32>,
    pub is_favorite: bool,
    pub is_superhost: bool,
    pub is_new: bool,
    /// Free-text availability badge, e.g. "Jun 10 - 15"
    pub date_range: Option<String>,
}

impl CardInput {
    /// Minimal input; everything optional starts absent
    pub fn new(id: impl Into<String>, title: impl Into<String>, price_per_night: f64) -> Self {
        CardInput {
            id: id.into(),
            title: title.into(),
            images: Vec::new(),
            location: None,
            price_per_night,
            currency: None,
            rating: None,
            review_count: None,
            is_favorite: false,
            is_superhost: false,
            is_new: false,
            date_range: None,
        }
    }

    /// Currency code used for price formatting
    pub fn currency(&self) -> &str {
        self.currency.as_deref().unwrap_or(DEFAULT_CURRENCY)
    }

    /// Number of carousel slots. An empty image list still yields one
    /// slot (the built-in placeholder), never zero.
    pub fn image_slots(&self) -> usize {
        self.images.len().max(1)
    }

    /// Image reference for a slot, if the slot holds a usable one.
    /// `None` means the slot renders the "No image" placeholder.
    pub fn image_at(&self, index: usize) -> Option<&str> {
        self.images.get(index).map(String::as_str).filter(|s| !s.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_images_still_one_slot() {
        let input = CardInput::new("l-1", "Loft", 90.0);
        assert_eq!(input.image_slots(), 1);
        assert_eq!(input.image_at(0), None);
    }

    #[test]
    fn test_blank_reference_is_a_placeholder_slot() {
        let mut input = CardInput::new("l-1", "Loft", 90.0);
        input.images = vec![String::new(), "photos/a.jpg".into()];
        assert_eq!(input.image_slots(), 2);
        assert_eq!(input.image_at(0), None);
        assert_eq!(input.image_at(1), Some("photos/a.jpg"));
    }

    #[test]
    fn test_currency_defaults_to_usd() {
        let mut input = CardInput::new("l-1", "Loft", 90.0);
        assert_eq!(input.currency(), "USD");
        input.currency = Some("EUR".into());
        assert_eq!(input.currency(), "EUR");
    }
}
