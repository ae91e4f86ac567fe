/// Sample listing catalog
///
/// The browsing demo has no server; its catalog is a JSON document.
/// Loading prefers the on-disk copy (so the sample data can be edited
/// without rebuilding) and falls back to the compiled-in copy. The read
/// and parse run off the UI thread via `Task::perform`.

use std::sync::Arc;

use thiserror::Error;

use crate::listing::Listing;

/// On-disk location checked before the built-in copy
pub const CATALOG_PATH: &str = "assets/listings.json";

const BUILT_IN: &str = include_str!("../assets/listings.json");

#[derive(Debug, Clone, Error)]
pub enum CatalogError {
    // Arc keeps the error Clone-able across the message channel
    #[error("invalid listing catalog: {0}")]
    Parse(Arc<serde_json::Error>),
}

/// Load the catalog, disk first, built-in fallback
pub async fn load() -> Result<Vec<Listing>, CatalogError> {
    let document = match tokio::fs::read_to_string(CATALOG_PATH).await {
        Ok(text) => text,
        Err(_) => BUILT_IN.to_owned(),
    };
    parse(&document)
}

pub fn parse(document: &str) -> Result<Vec<Listing>, CatalogError> {
    serde_json::from_str(document).map_err(|error| CatalogError::Parse(Arc::new(error)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::AMENITIES;

    #[test]
    fn test_built_in_catalog_parses() {
        let listings = parse(BUILT_IN).expect("built-in catalog must parse");
        assert!(!listings.is_empty());
    }

    #[test]
    fn test_built_in_ids_are_unique_and_non_empty() {
        let listings = parse(BUILT_IN).unwrap();
        let mut ids: Vec<&str> = listings.iter().map(|l| l.id.as_str()).collect();
        assert!(ids.iter().all(|id| !id.is_empty()));
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), listings.len());
    }

    #[test]
    fn test_built_in_amenities_are_canonical() {
        for listing in parse(BUILT_IN).unwrap() {
            for amenity in &listing.amenities {
                assert!(
                    AMENITIES.contains(&amenity.as_str()),
                    "unknown amenity {:?} in {}",
                    amenity,
                    listing.id
                );
            }
        }
    }

    #[test]
    fn test_malformed_document_is_an_error() {
        assert!(parse("{not json").is_err());
        assert!(parse("[{\"id\": 4}]").is_err());
    }
}
