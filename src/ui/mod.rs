/// UI layer
///
/// Page-level views and shared styling:
/// - marketing landing page (landing.rs)
/// - listings grid with toolbar, cards and skeletons (listings.rs)
/// - palette and widget styles (theme.rs)
///
/// The card component itself lives in `crate::card`; pages only
/// assemble it.

pub mod landing;
pub mod listings;
pub mod theme;
