//! PawNextDoor - listing search and booking mock service
//!
//! This library provides the listing filter/sort pipeline behind the
//! PawNextDoor search screen, plus the mock booking, refund, review and
//! photo-upload rules of the preview. Nothing is persisted.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{compute_visible_listings, SearchPipeline, SearchState};
pub use models::{FilterDefinition, Listing, SortKey};
pub use services::Catalog;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let catalog = Catalog::sample();
        let visible = compute_visible_listings(catalog.listings(), ["dog-park"], SortKey::default());
        assert_eq!(visible.len(), 1);
    }
}
