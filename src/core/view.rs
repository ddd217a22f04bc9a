use std::collections::BTreeSet;
use crate::models::{Listing, SortKey};
use crate::core::pipeline::{compute_visible_listings, SearchPipeline};

/// Filter and sort selections owned by the search screen
///
/// Every change is followed by a fresh call to [`SearchState::visible`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchState {
    active_filters: BTreeSet<String>,
    sort: SortKey,
}

impl SearchState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_filters(&self) -> &BTreeSet<String> {
        &self.active_filters
    }

    pub fn sort(&self) -> SortKey {
        self.sort
    }

    /// Enable the filter if it is off, disable it if it is on
    ///
    /// Returns whether the filter is active afterwards.
    pub fn toggle_filter(&mut self, key: &str) -> bool {
        if self.active_filters.remove(key) {
            false
        } else {
            self.active_filters.insert(key.to_string());
            true
        }
    }

    pub fn clear_filters(&mut self) {
        self.active_filters.clear();
    }

    pub fn set_sort(&mut self, sort: SortKey) {
        self.sort = sort;
    }

    /// Listings to render for the current selections, using the standard filter table
    pub fn visible<'a>(&self, catalog: &'a [Listing]) -> Vec<&'a Listing> {
        compute_visible_listings(catalog, &self.active_filters, self.sort)
    }

    /// Same as [`SearchState::visible`] but against a custom filter table
    pub fn visible_with<'a>(&self, pipeline: &SearchPipeline, catalog: &'a [Listing]) -> Vec<&'a Listing> {
        pipeline
            .search(catalog, &self.active_filters, self.sort)
            .listings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FilterDefinition;
    use crate::services::catalog::sample_listings;

    #[test]
    fn test_toggle_twice_restores() {
        let mut state = SearchState::new();

        assert!(state.toggle_filter("fenced"));
        assert!(state.active_filters().contains("fenced"));
        assert!(!state.toggle_filter("fenced"));
        assert!(state.active_filters().is_empty());
    }

    #[test]
    fn test_default_sort_is_price_ascending() {
        assert_eq!(SearchState::new().sort(), SortKey::PriceAsc);
    }

    #[test]
    fn test_visible_follows_state() {
        let catalog = sample_listings();
        let mut state = SearchState::new();

        assert_eq!(state.visible(&catalog).len(), 4);

        state.toggle_filter("fenced");
        state.toggle_filter("no-other-pets");
        let ids: Vec<u32> = state.visible(&catalog).iter().map(|l| l.id).collect();
        assert_eq!(ids, vec![1]);

        state.clear_filters();
        state.set_sort(SortKey::DistanceAsc);
        let ids: Vec<u32> = state.visible(&catalog).iter().map(|l| l.id).collect();
        assert_eq!(ids, vec![1, 4, 2, 3]);
    }

    #[test]
    fn test_visible_with_custom_table() {
        let catalog = sample_listings();
        let pipeline = SearchPipeline::new(vec![FilterDefinition::new("quiet", "Quiet street", "quiet")]);
        let mut state = SearchState::new();

        state.toggle_filter("quiet");
        state.toggle_filter("fenced");

        let custom: Vec<u32> = state.visible_with(&pipeline, &catalog).iter().map(|l| l.id).collect();
        assert_eq!(custom, vec![3]);
        assert_eq!(state.visible(&catalog).len(), 2);
    }
}
