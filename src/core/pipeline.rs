use crate::models::{FilterDefinition, Listing, SortKey};
use crate::core::{
    filters::{default_filters, matches_all_filters, resolve_filters},
    sorting::sort_listings,
};

/// Result of running the search pipeline
#[derive(Debug)]
pub struct SearchResult<'a> {
    pub listings: Vec<&'a Listing>,
    pub applied_filters: Vec<String>,
    pub ignored_filters: Vec<String>,
    pub catalog_size: usize,
}

/// Search orchestrator over a fixed filter-definition table
///
/// # Pipeline Stages
/// 1. Resolve active filter keys (unknown keys are ignored)
/// 2. Retain listings satisfying every active filter
/// 3. Stable sort by the selected key
#[derive(Debug, Clone)]
pub struct SearchPipeline {
    filters: Vec<FilterDefinition>,
}

impl SearchPipeline {
    pub fn new(filters: Vec<FilterDefinition>) -> Self {
        Self { filters }
    }

    pub fn with_default_filters() -> Self {
        Self {
            filters: default_filters().to_vec(),
        }
    }

    pub fn filters(&self) -> &[FilterDefinition] {
        &self.filters
    }

    /// Filter and sort the catalog
    ///
    /// The catalog is only borrowed; the returned listings point into it in
    /// display order. An empty result means nothing matched.
    pub fn search<'a, K>(
        &self,
        catalog: &'a [Listing],
        active_filter_keys: impl IntoIterator<Item = K>,
        sort: SortKey,
    ) -> SearchResult<'a>
    where
        K: AsRef<str>,
    {
        let resolved = resolve_filters(&self.filters, active_filter_keys);
        let listings = filter_and_sort(catalog, &resolved.active, sort);

        tracing::debug!(
            "Search kept {} of {} listings (filters: {:?}, ignored: {:?}, sort: {})",
            listings.len(),
            catalog.len(),
            resolved.applied_keys(),
            resolved.unknown,
            sort.key()
        );

        SearchResult {
            applied_filters: resolved.applied_keys(),
            ignored_filters: resolved.unknown,
            listings,
            catalog_size: catalog.len(),
        }
    }
}

impl Default for SearchPipeline {
    fn default() -> Self {
        Self::with_default_filters()
    }
}

/// Compute the ordered listings visible for a filter selection and sort key
/// using the standard filter table
pub fn compute_visible_listings<'a, K>(
    catalog: &'a [Listing],
    active_filter_keys: impl IntoIterator<Item = K>,
    sort: SortKey,
) -> Vec<&'a Listing>
where
    K: AsRef<str>,
{
    let resolved = resolve_filters(default_filters(), active_filter_keys);
    filter_and_sort(catalog, &resolved.active, sort)
}

fn filter_and_sort<'a>(
    catalog: &'a [Listing],
    filters: &[&FilterDefinition],
    sort: SortKey,
) -> Vec<&'a Listing> {
    let mut listings: Vec<&Listing> = catalog
        .iter()
        .filter(|listing| matches_all_filters(listing, filters))
        .collect();

    sort_listings(&mut listings, sort);
    listings
}
