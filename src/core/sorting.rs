use std::cmp::Ordering;
use crate::models::{Listing, SortKey};

/// Compare two listings under the given sort key
///
/// Equal values (and NaN) compare as `Equal` so a stable sort keeps catalog order.
#[inline]
pub fn compare_listings(a: &Listing, b: &Listing, sort: SortKey) -> Ordering {
    let ordering = match sort {
        SortKey::PriceAsc => a.price.partial_cmp(&b.price),
        SortKey::PriceDesc => b.price.partial_cmp(&a.price),
        SortKey::RatingDesc => b.rating.partial_cmp(&a.rating),
        SortKey::DistanceAsc => a.distance_miles.partial_cmp(&b.distance_miles),
    };

    ordering.unwrap_or(Ordering::Equal)
}

/// Stable in-place sort of borrowed listings
pub fn sort_listings(listings: &mut [&Listing], sort: SortKey) {
    listings.sort_by(|a, b| compare_listings(a, b, sort));
}
