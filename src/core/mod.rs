// Core logic exports
pub mod filters;
pub mod photos;
pub mod pipeline;
pub mod pricing;
pub mod reviews;
pub mod sorting;
pub mod view;

pub use filters::{default_filters, matches_all_filters, resolve_filters};
pub use photos::{add_photos, PhotoError, PhotoSelection};
pub use pipeline::{compute_visible_listings, SearchPipeline, SearchResult};
pub use pricing::{confirm, evaluate_refund, quote, BookingError};
pub use reviews::{submit_review, ReviewError};
pub use sorting::{compare_listings, sort_listings};
pub use view::SearchState;
