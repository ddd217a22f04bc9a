// Service exports
pub mod catalog;

pub use catalog::{sample_listings, sample_receipts, Catalog};
