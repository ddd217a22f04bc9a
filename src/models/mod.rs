// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    BookingConfirmation, BookingQuote, FilterDefinition, Listing, PhotoFile, PhotoLimits, Receipt,
    ReceiptStatus, RefundDecision, RefundKind, RefundPolicy, RefundReason, Review, SortKey,
    REVIEW_HIGHLIGHTS,
};
pub use requests::{ListingsQuery, PhotoValidationRequest, QuoteRequest, RefundRequest, ReviewRequest, SearchRequest};
pub use responses::{ErrorResponse, HealthResponse, OptionResponse, PhotoValidationResponse, SearchResponse};
