use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::models::domain::{PhotoFile, RefundReason};

/// Query string for listing search
///
/// `filters` is a comma separated list of filter keys.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListingsQuery {
    #[serde(default)]
    pub filters: Option<String>,
    #[serde(default)]
    pub sort: Option<String>,
}

impl ListingsQuery {
    pub fn filter_keys(&self) -> Vec<String> {
        self.filters
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// JSON body for listing search
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchRequest {
    #[serde(default)]
    pub filters: Vec<String>,
    #[serde(default)]
    pub sort: Option<String>,
}

/// Request to price a stay
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct QuoteRequest {
    #[validate(range(min = 1))]
    #[serde(alias = "listing_id", rename = "listingId")]
    pub listing_id: u32,
    #[serde(alias = "check_in", rename = "checkIn")]
    pub check_in: chrono::NaiveDate,
    #[serde(alias = "check_out", rename = "checkOut")]
    pub check_out: chrono::NaiveDate,
}

/// Request to evaluate a cancellation against the refund policy
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RefundRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "booking_number", rename = "bookingNumber")]
    pub booking_number: String,
    #[validate(range(min = 0.0))]
    pub amount: f64,
    #[serde(alias = "check_in_at", rename = "checkInAt")]
    pub check_in_at: chrono::DateTime<chrono::Utc>,
    /// Defaults to the time the request is handled
    #[serde(default, alias = "requested_at", rename = "requestedAt")]
    pub requested_at: Option<chrono::DateTime<chrono::Utc>>,
    pub reason: RefundReason,
    #[validate(length(max = 2000))]
    #[serde(default)]
    pub details: Option<String>,
}

/// Request to leave a rating for a stay
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ReviewRequest {
    #[validate(range(min = 1))]
    #[serde(alias = "listing_id", rename = "listingId")]
    pub listing_id: u32,
    #[validate(range(min = 1, max = 5))]
    pub stars: u8,
    #[serde(default)]
    pub highlights: Vec<String>,
    #[validate(length(max = 2000))]
    #[serde(default)]
    pub comment: Option<String>,
}

/// Request to check a batch of picked photos
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PhotoValidationRequest {
    #[serde(default)]
    pub existing: Vec<PhotoFile>,
    #[validate(length(min = 1))]
    pub incoming: Vec<PhotoFile>,
    #[validate(range(min = 1, max = 20))]
    #[serde(default, alias = "max_files", rename = "maxFiles")]
    pub max_files: Option<usize>,
}
