use serde::{Deserialize, Serialize};
use crate::models::domain::{Listing, PhotoFile, SortKey};

/// Response for listing search endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub listings: Vec<Listing>,
    pub sort: SortKey,
    #[serde(rename = "appliedFilters")]
    pub applied_filters: Vec<String>,
    #[serde(rename = "ignoredFilters")]
    pub ignored_filters: Vec<String>,
    #[serde(rename = "totalResults")]
    pub total_results: usize,
    #[serde(rename = "catalogSize")]
    pub catalog_size: usize,
}

/// Filter or sort option shown in the search panel
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionResponse {
    pub key: String,
    pub label: String,
}

/// Photo batch check result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhotoValidationResponse {
    pub accepted: Vec<PhotoFile>,
    pub dropped: usize,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
