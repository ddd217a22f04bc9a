use serde::{Deserialize, Deserializer, Serialize};

/// Host listing shown to pet owners during search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub id: u32,
    pub name: String,
    pub address: String,
    #[serde(rename = "pricePerNight")]
    pub price: f64,
    pub rating: f64,
    #[serde(rename = "distanceMiles")]
    pub distance_miles: f64,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Listing {
    /// True if any tag contains `needle` (expected lowercase), ignoring case
    #[inline]
    pub fn has_tag_containing(&self, needle: &str) -> bool {
        self.tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(needle))
    }
}

/// Named boolean predicate over a listing's tags
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterDefinition {
    pub key: String,
    pub label: String,
    #[serde(deserialize_with = "lowercase")]
    target: String,
}

fn lowercase<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    String::deserialize(deserializer).map(|s| s.to_lowercase())
}

impl FilterDefinition {
    pub fn new(key: impl Into<String>, label: impl Into<String>, target: &str) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            target: target.to_lowercase(),
        }
    }

    #[inline]
    pub fn matches(&self, listing: &Listing) -> bool {
        listing.has_tag_containing(&self.target)
    }
}

/// Ordering mode for search results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortKey {
    #[default]
    #[serde(rename = "price-asc")]
    PriceAsc,
    #[serde(rename = "price-desc")]
    PriceDesc,
    #[serde(rename = "rating-desc")]
    RatingDesc,
    #[serde(rename = "distance-asc")]
    DistanceAsc,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [
        SortKey::PriceAsc,
        SortKey::PriceDesc,
        SortKey::RatingDesc,
        SortKey::DistanceAsc,
    ];

    /// Parse a wire key, falling back to price ascending for anything unknown
    pub fn from_key(key: &str) -> Self {
        match key.trim().to_lowercase().as_str() {
            "price-desc" => SortKey::PriceDesc,
            "rating-desc" => SortKey::RatingDesc,
            "distance-asc" => SortKey::DistanceAsc,
            _ => SortKey::PriceAsc,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            SortKey::PriceAsc => "price-asc",
            SortKey::PriceDesc => "price-desc",
            SortKey::RatingDesc => "rating-desc",
            SortKey::DistanceAsc => "distance-asc",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::PriceAsc => "Lowest price",
            SortKey::PriceDesc => "Highest price",
            SortKey::RatingDesc => "Highest rated",
            SortKey::DistanceAsc => "Closest",
        }
    }
}

/// Past payment shown on the receipts screen
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Receipt {
    pub id: String,
    pub date: chrono::NaiveDate,
    pub host: String,
    pub nights: u32,
    pub total: f64,
    #[serde(rename = "cardLast4")]
    pub card_last4: String,
    pub status: ReceiptStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReceiptStatus {
    Paid,
    Refunded,
}

/// Priced stay for one listing over a date range
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingQuote {
    #[serde(rename = "listingId")]
    pub listing_id: u32,
    pub host: String,
    #[serde(rename = "checkIn")]
    pub check_in: chrono::NaiveDate,
    #[serde(rename = "checkOut")]
    pub check_out: chrono::NaiveDate,
    pub nights: u32,
    #[serde(rename = "pricePerNight")]
    pub price_per_night: f64,
    pub subtotal: f64,
    #[serde(rename = "platformFee")]
    pub platform_fee: f64,
    #[serde(rename = "hostPayout")]
    pub host_payout: f64,
}

/// Fabricated result of paying for a quote
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingConfirmation {
    #[serde(rename = "bookingNumber")]
    pub booking_number: String,
    #[serde(rename = "confirmationCode")]
    pub confirmation_code: String,
    #[serde(rename = "receiptId")]
    pub receipt_id: String,
    pub quote: BookingQuote,
    #[serde(rename = "confirmedAt")]
    pub confirmed_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RefundReason {
    ChangeOfPlans,
    HostIssue,
    PetHealth,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RefundKind {
    Full,
    Partial,
}

/// Outcome of applying the cancellation policy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RefundDecision {
    pub kind: RefundKind,
    #[serde(rename = "refundAmount")]
    pub refund_amount: f64,
    #[serde(rename = "hoursBeforeCheckIn")]
    pub hours_before_check_in: i64,
}

/// Highlight tags a reviewer can tick
pub const REVIEW_HIGHLIGHTS: [&str; 6] = [
    "Clean",
    "Caring",
    "Great Yard",
    "Good Updates",
    "On-time",
    "Would Rebook",
];

/// Accepted review with a fabricated id
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    pub id: String,
    #[serde(rename = "listingId")]
    pub listing_id: u32,
    pub stars: u8,
    pub highlights: Vec<String>,
    pub comment: Option<String>,
    #[serde(rename = "createdAt")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// Metadata of a file picked for upload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoFile {
    pub name: String,
    #[serde(rename = "contentType")]
    pub content_type: String,
    #[serde(rename = "sizeBytes")]
    pub size_bytes: u64,
}

/// Upload limits
#[derive(Debug, Clone)]
pub struct PhotoLimits {
    pub max_files: usize,
    pub max_file_bytes: u64,
    pub allowed_types: Vec<String>,
}

impl Default for PhotoLimits {
    fn default() -> Self {
        Self {
            max_files: 5,
            max_file_bytes: 5 * 1024 * 1024,
            allowed_types: vec![
                "image/png".to_string(),
                "image/jpeg".to_string(),
                "image/webp".to_string(),
            ],
        }
    }
}

/// Cancellation policy parameters
#[derive(Debug, Clone, Copy)]
pub struct RefundPolicy {
    pub full_refund_notice_hours: i64,
    pub partial_refund_rate: f64,
}

impl Default for RefundPolicy {
    fn default() -> Self {
        Self {
            full_refund_notice_hours: 24,
            partial_refund_rate: 0.5,
        }
    }
}
