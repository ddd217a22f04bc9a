use chrono::NaiveDate;
use crate::models::{Listing, Receipt, ReceiptStatus, SortKey};

/// Read-only in-memory catalog served by the API
///
/// Built once at start-up and shared between workers.
#[derive(Debug, Clone)]
pub struct Catalog {
    listings: Vec<Listing>,
    receipts: Vec<Receipt>,
}

impl Catalog {
    pub fn new(listings: Vec<Listing>, receipts: Vec<Receipt>) -> Self {
        Self { listings, receipts }
    }

    /// Catalog holding the preview sample data
    pub fn sample() -> Self {
        Self::new(sample_listings(), sample_receipts())
    }

    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    pub fn receipts(&self) -> &[Receipt] {
        &self.receipts
    }

    pub fn find(&self, id: u32) -> Option<&Listing> {
        self.listings.iter().find(|l| l.id == id)
    }

    pub fn sort_options(&self) -> &'static [SortKey] {
        &SortKey::ALL
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::sample()
    }
}

fn listing(
    id: u32,
    name: &str,
    address: &str,
    price: f64,
    rating: f64,
    distance_miles: f64,
    tags: &[&str],
) -> Listing {
    Listing {
        id,
        name: name.to_string(),
        address: address.to_string(),
        price,
        rating,
        distance_miles,
        tags: tags.iter().map(|t| t.to_string()).collect(),
    }
}

/// The four host listings shown in the preview
pub fn sample_listings() -> Vec<Listing> {
    vec![
        listing(1, "Sarah M.", "Oak Lane, Montgomery, AL", 48.0, 4.9, 0.6,
            &["Big backyard", "Fenced yard", "No other pets"]),
        listing(2, "Jason & Priya", "Riverbend Drive, Montgomery, AL", 52.0, 4.8, 1.2,
            &["Works from home", "Kid-friendly", "Calm neighborhood"]),
        listing(3, "Emily R.", "Pine Street, Pike Road, AL", 44.0, 4.7, 3.4,
            &["Big backyard", "Fenced yard", "Quiet street"]),
        listing(4, "Marcus L.", "Downtown loft, Montgomery, AL", 55.0, 5.0, 0.9,
            &["Indoor only", "Elevator access", "Near dog park"]),
    ]
}

/// Payment history shown on the receipts screen
pub fn sample_receipts() -> Vec<Receipt> {
    vec![
        Receipt {
            id: "RCT-000241".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 11, 12).unwrap_or_default(),
            host: "Sarah M.".to_string(),
            nights: 3,
            total: 144.0,
            card_last4: "4242".to_string(),
            status: ReceiptStatus::Paid,
        },
        Receipt {
            id: "RCT-000197".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 10, 28).unwrap_or_default(),
            host: "Backyard Bungalow".to_string(),
            nights: 2,
            total: 96.0,
            card_last4: "1111".to_string(),
            status: ReceiptStatus::Paid,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_ids_unique() {
        let listings = sample_listings();
        for (i, a) in listings.iter().enumerate() {
            for b in &listings[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn test_sample_values_in_range() {
        for l in sample_listings() {
            assert!(l.price > 0.0);
            assert!((0.0..=5.0).contains(&l.rating));
            assert!(l.distance_miles >= 0.0);
        }
    }

    #[test]
    fn test_find() {
        let catalog = Catalog::sample();
        assert_eq!(catalog.find(4).map(|l| l.name.as_str()), Some("Marcus L."));
        assert!(catalog.find(99).is_none());
    }

    #[test]
    fn test_receipts_are_payments_only() {
        let catalog = Catalog::sample();
        assert_eq!(catalog.receipts().len(), 2);
        assert!(catalog.receipts().iter().all(|r| r.id.starts_with("RCT-")));
    }
}
