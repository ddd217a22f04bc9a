use chrono::{DateTime, NaiveDate, Utc};
use thiserror::Error;
use uuid::Uuid;
use crate::models::{BookingConfirmation, BookingQuote, Listing, RefundDecision, RefundKind, RefundPolicy};

/// Errors that can occur while pricing or confirming a stay
#[derive(Debug, Error, PartialEq)]
pub enum BookingError {
    #[error("Check-out ({check_out}) must be at least one night after check-in ({check_in})")]
    InvalidDateRange {
        check_in: NaiveDate,
        check_out: NaiveDate,
    },

    #[error("Unknown listing: {0}")]
    UnknownListing(u32),
}

/// Round a currency amount to cents
#[inline]
pub fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// Price a stay at a listing
///
/// Nights are whole days between check-in and check-out. The platform keeps
/// `fee_rate` of the subtotal and the rest is the host payout.
pub fn quote(
    listing: &Listing,
    check_in: NaiveDate,
    check_out: NaiveDate,
    fee_rate: f64,
) -> Result<BookingQuote, BookingError> {
    let nights = (check_out - check_in).num_days();
    if nights < 1 {
        return Err(BookingError::InvalidDateRange { check_in, check_out });
    }

    let subtotal = round_cents(listing.price * nights as f64);
    let platform_fee = round_cents(subtotal * fee_rate.clamp(0.0, 1.0));

    Ok(BookingQuote {
        listing_id: listing.id,
        host: listing.name.clone(),
        check_in,
        check_out,
        nights: nights as u32,
        price_per_night: listing.price,
        subtotal,
        platform_fee,
        host_payout: round_cents(subtotal - platform_fee),
    })
}

/// Fabricate a confirmation for a quote
///
/// Nothing is charged or stored; the identifiers are derived from a random UUID.
pub fn confirm(quote: BookingQuote) -> BookingConfirmation {
    let id = Uuid::new_v4();
    let bytes = id.as_bytes();
    let code: String = id
        .simple()
        .to_string()
        .to_uppercase()
        .chars()
        .take(7)
        .collect();

    let booking_seq = u32::from_be_bytes([0, bytes[8], bytes[9], bytes[10]]) % 100_000;
    let receipt_seq = u32::from_be_bytes([0, bytes[11], bytes[12], bytes[13]]) % 1_000_000;

    tracing::debug!("Confirming mock booking for listing {}", quote.listing_id);

    BookingConfirmation {
        booking_number: format!("BK-{:05}", booking_seq),
        confirmation_code: format!("PND-{}-{}", &code[..4], &code[4..]),
        receipt_id: format!("RCT-{:06}", receipt_seq),
        quote,
        confirmed_at: Utc::now(),
    }
}

/// Apply the cancellation policy
///
/// Requests made strictly more than the notice window before check-in get a
/// full refund; anything later, including after check-in, gets the partial rate.
pub fn evaluate_refund(
    amount: f64,
    check_in_at: DateTime<Utc>,
    requested_at: DateTime<Utc>,
    policy: &RefundPolicy,
) -> RefundDecision {
    let notice = check_in_at - requested_at;
    let hours_before_check_in = notice.num_hours();
    let full_window = chrono::Duration::hours(policy.full_refund_notice_hours);

    if notice > full_window {
        RefundDecision {
            kind: RefundKind::Full,
            refund_amount: round_cents(amount),
            hours_before_check_in,
        }
    } else {
        RefundDecision {
            kind: RefundKind::Partial,
            refund_amount: round_cents(amount * policy.partial_refund_rate.clamp(0.0, 1.0)),
            hours_before_check_in,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn create_listing(price: f64) -> Listing {
        Listing {
            id: 1,
            name: "Sarah M.".to_string(),
            address: "Oak Lane, Montgomery, AL".to_string(),
            price,
            rating: 4.9,
            distance_miles: 0.6,
            tags: vec![],
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_three_night_quote() {
        let quote = quote(&create_listing(48.0), date(2025, 6, 14), date(2025, 6, 17), 0.15).unwrap();

        assert_eq!(quote.nights, 3);
        assert_eq!(quote.subtotal, 144.0);
        assert_eq!(quote.platform_fee, 21.6);
        assert_eq!(quote.host_payout, 122.4);
    }

    #[test]
    fn test_same_day_rejected() {
        let err = quote(&create_listing(48.0), date(2025, 6, 14), date(2025, 6, 14), 0.15).unwrap_err();
        assert!(matches!(err, BookingError::InvalidDateRange { .. }));

        let err = quote(&create_listing(48.0), date(2025, 6, 17), date(2025, 6, 14), 0.15).unwrap_err();
        assert!(matches!(err, BookingError::InvalidDateRange { .. }));
    }

    #[test]
    fn test_confirmation_formats() {
        let quote = quote(&create_listing(48.0), date(2025, 6, 14), date(2025, 6, 17), 0.15).unwrap();
        let confirmation = confirm(quote.clone());

        assert_eq!(confirmation.quote, quote);
        assert!(confirmation.booking_number.starts_with("BK-"));
        assert_eq!(confirmation.booking_number.len(), 8);
        assert!(confirmation.receipt_id.starts_with("RCT-"));
        assert_eq!(confirmation.receipt_id.len(), 10);
        assert!(confirmation.confirmation_code.starts_with("PND-"));
        assert_eq!(confirmation.confirmation_code.len(), 12);
    }

    #[test]
    fn test_refund_full_with_notice() {
        let check_in = Utc.with_ymd_and_hms(2025, 6, 14, 15, 0, 0).unwrap();
        let decision = evaluate_refund(144.0, check_in, check_in - Duration::hours(48), &RefundPolicy::default());

        assert_eq!(decision.kind, RefundKind::Full);
        assert_eq!(decision.refund_amount, 144.0);
        assert_eq!(decision.hours_before_check_in, 48);
    }

    #[test]
    fn test_refund_partial_inside_window() {
        let check_in = Utc.with_ymd_and_hms(2025, 6, 14, 15, 0, 0).unwrap();
        let policy = RefundPolicy::default();

        let late = evaluate_refund(144.0, check_in, check_in - Duration::hours(2), &policy);
        assert_eq!(late.kind, RefundKind::Partial);
        assert_eq!(late.refund_amount, 72.0);

        // Exactly 24h is not "more than" 24h
        let boundary = evaluate_refund(144.0, check_in, check_in - Duration::hours(24), &policy);
        assert_eq!(boundary.kind, RefundKind::Partial);

        let after = evaluate_refund(144.0, check_in, check_in + Duration::hours(5), &policy);
        assert_eq!(after.kind, RefundKind::Partial);
        assert_eq!(after.hours_before_check_in, -5);
    }
}
