use actix_web::{http::StatusCode, web, HttpResponse, Responder};
use validator::Validate;
use crate::core::{add_photos, confirm, evaluate_refund, quote, submit_review, BookingError};
use crate::models::{BookingQuote, PhotoValidationRequest, PhotoValidationResponse, QuoteRequest, RefundRequest, ReviewRequest};
use crate::routes::{error_response, listings::AppState};

/// Configure booking, payment and review routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/bookings/quote", web::post().to(quote_booking))
        .route("/bookings/confirm", web::post().to(confirm_booking))
        .route("/refunds/evaluate", web::post().to(evaluate_refund_request))
        .route("/reviews", web::post().to(create_review))
        .route("/photos/validate", web::post().to(validate_photos));
}

fn validation_failed(errors: validator::ValidationErrors) -> HttpResponse {
    tracing::info!("Validation failed: field_errors={:?}", errors);
    error_response(StatusCode::BAD_REQUEST, "validation_failed", errors.to_string())
}

fn booking_error(err: BookingError) -> HttpResponse {
    let (status, code) = match err {
        BookingError::UnknownListing(_) => (StatusCode::NOT_FOUND, "not_found"),
        BookingError::InvalidDateRange { .. } => (StatusCode::BAD_REQUEST, "invalid_dates"),
    };
    error_response(status, code, err.to_string())
}

fn build_quote(state: &AppState, req: &QuoteRequest) -> Result<BookingQuote, BookingError> {
    let listing = state
        .catalog
        .find(req.listing_id)
        .ok_or(BookingError::UnknownListing(req.listing_id))?;

    quote(
        listing,
        req.check_in,
        req.check_out,
        state.settings.pricing.platform_fee_rate,
    )
}

/// Price a stay
///
/// POST /api/v1/bookings/quote
///
/// Request body:
/// ```json
/// {
///   "listingId": 1,
///   "checkIn": "2025-06-14",
///   "checkOut": "2025-06-17"
/// }
/// ```
async fn quote_booking(
    state: web::Data<AppState>,
    req: web::Json<QuoteRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_failed(errors);
    }

    match build_quote(&state, &req) {
        Ok(quote) => HttpResponse::Ok().json(quote),
        Err(e) => booking_error(e),
    }
}

/// Confirm a stay (mock payment)
///
/// POST /api/v1/bookings/confirm
///
/// Takes the same body as the quote endpoint. No card is charged and nothing
/// is stored.
async fn confirm_booking(
    state: web::Data<AppState>,
    req: web::Json<QuoteRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_failed(errors);
    }

    match build_quote(&state, &req) {
        Ok(quote) => {
            let confirmation = confirm(quote);
            tracing::info!(
                "Mock booking {} confirmed for listing {} ({} nights, ${:.2})",
                confirmation.booking_number,
                confirmation.quote.listing_id,
                confirmation.quote.nights,
                confirmation.quote.subtotal
            );
            HttpResponse::Ok().json(confirmation)
        }
        Err(e) => booking_error(e),
    }
}

/// Evaluate a cancellation against the refund policy
///
/// POST /api/v1/refunds/evaluate
///
/// Request body:
/// ```json
/// {
///   "bookingNumber": "BK-10421",
///   "amount": 144.0,
///   "checkInAt": "2025-06-14T15:00:00Z",
///   "reason": "change-of-plans"
/// }
/// ```
async fn evaluate_refund_request(
    state: web::Data<AppState>,
    req: web::Json<RefundRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_failed(errors);
    }

    let requested_at = req.requested_at.unwrap_or_else(chrono::Utc::now);
    let decision = evaluate_refund(
        req.amount,
        req.check_in_at,
        requested_at,
        &state.settings.pricing.refund_policy(),
    );

    tracing::info!(
        "Refund for {} ({:?}): {:?} ${:.2}",
        req.booking_number,
        req.reason,
        decision.kind,
        decision.refund_amount
    );

    HttpResponse::Ok().json(decision)
}

/// Leave a rating for a stay
///
/// POST /api/v1/reviews
async fn create_review(
    state: web::Data<AppState>,
    req: web::Json<ReviewRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_failed(errors);
    }

    if state.catalog.find(req.listing_id).is_none() {
        return error_response(
            StatusCode::NOT_FOUND,
            "not_found",
            format!("No listing with id {}", req.listing_id),
        );
    }

    match submit_review(req.listing_id, req.stars, &req.highlights, req.comment.as_deref()) {
        Ok(review) => HttpResponse::Created().json(review),
        Err(e) => error_response(StatusCode::BAD_REQUEST, "invalid_review", e.to_string()),
    }
}

/// Check a batch of picked photos against the upload limits
///
/// POST /api/v1/photos/validate
async fn validate_photos(
    state: web::Data<AppState>,
    req: web::Json<PhotoValidationRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_failed(errors);
    }

    let limits = state.settings.uploads.photo_limits(req.max_files);
    match add_photos(&req.existing, &req.incoming, &limits) {
        Ok(selection) => HttpResponse::Ok().json(PhotoValidationResponse {
            accepted: selection.accepted,
            dropped: selection.dropped,
        }),
        Err(e) => error_response(StatusCode::UNPROCESSABLE_ENTITY, "invalid_photos", e.to_string()),
    }
}
