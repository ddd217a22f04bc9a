// Route exports
pub mod bookings;
pub mod listings;

use actix_web::{error, http::StatusCode, web, HttpResponse};
use crate::models::ErrorResponse;

pub use listings::AppState;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(listings::configure)
            .configure(bookings::configure),
    );
}

/// JSON error body with the given status
pub fn error_response(status: StatusCode, error: &str, message: impl Into<String>) -> HttpResponse {
    HttpResponse::build(status).json(ErrorResponse {
        error: error.to_string(),
        message: message.into(),
        status_code: status.as_u16(),
    })
}

/// JSON extractor config that answers malformed bodies with an [`ErrorResponse`]
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, req| {
        tracing::info!("JSON payload error on {}: {}", req.path(), err);
        let response = error_response(StatusCode::BAD_REQUEST, "invalid_json", format!("Invalid JSON: {}", err));
        error::InternalError::from_response(err, response).into()
    })
}

/// Path extractor config that answers unparsable segments with an [`ErrorResponse`]
///
/// A segment that does not parse cannot name a resource, so this is a 404.
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err, req| {
        tracing::debug!("Path error on {}: {}", req.path(), err);
        let response = error_response(StatusCode::NOT_FOUND, "not_found", format!("Invalid path: {}", err));
        error::InternalError::from_response(err, response).into()
    })
}

/// Query extractor config that answers malformed query strings with an [`ErrorResponse`]
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req| {
        let response = error_response(StatusCode::BAD_REQUEST, "invalid_query", format!("Invalid query: {}", err));
        error::InternalError::from_response(err, response).into()
    })
}
